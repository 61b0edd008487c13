use std::collections::{HashMap, HashSet};

/// Replaces every character outside `[A-Za-z0-9_]` with `_`.
///
/// An empty name becomes `_`, and a name starting with a digit gets a leading `_`, so the
/// result is always a legal identifier.
pub fn sanitize_identifier(raw: &str) -> String {
    let mut identifier: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if identifier.is_empty() || identifier.starts_with(|c: char| c.is_ascii_digit()) {
        identifier.insert(0, '_');
    }
    identifier
}

/// Returns `true` if `identifier` is non-empty and only uses `[A-Za-z0-9_]`.
pub fn is_valid_identifier(identifier: &str) -> bool {
    !identifier.is_empty()
        && !identifier.starts_with(|c: char| c.is_ascii_digit())
        && identifier
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Allocates unique synthesis identifiers for one assembly pass.
///
/// The first occurrence of a base identifier keeps it unchanged; each later occurrence
/// gets `_<n>` appended, where `n` is the occurrence count starting at 2. If a suffixed
/// name is already taken by another tool the count keeps increasing until it is free.
///
/// ```
/// use mcp_forge::naming::IdentifierAllocator;
///
/// let mut allocator = IdentifierAllocator::new();
/// assert_eq!(allocator.allocate("get_x"), "get_x");
/// assert_eq!(allocator.allocate("get_x"), "get_x_2");
/// ```
#[derive(Debug, Default)]
pub struct IdentifierAllocator {
    occurrences: HashMap<String, usize>,
    taken: HashSet<String>,
}

impl IdentifierAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the identifier for the next tool whose display name is `raw_name`.
    pub fn allocate(&mut self, raw_name: &str) -> String {
        let base = sanitize_identifier(raw_name);
        let count = self.occurrences.entry(base.clone()).or_insert(0);
        *count += 1;

        let mut identifier = if *count == 1 {
            base.clone()
        } else {
            format!("{}_{}", base, count)
        };
        while self.taken.contains(&identifier) {
            *count += 1;
            identifier = format!("{}_{}", base, count);
        }

        self.taken.insert(identifier.clone());
        identifier
    }
}
