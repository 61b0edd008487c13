use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Directory names that are never descended into.
///
/// Covers dependency caches, version-control metadata, virtual environments,
/// bytecode caches and build output.
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "bower_components",
    ".git",
    ".hg",
    ".svn",
    ".venv",
    "venv",
    ".tox",
    "__pycache__",
    ".mypy_cache",
    ".pytest_cache",
    "dist",
    "build",
    "target",
];

/// Extensions of files that declare routes with `app.get('/path', ...)` style calls.
pub const CALL_STYLE_EXTENSIONS: &[&str] = &["js", "ts", "mjs", "cjs", "jsx", "tsx"];

/// Extensions of files that declare routes with `@app.get('/path')` decorators.
pub const DECORATOR_EXTENSIONS: &[&str] = &["py"];

/// Extensions of structured configuration files.
pub const CONFIG_EXTENSIONS: &[&str] = &["json", "yaml", "yml", "toml", "ini", "cfg", "conf"];

/// Decides whether a path found during the walk should be scanned at all.
///
/// A path is excluded when any of its segments is one of [`EXCLUDED_DIRS`]. The test is
/// applied to paths relative to the scan root, so a project that itself lives under a
/// directory called `build` is still scanned.
pub struct PathFilter;

impl PathFilter {
    /// Returns `true` if `path` lies inside (or is) an excluded directory.
    pub fn is_excluded(path: &Path) -> bool {
        path.components().any(|component| match component {
            Component::Normal(segment) => segment
                .to_str()
                .map(|name| EXCLUDED_DIRS.contains(&name))
                .unwrap_or(false),
            _ => false,
        })
    }
}

/// Source language family, inferred from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// JavaScript / TypeScript, scanned with the call-style pattern
    JavaScript,
    /// Python, scanned with the decorator pattern
    Python,
}

impl Language {
    /// Infers the language family of a file from its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if CALL_STYLE_EXTENSIONS.contains(&ext) {
            Some(Language::JavaScript)
        } else if DECORATOR_EXTENSIONS.contains(&ext) {
            Some(Language::Python)
        } else {
            None
        }
    }
}

/// Classification of a scanned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Code file that may contain route declarations
    Source(Language),
    /// Configuration or environment file, a resource candidate
    Config,
    /// Anything else
    Other,
}

impl FileKind {
    /// Classifies a file by its name and extension.
    pub fn classify(path: &Path) -> Self {
        if let Some(language) = Language::from_path(path) {
            return FileKind::Source(language);
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        if file_name == ".env" || file_name.starts_with(".env.") {
            return FileKind::Config;
        }

        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if CONFIG_EXTENSIONS.contains(&ext) || ext == "env" => FileKind::Config,
            _ => FileKind::Other,
        }
    }
}

/// A file discovered during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Absolute path to the file
    pub path: PathBuf,
    /// How the file was classified
    pub kind: FileKind,
}

/// File scanner for traversing project directories.
///
/// The `FileScanner` recursively walks a project directory and classifies every regular
/// file it finds. Entries rejected by [`PathFilter`] are pruned, so nothing below an
/// excluded directory is ever visited. Entries are visited in file-name order, which
/// makes every later stage deterministic.
///
/// # Example
///
/// ```no_run
/// use mcp_forge::scanner::FileScanner;
/// use std::path::PathBuf;
///
/// let scanner = FileScanner::new(PathBuf::from("./my-project"));
/// let result = scanner.scan().unwrap();
/// println!("Found {} files", result.files.len());
/// ```
pub struct FileScanner {
    root_path: PathBuf,
    skip_dirs: Vec<PathBuf>,
}

/// Result of directory scanning operation.
#[derive(Debug)]
pub struct ScanResult {
    /// Absolute, canonical scan root
    pub root: PathBuf,
    /// Every file that survived the path filter, in walk order
    pub files: Vec<ScannedFile>,
    /// Warning messages for any issues encountered (e.g., inaccessible directories)
    pub warnings: Vec<String>,
}

impl ScanResult {
    /// Source files of the given language, in walk order.
    pub fn sources(&self, language: Language) -> impl Iterator<Item = &Path> + '_ {
        self.files
            .iter()
            .filter(move |f| f.kind == FileKind::Source(language))
            .map(|f| f.path.as_path())
    }

    /// Whether at least one source file of the given language was found.
    pub fn has_sources(&self, language: Language) -> bool {
        self.sources(language).next().is_some()
    }

    /// Configuration and environment files, in walk order.
    pub fn config_files(&self) -> impl Iterator<Item = &Path> + '_ {
        self.files
            .iter()
            .filter(|f| f.kind == FileKind::Config)
            .map(|f| f.path.as_path())
    }
}

impl FileScanner {
    /// Creates a new `FileScanner` for the specified root directory.
    pub fn new(root_path: PathBuf) -> Self {
        Self {
            root_path,
            skip_dirs: Vec::new(),
        }
    }

    /// Prunes `dir` from the walk, along with everything below it.
    ///
    /// Used for the output directory, so artifacts of a previous run are never read back
    /// as project files. A directory that cannot be resolved is ignored.
    pub fn skip_dir(mut self, dir: &Path) -> Self {
        match fs::canonicalize(dir) {
            Ok(dir) => self.skip_dirs.push(dir),
            Err(e) => debug!("Not skipping {}: {}", dir.display(), e),
        }
        self
    }

    /// Scans the directory tree and classifies every file.
    ///
    /// If any directories or files cannot be accessed, warnings are logged and added to
    /// the result, but scanning continues.
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory cannot be resolved or listed.
    pub fn scan(&self) -> Result<ScanResult> {
        let root = fs::canonicalize(&self.root_path).with_context(|| {
            format!("Failed to resolve project root: {}", self.root_path.display())
        })?;
        debug!("Scanning {}", root.display());

        let mut files = Vec::new();
        let mut warnings = Vec::new();

        for entry in WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                if e.depth() == 0 {
                    return true;
                }
                let relative = e.path().strip_prefix(&root).unwrap_or(e.path());
                !PathFilter::is_excluded(relative)
                    && !self.skip_dirs.iter().any(|dir| dir == e.path())
            })
        {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }
                    let path = entry.into_path();
                    let kind = FileKind::classify(&path);
                    files.push(ScannedFile { path, kind });
                }
                Err(e) if e.depth() == 0 => {
                    return Err(e).with_context(|| {
                        format!("Failed to read project root: {}", root.display())
                    });
                }
                Err(e) => {
                    let warning = format!("Failed to access path: {}", e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        debug!("Scan found {} files", files.len());

        Ok(ScanResult {
            root,
            files,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn file_names(result: &ScanResult) -> Vec<String> {
        result
            .files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_path_filter_excludes_denied_segments() {
        assert!(PathFilter::is_excluded(Path::new("node_modules")));
        assert!(PathFilter::is_excluded(Path::new("web/node_modules/express/index.js")));
        assert!(PathFilter::is_excluded(Path::new("a/b/c/.git/HEAD")));
        assert!(PathFilter::is_excluded(Path::new("svc/__pycache__/app.cpython-311.pyc")));
        assert!(PathFilter::is_excluded(Path::new(".venv/lib/site.py")));
    }

    #[test]
    fn test_path_filter_keeps_lookalike_names() {
        assert!(!PathFilter::is_excluded(Path::new("src/app.js")));
        assert!(!PathFilter::is_excluded(Path::new(".gitignore")));
        assert!(!PathFilter::is_excluded(Path::new("node_modules_backup/app.js")));
        assert!(!PathFilter::is_excluded(Path::new("")));
    }

    #[test]
    fn test_classify_files() {
        assert_eq!(
            FileKind::classify(Path::new("server.ts")),
            FileKind::Source(Language::JavaScript)
        );
        assert_eq!(
            FileKind::classify(Path::new("routes.mjs")),
            FileKind::Source(Language::JavaScript)
        );
        assert_eq!(
            FileKind::classify(Path::new("main.py")),
            FileKind::Source(Language::Python)
        );
        assert_eq!(FileKind::classify(Path::new("settings.yaml")), FileKind::Config);
        assert_eq!(FileKind::classify(Path::new(".env")), FileKind::Config);
        assert_eq!(FileKind::classify(Path::new(".env.local")), FileKind::Config);
        assert_eq!(FileKind::classify(Path::new("README.md")), FileKind::Other);
        assert_eq!(FileKind::classify(Path::new("Makefile")), FileKind::Other);
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let scanner = FileScanner::new(temp_dir.path().to_path_buf());
        let result = scanner.scan().unwrap();

        assert!(result.files.is_empty());
        assert!(result.warnings.is_empty());
        assert!(!result.has_sources(Language::JavaScript));
        assert!(!result.has_sources(Language::Python));
    }

    #[test]
    fn test_scan_nested_directories_in_name_order() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("src/routes")).unwrap();
        fs::write(root.join("b.js"), "").unwrap();
        fs::write(root.join("a.js"), "").unwrap();
        fs::write(root.join("src/routes/users.js"), "").unwrap();
        fs::write(root.join("src/app.py"), "").unwrap();

        let scanner = FileScanner::new(root.to_path_buf());
        let result = scanner.scan().unwrap();

        assert_eq!(file_names(&result), vec!["a.js", "b.js", "app.py", "users.js"]);
        assert_eq!(result.sources(Language::JavaScript).count(), 3);
        assert_eq!(result.sources(Language::Python).count(), 1);
        assert!(result.files.iter().all(|f| f.path.is_absolute()));
    }

    #[test]
    fn test_scan_never_visits_excluded_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("node_modules/express/lib")).unwrap();
        fs::create_dir_all(root.join("packages/web/node_modules/x")).unwrap();
        fs::create_dir_all(root.join(".git/hooks")).unwrap();
        fs::create_dir_all(root.join("api/__pycache__")).unwrap();
        fs::create_dir_all(root.join(".venv/lib")).unwrap();
        fs::write(root.join("node_modules/express/lib/router.js"), "app.get('/x')").unwrap();
        fs::write(root.join("packages/web/node_modules/x/index.js"), "").unwrap();
        fs::write(root.join(".git/hooks/pre-commit.py"), "").unwrap();
        fs::write(root.join("api/__pycache__/main.py"), "").unwrap();
        fs::write(root.join(".venv/lib/site.py"), "").unwrap();
        fs::write(root.join("packages/web/server.js"), "").unwrap();

        let scanner = FileScanner::new(root.to_path_buf());
        let result = scanner.scan().unwrap();

        assert_eq!(file_names(&result), vec!["server.js"]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_scan_root_inside_excluded_name_is_still_scanned() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("build").join("project");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("app.js"), "").unwrap();

        let result = FileScanner::new(root).scan().unwrap();

        assert_eq!(file_names(&result), vec!["app.js"]);
    }

    #[test]
    fn test_scan_collects_config_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir(root.join("config")).unwrap();
        fs::write(root.join(".env"), "KEY=1").unwrap();
        fs::write(root.join("config/db.toml"), "").unwrap();
        fs::write(root.join("notes.txt"), "").unwrap();

        let result = FileScanner::new(root.to_path_buf()).scan().unwrap();
        let configs: Vec<_> = result
            .config_files()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(configs, vec![".env", "db.toml"]);
    }

    #[test]
    fn test_scan_prunes_skipped_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("mcp-out/report")).unwrap();
        fs::write(root.join("mcp-out/mcp-manifest.json"), "{}").unwrap();
        fs::write(root.join("mcp-out/server_stub_fastmcp.py"), "").unwrap();
        fs::write(root.join("main.py"), "").unwrap();

        let result = FileScanner::new(root.to_path_buf())
            .skip_dir(&root.join("mcp-out"))
            .scan()
            .unwrap();

        assert_eq!(file_names(&result), vec!["main.py"]);
    }

    #[test]
    fn test_skipping_the_root_itself_keeps_the_walk() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("app.js"), "").unwrap();

        let result = FileScanner::new(temp_dir.path().to_path_buf())
            .skip_dir(temp_dir.path())
            .skip_dir(&temp_dir.path().join("not-created-yet"))
            .scan()
            .unwrap();

        assert_eq!(file_names(&result), vec!["app.js"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_unreadable_root_is_an_error() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("locked");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("app.js"), "app.get('/x', h);").unwrap();
        fs::set_permissions(&root, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users bypass permission bits; nothing to check then.
        let privileged = fs::read_dir(&root).is_ok();
        let result = FileScanner::new(root.clone()).scan();
        fs::set_permissions(&root, fs::Permissions::from_mode(0o755)).unwrap();
        if privileged {
            return;
        }

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read project root"));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_unreadable_subdirectory_is_a_warning() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let locked = root.join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(root.join("app.js"), "").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let privileged = fs::read_dir(&locked).is_ok();
        let result = FileScanner::new(root.to_path_buf()).scan();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if privileged {
            return;
        }

        let result = result.unwrap();
        assert_eq!(file_names(&result), vec!["app.js"]);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_scan_missing_root_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let scanner = FileScanner::new(temp_dir.path().join("does-not-exist"));

        assert!(scanner.scan().is_err());
    }
}
