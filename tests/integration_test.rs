use mcp_forge::{
    analyzer::ProjectAnalyzer,
    cli::{generate, AnalysisMode, ForgeConfig, OutputFormat},
    extractor::PatternFamily,
    manifest::{Manifest, ManifestAssembler},
    serializer::{serialize_json, serialize_yaml},
    stub::StubSynthesizer,
};
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a temporary test project
fn create_test_project(files: Vec<(&str, &str)>) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    for (path, content) in files {
        let file_path = temp_dir.path().join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&file_path, content).expect("Failed to write test file");
    }

    temp_dir
}

fn build_manifest(root: &Path, mode: AnalysisMode) -> Manifest {
    let analysis = ProjectAnalyzer::new(root.to_path_buf(), mode)
        .analyze()
        .expect("Failed to analyze project");
    ManifestAssembler::new("auto-mcp").assemble(&analysis.tools, &analysis.resources)
}

fn tool_names(manifest: &Manifest) -> Vec<&str> {
    manifest.tools.iter().map(|t| t.name.as_str()).collect()
}

fn identifiers(manifest: &Manifest) -> Vec<&str> {
    manifest.tools.iter().map(|t| t.identifier.as_str()).collect()
}

#[test]
fn test_single_ping_route() {
    let temp_dir = create_test_project(vec![(
        "app.js",
        "app.get('/ping', (req, res) => res.send('pong'));",
    )]);

    let manifest = build_manifest(temp_dir.path(), AnalysisMode::Auto);

    assert_eq!(tool_names(&manifest), vec!["get_ping"]);
    assert!(manifest.resources.is_empty());
    assert!(manifest.prompts.is_empty());
}

#[test]
fn test_single_decorator_route() {
    let temp_dir =
        create_test_project(vec![("demo.py", "@app.post('/foo')\ndef foo():\n return 'ok'")]);

    let manifest = build_manifest(temp_dir.path(), AnalysisMode::Python);

    assert_eq!(tool_names(&manifest), vec!["post_foo"]);
}

#[test]
fn test_same_route_in_two_files() {
    let temp_dir = create_test_project(vec![
        ("a.js", "app.get('/x', h);"),
        ("b.js", "app.get('/x', h);"),
    ]);

    let manifest = build_manifest(temp_dir.path(), AnalysisMode::Auto);

    assert_eq!(tool_names(&manifest), vec!["get_x", "get_x"]);
    assert_eq!(identifiers(&manifest), vec!["get_x", "get_x_2"]);

    let stub = StubSynthesizer::render(&manifest).expect("Failed to render stub");
    assert!(stub.contains("def get_x():"));
    assert!(stub.contains("def get_x_2():"));
}

#[test]
fn test_no_matching_files() {
    let temp_dir = create_test_project(vec![
        ("README.md", "# nothing here"),
        ("notes.txt", "app.get('/x')"),
    ]);

    let manifest = build_manifest(temp_dir.path(), AnalysisMode::Auto);
    let json = serialize_json(&manifest).expect("Failed to serialize");

    assert!(manifest.tools.is_empty());
    assert!(manifest.resources.is_empty());
    assert!(json.contains("\"tools\": []"));
    assert!(json.contains("\"resources\": []"));
    assert!(json.contains("\"prompts\": []"));

    let stub = StubSynthesizer::render(&manifest).expect("Failed to render stub");
    assert!(!stub.contains("@tool("));
}

#[test]
fn test_express_fixture_end_to_end() {
    let temp_dir = create_test_project(vec![
        ("src/app.js", include_str!("fixtures/express_app.js")),
        ("config.json", "{\"port\": 3000}"),
        ("logs/app.log", "started"),
        ("node_modules/express/index.js", "app.get('/vendored', h);"),
    ]);

    let manifest = build_manifest(temp_dir.path(), AnalysisMode::Auto);

    assert_eq!(
        tool_names(&manifest),
        vec!["get_ping", "post_upload", "put_user_:id", "delete_user_:id", "get_root"]
    );
    assert_eq!(
        identifiers(&manifest),
        vec!["get_ping", "post_upload", "put_user__id", "delete_user__id", "get_root"]
    );
    assert_eq!(
        manifest.tools[0].description,
        "Express route detected: GET /ping (app.js)"
    );

    let resource_names: Vec<_> = manifest.resources.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(resource_names, vec!["config.json", "app.log"]);
    for resource in &manifest.resources {
        let path = resource.uri.strip_prefix("file://").expect("file URI");
        assert!(Path::new(path).is_absolute(), "URI should be absolute: {}", resource.uri);
    }
}

#[test]
fn test_fastapi_fixture_end_to_end() {
    let temp_dir = create_test_project(vec![
        ("service/main.py", include_str!("fixtures/fastapi_app.py")),
        ("service/settings.yaml", "debug: true"),
        (".env", "SECRET=1"),
        (".venv/lib/site.py", "@app.get('/vendored')"),
    ]);

    let analysis = ProjectAnalyzer::new(temp_dir.path().to_path_buf(), AnalysisMode::Auto)
        .analyze()
        .expect("Failed to analyze project");
    assert_eq!(analysis.family, PatternFamily::Decorator);

    let manifest =
        ManifestAssembler::new("auto-mcp").assemble(&analysis.tools, &analysis.resources);

    assert_eq!(tool_names(&manifest), vec!["get_health", "post_root", "get_{item_id}"]);
    assert_eq!(identifiers(&manifest), vec!["get_health", "post_root", "get__item_id_"]);
    let resource_names: Vec<_> = manifest.resources.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(resource_names, vec![".env", "settings.yaml"]);
}

#[test]
fn test_unreadable_file_does_not_abort_scan() {
    let temp_dir = create_test_project(vec![("z_app.js", "app.get('/alive', h);")]);
    std::fs::write(temp_dir.path().join("a_bundle.js"), [0x00u8, 0xc3, 0x28, 0xff, 0xfe])
        .expect("Failed to write binary file");

    let manifest = build_manifest(temp_dir.path(), AnalysisMode::Js);

    assert_eq!(tool_names(&manifest), vec!["get_alive"]);
}

#[test]
fn test_manifest_is_deterministic() {
    let temp_dir = create_test_project(vec![
        ("b/routes.js", "app.post('/b', h); app.get('/x', h);"),
        ("a/routes.js", "app.get('/x', h); app.delete('/a', h);"),
    ]);

    let first = serialize_json(&build_manifest(temp_dir.path(), AnalysisMode::Auto)).unwrap();
    let second = serialize_json(&build_manifest(temp_dir.path(), AnalysisMode::Auto)).unwrap();

    assert_eq!(first, second);
    let manifest = build_manifest(temp_dir.path(), AnalysisMode::Auto);
    assert_eq!(tool_names(&manifest), vec!["get_x", "delete_a", "post_b", "get_x"]);
    assert_eq!(identifiers(&manifest), vec!["get_x", "delete_a", "post_b", "get_x_2"]);
}

#[test]
fn test_generate_artifacts_in_yaml() {
    let temp_dir = create_test_project(vec![("app.js", "app.get('/ping', h);")]);
    let config = ForgeConfig {
        name: "ping-service".to_string(),
        format: OutputFormat::Yaml,
        ..ForgeConfig::default()
    };

    let artifacts = generate(temp_dir.path(), &config).expect("Failed to generate");

    assert_eq!(artifacts.tool_count, 1);
    assert!(artifacts.manifest.starts_with("name: ping-service\n"));
    assert!(artifacts.stub.contains(r#"app = MCPServer(name="ping-service", version="0.1.0")"#));
    assert!(artifacts.report.contains("Detected tools (1)"));

    let roundtrip: Manifest = serde_yaml::from_str(&artifacts.manifest).unwrap();
    assert_eq!(roundtrip.tools[0].name, "get_ping");
    assert_eq!(serialize_yaml(&roundtrip).unwrap(), artifacts.manifest);
}
