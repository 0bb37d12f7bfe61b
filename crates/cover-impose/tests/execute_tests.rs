use cover_impose::*;
use serde_json::json;
use std::path::Path;
use tempfile::TempDir;

fn env() -> HostEnvironment {
    HostEnvironment {
        production_type: "Print".to_string(),
        job_id: "J1".to_string(),
        impositioning_template_path: "icm://Templates/impose.wfd".to_string(),
    }
}

fn write_metadata(dir: &Path, name: &str, value: serde_json::Value) {
    std::fs::write(dir.join(name), serde_json::to_vec(&value).unwrap()).unwrap();
}

fn sample_metadata() -> serde_json::Value {
    json!({
        "groupSizes": [2, 1],
        "pageSizes": [2, [0.297, 0.42], 1, [0.21, 0.297]],
        "groups": [{"name": "first"}, {"name": "second"}]
    })
}

fn read_command_file(dir: &Path, bundle: &BundledGenerateOutput) -> CommandDocument {
    let working_dir = WorkingDir::new(dir);
    let local = working_dir.resolve(&bundle.input_paths[0].path).unwrap();
    serde_json::from_slice(&std::fs::read(local).unwrap()).unwrap()
}

#[tokio::test]
async fn test_execute_writes_command_file() {
    let dir = TempDir::new().unwrap();
    write_metadata(dir.path(), "in.tno.json", sample_metadata());

    let params = Parameters {
        input_file_path: Some("in.tno".to_string()),
        prefix_page_path: Some("cover.pdf".to_string()),
        output_file_paths: Some("job://out/doc_%c.%e".to_string()),
        ..Default::default()
    };

    let output = execute(&params, &env(), &WorkingDir::new(dir.path()), &PagePlacement::default())
        .await
        .unwrap();

    assert_eq!(output.cover_page_generator.len(), 1);
    let bundle = &output.cover_page_generator[0];
    assert!(bundle.input_paths[0].path.starts_with("job://output/command-"));
    assert!(bundle.input_paths[0].path.ends_with(".json"));
    assert_eq!(bundle.output_path, "job://out/doc_%c.%e");
    assert_eq!(bundle.metadata_path.as_deref(), Some("job://out/doc_%c.%e.json"));

    let document = read_command_file(dir.path(), bundle);
    // cover, 1, 2, cover, 3
    assert_eq!(document.pages.len(), 5);
    assert_eq!(document.group_count(), 2);
    assert_eq!(
        document.pages[0][1],
        Command::copy_input_page(&env(), "job://cover.pdf", 1, None, true)
    );
    assert_eq!(
        document.pages[4][0],
        Command::copy_input_page(&env(), "job://in.tno", 3, None, true)
    );
}

#[tokio::test]
async fn test_execute_applies_cover_placement() {
    let dir = TempDir::new().unwrap();
    write_metadata(dir.path(), "meta.json", sample_metadata());

    let params = Parameters {
        input_file_path: Some("in.tno".to_string()),
        metadata_file_path: Some("meta.json".to_string()),
        suffix_page_path: Some("back.tno".to_string()),
        ..Default::default()
    };
    let placement = PagePlacement {
        rotation_degrees: Some(180.0),
        ..Default::default()
    };

    let output = execute(&params, &env(), &WorkingDir::new(dir.path()), &placement)
        .await
        .unwrap();
    let document = read_command_file(dir.path(), &output.cover_page_generator[0]);

    assert_eq!(document.pages.len(), 5);
    match &document.pages[2][0] {
        Command::CopyInputPage {
            input_file_name,
            transformation,
            ..
        } => {
            assert_eq!(input_file_name, "job://back.tno");
            assert_eq!(*transformation, Some(Transform::identity().rotate_180()));
        }
        other => panic!("Expected CopyInputPage, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_metadata() {
    let dir = TempDir::new().unwrap();
    let params = Parameters {
        input_file_path: Some("in.tno".to_string()),
        ..Default::default()
    };

    let result = execute(&params, &env(), &WorkingDir::new(dir.path()), &PagePlacement::default()).await;
    match result {
        Err(ImposeError::MissingResource(msg)) => {
            assert!(msg.contains("metadata file was not found"));
            assert!(msg.contains("job://in.tno.json"));
        }
        _ => panic!("Expected MissingResource error"),
    }
}

#[tokio::test]
async fn test_config_error_before_reading() {
    let dir = TempDir::new().unwrap();
    let params = Parameters {
        input_file_path: Some("in.tno".to_string()),
        prefix_page_path: Some("cover.png".to_string()),
        ..Default::default()
    };

    // Metadata is missing too, but parameters are checked first
    let result = execute(&params, &env(), &WorkingDir::new(dir.path()), &PagePlacement::default()).await;
    assert!(matches!(result, Err(ImposeError::Config(_))));
}

#[tokio::test]
async fn test_invalid_metadata_writes_nothing() {
    let dir = TempDir::new().unwrap();
    write_metadata(
        dir.path(),
        "in.tno.json",
        json!({"groupSizes": [1], "pageSizes": [1, 0.21], "groups": [{}]}),
    );
    let params = Parameters {
        input_file_path: Some("in.tno".to_string()),
        ..Default::default()
    };

    let result = execute(&params, &env(), &WorkingDir::new(dir.path()), &PagePlacement::default()).await;
    assert!(matches!(result, Err(ImposeError::Decode { .. })));
    assert!(!dir.path().join("output").exists());
}

#[tokio::test]
async fn test_malformed_json() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("in.tno.json"), b"{not json").unwrap();

    let result = load_metadata(&WorkingDir::new(dir.path()), "job://in.tno.json").await;
    assert!(matches!(result, Err(ImposeError::Json(_))));
}

#[test]
fn test_working_dir_resolve() {
    let working_dir = WorkingDir::new("/tmp/job");
    assert_eq!(
        working_dir.resolve("job://output/a.json").unwrap(),
        Path::new("/tmp/job/output/a.json")
    );
    assert_eq!(
        working_dir.resolve("job:///a.json").unwrap(),
        Path::new("/tmp/job/a.json")
    );
    assert_eq!(working_dir.resolve("local/a.json").unwrap(), Path::new("local/a.json"));
    assert!(matches!(
        working_dir.resolve("icm://a.json"),
        Err(ImposeError::Config(_))
    ));
}

#[test]
fn test_command_file_paths_are_unique() {
    let a = command_file_path();
    let b = command_file_path();
    assert!(a.starts_with("job://output/command-"));
    assert_ne!(a, b);
}

#[test]
fn test_resolved_paths() {
    let params = Parameters {
        input_file_path: Some("/in.tno".to_string()),
        suffix_page_path: Some("back.pdf".to_string()),
        ..Default::default()
    };
    let paths = ResolvedPaths::resolve(&params).unwrap();

    assert_eq!(paths.input_file_path, "job://in.tno");
    assert_eq!(paths.metadata_file_path, "job://in.tno.json");
    assert_eq!(paths.prefix_page_path, None);
    assert_eq!(paths.suffix_page_path.as_deref(), Some("job://back.pdf"));
    assert_eq!(paths.output_file_path, "job://in.%e");
}
