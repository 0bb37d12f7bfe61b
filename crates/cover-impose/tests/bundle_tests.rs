use cover_impose::*;
use serde_json::json;

fn env() -> HostEnvironment {
    HostEnvironment {
        production_type: "Print".to_string(),
        job_id: "J1".to_string(),
        impositioning_template_path: "icm://Templates/impose.wfd".to_string(),
    }
}

#[test]
fn test_inspire_native_adds_metadata_path() {
    let bundle = bundle_generate(
        "job://output/command-1.json",
        &env(),
        "blob://out/doc.%e",
        OutputType::InspireNative,
        "",
    );

    assert_eq!(bundle.channel, "Print");
    assert_eq!(bundle.template, "icm://Templates/impose.wfd");
    assert_eq!(bundle.output_path, "share2://print/J1/blob/out/doc.%e");
    assert_eq!(
        bundle.metadata_path.as_deref(),
        Some("share2://print/J1/blob/out/doc.%e.json")
    );
    assert_eq!(bundle.production_configuration, None);
    assert_eq!(
        bundle.input_paths,
        vec![InputPath {
            name: "Commands".to_string(),
            path: "job://output/command-1.json".to_string(),
        }]
    );
}

#[test]
fn test_other_output_types_skip_metadata() {
    for output_type in [OutputType::Pdf, OutputType::Afp, OutputType::Mtiff] {
        let bundle = bundle_generate("cmd.json", &env(), "out.%e", output_type, "");
        assert_eq!(bundle.metadata_path, None);
    }
}

#[test]
fn test_production_configuration_is_normalized() {
    let bundle = bundle_generate(
        "cmd.json",
        &env(),
        "out.%e",
        OutputType::Pdf,
        "blob://configs/pc.json",
    );
    assert_eq!(
        bundle.production_configuration.as_deref(),
        Some("share2://print/J1/blob/configs/pc.json")
    );
}

#[test]
fn test_bundle_json_shape() {
    let bundle = bundle_generate("cmd.json", &env(), "job://out.%e", OutputType::Afp, "icm://pc.json");
    let value = serde_json::to_value(&bundle).unwrap();

    assert_eq!(
        value,
        json!({
            "channel": "Print",
            "template": "icm://Templates/impose.wfd",
            "outputType": "AFP",
            "outputPath": "job://out.%e",
            "inputPaths": [{"name": "Commands", "path": "cmd.json"}],
            "productionConfiguration": "icm://pc.json"
        })
    );
}
