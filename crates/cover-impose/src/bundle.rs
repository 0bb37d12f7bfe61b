//! Bundled generate step handed back to the host

use crate::constants::*;
use crate::options::{HostEnvironment, OutputType};
use crate::paths::{is_string_valid, normalize_path};
use serde::{Deserialize, Serialize};

/// Named input of the generate step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputPath {
    pub name: String,
    pub path: String,
}

/// Generate step that turns the command file into the final output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundledGenerateOutput {
    pub channel: String,
    pub template: String,
    pub output_type: OutputType,
    pub output_path: String,
    pub input_paths: Vec<InputPath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_configuration: Option<String>,
}

/// Result of one invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteOutput {
    pub cover_page_generator: Vec<BundledGenerateOutput>,
}

/// Build the generate step for a written command file
pub fn bundle_generate(
    command_file_path: &str,
    env: &HostEnvironment,
    output_file_path: &str,
    output_type: OutputType,
    production_configuration_path: &str,
) -> BundledGenerateOutput {
    let metadata_path = output_type
        .writes_metadata()
        .then(|| normalize_path(&format!("{output_file_path}{METADATA_EXTENSION}"), env));

    let production_configuration = normalize_path(production_configuration_path, env);

    BundledGenerateOutput {
        channel: PRINT_CHANNEL.to_string(),
        template: env.impositioning_template_path.clone(),
        output_type,
        output_path: normalize_path(output_file_path, env),
        input_paths: vec![InputPath {
            name: COMMANDS_INPUT_NAME.to_string(),
            path: command_file_path.to_string(),
        }],
        metadata_path,
        production_configuration: is_string_valid(&production_configuration)
            .then_some(production_configuration),
    }
}
