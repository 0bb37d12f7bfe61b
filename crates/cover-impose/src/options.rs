use crate::constants::*;
use crate::paths::{path_to_working_dir, valid_param, with_output_placeholder};
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Values the host supplies about the running job
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostEnvironment {
    /// Production type, lowercased into normalized blob paths
    pub production_type: String,
    pub job_id: String,
    /// Template the bundled generate step runs with
    pub impositioning_template_path: String,
}

impl HostEnvironment {
    /// Load the environment from a JSON file
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let env = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse environment: {}", e)))?;
        Ok(env)
    }
}

/// Output format produced by the print engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputType {
    #[serde(rename = "PDF")]
    Pdf,
    #[serde(rename = "AFP")]
    Afp,
    /// Native format, written with a metadata sidecar
    #[default]
    InspireNative,
    #[serde(rename = "MTIFF")]
    Mtiff,
}

impl OutputType {
    pub fn writes_metadata(self) -> bool {
        self == OutputType::InspireNative
    }
}

/// Where the production configuration path is anchored.
///
/// Unknown prefixes read as [`ProductionConfigurationType::Custom`], so the
/// path is used as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ProductionConfigurationType {
    WorkingFolder,
    Share,
    Icm,
    #[default]
    Custom,
    IcmSampleSolutions,
    IcmCustomSolutions,
    IcmContentAuthor,
}

impl ProductionConfigurationType {
    /// Prefix `path` with the location this type stands for
    pub fn to_absolute(self, path: &str) -> String {
        match self {
            ProductionConfigurationType::WorkingFolder => format!("{JOB_SCHEME}{path}"),
            ProductionConfigurationType::Share => format!("{SHARE_SCHEME}{path}"),
            ProductionConfigurationType::Icm => format!("{ICM_SCHEME}{path}"),
            ProductionConfigurationType::Custom => path.to_string(),
            ProductionConfigurationType::IcmSampleSolutions => {
                format!("{ICM_SAMPLE_SOLUTIONS_PREFIX}{path}")
            }
            ProductionConfigurationType::IcmCustomSolutions => {
                format!("{ICM_CUSTOM_SOLUTIONS_PREFIX}{path}")
            }
            ProductionConfigurationType::IcmContentAuthor => {
                format!("{ICM_CONTENT_AUTHOR_PREFIX}{path}")
            }
        }
    }
}

impl<'de> Deserialize<'de> for ProductionConfigurationType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "WorkingFolder" => ProductionConfigurationType::WorkingFolder,
            "Share" => ProductionConfigurationType::Share,
            "Icm" => ProductionConfigurationType::Icm,
            "IcmSampleSolutions" => ProductionConfigurationType::IcmSampleSolutions,
            "IcmCustomSolutions" => ProductionConfigurationType::IcmCustomSolutions,
            "IcmContentAuthor" => ProductionConfigurationType::IcmContentAuthor,
            _ => ProductionConfigurationType::Custom,
        })
    }
}

/// Host parameters of one invocation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Parameters {
    // Input
    pub input_file_path: Option<String>,
    pub metadata_file_path: Option<String>,

    // Inserted pages
    pub prefix_page_path: Option<String>,
    #[serde(rename = "sufixPagePath", alias = "suffixPagePath")]
    pub suffix_page_path: Option<String>,

    // Output
    pub output_file_paths: Option<String>,
    pub output_file_path: Option<String>,
    pub output_type: OutputType,

    // Production configuration
    pub production_configuration_type: Option<ProductionConfigurationType>,
    pub production_configuration: Option<String>,
}

impl Parameters {
    /// Load parameters from a JSON file
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let params = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse parameters: {}", e)))?;
        Ok(params)
    }

    /// Save parameters to a JSON file
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ImposeError::Config(format!("Failed to serialize parameters: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Check every parameter that can be rejected before work starts
    pub fn validate(&self) -> Result<()> {
        self.input_file_path()?;
        self.prefix_page_path()?;
        self.suffix_page_path()?;
        Ok(())
    }

    pub fn input_file_path(&self) -> Result<String> {
        valid_param(&self.input_file_path)
            .map(path_to_working_dir)
            .ok_or_else(|| {
                ImposeError::Config("Input file path is not valid or file not exists".to_string())
            })
    }

    /// Explicit metadata path, or `<input>.json` next to the input file
    pub fn metadata_file_path(&self, input_file_path: &str) -> String {
        match valid_param(&self.metadata_file_path) {
            Some(path) => path_to_working_dir(path),
            None => format!("{input_file_path}{METADATA_EXTENSION}"),
        }
    }

    pub fn prefix_page_path(&self) -> Result<Option<String>> {
        inserted_page_path(&self.prefix_page_path, "Prefix")
    }

    pub fn suffix_page_path(&self) -> Result<Option<String>> {
        inserted_page_path(&self.suffix_page_path, "Suffix")
    }

    /// Output pattern, explicit output path, or the input path with a `.%e`
    /// extension placeholder, in that order
    pub fn output_file_path(&self) -> Result<String> {
        if let Some(pattern) = valid_param(&self.output_file_paths) {
            return Ok(pattern.to_string());
        }
        if let Some(path) = valid_param(&self.output_file_path) {
            return Ok(path_to_working_dir(path));
        }
        Ok(with_output_placeholder(&self.input_file_path()?))
    }

    /// Absolute production configuration path, empty when not configured
    pub fn production_configuration_path(&self) -> String {
        match (
            self.production_configuration_type,
            valid_param(&self.production_configuration),
        ) {
            (Some(kind), Some(path)) => kind.to_absolute(path),
            _ => String::new(),
        }
    }
}

fn inserted_page_path(value: &Option<String>, role: &str) -> Result<Option<String>> {
    let Some(path) = valid_param(value) else {
        return Ok(None);
    };

    if INSERTED_PAGE_EXTENSIONS
        .iter()
        .any(|extension| path.ends_with(extension))
    {
        Ok(Some(path_to_working_dir(path)))
    } else {
        Err(ImposeError::Config(format!(
            "{} page path must be a valid PDF or TNO file: {}",
            role, path
        )))
    }
}

