//! Local access to host storage

use crate::commands::CommandDocument;
use crate::constants::*;
use crate::meta::Metadata;
use crate::types::*;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Local directory standing in for the job working directory (`job://`)
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingDir {
    root: PathBuf,
}

impl WorkingDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a host path onto the local filesystem.
    ///
    /// `job://` paths land below the root, plain paths are used as-is and
    /// any other scheme is rejected.
    pub fn resolve(&self, path: &str) -> Result<PathBuf> {
        if let Some(relative) = path.strip_prefix(JOB_SCHEME) {
            return Ok(self.root.join(relative.trim_start_matches('/')));
        }
        if path.contains(SCHEME_SEPARATOR) {
            return Err(ImposeError::Config(format!(
                "Cannot access {} outside the job working directory",
                path
            )));
        }
        Ok(PathBuf::from(path))
    }
}

/// Load and parse the metadata sidecar
pub async fn load_metadata(working_dir: &WorkingDir, path: &str) -> Result<Metadata> {
    let local = working_dir.resolve(path)?;
    if !tokio::fs::try_exists(&local).await? {
        return Err(ImposeError::MissingResource(format!(
            "{} (looked for {})",
            MISSING_METADATA_GUIDANCE, path
        )));
    }

    let bytes = tokio::fs::read(&local).await?;
    let metadata = tokio::task::spawn_blocking(move || Metadata::from_slice(&bytes)).await??;
    Ok(metadata)
}

/// Write the command document, creating parent directories as needed
pub async fn write_command_document(
    working_dir: &WorkingDir,
    document: &CommandDocument,
    path: &str,
) -> Result<PathBuf> {
    let local = working_dir.resolve(path)?;
    let json = document.to_json()?;

    if let Some(parent) = local.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&local, json).await?;
    Ok(local)
}

/// Fresh host path for a command file
pub fn command_file_path() -> String {
    format!("{COMMAND_FILE_DIR}command-{}.json", Uuid::new_v4())
}
