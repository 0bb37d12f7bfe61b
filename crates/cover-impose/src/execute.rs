//! End-to-end command generation
//!
//! This module orchestrates one invocation:
//! 1. Resolve and validate host parameters
//! 2. Load the metadata sidecar and build the group context
//! 3. Assemble the command document and write it to the job
//! 4. Describe the generate step that consumes it

use crate::bundle::{ExecuteOutput, bundle_generate};
use crate::commands::{CommandDocument, InsertedPage, assemble_commands};
use crate::geometry::PagePlacement;
use crate::io::{WorkingDir, command_file_path, load_metadata, write_command_document};
use crate::meta::build_meta_context;
use crate::options::{HostEnvironment, Parameters};
use crate::types::*;

/// Host paths of one invocation, all checked before any file is touched
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPaths {
    pub input_file_path: String,
    pub metadata_file_path: String,
    pub prefix_page_path: Option<String>,
    pub suffix_page_path: Option<String>,
    pub output_file_path: String,
}

impl ResolvedPaths {
    pub fn resolve(params: &Parameters) -> Result<Self> {
        params.validate()?;

        let input_file_path = params.input_file_path()?;
        Ok(Self {
            metadata_file_path: params.metadata_file_path(&input_file_path),
            prefix_page_path: params.prefix_page_path()?,
            suffix_page_path: params.suffix_page_path()?,
            output_file_path: params.output_file_path()?,
            input_file_path,
        })
    }
}

/// Assemble commands for resolved paths, placing inserted pages with `placement`
pub fn generate_commands(
    meta: &MetaContext,
    paths: &ResolvedPaths,
    env: &HostEnvironment,
    placement: &PagePlacement,
) -> CommandDocument {
    let transformation = placement.to_transform();
    let inserted = |path: &Option<String>| {
        path.as_ref()
            .map(|p| InsertedPage::new(p.as_str()).with_transformation(transformation))
    };
    let prefix = inserted(&paths.prefix_page_path);
    let suffix = inserted(&paths.suffix_page_path);

    assemble_commands(
        meta,
        &paths.input_file_path,
        prefix.as_ref(),
        suffix.as_ref(),
        env,
    )
}

/// Run the whole pipeline; nothing is written unless every step before the
/// write succeeds
pub async fn execute(
    params: &Parameters,
    env: &HostEnvironment,
    working_dir: &WorkingDir,
    placement: &PagePlacement,
) -> Result<ExecuteOutput> {
    let paths = ResolvedPaths::resolve(params)?;

    log::info!("Reading metadata from {}", paths.metadata_file_path);
    let metadata = load_metadata(working_dir, &paths.metadata_file_path).await?;
    let meta = build_meta_context(&metadata)?;
    log::info!(
        "{} pages in {} groups",
        meta.total_pages,
        meta.groups.len()
    );

    let document = generate_commands(&meta, &paths, env, placement);

    let command_file = command_file_path();
    let written = write_command_document(working_dir, &document, &command_file).await?;
    log::info!(
        "Wrote {} page entries to {}",
        document.page_count(),
        written.display()
    );

    let bundle = bundle_generate(
        &command_file,
        env,
        &paths.output_file_path,
        params.output_type,
        &params.production_configuration_path(),
    );

    Ok(ExecuteOutput {
        cover_page_generator: vec![bundle],
    })
}
