pub mod commands;
pub mod constants;
pub mod geometry;
pub mod meta;
mod bundle;
mod execute;
mod io;
mod options;
mod paths;
mod stats;
mod types;

pub use bundle::{BundledGenerateOutput, ExecuteOutput, InputPath, bundle_generate};
pub use commands::{Command, CommandDocument, InsertedPage, PageCommands, assemble_commands};
pub use execute::{ResolvedPaths, execute, generate_commands};
pub use geometry::{PagePlacement, Transform};
pub use io::{WorkingDir, command_file_path, load_metadata, write_command_document};
pub use meta::{Metadata, build_meta_context};
pub use options::*;
pub use paths::{is_string_valid, normalize_path, path_to_working_dir};
pub use stats::calculate_statistics;
pub use types::*;
