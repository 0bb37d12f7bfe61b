//! Shared constants for command generation
//!
//! This module centralizes path schemes and fixed values used throughout
//! the pipeline.

// =============================================================================
// Path Schemes
// =============================================================================

/// Host-managed working directory of the current job
pub const JOB_SCHEME: &str = "job://";

/// Shared storage
pub const SHARE_SCHEME: &str = "share://";

/// Content management repository
pub const ICM_SCHEME: &str = "icm://";

/// Blob storage, rewritten to `share2://` before reaching the print engine
pub const BLOB_SCHEME: &str = "blob://";

/// Scheme of normalized blob paths
pub const SHARE2_SCHEME: &str = "share2://";

/// Marker separating a scheme from the rest of a path
pub const SCHEME_SEPARATOR: &str = "://";

// =============================================================================
// Production Configuration Locations
// =============================================================================

pub const ICM_SAMPLE_SOLUTIONS_PREFIX: &str = "icm://Sample Solutions/";

pub const ICM_CUSTOM_SOLUTIONS_PREFIX: &str = "icm://Custom Solutions/";

pub const ICM_CONTENT_AUTHOR_PREFIX: &str =
    "icm:S:Production:S:UserResource//Interactive/StandardPackage/Templates/";

// =============================================================================
// Metadata
// =============================================================================

/// Upper bound on the pages one metadata file may describe
pub const MAX_PAGE_COUNT: usize = 10_000_000;

// =============================================================================
// Commands
// =============================================================================

/// Sheet-name slot that carries the physical page size
pub const PAGE_SIZE_SHEET_INDEX: u32 = 1;

/// Prefix and suffix documents always contribute their first page
pub const INSERTED_PAGE_NUMBER: usize = 1;

/// Directory (inside the job) receiving generated command files
pub const COMMAND_FILE_DIR: &str = "job://output/";

// =============================================================================
// Files
// =============================================================================

/// Appended to the input path when no metadata path is given
pub const METADATA_EXTENSION: &str = ".json";

/// Extension placeholder resolved by the print engine from the output type
pub const OUTPUT_EXTENSION_PLACEHOLDER: &str = ".%e";

/// Accepted extensions for prefix and suffix pages
pub const INSERTED_PAGE_EXTENSIONS: [&str; 2] = [".pdf", ".tno"];

pub const MISSING_METADATA_GUIDANCE: &str = "The metadata file was not found. Make sure that the file exists. If you did not specify the metadata file's path via input parameters, make sure that the JSON file is placed in the same directory as the corresponding TNO file.";

// =============================================================================
// Bundled Generate
// =============================================================================

pub const PRINT_CHANNEL: &str = "Print";

/// Input name under which the command file is handed to the generator
pub const COMMANDS_INPUT_NAME: &str = "Commands";
