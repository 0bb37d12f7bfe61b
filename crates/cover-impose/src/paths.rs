//! Path conventions of the host storage layer

use crate::constants::*;
use crate::options::HostEnvironment;

/// `true` when the string has any non-whitespace content
pub fn is_string_valid(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Optional host parameter that is present and not blank
pub(crate) fn valid_param(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| is_string_valid(v))
}

/// Anchor a relative path in the job working directory.
///
/// Paths that already carry a scheme are returned unchanged; a blank path
/// resolves to the working directory itself.
pub fn path_to_working_dir(path: &str) -> String {
    if !is_string_valid(path) {
        return JOB_SCHEME.to_string();
    }
    if path.contains(SCHEME_SEPARATOR) {
        return path.to_string();
    }
    let relative = path.strip_prefix('/').unwrap_or(path);
    format!("{JOB_SCHEME}{relative}")
}

/// Rewrite `blob://` paths into the `share2://` form the print engine reads.
///
/// The scheme match ignores case and surrounding whitespace; every other
/// path is returned as given.
pub fn normalize_path(path: &str, env: &HostEnvironment) -> String {
    let trimmed = path.trim();
    let is_blob = trimmed
        .get(..BLOB_SCHEME.len())
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case(BLOB_SCHEME));

    if !is_blob {
        return path.to_string();
    }

    format!(
        "{SHARE2_SCHEME}{}/{}/blob/{}",
        env.production_type.to_lowercase(),
        env.job_id,
        &trimmed[BLOB_SCHEME.len()..]
    )
}

/// Replace the extension of the final path segment with `.%e`
pub(crate) fn with_output_placeholder(path: &str) -> String {
    let segment_start = path.rfind('/').map_or(0, |i| i + 1);
    let stem = match path[segment_start..].rfind('.') {
        Some(dot) => &path[..segment_start + dot],
        None => path,
    };
    format!("{stem}{OUTPUT_EXTENSION_PLACEHOLDER}")
}
