//! Metadata decoding
//!
//! The host delivers a JSON sidecar next to every input document:
//! 1. `pageSizes` - run-length encoded physical page sizes
//! 2. `groupSizes` - number of pages in each group
//! 3. `groups` - free-form labels, one per group
//!
//! Decoding turns this into a [`MetaContext`] with per-group sizes and
//! global page numbers.

mod context;
mod decode;

pub use context::{build_group, build_groups, build_meta_context};
pub use decode::decode_page_sizes;

use crate::types::GroupLabel;
use serde::{Deserialize, Serialize};

/// Raw metadata sidecar as written by the host
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub group_sizes: Vec<usize>,
    /// Alternating `count, [width, height]` entries
    #[serde(default)]
    pub page_sizes: Vec<serde_json::Value>,
    #[serde(default)]
    pub groups: Vec<GroupLabel>,
}

impl Metadata {
    /// Parse metadata from JSON bytes
    pub fn from_slice(bytes: &[u8]) -> crate::types::Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
