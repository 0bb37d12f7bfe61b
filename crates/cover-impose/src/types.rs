use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("Could not read metadata: {reason} at pageSizes[{offset}]")]
    Decode { offset: usize, reason: DecodeReason },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Missing resource: {0}")]
    MissingResource(String),
    #[error(
        "Group {group} requests {requested} pages but only {available} page sizes remain"
    )]
    GroupOverflow {
        group: usize,
        requested: usize,
        available: usize,
    },
    #[error("Groups declare {declared} pages but the size table holds {decoded}")]
    PageCountMismatch { declared: usize, decoded: usize },
    #[error("Metadata lists {groups} groups but {group_sizes} group sizes")]
    GroupCountMismatch { groups: usize, group_sizes: usize },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// Why a run-length size entry was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeReason {
    /// A sequence (or a non-positive / non-integer value) where a count belongs
    MalformedCount,
    /// Anything other than a `[width, height]` pair where a size belongs
    MalformedSize,
    /// A count at the end of the encoding with no size after it
    DanglingCount,
    /// Expanding the run would exceed the supported page total
    TooManyPages,
}

impl std::fmt::Display for DecodeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DecodeReason::MalformedCount => "malformed count",
            DecodeReason::MalformedSize => "malformed size",
            DecodeReason::DanglingCount => "count without a following size",
            DecodeReason::TooManyPages => "page count exceeds the supported maximum",
        })
    }
}

/// Physical page size in meters, serialized as `[width, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PageSize {
    pub width_m: f64,
    pub height_m: f64,
}

impl PageSize {
    pub fn new(width_m: f64, height_m: f64) -> Self {
        Self { width_m, height_m }
    }

    /// Sheet-name value understood by the print engine, e.g. `(0.21m,0.297m)`.
    ///
    /// Numbers are written in their shortest round-trip form, no rounding.
    /// Very small or very large values are spelled out in full, never in
    /// exponent notation (`0.0000001`, not `1e-7`).
    pub fn sheet_name(&self) -> String {
        format!("({}m,{}m)", self.width_m, self.height_m)
    }
}

impl From<[f64; 2]> for PageSize {
    fn from([width_m, height_m]: [f64; 2]) -> Self {
        Self { width_m, height_m }
    }
}

impl From<PageSize> for [f64; 2] {
    fn from(size: PageSize) -> Self {
        [size.width_m, size.height_m]
    }
}

/// Decoded run-length size table
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SizeTable {
    /// Total number of physical pages
    pub page_count: usize,
    /// One entry per physical page, in document order
    pub sizes: Vec<PageSize>,
}

/// Free-form group metadata as delivered by the host
pub type GroupLabel = BTreeMap<String, String>;

/// A contiguous run of pages belonging to one logical record
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub label: GroupLabel,
    pub page_count: usize,
    pub page_sizes: Vec<PageSize>,
    /// 1-based page numbers in the input document
    pub page_numbers: Vec<usize>,
}

/// All groups of one input document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetaContext {
    pub total_pages: usize,
    pub groups: Vec<Group>,
}

/// Counts describing a command document before it is built
#[derive(Debug, Clone, PartialEq)]
pub struct CommandStatistics {
    /// Pages in the input document
    pub source_pages: usize,
    /// Number of groups (records)
    pub groups: usize,
    /// Prefix pages inserted (one per non-empty group)
    pub prefix_pages_added: usize,
    /// Suffix pages inserted (one per non-empty group)
    pub suffix_pages_added: usize,
    /// Page-command entries in the resulting document
    pub output_pages: usize,
}
