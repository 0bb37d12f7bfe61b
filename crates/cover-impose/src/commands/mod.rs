//! Print engine command records
//!
//! A [`CommandDocument`] holds one command list per emitted page. The
//! engine walks the lists in order:
//! 1. `SetGroupBegin` opens a new output group (physical sheet boundary)
//! 2. `CopyInputPage` copies one page from an input document
//! 3. `OverrideSheetName` carries the physical size of the page

mod assemble;

pub use assemble::{InsertedPage, assemble_commands};

use crate::constants::PAGE_SIZE_SHEET_INDEX;
use crate::geometry::Transform;
use crate::options::HostEnvironment;
use crate::paths::normalize_path;
use crate::types::PageSize;
use serde::{Deserialize, Serialize};

/// One instruction for the print engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum Command {
    SetGroupBegin,
    OverrideSheetName {
        index: u32,
        value: String,
    },
    #[serde(rename_all = "camelCase")]
    CopyInputPage {
        input_file_name: String,
        /// 1-based
        input_page: usize,
        copy_sheet_names: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        transformation: Option<Transform>,
    },
}

impl Command {
    pub fn group_begin() -> Self {
        Command::SetGroupBegin
    }

    pub fn override_sheet_name(index: u32, value: impl Into<String>) -> Self {
        Command::OverrideSheetName {
            index,
            value: value.into(),
        }
    }

    /// Sheet-name override announcing the physical page size
    pub fn page_size(size: PageSize) -> Self {
        Self::override_sheet_name(PAGE_SIZE_SHEET_INDEX, size.sheet_name())
    }

    /// Copy `input_page` of `input_file_name`; the path is normalized first
    pub fn copy_input_page(
        env: &HostEnvironment,
        input_file_name: &str,
        input_page: usize,
        transformation: Option<Transform>,
        copy_sheet_names: bool,
    ) -> Self {
        Command::CopyInputPage {
            input_file_name: normalize_path(input_file_name, env),
            input_page,
            copy_sheet_names,
            transformation,
        }
    }

    pub fn is_group_begin(&self) -> bool {
        matches!(self, Command::SetGroupBegin)
    }
}

/// Commands of one emitted page
pub type PageCommands = Vec<Command>;

/// Ordered command list consumed by the print engine
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommandDocument {
    pub pages: Vec<PageCommands>,
}

impl CommandDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Number of output groups (pages opening with `SetGroupBegin`)
    pub fn group_count(&self) -> usize {
        self.pages
            .iter()
            .filter(|page| page.first().is_some_and(Command::is_group_begin))
            .count()
    }

    pub fn to_json(&self) -> crate::types::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
