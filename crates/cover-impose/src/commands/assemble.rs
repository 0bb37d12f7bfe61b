//! Command document assembly

use super::{Command, CommandDocument, PageCommands};
use crate::constants::INSERTED_PAGE_NUMBER;
use crate::geometry::Transform;
use crate::options::HostEnvironment;
use crate::types::*;

/// Extra page copied in front of or after every group
#[derive(Debug, Clone, PartialEq)]
pub struct InsertedPage {
    pub path: String,
    /// Placement of the page on the sheet, omitted from the command when `None`
    pub transformation: Option<Transform>,
}

impl InsertedPage {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            transformation: None,
        }
    }

    pub fn with_transformation(mut self, transformation: Option<Transform>) -> Self {
        self.transformation = transformation;
        self
    }

    fn copy_command(&self, env: &HostEnvironment) -> Command {
        Command::copy_input_page(
            env,
            &self.path,
            INSERTED_PAGE_NUMBER,
            self.transformation,
            true,
        )
    }
}

/// Build the command document for all groups.
///
/// Every content page gets its own entry. Without a prefix the first page of
/// a group opens the group itself; with a prefix, a separate prefix entry
/// opens it and precedes the first content page. A suffix entry follows the
/// last content page of each group.
pub fn assemble_commands(
    meta: &MetaContext,
    input_file_name: &str,
    prefix: Option<&InsertedPage>,
    suffix: Option<&InsertedPage>,
    env: &HostEnvironment,
) -> CommandDocument {
    let mut document = CommandDocument::default();

    for group in &meta.groups {
        let last = group.page_sizes.len().saturating_sub(1);

        for (i, (&size, &page_number)) in group
            .page_sizes
            .iter()
            .zip(&group.page_numbers)
            .enumerate()
        {
            let mut page: PageCommands = Vec::with_capacity(4);

            if i == 0 {
                match prefix {
                    None => {
                        page.push(Command::group_begin());
                        page.push(Command::page_size(size));
                    }
                    Some(prefix) => document.pages.push(vec![
                        Command::group_begin(),
                        prefix.copy_command(env),
                        Command::page_size(size),
                    ]),
                }
            }

            page.push(Command::copy_input_page(
                env,
                input_file_name,
                page_number,
                None,
                true,
            ));
            page.push(Command::page_size(size));
            document.pages.push(page);

            if i == last {
                if let Some(suffix) = suffix {
                    document
                        .pages
                        .push(vec![suffix.copy_command(env), Command::page_size(size)]);
                }
            }
        }
    }

    log::debug!(
        "Assembled {} page entries for {} groups",
        document.pages.len(),
        meta.groups.len()
    );

    document
}
