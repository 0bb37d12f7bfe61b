//! Group context construction
//!
//! Both cursors (size table read position and global page number) advance
//! together, so the read position is threaded through [`build_group`] and
//! doubles as the page number base.

use super::{Metadata, decode_page_sizes};
use crate::types::*;

/// Decode the size table and split it into groups
pub fn build_meta_context(metadata: &Metadata) -> Result<MetaContext> {
    let table = decode_page_sizes(&metadata.page_sizes)?;
    build_groups(&table, &metadata.groups, &metadata.group_sizes)
}

/// Split a decoded size table into groups.
///
/// `labels` and `group_sizes` are parallel arrays. Every page of the table
/// must belong to exactly one group.
pub fn build_groups(
    table: &SizeTable,
    labels: &[GroupLabel],
    group_sizes: &[usize],
) -> Result<MetaContext> {
    if labels.len() != group_sizes.len() {
        return Err(ImposeError::GroupCountMismatch {
            groups: labels.len(),
            group_sizes: group_sizes.len(),
        });
    }

    let mut groups = Vec::with_capacity(labels.len());
    let mut cursor = 0;

    for (index, (label, &page_count)) in labels.iter().zip(group_sizes).enumerate() {
        let (group, next) = build_group(index, label, page_count, &table.sizes, cursor)?;
        log::debug!(
            "Group {} holds pages {}..={}",
            index,
            cursor + 1,
            next
        );
        groups.push(group);
        cursor = next;
    }

    if cursor != table.page_count {
        return Err(ImposeError::PageCountMismatch {
            declared: cursor,
            decoded: table.page_count,
        });
    }

    Ok(MetaContext {
        total_pages: table.page_count,
        groups,
    })
}

/// Take the next `page_count` sizes starting at `cursor`.
///
/// Returns the group and the cursor for the following group. Page numbers
/// run from `cursor + 1` to `cursor + page_count`.
pub fn build_group(
    index: usize,
    label: &GroupLabel,
    page_count: usize,
    sizes: &[PageSize],
    cursor: usize,
) -> Result<(Group, usize)> {
    let available = sizes.len().saturating_sub(cursor);
    if page_count > available {
        return Err(ImposeError::GroupOverflow {
            group: index,
            requested: page_count,
            available,
        });
    }

    let end = cursor + page_count;
    let group = Group {
        label: label.clone(),
        page_count,
        page_sizes: sizes[cursor..end].to_vec(),
        page_numbers: (cursor + 1..=end).collect(),
    };

    Ok((group, end))
}
