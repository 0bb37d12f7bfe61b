use crate::types::*;

/// Calculate statistics for a command document before assembling it
pub fn calculate_statistics(
    meta: &MetaContext,
    has_prefix: bool,
    has_suffix: bool,
) -> CommandStatistics {
    // Empty groups emit nothing, not even inserted pages
    let filled_groups = meta
        .groups
        .iter()
        .filter(|group| !group.page_sizes.is_empty())
        .count();

    let prefix_pages_added = if has_prefix { filled_groups } else { 0 };
    let suffix_pages_added = if has_suffix { filled_groups } else { 0 };

    let content_pages: usize = meta.groups.iter().map(|group| group.page_sizes.len()).sum();

    CommandStatistics {
        source_pages: meta.total_pages,
        groups: meta.groups.len(),
        prefix_pages_added,
        suffix_pages_added,
        output_pages: content_pages + prefix_pages_added + suffix_pages_added,
    }
}
