//! Run-length page size decoding

use crate::constants::MAX_PAGE_COUNT;
use crate::types::*;
use serde_json::Value;

/// Expand `[count, size, count, size, ...]` into one size per page.
///
/// Fails on the first malformed entry; nothing is skipped. The expanded
/// table may hold at most [`MAX_PAGE_COUNT`] pages.
pub fn decode_page_sizes(encoding: &[Value]) -> Result<SizeTable> {
    let mut table = SizeTable::default();

    for (pair_index, pair) in encoding.chunks(2).enumerate() {
        let offset = pair_index * 2;

        let count = parse_count(&pair[0]).ok_or(ImposeError::Decode {
            offset,
            reason: DecodeReason::MalformedCount,
        })?;

        let size = match pair.get(1) {
            Some(value) => parse_size(value).ok_or(ImposeError::Decode {
                offset: offset + 1,
                reason: DecodeReason::MalformedSize,
            })?,
            None => {
                return Err(ImposeError::Decode {
                    offset,
                    reason: DecodeReason::DanglingCount,
                });
            }
        };

        let too_many = || ImposeError::Decode {
            offset,
            reason: DecodeReason::TooManyPages,
        };
        let page_count = table
            .page_count
            .checked_add(count)
            .filter(|total| *total <= MAX_PAGE_COUNT)
            .ok_or_else(too_many)?;
        table.sizes.try_reserve(count).map_err(|_| too_many())?;

        table.sizes.extend(std::iter::repeat_n(size, count));
        table.page_count = page_count;
    }

    log::debug!(
        "Decoded {} size runs into {} pages",
        encoding.len() / 2,
        table.page_count
    );

    Ok(table)
}

fn parse_count(value: &Value) -> Option<usize> {
    // Hosts sometimes write integral counts as floats (`2.0`)
    let count = value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 1.0)
            .map(|f| f as u64)
    })?;

    if count == 0 {
        return None;
    }
    usize::try_from(count).ok()
}

fn parse_size(value: &Value) -> Option<PageSize> {
    match value.as_array()?.as_slice() {
        [width, height] => Some(PageSize::new(width.as_f64()?, height.as_f64()?)),
        _ => None,
    }
}
