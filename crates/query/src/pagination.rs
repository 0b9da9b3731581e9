//! Pagination utilities

use std::ops::Range;

/// Number of pages needed for `total_entries`, never less than one.
pub const fn total_pages(total_entries: u64, page_size: u64) -> u64 {
    let page_size = if page_size == 0 { 1 } else { page_size };
    let pages = total_entries.div_ceil(page_size);
    if pages == 0 { 1 } else { pages }
}

/// Index range of `page` (1-based) inside a collection of `len` items.
///
/// Pages past the end, and page zero, produce an empty range.
pub fn page_range(page: u64, page_size: u64, len: usize) -> Range<usize> {
    let Some(skip) = page.checked_sub(1).and_then(|p| p.checked_mul(page_size)) else {
        return len..len;
    };
    let start = usize::try_from(skip).unwrap_or(usize::MAX).min(len);
    let end = start.saturating_add(usize::try_from(page_size).unwrap_or(usize::MAX)).min(len);
    start..end
}
