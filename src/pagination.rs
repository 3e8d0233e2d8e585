//! Pagination Utilities
//!
//! Fixed-size pages over the in-memory dog list. Pages are 1-based.

/// Records per page
pub const PAGE_SIZE: usize = 5;

/// Index of the first record on `page`
pub fn page_offset(page: usize) -> usize {
    page.saturating_sub(1) * PAGE_SIZE
}

/// Number of page buttons for `len` records
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Records shown on `page`. A page past the end (or page 0) is empty;
/// the current page is not clamped when the list shrinks.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = page_offset(page).min(items.len());
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}
