/// Pagination support for queries
///
/// Standard pagination model used across all bounded contexts. Callers are
/// responsible for ordering the source before paginating; the paginator only
/// counts and slices.
use serde::{Deserialize, Serialize};

use crate::shared::application::page_bar::{page_bar, PageBarEntry, DEFAULT_MAX_PAGES_TO_SHOW};
use crate::shared::errors::{AppError, AppResult};

/// Pagination parameters for queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Offset of the first item on this page.
    ///
    /// Page 0 is clamped to page 1, so the offset is never negative-skip
    /// territory.
    pub fn offset(&self) -> usize {
        (self.page.max(1) as usize - 1) * self.page_size as usize
    }

    pub fn limit(&self) -> usize {
        self.page_size as usize
    }
}

/// An ordered, countable source of items
///
/// Two logical reads per pagination: a count and a slice. No transaction is
/// taken between them, so a source mutated concurrently may return a count
/// and slice that disagree.
pub trait PageSource {
    type Item;

    fn count(&self) -> usize;

    /// Up to `limit` items starting at `offset`, in source order.
    fn slice(&self, offset: usize, limit: usize) -> Vec<Self::Item>;
}

impl<T: Clone> PageSource for [T] {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn slice(&self, offset: usize, limit: usize) -> Vec<T> {
        if offset >= self.len() {
            return Vec::new();
        }
        let end = offset.saturating_add(limit).min(self.len());
        self[offset..end].to_vec()
    }
}

impl<T: Clone> PageSource for Vec<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn slice(&self, offset: usize, limit: usize) -> Vec<T> {
        self.as_slice().slice(offset, limit)
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total_count: usize, params: &PaginationParams) -> Self {
        let total_pages = total_count.div_ceil(params.page_size.max(1) as usize) as u32;

        Self {
            items,
            total_count,
            page: params.page.max(1),
            page_size: params.page_size,
            total_pages,
        }
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    /// Compact page bar for rendering navigation controls.
    pub fn page_bar(&self) -> Vec<PageBarEntry> {
        page_bar(self.page, self.total_pages, DEFAULT_MAX_PAGES_TO_SHOW)
    }
}

/// Slice one page out of an ordered source.
///
/// A `page` of 0 is clamped to 1; a page beyond the last valid page yields
/// empty items with the count metadata still intact.
pub fn paginate<S>(source: &S, params: &PaginationParams) -> AppResult<PaginatedResult<S::Item>>
where
    S: PageSource + ?Sized,
{
    if params.page_size == 0 {
        return Err(AppError::InvalidInput(
            "Page size must be positive".to_string(),
        ));
    }

    let total_count = source.count();
    let items = source.slice(params.offset(), params.limit());

    Ok(PaginatedResult::new(items, total_count, params))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<u32> {
        (1..=n as u32).collect()
    }

    #[test]
    fn total_pages_is_ceiling_of_count_over_page_size() {
        let source = numbers(25);
        let result = paginate(&source, &PaginationParams::new(1, 10)).unwrap();
        assert_eq!(result.total_count, 25);
        assert_eq!(result.total_pages, 3);

        let result = paginate(&source, &PaginationParams::new(1, 25)).unwrap();
        assert_eq!(result.total_pages, 1);

        let result = paginate(&source, &PaginationParams::new(1, 7)).unwrap();
        assert_eq!(result.total_pages, 4);
    }

    #[test]
    fn empty_source_has_zero_pages() {
        let source: Vec<u32> = Vec::new();
        let result = paginate(&source, &PaginationParams::new(1, 10)).unwrap();
        assert_eq!(result.total_pages, 0);
        assert!(result.items.is_empty());
        assert!(!result.has_previous_page());
        assert!(!result.has_next_page());
    }

    #[test]
    fn full_pages_hold_page_size_items_and_the_last_page_the_remainder() {
        let source = numbers(25);
        for page in 1..=2 {
            let result = paginate(&source, &PaginationParams::new(page, 10)).unwrap();
            assert_eq!(result.items.len(), 10);
        }
        let last = paginate(&source, &PaginationParams::new(3, 10)).unwrap();
        assert_eq!(last.items.len(), 5);
        assert_eq!(last.items, vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn previous_and_next_flags_follow_page_position() {
        let source = numbers(30);
        let first = paginate(&source, &PaginationParams::new(1, 10)).unwrap();
        assert!(!first.has_previous_page());
        assert!(first.has_next_page());

        let middle = paginate(&source, &PaginationParams::new(2, 10)).unwrap();
        assert!(middle.has_previous_page());
        assert!(middle.has_next_page());

        let last = paginate(&source, &PaginationParams::new(3, 10)).unwrap();
        assert!(last.has_previous_page());
        assert!(!last.has_next_page());
    }

    #[test]
    fn page_beyond_the_end_is_empty_but_keeps_metadata() {
        let source = numbers(25);
        let result = paginate(&source, &PaginationParams::new(9, 10)).unwrap();
        assert!(result.items.is_empty());
        assert_eq!(result.total_count, 25);
        assert_eq!(result.total_pages, 3);
        assert!(result.has_previous_page());
        assert!(!result.has_next_page());
    }

    #[test]
    fn page_zero_is_clamped_to_the_first_page() {
        let source = numbers(25);
        let result = paginate(&source, &PaginationParams::new(0, 10)).unwrap();
        assert_eq!(result.page, 1);
        assert_eq!(result.items, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let source = numbers(5);
        let err = paginate(&source, &PaginationParams::new(1, 0)).unwrap_err();
        assert!(matches!(err, crate::shared::errors::AppError::InvalidInput(_)));
    }

    #[test]
    fn source_order_is_preserved_not_sorted() {
        let source = vec![3u32, 1, 2];
        let result = paginate(&source, &PaginationParams::new(1, 2)).unwrap();
        assert_eq!(result.items, vec![3, 1]);
    }
}
