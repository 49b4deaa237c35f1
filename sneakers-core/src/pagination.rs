use crate::catalog::{ListingSource, ProductRecord};
use crate::error::{FetchError, StoreError};
use log::debug;
use std::fmt;
use std::sync::Arc;

/// A 1-based page number. Zero is rejected rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageRequest {
    page_number: usize,
}

impl PageRequest {
    pub fn new(page_number: usize) -> Result<Self, StoreError> {
        if page_number == 0 {
            return Err(StoreError::InvalidArgument(
                "page number must be at least 1".to_string(),
            ));
        }
        Ok(Self { page_number })
    }

    pub fn first() -> Self {
        Self { page_number: 1 }
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One page of a catalog plus the metadata needed to render a page strip.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

impl<T> PageResult<T> {
    pub fn empty(current_page: usize) -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            total_pages: 0,
            current_page,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1 && self.total_pages > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page numbers `1..=total_pages`, one per button in the page strip.
    pub fn page_numbers(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages
    }

    pub fn showing_summary(&self) -> String {
        format!("Showing {} of {} items", self.items.len(), self.total_items)
    }
}

/// Number of pages needed for `total_items`; zero items means zero pages.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    }
}

/// Slice `catalog` into the requested page. A page past the end yields no
/// items rather than an error.
pub fn paginate<T: Clone>(catalog: &[T], request: PageRequest, page_size: usize) -> PageResult<T> {
    let total_items = catalog.len();
    let start = (request.page_number() - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(total_items);

    let items = if start >= total_items {
        Vec::new()
    } else {
        catalog[start..end].to_vec()
    };

    PageResult {
        items,
        total_items,
        total_pages: total_pages(total_items, page_size),
        current_page: request.page_number(),
    }
}

/// Fetches the whole catalog and cuts the requested page out of it.
///
/// Nothing is cached: every call goes back to the source.
#[derive(Clone)]
pub struct Paginator {
    source: Arc<dyn ListingSource>,
    page_size: usize,
}

impl fmt::Debug for Paginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl Paginator {
    pub fn new(source: Arc<dyn ListingSource>, page_size: usize) -> Result<Self, StoreError> {
        if page_size == 0 {
            return Err(StoreError::InvalidArgument(
                "page size must be positive".to_string(),
            ));
        }
        Ok(Self { source, page_size })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn source(&self) -> &Arc<dyn ListingSource> {
        &self.source
    }

    pub async fn get_page(
        &self,
        request: PageRequest,
    ) -> Result<PageResult<ProductRecord>, FetchError> {
        let catalog = self.source.fetch_catalog().await?;
        let page = paginate(&catalog, request, self.page_size);
        debug!(
            "page {}/{}: {} of {} items",
            page.current_page,
            page.total_pages,
            page.items.len(),
            page.total_items
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    fn page(n: usize) -> PageRequest {
        PageRequest::new(n).unwrap()
    }

    #[test]
    fn test_zero_page_rejected() {
        assert!(matches!(
            PageRequest::new(0),
            Err(StoreError::InvalidArgument(_))
        ));
        assert_eq!(PageRequest::default().page_number(), 1);
    }

    #[test]
    fn test_twenty_five_items_in_pages_of_ten() {
        let catalog: Vec<u32> = (0..25).collect();

        let first = paginate(&catalog, page(1), 10);
        assert_eq!(first.items, (0..10).collect::<Vec<_>>());
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_items, 25);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let third = paginate(&catalog, page(3), 10);
        assert_eq!(third.items, vec![20, 21, 22, 23, 24]);
        assert!(third.has_prev());
        assert!(!third.has_next());

        let fourth = paginate(&catalog, page(4), 10);
        assert!(fourth.items.is_empty());
        assert_eq!(fourth.total_pages, 3);
        assert_eq!(fourth.current_page, 4);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog: Vec<u32> = Vec::new();
        for n in [1, 2, 50] {
            let result = paginate(&catalog, page(n), 10);
            assert!(result.items.is_empty());
            assert_eq!(result.total_pages, 0);
            assert_eq!(result.total_items, 0);
            assert_eq!(result.page_numbers().count(), 0);
        }
    }

    #[test]
    fn test_pages_partition_the_catalog() {
        for size in [0usize, 1, 9, 10, 11, 37, 100] {
            for page_size in [1usize, 3, 10, 64] {
                let catalog: Vec<usize> = (0..size).collect();
                let pages = total_pages(size, page_size);
                assert_eq!(pages, size.div_ceil(page_size));

                let mut seen = Vec::new();
                for n in 1..=pages {
                    let result = paginate(&catalog, page(n), page_size);
                    let expected_len = page_size.min(size - (n - 1) * page_size);
                    assert_eq!(result.items.len(), expected_len);
                    seen.extend(result.items);
                }
                assert_eq!(seen, catalog, "size={} page_size={}", size, page_size);
            }
        }
    }

    #[test]
    fn test_huge_page_number_does_not_overflow() {
        let catalog: Vec<u32> = (0..5).collect();
        let result = paginate(&catalog, page(usize::MAX), 10);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_showing_summary() {
        let catalog: Vec<u32> = (0..25).collect();
        let result = paginate(&catalog, page(3), 10);
        assert_eq!(result.showing_summary(), "Showing 5 of 25 items");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let source = Arc::new(StaticCatalog::numbered(3));
        assert!(Paginator::new(source, 0).is_err());
    }

    #[tokio::test]
    async fn test_get_page_is_idempotent() {
        let paginator = Paginator::new(Arc::new(StaticCatalog::numbered(25)), 10).unwrap();

        let a = paginator.get_page(page(2)).await.unwrap();
        let b = paginator.get_page(page(2)).await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.items.len(), 10);
        assert_eq!(a.items[0].display_name(), "Sneaker 11");
    }
}
