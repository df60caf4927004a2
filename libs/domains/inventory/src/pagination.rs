//! Slicing an already-materialised result set into pages.
//!
//! [`paginate`] trusts its inputs. Raw request values go through
//! [`PageRequest::normalize`] first.

use serde::Serialize;

/// One page of a larger result set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Length of the full, unpaginated result set
    pub total_count: usize,
    pub page_number: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.page_size)
    }

    pub fn has_previous_page(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.page_number < self.total_pages()
    }
}

/// Page `page` (1-based) of `items`, `page_size` items at most
///
/// Both numbers must already be at least 1. A page past the end is empty but still
/// reports the full `total_count`.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    debug_assert!(page >= 1 && page_size >= 1, "page and page_size must be normalised");

    let total_count = items.len();
    let skip = page.saturating_sub(1).saturating_mul(page_size);

    Page {
        items: items.into_iter().skip(skip).take(page_size).collect(),
        total_count,
        page_number: page,
        page_size,
    }
}

/// Page coordinates after boundary normalisation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    /// Non-positive `page_size` falls back to `default_page_size`; `page` below 1 becomes 1.
    pub fn normalize(page: i64, page_size: i64, default_page_size: usize) -> Self {
        let page_size = usize::try_from(page_size)
            .ok()
            .filter(|size| *size > 0)
            .unwrap_or(default_page_size.max(1));
        let page = usize::try_from(page).ok().filter(|p| *p > 0).unwrap_or(1);

        Self { page, page_size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seven() -> Vec<usize> {
        (0..7).collect()
    }

    #[test]
    fn test_middle_page() {
        let page = paginate(seven(), 2, 3);

        assert_eq!(page.items, vec![3, 4, 5]);
        assert_eq!(page.total_count, 7);
        assert_eq!(page.page_number, 2);
        assert_eq!(page.page_size, 3);
    }

    #[test]
    fn test_last_partial_page() {
        let page = paginate(seven(), 3, 3);

        assert_eq!(page.items, vec![6]);
        assert!(page.has_previous_page());
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let page = paginate(seven(), 4, 3);

        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 7);
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn test_first_page_navigation() {
        let page = paginate(seven(), 1, 3);

        assert_eq!(page.items, vec![0, 1, 2]);
        assert!(!page.has_previous_page());
        assert!(page.has_next_page());
    }

    #[test]
    fn test_empty_input() {
        let page = paginate(Vec::<usize>::new(), 1, 50);

        assert!(page.items.is_empty());
        assert_eq!(page.total_pages(), 0);
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_normalize_defaults() {
        assert_eq!(
            PageRequest::normalize(0, 0, 50),
            PageRequest {
                page: 1,
                page_size: 50
            }
        );
        assert_eq!(
            PageRequest::normalize(-3, -1, 50),
            PageRequest {
                page: 1,
                page_size: 50
            }
        );
    }

    #[test]
    fn test_normalize_keeps_valid_values() {
        assert_eq!(
            PageRequest::normalize(4, 25, 50),
            PageRequest {
                page: 4,
                page_size: 25
            }
        );
    }
}
