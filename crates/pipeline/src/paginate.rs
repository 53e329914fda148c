//! Slicing a sorted list into fixed-size pages.

use serde::Serialize;

/// One page of results plus where it sits in the full list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number that was requested
    pub page_number: usize,
    pub page_size: usize,
    /// Never less than 1, even for an empty list
    pub total_pages: usize,
    pub total_items: usize,
    /// Index of the first item of this page in the full list
    pub start_index: usize,
    /// Exclusive end of this page in the full list
    pub end_index: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cut page `page_number` (1-based) of `page_size` items out of `entries`.
///
/// A page size of 0 is treated as 1. Page 0 or a page past the end gives an
/// empty page; callers clamp with [`clamp_page`] if they want the last page
/// instead.
pub fn paginate<T: Clone>(entries: &[T], page_size: usize, page_number: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = entries.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let start_index = page_number.saturating_sub(1).saturating_mul(page_size);

    let (items, end_index) = if page_number == 0 || start_index >= total_items {
        if page_number > total_pages {
            tracing::warn!(
                "Page {} requested but only {} page(s) exist",
                page_number,
                total_pages
            );
        }
        (Vec::new(), start_index)
    } else {
        let end_index = start_index.saturating_add(page_size).min(total_items);
        (entries[start_index..end_index].to_vec(), end_index)
    };

    Page {
        items,
        page_number,
        page_size,
        total_pages,
        total_items,
        start_index,
        end_index,
    }
}

/// Clamp a requested page number into `1..=total_pages`.
pub fn clamp_page(page_number: usize, total_pages: usize) -> usize {
    page_number.clamp(1, total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_boundaries() {
        let items: Vec<u32> = (1..=5).collect();

        let first = paginate(&items, 2, 1);
        assert_eq!(first.items, vec![1, 2]);
        assert_eq!((first.start_index, first.end_index), (0, 2));
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next());
        assert!(!first.has_previous());

        let last = paginate(&items, 2, 3);
        assert_eq!(last.items, vec![5]);
        assert_eq!((last.start_index, last.end_index), (4, 5));
        assert!(!last.has_next());
    }

    #[test]
    fn test_empty_input_has_one_page() {
        let page = paginate::<u32>(&[], 10, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.is_empty());
    }

    #[test]
    fn test_out_of_range_is_empty() {
        let items: Vec<u32> = (1..=5).collect();

        let far = paginate(&items, 2, 99);
        assert!(far.items.is_empty());
        assert_eq!(far.total_pages, 3);

        assert!(paginate(&items, 2, 0).items.is_empty());
    }

    #[test]
    fn test_zero_page_size() {
        let items = vec!['a', 'b'];
        let page = paginate(&items, 0, 2);
        assert_eq!(page.items, vec!['b']);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_pages_reconstruct_input() {
        let items: Vec<u32> = (0..23).collect();
        let total_pages = paginate(&items, 4, 1).total_pages;

        let rebuilt: Vec<u32> = (1..=total_pages)
            .flat_map(|n| paginate(&items, 4, n).items)
            .collect();
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(99, 3), 3);
        assert_eq!(clamp_page(5, 0), 1);
    }
}
