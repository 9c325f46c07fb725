use std::{num::NonZeroUsize, ops::Range};

/// One page of a header set: the half-open index range a single generated
/// test file covers.
///
/// Pages are `page_size` long except the last, whose end is `start + total %
/// page_size`. When `total` is an exact multiple of `page_size`, the page
/// starting at `total` is therefore empty; build systems that ask for one page
/// more than [`page_count`] still get a valid, header-less test file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: NonZeroUsize,
    size: NonZeroUsize,
    start: usize,
    end: usize,
}

impl Page {
    /// Compute page `number` (1-based) of `total` headers split into pages of
    /// `size`.
    pub fn new(total: usize, size: NonZeroUsize, number: NonZeroUsize) -> Self {
        let step = size.get();
        let start = step.saturating_mul(number.get() - 1);
        let end = if start.saturating_add(step) > total {
            start.saturating_add(total % step)
        } else {
            start + step
        };

        // Pages past the end cover nothing
        let end = end.min(total);
        let start = start.min(end);

        Self {
            number,
            size,
            start,
            end,
        }
    }

    /// 1-based page number.
    pub fn number(&self) -> usize {
        self.number.get()
    }

    /// Maximum number of headers per page.
    pub fn size(&self) -> usize {
        self.size.get()
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Number of pages needed to cover `total` headers: `ceil(total / size)`.
pub fn page_count(total: usize, size: NonZeroUsize) -> usize {
    total.div_ceil(size.get())
}

/// Every page from 1 through [`page_count`].
pub fn pages(total: usize, size: NonZeroUsize) -> impl Iterator<Item = Page> {
    (1..=page_count(total, size))
        .filter_map(NonZeroUsize::new)
        .map(move |number| Page::new(total, size, number))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn range(total: usize, size: usize, number: usize) -> Range<usize> {
        Page::new(total, nz(size), nz(number)).range()
    }

    #[test]
    fn test_first_page() {
        assert_eq!(range(5, 2, 1), 0..2);
    }

    #[test]
    fn test_middle_page() {
        assert_eq!(range(5, 2, 2), 2..4);
    }

    #[test]
    fn test_remainder_page() {
        assert_eq!(range(5, 2, 3), 4..5);
    }

    #[test]
    fn test_exact_fit_single_page() {
        assert_eq!(range(2, 2, 1), 0..2);
    }

    #[test]
    fn test_exact_multiple_boundary_is_empty() {
        let page = Page::new(2, nz(2), nz(2));
        assert_eq!(page.range(), 2..2);
        assert!(page.is_empty());
        assert_eq!(page.len(), 0);
    }

    #[test]
    fn test_far_past_end_is_empty() {
        assert!(Page::new(5, nz(2), nz(10)).is_empty());
        assert!(Page::new(0, nz(3), nz(1)).is_empty());
        assert!(Page::new(4, nz(3), nz(usize::MAX)).is_empty());
        assert!(Page::new(4, nz(usize::MAX), nz(2)).is_empty());
    }

    #[test]
    fn test_page_larger_than_total() {
        assert_eq!(range(3, 10, 1), 0..3);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, nz(2)), 0);
        assert_eq!(page_count(5, nz(2)), 3);
        assert_eq!(page_count(4, nz(2)), 2);
        assert_eq!(page_count(1, nz(50)), 1);
    }

    #[test]
    fn test_pages_cover_every_index_once() {
        for total in 0..40 {
            for size in 1..12 {
                let mut covered = Vec::new();
                for page in pages(total, nz(size)) {
                    assert!(page.len() <= size);
                    covered.extend(page.range());
                }
                assert_eq!(covered, (0..total).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_pages_are_never_empty() {
        assert!(pages(9, nz(3)).all(|page| !page.is_empty()));
        assert_eq!(pages(9, nz(3)).count(), 3);
    }
}
