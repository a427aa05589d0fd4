use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A validated `(page number, page size)` pair.
///
/// Page numbers start at 1.  Page `n` of size `s` covers the half-open index
/// range `[(n - 1) * s, n * s)` of the full result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPage")]
pub struct Page {
    number: usize,
    size: usize,
    // `number * size`, checked at construction.
    #[serde(skip_serializing)]
    end: usize,
}

#[derive(Deserialize)]
struct RawPage {
    number: usize,
    size: usize,
}

impl TryFrom<RawPage> for Page {
    type Error = Error;

    fn try_from(raw: RawPage) -> Result<Self> {
        Page::new(raw.number, raw.size)
    }
}

impl Page {
    /// The first page of the given size.
    pub fn first(size: usize) -> Result<Self> {
        Self::new(1, size)
    }

    pub fn new(number: usize, size: usize) -> Result<Self> {
        if number == 0 {
            return Err(Error::InvalidPageNumber(number));
        }
        if size == 0 {
            return Err(Error::InvalidPageSize(size));
        }
        let end = number.checked_mul(size).ok_or(Error::PageOverflow {
            page_number: number,
            page_size: size,
        })?;

        Ok(Self { number, size, end })
    }

    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of the first element of the page.
    #[inline]
    pub fn start(&self) -> usize {
        self.end - self.size
    }

    /// Index one past the last element of the page.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// Number of leading elements of the sorted result needed to produce this
    /// page.
    #[inline]
    pub fn retained(&self) -> usize {
        self.end
    }

    /// The page after this one, if its bounds are addressable.
    pub fn next(&self) -> Option<Self> {
        Self::new(self.number.checked_add(1)?, self.size).ok()
    }

    /// Cuts this page out of a fully sorted sequence.
    ///
    /// * A sequence of at most `size` elements is returned whole, whatever
    ///   the page number.
    /// * A page whose end lies past the end of the sequence is out of range
    ///   and yields an empty vector.  This includes a partially filled last
    ///   page.
    pub fn slice<T>(&self, mut sorted: Vec<T>) -> Vec<T> {
        let len = sorted.len();
        if len <= self.size {
            return sorted;
        }
        if self.end > len {
            return Vec::new();
        }

        sorted.truncate(self.end);
        sorted.split_off(self.start())
    }
}

/// Number of pages of size `page_size` needed to hold `total` elements.
///
/// Returns 0 when `page_size` is 0.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::{total_pages, Page};
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn page_bounds() {
        let page = Page::new(1, 3).unwrap();
        assert_eq!(0..3, page.range());

        let page = Page::new(3, 3).unwrap();
        assert_eq!(6, page.start());
        assert_eq!(9, page.end());
        assert_eq!(9, page.retained());

        let next = page.next().unwrap();
        assert_eq!(4, next.number());
        assert_eq!(9..12, next.range());
    }

    #[test]
    fn invalid_pages() {
        assert_eq!(Err(Error::InvalidPageNumber(0)), Page::new(0, 10));
        assert_eq!(Err(Error::InvalidPageSize(0)), Page::new(1, 0));
        assert_eq!(
            Err(Error::PageOverflow {
                page_number: usize::MAX,
                page_size: 2
            }),
            Page::new(usize::MAX, 2)
        );
        assert_eq!(None, Page::new(usize::MAX, 1).unwrap().next());
    }

    #[test]
    fn slicing() {
        let sorted: Vec<u32> = (1..=7).collect();

        assert_eq!(vec![1, 2, 3], Page::new(1, 3).unwrap().slice(sorted.clone()));
        assert_eq!(vec![4, 5, 6], Page::new(2, 3).unwrap().slice(sorted.clone()));
        // Partially filled last page.
        assert!(Page::new(3, 3).unwrap().slice(sorted.clone()).is_empty());
        assert!(Page::new(9, 3).unwrap().slice(sorted.clone()).is_empty());
        // Everything fits in one page: returned whatever the page number.
        assert_eq!(sorted, Page::new(5, 10).unwrap().slice(sorted.clone()));
    }

    #[test]
    fn serde_validates() {
        let page: Page = serde_json::from_str(r#"{"number": 2, "size": 5}"#).unwrap();
        assert_eq!(5..10, page.range());

        assert!(serde_json::from_str::<Page>(r#"{"number": 0, "size": 5}"#).is_err());
        assert_eq!(
            r#"{"number":2,"size":5}"#,
            serde_json::to_string(&page).unwrap()
        );
    }

    #[test]
    fn page_count() {
        assert_eq!(0, total_pages(0, 10));
        assert_eq!(1, total_pages(10, 10));
        assert_eq!(2, total_pages(11, 10));
        assert_eq!(0, total_pages(11, 0));
    }
}
