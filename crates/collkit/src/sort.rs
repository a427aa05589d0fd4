//! Paginated sort-merge of several unrelated sequences.
//!
//! Every entry point takes a 1-based page number, a page size, a
//! [`Comparator`] and any number of input sequences, and returns one page of
//! the sorted concatenation of the inputs.  The page is cut out of the sorted
//! result as follows:
//!
//! * If the sorted result has at most `page_size` elements, all of them are
//!   returned, whatever the page number.
//! * If the page ends past the end of the sorted result, the page is out of
//!   range and the result is empty.  This includes a partially filled last
//!   page.
//! * Otherwise the elements at indexes `[(page_number - 1) * page_size,
//!   page_number * page_size)` are returned.
//!
//! [`sort_page`] sorts the whole input; [`sort_page_bounded`] streams the
//! inputs through a [`BoundedPriorityQueue`] of capacity `page_number *
//! page_size` and never holds more than that many elements.  Both sorts are
//! stable and return the same page for the same input.
//!
//! ```
//! use collkit::{sort_page, sort_page_bounded, Natural};
//!
//! let inputs = [vec![5, 3, 8, 1], vec![9, 2]];
//! assert_eq!(sort_page(1, 3, Natural, inputs.clone()).unwrap(), [1, 2, 3]);
//! assert_eq!(sort_page_bounded(2, 3, Natural, inputs.clone()).unwrap(), [5, 8, 9]);
//! assert!(sort_page(3, 3, Natural, inputs).unwrap().is_empty());
//! ```

use crate::{
    config::{PaginationConfig, SortStrategy},
    error::Result,
    order::{Borrowed, Comparator},
    page::Page,
    queue::BoundedPriorityQueue,
};
use tracing::{debug, trace};

/// Returns page `page_number` of the sorted concatenation of `inputs`, sorting
/// the whole concatenation.
///
/// Fails if `page_number` is 0, `page_size` is 0 or the page bounds overflow.
pub fn sort_page<T, C, I>(
    page_number: usize,
    page_size: usize,
    comparator: C,
    inputs: I,
) -> Result<Vec<T>>
where
    C: Comparator<T>,
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    let page = Page::new(page_number, page_size)?;
    Ok(full_sort_page(&page, &comparator, inputs))
}

/// Returns page `page_number` of the sorted concatenation of `inputs`,
/// retaining only the first `page_number * page_size` elements.
///
/// Produces the same result as [`sort_page`] in `O(n log k)` time and `O(k)`
/// space, where `k = page_number * page_size`.
pub fn sort_page_bounded<T, C, I>(
    page_number: usize,
    page_size: usize,
    comparator: C,
    inputs: I,
) -> Result<Vec<T>>
where
    C: Comparator<T>,
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    let page = Page::new(page_number, page_size)?;
    Ok(bounded_page(&page, &comparator, inputs))
}

/// Dispatches to [`sort_page`] or [`sort_page_bounded`] according to
/// `strategy`.
pub fn sort_page_with<T, C, I>(
    strategy: SortStrategy,
    page_number: usize,
    page_size: usize,
    comparator: C,
    inputs: I,
) -> Result<Vec<T>>
where
    C: Comparator<T>,
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    let page = Page::new(page_number, page_size)?;
    Ok(page_with(strategy, &page, &comparator, inputs))
}

fn page_with<T, C, I>(strategy: SortStrategy, page: &Page, comparator: &C, inputs: I) -> Vec<T>
where
    C: Comparator<T>,
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    trace!(
        ?strategy,
        page = page.number(),
        page_size = page.size(),
        "sorting page"
    );
    match strategy {
        SortStrategy::FullSort => full_sort_page(page, comparator, inputs),
        SortStrategy::Bounded => bounded_page(page, comparator, inputs),
    }
}

fn full_sort_page<T, C, I>(page: &Page, comparator: &C, inputs: I) -> Vec<T>
where
    C: Comparator<T>,
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    let mut combined: Vec<T> = inputs.into_iter().flatten().collect();
    combined.sort_by(|left, right| comparator.compare(left, right));

    cut(page, combined)
}

fn bounded_page<T, C, I>(page: &Page, comparator: &C, inputs: I) -> Vec<T>
where
    C: Comparator<T>,
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    let mut queue = BoundedPriorityQueue::new(page.retained(), Borrowed(comparator));
    for input in inputs {
        queue.extend(input);
    }

    cut(page, queue.into_sorted_vec())
}

fn cut<T>(page: &Page, sorted: Vec<T>) -> Vec<T> {
    let available = sorted.len();
    let result = page.slice(sorted);
    if result.is_empty() && available > 0 {
        debug!(
            page = page.number(),
            page_size = page.size(),
            available,
            "requested page is out of range"
        );
    }
    result
}

/// Computes pages of merged inputs according to a [`PaginationConfig`].
///
/// ```
/// use collkit::{Natural, PageSorter, PaginationConfig, SortStrategy};
///
/// let config = PaginationConfig::new(SortStrategy::Bounded, 2).unwrap();
/// let sorter = PageSorter::new(config, Natural);
///
/// let inputs = [vec!["pear", "fig"], vec!["apple", "kiwi"]];
/// assert_eq!(sorter.page(1, inputs.clone()).unwrap(), ["apple", "fig"]);
/// assert_eq!(sorter.page(2, inputs).unwrap(), ["kiwi", "pear"]);
/// ```
#[derive(Clone, Debug)]
pub struct PageSorter<C> {
    config: PaginationConfig,
    comparator: C,
}

impl<C> PageSorter<C> {
    pub fn new(config: PaginationConfig, comparator: C) -> Self {
        Self { config, comparator }
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Returns page `page_number` of the sorted concatenation of `inputs`.
    pub fn page<T, I>(&self, page_number: usize, inputs: I) -> Result<Vec<T>>
    where
        C: Comparator<T>,
        I: IntoIterator,
        I::Item: IntoIterator<Item = T>,
    {
        let page = self.config.page(page_number)?;
        Ok(page_with(self.config.strategy, &page, &self.comparator, inputs))
    }
}
