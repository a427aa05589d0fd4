//! Multiset collection algebra and bounded paginated merge-sort.
//!
//! * [`algebra`] treats sequences as multisets and computes unions,
//!   intersections and disjunctions that respect the number of times each
//!   element occurs.
//! * [`sort_page`] and [`sort_page_bounded`] merge several unrelated
//!   sequences into one sorted, paginated view.  The bounded variant streams
//!   the inputs through a [`BoundedPriorityQueue`] and never sorts more than
//!   the elements needed for the requested page.
//! * [`zip`] and [`zip_str`] pair keys with values by position.
//!
//! All operations are pure: they take their inputs by reference or by value
//! and return new collections.
//!
//! ```
//! use collkit::{algebra::union, sort_page_bounded, Natural};
//!
//! let merged = union(&[1, 2, 2], &[2, 3]);
//! assert_eq!(merged, [1, 2, 2, 3]);
//!
//! let page = sort_page_bounded(1, 2, Natural, [vec![9, 4], merged]).unwrap();
//! assert_eq!(page, [1, 2]);
//! ```

pub mod algebra;
pub mod collection;
pub mod config;
mod error;
pub mod order;
mod page;
mod queue;
mod sort;
mod zip;

pub use algebra::{count_map, Multiset};
pub use config::{PaginationConfig, SortStrategy};
pub use error::{Error, Result};
pub use order::{ByKey, CmpFunc, Comparator, Natural, Reversed, WithCmpFunc};
pub use page::{total_pages, Page};
pub use queue::{BoundedPriorityQueue, QueueState};
pub use sort::{sort_page, sort_page_bounded, sort_page_with, PageSorter};
pub use zip::{zip, zip_str};
