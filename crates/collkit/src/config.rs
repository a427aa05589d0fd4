//! Pagination configuration.
//!
//! The configuration can be embedded in a larger serde document or parsed
//! on its own from JSON:
//!
//! ```
//! use collkit::{PaginationConfig, SortStrategy};
//!
//! let config = PaginationConfig::from_json(r#"{"strategy": "full_sort"}"#).unwrap();
//! assert_eq!(config.strategy, SortStrategy::FullSort);
//! assert_eq!(config.page_size, 10);
//! ```

use crate::{
    error::{Error, Result},
    page::Page,
};
use serde::{Deserialize, Serialize};

/// Default value of [`PaginationConfig::page_size`].
pub const fn default_page_size() -> usize {
    10
}

/// How a page of the merged, sorted result is computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    /// Concatenate all inputs, sort everything, then cut out the page.
    FullSort,

    /// Keep only the first `page_number * page_size` elements in a
    /// [`BoundedPriorityQueue`](crate::BoundedPriorityQueue) while scanning
    /// the inputs, then cut out the page.
    #[default]
    Bounded,
}

/// Settings for [`PageSorter`](crate::PageSorter).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Strategy used to compute pages.
    pub strategy: SortStrategy,

    /// Number of elements per page.  Must be positive.
    pub page_size: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            strategy: SortStrategy::default(),
            page_size: default_page_size(),
        }
    }
}

impl PaginationConfig {
    pub fn new(strategy: SortStrategy, page_size: usize) -> Result<Self> {
        let config = Self {
            strategy,
            page_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON configuration.  Missing fields take their
    /// default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::InvalidPageSize(self.page_size));
        }
        Ok(())
    }

    /// Descriptor of page `page_number` under this configuration.
    pub fn page(&self, page_number: usize) -> Result<Page> {
        Page::new(page_number, self.page_size)
    }
}
