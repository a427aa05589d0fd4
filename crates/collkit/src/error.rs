use thiserror::Error as ThisError;

/// Errors reported by the pagination and splitting entry points.
///
/// Everything else in this crate is infallible: mismatched zip lengths are
/// truncated and out-of-range pages are empty.
#[derive(ThisError, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Page numbers start at 1.
    #[error("invalid page number {0}: page numbers start at 1")]
    InvalidPageNumber(usize),

    /// A page must hold at least one element.
    #[error("invalid page size {0}: page size must be positive")]
    InvalidPageSize(usize),

    /// `page_number * page_size` does not fit in a `usize`.
    #[error("page {page_number} of size {page_size} is beyond the addressable range")]
    PageOverflow {
        /// Requested page number.
        page_number: usize,
        /// Requested page size.
        page_size: usize,
    },

    /// `split` needs chunks of at least one element.
    #[error("chunk size must be positive")]
    InvalidChunkSize,

    /// Malformed pagination configuration.
    #[error("invalid pagination config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Config(source.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
