use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("a table needs at least one header label")]
    EmptyHeaders,
    #[error("expected {expected} column widths (one per header), found {found}")]
    WidthCountMismatch { expected: usize, found: usize },
    #[error("column {column} has a width of zero")]
    ZeroWidth { column: usize },
    #[error("nested rows go deeper than the limit of {limit} levels")]
    DepthExceeded { limit: usize },
}

impl Error {
    pub fn width_count_mismatch(expected: usize, found: usize) -> Self {
        Self::WidthCountMismatch { expected, found }
    }

    pub fn depth_exceeded(limit: usize) -> Self {
        Self::DepthExceeded { limit }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
