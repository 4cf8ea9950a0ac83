//! Errors shared by the connectivity engine and the containers.

/// A caller passed an argument outside the accepted domain. Nothing is mutated when this is returned.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("element {index} is outside the universe 0..{len}")]
    ElementOutOfRange { index: usize, len: usize },
    #[error("grid dimension must be at least 1")]
    EmptyGrid,
    #[error("a {n}x{n} grid does not fit in memory")]
    GridTooLarge { n: usize },
    #[error("site ({row}, {col}) is outside the {n}x{n} grid")]
    SiteOutOfRange { row: usize, col: usize, n: usize },
    #[error("at least one trial is needed")]
    NoTrials,
}

/// Returned when removing or sampling from an empty container.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("the structure is empty")]
pub struct EmptyStructure;

pub type Result<T, E = InvalidArgument> = std::result::Result<T, E>;
