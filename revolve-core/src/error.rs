//! Carousel errors

use thiserror::Error;

/// Failure of a carousel operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// The item list was empty.
    #[error("carousel needs at least one item")]
    EmptyCarousel,

    /// The layout produced no positions, e.g. a page size of zero.
    #[error("render strategy produced zero navigable positions")]
    ZeroPageSize,

    #[error("index {index} is outside 0..{positions}")]
    /// `go_to` targeted a position that does not exist.
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of navigable positions.
        positions: usize,
    },

    /// The carousel task has stopped.
    #[error("carousel controller is no longer running")]
    ControllerClosed,
}

/// Result alias for carousel operations.
pub type Result<T> = std::result::Result<T, CarouselError>;
