//! Render strategies
//!
//! A strategy decides how many discrete positions a carousel has and how the
//! active position is projected into a frame for the display surface. The
//! state machine is shared; only the projection differs between the orbit,
//! the paged grid and the prev/active/next strip.

pub mod orbit;
pub mod page;
pub mod triple;

pub use orbit::{OrbitFrame, OrbitLayout, OrbitPlacement};
pub use page::{PageFrame, PageLayout};
pub use triple::{Role, TripleFrame, TripleLayout};

use std::fmt::Debug;
use std::ops::Range;

/// Projection of a carousel cursor into something a surface can draw.
///
/// `frame` must be a pure function of `(item_count, current)`: rendering the
/// same state twice yields the same frame.
pub trait RenderStrategy: Debug + Send + 'static {
    /// What one render of the carousel looks like.
    type Frame: Debug + Clone + PartialEq + Send + Sync + 'static;

    /// Number of navigable positions for `item_count` items.
    fn positions(&self, item_count: usize) -> usize;

    /// Project position `current` into a frame.
    fn frame(&self, item_count: usize, current: usize) -> Self::Frame;

    /// Item indices covered by position `current`.
    fn visible(&self, item_count: usize, current: usize) -> Range<usize> {
        let _ = item_count;
        current..current + 1
    }
}
