//! Shared types for the carousel module

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique key for identifying carousels throughout the site.
/// Using a strongly-typed key avoids brittle string matching and gives each
/// instance its own log scope and configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselKey {
    /// 3D orbit of study destinations.
    Destinations,
    /// Paged grid of partner institutions.
    Partners,
    /// Prev/active/next testimonial strip.
    Testimonials,
    /// Any other carousel, named for logging.
    Custom(String),
}

impl fmt::Display for CarouselKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Destinations => write!(f, "destinations"),
            Self::Partners => write!(f, "partners"),
            Self::Testimonials => write!(f, "testimonials"),
            Self::Custom(name) => write!(f, "{name}"),
        }
    }
}

/// What asked for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    /// "Advance" button.
    Next,
    /// "Retreat" button.
    Previous,
    /// Dot or item click.
    Select,
    /// Auto-advance timer tick. Treated exactly like `Next`.
    AutoAdvance,
}

/// Why a navigation request left the cursor where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A transition is still in flight.
    Locked,
    /// `go_to` targeted the position that is already active.
    AlreadyActive,
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The cursor moved.
    Moved {
        /// Position before the move.
        from: usize,
        /// Position after the move.
        to: usize,
        /// What asked for the move.
        cause: Cause,
    },
    /// The request was dropped.
    Ignored {
        /// Why it was dropped.
        reason: IgnoreReason,
    },
}

impl Transition {
    /// Whether the cursor moved.
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }

    /// Destination of an accepted move.
    pub fn target(&self) -> Option<usize> {
        match self {
            Self::Moved { to, .. } => Some(*to),
            Self::Ignored { .. } => None,
        }
    }
}

/// Lock state of a carousel.
///
/// `Idle --(next/previous/go_to/tick)--> Transitioning --(lock released)--> Idle`.
/// Carousels without a transition duration never leave `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Accepting navigation.
    #[default]
    Idle,
    /// A transition is in flight; navigation is dropped.
    Transitioning,
}

/// Indicator dots: one per navigable position, exactly one active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicators {
    /// Number of dots.
    pub count: usize,
    /// Index of the highlighted dot.
    pub active: usize,
}

impl Indicators {
    /// Iterate `(index, is_active)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.count).map(move |i| (i, i == self.active))
    }
}
