//! CarouselState: circular cursor, transition lock and render projection
//!
//! The state is synchronous and owns no timers. Callers that hold a lock
//! duration are expected to call [`CarouselState::release_lock`] once it
//! elapses; the async controller does this with a deadline.

use std::ops::Range;
use std::time::Duration;

use tracing::{debug, trace};

use crate::config::CarouselConfig;
use crate::error::{CarouselError, Result};
use crate::layout::RenderStrategy;
use crate::types::{Cause, IgnoreReason, Indicators, Phase, Transition};

/// A fixed item list with a circular cursor and an optional transition
/// lock, projected through layout `L`.
#[derive(Debug, Clone)]
pub struct CarouselState<T, L: RenderStrategy> {
    items: Vec<T>,
    layout: L,
    config: CarouselConfig,
    /// Number of navigable positions; fixed because the item list is.
    positions: usize,
    current: usize,
    locked: bool,
}

impl<T, L: RenderStrategy> CarouselState<T, L> {
    /// Build a state at position 0, unlocked.
    pub fn new(items: Vec<T>, layout: L, config: CarouselConfig) -> Result<Self> {
        if items.is_empty() {
            return Err(CarouselError::EmptyCarousel);
        }
        let positions = layout.positions(items.len());
        if positions == 0 {
            return Err(CarouselError::ZeroPageSize);
        }
        Ok(Self {
            items,
            layout,
            config,
            positions,
            current: 0,
            locked: false,
        })
    }

    /// Every item, in order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Render strategy.
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Timing configuration.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Effective count: items in single-focus layouts, pages in paged ones.
    pub fn positions(&self) -> usize {
        self.positions
    }

    /// Active position, always `< positions()`.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Whether a transition is in flight.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Lock state as a [`Phase`].
    pub fn phase(&self) -> Phase {
        if self.locked {
            Phase::Transitioning
        } else {
            Phase::Idle
        }
    }

    /// How long an accepted move keeps the carousel locked, if at all.
    pub fn lock_duration(&self) -> Option<Duration> {
        self.config.transition()
    }

    /// Move forward one position, wrapping to 0 after the last.
    pub fn next(&mut self) -> Transition {
        let to = (self.current + 1) % self.positions;
        self.step(to, Cause::Next)
    }

    /// Move back one position, wrapping to the last from 0.
    pub fn previous(&mut self) -> Transition {
        let to = (self.current + self.positions - 1) % self.positions;
        self.step(to, Cause::Previous)
    }

    /// Auto-advance tick. Behaves like `next` and is dropped, not queued,
    /// while a transition is in flight.
    pub fn advance(&mut self) -> Transition {
        let to = (self.current + 1) % self.positions;
        self.step(to, Cause::AutoAdvance)
    }

    /// Jump straight to `index`.
    ///
    /// Out-of-range indices are rejected rather than clamped.
    pub fn go_to(&mut self, index: usize) -> Result<Transition> {
        if index >= self.positions {
            return Err(CarouselError::IndexOutOfRange {
                index,
                positions: self.positions,
            });
        }
        if index == self.current {
            return Ok(Transition::Ignored {
                reason: IgnoreReason::AlreadyActive,
            });
        }
        Ok(self.step(index, Cause::Select))
    }

    /// End the in-flight transition. Returns whether a lock was held.
    pub fn release_lock(&mut self) -> bool {
        std::mem::replace(&mut self.locked, false)
    }

    /// Current projection through the layout.
    pub fn frame(&self) -> L::Frame {
        self.layout.frame(self.items.len(), self.current)
    }

    /// One dot per position with the current one active.
    pub fn indicators(&self) -> Indicators {
        Indicators {
            count: self.positions,
            active: self.current,
        }
    }

    /// Item indices covered by the current frame.
    pub fn visible_range(&self) -> Range<usize> {
        self.layout.visible(self.items.len(), self.current)
    }

    /// Items covered by the current frame.
    pub fn visible_items(&self) -> &[T] {
        &self.items[self.visible_range()]
    }

    fn step(&mut self, to: usize, cause: Cause) -> Transition {
        if self.locked {
            trace!(?cause, current = self.current, "navigation dropped while locked");
            return Transition::Ignored {
                reason: IgnoreReason::Locked,
            };
        }

        let from = self.current;
        self.current = to;
        self.locked = self.lock_duration().is_some();

        debug!(
            from,
            to,
            ?cause,
            locked = self.locked,
            "carousel moved"
        );

        Transition::Moved { from, to, cause }
    }
}
