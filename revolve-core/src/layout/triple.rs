//! Prev/active/next strip
//!
//! Tags three items with positional roles around the active one, wrapping
//! at both ends. With fewer than three items the roles overlap; the active
//! role wins when asking which role an item has.

use std::ops::Range;

use super::RenderStrategy;

/// One active item flanked by its neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TripleLayout;

/// Position of an item relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Just before the active item.
    Previous,
    /// The active item.
    Active,
    /// Just after the active item.
    Next,
}

impl Role {
    /// Class name used by the stylesheet for this role.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Previous => "prev",
            Self::Active => "active",
            Self::Next => "next",
        }
    }
}

/// Item indices holding each role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripleFrame {
    /// Item in the `prev` slot.
    pub previous: usize,
    /// Item in the `active` slot.
    pub active: usize,
    /// Item in the `next` slot.
    pub next: usize,
}

impl TripleFrame {
    /// Role of `index`, `None` when it is off stage.
    pub fn role_of(&self, index: usize) -> Option<Role> {
        if index == self.active {
            Some(Role::Active)
        } else if index == self.previous {
            Some(Role::Previous)
        } else if index == self.next {
            Some(Role::Next)
        } else {
            None
        }
    }
}

impl TripleLayout {
    /// The strip layout.
    pub fn new() -> Self {
        Self
    }
}

impl RenderStrategy for TripleLayout {
    type Frame = TripleFrame;

    fn positions(&self, item_count: usize) -> usize {
        item_count
    }

    fn frame(&self, item_count: usize, current: usize) -> TripleFrame {
        let n = item_count.max(1);
        TripleFrame {
            previous: (current + n - 1) % n,
            active: current,
            next: (current + 1) % n,
        }
    }

    fn visible(&self, item_count: usize, _current: usize) -> Range<usize> {
        // All cards stay mounted; roles decide which three are shown.
        0..item_count
    }
}
