//! Fixed-size pages over the item list

use std::ops::Range;

use super::RenderStrategy;
use crate::constants::paging;

/// Shows `page_size` contiguous items per position. The last page may be
/// short when the item count is not a multiple of the page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    /// Items per page.
    pub page_size: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_size: paging::PARTNERS_PAGE_SIZE,
        }
    }
}

/// The page on display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFrame {
    /// Zero-based page number.
    pub page: usize,
    /// Item indices on this page.
    pub range: Range<usize>,
}

impl PageLayout {
    /// Pages of `page_size` items.
    pub fn new(page_size: usize) -> Self {
        Self { page_size }
    }

    fn page_range(&self, item_count: usize, page: usize) -> Range<usize> {
        let start = (page * self.page_size).min(item_count);
        let end = (start + self.page_size).min(item_count);
        start..end
    }
}

impl RenderStrategy for PageLayout {
    type Frame = PageFrame;

    fn positions(&self, item_count: usize) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        item_count.div_ceil(self.page_size)
    }

    fn frame(&self, item_count: usize, current: usize) -> PageFrame {
        PageFrame {
            page: current,
            range: self.page_range(item_count, current),
        }
    }

    fn visible(&self, item_count: usize, current: usize) -> Range<usize> {
        self.page_range(item_count, current)
    }
}
