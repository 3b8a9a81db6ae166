//! FAQ accordion

use tracing::trace;

/// FAQ list where at most one answer is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    len: usize,
    open: Option<usize>,
}

impl FaqAccordion {
    /// `len` items, all closed.
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Toggle item `index`: an open item closes, any other item opens and
    /// closes the rest. Returns the item left open.
    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            trace!(index, len = self.len, "faq toggle out of range");
            return self.open;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        self.open
    }

    /// The expanded item, if any.
    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    /// Whether item `index` is expanded.
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Collapse everything.
    pub fn close_all(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_item_is_open() {
        let mut faq = FaqAccordion::new(4);
        assert_eq!(faq.toggle(1), Some(1));
        assert_eq!(faq.toggle(3), Some(3));
        assert!(!faq.is_open(1));
        assert!(faq.is_open(3));
    }

    #[test]
    fn toggling_the_open_item_closes_it() {
        let mut faq = FaqAccordion::new(2);
        faq.toggle(0);
        assert_eq!(faq.toggle(0), None);
        assert_eq!(faq.open_item(), None);
    }

    #[test]
    fn out_of_range_leaves_state_alone() {
        let mut faq = FaqAccordion::new(2);
        faq.toggle(1);
        assert_eq!(faq.toggle(5), Some(1));
    }
}
