//! Outbound rendering interface
//!
//! A surface receives the projected frame and the indicator set after every
//! accepted move. Both calls are pure projections of the carousel state, so
//! a surface must produce the same visible output when called twice with the
//! same arguments.

use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use crate::types::{CarouselKey, Indicators};

/// Whatever draws a carousel: the DOM, a log, a test buffer.
pub trait Surface<T, F>: Send + 'static {
    /// Draw the items covered by `frame`.
    fn render(&mut self, items: &[T], frame: &F);

    /// Draw the indicator dots with the active position marked.
    fn indicators(&mut self, indicators: &Indicators);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl<T, F> Surface<T, F> for NullSurface {
    fn render(&mut self, _items: &[T], _frame: &F) {}

    fn indicators(&mut self, _indicators: &Indicators) {}
}

/// Logs frames and indicators through `tracing`.
#[derive(Debug, Clone)]
pub struct TracingSurface {
    key: CarouselKey,
}

impl TracingSurface {
    /// Logs scoped to carousel `key`.
    pub fn new(key: CarouselKey) -> Self {
        Self { key }
    }
}

impl<T: Debug, F: Debug> Surface<T, F> for TracingSurface {
    fn render(&mut self, items: &[T], frame: &F) {
        info!(carousel = %self.key, ?frame, "render");
        debug!(carousel = %self.key, item_count = items.len(), ?items, "render items");
    }

    fn indicators(&mut self, indicators: &Indicators) {
        debug!(
            carousel = %self.key,
            count = indicators.count,
            active = indicators.active,
            "indicators"
        );
    }
}

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent<F> {
    /// A frame was drawn.
    Render(F),
    /// The indicator dots were drawn.
    Indicators(Indicators),
}

/// Records every call in a shared buffer.
///
/// Clones share the buffer, so a caller can hand one clone to a controller
/// and inspect the other.
#[derive(Debug)]
pub struct RecordingSurface<F> {
    events: Arc<Mutex<Vec<SurfaceEvent<F>>>>,
}

impl<F> Clone for RecordingSurface<F> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}

impl<F> Default for RecordingSurface<F> {
    fn default() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<F: Clone> RecordingSurface<F> {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call so far, in order.
    pub fn events(&self) -> Vec<SurfaceEvent<F>> {
        self.lock().clone()
    }

    /// Frames rendered so far, in order.
    pub fn frames(&self) -> Vec<F> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Render(frame) => Some(frame.clone()),
                SurfaceEvent::Indicators(_) => None,
            })
            .collect()
    }

    /// Most recent indicator set.
    pub fn last_indicators(&self) -> Option<Indicators> {
        self.lock().iter().rev().find_map(|event| match event {
            SurfaceEvent::Indicators(dots) => Some(*dots),
            SurfaceEvent::Render(_) => None,
        })
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SurfaceEvent<F>>> {
        // The buffer is append-only, so a poisoned lock is still readable.
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T, F> Surface<T, F> for RecordingSurface<F>
where
    F: Clone + Send + 'static,
{
    fn render(&mut self, _items: &[T], frame: &F) {
        self.lock().push(SurfaceEvent::Render(frame.clone()));
    }

    fn indicators(&mut self, indicators: &Indicators) {
        self.lock().push(SurfaceEvent::Indicators(*indicators));
    }
}
