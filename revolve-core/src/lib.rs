//! Rotating carousel controller.
//!
//! A carousel is a circular cursor over a fixed list of items. Navigation
//! (`next`, `previous`, `go_to`, timer ticks) moves the cursor with
//! wraparound; an optional transition lock rejects requests while an
//! animation is in flight; every accepted move re-renders the active frame
//! and the indicator dots through a [`Surface`].
//!
//! The crate is split the same way the rendering pipeline is:
//!
//! - [`state`] holds the synchronous state machine ([`CarouselState`]).
//! - [`layout`] holds the render strategies that project the cursor into a
//!   frame (orbit, page, prev/active/next).
//! - [`surface`] is the outbound interface to whatever draws the frame.
//! - [`timer`] owns the auto-advance interval.
//! - [`controller`] runs a state inside a tokio task and exposes a
//!   [`CarouselHandle`] for inbound events.

pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod layout;
pub mod state;
pub mod surface;
pub mod timer;
pub mod types;

pub use config::CarouselConfig;
pub use controller::{CarouselController, CarouselHandle, CarouselSnapshot};
pub use error::{CarouselError, Result};
pub use layout::{
    OrbitFrame, OrbitLayout, OrbitPlacement, PageFrame, PageLayout,
    RenderStrategy, Role, TripleFrame, TripleLayout,
};
pub use state::CarouselState;
pub use surface::{
    NullSurface, RecordingSurface, Surface, SurfaceEvent, TracingSurface,
};
pub use timer::AutoAdvance;
pub use types::{
    CarouselKey, Cause, IgnoreReason, Indicators, Phase, Transition,
};
