//! Carousel constants
//!
//! Shared timing and geometry defaults for the site carousels. Tuning should
//! happen here so presets and layouts stay consistent.

/// Transition lock and auto-advance cadence.
pub mod timing {
    /// Lock held after every accepted move in single-focus carousels (ms).
    pub const TRANSITION_MS: u64 = 600;
    /// Auto-advance period of the destinations orbit (ms).
    pub const DESTINATIONS_AUTO_ADVANCE_MS: u64 = 4_000;
    /// Auto-advance period of the testimonials carousel (ms).
    pub const TESTIMONIALS_AUTO_ADVANCE_MS: u64 = 6_000;
}

/// Geometry of the 3D orbit projection.
pub mod orbit {
    /// Ring radius in pixels.
    pub const RADIUS: f32 = 400.0;
    /// Depth over which scale falls off to `MIN_SCALE`.
    pub const SCALE_DEPTH: f32 = 800.0;
    /// Depth over which opacity falls off to `MIN_OPACITY`.
    pub const OPACITY_DEPTH: f32 = 600.0;
    /// Smallest scale of a card at the back of the ring.
    pub const MIN_SCALE: f32 = 0.6;
    /// Smallest opacity of a card at the back of the ring.
    pub const MIN_OPACITY: f32 = 0.3;
}

/// Paged grid defaults.
pub mod paging {
    /// Partner cards shown per page.
    pub const PARTNERS_PAGE_SIZE: usize = 4;
}
