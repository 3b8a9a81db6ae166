//! Single-focus 3D orbit
//!
//! Items sit on a ring; the active item faces the viewer and the rest are
//! placed by their angular offset from it. Placement depends only on that
//! offset, never on how the carousel got there.

use std::ops::Range;

use super::RenderStrategy;
use crate::constants::orbit;

/// Ring geometry. Defaults come from [`crate::constants::orbit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLayout {
    /// Ring radius in pixels.
    pub radius: f32,
    /// Depth over which scale falls to `min_scale`.
    pub scale_depth: f32,
    /// Depth over which opacity falls to `min_opacity`.
    pub opacity_depth: f32,
    /// Scale floor.
    pub min_scale: f32,
    /// Opacity floor.
    pub min_opacity: f32,
}

impl Default for OrbitLayout {
    fn default() -> Self {
        Self {
            radius: orbit::RADIUS,
            scale_depth: orbit::SCALE_DEPTH,
            opacity_depth: orbit::OPACITY_DEPTH,
            min_scale: orbit::MIN_SCALE,
            min_opacity: orbit::MIN_OPACITY,
        }
    }
}

/// Visual placement of one item on the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPlacement {
    /// Item index.
    pub index: usize,
    /// Horizontal offset in pixels.
    pub translate_x: f32,
    /// Depth offset in pixels; negative is further away.
    pub translate_z: f32,
    /// Clamped to `min_scale..=1.0`.
    pub scale: f32,
    /// Clamped to `min_opacity..=1.0`.
    pub opacity: f32,
    /// Stacking order; nearer items stack higher.
    pub z_index: i32,
    /// Whether this is the focused item.
    pub active: bool,
}

impl OrbitPlacement {
    /// CSS transform string for this placement.
    pub fn css_transform(&self) -> String {
        format!(
            "translateX({}px) translateZ({}px) scale({})",
            self.translate_x, self.translate_z, self.scale
        )
    }
}

/// Placements for every item, in item order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitFrame {
    /// Focused item.
    pub active: usize,
    /// One entry per item.
    pub placements: Vec<OrbitPlacement>,
}

impl OrbitLayout {
    /// Default ring geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the ring radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Placement of `index` when `current` is the active item.
    pub fn place(
        &self,
        item_count: usize,
        index: usize,
        current: usize,
    ) -> OrbitPlacement {
        let step = 360.0 / item_count.max(1) as f32;
        let relative = step * (index as f32 - current as f32);
        let radians = relative.to_radians();

        let translate_z = radians.cos() * self.radius;
        let translate_x = radians.sin() * self.radius;
        let depth = translate_z.abs();

        OrbitPlacement {
            index,
            translate_x,
            translate_z,
            scale: (1.0 - depth / self.scale_depth).max(self.min_scale),
            opacity: (1.0 - depth / self.opacity_depth).max(self.min_opacity),
            z_index: translate_z.round() as i32,
            active: index == current,
        }
    }
}

impl RenderStrategy for OrbitLayout {
    type Frame = OrbitFrame;

    fn positions(&self, item_count: usize) -> usize {
        item_count
    }

    fn frame(&self, item_count: usize, current: usize) -> OrbitFrame {
        OrbitFrame {
            active: current,
            placements: (0..item_count)
                .map(|i| self.place(item_count, i, current))
                .collect(),
        }
    }

    fn visible(&self, item_count: usize, _current: usize) -> Range<usize> {
        // Every card on the ring is drawn; only its placement changes.
        0..item_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn active_item_faces_the_viewer() {
        let layout = OrbitLayout::default();
        let p = layout.place(4, 2, 2);
        assert!(p.active);
        assert!(close(p.translate_x, 0.0));
        assert!(close(p.translate_z, 400.0));
        assert_eq!(p.z_index, 400);
        // 1 - 400/800 = 0.5, clamped up to the minimum.
        assert!(close(p.scale, 0.6));
        assert!(close(p.opacity, 1.0 - 400.0 / 600.0));
    }

    #[test]
    fn quarter_turn_sits_beside_the_active_item() {
        let layout = OrbitLayout::default();
        let p = layout.place(4, 1, 0);
        assert!(!p.active);
        assert!(close(p.translate_x, 400.0));
        assert!(close(p.translate_z, 0.0));
        assert_eq!(p.z_index, 0);
        assert!(close(p.scale, 1.0));
        assert!(close(p.opacity, 1.0));
    }

    #[test]
    fn opposite_item_is_pushed_to_the_back() {
        let layout = OrbitLayout::default();
        let p = layout.place(4, 2, 0);
        assert!(close(p.translate_z, -400.0));
        assert_eq!(p.z_index, -400);
    }

    #[test]
    fn placement_depends_only_on_offset() {
        let layout = OrbitLayout::default();
        let a = layout.place(8, 3, 1);
        let b = layout.place(8, 6, 4);
        assert!(close(a.translate_x, b.translate_x));
        assert!(close(a.translate_z, b.translate_z));
        assert!(close(a.scale, b.scale));
    }

    #[test]
    fn frame_covers_every_item_with_one_active() {
        let layout = OrbitLayout::default();
        let frame = layout.frame(8, 5);
        assert_eq!(frame.placements.len(), 8);
        let active: Vec<_> =
            frame.placements.iter().filter(|p| p.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].index, 5);
        assert_eq!(layout.visible(8, 5), 0..8);
    }

    #[test]
    fn css_transform_formats_all_components() {
        let placement = OrbitPlacement {
            index: 0,
            translate_x: 0.0,
            translate_z: 400.0,
            scale: 0.6,
            opacity: 0.5,
            z_index: 400,
            active: true,
        };
        assert_eq!(
            placement.css_transform(),
            "translateX(0px) translateZ(400px) scale(0.6)"
        );
    }
}
