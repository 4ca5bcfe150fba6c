use crate::geometry::{CropRect, ImageBounds, Orientation};

use super::handle::EdgeHandle;
use super::mask::CropMask;

/// Fraction of the image dimension at which the near edges start; the far
/// edges mirror it, so the initial selection is the central region.
const INITIAL_EDGE_FRACTION: f64 = 0.2;

/// How far guide lines extend past the image on each side, so they cross
/// the whole view at any zoom.
const GUIDE_OVERSHOOT: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    pub const fn orientation(self) -> Orientation {
        match self {
            Edge::Left | Edge::Right => Orientation::Vertical,
            Edge::Top | Edge::Bottom => Orientation::Horizontal,
        }
    }
}

/// Owns the four edge guides and the mask, and does all the wiring between
/// them with direct calls: an accepted move updates the mask's matching
/// edge and re-clamps the opposing guide's range so `left < right` and
/// `top < bottom` hold at every observable instant.
#[derive(Debug, Clone)]
pub struct CropRegion {
    bounds: ImageBounds,
    left: EdgeHandle,
    right: EdgeHandle,
    top: EdgeHandle,
    bottom: EdgeHandle,
    mask: CropMask,
}

impl CropRegion {
    pub fn new(bounds: ImageBounds) -> Self {
        let left_pos = INITIAL_EDGE_FRACTION * bounds.width;
        let right_pos = (1.0 - INITIAL_EDGE_FRACTION) * bounds.width;
        let top_pos = INITIAL_EDGE_FRACTION * bounds.height;
        let bottom_pos = (1.0 - INITIAL_EDGE_FRACTION) * bounds.height;

        let vertical_span = (-GUIDE_OVERSHOOT, bounds.height + 2.0 * GUIDE_OVERSHOOT);
        let horizontal_span = (-GUIDE_OVERSHOOT, bounds.width + 2.0 * GUIDE_OVERSHOOT);

        let left = EdgeHandle::new(
            Orientation::Vertical,
            left_pos,
            vertical_span.0,
            vertical_span.1,
            0.0,
            right_pos,
        );
        let right = EdgeHandle::new(
            Orientation::Vertical,
            right_pos,
            vertical_span.0,
            vertical_span.1,
            left_pos,
            bounds.width,
        );
        let top = EdgeHandle::new(
            Orientation::Horizontal,
            top_pos,
            horizontal_span.0,
            horizontal_span.1,
            0.0,
            bottom_pos,
        );
        let bottom = EdgeHandle::new(
            Orientation::Horizontal,
            bottom_pos,
            horizontal_span.0,
            horizontal_span.1,
            top_pos,
            bounds.height,
        );

        let mask = CropMask::new(
            bounds,
            CropRect::new(left_pos, right_pos, top_pos, bottom_pos),
        );

        Self {
            bounds,
            left,
            right,
            top,
            bottom,
            mask,
        }
    }

    pub const fn bounds(&self) -> ImageBounds {
        self.bounds
    }

    pub fn handle(&self, edge: Edge) -> &EdgeHandle {
        match edge {
            Edge::Left => &self.left,
            Edge::Right => &self.right,
            Edge::Top => &self.top,
            Edge::Bottom => &self.bottom,
        }
    }

    pub fn mask(&self) -> &CropMask {
        &self.mask
    }

    /// Attempts to move one edge guide to `position` (image coordinates,
    /// along the guide's own axis). On acceptance the mask and the opposing
    /// guide's bound are updated before returning, so callers observe a
    /// consistent state. Returns whether a repaint is needed.
    pub fn move_edge(&mut self, edge: Edge, position: f64) -> bool {
        match edge {
            Edge::Left => {
                if !self.left.set_position(position) {
                    return false;
                }
                let moved = self.left.position();
                self.mask.set_left(moved);
                self.right.set_min_bound(moved);
            }
            Edge::Right => {
                if !self.right.set_position(position) {
                    return false;
                }
                let moved = self.right.position();
                self.mask.set_right(moved);
                self.left.set_max_bound(moved);
            }
            Edge::Top => {
                if !self.top.set_position(position) {
                    return false;
                }
                let moved = self.top.position();
                self.mask.set_top(moved);
                self.bottom.set_min_bound(moved);
            }
            Edge::Bottom => {
                if !self.bottom.set_position(position) {
                    return false;
                }
                let moved = self.bottom.position();
                self.mask.set_bottom(moved);
                self.top.set_max_bound(moved);
            }
        }
        true
    }

    /// The selection read from the four guides at call time.
    pub fn crop_rectangle(&self) -> CropRect {
        CropRect::new(
            self.left.position(),
            self.right.position(),
            self.top.position(),
            self.bottom.position(),
        )
    }

    /// Restores the initial central selection and guide ranges.
    pub fn reset(&mut self) {
        *self = Self::new(self.bounds);
    }
}
