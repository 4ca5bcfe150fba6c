use crate::geometry::ImageBounds;

/// Aspect-preserving, centered mapping between the canvas and image
/// coordinate spaces. Recomputed from the live canvas size on every use,
/// so a viewport resize changes only this transform — never the image-space
/// model behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct FitTransform {
    pub(super) scale: f64,
    pub(super) offset_x: f64,
    pub(super) offset_y: f64,
    bounds: ImageBounds,
}

pub(super) fn fit_to_canvas(
    canvas_width: f64,
    canvas_height: f64,
    bounds: ImageBounds,
) -> FitTransform {
    if bounds.is_empty() || canvas_width <= 0.0 || canvas_height <= 0.0 {
        return FitTransform {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            bounds,
        };
    }
    let scale = (canvas_width / bounds.width).min(canvas_height / bounds.height);
    FitTransform {
        scale,
        offset_x: (canvas_width - bounds.width * scale) / 2.0,
        offset_y: (canvas_height - bounds.height * scale) / 2.0,
        bounds,
    }
}

impl FitTransform {
    /// Canvas point to image point, clamped into the image bounds.
    pub(super) fn to_image(&self, canvas_x: f64, canvas_y: f64) -> (f64, f64) {
        let x = ((canvas_x - self.offset_x) / self.scale).clamp(0.0, self.bounds.width);
        let y = ((canvas_y - self.offset_y) / self.scale).clamp(0.0, self.bounds.height);
        (x, y)
    }

    pub(super) fn to_canvas(&self, image_x: f64, image_y: f64) -> (f64, f64) {
        (
            self.offset_x + image_x * self.scale,
            self.offset_y + image_y * self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crop::{CropRegion, Edge};

    const BOUNDS: ImageBounds = ImageBounds::new(800.0, 600.0);

    #[test]
    fn fit_picks_the_limiting_axis_and_centers_the_other() {
        let exact = fit_to_canvas(400.0, 300.0, BOUNDS);
        assert_eq!(exact.scale, 0.5);
        assert_eq!((exact.offset_x, exact.offset_y), (0.0, 0.0));

        let tall = fit_to_canvas(400.0, 400.0, BOUNDS);
        assert_eq!(tall.scale, 0.5);
        assert_eq!((tall.offset_x, tall.offset_y), (0.0, 50.0));

        let wide = fit_to_canvas(1000.0, 300.0, BOUNDS);
        assert_eq!(wide.scale, 0.5);
        assert_eq!((wide.offset_x, wide.offset_y), (300.0, 0.0));
    }

    #[test]
    fn to_image_and_to_canvas_round_trip() {
        let transform = fit_to_canvas(400.0, 400.0, BOUNDS);
        let (canvas_x, canvas_y) = transform.to_canvas(160.0, 120.0);
        assert_eq!((canvas_x, canvas_y), (80.0, 110.0));
        assert_eq!(transform.to_image(canvas_x, canvas_y), (160.0, 120.0));
    }

    #[test]
    fn to_image_clamps_points_outside_the_image() {
        let transform = fit_to_canvas(400.0, 400.0, BOUNDS);
        assert_eq!(transform.to_image(-30.0, -30.0), (0.0, 0.0));
        assert_eq!(transform.to_image(500.0, 500.0), (800.0, 600.0));
    }

    #[test]
    fn degenerate_canvas_or_bounds_yield_the_identity_transform() {
        let transform = fit_to_canvas(0.0, 300.0, BOUNDS);
        assert_eq!(transform.scale, 1.0);
        let transform = fit_to_canvas(400.0, 300.0, ImageBounds::new(0.0, 0.0));
        assert_eq!(transform.scale, 1.0);
    }

    #[test]
    fn resizing_the_viewport_leaves_the_selection_untouched() {
        let mut region = CropRegion::new(BOUNDS);
        assert!(region.move_edge(Edge::Left, 500.0));
        let before = region.crop_rectangle();

        let small = fit_to_canvas(400.0, 300.0, region.bounds());
        let large = fit_to_canvas(1600.0, 1200.0, region.bounds());
        assert_ne!(small.scale, large.scale);
        assert_eq!(region.crop_rectangle(), before);
    }
}
