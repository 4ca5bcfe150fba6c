use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4::gdk::prelude::GdkCairoContextExt;
use gtk4::prelude::*;
use gtk4::DrawingArea;

use crate::crop::{CropRegion, Edge, MASK_OPACITY};
use crate::geometry::Orientation;

use super::viewport::fit_to_canvas;

const GUIDE_LINE_WIDTH: f64 = 3.0;
const GUIDE_LINE_WIDTH_HOVER: f64 = 6.0;
const GUIDE_DASH: [f64; 2] = [8.0, 6.0];
const GUIDE_OPACITY: f64 = 0.5;
const GUIDE_COLOR: (f64, f64, f64) = (1.0, 1.0, 1.0);
const MASK_COLOR: (f64, f64, f64) = (0.0, 0.0, 0.0);

/// Installs the draw function: image fitted to the canvas, the four mask
/// bands over it, and the dashed edge guides on top. Everything after the
/// transform is drawn in image coordinates.
pub(super) fn configure_canvas_draw(
    canvas: &DrawingArea,
    pixbuf: gtk4::gdk_pixbuf::Pixbuf,
    region: Rc<RefCell<CropRegion>>,
    hovered_edge: Rc<Cell<Option<Edge>>>,
) {
    canvas.set_draw_func(move |_, context, width, height| {
        if width <= 0 || height <= 0 {
            return;
        }
        let region = region.borrow();
        let transform = fit_to_canvas(f64::from(width), f64::from(height), region.bounds());

        context.save().ok();
        context.translate(transform.offset_x, transform.offset_y);
        context.scale(transform.scale, transform.scale);

        context.set_source_pixbuf(&pixbuf, 0.0, 0.0);
        context.paint().ok();

        let (mask_r, mask_g, mask_b) = MASK_COLOR;
        context.set_source_rgba(mask_r, mask_g, mask_b, MASK_OPACITY);
        for band in region.mask().bands() {
            context.rectangle(band.x, band.y, band.width, band.height);
        }
        let _ = context.fill();

        let (guide_r, guide_g, guide_b) = GUIDE_COLOR;
        context.set_source_rgba(guide_r, guide_g, guide_b, GUIDE_OPACITY);
        context.set_dash(&GUIDE_DASH, 0.0);
        for edge in Edge::ALL {
            let handle = region.handle(edge);
            let line_width = if hovered_edge.get() == Some(edge) {
                GUIDE_LINE_WIDTH_HOVER
            } else {
                GUIDE_LINE_WIDTH
            };
            context.set_line_width(line_width);

            let position = handle.position();
            let (span_start, span_length) = handle.span();
            match handle.orientation() {
                Orientation::Vertical => {
                    context.move_to(position, span_start);
                    context.line_to(position, span_start + span_length);
                }
                Orientation::Horizontal => {
                    context.move_to(span_start, position);
                    context.line_to(span_start + span_length, position);
                }
            }
            let _ = context.stroke();
        }

        context.restore().ok();
    });
}
