use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{ApplicationWindow, DrawingArea};

use crate::crop::{CropRegion, Edge};
use crate::input::{resolve_shortcut, ShortcutAction, ShortcutKey};

use super::viewport::{fit_to_canvas, FitTransform};

/// Pointer distance (canvas px) within which a guide counts as hit.
const GUIDE_HIT_WIDTH: f64 = 12.0;

/// The first guide, in fixed Left/Right/Top/Bottom order, whose canvas-space
/// line lies within half the hit width of the pointer coordinate on the
/// guide's own axis.
pub(super) fn edge_at_canvas_point(
    region: &CropRegion,
    transform: &FitTransform,
    x: f64,
    y: f64,
) -> Option<Edge> {
    Edge::ALL.into_iter().find(|&edge| {
        let handle = region.handle(edge);
        let position = handle.position();
        let (canvas_x, canvas_y) = transform.to_canvas(position, position);
        let guide_coordinate = handle.axis_coordinate(canvas_x, canvas_y);
        let pointer_coordinate = handle.axis_coordinate(x, y);
        (pointer_coordinate - guide_coordinate).abs() <= GUIDE_HIT_WIDTH / 2.0
    })
}

fn canvas_fit_transform(canvas: &DrawingArea, region: &CropRegion) -> FitTransform {
    let width = f64::from(canvas.allocated_width().max(1));
    let height = f64::from(canvas.allocated_height().max(1));
    fit_to_canvas(width, height, region.bounds())
}

fn cursor_for_edge(edge: Edge) -> &'static str {
    match edge {
        Edge::Left | Edge::Right => "col-resize",
        Edge::Top | Edge::Bottom => "row-resize",
    }
}

#[derive(Clone)]
pub(super) struct CropDragContext {
    pub(super) canvas: DrawingArea,
    pub(super) region: Rc<RefCell<CropRegion>>,
    pub(super) active_edge: Rc<Cell<Option<Edge>>>,
    pub(super) drag_start_canvas: Rc<Cell<(f64, f64)>>,
    pub(super) refresh_status: Rc<dyn Fn()>,
}

fn handle_drag_begin(
    context: &CropDragContext,
    gesture: &gtk4::GestureDrag,
    start_x: f64,
    start_y: f64,
) {
    let hit = {
        let region = context.region.borrow();
        let transform = canvas_fit_transform(&context.canvas, &region);
        edge_at_canvas_point(&region, &transform, start_x, start_y)
    };
    match hit {
        Some(edge) => {
            context.drag_start_canvas.set((start_x, start_y));
            context.active_edge.set(Some(edge));
            tracing::debug!(?edge, "guide drag started");
            gesture.set_state(gtk4::EventSequenceState::Claimed);
        }
        None => {
            gesture.set_state(gtk4::EventSequenceState::Denied);
        }
    }
}

fn handle_drag_update(context: &CropDragContext, offset_x: f64, offset_y: f64) {
    let Some(edge) = context.active_edge.get() else {
        return;
    };
    let (start_x, start_y) = context.drag_start_canvas.get();
    let accepted = {
        let mut region = context.region.borrow_mut();
        let transform = canvas_fit_transform(&context.canvas, &region);
        let (image_x, image_y) = transform.to_image(start_x + offset_x, start_y + offset_y);
        let position = region.handle(edge).axis_coordinate(image_x, image_y);
        region.move_edge(edge, position)
    };
    if accepted {
        (context.refresh_status.as_ref())();
        context.canvas.queue_draw();
    }
}

fn handle_drag_end(context: &CropDragContext) {
    if let Some(edge) = context.active_edge.take() {
        tracing::debug!(?edge, "guide drag finished");
    }
}

pub(super) fn connect_crop_drag_gesture(context: CropDragContext) {
    let drag_gesture = gtk4::GestureDrag::new();
    drag_gesture.set_button(gtk4::gdk::BUTTON_PRIMARY);

    let begin_context = context.clone();
    drag_gesture.connect_drag_begin(move |gesture, start_x, start_y| {
        handle_drag_begin(&begin_context, gesture, start_x, start_y);
    });

    let update_context = context.clone();
    drag_gesture.connect_drag_update(move |_, offset_x, offset_y| {
        handle_drag_update(&update_context, offset_x, offset_y);
    });

    let end_context = context.clone();
    drag_gesture.connect_drag_end(move |_, _, _| {
        handle_drag_end(&end_context);
    });

    context.canvas.add_controller(drag_gesture);
}

#[derive(Clone)]
pub(super) struct GuideHoverContext {
    pub(super) canvas: DrawingArea,
    pub(super) region: Rc<RefCell<CropRegion>>,
    pub(super) hovered_edge: Rc<Cell<Option<Edge>>>,
    pub(super) active_edge: Rc<Cell<Option<Edge>>>,
}

/// Hover tracking: entering a guide's hit zone thickens it and swaps the
/// cursor; leaving thins it again. Frozen while a drag is in progress so
/// the dragged guide stays emphasized.
pub(super) fn connect_guide_hover(context: GuideHoverContext) {
    let motion = gtk4::EventControllerMotion::new();

    let motion_context = context.clone();
    motion.connect_motion(move |_, x, y| {
        if motion_context.active_edge.get().is_some() {
            return;
        }
        let hit = {
            let region = motion_context.region.borrow();
            let transform = canvas_fit_transform(&motion_context.canvas, &region);
            edge_at_canvas_point(&region, &transform, x, y)
        };
        if motion_context.hovered_edge.get() != hit {
            motion_context.hovered_edge.set(hit);
            motion_context
                .canvas
                .set_cursor_from_name(hit.map(cursor_for_edge));
            motion_context.canvas.queue_draw();
        }
    });

    let leave_context = context.clone();
    motion.connect_leave(move |_| {
        if leave_context.hovered_edge.take().is_some() {
            leave_context.canvas.set_cursor_from_name(None::<&str>);
            leave_context.canvas.queue_draw();
        }
    });

    context.canvas.add_controller(motion);
}

#[derive(Clone)]
pub(super) struct ShortcutKeyContext {
    pub(super) window: ApplicationWindow,
    pub(super) canvas: DrawingArea,
    pub(super) region: Rc<RefCell<CropRegion>>,
    pub(super) hovered_edge: Rc<Cell<Option<Edge>>>,
    pub(super) on_confirm: Rc<dyn Fn()>,
    pub(super) refresh_status: Rc<dyn Fn()>,
}

fn shortcut_key_from_keyval(keyval: gtk4::gdk::Key) -> Option<ShortcutKey> {
    match keyval {
        gtk4::gdk::Key::Return | gtk4::gdk::Key::KP_Enter => Some(ShortcutKey::Enter),
        gtk4::gdk::Key::Escape => Some(ShortcutKey::Escape),
        other => other
            .to_unicode()
            .map(|character| ShortcutKey::Character(character.to_ascii_lowercase())),
    }
}

pub(super) fn connect_key_shortcuts(context: ShortcutKeyContext) {
    let key_controller = gtk4::EventControllerKey::new();

    let key_context = context.clone();
    key_controller.connect_key_pressed(move |_, keyval, _, _| {
        let Some(key) = shortcut_key_from_keyval(keyval) else {
            return gtk4::glib::Propagation::Proceed;
        };
        match resolve_shortcut(key) {
            Some(ShortcutAction::ConfirmCrop) => {
                (key_context.on_confirm.as_ref())();
                gtk4::glib::Propagation::Stop
            }
            Some(ShortcutAction::ResetSelection) => {
                key_context.region.borrow_mut().reset();
                key_context.hovered_edge.set(None);
                (key_context.refresh_status.as_ref())();
                key_context.canvas.queue_draw();
                tracing::debug!("selection reset");
                gtk4::glib::Propagation::Stop
            }
            Some(ShortcutAction::Quit) => {
                key_context.window.close();
                gtk4::glib::Propagation::Stop
            }
            None => gtk4::glib::Propagation::Proceed,
        }
    });

    context.window.add_controller(key_controller);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ImageBounds;

    fn identity_setup() -> (CropRegion, FitTransform) {
        let region = CropRegion::new(ImageBounds::new(800.0, 600.0));
        let transform = fit_to_canvas(800.0, 600.0, region.bounds());
        (region, transform)
    }

    #[test]
    fn pointer_near_a_guide_hits_it() {
        let (region, transform) = identity_setup();
        assert_eq!(
            edge_at_canvas_point(&region, &transform, 165.0, 300.0),
            Some(Edge::Left)
        );
        assert_eq!(
            edge_at_canvas_point(&region, &transform, 636.0, 300.0),
            Some(Edge::Right)
        );
        assert_eq!(
            edge_at_canvas_point(&region, &transform, 400.0, 121.0),
            Some(Edge::Top)
        );
        assert_eq!(
            edge_at_canvas_point(&region, &transform, 400.0, 483.0),
            Some(Edge::Bottom)
        );
    }

    #[test]
    fn pointer_outside_every_hit_zone_hits_nothing() {
        let (region, transform) = identity_setup();
        assert_eq!(edge_at_canvas_point(&region, &transform, 400.0, 300.0), None);
        assert_eq!(edge_at_canvas_point(&region, &transform, 167.0, 300.0), None);
    }

    #[test]
    fn hit_testing_follows_the_canvas_space_scale() {
        let region = CropRegion::new(ImageBounds::new(800.0, 600.0));
        let transform = fit_to_canvas(400.0, 300.0, region.bounds());
        // left guide at image x 160 sits at canvas x 80 under 0.5 scale
        assert_eq!(
            edge_at_canvas_point(&region, &transform, 84.0, 150.0),
            Some(Edge::Left)
        );
        assert_eq!(edge_at_canvas_point(&region, &transform, 160.0, 150.0), None);
    }

    #[test]
    fn vertical_guides_win_over_horizontal_at_crossings() {
        let (region, transform) = identity_setup();
        assert_eq!(
            edge_at_canvas_point(&region, &transform, 160.0, 120.0),
            Some(Edge::Left)
        );
    }

    #[test]
    fn keyvals_map_to_shortcut_keys() {
        assert_eq!(
            shortcut_key_from_keyval(gtk4::gdk::Key::Return),
            Some(ShortcutKey::Enter)
        );
        assert_eq!(
            shortcut_key_from_keyval(gtk4::gdk::Key::Escape),
            Some(ShortcutKey::Escape)
        );
        assert_eq!(
            shortcut_key_from_keyval(gtk4::gdk::Key::R),
            Some(ShortcutKey::Character('r'))
        );
    }
}
