use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Box as GtkBox, DrawingArea, Label};

use crate::crop::{CropRegion, Edge};
use crate::error::{AppError, AppResult};
use crate::geometry::{CropRect, ImageBounds};
use crate::ui::{runtime_css, tokens_for, ColorTokens, StyleTokens, LAYOUT_TOKENS};

mod bootstrap;
mod canvas;
mod input_bridge;
mod viewport;

use self::bootstrap::bootstrap_app_runtime;
use self::canvas::configure_canvas_draw;
use self::input_bridge::{
    connect_crop_drag_gesture, connect_guide_hover, connect_key_shortcuts, CropDragContext,
    GuideHoverContext, ShortcutKeyContext,
};

const APP_ID: &str = "com.github.seweryn-dev.cropline";

pub struct App;

impl App {
    pub fn new() -> Self {
        Self
    }

    pub fn start(&mut self) -> AppResult<()> {
        let bootstrap = bootstrap_app_runtime();
        let image_path = bootstrap.image_path.ok_or(AppError::MissingImagePath)?;
        let pixbuf = gtk4::gdk_pixbuf::Pixbuf::from_file(&image_path).map_err(|source| {
            AppError::LoadImage {
                path: image_path.clone(),
                source,
            }
        })?;
        tracing::info!(
            path = %image_path.display(),
            width = pixbuf.width(),
            height = pixbuf.height(),
            "loaded image"
        );
        let colors = tokens_for(bootstrap.theme_mode);

        tracing::info!("starting gtk runtime");
        let application = Application::new(Some(APP_ID), gtk4::gio::ApplicationFlags::NON_UNIQUE);
        application.connect_activate(move |app| {
            install_runtime_css(&colors, LAYOUT_TOKENS);
            build_main_window(app, &pixbuf);
        });

        // Pass only argv[0] to GTK so app-specific flags (e.g. --light) do not fail GTK parsing.
        let gtk_args = std::env::args().take(1).collect::<Vec<_>>();
        application.run_with_args(&gtk_args);
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn install_runtime_css(colors: &ColorTokens, layout: StyleTokens) {
    let Some(display) = gtk4::gdk::Display::default() else {
        tracing::warn!("no display available; skipping runtime css install");
        return;
    };
    let provider = gtk4::CssProvider::new();
    provider.load_from_data(&runtime_css(colors, layout));
    gtk4::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

fn build_main_window(app: &Application, pixbuf: &gtk4::gdk_pixbuf::Pixbuf) {
    let bounds = ImageBounds::new(f64::from(pixbuf.width()), f64::from(pixbuf.height()));
    let region = Rc::new(RefCell::new(CropRegion::new(bounds)));
    let hovered_edge = Rc::new(Cell::new(None::<Edge>));
    let active_edge = Rc::new(Cell::new(None::<Edge>));

    let window = ApplicationWindow::new(app);
    window.add_css_class("cropline-root");
    window.set_title(Some("Cropline"));
    window.set_default_size(
        LAYOUT_TOKENS.window_default_width,
        LAYOUT_TOKENS.window_default_height,
    );
    window.set_size_request(LAYOUT_TOKENS.window_min_width, LAYOUT_TOKENS.window_min_height);

    let crop_canvas = DrawingArea::new();
    crop_canvas.add_css_class("crop-canvas");
    crop_canvas.set_hexpand(true);
    crop_canvas.set_vexpand(true);

    let status_label = Label::new(None);
    status_label.add_css_class("status-bar");
    status_label.set_halign(gtk4::Align::Start);
    status_label.set_xalign(0.0);

    let root = GtkBox::new(gtk4::Orientation::Vertical, 0);
    root.append(&crop_canvas);
    root.append(&status_label);
    window.set_child(Some(&root));

    let refresh_status: Rc<dyn Fn()> = {
        let region = region.clone();
        let status_label = status_label.clone();
        Rc::new(move || {
            let rect = region.borrow().crop_rectangle();
            status_label.remove_css_class("confirmed");
            status_label.set_text(&format_crop_status(rect));
        })
    };

    let on_confirm: Rc<dyn Fn()> = {
        let region = region.clone();
        let status_label = status_label.clone();
        Rc::new(move || {
            let rect = region.borrow().crop_rectangle();
            tracing::info!(
                left = rect.left,
                right = rect.right,
                top = rect.top,
                bottom = rect.bottom,
                "crop rectangle confirmed"
            );
            status_label.add_css_class("confirmed");
            status_label.set_text(&format!("confirmed — {}", format_crop_status(rect)));
        })
    };

    configure_canvas_draw(
        &crop_canvas,
        pixbuf.clone(),
        region.clone(),
        hovered_edge.clone(),
    );
    connect_crop_drag_gesture(CropDragContext {
        canvas: crop_canvas.clone(),
        region: region.clone(),
        active_edge: active_edge.clone(),
        drag_start_canvas: Rc::new(Cell::new((0.0, 0.0))),
        refresh_status: refresh_status.clone(),
    });
    connect_guide_hover(GuideHoverContext {
        canvas: crop_canvas.clone(),
        region: region.clone(),
        hovered_edge: hovered_edge.clone(),
        active_edge,
    });
    connect_key_shortcuts(ShortcutKeyContext {
        window: window.clone(),
        canvas: crop_canvas,
        region,
        hovered_edge,
        on_confirm,
        refresh_status: refresh_status.clone(),
    });

    (refresh_status.as_ref())();
    window.present();
}

fn format_crop_status(rect: CropRect) -> String {
    format!(
        "crop left {:.0}  right {:.0}  top {:.0}  bottom {:.0}  ({:.0}x{:.0})",
        rect.left,
        rect.right,
        rect.top,
        rect.bottom,
        rect.width(),
        rect.height()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_status_lists_edges_and_extent() {
        let text = format_crop_status(CropRect::new(160.0, 640.0, 120.0, 480.0));
        assert_eq!(text, "crop left 160  right 640  top 120  bottom 480  (480x360)");
    }
}
