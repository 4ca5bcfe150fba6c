use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// Compile-time layout tokens — not user-overridable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTokens {
    pub spacing_4: i32,
    pub spacing_8: i32,
    pub window_default_width: i32,
    pub window_default_height: i32,
    pub window_min_width: i32,
    pub window_min_height: i32,
}

pub const LAYOUT_TOKENS: StyleTokens = StyleTokens {
    spacing_4: 4,
    spacing_8: 8,
    window_default_width: 960,
    window_default_height: 640,
    window_min_width: 480,
    window_min_height: 360,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTokens {
    pub window_background: &'static str,
    pub canvas_background: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
}

pub const DARK_COLOR_TOKENS: ColorTokens = ColorTokens {
    window_background: "#353535",
    canvas_background: "#1e1e1e",
    text: "#ffffff",
    accent: "#2a82da",
};

pub const LIGHT_COLOR_TOKENS: ColorTokens = ColorTokens {
    window_background: "#fafafa",
    canvas_background: "#ffffff",
    text: "#1e1e1e",
    accent: "#2a82da",
};

pub fn tokens_for(mode: ThemeMode) -> ColorTokens {
    match mode {
        ThemeMode::Dark => DARK_COLOR_TOKENS,
        ThemeMode::Light => LIGHT_COLOR_TOKENS,
    }
}

pub fn runtime_css(colors: &ColorTokens, layout: StyleTokens) -> String {
    format!(
        "window.cropline-root {{\n\
         \x20   background-color: {window_background};\n\
         \x20   color: {text};\n\
         }}\n\
         .crop-canvas {{\n\
         \x20   background-color: {canvas_background};\n\
         }}\n\
         .status-bar {{\n\
         \x20   padding: {pad_v}px {pad_h}px;\n\
         \x20   font-family: monospace;\n\
         \x20   color: {text};\n\
         }}\n\
         .status-bar.confirmed {{\n\
         \x20   color: {accent};\n\
         }}\n",
        window_background = colors.window_background,
        canvas_background = colors.canvas_background,
        text = colors.text,
        accent = colors.accent,
        pad_v = layout.spacing_4,
        pad_h = layout.spacing_8,
    )
}
