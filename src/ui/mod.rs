pub mod style;

pub use style::{runtime_css, tokens_for, ColorTokens, StyleTokens, ThemeMode, LAYOUT_TOKENS};
