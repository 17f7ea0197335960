//! Visual styling utilities.
//!
//! Themes hold the color schemes applied to the terminal UI.

pub mod theme;

pub use theme::{LIGHT, SLATE, Theme, ThemeDefinition, builtin_themes, by_name, default_theme, names};
