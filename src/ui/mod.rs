//! Interactive terminal UI for the DataLab search surface.
//!
//! The [`builder`] module exposes the public-facing [`SearchUi`] builder. The
//! remaining submodules implement the event loop, rendering pipeline, state
//! management, and the widgets/style definitions that power the terminal
//! application.

mod actions;
mod builder;
pub mod components;
mod config;
pub mod input;
mod render;
mod runtime;
mod search;
mod state;
pub mod style;

pub use builder::SearchUi;
pub use config::{Messages, UiConfig};
pub use state::{App, Focus, Visit};
