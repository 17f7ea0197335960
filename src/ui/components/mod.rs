//! UI building blocks shared across rendering and state modules.

/// The view behind the search surface.
pub mod landing;
/// The prompt row of the search surface.
pub mod prompt;
/// The results container.
pub mod results;

pub use landing::{LandingContext, render_landing};
pub use prompt::{InputContext, ProgressState, render_prompt};
pub use results::{ResultRow, ResultsContext, ResultsView, RowTarget, Tone, render_results};
