//! Debounced search surface for DataLab, in the terminal.
//!
//! The root module re-exports the pieces an embedder needs: a
//! [`SearchBackend`] to answer queries, the [`SearchSession`] state machine,
//! and the [`SearchUi`] builder that runs the interactive surface.

pub mod app_dirs;
pub mod logging;
pub mod navigation;
pub mod session;
mod systems;
mod types;
pub mod ui;

pub use navigation::{Navigation, NavigationStep, SearchOutcome};
pub use session::{
	ApplyOutcome, DEFAULT_DEBOUNCE, Debouncer, EmptyKind, InputChange, QueryTag, SearchSession,
	SessionState,
};
pub use systems::search::{
	DEFAULT_MAX_RESULTS, DEFAULT_TIMEOUT, FailureKind, FixtureError, FixtureSearchBackend,
	HttpSearchBackend, SearchBackend, SearchCommand, SearchError, SearchReply, parse_response,
	spawn as spawn_search_worker,
};
pub use types::{NO_URL, SearchResult, UNTITLED};
pub use ui::style::{Theme, by_name as theme_by_name, names as theme_names};
pub use ui::{App, Messages, SearchUi, UiConfig};

/// Re-exported so callers can build endpoints without depending on `reqwest`.
pub use reqwest::Url;
