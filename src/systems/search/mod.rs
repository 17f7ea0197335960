//! Query dispatch: backends that answer queries and the worker that runs them
//! off the UI thread.

pub mod backend;
mod commands;
mod worker;

pub use backend::{
	DEFAULT_MAX_RESULTS, DEFAULT_TIMEOUT, FailureKind, FixtureError, FixtureSearchBackend,
	HttpSearchBackend, SearchBackend, SearchError, parse_response,
};
pub use commands::{SearchCommand, SearchReply};
pub use worker::spawn;
