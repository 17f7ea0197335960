//! The debounced search interaction, free of terminal and network concerns.
//!
//! A [`SearchSession`] lives from the moment the search surface opens until it
//! closes. It turns keystrokes into settled queries through a [`Debouncer`],
//! tracks which request it is waiting for with a [`QueryTag`], and holds the
//! [`SessionState`] the renderer draws.

mod debouncer;
mod state;

pub use debouncer::{DEFAULT_DEBOUNCE, Debouncer, InputChange};
pub use state::{ApplyOutcome, EmptyKind, QueryTag, SearchSession, SessionState};
