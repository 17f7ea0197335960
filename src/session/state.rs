use std::fmt;
use std::time::{Duration, Instant};

use super::debouncer::{Debouncer, InputChange};
use crate::systems::search::SearchError;
use crate::types::SearchResult;

/// Sequence number attached to one dispatched request.
///
/// Tags only ever grow, so comparing a reply's tag with the session's current
/// tag is enough to tell whether the reply is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryTag(u64);

impl QueryTag {
	#[must_use]
	pub const fn new(sequence: u64) -> Self {
		Self(sequence)
	}

	#[must_use]
	pub const fn sequence(self) -> u64 {
		self.0
	}
}

impl fmt::Display for QueryTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Which of the two empty views to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyKind {
	/// Nothing typed yet.
	Prompt,
	/// The latest query matched nothing.
	NoResults,
}

/// Exactly one of the four views the results container can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
	Empty(EmptyKind),
	Loading,
	Results(Vec<SearchResult>),
	Error(SearchError),
}

impl Default for SessionState {
	fn default() -> Self {
		Self::Empty(EmptyKind::Prompt)
	}
}

impl SessionState {
	/// Rows currently on screen, if any.
	#[must_use]
	pub fn results(&self) -> &[SearchResult] {
		match self {
			Self::Results(rows) => rows,
			_ => &[],
		}
	}
}

/// Whether a reply changed the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
	Applied,
	Stale,
}

/// One open-to-close cycle of the search surface.
///
/// The session owns the query text, the debouncer and the view state. It does
/// no I/O: settled queries are handed to the caller through
/// [`poll_settled`](Self::poll_settled), and replies come back through
/// [`apply`](Self::apply) where anything not tagged with the current request is
/// dropped.
#[derive(Debug, Clone)]
pub struct SearchSession {
	query: String,
	debouncer: Debouncer,
	state: SessionState,
	current: Option<QueryTag>,
}

impl Default for SearchSession {
	fn default() -> Self {
		Self::new(super::DEFAULT_DEBOUNCE)
	}
}

impl SearchSession {
	#[must_use]
	pub fn new(delay: Duration) -> Self {
		Self {
			query: String::new(),
			debouncer: Debouncer::new(delay),
			state: SessionState::default(),
			current: None,
		}
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn state(&self) -> &SessionState {
		&self.state
	}

	#[must_use]
	pub fn current_tag(&self) -> Option<QueryTag> {
		self.current
	}

	/// Record the text of the input after a change.
	///
	/// Blank text resets the view to the prompt at once and invalidates any
	/// outstanding request; anything else restarts the debounce countdown.
	pub fn on_input(&mut self, text: &str, now: Instant) -> InputChange {
		self.query = text.to_string();
		let change = self.debouncer.input(text, now);
		if change == InputChange::Blank {
			self.current = None;
			self.state = SessionState::Empty(EmptyKind::Prompt);
		}
		change
	}

	/// The settled query, once its quiet period has elapsed.
	pub fn poll_settled(&mut self, now: Instant) -> Option<String> {
		self.debouncer.poll(now)
	}

	/// Mark `tag` as the request whose reply the session is waiting for.
	pub fn begin_loading(&mut self, tag: QueryTag) {
		self.current = Some(tag);
		self.state = SessionState::Loading;
	}

	#[must_use]
	pub fn matches_latest(&self, tag: QueryTag) -> bool {
		self.current == Some(tag)
	}

	/// Apply the outcome of the request tagged `tag`.
	pub fn apply(
		&mut self,
		tag: QueryTag,
		outcome: Result<Vec<SearchResult>, SearchError>,
	) -> ApplyOutcome {
		if !self.matches_latest(tag) {
			return ApplyOutcome::Stale;
		}

		self.state = match outcome {
			Ok(rows) if rows.is_empty() => SessionState::Empty(EmptyKind::NoResults),
			Ok(rows) => SessionState::Results(rows),
			Err(err) => SessionState::Error(err),
		};
		ApplyOutcome::Applied
	}

	/// When the pending query settles, if one is pending.
	#[must_use]
	pub fn next_deadline(&self) -> Option<Instant> {
		self.debouncer.deadline()
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		matches!(self.state, SessionState::Loading)
	}
}
