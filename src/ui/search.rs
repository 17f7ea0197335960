use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use tracing::debug;

use super::App;
use crate::session::{ApplyOutcome, SearchSession};
use crate::systems::search::{SearchError, SearchReply};

impl<'a> App<'a> {
	/// Open the search surface with a fresh, empty session.
	pub fn open_search(&mut self) {
		self.search_input.clear();
		self.search_input.set_focused(true);
		self.filter_input.set_focused(false);
		self.table_state.select(None);
		self.session = Some(SearchSession::new(self.debounce));
		debug!("search surface opened");
	}

	/// Close the search surface, discarding the session and its pending work.
	pub fn close_search(&mut self) {
		if self.session.take().is_some() {
			debug!(in_flight = self.search.in_flight(), "search surface closed");
		}
		self.search_input.clear();
		self.table_state.select(None);
		self.overlay = None;
		self.row_targets.clear();
	}

	/// Forward the current prompt text to the session.
	pub(crate) fn on_search_input(&mut self, now: Instant) {
		let text = self.search_input.text().to_string();
		if let Some(session) = self.session.as_mut() {
			session.on_input(&text, now);
		}
		self.ensure_selection();
	}

	/// Dispatch the settled query, if its quiet period has elapsed.
	pub fn tick(&mut self, now: Instant) {
		let Some(session) = self.session.as_mut() else {
			return;
		};
		let Some(query) = session.poll_settled(now) else {
			return;
		};

		let tag = self.search.next_tag();
		session.begin_loading(tag);
		debug!(%tag, %query, "query settled");
		if let Err(err) = self.search.dispatch(tag, query) {
			session.apply(tag, Err(err));
		}
		self.ensure_selection();
	}

	/// Drain any search replies waiting on the receiver channel.
	pub fn pump_search_results(&mut self) {
		loop {
			match self.search.try_recv() {
				Ok(reply) => self.handle_search_reply(reply),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	/// Apply a reply if it belongs to the open session's latest request.
	fn handle_search_reply(&mut self, reply: SearchReply) {
		let SearchReply { tag, query, outcome } = reply;
		let Some(session) = self.session.as_mut() else {
			self.stale_replies += 1;
			debug!(%tag, %query, "discarding reply for a closed session");
			return;
		};

		let failure = outcome.as_ref().err().map(SearchError::kind);
		match session.apply(tag, outcome) {
			ApplyOutcome::Applied => {
				if let Some(kind) = failure {
					debug!(%tag, %query, ?kind, "showing search failure");
				}
				self.table_state.select(None);
				self.ensure_selection();
			}
			ApplyOutcome::Stale => {
				self.stale_replies += 1;
				debug!(%tag, %query, "discarding stale reply");
			}
		}
	}
}
