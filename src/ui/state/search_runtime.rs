use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use crate::session::QueryTag;
use crate::systems::search::{SearchCommand, SearchError, SearchReply};

/// UI-side handle on the search worker.
///
/// Tags come from a counter that lives as long as the app, not the session,
/// so a reply from a closed session can never match a later one.
pub(crate) struct SearchRuntime {
	tx: Sender<SearchCommand>,
	rx: Receiver<SearchReply>,
	next_sequence: u64,
	in_flight: usize,
}

impl SearchRuntime {
	pub(crate) fn new(tx: Sender<SearchCommand>, rx: Receiver<SearchReply>) -> Self {
		Self {
			tx,
			rx,
			next_sequence: 0,
			in_flight: 0,
		}
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(SearchCommand::Shutdown);
	}

	/// Reserve the tag for the next request.
	pub(crate) fn next_tag(&mut self) -> QueryTag {
		self.next_sequence = self.next_sequence.saturating_add(1);
		QueryTag::new(self.next_sequence)
	}

	/// Hand a tagged query to the worker.
	pub(crate) fn dispatch(&mut self, tag: QueryTag, query: String) -> Result<(), SearchError> {
		self.tx
			.send(SearchCommand::Query { tag, query })
			.map_err(|_| SearchError::transport("search worker is not running"))?;
		self.in_flight += 1;
		Ok(())
	}

	/// Number of requests whose replies have not been drained yet.
	pub(crate) fn in_flight(&self) -> usize {
		self.in_flight
	}

	pub(crate) fn try_recv(&mut self) -> Result<SearchReply, TryRecvError> {
		let reply = self.rx.try_recv()?;
		self.in_flight = self.in_flight.saturating_sub(1);
		Ok(reply)
	}
}
