use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, warn};

use super::backend::SearchBackend;
use super::commands::{SearchCommand, SearchReply};
use crate::session::QueryTag;

/// Launches the background search worker thread and returns communication channels.
///
/// Every query runs on its own request thread, so a slow request never holds
/// back the reply to a newer one. Replies arrive in completion order; telling
/// stale ones apart is left to the receiver.
pub fn spawn(backend: Arc<dyn SearchBackend>) -> (Sender<SearchCommand>, Receiver<SearchReply>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (reply_tx, reply_rx) = mpsc::channel();

	thread::spawn(move || worker_loop(&backend, command_rx, reply_tx));

	(command_tx, reply_rx)
}

fn worker_loop(
	backend: &Arc<dyn SearchBackend>,
	command_rx: Receiver<SearchCommand>,
	reply_tx: Sender<SearchReply>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(backend, &reply_tx, command) {
			break;
		}
	}
	debug!("search worker stopped");
}

fn handle_command(
	backend: &Arc<dyn SearchBackend>,
	reply_tx: &Sender<SearchReply>,
	command: SearchCommand,
) -> bool {
	match command {
		SearchCommand::Query { tag, query } => {
			let backend = Arc::clone(backend);
			let reply_tx = reply_tx.clone();
			thread::spawn(move || run_request(backend.as_ref(), &reply_tx, tag, query));
			true
		}
		SearchCommand::Shutdown => false,
	}
}

fn run_request(
	backend: &dyn SearchBackend,
	reply_tx: &Sender<SearchReply>,
	tag: QueryTag,
	query: String,
) {
	debug!(%tag, %query, "dispatching search");
	let outcome = backend.search(&query);
	match &outcome {
		Ok(rows) => debug!(%tag, rows = rows.len(), "search completed"),
		Err(err) => warn!(%tag, %query, kind = ?err.kind(), error = %err, "search failed"),
	}

	// The UI may already be gone; nothing is waiting for the reply then.
	let _ = reply_tx.send(SearchReply {
		tag,
		query,
		outcome,
	});
}
