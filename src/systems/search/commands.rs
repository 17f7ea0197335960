use crate::session::QueryTag;
use crate::systems::search::SearchError;
use crate::types::SearchResult;

/// Commands understood by the background search worker.
#[derive(Debug)]
pub enum SearchCommand {
	/// Run one request for a settled query.
	Query {
		/// Identifier that lets the UI correlate the reply with its request.
		tag: QueryTag,
		/// Settled, trimmed query text.
		query: String,
	},
	/// Stop the background worker thread.
	Shutdown,
}

/// Outcome of one request, sent back to the UI loop.
#[derive(Debug, Clone)]
pub struct SearchReply {
	pub tag: QueryTag,
	pub query: String,
	pub outcome: Result<Vec<SearchResult>, SearchError>,
}
