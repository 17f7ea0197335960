//! Sources of search results: the DataLab HTTP endpoint and local fixtures.

mod fixture;
mod http;

use thiserror::Error;

pub use fixture::{DEFAULT_MAX_RESULTS, FixtureError, FixtureSearchBackend};
pub use http::{DEFAULT_TIMEOUT, HttpSearchBackend};

use crate::types::{SearchResponse, SearchResult};

/// Why a search request produced no usable response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
	/// The request never completed (connection refused, timeout, TLS...).
	#[error("search request failed: {reason}")]
	Transport { reason: String },

	/// The endpoint answered with a non-success status.
	#[error("search endpoint returned HTTP {status}")]
	Status { status: u16 },

	/// The body was not JSON or had no `results` array.
	#[error("malformed search response: {reason}")]
	Parse { reason: String },
}

/// Coarse failure class used to pick what the session reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
	Transport,
	Parse,
}

impl SearchError {
	pub fn transport(err: impl std::fmt::Display) -> Self {
		Self::Transport {
			reason: err.to_string(),
		}
	}

	pub fn parse(err: impl std::fmt::Display) -> Self {
		Self::Parse {
			reason: err.to_string(),
		}
	}

	#[must_use]
	pub fn kind(&self) -> FailureKind {
		match self {
			Self::Transport { .. } | Self::Status { .. } => FailureKind::Transport,
			Self::Parse { .. } => FailureKind::Parse,
		}
	}
}

/// Something that can answer a text query with an ordered list of results.
///
/// Implementations are called from request threads, never from the UI loop,
/// so blocking is fine.
pub trait SearchBackend: Send + Sync + 'static {
	fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError>;
}

/// Decode an endpoint response body.
pub fn parse_response(body: &str) -> Result<Vec<SearchResult>, SearchError> {
	serde_json::from_str::<SearchResponse>(body)
		.map(|response| response.results)
		.map_err(SearchError::parse)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_results_in_order() {
		let results = parse_response(
			r#"{"results": [
				{"title": "Pedido 001", "url": "/pedidos/1"},
				{"title": "Cliente ONIE", "description": "Código: ONIE", "url": "/clientes/3"}
			]}"#,
		)
		.unwrap();
		assert_eq!(results.len(), 2);
		assert_eq!(results[0].title, "Pedido 001");
		assert_eq!(results[1].display_description(), Some("Código: ONIE"));
	}

	#[test]
	fn missing_results_field_is_a_parse_failure() {
		let err = parse_response(r#"{"items": []}"#).unwrap_err();
		assert_eq!(err.kind(), FailureKind::Parse);
	}

	#[test]
	fn html_error_page_is_a_parse_failure() {
		let err = parse_response("<html>Internal Server Error</html>").unwrap_err();
		assert!(matches!(err, SearchError::Parse { .. }));
	}

	#[test]
	fn status_errors_count_as_transport_failures() {
		assert_eq!(SearchError::Status { status: 500 }.kind(), FailureKind::Transport);
	}
}
