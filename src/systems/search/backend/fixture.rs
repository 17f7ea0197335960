use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use frizbee::{Options, match_list};
use thiserror::Error;

use super::{SearchBackend, SearchError, parse_response};
use crate::types::SearchResult;

/// The endpoint never returns more than this many rows.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Rows kept per entity kind before the overall cap, as the endpoint does.
const PER_KIND_LIMIT: usize = 5;

const DEMO_FIXTURE: &str = include_str!("demo.json");

/// Failure to load a fixture file.
#[derive(Debug, Error)]
pub enum FixtureError {
	#[error("failed to read fixtures from {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid fixtures in {path}: {source}")]
	Invalid {
		path: PathBuf,
		#[source]
		source: SearchError,
	},
}

/// Answers queries locally from a fixed list of results.
///
/// Rows are fuzzy-matched (in-order subsequence, no typos) over title and
/// description and ranked by score, so loose queries match more rows than the
/// endpoint's substring filters would. At most five rows of each
/// kind are kept; untyped rows only count against `max_results`.
#[derive(Debug, Clone)]
pub struct FixtureSearchBackend {
	rows: Vec<SearchResult>,
	haystacks: Vec<String>,
	max_results: usize,
}

impl FixtureSearchBackend {
	#[must_use]
	pub fn from_results(rows: Vec<SearchResult>, max_results: usize) -> Self {
		let haystacks = rows.iter().map(|row| row.search_text().to_lowercase()).collect();
		Self {
			rows,
			haystacks,
			max_results,
		}
	}

	/// Load a file shaped like an endpoint response.
	pub fn from_path(path: &Path, max_results: usize) -> Result<Self, FixtureError> {
		let body = fs::read_to_string(path).map_err(|source| FixtureError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let rows = parse_response(&body).map_err(|source| FixtureError::Invalid {
			path: path.to_path_buf(),
			source,
		})?;
		Ok(Self::from_results(rows, max_results))
	}

	/// Built-in sample of pedidos, clientes and órdenes.
	#[must_use]
	pub fn demo(max_results: usize) -> Self {
		let rows = parse_response(DEMO_FIXTURE).unwrap_or_default();
		Self::from_results(rows, max_results)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}

impl SearchBackend for FixtureSearchBackend {
	fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
		let needle = query.trim().to_lowercase();
		if needle.is_empty() {
			return Ok(Vec::new());
		}

		let haystacks: Vec<&str> = self.haystacks.iter().map(String::as_str).collect();
		let options = Options {
			prefilter: true,
			max_typos: Some(0),
			sort: false,
			..Options::default()
		};
		let mut matches: Vec<_> = match_list(&needle, &haystacks, options)
			.into_iter()
			.filter(|entry| entry.score > 0)
			.collect();
		matches.sort_by(|a, b| {
			b.score
				.cmp(&a.score)
				.then(a.index_in_haystack.cmp(&b.index_in_haystack))
		});

		let mut per_kind: HashMap<&str, usize> = HashMap::new();
		Ok(matches
			.into_iter()
			.filter_map(|entry| self.rows.get(entry.index_in_haystack as usize))
			.filter(|&row| match row.kind.as_deref() {
				Some(kind) => {
					let seen = per_kind.entry(kind).or_default();
					*seen += 1;
					*seen <= PER_KIND_LIMIT
				}
				None => true,
			})
			.take(self.max_results)
			.cloned()
			.collect())
	}
}
