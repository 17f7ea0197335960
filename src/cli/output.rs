use anyhow::Result;
use datalab_search::{SearchOutcome, SearchResult};
use serde_json::json;

/// Print the navigation target of the chosen row.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	println!("{}", outcome.url);
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// One line per row: title, url and, when present, the description.
pub(crate) fn format_results_plain(results: &[SearchResult]) -> String {
	results
		.iter()
		.map(|row| match row.display_description() {
			Some(description) => format!("{}\t{}\t{description}", row.display_title(), row.url),
			None => format!("{}\t{}", row.display_title(), row.url),
		})
		.collect::<Vec<_>>()
		.join("\n")
}

pub(crate) fn print_results_plain(results: &[SearchResult]) {
	if !results.is_empty() {
		println!("{}", format_results_plain(results));
	}
}

/// Format one-shot results in the endpoint's own response shape.
pub(crate) fn format_results_json(query: &str, results: &[SearchResult]) -> Result<String> {
	let payload = json!({
		"query": query,
		"results": results,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_results_json(query: &str, results: &[SearchResult]) -> Result<()> {
	println!("{}", format_results_json(query, results)?);
	Ok(())
}
