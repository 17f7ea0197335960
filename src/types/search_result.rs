use serde::{Deserialize, Deserializer, Serialize};

/// Title shown for results that arrive without one.
pub const UNTITLED: &str = "Sin título";

/// Placeholder url used by the endpoint for entries with no detail page.
pub const NO_URL: &str = "#";

/// A single row returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
	#[serde(default, deserialize_with = "string_or_default")]
	pub title: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(default = "placeholder_url", deserialize_with = "url_or_placeholder")]
	pub url: String,
	/// Entity kind reported by the endpoint (`pedido`, `cliente`, `orden`).
	#[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
	pub kind: Option<String>,
}

impl SearchResult {
	#[must_use]
	pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			description: None,
			url: url.into(),
			kind: None,
		}
	}

	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	#[must_use]
	pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
		self.kind = Some(kind.into());
		self
	}

	/// Title to display, falling back to [`UNTITLED`] when blank.
	#[must_use]
	pub fn display_title(&self) -> &str {
		if self.title.trim().is_empty() {
			UNTITLED
		} else {
			&self.title
		}
	}

	/// Description to display; blank descriptions are omitted.
	#[must_use]
	pub fn display_description(&self) -> Option<&str> {
		self.description
			.as_deref()
			.map(str::trim)
			.filter(|text| !text.is_empty())
	}

	/// Whether selecting this row should navigate anywhere.
	#[must_use]
	pub fn is_navigable(&self) -> bool {
		let url = self.url.trim();
		!url.is_empty() && url != NO_URL
	}

	/// Text matched by local backends.
	pub(crate) fn search_text(&self) -> String {
		match self.display_description() {
			Some(description) => format!("{} {}", self.title, description),
			None => self.title.clone(),
		}
	}
}

fn placeholder_url() -> String {
	NO_URL.to_string()
}

fn string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn url_or_placeholder<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<String>::deserialize(deserializer)?
		.filter(|url| !url.trim().is_empty())
		.unwrap_or_else(placeholder_url))
}

/// Wire shape of an endpoint response.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
	pub(crate) results: Vec<SearchResult>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_fields_fall_back_to_placeholders() {
		let result: SearchResult = serde_json::from_str(r#"{"title": null, "url": null}"#).unwrap();
		assert_eq!(result.display_title(), UNTITLED);
		assert_eq!(result.url, NO_URL);
		assert!(!result.is_navigable());
	}

	#[test]
	fn endpoint_type_maps_to_kind() {
		let result: SearchResult = serde_json::from_str(
			r#"{"title": "Pedido #001", "description": "", "url": "/pedidos/1", "type": "pedido"}"#,
		)
		.unwrap();
		assert_eq!(result.kind.as_deref(), Some("pedido"));
		assert_eq!(result.display_description(), None);
		assert!(result.is_navigable());
	}
}
