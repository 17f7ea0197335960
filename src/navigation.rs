//! What happens when a result row is chosen.

use anyhow::{Context, Result};
use reqwest::Url;
use serde::Serialize;
use tracing::info;

use crate::types::SearchResult;

/// Policy applied when the user navigates to a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
	/// Leave the application and hand the target to the caller.
	Exit { base_url: Option<Url> },
	/// Open the target in the system browser and keep the surface running.
	Browser { base_url: Url },
}

impl Default for Navigation {
	fn default() -> Self {
		Self::Exit { base_url: None }
	}
}

/// Result of following a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationStep {
	/// The application should stop and report this outcome.
	Exit(SearchOutcome),
	/// The target was opened elsewhere; the application keeps running.
	Stayed { target: String },
}

/// Final answer of an interactive run that ended on a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
	/// Query text at the time the row was chosen.
	pub query: String,
	/// Navigation target, absolute when a base url is configured.
	pub url: String,
	pub selection: SearchResult,
}

impl Navigation {
	#[must_use]
	pub fn base_url(&self) -> Option<&Url> {
		match self {
			Self::Exit { base_url } => base_url.as_ref(),
			Self::Browser { base_url } => Some(base_url),
		}
	}

	#[must_use]
	pub fn label(&self) -> &'static str {
		match self {
			Self::Exit { .. } => "print",
			Self::Browser { .. } => "browser",
		}
	}

	/// Target for `url`, joined onto the base url when there is one.
	#[must_use]
	pub fn resolve(&self, url: &str) -> String {
		match self.base_url() {
			Some(base) => base
				.join(url)
				.map(String::from)
				.unwrap_or_else(|_| url.to_string()),
			None => url.to_string(),
		}
	}

	/// Act on a chosen row. Rows without a destination yield `None`.
	pub fn follow(&self, query: &str, row: &SearchResult) -> Result<Option<NavigationStep>> {
		if !row.is_navigable() {
			return Ok(None);
		}

		let target = self.resolve(row.url.trim());
		let step = match self {
			Self::Exit { .. } => NavigationStep::Exit(SearchOutcome {
				query: query.to_string(),
				url: target,
				selection: row.clone(),
			}),
			Self::Browser { .. } => {
				info!(%target, "opening result in browser");
				open::that_detached(&target)
					.with_context(|| format!("failed to open {target} in a browser"))?;
				NavigationStep::Stayed { target }
			}
		};
		Ok(Some(step))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn base() -> Url {
		Url::parse("http://127.0.0.1:5000/app/").unwrap()
	}

	#[test]
	fn exit_without_base_keeps_the_relative_url() {
		let navigation = Navigation::default();
		let row = SearchResult::new("Pedido 001", "/pedidos/1");

		let step = navigation.follow("par", &row).unwrap();

		assert_eq!(
			step,
			Some(NavigationStep::Exit(SearchOutcome {
				query: "par".to_string(),
				url: "/pedidos/1".to_string(),
				selection: row,
			}))
		);
	}

	#[test]
	fn base_url_makes_targets_absolute() {
		let navigation = Navigation::Exit {
			base_url: Some(base()),
		};
		assert_eq!(navigation.resolve("/pedidos/1"), "http://127.0.0.1:5000/pedidos/1");
		assert_eq!(navigation.resolve("pedidos/1"), "http://127.0.0.1:5000/app/pedidos/1");
	}

	#[test]
	fn placeholder_urls_are_not_followed() {
		let navigation = Navigation::Browser { base_url: base() };
		let row = SearchResult::new("Sin enlace", "#");
		assert_eq!(navigation.follow("x", &row).unwrap(), None);
	}

	#[test]
	fn labels_match_config_values() {
		assert_eq!(Navigation::default().label(), "print");
		assert_eq!(Navigation::Browser { base_url: base() }.label(), "browser");
	}
}
