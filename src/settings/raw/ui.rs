use datalab_search::{Messages, Navigation, UiConfig};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::super::resolved::{ConfigError, ConfigSources, parse_http_url, resolve_navigation};

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) search_title: Option<String>,
	pub(super) hint: Option<String>,
	pub(super) filter_label: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) navigation: Option<String>,
	pub(super) base_url: Option<String>,
	pub(super) messages: MessagesSection,
}

/// Raw overrides for the texts shown inside the results container.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct MessagesSection {
	pub(super) prompt: Option<String>,
	pub(super) no_results: Option<String>,
	pub(super) error: Option<String>,
	pub(super) loading: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) ui: UiConfig,
	pub(super) theme: Option<String>,
	pub(super) navigation: Navigation,
}

impl MessagesSection {
	fn finalize(self) -> Messages {
		let mut messages = Messages::default();
		if let Some(text) = self.prompt {
			messages.prompt = text;
		}
		if let Some(text) = self.no_results {
			messages.no_results = text;
		}
		if let Some(text) = self.error {
			messages.error = text;
		}
		if let Some(text) = self.loading {
			messages.loading = text;
		}
		messages
	}
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(navigation) = cli.navigation {
			self.navigation = Some(navigation.as_str().to_string());
		}
		if let Some(base_url) = cli.base_url.clone() {
			self.base_url = Some(base_url);
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<UiResolution, ConfigError> {
		let base_url = match self.base_url.as_deref() {
			Some(value) => Some(parse_http_url(
				"ui.base_url",
				value,
				sources.source_for_base_url(),
			)?),
			None => None,
		};
		let navigation = resolve_navigation(self.navigation.as_deref(), base_url, sources)?;

		let mut ui = UiConfig::default().with_messages(self.messages.finalize());
		if let Some(title) = self.title {
			ui.title = title;
		}
		if let Some(title) = self.search_title {
			ui.search_title = title;
		}
		if let Some(hint) = self.hint {
			ui.hint = hint;
		}
		if let Some(label) = self.filter_label {
			ui.filter_label = label;
		}

		Ok(UiResolution {
			ui,
			theme: self.theme,
			navigation,
		})
	}
}
