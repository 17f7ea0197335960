/// Text shown in the results container for each non-row view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
	pub prompt: String,
	pub no_results: String,
	pub error: String,
	pub loading: String,
}

impl Default for Messages {
	fn default() -> Self {
		Self {
			prompt: "Escribe para buscar...".to_string(),
			no_results: "No se encontraron resultados".to_string(),
			error: "Error al realizar la búsqueda".to_string(),
			loading: "Buscando...".to_string(),
		}
	}
}

/// Labels used across the landing view and the search surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	/// Application title on the landing view.
	pub title: String,
	/// Title of the search surface border.
	pub search_title: String,
	/// Hint telling the user how to open the search surface.
	pub hint: String,
	/// Label of the quick-filter input over visited results.
	pub filter_label: String,
	pub messages: Messages,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			title: "DataLab".to_string(),
			search_title: "Buscar".to_string(),
			hint: "Ctrl+K para buscar · Tab filtra el historial · q para salir".to_string(),
			filter_label: "Filtrar historial".to_string(),
			messages: Messages::default(),
		}
	}
}

impl UiConfig {
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	#[must_use]
	pub fn with_messages(mut self, messages: Messages) -> Self {
		self.messages = messages;
		self
	}
}
