//! Built-in color schemes and lookup by name.

mod builtins;
mod types;

pub use builtins::{LIGHT, SLATE};
pub use types::{Theme, ThemeDefinition};

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Every bundled theme, default first.
#[must_use]
pub fn builtin_themes() -> &'static [ThemeDefinition] {
	builtins::DEFINITIONS
}

/// Look up a theme by name or alias, ignoring ASCII case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	builtins::DEFINITIONS
		.iter()
		.find(|definition| definition.matches(name.trim()))
		.map(|definition| definition.theme)
}

/// Canonical names of the bundled themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	builtins::DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_accepts_aliases_and_case() {
		assert_eq!(by_name("Slate"), Some(SLATE));
		assert_eq!(by_name("dark"), Some(SLATE));
		assert_eq!(by_name("CLARO"), Some(LIGHT));
		assert_eq!(by_name("solarized"), None);
	}

	#[test]
	fn names_start_with_the_default() {
		assert_eq!(names(), vec!["slate", "light"]);
		assert_eq!(default_theme(), SLATE);
	}
}
