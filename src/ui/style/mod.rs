//! Theme definitions and lookup.

mod builtins;
mod theme;

pub use builtins::{LIGHT, SLATE, SOLARIZED};
pub use theme::{Theme, ThemeDefinition};

use builtins::BUILT_IN_DEFINITIONS;

/// The theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// Lookup a built-in theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| definition.matches(name))
		.map(|definition| definition.theme)
}

/// Canonical theme names, sorted.
#[must_use]
pub fn names() -> Vec<&'static str> {
	let mut names: Vec<_> = BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect();
	names.sort_unstable();
	names
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtin_themes_are_listed() {
		assert_eq!(names(), vec!["light", "slate", "solarized"]);
	}

	#[test]
	fn lookup_accepts_aliases_and_case() {
		assert_eq!(by_name("Slate"), Some(SLATE));
		assert_eq!(by_name("dark"), Some(SLATE));
		assert_eq!(by_name("Solarized Dark"), Some(SOLARIZED));
		assert_eq!(by_name("solarized_dark"), Some(SOLARIZED));
		assert!(by_name("neon").is_none());
	}
}
