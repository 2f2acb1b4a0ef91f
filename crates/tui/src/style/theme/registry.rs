use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use super::builtins;
use super::types::{Theme, ThemeRegistration};

#[derive(Debug)]
struct ThemeEntry {
	display_name: String,
	theme: Theme,
}

/// Lookup table over the builtin themes, keyed by normalized name and alias.
#[derive(Debug, Default)]
struct ThemeRegistry {
	canonical: BTreeMap<String, ThemeEntry>,
	aliases: HashMap<String, String>,
}

impl ThemeRegistry {
	fn from_registrations(registrations: Vec<ThemeRegistration>) -> Self {
		let mut registry = Self::default();
		for registration in registrations {
			registry.register(registration);
		}
		registry
	}

	fn register(&mut self, registration: ThemeRegistration) {
		let ThemeRegistration {
			name,
			theme,
			aliases,
		} = registration;

		let normalized = normalize_name(&name);
		self.canonical.insert(
			normalized.clone(),
			ThemeEntry {
				display_name: name,
				theme,
			},
		);

		for alias in aliases {
			let alias_normalized = normalize_name(&alias);
			if alias_normalized == normalized {
				continue;
			}
			match self.aliases.get(&alias_normalized) {
				Some(existing) if existing != &normalized => {
					log::warn!(
						"theme alias `{alias}` already points at `{existing}`; ignoring it for `{normalized}`"
					);
				}
				_ => {
					self.aliases.insert(alias_normalized, normalized.clone());
				}
			}
		}
	}

	fn get(&self, name: &str) -> Option<Theme> {
		let normalized = normalize_name(name);

		if let Some(entry) = self.canonical.get(&normalized) {
			return Some(entry.theme);
		}

		let target = self.aliases.get(&normalized)?;
		self.canonical.get(target).map(|entry| entry.theme)
	}

	fn names(&self) -> Vec<String> {
		self.canonical
			.values()
			.map(|entry| entry.display_name.clone())
			.collect()
	}
}

fn registry() -> &'static ThemeRegistry {
	static REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();
	REGISTRY.get_or_init(|| ThemeRegistry::from_registrations(builtins::registrations()))
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

/// Look up a builtin theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	registry().get(name)
}

/// Names of every builtin theme, sorted.
#[must_use]
pub fn names() -> Vec<String> {
	registry().names()
}
