use serde::{Deserialize, Serialize};

/// A single PHP interpreter known to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
	/// Semantic version string, e.g. `8.3.6`.
	pub version: String,
	/// Path to the interpreter binary.
	pub path: String,
	/// Whether this interpreter is the one currently in use.
	pub active: bool,
}

impl VersionRecord {
	/// Create a new [`VersionRecord`].
	#[must_use]
	pub fn new(version: impl Into<String>, path: impl Into<String>, active: bool) -> Self {
		Self {
			version: version.into(),
			path: path.into(),
			active,
		}
	}

	/// Human-readable status word for the `active` flag.
	#[must_use]
	pub fn status_label(&self) -> &'static str {
		if self.active { "Active" } else { "Inactive" }
	}
}
