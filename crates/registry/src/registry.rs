use crate::{RegistryError, VersionRecord};

/// Source of version records.
///
/// Implementations must be pure: calling [`Registry::list_versions`] twice
/// returns the same records in the same order, and an empty registry returns
/// an empty list rather than an error.
pub trait Registry {
	/// Return every known version in display order.
	fn list_versions(&self) -> Vec<VersionRecord>;
}

/// Registry backed by a fixed in-memory list.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
	versions: Vec<VersionRecord>,
}

impl StaticRegistry {
	/// Wrap an explicit list of records.
	#[must_use]
	pub fn new(versions: Vec<VersionRecord>) -> Self {
		Self { versions }
	}

	/// The builtin version list shipped with the binary.
	///
	/// No interpreters are probed; these entries stand in until real
	/// detection exists.
	#[must_use]
	pub fn builtin() -> Self {
		Self::new(vec![
			VersionRecord::new("8.3.6", "/usr/bin/php8.3", true),
			VersionRecord::new("8.2.27", "/usr/bin/php8.2", false),
			VersionRecord::new("8.1.31", "/usr/bin/php8.1", false),
		])
	}
}

impl Registry for StaticRegistry {
	fn list_versions(&self) -> Vec<VersionRecord> {
		self.versions.clone()
	}
}

/// Records flagged as active, in list order.
pub fn active_versions(records: &[VersionRecord]) -> impl Iterator<Item = &VersionRecord> {
	records.iter().filter(|record| record.active)
}

/// Report whether more than one record is marked active.
///
/// Zero active records is accepted. The records are never modified.
pub fn check_single_active(records: &[VersionRecord]) -> Result<(), RegistryError> {
	let active: Vec<String> = active_versions(records)
		.map(|record| record.version.clone())
		.collect();
	if active.len() > 1 {
		return Err(RegistryError::MultipleActive { versions: active });
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtin_lists_versions_in_order() {
		let versions: Vec<String> = StaticRegistry::builtin()
			.list_versions()
			.into_iter()
			.map(|record| record.version)
			.collect();
		assert_eq!(versions, ["8.3.6", "8.2.27", "8.1.31"]);
	}

	#[test]
	fn builtin_has_exactly_one_active_version() {
		let records = StaticRegistry::builtin().list_versions();
		let active: Vec<_> = active_versions(&records).collect();
		assert_eq!(active.len(), 1);
		assert_eq!(active[0].path, "/usr/bin/php8.3");
		assert!(check_single_active(&records).is_ok());
	}

	#[test]
	fn empty_registry_returns_empty_list() {
		let registry = StaticRegistry::default();
		assert!(registry.list_versions().is_empty());
		assert!(check_single_active(&registry.list_versions()).is_ok());
	}

	#[test]
	fn repeated_calls_return_identical_records() {
		let registry = StaticRegistry::builtin();
		assert_eq!(registry.list_versions(), registry.list_versions());
	}

	#[test]
	fn multiple_active_records_are_reported() {
		let records = vec![
			VersionRecord::new("8.3.6", "/usr/bin/php8.3", true),
			VersionRecord::new("8.2.27", "/usr/bin/php8.2", true),
		];
		let err = check_single_active(&records).unwrap_err();
		assert_eq!(
			err,
			RegistryError::MultipleActive {
				versions: vec!["8.3.6".into(), "8.2.27".into()],
			}
		);
		assert_eq!(
			err.to_string(),
			"multiple versions are marked active: 8.3.6, 8.2.27"
		);
	}
}
