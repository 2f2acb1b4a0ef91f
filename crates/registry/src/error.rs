use thiserror::Error;

/// Problems detected in a set of version records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
	/// More than one record claims to be the active interpreter.
	#[error("multiple versions are marked active: {}", versions.join(", "))]
	MultipleActive { versions: Vec<String> },
}
