//! Capability set the list panel needs from its entries.

use std::borrow::Cow;

use phpvm_registry::VersionRecord;

/// An entry the list panel can render and filter.
pub trait ListItem {
	/// Primary line of the entry.
	fn title(&self) -> Cow<'_, str>;
	/// Secondary line of the entry.
	fn description(&self) -> Cow<'_, str>;
	/// Text matched against the filter query.
	fn filter_value(&self) -> &str;
}

/// List entry wrapping a [`VersionRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionItem {
	record: VersionRecord,
}

impl VersionItem {
	#[must_use]
	pub fn new(record: VersionRecord) -> Self {
		Self { record }
	}

	/// The wrapped record.
	#[must_use]
	pub fn record(&self) -> &VersionRecord {
		&self.record
	}
}

impl From<VersionRecord> for VersionItem {
	fn from(record: VersionRecord) -> Self {
		Self::new(record)
	}
}

impl ListItem for VersionItem {
	fn title(&self) -> Cow<'_, str> {
		if self.record.active {
			Cow::Owned(format!("{} (active)", self.record.version))
		} else {
			Cow::Borrowed(&self.record.version)
		}
	}

	fn description(&self) -> Cow<'_, str> {
		Cow::Borrowed(&self.record.path)
	}

	fn filter_value(&self) -> &str {
		&self.record.version
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn active_records_are_marked_in_title() {
		let item = VersionItem::new(VersionRecord::new("8.3.6", "/usr/bin/php8.3", true));
		assert_eq!(item.title(), "8.3.6 (active)");
		assert_eq!(item.description(), "/usr/bin/php8.3");
		assert_eq!(item.filter_value(), "8.3.6");
	}

	#[test]
	fn inactive_records_use_bare_version() {
		let item = VersionItem::new(VersionRecord::new("8.2.27", "/usr/bin/php8.2", false));
		assert_eq!(item.title(), "8.2.27");
		assert_eq!(item.filter_value(), "8.2.27");
	}
}
