use anyhow::Result;
use phpvm_registry::VersionRecord;

/// One line per record, the active one marked with `*`.
pub(crate) fn format_versions_plain(records: &[VersionRecord]) -> String {
	records
		.iter()
		.map(|record| {
			let marker = if record.active { '*' } else { ' ' };
			format!("{marker} {}\t{}", record.version, record.path)
		})
		.collect::<Vec<_>>()
		.join("\n")
}

pub(crate) fn print_versions_plain(records: &[VersionRecord]) {
	if records.is_empty() {
		println!("No versions found");
	} else {
		println!("{}", format_versions_plain(records));
	}
}

/// Print the records as a pretty JSON array.
pub(crate) fn print_versions_json(records: &[VersionRecord]) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(records)?);
	Ok(())
}
