use crate::keymap::Keymap;
use crate::style::StyleConfig;

/// Text rendered around the panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Title above the version list.
	pub list_title: String,
	/// Heading of the details panel.
	pub details_heading: String,
	/// Shown in the list when there is nothing to show.
	pub empty_list: String,
	/// Shown in the details panel when nothing is selected.
	pub empty_details: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			list_title: "PHP Versions".to_string(),
			details_heading: "PHP Version Details".to_string(),
			empty_list: "No versions found".to_string(),
			empty_details: "No version selected".to_string(),
		}
	}
}

/// Everything the shell needs to know about presentation and input, fixed at
/// construction.
#[derive(Debug, Clone, Default)]
pub struct ShellConfig {
	/// Colours and modifiers.
	pub style: StyleConfig,
	/// Key bindings.
	pub keymap: Keymap,
	/// Static text.
	pub labels: UiLabels,
	/// Whether `/` opens a filter prompt on the list.
	pub filtering: bool,
}
