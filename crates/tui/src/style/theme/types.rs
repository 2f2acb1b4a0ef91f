use ratatui::style::Style;

/// Colours and modifiers for every element the shell draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// List title.
	pub title: Style,
	/// Border of the panel holding focus.
	pub focused_border: Style,
	/// Border of the panel without focus.
	pub blurred_border: Style,
	/// Labels in the details panel ("Version:", "Path:", ...).
	pub info_title: Style,
	/// Values in the details panel.
	pub info_value: Style,
	/// Status word for the active interpreter.
	pub active: Style,
	/// Status word for inactive interpreters.
	pub inactive: Style,
	/// Help line beneath the list.
	pub help: Style,
	/// Selected list entry.
	pub selected: Style,
	/// Secondary line of a list entry.
	pub description: Style,
	/// Placeholder messages.
	pub empty: Style,
}

impl Theme {
	/// Border style for a panel, depending on whether it holds focus.
	#[must_use]
	pub fn border(&self, focused: bool) -> Style {
		if focused {
			self.focused_border
		} else {
			self.blurred_border
		}
	}

	/// Style for the status word of a record.
	#[must_use]
	pub fn status(&self, active: bool) -> Style {
		if active { self.active } else { self.inactive }
	}
}

/// Describes a named theme and the aliases it answers to.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// The name of the theme.
	pub name: String,
	/// The theme configuration.
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	/// Creates a new theme registration with the given name and theme.
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}
}
