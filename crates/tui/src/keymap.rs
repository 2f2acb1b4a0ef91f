//! Key bindings understood by the shell.

use std::fmt;
use std::str::FromStr;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

/// Which keys end the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuitBinding {
	/// Only `ctrl+c` quits.
	CtrlC,
	/// Both `ctrl+c` and `q` quit.
	#[default]
	CtrlCOrQ,
}

impl QuitBinding {
	/// Configuration spelling of the binding.
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::CtrlC => "ctrl-c",
			Self::CtrlCOrQ => "ctrl-c-or-q",
		}
	}

	fn help_label(self) -> &'static str {
		match self {
			Self::CtrlC => "ctrl+c",
			Self::CtrlCOrQ => "q",
		}
	}
}

impl fmt::Display for QuitBinding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for QuitBinding {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().replace('+', "-").as_str() {
			"ctrl-c" => Ok(Self::CtrlC),
			"ctrl-c-or-q" | "q" => Ok(Self::CtrlCOrQ),
			other => Err(format!(
				"unknown quit binding `{other}` (expected `ctrl-c` or `ctrl-c-or-q`)"
			)),
		}
	}
}

/// Directional input shared by the list and the details viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
	Up,
	Down,
	PageUp,
	PageDown,
	Home,
	End,
}

/// Resolved key bindings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keymap {
	pub quit: QuitBinding,
}

impl Keymap {
	#[must_use]
	pub fn new(quit: QuitBinding) -> Self {
		Self { quit }
	}

	/// Whether `key` ends the session.
	///
	/// While the filter prompt is being edited `q` is text, so only `ctrl+c`
	/// quits.
	#[must_use]
	pub fn is_quit(&self, key: &KeyEvent, editing_text: bool) -> bool {
		if is_ctrl_c(key) {
			return true;
		}
		self.quit == QuitBinding::CtrlCOrQ
			&& !editing_text
			&& key.code == KeyCode::Char('q')
			&& !key
				.modifiers
				.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
	}

	/// Whether `key` toggles panel focus.
	#[must_use]
	pub fn is_switch_panel(&self, key: &KeyEvent) -> bool {
		matches!(key.code, KeyCode::Tab | KeyCode::BackTab)
	}

	/// Whether `key` activates the selected list entry.
	#[must_use]
	pub fn is_activate(&self, key: &KeyEvent) -> bool {
		key.code == KeyCode::Enter
	}

	/// Navigation intent of `key`, if any.
	#[must_use]
	pub fn motion(&self, key: &KeyEvent) -> Option<Motion> {
		if key.modifiers.contains(KeyModifiers::CONTROL) {
			return None;
		}
		match key.code {
			KeyCode::Up | KeyCode::Char('k') => Some(Motion::Up),
			KeyCode::Down | KeyCode::Char('j') => Some(Motion::Down),
			KeyCode::PageUp => Some(Motion::PageUp),
			KeyCode::PageDown => Some(Motion::PageDown),
			KeyCode::Home | KeyCode::Char('g') => Some(Motion::Home),
			KeyCode::End | KeyCode::Char('G') => Some(Motion::End),
			_ => None,
		}
	}

	/// One-line summary of the bindings shown beneath the list.
	#[must_use]
	pub fn help_text(&self, filtering: bool) -> String {
		let mut parts = vec!["tab: switch panels", "enter: activate version"];
		if filtering {
			parts.push("/: filter");
		}
		let quit = format!("{}: quit", self.quit.help_label());
		parts.push(&quit);
		parts.join(" • ")
	}
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
	key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
