use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Size;

use super::render::layout::panel_dimensions;
use super::{Control, Focus, Shell};

impl Shell {
	/// Apply one terminal event.
	pub fn handle_event(&mut self, event: &Event) -> Control {
		match event {
			Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
			Event::Resize(width, height) => {
				self.handle_resize(*width, *height);
				Control::Continue
			}
			_ => Control::Continue,
		}
	}

	/// Apply one key press.
	pub fn handle_key(&mut self, key: &KeyEvent) -> Control {
		let keymap = self.config.keymap;
		let typing_filter = self.focus == Focus::List && self.list.is_editing();
		if keymap.is_quit(key, typing_filter) {
			log::debug!("quit requested");
			return Control::Quit;
		}
		if keymap.is_switch_panel(key) {
			self.focus = self.focus.toggled();
			log::debug!("focus switched to {:?}", self.focus);
			return Control::Continue;
		}

		match self.focus {
			Focus::List => self.handle_list_key(key),
			Focus::Details => self.handle_details_key(key),
		}
		Control::Continue
	}

	/// Record a new terminal size and resize both panels to match.
	pub fn handle_resize(&mut self, width: u16, height: u16) {
		self.viewport = Size::new(width, height);
		self.dimensions = panel_dimensions(self.viewport);
		self.list.set_viewport_height(self.dimensions.list.height);
		self.details
			.set_viewport_height(self.dimensions.details.height);
		log::trace!("resized to {width}x{height}: {:?}", self.dimensions);
	}

	fn handle_list_key(&mut self, key: &KeyEvent) {
		let keymap = self.config.keymap;
		if self.list.is_editing() {
			match key.code {
				KeyCode::Esc => self.list.clear_filter(),
				KeyCode::Enter => self.list.accept_filter(),
				KeyCode::Backspace => self.list.pop_filter_char(),
				KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
					self.list.push_filter_char(ch);
				}
				_ => {}
			}
		} else if keymap.is_activate(key) {
			if let Some(record) = self.selected_record() {
				log::debug!("activate requested for {}", record.version);
			}
		} else if self.config.filtering && key.code == KeyCode::Char('/') {
			self.list.start_filter();
		} else if key.code == KeyCode::Esc && self.list.filter_active() {
			self.list.clear_filter();
		} else if let Some(motion) = keymap.motion(key) {
			self.list.apply_motion(motion);
		}
		self.refresh_details();
	}

	fn handle_details_key(&mut self, key: &KeyEvent) {
		if let Some(motion) = self.config.keymap.motion(key) {
			self.details.apply_motion(motion);
		}
	}
}
