pub(crate) mod layout;

use layout::split_panels;
use ratatui::Frame;

use super::{Focus, Shell};
use crate::components::{DetailsContext, ListContext, render_details, render_list};

impl Shell {
	/// Draw both panels into `frame`.
	pub fn draw(&mut self, frame: &mut Frame) {
		let [list_area, details_area] = split_panels(frame.area());
		let theme = self.config.style.theme;
		let help = self.config.keymap.help_text(self.config.filtering);

		let view = self.list.view_mut();
		let list_ctx = ListContext {
			items: view.items,
			title: &self.config.labels.list_title,
			filter: view.filter,
			help: &help,
			empty_message: &self.config.labels.empty_list,
			focused: self.focus == Focus::List,
			theme: &theme,
		};
		render_list(frame, list_area, list_ctx, view.state);

		let view = self.details.view_mut();
		let details_ctx = DetailsContext {
			lines: view.lines,
			scroll: view.scroll,
			scrollbar_state: view.scrollbar_state,
			empty_message: &self.config.labels.empty_details,
			focused: self.focus == Focus::Details,
			theme: &theme,
		};
		render_details(frame, details_area, details_ctx);
	}
}
