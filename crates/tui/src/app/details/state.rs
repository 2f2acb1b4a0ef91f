use ratatui::text::Line;
use ratatui::widgets::ScrollbarState;

use crate::components::{ScrollMetrics, plain_text};
use crate::keymap::Motion;

/// Borrowed pieces of [`DetailsPane`] needed to draw it.
pub(crate) struct DetailsView<'a> {
	pub lines: &'a [Line<'static>],
	pub scroll: usize,
	pub scrollbar_state: &'a mut ScrollbarState,
}

/// Read-only text viewport with a vertical scroll offset.
#[derive(Debug, Default)]
pub(crate) struct DetailsPane {
	lines: Vec<Line<'static>>,
	scroll: usize,
	scrollbar_state: ScrollbarState,
	viewport_height: usize,
}

impl DetailsPane {
	/// Replace the content. Scrolling restarts at the top unless the content
	/// is unchanged.
	pub fn set_content(&mut self, lines: Vec<Line<'static>>) {
		if lines == self.lines {
			return;
		}
		self.lines = lines;
		self.scroll = 0;
		self.sync_scrollbar();
	}

	pub fn set_viewport_height(&mut self, rows: u16) {
		self.viewport_height = usize::from(rows);
		self.scroll = self.scroll.min(self.metrics().max_scroll);
		self.sync_scrollbar();
	}

	pub fn scroll(&self) -> usize {
		self.scroll
	}

	pub fn text(&self) -> String {
		plain_text(&self.lines)
	}

	pub fn metrics(&self) -> ScrollMetrics {
		ScrollMetrics::compute(self.lines.len(), self.viewport_height)
	}

	pub fn apply_motion(&mut self, motion: Motion) {
		let metrics = self.metrics();
		let page = metrics.viewport_len.max(1);
		self.scroll = match motion {
			Motion::Up => self.scroll.saturating_sub(1),
			Motion::Down => self.scroll + 1,
			Motion::PageUp => self.scroll.saturating_sub(page),
			Motion::PageDown => self.scroll + page,
			Motion::Home => 0,
			Motion::End => metrics.max_scroll,
		}
		.min(metrics.max_scroll);
		self.sync_scrollbar();
	}

	pub(crate) fn view_mut(&mut self) -> DetailsView<'_> {
		DetailsView {
			lines: &self.lines,
			scroll: self.scroll,
			scrollbar_state: &mut self.scrollbar_state,
		}
	}

	fn sync_scrollbar(&mut self) {
		let metrics = self.metrics();
		self.scrollbar_state = ScrollbarState::new(metrics.content_length)
			.viewport_content_length(metrics.viewport_len)
			.position(metrics.scrollbar_position(self.scroll));
	}
}
