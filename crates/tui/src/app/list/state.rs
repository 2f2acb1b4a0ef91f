use ratatui::widgets::ListState;

use crate::components::FilterLine;
use crate::components::list::ITEM_HEIGHT;
use crate::item::{ListItem, VersionItem};
use crate::keymap::Motion;
use crate::matcher;

/// Text typed into the filter prompt.
#[derive(Debug, Default)]
struct FilterState {
	query: String,
	editing: bool,
}

/// Borrowed pieces of [`ListPane`] needed to draw it.
pub(crate) struct ListView<'a> {
	pub items: Vec<&'a VersionItem>,
	pub filter: Option<FilterLine<'a>>,
	pub state: &'a mut ListState,
}

/// Entries, the filtered view over them, and the cursor.
///
/// `state.selected()` is a position in `visible`, which holds indices into
/// `items`. The position is always in bounds, or `None` when `visible` is
/// empty.
#[derive(Debug)]
pub(crate) struct ListPane {
	items: Vec<VersionItem>,
	visible: Vec<usize>,
	state: ListState,
	filter: FilterState,
	page_len: usize,
}

impl ListPane {
	pub fn new(items: Vec<VersionItem>) -> Self {
		let visible = (0..items.len()).collect();
		let mut pane = Self {
			items,
			visible,
			state: ListState::default(),
			filter: FilterState::default(),
			page_len: 1,
		};
		pane.reset_cursor();
		pane
	}

	pub fn items(&self) -> &[VersionItem] {
		&self.items
	}

	/// Indices into `items` in display order.
	pub fn visible(&self) -> &[usize] {
		&self.visible
	}

	/// Index into `items` of the entry under the cursor.
	pub fn selected_index(&self) -> Option<usize> {
		let position = self.state.selected()?;
		self.visible.get(position).copied()
	}

	pub fn selected_item(&self) -> Option<&VersionItem> {
		self.items.get(self.selected_index()?)
	}

	/// Resize the page used by PageUp/PageDown to the rows now visible.
	pub fn set_viewport_height(&mut self, rows: u16) {
		self.page_len = (usize::from(rows) / ITEM_HEIGHT).max(1);
	}

	pub fn apply_motion(&mut self, motion: Motion) {
		let Some(last) = self.visible.len().checked_sub(1) else {
			return;
		};
		let current = self.state.selected().unwrap_or(0).min(last);
		let next = match motion {
			Motion::Up => current.saturating_sub(1),
			Motion::Down => (current + 1).min(last),
			Motion::PageUp => current.saturating_sub(self.page_len),
			Motion::PageDown => (current + self.page_len).min(last),
			Motion::Home => 0,
			Motion::End => last,
		};
		self.state.select(Some(next));
	}

	pub fn is_editing(&self) -> bool {
		self.filter.editing
	}

	pub fn query(&self) -> &str {
		&self.filter.query
	}

	/// Whether the filter prompt should be shown.
	pub fn filter_active(&self) -> bool {
		self.filter.editing || !self.filter.query.is_empty()
	}

	pub fn start_filter(&mut self) {
		self.filter.editing = true;
	}

	pub fn push_filter_char(&mut self, ch: char) {
		self.filter.query.push(ch);
		self.refilter();
	}

	pub fn pop_filter_char(&mut self) {
		if self.filter.query.pop().is_some() {
			self.refilter();
		}
	}

	/// Stop editing but keep the current filter applied.
	pub fn accept_filter(&mut self) {
		self.filter.editing = false;
	}

	/// Drop the filter and show every entry again.
	pub fn clear_filter(&mut self) {
		self.filter = FilterState::default();
		self.refilter();
	}

	pub(crate) fn view_mut(&mut self) -> ListView<'_> {
		let items = self
			.visible
			.iter()
			.filter_map(|&index| self.items.get(index))
			.collect();
		let filter = (self.filter.editing || !self.filter.query.is_empty()).then(|| FilterLine {
			query: &self.filter.query,
			editing: self.filter.editing,
		});
		ListView {
			items,
			filter,
			state: &mut self.state,
		}
	}

	fn refilter(&mut self) {
		let haystacks: Vec<&str> = self.items.iter().map(ListItem::filter_value).collect();
		self.visible = matcher::rank(&self.filter.query, &haystacks);
		self.reset_cursor();
	}

	fn reset_cursor(&mut self) {
		let selected = (!self.visible.is_empty()).then_some(0);
		self.state = ListState::default().with_selected(selected);
	}
}
