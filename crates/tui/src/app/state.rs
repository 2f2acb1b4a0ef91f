use phpvm_registry::VersionRecord;
use ratatui::layout::Size;

use super::details::DetailsPane;
use super::list::ListPane;
use super::render::layout::PanelDimensions;
use crate::components::build_detail_lines;
use crate::config::ShellConfig;
use crate::item::VersionItem;

/// Panel that receives routed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
	#[default]
	List,
	Details,
}

impl Focus {
	/// The other panel.
	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			Self::List => Self::Details,
			Self::Details => Self::List,
		}
	}
}

/// What the event loop should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
	Continue,
	Quit,
}

/// State of the dual-panel shell.
///
/// Records are copied in once at construction; everything afterwards is
/// driven by key and resize events.
#[derive(Debug)]
pub struct Shell {
	pub(crate) config: ShellConfig,
	pub(crate) list: ListPane,
	pub(crate) details: DetailsPane,
	pub(crate) focus: Focus,
	pub(crate) viewport: Size,
	pub(crate) dimensions: PanelDimensions,
}

impl Shell {
	/// Build a shell over `records`, selecting the first one.
	#[must_use]
	pub fn new(records: Vec<VersionRecord>, config: ShellConfig) -> Self {
		let items = records.into_iter().map(VersionItem::new).collect();
		let mut shell = Self {
			config,
			list: ListPane::new(items),
			details: DetailsPane::default(),
			focus: Focus::default(),
			viewport: Size::default(),
			dimensions: PanelDimensions::default(),
		};
		shell.refresh_details();
		shell
	}

	/// Panel currently receiving input.
	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	/// Every record, in registry order, regardless of any filter.
	pub fn records(&self) -> impl Iterator<Item = &VersionRecord> {
		self.list.items().iter().map(VersionItem::record)
	}

	/// Registry-order indices of the records currently listed.
	#[must_use]
	pub fn visible_indices(&self) -> &[usize] {
		self.list.visible()
	}

	/// Registry-order index of the selected record.
	#[must_use]
	pub fn selected_index(&self) -> Option<usize> {
		self.list.selected_index()
	}

	#[must_use]
	pub fn selected_record(&self) -> Option<&VersionRecord> {
		self.list.selected_item().map(VersionItem::record)
	}

	/// Plain text of the details panel.
	#[must_use]
	pub fn details_text(&self) -> String {
		self.details.text()
	}

	/// Current scroll offset of the details panel.
	#[must_use]
	pub fn details_scroll(&self) -> usize {
		self.details.scroll()
	}

	/// Current filter query; empty when no filter is applied.
	#[must_use]
	pub fn filter_query(&self) -> &str {
		self.list.query()
	}

	/// Whether keystrokes are currently edited into the filter prompt.
	#[must_use]
	pub fn is_filter_editing(&self) -> bool {
		self.list.is_editing()
	}

	/// Last terminal size reported by a resize.
	#[must_use]
	pub fn viewport(&self) -> Size {
		self.viewport
	}

	/// Content sizes of both panels for [`Shell::viewport`].
	#[must_use]
	pub fn dimensions(&self) -> PanelDimensions {
		self.dimensions
	}

	#[must_use]
	pub fn config(&self) -> &ShellConfig {
		&self.config
	}

	/// Regenerate the details from the selected record.
	///
	/// Without a selection the details are emptied so the panel shows its
	/// placeholder.
	pub(crate) fn refresh_details(&mut self) {
		let lines = match self.list.selected_item() {
			Some(item) => build_detail_lines(
				item.record(),
				&self.config.labels,
				&self.config.style.theme,
			),
			None => Vec::new(),
		};
		self.details.set_content(lines);
	}
}
