use ratatui::layout::{Rect, Size};

/// Columns and rows a panel spends on its border and padding.
pub const PANEL_CHROME: u16 = 4;
/// Rows above and below the entries for the title, filter, spacer and help.
const LIST_EXTRA_ROWS: u16 = 4;

/// Content sizes of both panels for one terminal size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelDimensions {
	pub list: Size,
	pub details: Size,
}

/// Content sizes of both panels for a `terminal` of the given size.
///
/// Each panel gets half the width; the rest is derived from it with
/// saturating arithmetic so tiny terminals collapse to zero.
#[must_use]
pub fn panel_dimensions(terminal: Size) -> PanelDimensions {
	let width = (terminal.width / 2).saturating_sub(PANEL_CHROME);
	let details_height = terminal.height.saturating_sub(PANEL_CHROME);
	PanelDimensions {
		list: Size::new(width, details_height.saturating_sub(LIST_EXTRA_ROWS)),
		details: Size::new(width, details_height),
	}
}

/// Split `area` into the list and details panel areas.
///
/// Both panels are `width / 2` wide; an odd leftover column stays unused.
pub(crate) fn split_panels(area: Rect) -> [Rect; 2] {
	let half = area.width / 2;
	let list = Rect::new(area.x, area.y, half, area.height);
	let details = Rect::new(area.x.saturating_add(half), area.y, half, area.height);
	[list, details]
}
