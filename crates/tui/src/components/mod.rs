//! Widgets drawn by the shell.

/// Details panel content and rendering.
pub mod details;
/// Version list panel rendering.
pub mod list;
/// Scrollbar for viewports.
pub mod scrollbar;

pub use details::{DetailsContext, build_detail_lines, plain_text, render_details};
pub use list::{FilterLine, ListContext, render_list};
pub use scrollbar::{ScrollMetrics, render_scrollbar};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

/// Rounded, padded block shared by both panels.
pub(crate) fn panel_block(border_style: Style) -> Block<'static> {
	Block::default()
		.borders(Borders::ALL)
		.border_set(symbols::border::ROUNDED)
		.border_style(border_style)
		.padding(Padding::uniform(1))
}

/// Render `message` vertically and horizontally centred in `area`.
pub(crate) fn render_placeholder(frame: &mut Frame, area: Rect, message: &str, style: Style) {
	let vertical_padding = area.height.saturating_sub(1) / 2;
	let mut lines: Vec<Line<'_>> = (0..vertical_padding).map(|_| Line::from("")).collect();
	lines.push(Line::from(Span::styled(message, style)));

	let para = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
	frame.render_widget(para, area);
}
