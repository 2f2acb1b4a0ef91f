use phpvm_registry::VersionRecord;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, ScrollbarState};

use super::{ScrollMetrics, panel_block, render_placeholder, render_scrollbar};
use crate::config::UiLabels;
use crate::style::Theme;

/// Build the styled lines describing `record`.
#[must_use]
pub fn build_detail_lines(
	record: &VersionRecord,
	labels: &UiLabels,
	theme: &Theme,
) -> Vec<Line<'static>> {
	let field = |label: &str, value: String, value_style: Style| {
		Line::from(vec![
			Span::styled(format!("{label}: "), theme.info_title),
			Span::styled(value, value_style),
		])
	};

	vec![
		Line::styled(labels.details_heading.clone(), theme.info_title),
		Line::default(),
		field("Version", record.version.clone(), theme.info_value),
		Line::default(),
		field("Path", record.path.clone(), theme.info_value),
		Line::default(),
		field(
			"Status",
			record.status_label().to_string(),
			theme.status(record.active),
		),
	]
}

/// Flatten styled lines into plain text, one line per row.
#[must_use]
pub fn plain_text(lines: &[Line<'_>]) -> String {
	lines
		.iter()
		.map(|line| {
			line.spans
				.iter()
				.map(|span| span.content.as_ref())
				.collect::<String>()
		})
		.collect::<Vec<_>>()
		.join("\n")
}

/// Context for rendering the details panel.
pub struct DetailsContext<'a> {
	/// Content lines.
	pub lines: &'a [Line<'static>],
	/// First visible line.
	pub scroll: usize,
	/// Scrollbar state kept in sync with `scroll`.
	pub scrollbar_state: &'a mut ScrollbarState,
	/// Message shown when `lines` is empty.
	pub empty_message: &'a str,
	/// Whether the panel holds focus.
	pub focused: bool,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Render the bordered details viewport into `area`.
pub fn render_details(frame: &mut Frame, area: Rect, ctx: DetailsContext<'_>) {
	let border_style = ctx.theme.border(ctx.focused);
	let block = panel_block(border_style);
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if ctx.lines.is_empty() {
		render_placeholder(frame, inner, ctx.empty_message, ctx.theme.empty);
		return;
	}

	let metrics = ScrollMetrics::compute(ctx.lines.len(), usize::from(inner.height));
	let visible: Vec<Line<'_>> = ctx
		.lines
		.iter()
		.skip(ctx.scroll)
		.take(metrics.viewport_len)
		.cloned()
		.collect();
	let para = Paragraph::new(visible);

	if metrics.needs_scrollbar {
		let text_area = render_scrollbar(frame, inner, ctx.scrollbar_state, border_style);
		frame.render_widget(para, text_area);
	} else {
		frame.render_widget(para, inner);
	}
}
