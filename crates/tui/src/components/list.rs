use std::borrow::Cow;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{HighlightSpacing, List, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{panel_block, render_placeholder};
use crate::item::ListItem;
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
/// Rows taken by one entry: title, description and a spacer.
pub(crate) const ITEM_HEIGHT: usize = 3;
/// Title row plus filter row above the entries.
pub(crate) const LIST_HEADER_ROWS: u16 = 2;
/// Spacer row plus help row below the entries.
pub(crate) const LIST_FOOTER_ROWS: u16 = 2;

/// Filter prompt state shown above the entries.
#[derive(Debug, Clone, Copy)]
pub struct FilterLine<'a> {
	pub query: &'a str,
	pub editing: bool,
}

/// Context for rendering the list panel.
pub struct ListContext<'a, I: ListItem> {
	/// Entries in display order.
	pub items: Vec<&'a I>,
	/// Title rendered on the first row.
	pub title: &'a str,
	/// Filter prompt, when a filter is active or being typed.
	pub filter: Option<FilterLine<'a>>,
	/// Help text rendered on the last row.
	pub help: &'a str,
	/// Message shown when `items` is empty.
	pub empty_message: &'a str,
	/// Whether the list holds focus.
	pub focused: bool,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Render the bordered list panel into `area`.
pub fn render_list<I: ListItem>(
	frame: &mut Frame,
	area: Rect,
	ctx: ListContext<'_, I>,
	state: &mut ListState,
) {
	let block = panel_block(ctx.theme.border(ctx.focused));
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let [title_area, filter_area, items_area, _spacer, help_area] = Layout::vertical([
		Constraint::Length(1),
		Constraint::Length(LIST_HEADER_ROWS - 1),
		Constraint::Fill(1),
		Constraint::Length(LIST_FOOTER_ROWS - 1),
		Constraint::Length(1),
	])
	.areas(inner);

	frame.render_widget(
		Paragraph::new(Span::styled(ctx.title, ctx.theme.title)),
		title_area,
	);

	if let Some(filter) = ctx.filter {
		let mut spans = vec![
			Span::styled("Filter: ", ctx.theme.info_title),
			Span::styled(filter.query, ctx.theme.info_value),
		];
		if filter.editing {
			spans.push(Span::styled("█", ctx.theme.info_value));
		}
		frame.render_widget(Paragraph::new(Line::from(spans)), filter_area);
	}

	if ctx.items.is_empty() {
		render_placeholder(frame, items_area, ctx.empty_message, ctx.theme.empty);
	} else {
		let text_width = usize::from(items_area.width).saturating_sub(HIGHLIGHT_SYMBOL.width());
		let rows: Vec<Text<'_>> = ctx
			.items
			.iter()
			.map(|item| {
				Text::from(vec![
					Line::from(truncate_to_width(&item.title(), text_width).into_owned()),
					Line::styled(
						truncate_to_width(&item.description(), text_width).into_owned(),
						ctx.theme.description,
					),
					Line::from(""),
				])
			})
			.collect();

		let list = List::new(rows)
			.highlight_symbol(HIGHLIGHT_SYMBOL)
			.highlight_spacing(HighlightSpacing::Always)
			.highlight_style(ctx.theme.selected);
		frame.render_stateful_widget(list, items_area, state);
	}

	frame.render_widget(
		Paragraph::new(Span::styled(ctx.help, ctx.theme.help)),
		help_area,
	);
}

/// Clip `text` to `width` terminal columns, marking the cut with an ellipsis.
pub(crate) fn truncate_to_width(text: &str, width: usize) -> Cow<'_, str> {
	if text.width() <= width {
		return Cow::Borrowed(text);
	}
	if width == 0 {
		return Cow::Borrowed("");
	}

	let mut used = 0;
	let mut truncated = String::new();
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width + 1 > width {
			break;
		}
		used += ch_width;
		truncated.push(ch);
	}
	truncated.push('…');
	Cow::Owned(truncated)
}
