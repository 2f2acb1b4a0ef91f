use phpvm_registry::{Registry, StaticRegistry, VersionRecord};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Size;
use ratatui::style::Color;

use super::*;
use crate::config::ShellConfig;
use crate::keymap::{Keymap, QuitBinding};

fn builtin_shell() -> Shell {
	Shell::new(
		StaticRegistry::builtin().list_versions(),
		ShellConfig::default(),
	)
}

fn filtering_shell() -> Shell {
	let config = ShellConfig {
		filtering: true,
		..ShellConfig::default()
	};
	Shell::new(StaticRegistry::builtin().list_versions(), config)
}

fn press(shell: &mut Shell, code: KeyCode) -> Control {
	shell.handle_key(&KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(shell: &mut Shell, text: &str) {
	for ch in text.chars() {
		assert_eq!(press(shell, KeyCode::Char(ch)), Control::Continue);
	}
}

fn ctrl_c() -> KeyEvent {
	KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
}

fn render(shell: &mut Shell, width: u16, height: u16) -> Terminal<TestBackend> {
	let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
	shell.handle_resize(width, height);
	terminal.draw(|frame| shell.draw(frame)).unwrap();
	terminal
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
	let buffer = terminal.backend().buffer();
	let area = buffer.area;
	(area.top()..area.bottom())
		.map(|y| {
			(area.left()..area.right())
				.map(|x| buffer[(x, y)].symbol())
				.collect::<String>()
		})
		.collect::<Vec<_>>()
		.join("\n")
}

#[test]
fn starts_on_first_record_with_list_focus() {
	let shell = builtin_shell();
	assert_eq!(shell.selected_index(), Some(0));
	assert_eq!(shell.focus(), Focus::List);
	assert_eq!(
		shell.details_text(),
		"PHP Version Details\n\nVersion: 8.3.6\n\nPath: /usr/bin/php8.3\n\nStatus: Active"
	);
}

#[test]
fn switch_panel_parity() {
	for presses in 0..7 {
		let mut shell = builtin_shell();
		for _ in 0..presses {
			press(&mut shell, KeyCode::Tab);
		}
		let expected = if presses % 2 == 0 {
			Focus::List
		} else {
			Focus::Details
		};
		assert_eq!(shell.focus(), expected, "after {presses} presses");
	}
}

#[test]
fn back_tab_also_switches() {
	let mut shell = builtin_shell();
	press(&mut shell, KeyCode::BackTab);
	assert_eq!(shell.focus(), Focus::Details);
}

#[test]
fn navigation_regenerates_details() {
	let mut shell = builtin_shell();
	for code in [KeyCode::Down, KeyCode::Char('j'), KeyCode::Char('k'), KeyCode::End] {
		press(&mut shell, code);
		let record = shell.selected_record().unwrap().clone();
		let text = shell.details_text();
		assert!(text.contains(&format!("Version: {}", record.version)));
		assert!(text.contains(&format!("Path: {}", record.path)));
		for other in shell.records().filter(|other| **other != record) {
			assert!(!text.contains(&other.version));
		}
	}
	assert_eq!(shell.selected_index(), Some(2));
	press(&mut shell, KeyCode::Char('g'));
	assert_eq!(shell.selected_index(), Some(0));
}

#[test]
fn details_focus_does_not_move_selection() {
	let mut shell = builtin_shell();
	press(&mut shell, KeyCode::Tab);
	press(&mut shell, KeyCode::Down);
	assert_eq!(shell.selected_index(), Some(0));
	assert!(shell.details_text().contains("8.3.6"));
}

#[test]
fn resize_is_independent_of_history() {
	let mut fresh = builtin_shell();
	fresh.handle_resize(100, 30);

	let mut resized = builtin_shell();
	for (width, height) in [(3, 2), (200, 60), (0, 0), (81, 25)] {
		resized.handle_resize(width, height);
	}
	resized.handle_event(&Event::Resize(100, 30));

	assert_eq!(fresh.dimensions(), resized.dimensions());
	assert_eq!(resized.viewport(), Size::new(100, 30));
	assert_eq!(resized.dimensions(), panel_dimensions(Size::new(100, 30)));
}

#[test]
fn two_record_walkthrough() {
	let records = vec![
		VersionRecord::new("8.3.6", "/usr/bin/php8.3", true),
		VersionRecord::new("8.2.27", "/usr/bin/php8.2", false),
	];
	let mut shell = Shell::new(records, ShellConfig::default());

	assert_eq!(shell.selected_index(), Some(0));
	assert!(shell.details_text().contains("8.3.6"));
	assert!(shell.details_text().contains("Status: Active"));

	assert_eq!(press(&mut shell, KeyCode::Down), Control::Continue);
	assert_eq!(shell.selected_index(), Some(1));
	assert!(shell.details_text().contains("8.2.27"));
	assert!(shell.details_text().contains("Status: Inactive"));

	press(&mut shell, KeyCode::Tab);
	assert_eq!(shell.focus(), Focus::Details);
	assert_eq!(shell.selected_index(), Some(1));

	assert_eq!(press(&mut shell, KeyCode::Char('q')), Control::Quit);
}

#[test]
fn quits_from_every_state() {
	let mut list_focused = builtin_shell();
	assert_eq!(press(&mut list_focused, KeyCode::Char('q')), Control::Quit);

	let mut details_focused = builtin_shell();
	press(&mut details_focused, KeyCode::Tab);
	assert_eq!(press(&mut details_focused, KeyCode::Char('q')), Control::Quit);
	assert_eq!(details_focused.handle_key(&ctrl_c()), Control::Quit);

	let mut empty = Shell::new(Vec::new(), ShellConfig::default());
	assert_eq!(empty.handle_key(&ctrl_c()), Control::Quit);
}

#[test]
fn q_quits_from_details_while_filter_prompt_is_open() {
	let mut shell = filtering_shell();
	press(&mut shell, KeyCode::Char('/'));
	press(&mut shell, KeyCode::Tab);
	assert_eq!(shell.focus(), Focus::Details);
	assert!(shell.is_filter_editing());
	assert_eq!(press(&mut shell, KeyCode::Char('q')), Control::Quit);
}

#[test]
fn q_is_text_again_after_returning_to_the_prompt() {
	let mut shell = filtering_shell();
	press(&mut shell, KeyCode::Char('/'));
	press(&mut shell, KeyCode::Tab);
	press(&mut shell, KeyCode::Tab);
	assert_eq!(press(&mut shell, KeyCode::Char('q')), Control::Continue);
	assert_eq!(shell.filter_query(), "q");
}

#[test]
fn ctrl_c_only_binding_ignores_q() {
	let config = ShellConfig {
		keymap: Keymap::new(QuitBinding::CtrlC),
		..ShellConfig::default()
	};
	let mut shell = Shell::new(StaticRegistry::builtin().list_versions(), config);
	assert_eq!(press(&mut shell, KeyCode::Char('q')), Control::Continue);
	assert_eq!(shell.handle_key(&ctrl_c()), Control::Quit);
}

#[test]
fn key_releases_are_ignored() {
	let mut shell = builtin_shell();
	let release = KeyEvent::new_with_kind(KeyCode::Down, KeyModifiers::NONE, KeyEventKind::Release);
	assert_eq!(shell.handle_event(&Event::Key(release)), Control::Continue);
	assert_eq!(shell.selected_index(), Some(0));

	let press = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
	shell.handle_event(&Event::Key(press));
	assert_eq!(shell.selected_index(), Some(1));
}

#[test]
fn activate_has_no_visible_effect() {
	let mut shell = builtin_shell();
	press(&mut shell, KeyCode::Down);
	let before = shell.details_text();
	assert_eq!(press(&mut shell, KeyCode::Enter), Control::Continue);
	assert_eq!(shell.selected_index(), Some(1));
	assert_eq!(shell.focus(), Focus::List);
	assert_eq!(shell.details_text(), before);
}

#[test]
fn empty_registry_has_no_selection() {
	let mut shell = Shell::new(Vec::new(), ShellConfig::default());
	assert_eq!(shell.selected_index(), None);
	assert!(shell.selected_record().is_none());
	assert_eq!(shell.details_text(), "");

	for code in [KeyCode::Down, KeyCode::End, KeyCode::Enter, KeyCode::Tab, KeyCode::Up] {
		assert_eq!(press(&mut shell, code), Control::Continue);
	}
	assert_eq!(shell.selected_index(), None);

	let terminal = render(&mut shell, 100, 24);
	let text = screen_text(&terminal);
	assert!(text.contains("No versions found"));
	assert!(text.contains("No version selected"));
}

#[test]
fn slash_is_ignored_without_filtering() {
	let mut shell = builtin_shell();
	press(&mut shell, KeyCode::Char('/'));
	assert!(!shell.is_filter_editing());
	assert_eq!(press(&mut shell, KeyCode::Char('q')), Control::Quit);
}

#[test]
fn filtering_ranks_and_selects_best_match() {
	let mut shell = filtering_shell();
	press(&mut shell, KeyCode::Char('/'));
	assert!(shell.is_filter_editing());
	type_text(&mut shell, "8.1");

	assert_eq!(shell.visible_indices().first(), Some(&2));
	assert_eq!(shell.selected_index(), Some(2));
	assert!(shell.details_text().contains("8.1.31"));

	press(&mut shell, KeyCode::Enter);
	assert!(!shell.is_filter_editing());
	assert_eq!(shell.filter_query(), "8.1");

	press(&mut shell, KeyCode::Esc);
	assert_eq!(shell.filter_query(), "");
	assert_eq!(shell.visible_indices(), &[0, 1, 2]);
	assert_eq!(shell.selected_index(), Some(0));
}

#[test]
fn q_is_text_while_editing_filter() {
	let mut shell = filtering_shell();
	press(&mut shell, KeyCode::Char('/'));
	type_text(&mut shell, "8q");
	assert_eq!(shell.filter_query(), "8q");

	press(&mut shell, KeyCode::Backspace);
	assert_eq!(shell.filter_query(), "8");

	assert_eq!(shell.handle_key(&ctrl_c()), Control::Quit);
}

#[test]
fn escape_while_editing_clears_filter() {
	let mut shell = filtering_shell();
	press(&mut shell, KeyCode::Char('/'));
	type_text(&mut shell, "8.2");
	press(&mut shell, KeyCode::Esc);
	assert!(!shell.is_filter_editing());
	assert_eq!(shell.visible_indices(), &[0, 1, 2]);
}

#[test]
fn filter_without_matches_empties_details() {
	let mut shell = filtering_shell();
	press(&mut shell, KeyCode::Char('/'));
	type_text(&mut shell, "xyz");
	assert!(shell.visible_indices().is_empty());
	assert_eq!(shell.selected_index(), None);
	assert_eq!(shell.details_text(), "");

	let terminal = render(&mut shell, 120, 30);
	let text = screen_text(&terminal);
	assert!(text.contains("No versions found"));
	assert!(text.contains("No version selected"));
	assert!(!text.contains("Version: 8.3.6"));

	press(&mut shell, KeyCode::Esc);
	assert!(shell.details_text().contains("Version: 8.3.6"));
}

#[test]
fn details_scroll_is_clamped() {
	let mut shell = builtin_shell();
	shell.handle_resize(80, 8);
	press(&mut shell, KeyCode::Tab);

	press(&mut shell, KeyCode::End);
	assert_eq!(shell.details_scroll(), 3);
	press(&mut shell, KeyCode::Down);
	assert_eq!(shell.details_scroll(), 3);
	press(&mut shell, KeyCode::Char('k'));
	assert_eq!(shell.details_scroll(), 2);
	press(&mut shell, KeyCode::Home);
	assert_eq!(shell.details_scroll(), 0);

	press(&mut shell, KeyCode::End);
	shell.handle_resize(80, 40);
	assert_eq!(shell.details_scroll(), 0);
}

#[test]
fn renders_both_panels() {
	let mut shell = builtin_shell();
	let terminal = render(&mut shell, 120, 30);
	let text = screen_text(&terminal);

	for expected in [
		"PHP Versions",
		"8.3.6 (active)",
		"/usr/bin/php8.2",
		"8.1.31",
		"tab: switch panels",
		"PHP Version Details",
		"Version: 8.3.6",
		"Path: /usr/bin/php8.3",
		"Status: Active",
	] {
		assert!(text.contains(expected), "missing {expected:?} in\n{text}");
	}
	assert!(text.starts_with('╭'));
}

#[test]
fn border_colour_follows_focus() {
	let mut shell = builtin_shell();
	let terminal = render(&mut shell, 120, 30);
	let buffer = terminal.backend().buffer();
	assert_eq!(buffer[(0, 0)].fg, Color::Indexed(62));
	assert_eq!(buffer[(60, 0)].fg, Color::Indexed(240));

	press(&mut shell, KeyCode::Tab);
	let terminal = render(&mut shell, 120, 30);
	let buffer = terminal.backend().buffer();
	assert_eq!(buffer[(0, 0)].fg, Color::Indexed(240));
	assert_eq!(buffer[(60, 0)].fg, Color::Indexed(62));
}

#[test]
fn filter_prompt_is_rendered() {
	let mut shell = filtering_shell();
	press(&mut shell, KeyCode::Char('/'));
	type_text(&mut shell, "8.2");
	let terminal = render(&mut shell, 120, 30);
	let text = screen_text(&terminal);
	assert!(text.contains("Filter: 8.2"));
	assert!(text.contains("/: filter"));
}
