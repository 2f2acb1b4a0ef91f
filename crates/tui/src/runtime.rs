//! Terminal session and event loop.

use std::io;

use phpvm_registry::VersionRecord;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::crossterm::event::{self, Event};

use crate::app::{Control, Shell};
use crate::config::ShellConfig;
use crate::error::ShellError;

/// Blocking supplier of terminal events.
pub trait EventSource {
	fn next_event(&mut self) -> io::Result<Event>;
}

/// Events read from the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
	fn next_event(&mut self) -> io::Result<Event> {
		event::read()
	}
}

/// Runs its closure when dropped, whichever way the scope is left.
struct RestoreGuard<F: FnMut()> {
	restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
	fn new(restore: F) -> Self {
		Self { restore }
	}
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
	fn drop(&mut self) {
		(self.restore)();
	}
}

/// Take over the terminal and run the shell over `records` until it quits.
///
/// The terminal is restored on return, on error, and on panic.
pub fn run(records: Vec<VersionRecord>, config: ShellConfig) -> Result<(), ShellError> {
	let mut terminal = ratatui::try_init().map_err(|err| {
		ratatui::restore();
		ShellError::TerminalInit(err)
	})?;
	let _restore = RestoreGuard::new(ratatui::restore);

	let mut shell = Shell::new(records, config);
	let size = terminal.size()?;
	shell.handle_resize(size.width, size.height);

	let result = run_loop(&mut terminal, &mut shell, &mut TerminalEvents);
	log::info!("shell exited");
	result
}

/// Draw, wait for an event, apply it; repeat until the shell asks to quit.
pub fn run_loop<B, E>(
	terminal: &mut Terminal<B>,
	shell: &mut Shell,
	events: &mut E,
) -> Result<(), ShellError>
where
	B: Backend,
	E: EventSource,
{
	loop {
		terminal.draw(|frame| shell.draw(frame))?;
		let event = events.next_event()?;
		if shell.handle_event(&event) == Control::Quit {
			return Ok(());
		}
	}
}
