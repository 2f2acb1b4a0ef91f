use std::io;

use thiserror::Error;

/// Failures surfaced by the terminal shell.
///
/// Key presses and resizes never fail; only talking to the terminal can.
#[derive(Debug, Error)]
pub enum ShellError {
	/// The terminal could not be switched into raw mode and the alternate screen.
	#[error("failed to initialize the terminal: {0}")]
	TerminalInit(#[source] io::Error),
	/// Reading events from or drawing to the terminal failed mid-session.
	#[error("terminal I/O failed: {0}")]
	Io(#[from] io::Error),
}
