//! File-backed logging.
//!
//! The terminal belongs to the UI while the shell runs, so records go to
//! `phpvm.log` in the cache directory instead of stderr.

use std::fs::{self, File};
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};

use crate::app_dirs;

const LOG_ENV: &str = "PHPVM_LOG";
const LOG_FILE: &str = "phpvm.log";

/// Route the `log` facade into the log file.
///
/// Returns the file path, or `None` when the file could not be opened, in
/// which case logging stays disabled.
pub(crate) fn initialize() -> Option<PathBuf> {
	let dir = app_dirs::get_cache_dir().ok()?;
	fs::create_dir_all(&dir).ok()?;
	let path = dir.join(LOG_FILE);
	let file = File::create(&path).ok()?;

	Builder::from_env(Env::default().filter_or(LOG_ENV, "info"))
		.target(Target::Pipe(Box::new(file)))
		.try_init()
		.ok()?;
	Some(path)
}
