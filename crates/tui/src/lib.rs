//! Dual-panel terminal shell for browsing PHP versions.
//!
//! The shell shows a selectable version list beside a read-only details
//! viewport, routes key presses to whichever panel holds focus, and restores
//! the terminal on every exit path. Rendering goes through any ratatui
//! backend, so the same [`Shell`] drives the real terminal and `TestBackend`.

mod app;
pub mod components;
mod config;
mod error;
pub mod item;
pub mod keymap;
mod matcher;
mod runtime;
pub mod style;

pub use app::{Control, Focus, PanelDimensions, Shell, panel_dimensions};
pub use config::{ShellConfig, UiLabels};
pub use error::ShellError;
pub use item::{ListItem, VersionItem};
pub use keymap::{Keymap, Motion, QuitBinding};
pub use runtime::{EventSource, TerminalEvents, run, run_loop};
pub use style::{StyleConfig, Theme, builtin_themes, default_theme};
