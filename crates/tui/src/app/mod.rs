//! The dual-panel shell: state, input handling and rendering.
//!
//! [`Shell`] owns the version list and the details viewport. Input handling
//! lives in `actions`, drawing in `render`, and the panes keep their own
//! cursor and scroll state.

mod actions;
mod details;
mod list;
pub(crate) mod render;
mod state;
#[cfg(test)]
mod tests;

pub use render::layout::{PanelDimensions, panel_dimensions};
pub use state::{Control, Focus, Shell};
