//! Version list panel state.

mod state;

pub(crate) use state::ListPane;
