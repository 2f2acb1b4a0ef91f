//! Details viewport state.

mod state;

pub(crate) use state::DetailsPane;
