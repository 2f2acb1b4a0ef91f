//! Themes compiled into the binary from `themes/*.toml`.

mod loader;

use std::sync::LazyLock;

use include_dir::{Dir, include_dir};

use crate::style::theme::types::{Theme, ThemeRegistration};

static THEME_FILES: Dir<'static> =
	include_dir!("$CARGO_MANIFEST_DIR/src/style/theme/builtins/themes");

static BUNDLED: LazyLock<loader::Bundle> = LazyLock::new(|| {
	loader::load_dir(&THEME_FILES)
		.unwrap_or_else(|error| panic!("bundled theme files are malformed: {error:#}"))
});

/// The bundled theme flagged `default = true`.
pub fn default_theme() -> Theme {
	BUNDLED.default_theme
}

pub(super) fn registrations() -> Vec<ThemeRegistration> {
	BUNDLED.themes.clone()
}
