//! Parser for the bundled theme documents.
//!
//! A document names the theme, optional aliases, whether it is the default,
//! and one `[styles.<element>]` table per themed element:
//!
//! ```toml
//! name = "default"
//! aliases = ["dark"]
//! default = true
//!
//! [styles.focused_border]
//! fg = "62"            # ANSI index, or "#rrggbb"
//! modifiers = ["bold"] # bold, dim, italic
//! ```

use anyhow::{Context, Result, bail, ensure};
use include_dir::Dir;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeRegistration};

pub(super) struct Bundle {
	pub(super) themes: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: Styles,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Styles {
	title: StyleSpec,
	focused_border: StyleSpec,
	blurred_border: StyleSpec,
	info_title: StyleSpec,
	info_value: StyleSpec,
	active: StyleSpec,
	inactive: StyleSpec,
	help: StyleSpec,
	selected: StyleSpec,
	description: StyleSpec,
	empty: StyleSpec,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleSpec {
	fg: Option<String>,
	modifiers: Vec<String>,
}

impl StyleSpec {
	fn resolve(&self) -> Result<Style> {
		let mut style = Style::new();
		if let Some(fg) = &self.fg {
			style = style.fg(colour(fg)?);
		}
		for name in &self.modifiers {
			style = style.add_modifier(modifier(name)?);
		}
		Ok(style)
	}
}

impl Styles {
	fn into_theme(self) -> Result<Theme> {
		let resolve =
			|spec: &StyleSpec, element: &str| spec.resolve().with_context(|| format!("styles.{element}"));
		Ok(Theme {
			title: resolve(&self.title, "title")?,
			focused_border: resolve(&self.focused_border, "focused_border")?,
			blurred_border: resolve(&self.blurred_border, "blurred_border")?,
			info_title: resolve(&self.info_title, "info_title")?,
			info_value: resolve(&self.info_value, "info_value")?,
			active: resolve(&self.active, "active")?,
			inactive: resolve(&self.inactive, "inactive")?,
			help: resolve(&self.help, "help")?,
			selected: resolve(&self.selected, "selected")?,
			description: resolve(&self.description, "description")?,
			empty: resolve(&self.empty, "empty")?,
		})
	}
}

/// Load every `.toml` file in `dir`, in file name order.
pub(super) fn load_dir(dir: &Dir<'_>) -> Result<Bundle> {
	let mut files: Vec<_> = dir
		.files()
		.filter(|file| file.path().extension().is_some_and(|ext| ext == "toml"))
		.collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	let mut sources = Vec::with_capacity(files.len());
	for file in files {
		let label = file.path().display().to_string();
		let text = file
			.contents_utf8()
			.with_context(|| format!("{label} is not UTF-8"))?;
		sources.push((label, text));
	}
	build_bundle(&sources)
}

/// Parse `(label, toml)` pairs into registrations; exactly one must be the
/// default.
fn build_bundle(sources: &[(String, &str)]) -> Result<Bundle> {
	let mut themes = Vec::with_capacity(sources.len());
	let mut defaults = Vec::new();

	for (label, text) in sources {
		let file: ThemeFile = toml::from_str(text).with_context(|| format!("failed to parse {label}"))?;
		let theme = file.styles.into_theme().with_context(|| label.clone())?;
		if file.default {
			defaults.push((file.name.clone(), theme));
		}
		let registration = file
			.aliases
			.iter()
			.map(|alias| alias.trim())
			.filter(|alias| !alias.is_empty())
			.fold(ThemeRegistration::new(file.name, theme), |registration, alias| {
				registration.alias(alias)
			});
		themes.push(registration);
	}

	ensure!(!themes.is_empty(), "no bundled themes found");
	let default_theme = match defaults.as_slice() {
		[(_, theme)] => *theme,
		[] => bail!("no bundled theme is marked `default = true`"),
		many => {
			let names: Vec<&str> = many.iter().map(|(name, _)| name.as_str()).collect();
			bail!("several bundled themes are marked default: {}", names.join(", "))
		}
	};

	Ok(Bundle {
		themes,
		default_theme,
	})
}

/// An ANSI palette index (`"62"`) or a hex triple (`"#586e75"`).
fn colour(value: &str) -> Result<Color> {
	let value = value.trim();
	if let Some(hex) = value.strip_prefix('#') {
		ensure!(
			hex.len() == 6 && hex.chars().all(|ch| ch.is_ascii_hexdigit()),
			"`{value}` is not a #rrggbb colour"
		);
		let rgb = u32::from_str_radix(hex, 16).with_context(|| format!("invalid colour `{value}`"))?;
		let [_, r, g, b] = rgb.to_be_bytes();
		return Ok(Color::Rgb(r, g, b));
	}
	value
		.parse::<u8>()
		.map(Color::Indexed)
		.with_context(|| format!("`{value}` is neither an ANSI index nor #rrggbb"))
}

fn modifier(name: &str) -> Result<Modifier> {
	match name.trim().to_ascii_lowercase().as_str() {
		"bold" => Ok(Modifier::BOLD),
		"dim" => Ok(Modifier::DIM),
		"italic" => Ok(Modifier::ITALIC),
		other => bail!("unsupported modifier `{other}`"),
	}
}
