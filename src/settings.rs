//! Layered configuration for the shell.
//!
//! Sources merge in order: builtin defaults, the default config files, files
//! passed with `--config`, `PHPVM__*` environment variables and finally CLI
//! flags. Configuration is only ever read.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};
use config::{Config, ConfigError, Environment, File};
use phpvm_tui::style::{by_name, names};
use phpvm_tui::{Keymap, QuitBinding, ShellConfig, StyleConfig, UiLabels};
use serde::Deserialize;
use serde_json::json;

use crate::app_dirs;
use crate::cli::CliArgs;

const DEFAULT_THEME: &str = "default";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	quit_keys: Option<String>,
	filtering: Option<bool>,
	list_title: Option<String>,
}

/// Configuration after every layer has been applied and validated.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
	pub theme_name: String,
	pub shell: ShellConfig,
	/// Config files that existed and were merged, in merge order.
	pub sources: Vec<PathBuf>,
}

impl ResolvedConfig {
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Theme: {}", self.theme_name);
		println!("  Quit keys: {}", self.shell.keymap.quit);
		println!("  Filtering: {}", bool_to_word(self.shell.filtering));
		println!("  List title: {}", self.shell.labels.list_title);
		if self.sources.is_empty() {
			println!("  Sources: (defaults only)");
		} else {
			for source in &self.sources {
				println!("  Source: {}", source.display());
			}
		}
	}

	pub fn to_json(&self) -> Result<String> {
		let sources: Vec<String> = self
			.sources
			.iter()
			.map(|path| path.display().to_string())
			.collect();
		let payload = json!({
			"ui": {
				"theme": self.theme_name,
				"quit_keys": self.shell.keymap.quit.as_str(),
				"filtering": self.shell.filtering,
				"list_title": self.shell.labels.list_title,
			},
			"sources": sources,
		});
		Ok(serde_json::to_string_pretty(&payload)?)
	}
}

pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let (builder, sources) = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(sources)
}

fn build_config(cli: &CliArgs) -> Result<(Config, Vec<PathBuf>)> {
	let mut builder = Config::builder();
	let mut sources = Vec::new();

	if !cli.no_config {
		for path in default_config_files() {
			if path.is_file() {
				sources.push(path.clone());
			}
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		sources.push(path.clone());
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		Environment::with_prefix("phpvm")
			.separator("__")
			.try_parsing(true),
	);

	let config = builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})?;
	Ok((config, sources))
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".phpvm.toml"));
		files.push(current_dir.join("phpvm.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(keys) = cli.quit_keys {
			self.ui.quit_keys = Some(QuitBinding::from(keys).as_str().to_string());
		}
		if cli.filter {
			self.ui.filtering = Some(true);
		}
		if let Some(title) = cli.list_title.clone() {
			self.ui.list_title = Some(title);
		}
	}

	fn resolve(self, sources: Vec<PathBuf>) -> Result<ResolvedConfig> {
		let theme_name = self
			.ui
			.theme
			.map(|name| name.trim().to_string())
			.filter(|name| !name.is_empty())
			.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let Some(theme) = by_name(&theme_name) else {
			bail!(
				"unknown theme '{theme_name}' (available: {})",
				names().join(", ")
			);
		};

		let quit = match self.ui.quit_keys {
			Some(value) => value.parse::<QuitBinding>().map_err(|err| anyhow!(err))?,
			None => QuitBinding::default(),
		};

		let mut labels = UiLabels::default();
		if let Some(title) = self.ui.list_title {
			labels.list_title = title;
		}

		Ok(ResolvedConfig {
			theme_name,
			shell: ShellConfig {
				style: StyleConfig::with_theme(theme),
				keymap: Keymap::new(quit),
				labels,
				filtering: self.ui.filtering.unwrap_or(false),
			},
			sources,
		})
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
