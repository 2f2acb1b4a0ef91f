mod app_dirs;
mod cli;
mod logging;
mod settings;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_versions_json, print_versions_plain};
use phpvm_registry::{Registry, StaticRegistry, check_single_active};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in phpvm_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let registry = StaticRegistry::builtin();

	if cli.list {
		let records = registry.list_versions();
		match cli.format {
			OutputFormat::Plain => print_versions_plain(&records),
			OutputFormat::Json => print_versions_json(&records)?,
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		match cli.format {
			OutputFormat::Plain => resolved.print_summary(),
			OutputFormat::Json => println!("{}", resolved.to_json()?),
		}
		return Ok(());
	}

	if let Some(path) = logging::initialize() {
		log::info!("Starting phpvm v{}", env!("CARGO_PKG_VERSION"));
		log::debug!("logging to {}", path.display());
	}
	for source in &resolved.sources {
		log::info!("loaded configuration from {}", source.display());
	}

	let records = registry.list_versions();
	log::info!("registry returned {} versions", records.len());
	if let Err(err) = check_single_active(&records) {
		log::warn!("{err}");
	}

	phpvm_tui::run(records, resolved.shell).context("terminal session failed")?;
	log::info!("phpvm shut down cleanly");
	Ok(())
}
