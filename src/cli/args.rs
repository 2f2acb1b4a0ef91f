use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use phpvm_tui::QuitBinding;

use crate::app_dirs;

/// Version banner including the directories `phpvm` reads from and logs to.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let cache_dir = match app_dirs::get_cache_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("phpvm {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "log directory: {cache_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse the process arguments, exiting with clap's message on error.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "phpvm",
	version,
	long_version = long_version(),
	about = "Browse PHP versions in a dual-panel terminal UI",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `phpvm` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "PHPVM_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name or alias (default: default)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "quit-keys",
		value_enum,
		help = "Keys that quit the shell (default: ctrl-c-or-q)"
	)]
	pub(crate) quit_keys: Option<QuitKeysArg>,
	#[arg(
		short = 'f',
		long = "filter",
		help = "Enable filtering the version list with `/` (default: disabled)"
	)]
	pub(crate) filter: bool,
	#[arg(
		long = "list-title",
		value_name = "TEXT",
		help = "Override the title above the version list (default: PHP Versions)"
	)]
	pub(crate) list_title: Option<String>,
	#[arg(
		long = "list",
		help = "Print the known versions and exit (default: disabled)"
	)]
	pub(crate) list: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration and exit (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "format",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Output format for --list and --print-config"
	)]
	pub(crate) format: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Quit bindings selectable from the CLI.
pub(crate) enum QuitKeysArg {
	CtrlC,
	CtrlCOrQ,
}

impl From<QuitKeysArg> for QuitBinding {
	fn from(arg: QuitKeysArg) -> Self {
		match arg {
			QuitKeysArg::CtrlC => QuitBinding::CtrlC,
			QuitKeysArg::CtrlCOrQ => QuitBinding::CtrlCOrQ,
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats for the non-interactive commands.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn command_definition_is_consistent() {
		CliArgs::command().debug_assert();
	}

	#[test]
	fn defaults_launch_the_shell() {
		let parsed = CliArgs::try_parse_from(["phpvm"]).unwrap();
		assert_eq!(parsed.format, OutputFormat::Plain);
		assert!(!parsed.filter);
		assert!(!parsed.list);
		assert!(parsed.quit_keys.is_none());
	}

	#[test]
	fn quit_keys_accept_kebab_case() {
		let parsed = CliArgs::try_parse_from(["phpvm", "--quit-keys", "ctrl-c"]).unwrap();
		assert_eq!(
			parsed.quit_keys.map(QuitBinding::from),
			Some(QuitBinding::CtrlC)
		);
		assert!(CliArgs::try_parse_from(["phpvm", "--quit-keys", "escape"]).is_err());
	}

	#[test]
	fn config_flag_repeats() {
		let parsed =
			CliArgs::try_parse_from(["phpvm", "-c", "a.toml", "--config", "b.toml"]).unwrap();
		assert_eq!(
			parsed.config,
			vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
		);
	}
}
