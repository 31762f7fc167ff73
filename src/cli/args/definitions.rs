use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser, Subcommand};
use textpin::store::SelectionId;

use super::options::{OutputFormat, ThemeArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `textpin` binary.
#[derive(Parser, Debug)]
#[command(
	name = "textpin",
	version,
	long_version = long_version(),
	about = "Pin, search and save selections of text in the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[command(subcommand)]
	pub(crate) command: Option<Command>,
	#[arg(
		value_name = "FILE",
		help = "Text to open; `-` reads stdin (default: stdin when piped)"
	)]
	pub(crate) file: Option<PathBuf>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "TEXTPIN_CONFIG",
		action = ArgAction::Append,
		global = true,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "multi-tap-ms",
		value_name = "MS",
		help = "Window for double and triple clicks in milliseconds (default: 500)"
	)]
	pub(crate) multi_tap_ms: Option<u64>,
	#[arg(
		long = "tap-slop",
		value_name = "CELLS",
		help = "How far a click may drift and still continue a streak (default: 1)"
	)]
	pub(crate) tap_slop: Option<u16>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Delay before a typed query is searched in milliseconds (default: 300)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(long, value_enum, help = "Select the colour theme (default: light)")]
	pub(crate) theme: Option<ThemeArg>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the title bar text (default: file name)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "store",
		value_name = "PATH",
		global = true,
		help = "Saved selection file (default: <data dir>/selections.json)"
	)]
	pub(crate) store: Option<PathBuf>,
	#[arg(
		long = "ephemeral",
		value_name = "BOOL",
		num_args = 0..=1,
		require_equals = true,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Keep saved selections in memory only (default: disabled)"
	)]
	pub(crate) ephemeral: Option<bool>,
	#[arg(
		short = 'r',
		long = "restore",
		conflicts_with_all = ["file", "open"],
		help = "Resume the text, pins and query of the last session"
	)]
	pub(crate) restore: bool,
	#[arg(
		long = "open",
		value_name = "ID",
		conflicts_with = "file",
		help = "Start from a saved selection"
	)]
	pub(crate) open: Option<SelectionId>,
	#[arg(
		long = "log-file",
		value_name = "PATH",
		global = true,
		help = "Write logs to this file or directory (default: <cache dir>/logs)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		global = true,
		help = "Choose how to print results"
	)]
	pub(crate) output: OutputFormat,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
	/// List saved selections, newest first.
	List,
	/// Print the text of a saved selection.
	Show {
		#[arg(value_name = "ID")]
		id: SelectionId,
	},
	/// Rename a saved selection.
	Rename {
		#[arg(value_name = "ID")]
		id: SelectionId,
		#[arg(value_name = "NAME")]
		name: String,
	},
	/// Delete a saved selection.
	Delete {
		#[arg(value_name = "ID")]
		id: SelectionId,
	},
	/// Print every case-insensitive match of QUERY in FILE.
	Find {
		#[arg(value_name = "FILE")]
		file: PathBuf,
		#[arg(value_name = "QUERY")]
		query: String,
	},
}
