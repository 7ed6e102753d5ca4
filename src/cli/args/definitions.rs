use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{LogLevelArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `pokesearch` binary.
#[derive(Parser, Debug)]
#[command(
	name = "pokesearch",
	version,
	long_version = long_version(),
	about = "Browse a creature dataset: filter by name, inspect base stats",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "POKESEARCH_CONFIG",
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
		short = 's',
		long,
		value_name = "URL|PATH",
		help = "Dataset location, an http(s) URL or a JSON file (default: http://localhost:3001/starting-react/pokemon.json)"
	)]
	pub(crate) source: Option<String>,
	#[arg(
		long = "timeout",
		value_name = "SECS",
		help = "Seconds allowed for the dataset request (default: 10)"
	)]
	pub(crate) timeout_secs: Option<u64>,
	#[arg(
		long,
		value_name = "NUM",
		help = "Maximum number of rows shown (default: 20)"
	)]
	pub(crate) limit: Option<usize>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Initial filter text (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Heading shown above the filter (default: Pokemon Search)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "filter-label",
		value_name = "TEXT",
		help = "Prompt shown in front of the filter input (default: Filter)"
	)]
	pub(crate) filter_label: Option<String>,
	#[arg(
		long = "detail-title",
		value_name = "TEXT",
		help = "Title of the detail panel (default: Details)"
	)]
	pub(crate) detail_title: Option<String>,
	#[arg(
		long,
		help = "Print the rows matching the initial filter and exit (default: disabled)"
	)]
	pub(crate) headless: bool,
	#[arg(
		long = "log-level",
		value_enum,
		help = "Log verbosity (default: RUST_LOG, then warn)"
	)]
	pub(crate) log_level: Option<LogLevelArg>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Log file used while the interface runs (default: <data dir>/pokesearch.log)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
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
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
