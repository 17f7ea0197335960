use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{NavigationArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `datalab-search` binary.
#[derive(Parser, Debug)]
#[command(
	name = "datalab-search",
	version,
	long_version = long_version(),
	about = "Debounced search over DataLab pedidos, clientes and órdenes",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "DATALAB_SEARCH_CONFIG",
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
		short = 'e',
		long,
		value_name = "URL",
		help = "Search endpoint to query (default: http://127.0.0.1:5000/api/search)"
	)]
	pub(crate) endpoint: Option<String>,
	#[arg(
		short = 'f',
		long,
		value_name = "FILE",
		conflicts_with = "demo",
		help = "Answer queries from a JSON file instead of the endpoint (default: none)"
	)]
	pub(crate) fixtures: Option<PathBuf>,
	#[arg(
		long,
		help = "Answer queries from the built-in sample data (default: disabled)"
	)]
	pub(crate) demo: bool,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Quiet period before a query is sent (default: 300)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "timeout-ms",
		value_name = "MS",
		help = "Request timeout (default: 5000)"
	)]
	pub(crate) timeout_ms: Option<u64>,
	#[arg(
		long = "max-results",
		value_name = "NUM",
		help = "Maximum rows returned by local fixtures (default: 10)"
	)]
	pub(crate) max_results: Option<usize>,
	#[arg(
		long,
		value_enum,
		help = "What choosing a result does (default: print)"
	)]
	pub(crate) navigation: Option<NavigationArg>,
	#[arg(
		long = "base-url",
		value_name = "URL",
		help = "Base url joined with result urls (default: none)"
	)]
	pub(crate) base_url: Option<String>,
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
		help = "Set the application title (default: DataLab)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "once",
		value_name = "QUERY",
		help = "Run a single query, print the rows and exit (default: interactive)"
	)]
	pub(crate) once: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Log filter directives (default: DATALAB_SEARCH_LOG or info)"
	)]
	pub(crate) log_level: Option<String>,
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
