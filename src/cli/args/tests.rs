use clap::{CommandFactory, FromArgMatches};

use super::options::NavigationArg;
use super::{CliArgs, OutputFormat};

fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
	let mut matches = CliArgs::command().try_get_matches_from(args)?;
	CliArgs::from_arg_matches_mut(&mut matches)
}

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = parse(&["datalab-search"]).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.config.is_empty());
	assert!(!parsed.demo);
	assert_eq!(parsed.once, None);
}

#[test]
fn search_options_are_parsed() {
	let parsed = parse(&[
		"datalab-search",
		"-e",
		"http://lab.local/api/search",
		"--debounce-ms",
		"150",
		"--navigation",
		"browser",
		"--base-url",
		"http://lab.local",
		"--once",
		"par",
		"-o",
		"json",
	])
	.expect("parses");

	assert_eq!(parsed.endpoint.as_deref(), Some("http://lab.local/api/search"));
	assert_eq!(parsed.debounce_ms, Some(150));
	assert_eq!(parsed.navigation, Some(NavigationArg::Browser));
	assert_eq!(parsed.once.as_deref(), Some("par"));
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn fixtures_and_demo_are_exclusive() {
	assert!(parse(&["datalab-search", "--demo", "-f", "pedidos.json"]).is_err());
}
