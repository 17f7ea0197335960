mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{
	CliArgs, OutputFormat, parse_cli, print_json, print_plain, print_results_json,
	print_results_plain,
};
use datalab_search::logging;
use settings::ResolvedConfig;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in datalab_search::theme_names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;
	let _log_guard = logging::initialize(cli.log_level.as_deref())?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_search(&cli, resolved)
}

/// Execute the search workflow and print output in the chosen format.
fn run_search(cli: &CliArgs, settings: ResolvedConfig) -> Result<()> {
	let workflow = SearchWorkflow::from_config(settings)?;

	if let Some(query) = cli.once.as_deref() {
		let rows = workflow.run_once(query)?;
		match cli.output {
			OutputFormat::Plain => print_results_plain(&rows),
			OutputFormat::Json => print_results_json(query.trim(), &rows)?,
		}
		return Ok(());
	}

	if let Some(outcome) = workflow.run()? {
		match cli.output {
			OutputFormat::Plain => print_plain(&outcome),
			OutputFormat::Json => print_json(&outcome)?,
		}
	}

	Ok(())
}
