mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{
	CliArgs, OutputFormat, format_outcome_json, format_outcome_plain, format_rows_json,
	format_rows_plain, parse_cli,
};
use pokesearch::logging::{self, LOG_FILE_NAME, LogSettings, LogTarget};
use pokesearch::{app_dirs, ui::style};
use settings::ResolvedConfig;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	logging::init(&log_settings(&cli, &resolved)?)?;

	if cli.headless {
		run_headless(cli.output, &resolved)
	} else {
		run_search(cli.output, resolved)
	}
}

/// Interactive sessions log to a file; headless runs may use stderr.
fn log_settings(cli: &CliArgs, config: &ResolvedConfig) -> Result<LogSettings> {
	let target = match &config.log_file {
		Some(path) => LogTarget::File(path.clone()),
		None if cli.headless => LogTarget::Stderr,
		None => LogTarget::File(app_dirs::get_data_dir()?.join(LOG_FILE_NAME)),
	};
	Ok(LogSettings {
		level: config.log_level,
		target,
	})
}

/// Execute the search workflow and print output in the chosen format.
fn run_search(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = SearchWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => println!("{}", format_outcome_plain(&outcome)),
		OutputFormat::Json => println!("{}", format_outcome_json(&outcome)?),
	}

	Ok(())
}

/// Print the rows matching the initial query without starting the interface.
fn run_headless(format: OutputFormat, settings: &ResolvedConfig) -> Result<()> {
	let rows = workflow::run_headless(settings)?;

	match format {
		OutputFormat::Plain => {
			if !rows.is_empty() {
				println!("{}", format_rows_plain(&rows));
			}
		}
		OutputFormat::Json => println!("{}", format_rows_json(&rows)?),
	}

	Ok(())
}
