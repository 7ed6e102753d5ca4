mod args;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli};
pub(crate) use output::{
	format_outcome_json, format_outcome_plain, format_rows_json, format_rows_plain,
};
