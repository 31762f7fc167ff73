mod args;
mod output;

pub(crate) use args::{CliArgs, Command, OutputFormat, parse_cli};
pub(crate) use output::{print_matches, print_outcome, print_record, print_records};
