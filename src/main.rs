mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{CliArgs, parse_cli, print_outcome};
use textpin::logging::{self, LogConfig};
use tracing::warn;
use workflow::{SelectionWorkflow, StartingPoint, run_command};

fn main() -> Result<()> {
	let cli = parse_cli();

	let log_guard = match logging::init(LogConfig {
		log_file_path: cli.log_file.clone(),
	}) {
		Ok(guard) => Some(guard),
		Err(err) => {
			eprintln!("textpin: logging disabled: {err}");
			None
		}
	};

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
		match &log_guard {
			Some(guard) => println!("  Log file: {}", guard.log_file.display()),
			None => println!("  Log file: (disabled)"),
		}
	}

	if let Some(command) = cli.command.clone() {
		return run_command(command, &resolved, cli.output);
	}

	run_selector(&cli, resolved)
}

/// Run the interactive selector and print the outcome in the chosen format.
fn run_selector(cli: &CliArgs, settings: settings::ResolvedConfig) -> Result<()> {
	let start = StartingPoint::from_cli(cli)?;
	let outcome = SelectionWorkflow::from_config(settings)
		.run(start)
		.inspect_err(|err| warn!(error = %err, "selector exited with an error"))?;
	print_outcome(cli.output, &outcome)
}
