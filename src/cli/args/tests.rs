use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use textpin::store::SelectionId;

use super::{CliArgs, Command, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = CliArgs::parse_from(["textpin"]);
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.command.is_none());
	assert!(parsed.file.is_none());
}

#[test]
fn file_and_interaction_flags_parse() {
	let parsed = CliArgs::parse_from([
		"textpin",
		"notes.txt",
		"--multi-tap-ms",
		"350",
		"--ephemeral",
		"-q",
		"fox",
	]);
	assert_eq!(parsed.file, Some(PathBuf::from("notes.txt")));
	assert_eq!(parsed.multi_tap_ms, Some(350));
	assert_eq!(parsed.ephemeral, Some(true));
	assert_eq!(parsed.initial_query.as_deref(), Some("fox"));
}

#[test]
fn subcommands_parse_ids() {
	let parsed = CliArgs::parse_from(["textpin", "rename", "42", "new name"]);
	assert_eq!(
		parsed.command,
		Some(Command::Rename {
			id: SelectionId::from_raw(42),
			name: "new name".into(),
		})
	);

	let parsed = CliArgs::parse_from(["textpin", "list", "-o", "json"]);
	assert_eq!(parsed.command, Some(Command::List));
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn restore_conflicts_with_file() {
	assert!(CliArgs::try_parse_from(["textpin", "--restore", "file.txt"]).is_err());
	assert!(CliArgs::try_parse_from(["textpin", "show", "abc"]).is_err());
}

#[test]
fn bare_ephemeral_flag_enables_it() {
	let parsed = CliArgs::parse_from(["textpin", "--ephemeral", "notes.txt"]);
	assert_eq!(parsed.ephemeral, Some(true));
	assert_eq!(parsed.file, Some(PathBuf::from("notes.txt")));

	let parsed = CliArgs::parse_from(["textpin", "--ephemeral=false"]);
	assert_eq!(parsed.ephemeral, Some(false));
	assert_eq!(CliArgs::parse_from(["textpin"]).ephemeral, None);
}
