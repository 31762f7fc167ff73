use std::ops::Range;

use anyhow::Result;
use serde_json::json;
use textpin::store::SavedSelection;
use textpin::ui::Outcome;

use super::OutputFormat;

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &Outcome) -> Result<String> {
	let pins = &outcome.session.pins;
	let payload = json!({
		"accepted": outcome.accepted,
		"selection": {
			"start": outcome.selection.start,
			"end": outcome.selection.end,
			"text": outcome.selected_text,
		},
		"pins": {
			"start": pins.start,
			"end": pins.end,
		},
		"query": outcome.session.query,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the accepted selection, or a cancellation note.
pub(crate) fn print_outcome(format: OutputFormat, outcome: &Outcome) -> Result<()> {
	match format {
		OutputFormat::Json => println!("{}", format_outcome_json(outcome)?),
		OutputFormat::Plain if !outcome.accepted => println!("Selection cancelled"),
		OutputFormat::Plain if outcome.selected_text.is_empty() => println!("No selection"),
		OutputFormat::Plain => println!("{}", outcome.selected_text),
	}
	Ok(())
}

pub(crate) fn format_records_plain(records: &[SavedSelection]) -> String {
	records
		.iter()
		.map(|record| {
			format!(
				"{}\t{}\t{}",
				record.id,
				record.created_at.format("%Y-%m-%d %H:%M:%S"),
				record.name
			)
		})
		.collect::<Vec<_>>()
		.join("\n")
}

pub(crate) fn print_records(format: OutputFormat, records: &[SavedSelection]) -> Result<()> {
	match format {
		OutputFormat::Json => println!("{}", serde_json::to_string_pretty(records)?),
		OutputFormat::Plain if records.is_empty() => println!("No saved selections"),
		OutputFormat::Plain => println!("{}", format_records_plain(records)),
	}
	Ok(())
}

pub(crate) fn print_record(format: OutputFormat, record: &SavedSelection) -> Result<()> {
	match format {
		OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
		OutputFormat::Plain => println!("{}", record.text),
	}
	Ok(())
}

/// One search hit with its 1-based line and column.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct MatchLocation<'a> {
	pub(crate) range: Range<usize>,
	pub(crate) line: usize,
	pub(crate) column: usize,
	pub(crate) line_text: &'a str,
}

pub(crate) fn locate_matches<'a>(text: &'a str, matches: &[Range<usize>]) -> Vec<MatchLocation<'a>> {
	matches
		.iter()
		.map(|range| {
			let line_start = text[..range.start].rfind('\n').map_or(0, |index| index + 1);
			let line_end = text[range.start..]
				.find('\n')
				.map_or(text.len(), |index| range.start + index);
			MatchLocation {
				range: range.clone(),
				line: text[..range.start].matches('\n').count() + 1,
				column: text[line_start..range.start].chars().count() + 1,
				line_text: &text[line_start..line_end],
			}
		})
		.collect()
}

pub(crate) fn print_matches(format: OutputFormat, text: &str, matches: &[Range<usize>]) -> Result<()> {
	let located = locate_matches(text, matches);
	match format {
		OutputFormat::Json => {
			let payload: Vec<_> = located
				.iter()
				.map(|hit| {
					json!({
						"start": hit.range.start,
						"end": hit.range.end,
						"line": hit.line,
						"column": hit.column,
						"text": &text[hit.range.clone()],
					})
				})
				.collect();
			println!("{}", serde_json::to_string_pretty(&payload)?);
		}
		OutputFormat::Plain => {
			for hit in &located {
				println!("{}:{}: {}", hit.line, hit.column, hit.line_text);
			}
		}
	}
	Ok(())
}
