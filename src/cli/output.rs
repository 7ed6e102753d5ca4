use anyhow::Result;
use pokesearch::{Entity, SessionOutcome};
use serde_json::json;

/// Plain-text rendering of the session outcome.
pub(crate) fn format_outcome_plain(outcome: &SessionOutcome) -> String {
	match &outcome.selection {
		Some(entity) => format_entity_line(entity),
		None => "No selection".to_string(),
	}
}

/// JSON rendering of the session outcome.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	let payload = json!({
		"filter": outcome.filter,
		"selection": outcome.selection,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Plain-text rendering of a list of rows, one per line.
pub(crate) fn format_rows_plain<'a>(rows: impl IntoIterator<Item = &'a Entity>) -> String {
	rows.into_iter()
		.map(format_entity_line)
		.collect::<Vec<_>>()
		.join("\n")
}

/// JSON rendering of a list of rows.
pub(crate) fn format_rows_json<'a>(rows: impl IntoIterator<Item = &'a Entity>) -> Result<String> {
	let rows: Vec<&Entity> = rows.into_iter().collect();
	Ok(serde_json::to_string_pretty(&rows)?)
}

fn format_entity_line(entity: &Entity) -> String {
	format!(
		"{}\t{}\t{}",
		entity.id,
		entity.display_name(),
		entity.joined_types()
	)
}
