//! Filter and selection state plus the derived list of visible rows.

use crate::dataset::{Dataset, Entity};

/// Maximum number of rows the result table shows.
pub const VIEW_LIMIT: usize = 20;

/// User-editable view state: the filter text and the selected entity.
///
/// The selection is an index into the session's [`Dataset`]. The dataset is
/// written once, so the index stays valid for the rest of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
	filter: String,
	selection: Option<usize>,
}

impl ViewState {
	#[must_use]
	pub fn new(filter: impl Into<String>) -> Self {
		Self {
			filter: filter.into(),
			selection: None,
		}
	}

	#[must_use]
	pub fn filter(&self) -> &str {
		&self.filter
	}

	/// Replace the filter text. Any string is accepted.
	pub fn set_filter(&mut self, text: impl Into<String>) {
		self.filter = text.into();
	}

	#[must_use]
	pub fn selection(&self) -> Option<usize> {
		self.selection
	}

	/// Replace the selection with the entity at `index`.
	pub fn select(&mut self, index: usize) {
		self.selection = Some(index);
	}

	/// Resolve the selection against the dataset.
	#[must_use]
	pub fn selected<'d>(&self, dataset: &'d Dataset) -> Option<&'d Entity> {
		self.selection.and_then(|index| dataset.get(index))
	}

	/// Visible rows for the current filter.
	#[must_use]
	pub fn visible(&self, dataset: &Dataset, limit: usize) -> Vec<usize> {
		derived_view(dataset.entities(), &self.filter, limit)
	}
}

/// Indices of entities whose lowercased display name contains the lowercased
/// filter, in dataset order, capped at `limit`.
#[must_use]
pub fn derived_view(entities: &[Entity], filter: &str, limit: usize) -> Vec<usize> {
	let needle = filter.to_lowercase();
	entities
		.iter()
		.enumerate()
		.filter(|(_, entity)| matches_filter(entity, &needle))
		.map(|(index, _)| index)
		.take(limit)
		.collect()
}

/// `needle` must already be lowercased.
fn matches_filter(entity: &Entity, needle: &str) -> bool {
	needle.is_empty() || entity.display_name().to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn names(entities: &[Entity], view: &[usize]) -> Vec<String> {
		view.iter()
			.map(|&index| entities[index].display_name().to_string())
			.collect()
	}

	fn starters() -> Vec<Entity> {
		vec![
			Entity::new(1, "Bulbasaur", ["Grass", "Poison"]),
			Entity::new(2, "Charmander", ["Fire"]),
		]
	}

	fn numbered(count: u32) -> Vec<Entity> {
		(1..=count)
			.map(|id| Entity::new(id, format!("Creature {id:02}"), ["Normal"]))
			.collect()
	}

	#[test]
	fn filter_is_case_insensitive_substring() {
		let entities = starters();
		let view = derived_view(&entities, "char", VIEW_LIMIT);
		assert_eq!(names(&entities, &view), vec!["Charmander"]);

		let view = derived_view(&entities, "SAUR", VIEW_LIMIT);
		assert_eq!(names(&entities, &view), vec!["Bulbasaur"]);
	}

	#[test]
	fn empty_filter_yields_first_twenty_in_order() {
		let entities = numbered(25);
		let view = derived_view(&entities, "", VIEW_LIMIT);
		assert_eq!(view, (0..20).collect::<Vec<_>>());
	}

	#[test]
	fn truncation_applies_after_filtering() {
		let mut entities = numbered(30);
		entities.push(Entity::new(100, "Mew", ["Psychic"]));
		let view = derived_view(&entities, "mew", VIEW_LIMIT);
		assert_eq!(view, vec![30]);

		let view = derived_view(&entities, "creature 2", VIEW_LIMIT);
		assert_eq!(
			names(&entities, &view),
			(20..=29).map(|id| format!("Creature {id:02}")).collect::<Vec<_>>()
		);
	}

	#[test]
	fn no_match_yields_empty_view() {
		assert!(derived_view(&starters(), "pikachu", VIEW_LIMIT).is_empty());
		assert!(derived_view(&[], "", VIEW_LIMIT).is_empty());
	}

	#[test]
	fn folds_non_ascii_case() {
		let entities = vec![
			Entity::new(1, "Flabébé", ["Fairy"]),
			Entity::new(2, "ÉCLAIR", ["Electric"]),
		];
		let view = derived_view(&entities, "ÉBÉ", VIEW_LIMIT);
		assert_eq!(view, vec![0]);
		let view = derived_view(&entities, "éclair", VIEW_LIMIT);
		assert_eq!(view, vec![1]);
	}

	#[test]
	fn every_visible_entity_matches_and_order_is_preserved() {
		let entities = numbered(60);
		for filter in ["", "1", "creature 0", "E", "zzz"] {
			let view = derived_view(&entities, filter, VIEW_LIMIT);
			assert!(view.len() <= VIEW_LIMIT);
			assert!(view.windows(2).all(|pair| pair[0] < pair[1]));
			let needle = filter.to_lowercase();
			for &index in &view {
				assert!(entities[index].display_name().to_lowercase().contains(&needle));
			}
		}
	}

	#[test]
	fn set_filter_is_idempotent() {
		let dataset = Dataset::new(numbered(25)).expect("dataset");
		let mut once = ViewState::default();
		once.set_filter("1");
		let mut twice = ViewState::default();
		twice.set_filter("1");
		twice.set_filter("1");
		assert_eq!(once, twice);
		assert_eq!(
			once.visible(&dataset, VIEW_LIMIT),
			twice.visible(&dataset, VIEW_LIMIT)
		);
	}

	#[test]
	fn selecting_replaces_previous_selection() {
		let dataset = Dataset::new(starters()).expect("dataset");
		let mut state = ViewState::default();
		assert!(state.selected(&dataset).is_none());

		state.select(0);
		assert_eq!(state.selected(&dataset).map(|e| e.id), Some(1));

		state.select(1);
		assert_eq!(state.selection(), Some(1));
		assert_eq!(state.selected(&dataset).map(|e| e.id), Some(2));
	}

	#[test]
	fn selection_survives_filter_changes() {
		let dataset = Dataset::new(starters()).expect("dataset");
		let mut state = ViewState::new("char");
		state.select(1);
		state.set_filter("bulb");
		assert_eq!(state.visible(&dataset, VIEW_LIMIT), vec![0]);
		assert_eq!(
			state.selected(&dataset).map(Entity::display_name),
			Some("Charmander")
		);
	}
}
