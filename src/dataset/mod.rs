//! Creature records and the write-once collection that holds them.
//!
//! [`Dataset`] is built once at the loader boundary. Construction enforces
//! that identifiers are unique so that the rest of the application can treat
//! an index into the dataset as a stable reference for the whole session.

mod entity;

use std::collections::HashMap;

use thiserror::Error;

pub use entity::{BaseStats, Entity, Name};

/// Invariant violations detected while building a [`Dataset`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
	#[error("duplicate entity id {id} at positions {first} and {second}")]
	DuplicateId { id: u32, first: usize, second: usize },
}

/// Ordered, immutable sequence of entities with unique identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
	entities: Vec<Entity>,
}

impl Dataset {
	/// Validate and wrap a sequence of entities.
	pub fn new(entities: Vec<Entity>) -> Result<Self, DatasetError> {
		let mut seen: HashMap<u32, usize> = HashMap::with_capacity(entities.len());
		for (position, entity) in entities.iter().enumerate() {
			if let Some(first) = seen.insert(entity.id, position) {
				return Err(DatasetError::DuplicateId {
					id: entity.id,
					first,
					second: position,
				});
			}
		}
		Ok(Self { entities })
	}

	/// An empty dataset, used until the loader delivers.
	#[must_use]
	pub fn empty() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entities.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entities.is_empty()
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&Entity> {
		self.entities.get(index)
	}

	#[must_use]
	pub fn entities(&self) -> &[Entity] {
		&self.entities
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejects_duplicate_ids() {
		let err = Dataset::new(vec![
			Entity::new(1, "Bulbasaur", ["Grass"]),
			Entity::new(2, "Ivysaur", ["Grass"]),
			Entity::new(1, "Venusaur", ["Grass"]),
		])
		.unwrap_err();
		assert_eq!(
			err,
			DatasetError::DuplicateId {
				id: 1,
				first: 0,
				second: 2
			}
		);
		assert_eq!(
			err.to_string(),
			"duplicate entity id 1 at positions 0 and 2"
		);
	}

	#[test]
	fn preserves_order() {
		let dataset = Dataset::new(vec![
			Entity::new(7, "Squirtle", ["Water"]),
			Entity::new(4, "Charmander", ["Fire"]),
		])
		.expect("valid dataset");
		assert_eq!(dataset.len(), 2);
		assert_eq!(dataset.get(0).map(Entity::display_name), Some("Squirtle"));
		assert_eq!(dataset.get(1).map(|entity| entity.id), Some(4));
		assert!(dataset.get(2).is_none());
	}
}
