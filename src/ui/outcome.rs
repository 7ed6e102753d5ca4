use serde::Serialize;

use crate::dataset::Entity;

/// What the session ended with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionOutcome {
	pub filter: String,
	pub selection: Option<Entity>,
}
