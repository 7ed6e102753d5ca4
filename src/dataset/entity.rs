use serde::{Deserialize, Serialize};

/// Display labels for a creature. Only the English label is required.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Name {
	pub english: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub japanese: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub chinese: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub french: Option<String>,
}

impl Name {
	/// Build a name carrying only the English label.
	#[must_use]
	pub fn english(label: impl Into<String>) -> Self {
		Self {
			english: label.into(),
			..Self::default()
		}
	}

	/// Localized labels other than English, in a stable order.
	pub fn localized(&self) -> impl Iterator<Item = &str> {
		[&self.japanese, &self.chinese, &self.french]
			.into_iter()
			.filter_map(|label| label.as_deref())
	}
}

/// Base statistics. The JSON keys match the upstream dataset; absent keys
/// read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseStats {
	#[serde(rename = "HP")]
	pub hp: u32,
	#[serde(rename = "Attack")]
	pub attack: u32,
	#[serde(rename = "Defence")]
	pub defence: u32,
	#[serde(rename = "Sp. Attack")]
	pub special_attack: u32,
	#[serde(rename = "Sp. Defence")]
	pub special_defence: u32,
	#[serde(rename = "Speed")]
	pub speed: u32,
}

impl BaseStats {
	/// Statistic labels in display order.
	pub const LABELS: [&'static str; 6] = [
		"HP",
		"Attack",
		"Defence",
		"Sp. Attack",
		"Sp. Defence",
		"Speed",
	];

	/// Label/value pairs in display order.
	#[must_use]
	pub fn pairs(&self) -> [(&'static str, u32); 6] {
		let [hp, attack, defence, special_attack, special_defence, speed] = Self::LABELS;
		[
			(hp, self.hp),
			(attack, self.attack),
			(defence, self.defence),
			(special_attack, self.special_attack),
			(special_defence, self.special_defence),
			(speed, self.speed),
		]
	}
}

/// One creature record from the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
	pub id: u32,
	pub name: Name,
	#[serde(rename = "type")]
	pub types: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub base: Option<BaseStats>,
}

impl Entity {
	#[must_use]
	pub fn new<I, S>(id: u32, name: impl Into<String>, types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			id,
			name: Name::english(name),
			types: types.into_iter().map(Into::into).collect(),
			base: None,
		}
	}

	#[must_use]
	pub fn with_base(mut self, base: BaseStats) -> Self {
		self.base = Some(base);
		self
	}

	/// The label used for display and filtering.
	#[must_use]
	pub fn display_name(&self) -> &str {
		&self.name.english
	}

	/// Category tags joined the way the result table shows them.
	#[must_use]
	pub fn joined_types(&self) -> String {
		self.types.join(", ")
	}
}
