/// Text rendered around the filter input, result table and detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Heading shown on the first line.
	pub title: String,
	/// Prompt displayed in front of the filter input.
	pub filter_label: String,
	/// Title of the detail panel.
	pub detail_panel_title: String,
	/// Result table column headers.
	pub headers: [String; 2],
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Pokemon Search".to_string(),
			filter_label: "Filter".to_string(),
			detail_panel_title: "Details".to_string(),
			headers: ["Name".to_string(), "Type".to_string()],
		}
	}
}
