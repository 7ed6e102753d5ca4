use pokesearch::UiLabels;
use serde::Deserialize;

use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) filter_label: Option<String>,
	pub(super) detail_panel_title: Option<String>,
	pub(super) headers: Option<Vec<String>>,
}

pub(super) struct UiResolution {
	pub(super) labels: UiLabels,
	pub(super) initial_query: String,
	pub(super) theme: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(label) = cli.filter_label.clone() {
			self.filter_label = Some(label);
		}
		if let Some(label) = cli.detail_title.clone() {
			self.detail_panel_title = Some(label);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		let mut labels = UiLabels::default();
		if let Some(title) = self.title {
			labels.title = title;
		}
		if let Some(label) = self.filter_label {
			labels.filter_label = label;
		}
		if let Some(label) = self.detail_panel_title {
			labels.detail_panel_title = label;
		}
		if let Some(headers) = self.headers {
			apply_headers(&mut labels.headers, headers);
		}

		let theme = self
			.theme
			.map(|value| value.trim().to_string())
			.filter(|value| !value.is_empty());

		UiResolution {
			labels,
			initial_query: self.initial_query.unwrap_or_default(),
			theme,
		}
	}
}

/// Overwrite the leading headers with any non-blank values supplied.
fn apply_headers(target: &mut [String; 2], headers: Vec<String>) {
	for (slot, header) in target.iter_mut().zip(headers) {
		let trimmed = header.trim();
		if !trimmed.is_empty() {
			*slot = trimmed.to_string();
		}
	}
}
