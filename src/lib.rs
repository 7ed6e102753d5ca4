//! Core crate exports for the `pokesearch` terminal browser.
//!
//! The dataset is loaded once by [`loader`], filtered by [`view`], and shown by
//! the [`ui`] event loop. The root module re-exports the types embedders need
//! most often.

pub mod app_dirs;
pub mod dataset;
pub mod loader;
pub mod logging;
pub mod ui;
pub mod view;

pub use dataset::{BaseStats, Dataset, DatasetError, Entity, Name};
pub use loader::{DataSource, FetchOptions, LoadError};
pub use ui::{App, SearchUi, SessionOutcome, UiLabels};
pub use view::{VIEW_LIMIT, ViewState, derived_view};
