//! Interactive terminal UI.
//!
//! [`SearchUi`] is the entry point: it starts the dataset load and runs the
//! event loop. [`App`] holds the session state; the remaining submodules
//! implement input handling, rendering and the widgets used to draw it.

mod actions;
mod builder;
pub mod components;
mod config;
mod outcome;
mod render;
mod runtime;
mod state;
pub mod style;

pub use builder::SearchUi;
pub use config::UiLabels;
pub use outcome::SessionOutcome;
pub use state::App;
