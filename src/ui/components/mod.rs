//! Widgets composing the search screen.

pub mod detail;
pub mod input;
pub mod prompt;
pub mod rows;
pub mod tables;

pub use detail::{DetailContext, DetailView, render_detail};
pub use input::QueryInput;
pub use prompt::{InputContext, ProgressState, render_input, render_title};
pub use rows::{RowView, build_rows};
pub use tables::{TableSpec, render_table};
