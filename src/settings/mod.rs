//! Configuration loading and resolution.
//!
//! `load` is the entry point. It merges config files, environment variables
//! and CLI flags into a [`ResolvedConfig`] used by the binary.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
