//! Configuration model for specdocs.
//!
//! This module defines the Config struct that represents `.specify/docgen.yaml`.
//! The file is optional: when it is absent every setting takes its default,
//! which reproduces the fixed `specs/<feature>/{spec,plan,tasks}.md` layout.
//! Unknown fields are ignored for forward compatibility.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use types::CONFIG_RELATIVE_PATH;
