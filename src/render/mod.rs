//! Document rendering for specdocs.
//!
//! Each output document is a fixed sequence of named section functions.
//! Most sections are static prose; the data-driven parts (title, slug,
//! status, date and the per-entity blocks) go through [`template`].
//!
//! - [`plan::render_plan`] produces `plan.md`
//! - [`tasks::render_tasks`] produces `tasks.md`

pub mod plan;
pub mod stack;
pub mod tasks;
pub mod template;


use crate::error::{DocgenError, Result};
use template::{Vars, render_template};

pub use plan::render_plan;
pub use tasks::render_tasks;

/// Per-document values that do not come from the spec itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMeta {
    /// Feature directory name, used as the display slug.
    pub slug: String,
    /// Creation date, `YYYY-MM-DD`.
    pub date: String,
    /// Specs directory relative to the project root, for path hints.
    pub specs_dir: String,
}

impl DocumentMeta {
    pub fn new(slug: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            date: date.into(),
            specs_dir: "specs".to_string(),
        }
    }

    /// Metadata stamped with today's local date.
    pub fn today(slug: impl Into<String>) -> Self {
        Self::new(slug, chrono::Local::now().format("%Y-%m-%d").to_string())
    }

    pub fn with_specs_dir(mut self, specs_dir: impl Into<String>) -> Self {
        self.specs_dir = specs_dir.into();
        self
    }
}

/// Render one section template, mapping engine errors into the crate error.
pub(crate) fn fill(section: &str, template: &str, vars: &Vars) -> Result<String> {
    render_template(template, vars)
        .map_err(|e| DocgenError::RenderError(format!("{} section: {}", section, e)))
}

/// Lower-cased entity name used for file and table names.
pub(crate) fn entity_file_stem(entity: &str) -> String {
    entity.to_lowercase()
}
