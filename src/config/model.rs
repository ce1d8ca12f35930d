//! Config struct definition and default implementation.

use super::types::*;
use serde::Deserialize;

/// Configuration for a specdocs run.
///
/// This struct represents the contents of `.specify/docgen.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding one sub-directory per feature, relative to the project root.
    #[serde(default = "default_specs_dir")]
    pub specs_dir: String,

    /// Name of the input document inside each feature directory.
    #[serde(default = "default_input_file")]
    pub input_file: String,

    /// Name of the generated implementation plan.
    #[serde(default = "default_plan_file")]
    pub plan_file: String,

    /// Name of the generated task breakdown.
    #[serde(default = "default_tasks_file")]
    pub tasks_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            specs_dir: default_specs_dir(),
            input_file: default_input_file(),
            plan_file: default_plan_file(),
            tasks_file: default_tasks_file(),
        }
    }
}
