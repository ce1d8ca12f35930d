//! Configuration constants and defaults for specdocs.

/// Location of the optional config file, relative to the project root.
pub const CONFIG_RELATIVE_PATH: &str = ".specify/docgen.yaml";

pub(crate) fn default_specs_dir() -> String {
    "specs".to_string()
}
pub(crate) fn default_input_file() -> String {
    "spec.md".to_string()
}
pub(crate) fn default_plan_file() -> String {
    "plan.md".to_string()
}
pub(crate) fn default_tasks_file() -> String {
    "tasks.md".to_string()
}
