//! Feature directory discovery for specdocs.
//!
//! This module provides:
//! - Enumeration of feature directories under the specs directory, sorted by name
//! - Per-directory state: which documents exist and which still need generating

use crate::config::Config;
use crate::error::{DocgenError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// One feature directory and the paths of its documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureDir {
    /// Directory name (e.g., "042-budget-alerts").
    pub slug: String,

    /// Path to the input spec document.
    pub input_path: PathBuf,

    /// Path to the generated implementation plan.
    pub plan_path: PathBuf,

    /// Path to the generated task breakdown.
    pub tasks_path: PathBuf,
}

/// What a feature directory needs, judged from which files exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirState {
    /// No input document; the directory cannot be processed.
    MissingInput,
    /// Both outputs already exist.
    Complete,
    /// At least one output is missing. The flags say which.
    Pending { plan: bool, tasks: bool },
}

impl FeatureDir {
    /// Build the document paths for a feature directory.
    pub fn new(path: &Path, config: &Config) -> Self {
        let slug = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            slug,
            input_path: path.join(&config.input_file),
            plan_path: path.join(&config.plan_file),
            tasks_path: path.join(&config.tasks_file),
        }
    }

    /// Inspect the filesystem for this directory's state.
    pub fn state(&self) -> DirState {
        if !self.input_path.is_file() {
            return DirState::MissingInput;
        }

        let plan = !self.plan_path.exists();
        let tasks = !self.tasks_path.exists();

        if plan || tasks {
            DirState::Pending { plan, tasks }
        } else {
            DirState::Complete
        }
    }
}

/// List the feature directories under `specs_dir`, sorted by name.
///
/// Only immediate sub-directories count; plain files are ignored.
pub fn discover_features(specs_dir: &Path, config: &Config) -> Result<Vec<FeatureDir>> {
    let entries = fs::read_dir(specs_dir).map_err(|e| {
        DocgenError::UserError(format!(
            "failed to read specs directory '{}': {}",
            specs_dir.display(),
            e
        ))
    })?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            DocgenError::UserError(format!("failed to read directory entry: {}", e))
        })?;

        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        dirs.push(FeatureDir::new(&path, config));
    }

    dirs.sort_by(|a, b| a.slug.cmp(&b.slug));
    tracing::debug!(count = dirs.len(), dir = %specs_dir.display(), "discovered feature directories");
    Ok(dirs)
}
