//! Project context resolution for specdocs.
//!
//! This module finds the project root from any working directory and
//! resolves the specs directory and config path beneath it. All commands go
//! through this module so they always target the same tree regardless of
//! where they are invoked from.

use crate::config::{CONFIG_RELATIVE_PATH, Config};
use crate::error::{DocgenError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Directory that marks a project root even before any spec exists.
pub const SPECIFY_DIR: &str = ".specify";

/// Default specs directory name, used as the second root marker.
pub const DEFAULT_SPECS_DIR: &str = "specs";

/// Resolved paths and settings for a specdocs run.
///
/// All paths are absolute.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Absolute path to the project root.
    pub project_root: PathBuf,

    /// Absolute path to the directory holding one sub-directory per feature.
    pub specs_dir: PathBuf,

    /// Absolute path to the (optional) config file.
    pub config_path: PathBuf,

    /// Loaded configuration (defaults when no config file exists).
    pub config: Config,
}

impl ProjectContext {
    /// Resolve the context, honoring an explicit root when one is given.
    ///
    /// Without an explicit root, the project root is discovered from the
    /// current working directory.
    pub fn resolve(explicit_root: Option<&Path>) -> Result<Self> {
        match explicit_root {
            Some(root) => Self::from_root(root),
            None => {
                let cwd = env::current_dir().map_err(|e| {
                    DocgenError::UserError(format!(
                        "failed to get current working directory: {}",
                        e
                    ))
                })?;
                Self::resolve_from(&cwd)
            }
        }
    }

    /// Resolve the context by searching `cwd` and its ancestors for a project root.
    ///
    /// The first directory containing `.specify/` or `specs/` wins.
    ///
    /// # Returns
    ///
    /// * `Ok(ProjectContext)` - Successfully resolved context
    /// * `Err(DocgenError::UserError)` - No ancestor looks like a project root
    pub fn resolve_from<P: AsRef<Path>>(cwd: P) -> Result<Self> {
        let cwd = cwd.as_ref();

        let root = cwd
            .ancestors()
            .find(|dir| dir.join(SPECIFY_DIR).is_dir() || dir.join(DEFAULT_SPECS_DIR).is_dir())
            .ok_or_else(|| {
                DocgenError::UserError(format!(
                    "no project root found from '{}'.\n\
                     Run from a directory containing '{}/' or '{}/', or pass --root.",
                    cwd.display(),
                    DEFAULT_SPECS_DIR,
                    SPECIFY_DIR
                ))
            })?;

        Self::from_root(root)
    }

    /// Build the context for a known project root.
    ///
    /// Loads `.specify/docgen.yaml` when present.
    pub fn from_root<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(DocgenError::UserError(format!(
                "project root '{}' is not a directory",
                root.display()
            )));
        }

        let project_root = root.canonicalize().map_err(|e| {
            DocgenError::UserError(format!(
                "failed to resolve project root '{}': {}",
                root.display(),
                e
            ))
        })?;

        let config_path = project_root.join(CONFIG_RELATIVE_PATH);
        let config = Config::load_or_default(&config_path)?;
        let specs_dir = project_root.join(&config.specs_dir);

        Ok(Self {
            project_root,
            specs_dir,
            config_path,
            config,
        })
    }

    /// Ensure the specs directory exists.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The specs directory exists
    /// * `Err(DocgenError::UserError)` - It does not
    pub fn ensure_specs_dir(&self) -> Result<()> {
        if !self.specs_dir.is_dir() {
            return Err(DocgenError::UserError(format!(
                "specs directory not found at '{}'.\n\
                 Create it with one sub-directory per feature, each holding a {}.",
                self.specs_dir.display(),
                self.config.input_file
            )));
        }
        Ok(())
    }
}

/// Resolve the context and require the specs directory to exist.
///
/// Use this in commands that read the specs tree.
pub fn require_specs(explicit_root: Option<&Path>) -> Result<ProjectContext> {
    let ctx = ProjectContext::resolve(explicit_root)?;
    ctx.ensure_specs_dir()?;
    Ok(ctx)
}
