use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Spec document matching the budget-alerts walkthrough.
pub(crate) const BUDGET_ALERTS_SPEC: &str = "\
# Feature Specification: Ad Budget Alerts

**Feature Branch**: `[042-budget-alerts]`
**Created**: 2025-01-10
**Status**: Draft

## User Scenarios & Testing

### User Story 1 - Get notified before overspend (Priority: P1)

A media buyer wants an alert before a campaign exceeds its budget.

## Requirements

### Functional Requirements

- **FR-001**: system must notify on breach

### Key Entities

- **Alert**: triggers at threshold
";

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Create an empty project with a `specs/` directory.
pub(crate) fn create_test_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("specs")).unwrap();
    temp_dir
}

/// Create `specs/<slug>/` and return its path.
pub(crate) fn add_feature_dir(project: &Path, slug: &str) -> PathBuf {
    let dir = project.join("specs").join(slug);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Create `specs/<slug>/spec.md` with the given content and return the directory.
pub(crate) fn add_feature(project: &Path, slug: &str, spec: &str) -> PathBuf {
    let dir = add_feature_dir(project, slug);
    std::fs::write(dir.join("spec.md"), spec).unwrap();
    dir
}
