//! Loading feature records from disk.

use super::FeatureRecord;
use crate::error::{DocgenError, Result};
use std::path::Path;

impl FeatureRecord {
    /// Read a spec document and extract its record.
    ///
    /// Only the read can fail; extraction itself is lenient.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DocgenError::IoError(format!(
                "failed to read spec file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let record = Self::extract(&content);
        let defaulted = record.defaulted_fields();
        if !defaulted.is_empty() {
            tracing::debug!(
                path = %path.display(),
                fields = ?defaulted,
                "defaults applied to fields missing from spec"
            );
        }
        Ok(record)
    }
}
