//! Error types for the specdocs CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for specdocs operations.
///
/// Each variant maps to a specific exit code. Per-directory failures
/// (`IoError`, `RenderError`) are caught by the generate driver and only
/// surface as a process exit code through `GenerationFailed`.
#[derive(Error, Debug)]
pub enum DocgenError {
    /// User provided invalid arguments or the project layout is unusable.
    #[error("{0}")]
    UserError(String),

    /// Reading or writing a document failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// A document template could not be rendered.
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// The batch finished but some feature directories errored.
    #[error("{0} feature {noun} failed to generate", noun = directory_noun(.0))]
    GenerationFailed(usize),
}

fn directory_noun(count: &usize) -> &'static str {
    if *count == 1 { "directory" } else { "directories" }
}

impl DocgenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DocgenError::UserError(_) => exit_codes::USER_ERROR,
            DocgenError::IoError(_) => exit_codes::GENERATION_FAILURE,
            DocgenError::RenderError(_) => exit_codes::GENERATION_FAILURE,
            DocgenError::GenerationFailed(_) => exit_codes::GENERATION_FAILURE,
        }
    }
}

/// Result type alias for specdocs operations.
pub type Result<T> = std::result::Result<T, DocgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = DocgenError::UserError("no specs directory".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn directory_failures_exit_with_generation_failure() {
        let err = DocgenError::IoError("permission denied".to_string());
        assert_eq!(err.exit_code(), exit_codes::GENERATION_FAILURE);

        let err = DocgenError::RenderError("unmatched brace".to_string());
        assert_eq!(err.exit_code(), exit_codes::GENERATION_FAILURE);

        let err = DocgenError::GenerationFailed(3);
        assert_eq!(err.exit_code(), exit_codes::GENERATION_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = DocgenError::RenderError("undefined variable 'slug'".to_string());
        assert_eq!(err.to_string(), "Rendering failed: undefined variable 'slug'");

        assert_eq!(
            DocgenError::GenerationFailed(1).to_string(),
            "1 feature directory failed to generate"
        );
        assert_eq!(
            DocgenError::GenerationFailed(2).to_string(),
            "2 feature directories failed to generate"
        );
    }
}
