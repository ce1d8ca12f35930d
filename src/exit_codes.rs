//! Exit code constants for the specdocs CLI.
//!
//! - 0: Success (every feature directory generated or skipped cleanly)
//! - 1: Generation failure (at least one feature directory errored)
//! - 2: User error (bad arguments, no project root, invalid config)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// At least one feature directory failed to generate.
pub const GENERATION_FAILURE: i32 = 1;

/// User error: bad arguments, missing project layout, or invalid config.
///
/// Matches the code clap uses for usage errors.
pub const USER_ERROR: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, GENERATION_FAILURE, USER_ERROR];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn generation_failure_is_one() {
        // Batch runs with errored directories must exit with status 1.
        assert_eq!(SUCCESS, 0);
        assert_eq!(GENERATION_FAILURE, 1);
    }
}
