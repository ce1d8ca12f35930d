//! Data types for the generate command.

use serde::Serialize;

/// Options for one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Render documents but write nothing.
    pub dry_run: bool,
    /// Suppress progress lines (the caller prints a JSON report instead).
    pub quiet: bool,
}

/// Which documents a run created for one directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generated {
    pub plan: bool,
    pub tasks: bool,
}

/// Final state of one feature directory after a run.
///
/// `Discovered → {MissingInput | Complete | Processing → {Completed | Errored}}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirOutcome {
    /// Skipped: no input document.
    MissingInput,
    /// Skipped: both outputs already existed.
    Complete,
    /// Processed; the missing outputs were generated.
    Completed(Generated),
    /// Processing failed part-way. `generated` lists what was written first.
    Errored { generated: Generated, message: String },
}

/// A feature directory that errored, for the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub feature: String,
    pub message: String,
}

/// Running tally for a generation run.
///
/// Threaded by value through the directory loop; each directory's outcome
/// is folded in with [`GenerationStats::record`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    /// Feature directories discovered.
    pub total: usize,
    pub plan_generated: usize,
    pub tasks_generated: usize,
    pub skipped_missing_input: usize,
    pub skipped_complete: usize,
    pub failures: Vec<Failure>,
}

impl GenerationStats {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    /// Fold one directory's outcome into the tally.
    pub fn record(mut self, feature: &str, outcome: DirOutcome) -> Self {
        match outcome {
            DirOutcome::MissingInput => self.skipped_missing_input += 1,
            DirOutcome::Complete => self.skipped_complete += 1,
            DirOutcome::Completed(generated) => self.count_generated(generated),
            DirOutcome::Errored { generated, message } => {
                self.count_generated(generated);
                self.failures.push(Failure {
                    feature: feature.to_string(),
                    message,
                });
            }
        }
        self
    }

    fn count_generated(&mut self, generated: Generated) {
        self.plan_generated += usize::from(generated.plan);
        self.tasks_generated += usize::from(generated.tasks);
    }

    /// Directories skipped for either reason.
    pub fn skipped(&self) -> usize {
        self.skipped_missing_input + self.skipped_complete
    }

    pub fn errors(&self) -> usize {
        self.failures.len()
    }

    /// Documents generated across both kinds.
    pub fn generated(&self) -> usize {
        self.plan_generated + self.tasks_generated
    }
}
