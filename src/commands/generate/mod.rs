//! Implementation of the `specdocs generate` command (the default).
//!
//! For every feature directory under the specs directory, in name order:
//!
//! - no input document: skipped, nothing written
//! - both outputs present: skipped, nothing written
//! - otherwise: the spec is extracted once and each missing output is
//!   rendered and created
//!
//! A failure in one directory is reported and counted, and the run moves on
//! to the next directory. Existing files are never overwritten, so running
//! the command again is a no-op.
//!
//! # Exit status
//!
//! `0` when no directory errored, `1` otherwise.

mod display;
mod types;

#[cfg(test)]
mod tests;

use crate::cli::GenerateArgs;
use crate::context::{ProjectContext, require_specs};
use crate::discovery::{DirState, FeatureDir, discover_features};
use crate::error::{DocgenError, Result};
use crate::feature::FeatureRecord;
use crate::fs::write_new_file;
use crate::render::{DocumentMeta, render_plan, render_tasks};
use std::path::Path;

pub use display::Progress;
pub use types::{DirOutcome, Failure, GenerateOptions, Generated, GenerationStats};

use display::{print_json, print_summary};

/// Execute the `specdocs generate` command.
pub fn cmd_generate(root: Option<&Path>, args: GenerateArgs) -> Result<()> {
    let ctx = require_specs(root)?;
    let options = GenerateOptions {
        dry_run: args.dry_run,
        quiet: args.json,
    };

    let stats = generate_all(&ctx, options)?;

    if args.json {
        print_json(&stats, options.dry_run)?;
    } else {
        print_summary(&stats, &ctx.config.plan_file, &ctx.config.tasks_file);
    }

    match stats.errors() {
        0 => Ok(()),
        n => Err(DocgenError::GenerationFailed(n)),
    }
}

/// Process every feature directory and return the final tally.
///
/// Only discovery can fail as a whole; per-directory failures are recorded
/// in the returned stats.
pub fn generate_all(ctx: &ProjectContext, options: GenerateOptions) -> Result<GenerationStats> {
    let dirs = discover_features(&ctx.specs_dir, &ctx.config)?;
    let progress = Progress::new(!options.quiet);
    progress.start(&ctx.specs_dir, options.dry_run);

    let stats = dirs
        .iter()
        .fold(GenerationStats::new(dirs.len()), |stats, dir| {
            let outcome = process_feature(ctx, dir, options, &progress);
            stats.record(&dir.slug, outcome)
        });

    tracing::info!(
        total = stats.total,
        generated = stats.generated(),
        skipped = stats.skipped(),
        errors = stats.errors(),
        "generation finished"
    );
    Ok(stats)
}

/// Drive one feature directory to its final outcome.
pub fn process_feature(
    ctx: &ProjectContext,
    dir: &FeatureDir,
    options: GenerateOptions,
    progress: &Progress,
) -> DirOutcome {
    match dir.state() {
        DirState::MissingInput => {
            progress.missing_input(&dir.slug, &ctx.config.input_file);
            DirOutcome::MissingInput
        }
        DirState::Complete => {
            progress.complete(&dir.slug);
            DirOutcome::Complete
        }
        DirState::Pending { plan, tasks } => {
            progress.processing(&dir.slug);
            let mut generated = Generated::default();
            let needed = Generated { plan, tasks };

            match generate_missing(ctx, dir, needed, options, progress, &mut generated) {
                Ok(()) => DirOutcome::Completed(generated),
                Err(err) => {
                    progress.error(&err);
                    // Reported on stdout and listed in the summary.
                    tracing::debug!(feature = %dir.slug, error = %err, "feature generation failed");
                    DirOutcome::Errored {
                        generated,
                        message: err.to_string(),
                    }
                }
            }
        }
    }
}

/// Extract once, then render and create each missing document.
///
/// `generated` is updated as each file lands so a later failure still
/// reports what was written.
fn generate_missing(
    ctx: &ProjectContext,
    dir: &FeatureDir,
    needed: Generated,
    options: GenerateOptions,
    progress: &Progress,
    generated: &mut Generated,
) -> Result<()> {
    let record = FeatureRecord::load(&dir.input_path)?;
    let meta = DocumentMeta::today(dir.slug.as_str()).with_specs_dir(ctx.config.specs_dir.as_str());
    let plan_file = ctx.config.plan_file.as_str();
    let tasks_file = ctx.config.tasks_file.as_str();

    if needed.plan {
        progress.generating(plan_file);
        let content = render_plan(&record, &meta)?;
        emit(&dir.plan_path, &content, options)?;
        generated.plan = true;
        progress.created(plan_file, false, options.dry_run);
    } else {
        progress.exists(plan_file, false);
    }

    if needed.tasks {
        progress.generating(tasks_file);
        let content = render_tasks(&record, &meta)?;
        emit(&dir.tasks_path, &content, options)?;
        generated.tasks = true;
        progress.created(tasks_file, true, options.dry_run);
    } else {
        progress.exists(tasks_file, true);
    }

    Ok(())
}

fn emit(path: &Path, content: &str, options: GenerateOptions) -> Result<()> {
    if options.dry_run {
        tracing::debug!(path = %path.display(), bytes = content.len(), "dry run, not writing");
        return Ok(());
    }
    write_new_file(path, content)?;
    tracing::info!(path = %path.display(), "created document");
    Ok(())
}
