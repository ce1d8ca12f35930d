//! Implementation of the `specdocs status` command.
//!
//! Lists every feature directory with the documents it has and what the
//! next `generate` run would do with it. Nothing is rendered or written.

use crate::context::{ProjectContext, require_specs};
use crate::discovery::{DirState, discover_features};
use crate::error::Result;
use std::path::Path;

/// One line of the status table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    pub feature: String,
    pub state: DirState,
}

impl StatusRow {
    /// What `generate` would do with this directory.
    pub fn action(&self) -> &'static str {
        match self.state {
            DirState::MissingInput => "skip (no input)",
            DirState::Complete => "skip (complete)",
            DirState::Pending {
                plan: true,
                tasks: true,
            } => "generate plan + tasks",
            DirState::Pending { plan: true, .. } => "generate plan",
            DirState::Pending { .. } => "generate tasks",
        }
    }

    fn marks(&self) -> (&'static str, &'static str, &'static str) {
        match self.state {
            DirState::MissingInput => ("-", "?", "?"),
            DirState::Complete => ("x", "x", "x"),
            DirState::Pending { plan, tasks } => ("x", mark(!plan), mark(!tasks)),
        }
    }
}

fn mark(present: bool) -> &'static str {
    if present { "x" } else { "-" }
}

/// Build the status table for every feature directory, in name order.
pub fn collect_rows(ctx: &ProjectContext) -> Result<Vec<StatusRow>> {
    let rows = discover_features(&ctx.specs_dir, &ctx.config)?
        .into_iter()
        .map(|dir| StatusRow {
            state: dir.state(),
            feature: dir.slug,
        })
        .collect();
    Ok(rows)
}

/// Width of the feature column in characters, so padding lines up for any slug.
fn feature_column_width(rows: &[StatusRow]) -> usize {
    rows.iter()
        .map(|r| r.feature.chars().count())
        .max()
        .unwrap_or(0)
        .max("Feature".len())
}

/// Execute the `specdocs status` command.
pub fn cmd_status(root: Option<&Path>) -> Result<()> {
    let ctx = require_specs(root)?;
    let rows = collect_rows(&ctx)?;

    println!("Feature Status");
    println!("==============");
    println!();
    println!("Project root:    {}", ctx.project_root.display());
    println!("Specs directory: {}", ctx.specs_dir.display());
    println!();

    if rows.is_empty() {
        println!("No feature directories found.");
        return Ok(());
    }

    let width = feature_column_width(&rows);

    println!(
        "  {:width$}  {:5}  {:4}  {:5}  Next",
        "Feature", "Input", "Plan", "Tasks"
    );
    for row in &rows {
        let (input, plan, tasks) = row.marks();
        println!(
            "  {:width$}  {:^5}  {:^4}  {:^5}  {}",
            row.feature,
            input,
            plan,
            tasks,
            row.action()
        );
    }

    let pending = rows
        .iter()
        .filter(|r| matches!(r.state, DirState::Pending { .. }))
        .count();
    println!();
    println!(
        "{} feature(s), {} with documents to generate.",
        rows.len(),
        pending
    );

    Ok(())
}
