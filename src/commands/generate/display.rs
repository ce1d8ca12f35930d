//! Progress and summary output for the generate command.

use super::types::GenerationStats;
use crate::error::{DocgenError, Result};
use std::path::Path;

const RULE_WIDTH: usize = 60;

/// Per-directory progress lines, suppressed in quiet mode.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    enabled: bool,
}

impl Progress {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn start(&self, specs_dir: &Path, dry_run: bool) {
        if !self.enabled {
            return;
        }
        if dry_run {
            println!("🚀 Starting documentation generation (dry run, nothing will be written)...");
        } else {
            println!("🚀 Starting automated documentation generation...");
        }
        println!("📁 Scanning specs directory: {}", specs_dir.display());
    }

    pub fn missing_input(&self, feature: &str, input_file: &str) {
        if self.enabled {
            println!("⚠️  {}: No {} found, skipping", feature, input_file);
        }
    }

    pub fn complete(&self, feature: &str) {
        if self.enabled {
            println!("✅ {}: Already has complete documentation", feature);
        }
    }

    pub fn processing(&self, feature: &str) {
        if self.enabled {
            println!();
            println!("📝 Processing {}...", feature);
        }
    }

    pub fn generating(&self, file: &str) {
        if self.enabled {
            println!("   ├─ Generating {}...", file);
        }
    }

    /// `last` marks the final step for the directory (drawn with `└─`).
    pub fn created(&self, file: &str, last: bool, dry_run: bool) {
        if self.enabled {
            let verb = if dry_run { "would be created" } else { "created" };
            println!("   {} ✓ {} {}", branch(last), file, verb);
        }
    }

    pub fn exists(&self, file: &str, last: bool) {
        if self.enabled {
            println!("   {} {} already exists", branch(last), file);
        }
    }

    pub fn error(&self, err: &DocgenError) {
        if self.enabled {
            println!("   └─ ❌ Error: {}", err);
        }
    }
}

fn branch(last: bool) -> &'static str {
    if last { "└─" } else { "├─" }
}

/// Print the human-readable summary block.
pub fn print_summary(stats: &GenerationStats, plan_file: &str, tasks_file: &str) {
    let rule = "=".repeat(RULE_WIDTH);

    println!();
    println!("{}", rule);
    println!("📊 Generation Summary");
    println!("{}", rule);
    println!("Total features: {}", stats.total);
    println!("{} files generated: {}", capitalize(plan_file), stats.plan_generated);
    println!("{} files generated: {}", capitalize(tasks_file), stats.tasks_generated);
    println!(
        "Skipped: {} ({} already complete, {} without input)",
        stats.skipped(),
        stats.skipped_complete,
        stats.skipped_missing_input
    );
    println!("Errors: {}", stats.errors());
    for failure in &stats.failures {
        println!("  - {}: {}", failure.feature, failure.message);
    }
    println!("{}", rule);

    if stats.errors() == 0 {
        println!();
        println!("✅ All documentation generated successfully!");
    } else {
        println!();
        println!("⚠️  Completed with {} errors", stats.errors());
    }
}

/// Print the tally as a single JSON object.
pub fn print_json(stats: &GenerationStats, dry_run: bool) -> Result<()> {
    let report = serde_json::json!({
        "dry_run": dry_run,
        "total": stats.total,
        "plan_generated": stats.plan_generated,
        "tasks_generated": stats.tasks_generated,
        "skipped": stats.skipped(),
        "skipped_missing_input": stats.skipped_missing_input,
        "skipped_complete": stats.skipped_complete,
        "errors": stats.errors(),
        "failures": stats.failures,
    });
    let text = serde_json::to_string_pretty(&report)
        .map_err(|e| DocgenError::IoError(format!("failed to serialize report: {}", e)))?;
    println!("{}", text);
    Ok(())
}

/// `plan.md` → `Plan.md`, matching the summary's sentence case.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_file_names() {
        assert_eq!(capitalize("plan.md"), "Plan.md");
        assert_eq!(capitalize("tasks.md"), "Tasks.md");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn branch_glyphs() {
        assert_eq!(branch(false), "├─");
        assert_eq!(branch(true), "└─");
    }
}
