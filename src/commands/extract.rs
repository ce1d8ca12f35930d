//! Implementation of the `specdocs extract` command.
//!
//! Prints what the extractor pulls out of one spec file, marking each field
//! that fell back to its default. Useful for checking why a generated plan
//! is missing an entity or a title.

use crate::cli::ExtractArgs;
use crate::error::{DocgenError, Result};
use crate::feature::{FeatureRecord, Field};

/// Execute the `specdocs extract` command.
pub fn cmd_extract(args: ExtractArgs) -> Result<()> {
    if !args.path.is_file() {
        return Err(DocgenError::UserError(format!(
            "spec file not found: '{}'",
            args.path.display()
        )));
    }

    let record = FeatureRecord::load(&args.path)?;

    if args.json {
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| DocgenError::IoError(format!("failed to serialize record: {}", e)))?;
        println!("{}", json);
    } else {
        print!("{}", format_record(&record));
    }

    Ok(())
}

/// Human-readable rendering of a record.
fn format_record(record: &FeatureRecord) -> String {
    let mut out = String::new();

    out.push_str(&scalar_line("Name", &record.name));
    out.push_str(&scalar_line("Number", &record.number));
    out.push_str(&scalar_line("Status", &record.status));

    out.push_str(&list_heading("User stories", &record.user_stories));
    for story in record.user_stories() {
        out.push_str(&format!("  - [{}] {}\n", story.priority, story.title));
    }

    out.push_str(&list_heading("Entities", &record.entities));
    for entity in record.entities() {
        out.push_str(&format!("  - {}\n", entity));
    }

    out.push_str(&list_heading("Requirements", &record.requirements));
    for requirement in record.requirements() {
        out.push_str(&format!("  - {}\n", requirement));
    }

    out
}

fn scalar_line(label: &str, field: &Field<String>) -> String {
    format!("{:<13} {}{}\n", format!("{}:", label), field.value(), marker(field.is_found()))
}

fn list_heading<T>(label: &str, field: &Field<Vec<T>>) -> String {
    format!("{} ({}){}\n", label, field.value().len(), marker(field.is_found()))
}

fn marker(found: bool) -> &'static str {
    if found { "" } else { "  (default)" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::BUDGET_ALERTS_SPEC;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_format_found_record() {
        let record = FeatureRecord::extract(BUDGET_ALERTS_SPEC);
        let text = format_record(&record);

        assert!(text.starts_with("Name:         Ad Budget Alerts\n"));
        assert!(text.contains("Number:       042\n"));
        assert!(text.contains("User stories (1)\n  - [P1] Get notified before overspend\n"));
        assert!(text.contains("Entities (1)\n  - Alert\n"));
        assert!(!text.contains("(default)"));
    }

    #[test]
    fn test_format_marks_defaults() {
        let text = format_record(&FeatureRecord::extract(""));

        assert!(text.contains("Status:       Pending  (default)\n"));
        assert!(text.contains("Entities (0)  (default)\n"));
        assert_eq!(text.matches("(default)").count(), 6);
    }

    #[test]
    fn test_extract_missing_file_is_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let args = ExtractArgs {
            path: temp_dir.path().join("spec.md"),
            json: false,
        };
        let err = cmd_extract(args).unwrap_err();
        assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
        assert!(err.to_string().contains("spec file not found"));
    }

    #[test]
    fn test_extract_json_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let path: PathBuf = temp_dir.path().join("spec.md");
        std::fs::write(&path, BUDGET_ALERTS_SPEC).unwrap();

        let args = ExtractArgs { path, json: true };
        assert!(cmd_extract(args).is_ok());
    }
}
