//! Tests for the generate command.

use super::*;
use crate::cli::GenerateArgs;
use crate::context::ProjectContext;
use crate::exit_codes;
use crate::test_support::{BUDGET_ALERTS_SPEC, add_feature, add_feature_dir, create_test_project};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const QUIET: GenerateOptions = GenerateOptions {
    dry_run: false,
    quiet: true,
};

fn context(project: &TempDir) -> ProjectContext {
    ProjectContext::from_root(project.path()).unwrap()
}

/// Snapshot of every file under `specs/`, sorted by path.
fn snapshot(project: &TempDir) -> Vec<(PathBuf, String)> {
    let mut files = Vec::new();
    let specs = project.path().join("specs");
    for dir in fs::read_dir(&specs).unwrap() {
        let dir = dir.unwrap().path();
        if !dir.is_dir() {
            continue;
        }
        for file in fs::read_dir(&dir).unwrap() {
            let path = file.unwrap().path();
            let content = fs::read(&path).unwrap();
            files.push((path, String::from_utf8_lossy(&content).into_owned()));
        }
    }
    files.sort();
    files
}

#[test]
fn test_generates_both_documents() {
    let project = create_test_project();
    let dir = add_feature(project.path(), "042-budget-alerts", BUDGET_ALERTS_SPEC);

    let stats = generate_all(&context(&project), QUIET).unwrap();

    assert_eq!(stats.total, 1);
    assert_eq!(stats.plan_generated, 1);
    assert_eq!(stats.tasks_generated, 1);
    assert_eq!(stats.skipped(), 0);
    assert_eq!(stats.errors(), 0);

    let plan = fs::read_to_string(dir.join("plan.md")).unwrap();
    let tasks = fs::read_to_string(dir.join("tasks.md")).unwrap();
    assert!(plan.starts_with("# Implementation Plan: Ad Budget Alerts\n"));
    assert!(plan.contains("**Feature**: 042-budget-alerts\n"));
    assert_eq!(plan.matches("```typescript").count(), 1);
    assert!(tasks.contains("- [ ] Create Alert TypeORM entity with all required columns\n"));
}

#[test]
fn test_second_run_is_noop() {
    let project = create_test_project();
    add_feature(project.path(), "001-login", "# Feature Specification: Login\n");
    add_feature(project.path(), "042-budget-alerts", BUDGET_ALERTS_SPEC);
    let ctx = context(&project);

    let first = generate_all(&ctx, QUIET).unwrap();
    assert_eq!(first.generated(), 4);
    let after_first = snapshot(&project);

    let second = generate_all(&ctx, QUIET).unwrap();
    assert_eq!(second.generated(), 0);
    assert_eq!(second.skipped_complete, 2);
    assert_eq!(second.skipped(), second.total);
    assert_eq!(second.errors(), 0);
    assert_eq!(snapshot(&project), after_first);
}

#[test]
fn test_missing_input_is_skipped_not_error() {
    let project = create_test_project();
    let empty = add_feature_dir(project.path(), "001-draft");
    add_feature(project.path(), "002-login", BUDGET_ALERTS_SPEC);

    let stats = generate_all(&context(&project), QUIET).unwrap();

    assert_eq!(stats.total, 2);
    assert_eq!(stats.skipped_missing_input, 1);
    assert_eq!(stats.skipped(), 1);
    assert_eq!(stats.errors(), 0);
    assert_eq!(fs::read_dir(&empty).unwrap().count(), 0);
}

#[test]
fn test_only_missing_output_is_generated() {
    let project = create_test_project();
    let dir = add_feature(project.path(), "042-budget-alerts", BUDGET_ALERTS_SPEC);
    fs::write(dir.join("plan.md"), "hand-written plan\n").unwrap();

    let stats = generate_all(&context(&project), QUIET).unwrap();

    assert_eq!(stats.plan_generated, 0);
    assert_eq!(stats.tasks_generated, 1);
    assert_eq!(
        fs::read_to_string(dir.join("plan.md")).unwrap(),
        "hand-written plan\n"
    );
    assert!(dir.join("tasks.md").exists());
}

#[test]
fn test_failure_is_isolated() {
    let project = create_test_project();
    let bad = add_feature_dir(project.path(), "001-broken");
    fs::write(bad.join("spec.md"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
    let good = add_feature(project.path(), "002-login", BUDGET_ALERTS_SPEC);

    let stats = generate_all(&context(&project), QUIET).unwrap();

    assert_eq!(stats.errors(), 1);
    assert_eq!(stats.failures[0].feature, "001-broken");
    assert!(stats.failures[0].message.contains("failed to read spec file"));
    assert!(!bad.join("plan.md").exists());
    assert!(!bad.join("tasks.md").exists());

    assert_eq!(stats.plan_generated, 1);
    assert_eq!(stats.tasks_generated, 1);
    assert!(good.join("plan.md").exists());
    assert!(good.join("tasks.md").exists());
}

#[test]
fn test_all_complete_tree() {
    let project = create_test_project();
    for slug in ["001-a", "002-b", "003-c"] {
        let dir = add_feature(project.path(), slug, BUDGET_ALERTS_SPEC);
        fs::write(dir.join("plan.md"), "plan").unwrap();
        fs::write(dir.join("tasks.md"), "tasks").unwrap();
    }

    let stats = generate_all(&context(&project), QUIET).unwrap();

    assert_eq!(stats.generated(), 0);
    assert_eq!(stats.skipped(), 3);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.errors(), 0);

    let args = GenerateArgs {
        dry_run: false,
        json: true,
    };
    assert!(cmd_generate(Some(project.path()), args).is_ok());
}

#[test]
fn test_cmd_generate_reports_failure_exit_code() {
    let project = create_test_project();
    let bad = add_feature_dir(project.path(), "001-broken");
    fs::write(bad.join("spec.md"), [0xff, 0xfe]).unwrap();

    let args = GenerateArgs {
        dry_run: false,
        json: true,
    };
    let err = cmd_generate(Some(project.path()), args).unwrap_err();
    assert!(matches!(err, DocgenError::GenerationFailed(1)));
    assert_eq!(err.exit_code(), exit_codes::GENERATION_FAILURE);
}

#[test]
fn test_dry_run_writes_nothing() {
    let project = create_test_project();
    let dir = add_feature(project.path(), "042-budget-alerts", BUDGET_ALERTS_SPEC);

    let options = GenerateOptions {
        dry_run: true,
        quiet: true,
    };
    let stats = generate_all(&context(&project), options).unwrap();

    assert_eq!(stats.plan_generated, 1);
    assert_eq!(stats.tasks_generated, 1);
    assert!(!dir.join("plan.md").exists());
    assert!(!dir.join("tasks.md").exists());
}

#[test]
fn test_empty_specs_dir() {
    let project = create_test_project();
    let stats = generate_all(&context(&project), QUIET).unwrap();
    assert_eq!(stats, GenerationStats::new(0));
}

#[test]
fn test_missing_specs_dir_is_user_error() {
    let project = TempDir::new().unwrap();
    fs::create_dir_all(project.path().join(".specify")).unwrap();

    let args = GenerateArgs {
        dry_run: false,
        json: true,
    };
    let err = cmd_generate(Some(project.path()), args).unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
}

#[test]
fn test_custom_file_names_from_config() {
    let project = create_test_project();
    fs::create_dir_all(project.path().join(".specify")).unwrap();
    fs::write(
        project.path().join(".specify/docgen.yaml"),
        "input_file: feature.md\nplan_file: PLAN.md\n",
    )
    .unwrap();
    let dir = add_feature_dir(project.path(), "001-login");
    fs::write(dir.join("feature.md"), BUDGET_ALERTS_SPEC).unwrap();

    let stats = generate_all(&context(&project), QUIET).unwrap();

    assert_eq!(stats.errors(), 0);
    assert!(dir.join("PLAN.md").exists());
    assert!(dir.join("tasks.md").exists());
    assert!(!dir.join("plan.md").exists());
}

#[test]
fn test_stats_record_outcomes() {
    let stats = GenerationStats::new(4)
        .record("a", DirOutcome::MissingInput)
        .record("b", DirOutcome::Complete)
        .record(
            "c",
            DirOutcome::Completed(Generated {
                plan: true,
                tasks: false,
            }),
        )
        .record(
            "d",
            DirOutcome::Errored {
                generated: Generated {
                    plan: true,
                    tasks: false,
                },
                message: "disk full".to_string(),
            },
        );

    assert_eq!(stats.skipped(), 2);
    assert_eq!(stats.plan_generated, 2);
    assert_eq!(stats.tasks_generated, 0);
    assert_eq!(
        stats.failures,
        vec![Failure {
            feature: "d".to_string(),
            message: "disk full".to_string(),
        }]
    );
}
