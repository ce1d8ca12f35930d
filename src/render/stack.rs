//! Technology stack embedded in generated plans.
//!
//! These are fixed constants; they are never read from config.

/// One `- Label: value` line of a stack list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackEntry {
    pub label: &'static str,
    pub value: &'static str,
}

const fn entry(label: &'static str, value: &'static str) -> StackEntry {
    StackEntry { label, value }
}

/// One-line summary for the plan header.
pub const STACK_SUMMARY: &str =
    "NestJS, TypeScript, PostgreSQL, TypeORM, React, Vite, Tailwind CSS";

pub const BACKEND_STACK: &[StackEntry] = &[
    entry("Framework", "NestJS 10.3.0+ (TypeScript)"),
    entry("Database", "PostgreSQL 14+ with TypeORM 0.3.19+"),
    entry("Authentication", "JWT + Passport.js"),
    entry("Testing", "Jest 30.2.0+"),
];

pub const FRONTEND_STACK: &[StackEntry] = &[
    entry("Framework", "React 18.2.0+ with TypeScript 5.3.3+"),
    entry("Build", "Vite 5.0.11+"),
    entry("UI", "shadcn/ui + Tailwind CSS 3.4.1+"),
    entry("State", "Zustand 4.4.7+"),
    entry("Testing", "Vitest 4.0.7+ + React Testing Library"),
];

/// Render a stack as Markdown bullets, one per line.
pub fn stack_list(entries: &[StackEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("- {}: {}\n", e.label, e.value))
        .collect()
}
