//! Feature record model for specdocs.
//!
//! A `FeatureRecord` is the handful of facts pulled out of one
//! `specs/<feature>/spec.md`: title, branch number, status, user stories,
//! key entities and functional requirements. It is built by
//! [`FeatureRecord::extract`], consumed by the renderers and then dropped.
//!
//! # Leniency
//!
//! Extraction never fails on content. Every field is wrapped in a [`Field`]
//! that says whether the value was found in the document or whether the
//! default was applied:
//!
//! ```text
//! name          ""         when no `# Feature Specification:` line exists
//! number        ""         when no `**Feature Branch**: `[NNN-` label exists
//! status        "Pending"  when no `**Status**:` line exists
//! user_stories  []         when no `### User Story N - … (Priority: Pn)` heading exists
//! entities      []         when no `### Key Entities` bullet run exists
//! requirements  []         when no `- **FR-NNN**:` bullet exists
//! ```

use serde::Serialize;
use std::fmt;

mod extract;
mod io;

/// Status applied when the document carries no `**Status**:` line.
pub const DEFAULT_STATUS: &str = "Pending";

/// Outcome of extracting one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum Field<T> {
    /// The value was matched in the document.
    Found(T),
    /// Nothing matched; the default was applied.
    Defaulted(T),
}

impl<T> Field<T> {
    /// The usable value, whether found or defaulted.
    pub fn value(&self) -> &T {
        match self {
            Field::Found(v) | Field::Defaulted(v) => v,
        }
    }

    /// Whether the value came from the document.
    pub fn is_found(&self) -> bool {
        matches!(self, Field::Found(_))
    }
}

impl<T: Default> Field<T> {
    /// `Found` for `Some`, `Defaulted(T::default())` for `None`.
    pub fn or_default(value: Option<T>) -> Self {
        match value {
            Some(v) => Field::Found(v),
            None => Field::Defaulted(T::default()),
        }
    }
}

impl<T> Field<Vec<T>> {
    /// `Found` for a non-empty list, `Defaulted` for an empty one.
    pub fn from_matches(items: Vec<T>) -> Self {
        if items.is_empty() {
            Field::Defaulted(items)
        } else {
            Field::Found(items)
        }
    }
}

/// User story priority tag, `P0` through `P9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u8);

impl Priority {
    /// Parse a `P<digit>` tag.
    pub fn parse(tag: &str) -> Option<Self> {
        let digit = tag.strip_prefix('P')?;
        if digit.len() != 1 {
            return None;
        }
        digit.parse().ok().map(Priority)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

impl Serialize for Priority {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A `### User Story N - Title (Priority: Pn)` heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStory {
    pub title: String,
    pub priority: Priority,
}

/// Facts extracted from one feature specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRecord {
    /// Free-text feature title.
    pub name: Field<String>,
    /// Digits of the feature branch prefix (`042` for `[042-budget-alerts]`).
    pub number: Field<String>,
    /// Lifecycle label, trimmed.
    pub status: Field<String>,
    /// User stories in document order, not deduplicated.
    pub user_stories: Field<Vec<UserStory>>,
    /// Key entity names in document order, not deduplicated.
    pub entities: Field<Vec<String>>,
    /// Functional requirement descriptions in document order.
    pub requirements: Field<Vec<String>>,
}

impl FeatureRecord {
    pub fn name(&self) -> &str {
        self.name.value()
    }

    pub fn number(&self) -> &str {
        self.number.value()
    }

    pub fn status(&self) -> &str {
        self.status.value()
    }

    pub fn user_stories(&self) -> &[UserStory] {
        self.user_stories.value()
    }

    pub fn entities(&self) -> &[String] {
        self.entities.value()
    }

    pub fn requirements(&self) -> &[String] {
        self.requirements.value()
    }

    /// Names of the fields that fell back to their defaults.
    pub fn defaulted_fields(&self) -> Vec<&'static str> {
        let flags = [
            ("name", self.name.is_found()),
            ("number", self.number.is_found()),
            ("status", self.status.is_found()),
            ("user_stories", self.user_stories.is_found()),
            ("entities", self.entities.is_found()),
            ("requirements", self.requirements.is_found()),
        ];
        flags
            .into_iter()
            .filter(|(_, found)| !found)
            .map(|(name, _)| name)
            .collect()
    }
}
