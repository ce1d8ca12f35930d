//! Pattern-based extraction of feature records.
//!
//! Each field is searched for independently, so the order of sections in the
//! document does not matter.

use super::{DEFAULT_STATUS, FeatureRecord, Field, Priority, UserStory};
use regex::Regex;
use std::sync::LazyLock;

static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"# Feature Specification: (.+)").expect("Invalid title regex"));

static BRANCH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*Feature Branch\*\*: `\[(\d+)-").expect("Invalid branch regex")
});

static STATUS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*Status\*\*: (.+)").expect("Invalid status regex"));

static USER_STORY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"### User Story \d+ - (.+?) \(Priority: (P\d)\)").expect("Invalid user story regex")
});

static ENTITY_HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"### Key Entities[^\n]*").expect("Invalid entity heading regex"));

static ENTITY_BULLET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^- \*\*(\w+)\*\*:").expect("Invalid entity bullet regex"));

static REQUIREMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"- \*\*FR-\d+\*\*: (.+)").expect("Invalid requirement regex"));

impl FeatureRecord {
    /// Extract a record from the full text of a spec document.
    ///
    /// Never fails: a field with no match gets its default. CRLF line
    /// endings are normalized first so blank-line detection works.
    pub fn extract(content: &str) -> Self {
        let normalized;
        let content = if content.contains("\r\n") {
            normalized = content.replace("\r\n", "\n");
            normalized.as_str()
        } else {
            content
        };

        Self {
            name: Field::or_default(extract_title(content)),
            number: Field::or_default(extract_number(content)),
            status: match extract_status(content) {
                Some(status) => Field::Found(status),
                None => Field::Defaulted(DEFAULT_STATUS.to_string()),
            },
            user_stories: Field::from_matches(extract_user_stories(content)),
            entities: Field::from_matches(extract_entities(content)),
            requirements: Field::from_matches(extract_requirements(content)),
        }
    }
}

fn first_capture(regex: &Regex, content: &str) -> Option<String> {
    regex
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn extract_title(content: &str) -> Option<String> {
    first_capture(&TITLE_REGEX, content).map(|title| title.trim_end().to_string())
}

fn extract_number(content: &str) -> Option<String> {
    first_capture(&BRANCH_REGEX, content)
}

fn extract_status(content: &str) -> Option<String> {
    first_capture(&STATUS_REGEX, content).map(|status| status.trim().to_string())
}

fn extract_user_stories(content: &str) -> Vec<UserStory> {
    USER_STORY_REGEX
        .captures_iter(content)
        .filter_map(|caps| {
            let priority = Priority::parse(&caps[2])?;
            Some(UserStory {
                title: caps[1].to_string(),
                priority,
            })
        })
        .collect()
}

fn extract_entities(content: &str) -> Vec<String> {
    let Some(heading) = ENTITY_HEADING_REGEX.find(content) else {
        return Vec::new();
    };

    let bullets = entity_bullets(&content[heading.end()..]);
    if bullets.is_empty() {
        tracing::debug!("'Key Entities' heading found but no entity bullets follow it");
    }

    bullets
        .into_iter()
        .filter_map(|line| ENTITY_BULLET_REGEX.captures(line))
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Bullet lines of the first block that follows a blank line after the
/// heading. The block ends at the next blank line or heading. Lines that are
/// not bullets (wrapped text) are skipped.
fn entity_bullets(after_heading: &str) -> Vec<&str> {
    let mut seen_blank = false;
    let mut bullets = Vec::new();

    // The first line is the remainder of the heading line itself.
    for line in after_heading.lines().skip(1) {
        if line.starts_with('#') {
            break;
        }
        if line.trim().is_empty() {
            if !bullets.is_empty() {
                break;
            }
            seen_blank = true;
        } else if seen_blank && line.starts_with("- ") {
            bullets.push(line);
        }
    }

    bullets
}

fn extract_requirements(content: &str) -> Vec<String> {
    REQUIREMENT_REGEX
        .captures_iter(content)
        .map(|caps| caps[1].trim_end().to_string())
        .collect()
}
