//! Placeholder substitution for document templates.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of variable `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! Templates are compile-time constants, so an undefined variable is a bug
//! in a section function. The engine reports it instead of substituting an
//! empty string.

use std::collections::HashMap;
use std::fmt;

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    UndefinedVariable {
        /// The name of the undefined variable.
        name: String,
        /// Byte offset of the opening `{`.
        position: usize,
    },
    /// A `{` was found without a matching `}`.
    UnmatchedBrace { position: usize },
    /// An empty variable name was found (e.g., `{}`).
    EmptyVariableName { position: usize },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedVariable { name, position } => {
                write!(
                    f,
                    "undefined variable '{}' at position {} in template",
                    name, position
                )
            }
            TemplateError::UnmatchedBrace { position } => {
                write!(f, "unmatched '{{' at position {} in template", position)
            }
            TemplateError::EmptyVariableName { position } => {
                write!(
                    f,
                    "empty variable name '{{}}' at position {} in template",
                    position
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Variables available to one template.
#[derive(Debug, Clone, Default)]
pub struct Vars(HashMap<&'static str, String>);

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing any previous value.
    pub fn set(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.0.insert(name, value.into());
        self
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

/// Render a template string by substituting variables.
///
/// Variable names are trimmed, so `{ name }` and `{name}` are equivalent.
/// Values are inserted verbatim; braces inside values are not re-scanned.
pub fn render_template(template: &str, vars: &Vars) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut offset = 0;

    while let Some(idx) = rest.find(['{', '}']) {
        out.push_str(&rest[..idx]);
        let tail = &rest[idx..];
        let position = offset + idx;

        if let Some(after) = tail.strip_prefix("{{") {
            out.push('{');
            offset = position + 2;
            rest = after;
        } else if let Some(after) = tail.strip_prefix("}}") {
            out.push('}');
            offset = position + 2;
            rest = after;
        } else if tail.starts_with('}') {
            // Lone } is just a regular character
            out.push('}');
            offset = position + 1;
            rest = &tail[1..];
        } else {
            let close = tail
                .find('}')
                .ok_or(TemplateError::UnmatchedBrace { position })?;
            let name = tail[1..close].trim();
            if name.is_empty() {
                return Err(TemplateError::EmptyVariableName { position });
            }
            let value = vars
                .get(name)
                .ok_or_else(|| TemplateError::UndefinedVariable {
                    name: name.to_string(),
                    position,
                })?;
            out.push_str(value);
            offset = position + close + 1;
            rest = &tail[close + 1..];
        }
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_substitution() {
        let vars = Vars::new().set("name", "Ad Budget Alerts").set("status", "Draft");
        let result = render_template("# {name} ({status})", &vars).unwrap();
        assert_eq!(result, "# Ad Budget Alerts (Draft)");
    }

    #[test]
    fn test_no_variables() {
        let result = render_template("## Overview\n", &Vars::new()).unwrap();
        assert_eq!(result, "## Overview\n");
    }

    #[test]
    fn test_escaped_braces_render_code() {
        let vars = Vars::new().set("entity", "Alert");
        let result = render_template("export class {entity} {{\n}}", &vars).unwrap();
        assert_eq!(result, "export class Alert {\n}");
    }

    #[test]
    fn test_lone_closing_brace() {
        let result = render_template("a } b", &Vars::new()).unwrap();
        assert_eq!(result, "a } b");
    }

    #[test]
    fn test_undefined_variable_error() {
        let err = render_template("Hello {slug}", &Vars::new()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::UndefinedVariable {
                name: "slug".to_string(),
                position: 6
            }
        );
    }

    #[test]
    fn test_unmatched_brace_error() {
        let err = render_template("ok {{ then {name", &Vars::new()).unwrap_err();
        assert_eq!(err, TemplateError::UnmatchedBrace { position: 11 });
    }

    #[test]
    fn test_empty_variable_name_error() {
        let err = render_template("Hello { }", &Vars::new()).unwrap_err();
        assert_eq!(err, TemplateError::EmptyVariableName { position: 6 });
    }

    #[test]
    fn test_whitespace_in_variable_name() {
        let vars = Vars::new().set("name", "Alice");
        let result = render_template("Hello { name }!", &vars).unwrap();
        assert_eq!(result, "Hello Alice!");
    }

    #[test]
    fn test_braces_in_value_are_not_rescanned() {
        let vars = Vars::new().set("name", "{slug}");
        let result = render_template("# {name}", &vars).unwrap();
        assert_eq!(result, "# {slug}");
    }

    #[test]
    fn test_unicode_positions() {
        let vars = Vars::new().set("x", "✓");
        let result = render_template("├── {x} └──", &vars).unwrap();
        assert_eq!(result, "├── ✓ └──");

        let err = render_template("✅ {missing}", &Vars::new()).unwrap_err();
        // Positions are byte offsets; the check mark is three bytes.
        assert_eq!(
            err,
            TemplateError::UndefinedVariable {
                name: "missing".to_string(),
                position: 4
            }
        );
    }

    #[test]
    fn test_error_display() {
        let err = TemplateError::UnmatchedBrace { position: 5 };
        assert_eq!(err.to_string(), "unmatched '{' at position 5 in template");

        let err = TemplateError::EmptyVariableName { position: 3 };
        assert_eq!(
            err.to_string(),
            "empty variable name '{}' at position 3 in template"
        );
    }
}
