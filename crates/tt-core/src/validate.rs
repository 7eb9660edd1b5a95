//! Consistency checks over the story tables.
//!
//! Dangling scene/target references are errors: the engine treats them as
//! fatal when it runs into them. Rules that can never fire are warnings.

use std::collections::HashSet;

use crate::story::Story;

/// A warning or error found during story validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Where the issue was found, e.g. `rules[3]`.
    pub location: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.location, self.message)
    }
}

/// Validate every table of a story.
///
/// Returns all issues found, errors and warnings interleaved in table order.
pub fn validate_story(story: &Story) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if story.scene(&story.meta.first_scene).is_none() {
        issues.push(ValidationIssue::error(
            "meta.first_scene",
            format!("unknown scene \"{}\"", story.meta.first_scene),
        ));
    }

    check_duplicates(
        "scenes",
        story.scenes().iter().map(|s| s.name.as_str()),
        &mut issues,
    );
    check_duplicates(
        "targets",
        story.targets().iter().map(|t| t.name.as_str()),
        &mut issues,
    );
    check_visibility(story, &mut issues);
    check_rules(story, &mut issues);

    issues
}

fn check_duplicates<'a>(
    table: &str,
    names: impl Iterator<Item = &'a str>,
    issues: &mut Vec<ValidationIssue>,
) {
    let mut seen = HashSet::new();
    for (i, name) in names.enumerate() {
        if !seen.insert(name) {
            issues.push(ValidationIssue::error(
                format!("{table}[{i}]"),
                format!("duplicate name \"{name}\""),
            ));
        }
    }
}

fn check_visibility(story: &Story, issues: &mut Vec<ValidationIssue>) {
    for (i, row) in story.scene_targets().iter().enumerate() {
        let location = format!("scene_targets[{i}]");
        if story.scene(&row.scene).is_none() {
            issues.push(ValidationIssue::error(
                &location,
                format!("unknown scene \"{}\"", row.scene),
            ));
        }
        if story.target(&row.target).is_none() {
            issues.push(ValidationIssue::error(
                &location,
                format!("unknown target \"{}\"", row.target),
            ));
        }
        if row.flags.is_empty() {
            issues.push(ValidationIssue::warning(
                &location,
                format!("target \"{}\" has no flags and is never visible", row.target),
            ));
        }
    }

    for (i, row) in story.scene_actions().iter().enumerate() {
        let location = format!("scene_actions[{i}]");
        if story.scene(&row.scene).is_none() {
            issues.push(ValidationIssue::error(
                &location,
                format!("unknown scene \"{}\"", row.scene),
            ));
        }
        if row.flags.is_empty() {
            issues.push(ValidationIssue::warning(
                &location,
                format!("action \"{}\" has no flags and is never available", row.action),
            ));
        }
    }
}

fn check_rules(story: &Story, issues: &mut Vec<ValidationIssue>) {
    let rules = story.rules();
    for (i, rule) in rules.iter().enumerate() {
        let location = format!("rules[{i}]");

        if story.scene(&rule.scene).is_none() {
            issues.push(ValidationIssue::error(
                &location,
                format!("unknown scene \"{}\"", rule.scene),
            ));
        }
        if let Some(next) = &rule.new_scene
            && story.scene(next).is_none()
        {
            issues.push(ValidationIssue::error(
                &location,
                format!("unknown new scene \"{next}\""),
            ));
        }

        if rule.required_flags.is_empty() {
            issues.push(ValidationIssue::warning(
                &location,
                "rule has no required flags and never matches",
            ));
            continue;
        }

        let action_visible = story
            .scene_actions()
            .iter()
            .any(|row| row.scene == rule.scene && row.action == rule.action);
        if !action_visible {
            issues.push(ValidationIssue::warning(
                &location,
                format!(
                    "action \"{}\" is never available in scene \"{}\"",
                    rule.action, rule.scene
                ),
            ));
        }

        // An earlier rule for the same command whose requirements are a
        // subset of this one's always matches first.
        let shadowed_by = rules[..i].iter().position(|earlier| {
            earlier.scene == rule.scene
                && earlier.action == rule.action
                && earlier.target == rule.target
                && !earlier.required_flags.is_empty()
                && earlier
                    .required_flags
                    .iter()
                    .all(|f| rule.required_flags.contains(f))
        });
        if let Some(j) = shadowed_by {
            issues.push(ValidationIssue::warning(
                &location,
                format!("unreachable: rules[{j}] always matches first"),
            ));
        }
    }
}
