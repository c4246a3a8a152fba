//! Linting of a ruleset's tables.
//!
//! Gaps in the tables never fail a check: an unbound skill rolls without
//! attribute dice, a power kind without a basis derives to 0, an action
//! without a cost cannot be bought. This module reports those gaps so a
//! host can surface them when loading configuration.

use crate::economy::StyleAction;
use crate::rules::{PowerKind, RuleSet, Skill};

/// A warning or error found while linting a ruleset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// The table entry the issue concerns (e.g., "skill.stealth").
    pub subject: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn warning(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.subject, self.message)
    }
}

/// Lint a ruleset. Hard errors from [`RuleSet::validate`] come first,
/// followed by warnings for every gap in the tables.
pub fn validate_rules(rules: &RuleSet) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if let Err(e) = rules.validate() {
        issues.push(ValidationIssue {
            subject: "ruleset".to_string(),
            message: e.to_string(),
            is_error: true,
        });
    }

    for skill in Skill::ALL {
        if rules.governing_attribute(skill).is_none() {
            issues.push(ValidationIssue::warning(
                format!("skill.{}", skill.key()),
                "no governing attribute; checks get no attribute dice",
            ));
        }
    }

    for kind in PowerKind::ALL {
        if rules.basis(kind).is_none() {
            issues.push(ValidationIssue::warning(
                format!("power.{kind:?}").to_lowercase(),
                "no basis; the stat derives to 0",
            ));
        }
    }

    for action in StyleAction::ALL {
        if rules.style_cost(action).is_none() {
            issues.push(ValidationIssue::warning(
                format!("style.{}", action.key()),
                "no cost; the action cannot be bought",
            ));
        }
    }

    if rules.max_style_level == 0 {
        issues.push(ValidationIssue::warning(
            "max_style_level",
            "style dice are disabled; Style can never be gained",
        ));
    }

    issues
}
