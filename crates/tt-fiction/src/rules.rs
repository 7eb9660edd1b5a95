//! Rule resolution.
//!
//! A rule matches when its scene, action, and target equal the command's and
//! every one of its required flags is raised. When several rules match, the
//! one declared first wins, so stories list specific rules before general
//! fallbacks.

use std::collections::HashMap;

use tracing::debug;
use tt_core::{FlagSet, Rule};

type RuleKey = (String, String, String);

/// Rules bucketed by (scene, action, target), each bucket in declaration
/// order.
#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    buckets: HashMap<RuleKey, Vec<Rule>>,
    len: usize,
}

impl RuleBook {
    /// Index a rule table. Rule order is preserved within each bucket.
    pub fn new(rules: &[Rule]) -> Self {
        let mut buckets: HashMap<RuleKey, Vec<Rule>> = HashMap::new();
        for rule in rules {
            buckets
                .entry((rule.scene.clone(), rule.action.clone(), rule.target.clone()))
                .or_default()
                .push(rule.clone());
        }
        Self {
            buckets,
            len: rules.len(),
        }
    }

    /// Number of indexed rules.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no rules are indexed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Find the highest-priority rule for a command, if any.
    pub fn resolve(
        &self,
        scene: &str,
        action: &str,
        target: &str,
        flags: &FlagSet,
    ) -> Option<&Rule> {
        let key = (scene.to_string(), action.to_string(), target.to_string());
        let rule = self
            .buckets
            .get(&key)?
            .iter()
            .find(|rule| flags.contains_all(&rule.required_flags));
        match rule {
            Some(rule) => debug!(scene, action, target, required = ?rule.required_flags, "rule matched"),
            None => debug!(scene, action, target, %flags, "no rule matched"),
        }
        rule
    }
}

/// Reference resolution: scan the whole table in order.
///
/// Always agrees with [`RuleBook::resolve`].
pub fn resolve_linear<'a>(
    rules: &'a [Rule],
    scene: &str,
    action: &str,
    target: &str,
    flags: &FlagSet,
) -> Option<&'a Rule> {
    rules.iter().find(|rule| {
        rule.scene == scene
            && rule.action == action
            && rule.target == target
            && flags.contains_all(&rule.required_flags)
    })
}
