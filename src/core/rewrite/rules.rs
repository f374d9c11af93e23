//! Ordered rewrite rules and the sequential fold that applies them.

use super::matcher::{MatchKind, Matcher};
use crate::error::Result;
use serde::Serialize;

/// One match/replacement pair.
#[derive(Debug, Clone)]
pub struct Rule {
    pub matcher: Matcher,
    pub replacement: String,
}

impl Rule {
    pub fn new(kind: MatchKind, find: &str, replacement: &str) -> Result<Self> {
        Ok(Rule {
            matcher: Matcher::new(kind, find)?,
            replacement: replacement.to_string(),
        })
    }

    pub fn literal(find: &str, replacement: &str) -> Result<Self> {
        Self::new(MatchKind::Literal, find, replacement)
    }

    pub fn pattern(find: &str, replacement: &str) -> Result<Self> {
        Self::new(MatchKind::Pattern, find, replacement)
    }

    pub fn apply(&self, text: &str) -> (String, usize) {
        self.matcher.replace_all(text, &self.replacement)
    }
}

/// How many replacements a single rule made in one text.
#[derive(Debug, Clone, Serialize)]
pub struct RuleHit {
    pub find: String,
    pub replacements: usize,
}

/// Result of folding a text through a `RuleSet`.
#[derive(Debug, Clone)]
pub struct Rewritten {
    pub content: String,
    /// One entry per rule, in rule order.
    pub hits: Vec<RuleHit>,
}

impl Rewritten {
    pub fn total_replacements(&self) -> usize {
        self.hits.iter().map(|h| h.replacements).sum()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        RuleSet { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Fold `text` through every rule in order.
    ///
    /// Each rule sees the output of the one before it and runs exactly once.
    pub fn apply(&self, text: &str) -> Rewritten {
        let mut content = text.to_string();
        let mut hits = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let (next, replacements) = rule.apply(&content);
            content = next;
            hits.push(RuleHit {
                find: rule.matcher.as_str().to_string(),
                replacements,
            });
        }

        Rewritten { content, hits }
    }
}
