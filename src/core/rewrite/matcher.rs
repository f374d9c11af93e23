//! Match strategies a rule can use.

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// How a rule's `find` text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Plain substring, case-sensitive, no escaping.
    #[default]
    Literal,
    /// `regex` crate syntax, with `$1` / `${name}` expansion in the replacement.
    Pattern,
}

#[derive(Debug, Clone)]
pub enum Matcher {
    Literal(String),
    Pattern(Regex),
}

impl Matcher {
    /// Build a literal matcher. An empty needle is rejected: substring
    /// replacement of "" would splice the replacement between every character.
    pub fn literal(find: &str) -> Result<Self> {
        if find.is_empty() {
            return Err(Error::validation_invalid_argument(
                "find",
                "Literal match text must not be empty",
            ));
        }
        Ok(Matcher::Literal(find.to_string()))
    }

    pub fn pattern(find: &str) -> Result<Self> {
        let re = Regex::new(find).map_err(|e| {
            Error::validation_invalid_argument("find", format!("Invalid pattern '{}': {}", find, e))
        })?;
        Ok(Matcher::Pattern(re))
    }

    pub fn new(kind: MatchKind, find: &str) -> Result<Self> {
        match kind {
            MatchKind::Literal => Self::literal(find),
            MatchKind::Pattern => Self::pattern(find),
        }
    }

    /// The source text of the matcher (needle or pattern).
    pub fn as_str(&self) -> &str {
        match self {
            Matcher::Literal(s) => s,
            Matcher::Pattern(re) => re.as_str(),
        }
    }

    /// Replace every non-overlapping match, scanning left to right.
    ///
    /// Returns the new text and how many matches were replaced. Replacement
    /// text is never rescanned.
    pub fn replace_all(&self, text: &str, replacement: &str) -> (String, usize) {
        match self {
            Matcher::Literal(find) => {
                let count = text.matches(find.as_str()).count();
                if count == 0 {
                    return (text.to_string(), 0);
                }
                (text.replace(find.as_str(), replacement), count)
            }
            Matcher::Pattern(re) => {
                let count = re.find_iter(text).count();
                if count == 0 {
                    return (text.to_string(), 0);
                }
                (re.replace_all(text, replacement).into_owned(), count)
            }
        }
    }
}
