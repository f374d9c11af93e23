//! Rewrite plans: the file list and rule list a batch run operates on.
//!
//! A plan is either the built-in supabase removal or a JSON file:
//!
//! ```json
//! {
//!   "files": ["client/src/pages/help.tsx"],
//!   "rules": [
//!     { "find": "use-auth-supabase", "replace": "use-auth" },
//!     { "find": "use-auth-(\\w+)", "replace": "use-auth", "kind": "pattern" }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rewrite::{MatchKind, Rule, RuleSet};
use crate::utils::io;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleConfig {
    pub find: String,
    pub replace: String,
    #[serde(default)]
    pub kind: MatchKind,
}

impl RuleConfig {
    pub fn literal(find: &str, replace: &str) -> Self {
        RuleConfig {
            find: find.to_string(),
            replace: replace.to_string(),
            kind: MatchKind::Literal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewritePlan {
    /// Paths relative to the project root, processed in order.
    pub files: Vec<String>,
    /// Rules applied in order; each sees the previous rule's output.
    pub rules: Vec<RuleConfig>,
}

const BUILTIN_FILES: &[&str] = &[
    "client/src/pages/timetable.tsx",
    "client/src/pages/resources.tsx",
    "client/src/pages/results.tsx",
    "client/src/pages/settings.tsx",
    "client/src/pages/help.tsx",
    "client/src/pages/lifecycle.tsx",
    "client/src/pages/messages.tsx",
    "client/src/pages/finance.tsx",
    "client/src/pages/auth-page.tsx",
    "client/src/pages/course-registration.tsx",
    "client/src/hooks/use-language.tsx",
    "client/src/components/Sidebar.tsx",
    "client/src/components/Navbar.tsx",
    "client/src/components/NotificationPanel.tsx",
    "client/src/components/FacilityBooking.tsx",
];

const BUILTIN_RULES: &[(&str, &str)] = &[
    ("use-auth-supabase", "use-auth"),
    ("supabaseApi", "// supabaseApi - removed"),
    ("from '@/lib/supabase'", "// from '@/lib/supabase' - removed"),
];

impl RewritePlan {
    /// The supabase removal: rewire the auth hook import and comment out
    /// the deprecated data-access references across the client pages.
    pub fn builtin() -> Self {
        RewritePlan {
            files: BUILTIN_FILES.iter().map(|f| f.to_string()).collect(),
            rules: BUILTIN_RULES
                .iter()
                .map(|(find, replace)| RuleConfig::literal(find, replace))
                .collect(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = io::read_text(path, &format!("read plan {}", path.display()))?;
        let plan = Self::from_json(&raw, &path.display().to_string())?;
        log_status!(
            "plan",
            "Loaded {} rules and {} files from {}",
            plan.rules.len(),
            plan.files.len(),
            path.display()
        );
        Ok(plan)
    }

    /// Parse and validate a plan. `source` names the plan in error details.
    pub fn from_json(raw: &str, source: &str) -> Result<Self> {
        let plan: RewritePlan =
            serde_json::from_str(raw).map_err(|e| Error::config_invalid_json(source, e))?;
        plan.validate()?;
        Ok(plan)
    }

    pub fn validate(&self) -> Result<()> {
        if self.files.is_empty() {
            return Err(Error::config_invalid_value(
                "files",
                None,
                "Plan must list at least one file",
            ));
        }
        if self.rules.is_empty() {
            return Err(Error::config_invalid_value(
                "rules",
                None,
                "Plan must define at least one rule",
            ));
        }
        if let Some(blank) = self.files.iter().find(|f| f.trim().is_empty()) {
            return Err(Error::config_invalid_value(
                "files",
                Some(blank.clone()),
                "File paths must not be blank",
            ));
        }
        self.rule_set().map(|_| ())
    }

    /// Compile rule configs into a `RuleSet`, preserving order.
    pub fn rule_set(&self) -> Result<RuleSet> {
        let rules = self
            .rules
            .iter()
            .enumerate()
            .map(|(i, cfg)| {
                Rule::new(cfg.kind, &cfg.find, &cfg.replace)
                    .map_err(|e| e.with_hint(format!("Check rule #{} in the plan", i + 1)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(RuleSet::new(rules))
    }
}
