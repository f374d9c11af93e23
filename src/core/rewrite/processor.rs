//! Per-file read, rewrite, compare and write-back.

use std::path::Path;

use serde::Serialize;

use super::rules::{RuleHit, RuleSet};
use crate::error::Result;
use crate::utils::io;

/// Whether modified content is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    #[default]
    Write,
    DryRun,
}

impl WriteMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run {
            WriteMode::DryRun
        } else {
            WriteMode::Write
        }
    }

    pub fn is_dry_run(&self) -> bool {
        matches!(self, WriteMode::DryRun)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOutcome {
    Modified,
    Unchanged,
    NotFound,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path as listed in the plan, relative to the root.
    pub file: String,
    pub outcome: FileOutcome,
    pub replacements: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hits: Vec<RuleHit>,
    /// False for dry runs and for anything other than `Modified`.
    pub written: bool,
}

impl FileReport {
    fn not_found(file: &str) -> Self {
        FileReport {
            file: file.to_string(),
            outcome: FileOutcome::NotFound,
            replacements: 0,
            hits: Vec::new(),
            written: false,
        }
    }
}

/// Rewrite one listed file.
///
/// A missing path is reported, never created. Content is read once and
/// written at most once, and only when the rules changed it.
pub fn process_file(
    root: &Path,
    file: &str,
    rules: &RuleSet,
    mode: WriteMode,
) -> Result<FileReport> {
    let path = root.join(file);

    if !path.exists() {
        return Ok(FileReport::not_found(file));
    }

    let original = io::read_text(&path, &format!("read {}", path.display()))?;
    let rewritten = rules.apply(&original);

    if rewritten.content == original {
        return Ok(FileReport {
            file: file.to_string(),
            outcome: FileOutcome::Unchanged,
            replacements: 0,
            hits: Vec::new(),
            written: false,
        });
    }

    let written = !mode.is_dry_run();
    if written {
        io::write_text(
            &path,
            &rewritten.content,
            &format!("write {}", path.display()),
        )?;
    }

    let replacements = rewritten.total_replacements();
    let hits = rewritten
        .hits
        .into_iter()
        .filter(|h| h.replacements > 0)
        .collect();

    Ok(FileReport {
        file: file.to_string(),
        outcome: FileOutcome::Modified,
        replacements,
        hits,
        written,
    })
}
