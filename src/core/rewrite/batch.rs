//! Batch driver: one sequential pass over a plan's file list.

use std::path::Path;

use serde::Serialize;

use super::processor::{process_file, FileOutcome, FileReport, WriteMode};
use crate::error::Result;
use crate::plan::RewritePlan;

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub files: Vec<FileReport>,
    pub modified: usize,
    pub unchanged: usize,
    pub not_found: usize,
    pub dry_run: bool,
}

impl RunReport {
    fn record(&mut self, report: FileReport) {
        match report.outcome {
            FileOutcome::Modified => self.modified += 1,
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::NotFound => self.not_found += 1,
        }
        self.files.push(report);
    }
}

/// Apply `plan` to every listed file under `root`, in list order.
///
/// Rules are compiled before any file is touched. `on_file` fires after each
/// file so callers can stream status lines. The first error stops the run,
/// including one returned by `on_file`; files already written stay written.
pub fn run<F>(
    plan: &RewritePlan,
    root: &Path,
    mode: WriteMode,
    mut on_file: F,
) -> Result<RunReport>
where
    F: FnMut(&FileReport) -> Result<()>,
{
    let rules = plan.rule_set()?;
    log_status!(
        "rewrite",
        "Applying {} rules to {} files under {}{}",
        rules.len(),
        plan.files.len(),
        root.display(),
        if mode.is_dry_run() { " (dry run)" } else { "" }
    );

    let mut report = RunReport {
        dry_run: mode.is_dry_run(),
        ..RunReport::default()
    };

    for file in &plan.files {
        let file_report = process_file(root, file, &rules, mode)?;
        on_file(&file_report)?;
        report.record(file_report);
    }

    Ok(report)
}
