use clap::Args;
use serde::Serialize;

use rewire::rewrite;
use rewire::{FileOutcome, FileReport, RunReport, WriteMode};

use super::{resolve_plan, CmdResult, GlobalArgs};
use crate::output;

#[derive(Args, Default, Debug, Clone)]
pub struct RunArgs {
    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "command")]
pub enum RunOutput {
    #[serde(rename = "rewrite.run")]
    Run {
        plan: String,
        root: String,
        report: RunReport,
    },
}

/// JSON mode: run the whole batch, then report once.
pub fn run(args: RunArgs, global: &GlobalArgs) -> CmdResult<RunOutput> {
    let resolved = resolve_plan(global)?;
    let mode = WriteMode::from_dry_run(args.dry_run);

    let report = rewrite::run(&resolved.plan, &resolved.root, mode, |_| Ok(()))?;

    Ok((
        RunOutput::Run {
            plan: resolved.source,
            root: resolved.root.display().to_string(),
            report,
        },
        0,
    ))
}

/// Text mode: one status line per file as it is processed, then the summary.
///
/// On error the lines already printed stay and no summary is printed. A
/// failed stdout write stops the batch like any other error.
pub fn run_text(args: RunArgs, global: &GlobalArgs) -> rewire::Result<RunReport> {
    let resolved = resolve_plan(global)?;
    let mode = WriteMode::from_dry_run(args.dry_run);

    let report = rewrite::run(&resolved.plan, &resolved.root, mode, |file| {
        output::print_line(&status_line(file))
    })?;

    output::print_line("")?;
    output::print_line(&summary_line(&report))?;
    Ok(report)
}

pub fn status_line(file: &FileReport) -> String {
    match (file.outcome, file.written) {
        (FileOutcome::Modified, true) => format!("✅ Fixed: {}", file.file),
        (FileOutcome::Modified, false) => format!("📝 Would fix: {}", file.file),
        (FileOutcome::Unchanged, _) => format!("⏭️ No changes needed: {}", file.file),
        (FileOutcome::NotFound, _) => format!("❌ File not found: {}", file.file),
    }
}

pub fn summary_line(report: &RunReport) -> String {
    if report.dry_run {
        format!("🎯 Would fix {} files total (dry run)", report.modified)
    } else {
        format!("🎯 Fixed {} files total!", report.modified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn file_report(file: &str, outcome: FileOutcome, written: bool) -> FileReport {
        FileReport {
            file: file.to_string(),
            outcome,
            replacements: 0,
            hits: Vec::new(),
            written,
        }
    }

    #[test]
    fn status_lines_have_distinct_markers() {
        assert_eq!(
            status_line(&file_report("client/src/pages/help.tsx", FileOutcome::Modified, true)),
            "✅ Fixed: client/src/pages/help.tsx"
        );
        assert_eq!(
            status_line(&file_report("client/src/pages/help.tsx", FileOutcome::Unchanged, false)),
            "⏭️ No changes needed: client/src/pages/help.tsx"
        );
        assert_eq!(
            status_line(&file_report("client/src/pages/help.tsx", FileOutcome::NotFound, false)),
            "❌ File not found: client/src/pages/help.tsx"
        );
        assert!(
            status_line(&file_report("a.tsx", FileOutcome::Modified, false)).starts_with("📝")
        );
    }

    #[test]
    fn summary_reports_modified_count() {
        let report = RunReport {
            modified: 3,
            unchanged: 10,
            not_found: 2,
            ..RunReport::default()
        };
        assert_eq!(summary_line(&report), "🎯 Fixed 3 files total!");

        let dry = RunReport {
            modified: 1,
            dry_run: true,
            ..RunReport::default()
        };
        assert_eq!(summary_line(&dry), "🎯 Would fix 1 files total (dry run)");
    }

    #[test]
    fn json_run_uses_plan_file_and_root() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("Navbar.tsx"), "import x from '@/hooks/use-auth-supabase';").unwrap();
        let plan_path = root.join("plan.json");
        fs::write(
            &plan_path,
            r#"{"files":["Navbar.tsx","Gone.tsx"],"rules":[{"find":"use-auth-supabase","replace":"use-auth"}]}"#,
        )
        .unwrap();

        let global = GlobalArgs {
            root: Some(root.display().to_string()),
            plan: Some(plan_path.display().to_string()),
            json: true,
        };
        let (output, exit_code) = run(RunArgs::default(), &global).unwrap();

        assert_eq!(exit_code, 0);
        let value = serde_json::to_value(output).unwrap();
        assert_eq!(value["command"], "rewrite.run");
        assert_eq!(value["report"]["modified"], 1);
        assert_eq!(value["report"]["not_found"], 1);
        assert_eq!(value["report"]["files"][0]["outcome"], "modified");
        assert_eq!(value["report"]["files"][1]["outcome"], "not_found");
        assert_eq!(
            fs::read_to_string(root.join("Navbar.tsx")).unwrap(),
            "import x from '@/hooks/use-auth';"
        );
    }

    #[test]
    fn text_run_returns_report() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("client/src/pages")).unwrap();
        fs::write(root.join("client/src/pages/results.tsx"), "supabaseApi.results()").unwrap();

        let global = GlobalArgs {
            root: Some(root.display().to_string()),
            ..GlobalArgs::default()
        };
        let report = run_text(RunArgs { dry_run: true }, &global).unwrap();

        assert_eq!(report.modified, 1);
        assert_eq!(report.not_found, 14);
        assert_eq!(
            fs::read_to_string(root.join("client/src/pages/results.tsx")).unwrap(),
            "supabaseApi.results()"
        );
    }
}
