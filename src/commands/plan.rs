use clap::Args;
use serde::Serialize;

use rewire::{RewritePlan, RuleConfig};

use super::{resolve_plan, CmdResult, GlobalArgs};

#[derive(Args, Default, Debug, Clone)]
pub struct PlanArgs {}

#[derive(Debug, Serialize)]
pub struct PlanFile {
    pub path: String,
    pub exists: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "command")]
pub enum PlanOutput {
    #[serde(rename = "rewrite.plan")]
    Show {
        plan: String,
        root: String,
        files: Vec<PlanFile>,
        rules: Vec<RuleConfig>,
    },
}

/// Show the effective plan and which of its files exist under the root.
pub fn run(_args: PlanArgs, global: &GlobalArgs) -> CmdResult<PlanOutput> {
    let resolved = resolve_plan(global)?;
    let RewritePlan { files, rules } = resolved.plan;

    let files = files
        .into_iter()
        .map(|path| {
            let exists = resolved.root.join(&path).exists();
            PlanFile { path, exists }
        })
        .collect();

    Ok((
        PlanOutput::Show {
            plan: resolved.source,
            root: resolved.root.display().to_string(),
            files,
            rules,
        },
        0,
    ))
}
