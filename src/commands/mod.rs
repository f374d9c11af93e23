use std::path::PathBuf;

use clap::Args;

use rewire::log_status;
use rewire::paths;
use rewire::RewritePlan;

pub type CmdResult<T> = rewire::Result<(T, i32)>;

/// Flags shared by every subcommand.
#[derive(Args, Default, Debug, Clone)]
pub struct GlobalArgs {
    /// Project root the plan's file paths are relative to (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<String>,

    /// JSON rewrite plan to use instead of the built-in supabase removal
    #[arg(long, global = true, value_name = "FILE")]
    pub plan: Option<String>,

    /// Emit a JSON envelope instead of status lines
    #[arg(long, global = true)]
    pub json: bool,
}

/// A plan together with where it came from.
pub struct ResolvedPlan {
    pub source: String,
    pub plan: RewritePlan,
    pub root: PathBuf,
}

pub(crate) fn resolve_plan(global: &GlobalArgs) -> rewire::Result<ResolvedPlan> {
    let root = paths::resolve_root(global.root.as_deref())?;

    let (source, plan) = match global.plan.as_deref() {
        Some(raw) => {
            let path = paths::expand(raw);
            let plan = RewritePlan::load(&path)?;
            (path.display().to_string(), plan)
        }
        None => {
            log_status!("plan", "Using built-in supabase removal plan");
            ("builtin".to_string(), RewritePlan::builtin())
        }
    };

    Ok(ResolvedPlan { source, plan, root })
}

pub mod plan;
pub mod run;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (rewire::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Run(args) => dispatch!(args, global, run),
        crate::Commands::Plan(args) => dispatch!(args, global, plan),
    }
}
