use clap::{Parser, Subcommand};

use commands::GlobalArgs;

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Text,
}

mod commands;
mod output;

use commands::{plan, run};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "rewire")]
#[command(version = VERSION)]
#[command(about = "Rewrite deprecated module references across a fixed set of files")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the rewrite plan to every listed file
    Run(run::RunArgs),
    /// Show the effective rewrite plan
    Plan(plan::PlanArgs),
}

fn response_mode(command: &Commands, global: &GlobalArgs) -> ResponseMode {
    match command {
        Commands::Plan(_) => ResponseMode::Json,
        Commands::Run(_) if global.json => ResponseMode::Json,
        Commands::Run(_) => ResponseMode::Text,
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = cli.global;
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Run(run::RunArgs::default()));

    match response_mode(&command, &global) {
        ResponseMode::Json => {
            let (json_result, exit_code) = commands::run_json(command, &global);
            if let Err(err) = output::print_json_result(json_result) {
                output::print_error_text(&err);
                return std::process::ExitCode::from(exit_code_to_u8(1));
            }
            std::process::ExitCode::from(exit_code_to_u8(exit_code))
        }
        ResponseMode::Text => {
            let Commands::Run(args) = command else {
                return std::process::ExitCode::from(exit_code_to_u8(2));
            };
            match run::run_text(args, &global) {
                Ok(_) => std::process::ExitCode::SUCCESS,
                Err(err) => {
                    output::print_error_text(&err);
                    let code = output::exit_code_for_error(err.code);
                    std::process::ExitCode::from(exit_code_to_u8(code))
                }
            }
        }
    }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
