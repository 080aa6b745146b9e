//! CLI entry point for planguard.
//!
//! This binary is intentionally thin: it handles argument parsing, file I/O,
//! and exit codes. All evaluation logic lives in the library crates.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use planguard_app::{result_exit_code, run_check, serialize_result, split_approvers, CheckInput};

#[derive(Parser, Debug)]
#[command(
    name = "planguard",
    version,
    about = "Ownership and approval governance checks for Terraform plans"
)]
struct Cli {
    /// Path to a file with Terraform plan output in JSON format.
    #[arg(long)]
    plan: Utf8PathBuf,

    /// User identified as the requester of the change.
    #[arg(long, default_value = "")]
    requester: String,

    /// Comma-separated list of users identified as the approvers of the change.
    #[arg(long, default_value = "")]
    approvers: String,
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(err) => {
            eprintln!("planguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    let plan_json = std::fs::read_to_string(&cli.plan)
        .with_context(|| format!("read plan file: {}", cli.plan))?;

    let result = run_check(CheckInput {
        plan_json: &plan_json,
        requester: &cli.requester,
        approvers: split_approvers(&cli.approvers),
    })?;

    println!("{}", serialize_result(&result)?);
    Ok(result_exit_code(&result))
}
