//! backend-probe - black-box smoke tests for a backend HTTP API
//!
//! A CLI harness that resolves the backend's base URL from the frontend's
//! env file, runs five checks against it (health, CORS preflight, status
//! read/write, persistence round-trip, validation errors), prints a
//! summary and exits non-zero if anything failed.
//!
//! ## Usage
//!
//! ```bash
//! # Run the full suite, resolving the URL from frontend/.env
//! backend-probe run
//!
//! # Point at an explicit backend
//! backend-probe run --base-url http://localhost:8000
//!
//! # Run a single check
//! backend-probe run --check 4
//!
//! # List available checks
//! backend-probe list --detailed
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

mod checks;
mod cli;
mod config;
mod http;
mod models;
mod output;
mod runner;
mod utils;

use cli::Args;
use config::HarnessConfig;
use models::{Check, CheckStatus};
use output::{OutputFormat, ResultFormatter};
use runner::SuiteRunner;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    utils::init_logger(args.verbose);

    match args.command {
        cli::Command::Run(run_args) => {
            run_suite(run_args).await?;
        }
        cli::Command::List(list_args) => {
            list_checks(list_args);
        }
    }

    Ok(())
}

async fn run_suite(args: cli::RunArgs) -> Result<()> {
    // Resolve the backend address before anything touches the network
    let base_url = match args.base_url {
        Some(url) => url,
        None => config::resolve_backend_url(&args.env_file)
            .with_context(|| format!("Could not resolve backend URL from {}", args.env_file))?,
    };

    let skip = args
        .skip
        .as_deref()
        .map(HarnessConfig::parse_skip_list)
        .unwrap_or_default();

    let config = HarnessConfig::new(&base_url)
        .with_timeout(args.timeout)
        .with_skip_checks(skip);

    info!("Testing backend at {}", config.api_base);

    let formatter =
        ResultFormatter::new(OutputFormat::from_str(&args.format).unwrap_or(OutputFormat::Table));
    let runner = SuiteRunner::new(config)?;

    if let Some(check_num) = args.check {
        let check = Check::from_number(check_num)
            .ok_or_else(|| anyhow::anyhow!("Invalid check number: {check_num}"))?;
        let result = runner.run_check(check).await;
        println!("{}", formatter.format_result(&result));

        if result.status == CheckStatus::Fail || result.status == CheckStatus::Error {
            std::process::exit(1);
        }
    } else {
        let summary = runner.run_all().await;
        println!("{}", formatter.format_summary(&summary));

        if let Some(path) = &args.output {
            let format = OutputFormat::from_str(&args.format).unwrap_or(OutputFormat::Json);
            output::write_summary_to_file(path, &summary, format)?;
            println!("Results saved to: {path}");
        }

        if !summary.is_all_passed() {
            std::process::exit(1);
        }
    }

    Ok(())
}

fn list_checks(args: cli::ListArgs) {
    println!("\nBackend Checks (5 total)\n");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    for check in Check::all() {
        if args.detailed {
            println!(
                "  {:2}. {:20} [{}]",
                check.number(),
                check.name(),
                check.category()
            );
        } else {
            println!("  {:2}. {}", check.number(), check.name());
        }
    }

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
}
