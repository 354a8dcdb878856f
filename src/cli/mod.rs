//! CLI argument parsing
//!
//! Defines the command-line interface using clap.

use clap::{Parser, Subcommand};

/// Black-box smoke tests for a backend HTTP API
#[derive(Parser, Debug)]
#[command(name = "backend-probe")]
#[command(version)]
#[command(about = "Run black-box checks against a running backend API")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the check suite against the backend
    Run(RunArgs),

    /// List available checks
    List(ListArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the env-style file holding REACT_APP_BACKEND_URL
    #[arg(short, long, default_value = "frontend/.env")]
    pub env_file: String,

    /// Backend base URL (bypasses the env file)
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Specific check number to run (1-5)
    #[arg(short, long)]
    pub check: Option<u8>,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "10")]
    pub timeout: u64,

    /// Output format (table, json, json-pretty, summary)
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Skip specific checks (comma-separated check numbers)
    #[arg(long)]
    pub skip: Option<String>,

    /// Save results to file
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Show check categories
    #[arg(short, long)]
    pub detailed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_args_parsing() {
        let args = Args::parse_from(["backend-probe", "list", "--detailed"]);
        match args.command {
            Command::List(list_args) => {
                assert!(list_args.detailed);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn run_args_parsing() {
        let args = Args::parse_from([
            "backend-probe",
            "run",
            "--env-file",
            "/tmp/frontend/.env",
            "--timeout",
            "5",
            "--skip",
            "2,5",
        ]);
        match args.command {
            Command::Run(run_args) => {
                assert_eq!(run_args.env_file, "/tmp/frontend/.env");
                assert_eq!(run_args.timeout, 5);
                assert_eq!(run_args.skip.as_deref(), Some("2,5"));
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn run_defaults() {
        let args = Args::parse_from(["backend-probe", "run"]);
        match args.command {
            Command::Run(run_args) => {
                assert_eq!(run_args.env_file, "frontend/.env");
                assert_eq!(run_args.timeout, 10);
                assert_eq!(run_args.format, "table");
                assert!(run_args.base_url.is_none());
            }
            _ => panic!("Expected Run command"),
        }
    }
}
