mod commands;
mod config;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::schedule::ScheduleArgs;

/// Tuition installment schedules
#[derive(Parser)]
#[command(
    name = "tic",
    version,
    about = "Tuition installment calculator",
    long_about = "Splits a trimester bill into three installments. The trimester fee \
                  is never waived; the remaining tuition is reduced by the waiver and \
                  split with the first two installments rounded to the chosen unit."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Input policy file (JSON or YAML) replacing the built-in range and choices
    #[arg(long, global = true)]
    policy: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Count the total up before printing (card output on a terminal only)
    #[arg(long, global = true)]
    animate: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the three-installment schedule for a bill
    Schedule(ScheduleArgs),
    /// List the waiver choices of the active policy
    Waivers,
    /// Print the active input policy
    Policy,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
    Card,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("{}: {}", "warning".yellow().bold(), e);
    }

    let policy = match config::load_policy(cli.policy.as_deref()) {
        Ok(policy) => policy,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    };

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Schedule(args) => commands::schedule::run_schedule(args, &policy),
        Commands::Waivers => commands::policy::run_waivers(&policy),
        Commands::Policy => commands::policy::run_policy(&policy),
        Commands::Version => {
            println!("tic {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value, cli.animate);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
