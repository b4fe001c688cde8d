//! # calaf-setup entry point
//!
//! `calaf-setup database` exits non-zero on any failure; `calaf-setup kv`
//! always exits successfully.

use std::path::PathBuf;
use std::process::ExitCode;

use calaf_setup::{
    config::{ConfigLoader, SetupConfig},
    setup::{self, kv::KvSetupOutcome},
    telemetry,
};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "calaf-setup", version, about = "Post-deployment provisioning")]
struct Cli {
    /// Directory holding the layered .env files
    #[arg(long, global = true, value_name = "DIR")]
    env_dir: Option<PathBuf>,

    /// Profile selecting .env.<profile> files (overrides SETUP_PROFILE)
    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the database schema and seed default rows
    Database,
    /// Seed default records into the hosted KV store
    Kv,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut loader = match cli.env_dir {
        Some(dir) => ConfigLoader::with_base_dir(dir),
        None => ConfigLoader::new(),
    };
    if let Some(profile) = cli.profile {
        loader = loader.with_profile(profile);
    }

    let config = match loader.load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {}", err);
            return match cli.command {
                Command::Database => ExitCode::FAILURE,
                Command::Kv => ExitCode::SUCCESS,
            };
        }
    };

    if let Err(err) = telemetry::init_tracing(&config) {
        eprintln!("Warning: {}", err);
    }
    if let Ok(redacted) = config.redacted_json() {
        tracing::debug!("Configuration: {}", redacted);
    }

    match cli.command {
        Command::Database => run_database(&config).await,
        Command::Kv => run_kv(&config).await,
    }
}

async fn run_database(config: &SetupConfig) -> ExitCode {
    println!("Production database setup starting...");
    match setup::database::run(config).await {
        Ok(_) => {
            println!("Production database setup completed");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %format!("{:#}", err), "Database setup failed");
            eprintln!("Setup error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run_kv(config: &SetupConfig) -> ExitCode {
    println!("KV production setup");
    println!("===================");

    match setup::kv::run(config).await {
        KvSetupOutcome::Skipped => {
            println!("KV setup skipped (environment variables missing)");
            println!();
            println!("Manual setup steps:");
            for (i, step) in setup::kv::MANUAL_SETUP_STEPS.iter().enumerate() {
                println!("{}. {}", i + 1, step);
            }
        }
        KvSetupOutcome::PingFailed => println!("KV ping test failed"),
        KvSetupOutcome::Seeded(_) => println!("KV setup completed"),
        KvSetupOutcome::Failed(_) => println!("KV setup finished with errors (see log)"),
    }

    ExitCode::SUCCESS
}
