//! Autostarter CLI - manage run-at-login registrations from the shell.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "autostarter", version)]
#[command(about = "Register scripts to run at login via XDG autostart")]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Use this directory instead of the user autostart directory
    #[arg(long, global = true, value_name = "DIR")]
    user_dir: Option<PathBuf>,

    /// Use this directory instead of the system startup directory
    #[arg(long, global = true, value_name = "DIR")]
    system_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report whether an entry is enabled (exit status 1 when disabled)
    Check {
        identifier: String,
        /// Operate on the system-wide directory
        #[arg(long)]
        system: bool,
    },
    /// Register a script to run at startup
    Add {
        identifier: String,
        /// Script to run
        script: String,
        /// Program used to run the script
        #[arg(short, long, default_value = "sh")]
        interpreter: String,
        /// Operate on the system-wide directory
        #[arg(long)]
        system: bool,
        /// Argument string passed to the script, unquoted
        #[arg(long = "args", default_value = "", allow_hyphen_values = true)]
        arguments: String,
    },
    /// Remove a registration
    Remove {
        identifier: String,
        /// Operate on the system-wide directory
        #[arg(long)]
        system: bool,
    },
    /// Show the on-disk state of a registration
    Status {
        identifier: String,
        /// Operate on the system-wide directory
        #[arg(long)]
        system: bool,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Set up logging; RUST_LOG wins over --debug
    let log_level = if args.debug { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_lowercase()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let manager = commands::manager(args.user_dir, args.system_dir);
    debug!("Using startup directories: {:?}", manager.dirs());

    match args.command {
        Command::Check { identifier, system } => commands::check(&manager, &identifier, system),
        Command::Add {
            identifier,
            script,
            interpreter,
            system,
            arguments,
        } => commands::add(&manager, &identifier, &script, &interpreter, system, &arguments),
        Command::Remove { identifier, system } => commands::remove(&manager, &identifier, system),
        Command::Status {
            identifier,
            system,
            json,
        } => commands::status(&manager, &identifier, system, json),
    }
}
