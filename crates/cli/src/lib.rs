pub mod commands;
pub mod logging;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "storefront",
    about = "Headless storefront host",
    long_about = "Mount the storefront on an in-memory page, replay click sessions, and inspect configuration.",
    after_help = "Examples:\n  storefront catalog\n  storefront session click:0 click:3 checkout click:0 confirm\n  storefront config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Render the catalog grid markup")]
    Catalog,
    #[command(about = "Replay a click script and print a JSON transcript of every step")]
    Session {
        #[arg(
            required = true,
            value_name = "STEP",
            help = "click:<id>, checkout, or confirm, applied in order"
        )]
        steps: Vec<String>,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    logging::init_from_env();

    let result = match cli.command {
        Command::Catalog => commands::catalog::run(),
        Command::Session { steps } => commands::session::run(&steps),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
