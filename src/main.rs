mod align;
mod cli;
mod commands;
mod error;
mod model;
mod util;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::error::AlignError;

const EXIT_FAILURE: i32 = 1;
const EXIT_NOT_FOUND: i32 = 2;

fn main() {
    init_tracing();

    if let Err(err) = run() {
        error!(error = %err, "command failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }

        let code = match err.downcast_ref::<AlignError>() {
            Some(AlignError::ArticleNotFound { .. }) => EXIT_NOT_FOUND,
            _ => EXIT_FAILURE,
        };
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::View(args) => commands::view::run(args),
        Commands::Schema(args) => commands::schema::run(args),
        Commands::Articles(args) => commands::articles::run(args),
        Commands::Status(args) => commands::status::run(args),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
