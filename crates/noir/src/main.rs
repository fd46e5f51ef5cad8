//! Noir CLI - Main entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "noir")]
#[command(version)]
#[command(about = "Noir design system CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bundle and minify the stylesheet into the distribution directory
    Build {
        /// Entry stylesheet
        #[arg(long, default_value = "css/noir.css")]
        entry: PathBuf,

        /// Distribution directory
        #[arg(long, default_value = "dist")]
        dist: PathBuf,

        /// Browser-support query for target resolution
        #[arg(long, default_value = noir_bundler::DEFAULT_BROWSERS)]
        browsers: String,

        /// Emit the size report as JSON instead of the plain summary
        #[arg(long, conflicts_with = "quiet")]
        json: bool,

        /// Suppress the size report
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "noir=info,noir_bundler=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            entry,
            dist,
            browsers,
            json,
            quiet,
        } => commands::build::execute(entry, dist, &browsers, json, quiet),
    }
}
