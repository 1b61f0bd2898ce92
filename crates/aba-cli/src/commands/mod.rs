//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use aba_core::config::Config;

pub mod analyze;
pub mod health;
pub mod serve;

/// AI Business Analyst - upload-and-analyze client
#[derive(Parser)]
#[command(name = "aba")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Backend base URL (overrides .aba/config.toml)
    #[arg(long, global = true, env = "ABA_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Path to project directory (defaults to current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a spreadsheet and ask a question about it
    Analyze(analyze::AnalyzeArgs),

    /// Check that the analysis backend is reachable
    Health,

    /// Start the front server for the browser form
    Serve(serve::ServeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let project_dir = match self.project {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };

        let config = Config::load(&project_dir)?.with_backend_url(self.backend_url);

        match self.command {
            Commands::Analyze(args) => analyze::execute(args, &config).await,
            Commands::Health => health::execute(&config).await,
            Commands::Serve(args) => serve::execute(args, &config).await,
        }
    }
}
