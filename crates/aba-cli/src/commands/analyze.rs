//! Analyze command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use aba_core::analyze::AnalyzeClient;
use aba_core::config::Config;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Spreadsheet file to analyze (csv, xlsx, xls)
    pub file: PathBuf,

    /// Question to ask about the data
    #[arg(short, long)]
    pub question: Option<String>,
}

pub async fn execute(args: AnalyzeArgs, config: &Config) -> Result<()> {
    let client = AnalyzeClient::new(&config.backend_url);
    debug!(backend = %config.backend_url, file = %args.file.display(), "Submitting analysis");

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message("Uploading and analyzing...");

    let result = client.analyze(&args.file, args.question.as_deref()).await;
    spinner.finish_and_clear();

    let analysis = result?;

    println!("{} {}", "✓".green().bold(), "Analysis complete.".bold());
    println!();
    output::print_analysis(&analysis);

    Ok(())
}
