//! Backend health command.

use anyhow::Result;
use colored::Colorize;

use aba_core::analyze::AnalyzeClient;
use aba_core::config::Config;

pub async fn execute(config: &Config) -> Result<()> {
    let client = AnalyzeClient::new(&config.backend_url);

    if client.health_check().await? {
        println!(
            "{} Backend reachable at {}",
            "✓".green().bold(),
            config.backend_url.cyan()
        );
        Ok(())
    } else {
        println!(
            "{} Backend unreachable at {}",
            "✗".red().bold(),
            config.backend_url.cyan()
        );
        std::process::exit(1);
    }
}
