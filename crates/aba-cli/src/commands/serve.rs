//! Front server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use aba_core::analyze::AnalyzeClient;
use aba_core::config::Config;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

pub async fn execute(args: ServeArgs, config: &Config) -> Result<()> {
    let client = AnalyzeClient::new(&config.backend_url);

    println!();
    println!("  {} {}", "ABA".cyan().bold(), "Front Server".bold());
    println!();
    println!("  {}      http://{}:{}", "Form".green(), args.host, args.port);
    println!(
        "  {}   http://{}:{}/analyze",
        "Analyze".green(),
        args.host,
        args.port
    );
    println!("  {}   {}", "Backend".green(), config.backend_url);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    aba_web::run_server(client, &args.host, args.port).await?;

    Ok(())
}
