use anyhow::Context;
use clap::Parser;
use colored::*;
use profile_page::cli::{Cli, Command};
use profile_page::github::GitHubClient;
use profile_page::pipeline::load_page;
use profile_page::server::{start_server, AppState};
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = GitHubClient::with_endpoint(cli.token, &cli.endpoint)
        .context("Failed to configure GitHub client")?;

    match cli.command {
        Command::Render { output } => {
            let outcome = load_page(&client).await?;
            let html = outcome.to_html();

            if output.as_os_str() == "-" {
                std::io::stdout()
                    .write_all(html.as_bytes())
                    .context("Failed to write page to stdout")?;
            } else {
                std::fs::write(&output, html)
                    .with_context(|| format!("Failed to write {}", output.display()))?;
                info!(path = %output.display(), "Wrote profile page");
            }

            if let Some(e) = outcome.error() {
                eprintln!("{} {}", "Rendered failure page:".red().bold(), e);
                std::process::exit(1);
            }
            eprintln!("{}", "Profile page rendered".bold().green());
        }
        Command::Serve { bind, port } => {
            eprintln!("{}", "GitHub Profile Page Server".bold().green());
            eprintln!("{}\n", "=".repeat(50).dimmed());
            eprintln!("📡 Serving http://{}:{}", bind, port);
            eprintln!("\nPress Ctrl+C to stop the server\n");

            tokio::select! {
                result = start_server(AppState::new(client), &bind, port) => {
                    result.map_err(|e| anyhow::anyhow!("Server error: {}", e))?;
                }
                _ = tokio::signal::ctrl_c() => {
                    eprintln!("\n🛑 Shutting down server...");
                }
            }
        }
    }

    Ok(())
}
