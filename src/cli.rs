use crate::github::API_GRAPHQL_URL;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "profile-page")]
#[command(about = "GitHub Profile Page - Renders a profile landing page from the GitHub GraphQL API")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub personal access token used as the bearer credential
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// GitHub GraphQL endpoint
    #[arg(long, env = "GITHUB_GRAPHQL_URL", default_value = API_GRAPHQL_URL)]
    pub endpoint: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the profile once and write the rendered page
    Render {
        /// Output file; `-` writes to stdout
        #[arg(short, long, default_value = "index.html")]
        output: PathBuf,
    },

    /// Serve the page, fetching the profile on every request
    Serve {
        /// Address to bind
        #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0")]
        bind: String,

        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = 8080)]
        port: u16,
    },
}
