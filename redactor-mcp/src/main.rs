// redactor-mcp/src/main.rs
//! Redactor MCP Server Entry Point.
//!
//! Wires the Comprehend oracle (wrapped in the credential-retry decorator)
//! into the analyzer and serves MCP over stdio until stdin closes.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use redactor_core::PiiAnalyzer;
use redactor_mcp::comprehend::{ComprehendOracle, CredentialRetry};
use redactor_mcp::logger;
use redactor_mcp::server::McpServer;

#[derive(Parser)]
#[command(name = "redactor-mcp", author, version, about)]
struct Cli {
    /// AWS region for the Comprehend client (falls back to AWS_REGION /
    /// AWS_DEFAULT_REGION, then us-east-1)
    #[arg(long, env = "AWS_REGION")]
    region: Option<String>,

    /// Suppress internal logging
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Enable debug logging
    #[arg(long, short = 'd', conflicts_with = "quiet")]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Credentials and region may live in a local .env during development.
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    let oracle = CredentialRetry::new(ComprehendOracle::from_env(args.region));
    let analyzer = PiiAnalyzer::new(Arc::new(oracle));
    let server = McpServer::new(analyzer);

    server
        .run(tokio::io::stdin(), tokio::io::stdout())
        .await
        .context("MCP server failure")?;

    Ok(())
}
