use anyhow::Context;
use clap::Parser;
use colored::*;
use repo_privatizer::app::{self, RunOutcome};
use repo_privatizer::cli::Cli;
use repo_privatizer::github::GitHubClient;
use repo_privatizer::prompt::TerminalPrompter;
use repo_privatizer::report;
use repo_privatizer::transport::ReqwestTransport;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Prompts block the main thread, so the interrupt is watched from a
    // runtime worker instead of a select! alongside the run.
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\n\n{}", "👋 Operation cancelled by user".yellow());
            std::process::exit(0);
        }
    });

    report::print_banner();

    match run(cli).await {
        Ok(outcome) => {
            debug!("Finished with {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {:#}", "❌".red(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<RunOutcome> {
    let mut prompter = TerminalPrompter::new();

    let credentials = cli
        .credential_sources()
        .resolve(&mut prompter)
        .context("Could not obtain credentials")?;

    let transport = ReqwestTransport::new(&cli.api_url, &credentials.token)
        .context("Failed to build HTTP client")?;
    let client = GitHubClient::new(transport, credentials.username);

    let outcome = app::run(&client, &mut prompter, cli.mode()).await?;
    Ok(outcome)
}
