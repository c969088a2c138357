mod cli;
mod client;
mod config;
mod error;
mod host;
mod output;
mod resolver;
mod types;

use std::error::Error;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use error::ActionError;
use host::GithubActionsHost;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let host = cli.host();

    match resolver::run(&host).await {
        Ok(resolution) => {
            debug!(
                issue = resolution.issue.is_some(),
                rollout = resolution.rollout.is_some(),
                "finished"
            );
        }
        Err(e) => fail(&host, &e, cli.verbose),
    }
}

fn fail(host: &GithubActionsHost, e: &ActionError, verbose: bool) -> ! {
    eprintln!("Error: {e}");

    if verbose {
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("Caused by: {cause}");
            source = cause.source();
        }
    }

    host.error(&e.to_string());
    std::process::exit(1);
}

/// Diagnostics go to stderr so they never mix with workflow commands on stdout.
fn init_tracing(verbose: bool) {
    let default = if verbose { "get_issue=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
