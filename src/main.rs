use std::process::ExitCode;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands};
use shorts_crawler::RunOutcome;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Profiles => {
            cli::list_profiles();
            Ok(ExitCode::SUCCESS)
        }
        Commands::Stats(args) => cli::show_stats(args).map(|_| ExitCode::SUCCESS),
        Commands::Run(args) => {
            let cancel = CancellationToken::new();
            let on_signal = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::warn!("Interrupted, shutting down");
                    on_signal.cancel();
                }
            });

            cli::run(args, cancel).await.map(|summary| {
                cli::print_summary(&summary);
                match summary.outcome {
                    RunOutcome::Failed(_) => ExitCode::FAILURE,
                    _ => ExitCode::SUCCESS,
                }
            })
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Error");
            ExitCode::FAILURE
        }
    }
}
