use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use query_relay::config::load_config;
use query_relay::lifecycle::{wait_for_signal, Shutdown};
use query_relay::observability::{init_tracing, ConsoleReporter};
use query_relay::RelayServer;

#[derive(Parser)]
#[command(name = "query-relay")]
#[command(about = "Relay queries to a collaborator service over HTTP", long_about = None)]
struct Args {
    /// TOML settings file; environment variables still take precedence.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Must run before the config is resolved so its variables are visible.
    let dotenv = dotenv::dotenv();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("query-relay: invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.observability);

    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "Loaded .env file"),
        Err(e) => tracing::info!(error = %e, "Error loading .env file, using default configurations"),
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.url,
        allowed_origins = ?config.cors.allowed_origins,
        "Configuration loaded"
    );

    let reporter = Arc::new(ConsoleReporter::new(config.observability.ansi));
    let bind_address = config.listener.bind_address.clone();

    let server = match RelayServer::new(config, reporter) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build server");
            return ExitCode::FAILURE;
        }
    };

    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(address = %bind_address, error = %e, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    let shutdown = Shutdown::new();
    let signal = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    if let Err(e) = server.run(listener, signal).await {
        tracing::error!(error = %e, "Server terminated with error");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
