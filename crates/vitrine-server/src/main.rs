use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use vitrine_server::{AppState, build_router};

/// Content gateway for the vitrine marketing site.
#[derive(Debug, Parser)]
#[command(name = "vitrine", version)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "VITRINE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured listen address.
    #[arg(short, long)]
    listen: Option<SocketAddr>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error, Diagnostic)]
enum ServeError {
    #[error("Configuration failed to load")]
    #[diagnostic(
        code(vitrine::config),
        help(
            "Set VITRINE_SPACE_ID, VITRINE_DELIVERY_TOKEN and VITRINE_PREVIEW_TOKEN\n\
             (or their CONTENTFUL_* equivalents), or pass --config with a TOML file."
        )
    )]
    Config(#[source] vitrine_config::ConfigError),

    #[error("Could not build the CMS client")]
    #[diagnostic(code(vitrine::client))]
    Client(#[source] vitrine_api::Error),

    #[error("Could not bind {addr}")]
    #[diagnostic(
        code(vitrine::bind),
        help("Is another process already listening on this address?")
    )]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server terminated unexpectedly")]
    #[diagnostic(code(vitrine::serve))]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(err) = run(args).await {
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(1);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(args: Args) -> Result<(), ServeError> {
    let mut config = vitrine_config::load(args.config.as_deref()).map_err(ServeError::Config)?;
    if let Some(listen) = args.listen {
        config.listen_addr = listen;
    }

    let state = AppState::from_config(&config).map_err(ServeError::Client)?;
    let app = build_router(state);

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: config.listen_addr,
            source,
        })?;
    info!(addr = %config.listen_addr, space = %config.space_id, "gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServeError::Serve)
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            // Registration only fails on fd exhaustion.
            _ => serve_without_shutdown().await,
        }
    }
    #[cfg(not(unix))]
    {
        if tokio::signal::ctrl_c().await.is_err() {
            serve_without_shutdown().await;
        }
    }
}

/// Fallback when no signal handler could be registered. Must never
/// resolve: resolving would start a graceful shutdown and take down a
/// server that was otherwise fine.
async fn serve_without_shutdown() {
    warn!("signal handler registration failed; graceful shutdown disabled");
    std::future::pending::<()>().await;
}
