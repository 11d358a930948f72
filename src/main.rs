// src/main.rs

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use hpschd::api::{self, AppState};
use hpschd::config::Config;
use hpschd::tasks::{run_fetch_once, spawn_apod_ticker};

#[derive(Debug, Parser)]
#[command(name = "hpschd", about = "Mesostic poetry engine and web service")]
struct Args {
    /// Log level: DEBUG
    #[arg(long)]
    debug: bool,

    /// Do not start the NASA APOD fetch ticker
    #[arg(long)]
    nofetch: bool,

    /// Bind port override
    #[arg(long, env = "HPSCHD_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.debug { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    if args.debug {
        info!("log level set to DEBUG");
    }

    dotenvy::dotenv().ok();
    let mut config = Config::from_env();
    if let Some(port) = args.port {
        config.port = port;
    }

    let state = Arc::new(AppState::new(config));
    state.store.ensure().await?;

    // Fetching the NASA APOD for the homepage is default behavior; the
    // initial fetch runs before the server starts so the store is never
    // empty on the first visit.
    let ticker = if args.nofetch {
        info!("running with integrated NASA APOD fetch disabled");
        None
    } else {
        if let Err(e) = run_fetch_once(&state, None).await {
            error!(error = %e, "initial APOD fetch failed, continuing without it");
        }
        let every = Duration::from_secs(state.config.fetch_interval_secs);
        Some(spawn_apod_ticker(state.clone(), every))
    };

    let app = api::router(state.clone());
    let bind_address = state.config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "mesostic server listening");

    let server = axum::serve(listener, app);
    match ticker {
        Some(handle) => {
            tokio::select! {
                result = server => {
                    if let Err(e) = result {
                        error!(error = %e, "server error");
                    }
                }
                _ = handle => {
                    error!("APOD ticker unexpectedly terminated");
                }
            }
        }
        None => {
            if let Err(e) = server.await {
                error!(error = %e, "server error");
            }
        }
    }

    Ok(())
}
