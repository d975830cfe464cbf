use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::prelude::*;

mod api;
mod config;
mod core;
mod models;
#[cfg(test)]
mod test_support;
mod utils;

#[tokio::main]
async fn main() {
    // A missing .env is fine; the environment may already carry everything.
    let _ = dotenvy::dotenv();

    let config = match config::Config::init() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", utils::Error::from(e));
            std::process::exit(1);
        }
    };
    init_logging(&config);

    if let Err(e) = serve(config).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn init_logging(config: &crate::config::Config) {
    let level = Level::from_str(&config.logs.level).unwrap_or(Level::INFO);
    let mut targets = Targets::new().with_default(level);
    if !config.logs.enable_reqwest_logging {
        targets = targets
            .with_target("reqwest", LevelFilter::OFF)
            .with_target("hyper", LevelFilter::OFF)
            .with_target("hyper_util", LevelFilter::OFF);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(targets)
        .init();
}

async fn serve(config: crate::config::Config) -> utils::MoviehookResult<()> {
    if config.tmdb.bearer_token.is_empty() {
        tracing::warn!("No TMDB bearer token configured, searches will be rejected upstream");
    }
    if config.webhook.url.is_empty() {
        tracing::warn!("No webhook URL configured, deliveries will fail");
    }

    let state = api::AppState::from_config(&config)?;
    let app = api::build_router(state, &config.server.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_address)
        .await
        .map_err(|e| {
            utils::Error::Other(format!(
                "Failed to bind '{}': {e}",
                config.server.bind_address
            ))
        })?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    tracing::info!("Shutdown signal received");
}
