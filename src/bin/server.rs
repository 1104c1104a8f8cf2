//! leave-desk HTTP server binary.
//!
//! Loads the configuration, seeds the data context and serves the holiday
//! and report endpoints.
//!
//! # Usage
//!
//! ```bash
//! LEAVE_DESK_CONFIG=config/leave_desk.yaml cargo run --bin leave-desk-server
//! ```
//!
//! # Environment Variables
//!
//! - `LEAVE_DESK_CONFIG`: Configuration file (default: config/leave_desk.yaml)
//! - `HOST`: Overrides `server.host`
//! - `PORT`: Overrides `server.port`
//! - `RUST_LOG`: Log filter directives, e.g. `info,leave_desk=debug`
//!   (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use leave_desk::api::{AppState, create_router};
use leave_desk::config::ConfigLoader;
use leave_desk::context::DataContext;
use leave_desk::holidays::TracingNotifier;

const DEFAULT_CONFIG_PATH: &str = "config/leave_desk.yaml";
const DEFAULT_LOG_FILTER: &str = "info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();

    let config_path = env::var("LEAVE_DESK_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = ConfigLoader::load(&config_path)?;
    info!(path = %config_path, "Configuration loaded");

    let context = match &config.config().data.seed_path {
        Some(path) => DataContext::from_seed_file(path)?,
        None => {
            info!("No seed file configured, starting empty");
            DataContext::default()
        }
    };

    let host = env::var("HOST").unwrap_or_else(|_| config.config().server.host.clone());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.config().server.port);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    let state = AppState::new(config, context, Arc::new(TracingNotifier));
    let app = create_router(state);

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
