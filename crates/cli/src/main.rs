//! # Domainboard API Server
//!
//! Backend for the portfolio and domain-status dashboard.

mod bootstrap;
mod di;

use axum::http::{header, HeaderValue, Method};
use clap::Parser;
use domainboard_api::create_api_routes;
use domainboard_domain::{CliOverrides, Config};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Parser)]
#[command(name = "domainboard")]
#[command(version)]
#[command(about = "Portfolio and domain-status dashboard API server")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<String>,

    /// API port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short, long)]
    bind: Option<String>,

    /// Database URL (e.g. sqlite://./domainboard.db)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(
        cli.config.as_deref(),
        CliOverrides {
            api_port: cli.port,
            bind_address: cli.bind,
            database_url: cli.database_url,
        },
    )?;

    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        api_port = config.server.api_port,
        bind = %config.server.bind_address,
        frontend_origin = %config.server.frontend_origin,
        "Configuration loaded"
    );

    let pool = bootstrap::init_database(&config.database.url).await?;
    let state = di::build_state(&config, pool);

    let app = create_api_routes(state)
        .layer(cors_layer(&config)?)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!(
        "{}:{}",
        config.server.bind_address, config.server.api_port
    )
    .parse()?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS restricted to the configured frontend origin; credentials are
/// allowed so the session cookie travels with requests.
fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let origin: HeaderValue = config.server.frontend_origin.parse()?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}
