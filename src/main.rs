//! Git Log Analyzer - JSON backend proxying the GitHub REST API for the frontend
//!
//! # Usage
//! ```bash
//! git-log-analyzer                                  # Serve on 0.0.0.0:5000
//! git-log-analyzer --port 8080                      # Custom port
//! GITHUB_TOKEN=ghp_... git-log-analyzer             # Authenticated upstream calls
//! APP_ENV=development git-log-analyzer              # Debug logging
//! ```

mod error;
mod github;
mod models;
mod routes;
mod transform;

use std::sync::Arc;

use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use github::{UpstreamClient, UpstreamConfig};

/// Git Log Analyzer - Browse GitHub commit history through a simple JSON API
#[derive(Parser, Debug)]
#[command(name = "git-log-analyzer")]
#[command(about = "A small JSON backend proxying the GitHub REST API", long_about = None)]
struct Cli {
    /// Address to bind the server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to run the server on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    port: u16,

    /// Runtime environment; "development" enables debug logging
    #[arg(long, env = "APP_ENV", default_value = "production")]
    environment: String,

    /// GitHub access token used for upstream requests
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_BASE", default_value = github::client::DEFAULT_API_BASE)]
    api_base: String,
}

impl Cli {
    fn is_debug(&self) -> bool {
        self.environment == "development"
    }

    fn upstream_config(&self) -> UpstreamConfig {
        UpstreamConfig {
            api_base: self.api_base.clone(),
            token: self.github_token.clone().filter(|t| !t.is_empty()),
            ..UpstreamConfig::default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.is_debug() { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = UpstreamClient::new(cli.upstream_config())?;
    if !client.has_token() {
        tracing::warn!("GITHUB_TOKEN is not set; upstream rate limits will be low");
    }

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::create_router(Arc::new(client))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to {}: {}", addr, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    tracing::info!(
        %addr,
        environment = %cli.environment,
        upstream = %cli.api_base,
        "Server started, API available under /api"
    );

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
        tracing::info!("Shutting down");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
