//! Flowgate server binary.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flowgate_core::FlowgateConfig;
use flowgate_server::{build_router, AppState};

/// Flowgate Server - pipeline graph validation over REST
#[derive(Parser, Debug)]
#[command(name = "flowgate-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "FLOWGATE_CONFIG")]
    config: Option<PathBuf>,

    /// Host address to bind to (overrides the configuration file)
    #[arg(long, env = "FLOWGATE_HOST")]
    host: Option<String>,

    /// Port to listen on (overrides the configuration file)
    #[arg(short, long, env = "FLOWGATE_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = FlowgateConfig::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // RUST_LOG wins over the configured filter when both are set.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.filter.clone()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting flowgate server...");
    if let Some(path) = args.config.as_deref() {
        tracing::info!("Configuration file: {}", path.display());
    }
    tracing::info!(
        "Limits: {} nodes, {} edges, {} byte bodies",
        config.limits.max_nodes,
        config.limits.max_edges,
        config.server.max_body_bytes
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = Arc::new(AppState::new(config));

    let app = build_router(state);

    #[cfg(feature = "swagger-ui")]
    let app = {
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;
        tracing::info!("Swagger UI: /swagger-ui");
        app.merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", flowgate_server::ApiDoc::openapi()),
        )
    };

    let app = app.layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Flowgate server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
