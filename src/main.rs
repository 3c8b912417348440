use std::sync::Arc;

use clap::Parser;

use clipdex::catalog::metadata::NoopProber;
use clipdex::{cli, config, http};

/// Wait for the first Ctrl+C (graceful shutdown). A second Ctrl+C while the
/// server is draining force-exits immediately.
async fn wait_for_shutdown() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    tracing::info!("Shutting down...");
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\nclipdex: forced exit");
            std::process::exit(1);
        }
    });
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = cli::Args::parse();

    let file_config = config::find_config_file(args.config.as_deref()).and_then(|path| {
        match config::load_config(&path) {
            Ok(cfg) => {
                tracing::debug!("Loaded config from {}", path.display());
                Some(cfg)
            }
            Err(e) => {
                tracing::warn!("Failed to parse config file: {}", e);
                None
            }
        }
    });

    let config = Arc::new(config::Config::resolve(file_config, &args));

    if config.video_root.exists() && !config.video_root.is_dir() {
        eprintln!(
            "error: video root is not a directory: {}",
            config.video_root.display()
        );
        std::process::exit(1);
    }

    tracing::info!(
        "clipdex serving {} (previews: {}) on port {}",
        config.video_root.display(),
        config.preview_root.display(),
        config.port
    );

    let state = http::state::AppState {
        config: Arc::clone(&config),
        prober: Arc::new(NoopProber),
    };
    let app = http::build_router(state);

    let addr = if config.localhost {
        format!("127.0.0.1:{}", config.port)
    } else {
        format!("0.0.0.0:{}", config.port)
    };
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap_or_else(|e| {
        eprintln!("error: failed to bind {}: {}", addr, e);
        std::process::exit(1);
    });
    tracing::info!("Catalog available at http://{}/api/videos", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await
        .unwrap_or_else(|e| tracing::error!("HTTP server error: {}", e));

    tracing::info!("Goodbye.");
}
