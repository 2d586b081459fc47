//! # Gripline Catalog Preview Server
//!
//! Binds the router from [`catalog_web::app`] and serves rendered
//! catalog pages from `GRIPLINE_DATA_DIR`. Logging is JSON via
//! `tracing`, filtered with `RUST_LOG`.

use std::path::PathBuf;

use catalog_web::app::{build_app, AppState};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let data_dir = std::env::var("GRIPLINE_DATA_DIR").unwrap_or_else(|_| {
        tracing::warn!("GRIPLINE_DATA_DIR not set; using ./data");
        "data".to_string()
    });
    let addr = std::env::var("GRIPLINE_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = build_app(AppState {
        data_dir: PathBuf::from(data_dir),
    });

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
