use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use screener_core::traits::IClassifier;
use screener_core::ServerConfig;
use screener_model::OnnxClassifier;
use screener_server::{app, telemetry, AppState, RecordStore};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let config = ServerConfig::load()?;

    // Loaded exactly once; a missing or corrupt artifact is fatal before
    // the server reaches a serving state.
    let classifier = OnnxClassifier::load(&config.model_path)?;
    info!(model = classifier.name(), path = %config.model_path, "classifier loaded");

    let state = Arc::new(AppState {
        classifier: Arc::new(classifier),
        store: RecordStore::new(&config.data_dir),
        static_dir: PathBuf::from(&config.static_dir),
    });

    let router = app::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
