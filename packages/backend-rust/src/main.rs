use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use palabra_backend_rust::catalog::Catalog;
use palabra_backend_rust::config::Config;
use palabra_backend_rust::logging;
use palabra_backend_rust::routes;
use palabra_backend_rust::state::AppState;
use palabra_backend_rust::store::{FileStore, ProgressStore, SqliteStore};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    let _log_guard = logging::init_tracing(&config.log_level);

    // SQLite when DATABASE_URL is set; on a connect failure fall back
    // to the flat file rather than refusing to start.
    let store: Arc<dyn ProgressStore> = match &config.database_url {
        Some(url) => match SqliteStore::connect(url).await {
            Ok(store) => Arc::new(store),
            Err(err) => {
                tracing::warn!(error = %err, "sqlite store not initialized, using file store");
                Arc::new(FileStore::new(&config.progress_file))
            }
        },
        None => Arc::new(FileStore::new(&config.progress_file)),
    };

    tracing::info!(
        backend = store.backend(),
        words_file = %config.words_file.display(),
        "progress store ready"
    );

    let state = AppState::new(Catalog::new(&config.words_file), store);

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.bind_addr();
    tracing::info!(%addr, "palabra backend listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("bind listener failed");

    let server = axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal());

    if let Err(e) = server.await {
        tracing::error!(error = %e, "server error");
    }

    tracing::info!("HTTP server stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
