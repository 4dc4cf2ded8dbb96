pub mod catalog;
pub mod config;
pub mod logging;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::state::AppState;
use crate::store::{FileStore, ProgressStore, SqliteStore, StoreError};

/// Build the progress store the config asks for: SQLite when
/// `DATABASE_URL` is set, the flat JSON file otherwise.
pub async fn create_store(config: &Config) -> Result<Arc<dyn ProgressStore>, StoreError> {
    match &config.database_url {
        Some(url) => Ok(Arc::new(SqliteStore::connect(url).await?)),
        None => Ok(Arc::new(FileStore::new(&config.progress_file))),
    }
}

/// Assemble the full application router. Used by `main` and by the
/// integration tests.
pub async fn create_app(config: &Config) -> Result<axum::Router, StoreError> {
    let store = create_store(config).await?;
    let state = AppState::new(Catalog::new(&config.words_file), store);

    Ok(routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()))
}
