use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use palabra_algo::WordEntry;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file {path} unreadable: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog file {path} malformed: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    words: Vec<WordEntry>,
}

/// Read-only word catalog source.
///
/// The catalog is re-read per request, so edits to the words file are
/// picked up without a restart.
#[derive(Debug, Clone)]
pub struct Catalog {
    path: PathBuf,
}

impl Catalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn load(&self) -> Result<Vec<WordEntry>, CatalogError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;

        let file: CatalogFile =
            serde_json::from_slice(&bytes).map_err(|source| CatalogError::Parse {
                path: self.path.clone(),
                source,
            })?;

        Ok(file.words)
    }
}
