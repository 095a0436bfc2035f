// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between a URL and the output file.
///
/// `BlankName` rejects a whole reconcile call before any state is touched.
/// `Fetch`/`PageStructure` are skippable per subject; the runner only treats
/// them as fatal for the default ranking. `Persist`/`Encode` are always fatal.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid input: blank university name at row {row}")]
    BlankName { row: usize },

    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("page structure not found: {what}")]
    PageStructure { what: &'static str },

    #[error("cannot write {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode dataset: {source}")]
    Encode {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<serde_json::Error> for ScrapeError {
    fn from(source: serde_json::Error) -> Self {
        Self::Encode {
            source: Box::new(source),
        }
    }
}
