use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or querying the recommenders and the classifier
#[derive(Debug, Error)]
pub enum RecommendError {
    /// Dataset is unusable: missing required columns or nothing left after filtering
    #[error("data error: {0}")]
    Data(String),

    /// Row index outside `[0, len)`
    #[error("invalid index {index}: dataset has {len} rows")]
    Index { index: usize, len: usize },

    #[error("empty query: at least one non-blank query term is required")]
    EmptyQuery,

    /// Fewer training samples than neighbours requested
    #[error("cannot fit k-nearest-neighbour model with k = {k} on {samples} samples")]
    ModelFit { samples: usize, k: usize },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("artifact error: {0}")]
    Artifact(#[from] serde_cbor::Error),

    #[error("failed to write artifact {path}: {source}")]
    ArtifactIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RecommendError {
    pub(crate) fn missing_column(feature: &str, column: &str) -> Self {
        RecommendError::Data(format!("{feature} dataset is missing required column '{column}'"))
    }
}

pub type Result<T> = std::result::Result<T, RecommendError>;
