use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a FAQ set or building its index.
///
/// Answering a query never fails; every variant here surfaces at startup.
#[derive(Debug, Error)]
pub enum FaqError {
    /// The FAQ set has no entries, so no vocabulary can be built.
    #[error("FAQ corpus is empty: at least one question is required")]
    EmptyCorpus,

    /// The configuration file could not be read.
    #[error("failed to read FAQ config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for a FAQ set.
    #[error("failed to parse FAQ config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Similarity threshold must be finite and within [0, 1].
    #[error("invalid similarity threshold {0}: expected a value in [0, 1]")]
    InvalidThreshold(f64),
}

pub type Result<T> = std::result::Result<T, FaqError>;
