use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CliError {
    #[error(transparent)]
    Saju(#[from] saju_base::SajuError),
    #[error(transparent)]
    Config(#[from] fortune_config::ConfigError),
    #[error(transparent)]
    Score(#[from] fortune_score::ScoreError),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid input: {0}")]
    Input(String),
}
