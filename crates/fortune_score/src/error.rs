//! Error types for the scoring pipeline.

use saju_base::SajuError;
use thiserror::Error;

/// Errors at the string and profile boundary of the scoring pipeline.
///
/// Scoring itself never fails: values clamp and unknown lookups fall back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ScoreError {
    /// Tag is not a known factor key.
    #[error("unknown factor key: {0:?}")]
    UnknownFactor(String),
    /// Birth data could not be turned into a chart.
    #[error(transparent)]
    Saju(#[from] SajuError),
}
