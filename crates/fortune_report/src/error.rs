use thiserror::Error;

/// Errors from parsing report inputs at the boundary.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReportError {
    #[error("unknown report theme: {0}")]
    UnknownTheme(String),
}
