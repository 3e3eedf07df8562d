//! Error types for astrology parsing at the string boundary.

use thiserror::Error;

/// Errors from parsing planet, sign or aspect names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AstroError {
    /// Name is not a supported planet or point.
    #[error("unknown planet: {0:?}")]
    UnknownPlanet(String),
    /// Name is not one of the 12 zodiac signs.
    #[error("unknown zodiac sign: {0:?}")]
    UnknownSign(String),
    /// Name is not a supported aspect.
    #[error("unknown aspect: {0:?}")]
    UnknownAspect(String),
}
