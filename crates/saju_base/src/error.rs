//! Error types for Saju parsing at the string boundary.

use thiserror::Error;

/// Errors from parsing Saju symbols or building pillars.
///
/// Lookups on already-typed values never fail; these errors only arise when
/// converting external strings or raw numbers into typed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SajuError {
    /// Name is not one of the 10 stems (hangul or hanja).
    #[error("unknown stem: {0:?}")]
    UnknownStem(String),
    /// Name is not one of the 12 branches (hangul or hanja).
    #[error("unknown branch: {0:?}")]
    UnknownBranch(String),
    /// Name is not one of the 5 elements.
    #[error("unknown element: {0:?}")]
    UnknownElement(String),
    /// Stem and branch have different polarity and cannot form a pillar.
    #[error("stem {stem} and branch {branch} differ in polarity")]
    PolarityMismatch {
        /// Stem name.
        stem: &'static str,
        /// Branch name.
        branch: &'static str,
    },
    /// Clock hour outside 0..=23.
    #[error("hour out of range: {0}")]
    InvalidHour(u32),
}
