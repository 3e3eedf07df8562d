//! Scoring configuration for the fortune pipeline.
//!
//! Category maxima, the base ratio and amplification factor, cross-validation
//! thresholds and grade cut points are product tuning rather than fixed
//! rules. They live here so they can be overridden from a TOML file.

pub mod category;
pub mod config;
pub mod error;

pub use category::{ASTRO_CATEGORIES, Category, GradeScale, SAJU_CATEGORIES};
pub use config::{
    CategoryMaxima, CrossValidation, DEFAULT_AMPLIFICATION, DEFAULT_BASE_RATIO,
    DEFAULT_CALENDAR_CUTS, DEFAULT_DAILY_CUTS, DEFAULT_MAX_ALERTS, ScoringConfig,
};
pub use error::ConfigError;
