//! Post-hoc checks for generated fortune reports.
//!
//! This crate provides:
//! - Report themes with their required JSON keys and section headings
//! - JSON vs prose shape detection
//! - Advisory validation producing [`ValidationWarning`]s
//! - Sanitization of active HTML/script content

pub mod error;
pub mod sanitize;
pub mod shape;
pub mod theme;
pub mod validate;

pub use error::ReportError;
pub use sanitize::{cleanse_json, cleanse_markdown, cleanse_text};
pub use shape::{ReportShape, detect_shape, json_body, strip_fence};
pub use theme::{ALL_THEMES, ReportTheme};
pub use validate::{
    ASTRO_KEYWORDS, SAJU_KEYWORDS, ValidationWarning, WarningKind, has_cross_reference,
    validate_report, validate_report_for,
};
