//! Advisory structural checks on generated reports.
//!
//! Nothing here fails: every problem becomes a [`ValidationWarning`] and the
//! caller decides whether to regenerate, log or serve the report anyway.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::shape::{ReportShape, detect_shape, json_body};
use crate::theme::ReportTheme;

/// Saju vocabulary; a report must mention at least one.
pub const SAJU_KEYWORDS: [&str; 4] = ["사주", "오행", "십신", "대운"];
/// Astrology vocabulary; a report must mention at least one.
pub const ASTRO_KEYWORDS: [&str; 5] = ["점성", "행성", "하우스", "트랜짓", "별자리"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    MissingSection,
    MissingJsonKey,
    JsonParseError,
    MissingCrossReference,
}

impl WarningKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingSection => "missing_section",
            Self::MissingJsonKey => "missing_json_key",
            Self::JsonParseError => "json_parse_error",
            Self::MissingCrossReference => "missing_cross_reference",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationWarning {
    #[serde(rename = "type")]
    pub kind: WarningKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ValidationWarning {
    fn new(kind: WarningKind, message: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail,
        }
    }
}

/// True when the text mentions both Saju and astrology vocabulary.
pub fn has_cross_reference(text: &str) -> bool {
    SAJU_KEYWORDS.iter().any(|k| text.contains(k)) && ASTRO_KEYWORDS.iter().any(|k| text.contains(k))
}

fn check_json(theme: Option<ReportTheme>, body: &str, out: &mut Vec<ValidationWarning>) {
    let value: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => {
            out.push(ValidationWarning::new(
                WarningKind::JsonParseError,
                "리포트 JSON을 해석할 수 없습니다.",
                Some(e.to_string()),
            ));
            return;
        }
    };
    let Some(theme) = theme else { return };
    let object = value.as_object();
    for key in theme.required_keys() {
        if !object.is_some_and(|o| o.contains_key(*key)) {
            out.push(ValidationWarning::new(
                WarningKind::MissingJsonKey,
                format!("필수 JSON 키가 없습니다: {key}"),
                Some(format!("theme={theme}")),
            ));
        }
    }
}

fn check_sections(theme: Option<ReportTheme>, text: &str, out: &mut Vec<ValidationWarning>) {
    let Some(theme) = theme else { return };
    for section in theme.required_sections() {
        if !text.contains(section) {
            out.push(ValidationWarning::new(
                WarningKind::MissingSection,
                format!("필수 섹션이 없습니다: {section}"),
                Some(format!("theme={theme}")),
            ));
        }
    }
}

/// Validate a report for a known theme, or cross references only when
/// `theme` is `None`.
pub fn validate_report_for(theme: Option<ReportTheme>, text: &str) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    match detect_shape(text) {
        ReportShape::Json => check_json(theme, json_body(text), &mut warnings),
        ReportShape::Text => check_sections(theme, text, &mut warnings),
    }
    if !has_cross_reference(text) {
        warnings.push(ValidationWarning::new(
            WarningKind::MissingCrossReference,
            "사주와 점성술 관점이 함께 언급되지 않았습니다.",
            None,
        ));
    }
    for w in &warnings {
        warn!(kind = w.kind.as_str(), detail = ?w.detail, "{}", w.message);
    }
    warnings
}

/// Validate a report by theme name. Unknown names get the cross-reference
/// check only.
pub fn validate_report(theme: &str, text: &str) -> Vec<ValidationWarning> {
    validate_report_for(theme.parse().ok(), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&WarningKind::MissingJsonKey).unwrap();
        assert_eq!(json, "\"missing_json_key\"");
    }

    #[test]
    fn cross_reference_needs_both() {
        assert!(has_cross_reference("사주와 행성"));
        assert!(!has_cross_reference("사주만"));
        assert!(!has_cross_reference("별자리만"));
    }

    #[test]
    fn unrelated_object_misses_every_key() {
        let w = validate_report("life", "{ \"note\": \"사주 점성\" }");
        let missing = w.iter().filter(|w| w.kind == WarningKind::MissingJsonKey).count();
        assert_eq!(missing, 3);
    }
}
