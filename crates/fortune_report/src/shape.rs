//! JSON vs prose detection for generated reports.

use serde::{Deserialize, Serialize};

use crate::theme::ALL_THEMES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportShape {
    Json,
    Text,
}

/// Splits a leading code fence off `text`.
///
/// Returns the fence language tag and the fenced body, or `None` when the
/// trimmed text does not open with a fence.
fn split_fence(text: &str) -> Option<(&str, &str)> {
    let rest = text.trim().strip_prefix("```")?;
    let (lang, body) = rest.split_once('\n').unwrap_or((rest, ""));
    let body = body.trim_end();
    let body = body.strip_suffix("```").unwrap_or(body);
    Some((lang.trim(), body.trim()))
}

/// Report body with any surrounding code fence removed.
pub fn strip_fence(text: &str) -> &str {
    match split_fence(text) {
        Some((_, body)) => body,
        None => text.trim(),
    }
}

/// The span from the first `{` to the last `}`, so a lead-in sentence or
/// trailing remark around a JSON object is dropped before parsing.
pub fn json_body(text: &str) -> &str {
    let body = strip_fence(text);
    match (body.find('{'), body.rfind('}')) {
        (Some(start), Some(end)) if start < end => &body[start..=end],
        _ => body,
    }
}

/// Whether an object contains a quoted top-level key of some theme.
fn has_key_marker(text: &str) -> bool {
    text.contains('{')
        && ALL_THEMES
            .iter()
            .flat_map(|t| t.required_keys())
            .any(|key| text.contains(&format!("\"{key}\"")))
}

/// JSON when the body opens with `{`, sits in a ```json fence, or carries
/// a quoted theme key such as `"lifeTimeline"`.
pub fn detect_shape(text: &str) -> ReportShape {
    let fenced_json = split_fence(text).is_some_and(|(lang, _)| lang.eq_ignore_ascii_case("json"));
    if fenced_json || strip_fence(text).starts_with('{') || has_key_marker(text) {
        ReportShape::Json
    } else {
        ReportShape::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_object_is_json() {
        assert_eq!(detect_shape("  {\"a\": 1}\n"), ReportShape::Json);
    }

    #[test]
    fn fenced_json() {
        let text = "```json\n{\"a\": 1}\n```";
        assert_eq!(detect_shape(text), ReportShape::Json);
        assert_eq!(strip_fence(text), "{\"a\": 1}");
    }

    #[test]
    fn key_marker_after_lead_in() {
        let text = "리포트:\n{\"lifeTimeline\": \"사주 점성\", \"keyInsights\": 2}\n끝.";
        assert_eq!(detect_shape(text), ReportShape::Json);
        assert_eq!(json_body(text), "{\"lifeTimeline\": \"사주 점성\", \"keyInsights\": 2}");
    }

    #[test]
    fn key_name_without_object_is_text() {
        assert_eq!(detect_shape("## 인생 흐름\n\"lifeTimeline\" 항목"), ReportShape::Text);
    }

    #[test]
    fn markdown_is_text() {
        assert_eq!(detect_shape("## 인생 흐름\n본문"), ReportShape::Text);
        assert_eq!(detect_shape("```\nplain\n```"), ReportShape::Text);
    }
}
