//! User-facing alerts from grade, factor keys and cross-validation.
//!
//! Priority order: grade alerts, then factor alerts in the order the keys
//! were supplied (Saju keys before astrology keys), then the cross-validation
//! alert. Duplicates by message are dropped and the list is capped.

use serde::{Deserialize, Serialize};

use fortune_config::DEFAULT_MAX_ALERTS;

use crate::factor::{FactorKey, FactorSet};

/// Alert tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Positive,
    Info,
    Warning,
}

/// One alert line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    fn new(kind: AlertKind, message: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
        }
    }
}

fn grade_alert(grade: u8) -> Option<Alert> {
    match grade {
        0 => Some(Alert::new(
            AlertKind::Positive,
            "최고의 기운이 흐르는 날입니다. 중요한 일을 추진하기 좋습니다.",
        )),
        1 => Some(Alert::new(
            AlertKind::Positive,
            "좋은 기운이 함께하는 날입니다. 적극적으로 움직여 보세요.",
        )),
        2 | 3 => None,
        _ => Some(Alert::new(
            AlertKind::Warning,
            "기운이 크게 약한 날입니다. 중요한 결정과 계약은 미루세요.",
        )),
    }
}

/// Secondary warning for a negative key.
fn negative_alert(key: FactorKey) -> Option<Alert> {
    let message = match key {
        FactorKey::BranchChung => "충(沖)의 기운이 있어 갈등과 급한 변화에 주의하세요.",
        FactorKey::BranchXing => "형(刑)의 기운이 있어 구설과 다툼을 조심하세요.",
        FactorKey::GongmangDay => "공망일이라 계획한 일이 허사가 되기 쉽습니다. 신중하세요.",
        _ => return None,
    };
    Some(Alert::new(AlertKind::Warning, message))
}

/// Targeted alert shown whenever the key is present.
fn factor_alert(key: FactorKey) -> Option<Alert> {
    let (kind, message) = match key {
        FactorKey::CheoneulGwiin => (
            AlertKind::Positive,
            "천을귀인이 돕는 날입니다. 귀인의 도움을 기대해 보세요.",
        ),
        FactorKey::DohwaDay => (
            AlertKind::Info,
            "도화의 기운으로 매력과 인기가 높아지는 날입니다.",
        ),
        FactorKey::RetrogradeMercury => (
            AlertKind::Warning,
            "수성 역행 중입니다. 계약서와 연락 내용을 다시 확인하세요.",
        ),
        FactorKey::RetrogradeVenus => (
            AlertKind::Warning,
            "금성 역행 중입니다. 관계와 지출 결정은 신중히 하세요.",
        ),
        FactorKey::RetrogradeMars => (
            AlertKind::Warning,
            "화성 역행 중입니다. 무리한 추진과 충돌을 피하세요.",
        ),
        FactorKey::VoidOfCourseMoon => (
            AlertKind::Info,
            "보이드 문 구간입니다. 새로운 일의 시작은 잠시 미루세요.",
        ),
        _ => return None,
    };
    Some(Alert::new(kind, message))
}

const CROSS_VERIFIED_MESSAGE: &str = "사주와 점성술이 모두 좋은 흐름을 가리키는 날입니다.";

/// Alerts capped at [`DEFAULT_MAX_ALERTS`].
pub fn generate_alerts(
    grade: u8,
    saju_keys: &FactorSet,
    astro_keys: &FactorSet,
    cross_verified: bool,
) -> Vec<Alert> {
    generate_alerts_capped(grade, saju_keys, astro_keys, cross_verified, DEFAULT_MAX_ALERTS)
}

/// Alerts for a grade, factor keys and cross-validation flag.
///
/// Grades 0 and 1 open with a positive alert; grade 3 adds a warning per
/// clash, punishment or void-day key; grade 4 and worse open with an urgent
/// warning followed by the same secondary warnings.
pub fn generate_alerts_capped(
    grade: u8,
    saju_keys: &FactorSet,
    astro_keys: &FactorSet,
    cross_verified: bool,
    cap: usize,
) -> Vec<Alert> {
    let mut candidates = Vec::new();
    candidates.extend(grade_alert(grade));
    if grade >= 3 {
        candidates.extend(saju_keys.iter().filter_map(negative_alert));
    }
    candidates.extend(saju_keys.iter().chain(astro_keys.iter()).filter_map(factor_alert));
    if cross_verified {
        candidates.push(Alert::new(AlertKind::Positive, CROSS_VERIFIED_MESSAGE));
    }

    let mut out: Vec<Alert> = Vec::with_capacity(cap);
    for alert in candidates {
        if out.len() == cap {
            break;
        }
        if !out.iter().any(|a| a.message == alert.message) {
            out.push(alert);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &[FactorKey]) -> FactorSet {
        list.iter().copied().collect()
    }

    #[test]
    fn top_grades_positive_first() {
        for g in [0, 1] {
            let a = generate_alerts(g, &FactorSet::new(), &FactorSet::new(), false);
            assert_eq!(a[0].kind, AlertKind::Positive);
        }
    }

    #[test]
    fn middle_grade_silent_without_factors() {
        assert!(generate_alerts(2, &FactorSet::new(), &FactorSet::new(), false).is_empty());
    }

    #[test]
    fn grade_three_negatives() {
        let s = keys(&[FactorKey::GongmangDay, FactorKey::BranchChung, FactorKey::BranchHai]);
        let a = generate_alerts(3, &s, &FactorSet::new(), false);
        assert_eq!(a.len(), 2);
        assert!(a.iter().all(|x| x.kind == AlertKind::Warning));
        assert!(a[0].message.contains("공망"));
    }

    #[test]
    fn negatives_ignored_on_good_grades() {
        let s = keys(&[FactorKey::BranchChung]);
        let a = generate_alerts(1, &s, &FactorSet::new(), false);
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn urgent_warning_first() {
        let a = generate_alerts(4, &FactorSet::new(), &FactorSet::new(), false);
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].kind, AlertKind::Warning);
    }

    #[test]
    fn capped_with_priority() {
        let s = keys(&[
            FactorKey::BranchChung,
            FactorKey::BranchXing,
            FactorKey::GongmangDay,
            FactorKey::CheoneulGwiin,
            FactorKey::DohwaDay,
        ]);
        let astro = keys(&[FactorKey::RetrogradeMercury, FactorKey::VoidOfCourseMoon]);
        let a = generate_alerts(5, &s, &astro, true);
        assert_eq!(a.len(), 5);
        assert_eq!(a[0].kind, AlertKind::Warning);
        assert!(a[4].message.contains("천을귀인"));
    }

    #[test]
    fn serde_shape() {
        let a = Alert::new(AlertKind::Info, "x");
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"{"type":"info","message":"x"}"#);
    }
}
