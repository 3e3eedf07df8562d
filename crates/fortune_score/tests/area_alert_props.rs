//! Property checks for area scores, alerts and the lucky number.

use std::collections::HashSet;

use chrono::NaiveDate;
use fortune_score::{
    ALL_AREAS, ALL_FACTOR_KEYS, AlertKind, FactorKey, FactorSet, calculate_adjusted_score,
    calculate_area_scores, generate_alerts, get_lucky_number,
};
use fortune_config::ScoringConfig;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Factor sets used as "everything else" backgrounds.
fn backgrounds(excluded: FactorKey) -> Vec<(FactorSet, FactorSet)> {
    let others = |pred: fn(&FactorKey) -> bool| -> FactorSet {
        ALL_FACTOR_KEYS
            .into_iter()
            .filter(|k| *k != excluded && pred(k))
            .collect()
    };
    vec![
        (FactorSet::new(), FactorSet::new()),
        (others(|k| k.is_saju()), others(|k| k.is_astro())),
        (others(|k| k.weight() > 0.0 && k.is_saju()), others(|k| k.weight() > 0.0 && k.is_astro())),
        (others(|k| k.weight() < 0.0 && k.is_saju()), others(|k| k.weight() < 0.0 && k.is_astro())),
    ]
}

fn with(set: &FactorSet, key: FactorKey) -> FactorSet {
    let mut s = set.clone();
    s.insert(key);
    s
}

// ---------------------------------------------------------------------------
// Area scores
// ---------------------------------------------------------------------------

#[test]
fn area_scores_bounded() {
    let mut d = date(2025, 1, 1);
    for overall in (0..=100).step_by(5) {
        for (saju, astro) in backgrounds(FactorKey::DohwaDay) {
            let s = calculate_area_scores(overall as f64, &saju, &astro, d);
            for a in ALL_AREAS {
                assert!((15..=95).contains(&s.get(a)), "{a:?} {}", s.get(a));
            }
        }
        d = d.succ_opt().unwrap();
    }
}

fn check_monotone(key: FactorKey, pick: fn(&fortune_score::AreaScores) -> u8, raises: bool) {
    let mut d = date(2024, 6, 1);
    for overall in 0..=100 {
        for (saju, astro) in backgrounds(key) {
            let without = pick(&calculate_area_scores(overall as f64, &saju, &astro, d));
            let with_key = pick(&calculate_area_scores(overall as f64, &with(&saju, key), &astro, d));
            if raises {
                assert!(with_key > without, "{key} overall={overall} {d}");
            } else {
                assert!(with_key < without, "{key} overall={overall} {d}");
            }
        }
        d = d.succ_opt().unwrap();
    }
}

#[test]
fn dohwa_raises_love() {
    check_monotone(FactorKey::DohwaDay, |s| s.love, true);
}

#[test]
fn geonrok_raises_career() {
    check_monotone(FactorKey::GeonrokDay, |s| s.career, true);
}

#[test]
fn chung_lowers_health() {
    check_monotone(FactorKey::BranchChung, |s| s.health, false);
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

#[test]
fn alert_guarantees_over_all_grades() {
    let saju: FactorSet = ALL_FACTOR_KEYS.into_iter().filter(|k| k.is_saju()).collect();
    let astro: FactorSet = ALL_FACTOR_KEYS.into_iter().filter(|k| k.is_astro()).collect();
    for grade in 0..=5u8 {
        for cross in [false, true] {
            for (s, a) in [(&saju, &astro), (&FactorSet::new(), &FactorSet::new())] {
                let alerts = generate_alerts(grade, s, a, cross);
                assert!(alerts.len() <= 5);
                let unique: HashSet<&str> = alerts.iter().map(|x| x.message.as_str()).collect();
                assert_eq!(unique.len(), alerts.len());
                if grade <= 1 {
                    assert!(alerts.iter().any(|x| x.kind == AlertKind::Positive));
                }
                if grade >= 4 {
                    assert!(alerts.iter().any(|x| x.kind == AlertKind::Warning));
                }
            }
        }
    }
}

#[test]
fn cross_alert_when_room() {
    let alerts = generate_alerts(2, &FactorSet::new(), &FactorSet::new(), true);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::Positive);
}

// ---------------------------------------------------------------------------
// Lucky number and scoring scenario
// ---------------------------------------------------------------------------

#[test]
fn lucky_number_deterministic_in_range() {
    let birth = date(1988, 12, 31);
    let mut d = date(2026, 1, 1);
    for _ in 0..366 {
        let n = get_lucky_number(d, birth);
        assert!((1..=9).contains(&n));
        assert_eq!(n, get_lucky_number(d, birth));
        d = d.succ_opt().unwrap();
    }
}

#[test]
fn iljin_scenario_twelve_point_seven() {
    assert_eq!(calculate_adjusted_score(13.0, &[0.18], &ScoringConfig::default()), 12.7);
}
