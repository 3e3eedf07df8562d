//! End-to-end day analysis scenarios.

use astro_base::{Planet, PlanetPosition};
use chrono::NaiveDate;
use fortune_config::{GradeScale, ScoringConfig};
use fortune_score::{
    FactorKey, NatalProfile, TransitSnapshot, analyze_day, analyze_month, analyze_range,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn profile() -> NatalProfile {
    let mut p = NatalProfile::from_birth(date(1990, 5, 15), Some(10)).unwrap();
    p.planets = vec![
        PlanetPosition::new(Planet::Sun, 54.0),
        PlanetPosition::new(Planet::Moon, 200.0),
    ];
    p
}

#[test]
fn analysis_fields_consistent() {
    let config = ScoringConfig::default();
    let p = profile();
    for scale in [GradeScale::Calendar, GradeScale::Daily] {
        for a in analyze_month(&p, 2026, 10, scale, &config) {
            assert!(a.grade <= scale.worst());
            assert!(a.total_score <= 100);
            assert!(a.alerts.len() <= config.max_alerts);
            assert!(a.saju_factor_keys.iter().all(|k| k.is_saju()));
            assert!(a.astro_factor_keys.is_empty());
            assert!((1..=9).contains(&a.lucky_number));
            assert!(a.category_scores.iljin <= config.maxima.iljin);
            assert_eq!(a.grade, config.grade_for(a.total_score as f64, scale));
        }
    }
}

#[test]
fn transits_feed_astro_keys() {
    let config = ScoringConfig::default();
    let snap = TransitSnapshot {
        date: date(2026, 5, 15),
        planets: vec![
            // Solar return, full Moon, Mercury retrograde
            PlanetPosition::new(Planet::Sun, 54.3),
            PlanetPosition::new(Planet::Moon, 236.0),
            PlanetPosition::new(Planet::Mercury, 40.0).with_speed(-0.5),
        ],
    };
    let a = analyze_day(&profile(), &snap, GradeScale::Daily, &config);
    let keys = &a.astro_factor_keys;
    assert!(keys.contains(FactorKey::SolarReturn));
    assert!(keys.contains(FactorKey::FullMoon));
    assert!(keys.contains(FactorKey::RetrogradeMercury));
    assert_eq!(a.category_scores.solar_return, config.maxima.solar_return);
}

#[test]
fn range_matches_single_days() {
    let config = ScoringConfig::default();
    let p = profile();
    let snaps: Vec<TransitSnapshot> = (1..=5)
        .rev()
        .map(|d| TransitSnapshot::empty(date(2026, 7, d)))
        .collect();
    let range = analyze_range(&p, &snaps, GradeScale::Calendar, &config);
    assert_eq!(range.len(), 5);
    for a in &range {
        let single = analyze_day(&p, &TransitSnapshot::empty(a.date), GradeScale::Calendar, &config);
        assert_eq!(&single, a);
    }
}

#[test]
fn serializes_camel_case() {
    let config = ScoringConfig::default();
    let a = analyze_day(
        &profile(),
        &TransitSnapshot::empty(date(2026, 10, 19)),
        GradeScale::Daily,
        &config,
    );
    let json = serde_json::to_value(&a).unwrap();
    for key in [
        "sajuFactorKeys",
        "astroFactorKeys",
        "categoryScores",
        "crossVerified",
        "totalScore",
        "areaScores",
        "luckyNumber",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert!(json["categoryScores"].get("transitSun").is_some());
}
