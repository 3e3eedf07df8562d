//! Day analysis: the full flow from chart and transits to grade and alerts.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use astro_base::PlanetPosition;
use fortune_config::{GradeScale, ScoringConfig};
use saju_base::{Element, Pillar, SajuChart, saju_chart};

use crate::adjust::{AdjustmentInput, CategoryAdjustments};
use crate::alerts::{Alert, generate_alerts_capped};
use crate::area::{AreaScores, calculate_area_scores, get_lucky_number, lucky_color};
use crate::astro_factors::extract_astro_factors;
use crate::error::ScoreError;
use crate::factor::FactorSet;
use crate::saju_factors::{TargetPillars, extract_saju_factors};
use crate::scoring::{CategoryScores, summarize};

/// Natal data for one person, as supplied by the chart provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NatalProfile {
    pub birth_date: NaiveDate,
    /// Clock hour 0..=23 when the birth time is known.
    #[serde(default)]
    pub birth_hour: Option<u32>,
    pub saju: SajuChart,
    /// Favourable element (용신), when determined.
    #[serde(default)]
    pub yongsin: Option<Element>,
    /// Current ten-year luck pillar (대운), when determined.
    #[serde(default)]
    pub daeun: Option<Pillar>,
    #[serde(default)]
    pub planets: Vec<PlanetPosition>,
}

impl NatalProfile {
    /// Profile with the Saju chart computed from the civil birth date.
    pub fn from_birth(birth_date: NaiveDate, birth_hour: Option<u32>) -> Result<Self, ScoreError> {
        Ok(Self {
            birth_date,
            birth_hour,
            saju: saju_chart(birth_date, birth_hour)?,
            yongsin: None,
            daeun: None,
            planets: Vec::new(),
        })
    }
}

/// Transiting placements for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitSnapshot {
    pub date: NaiveDate,
    #[serde(default)]
    pub planets: Vec<PlanetPosition>,
}

impl TransitSnapshot {
    /// Snapshot with no placements; only Saju factors will be scored.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            planets: Vec::new(),
        }
    }
}

/// Result of analysing one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAnalysis {
    pub date: NaiveDate,
    pub day_pillar: String,
    pub saju_factor_keys: FactorSet,
    pub astro_factor_keys: FactorSet,
    pub category_scores: CategoryScores,
    pub saju_total: f64,
    pub astro_total: f64,
    pub cross_adjustment: f64,
    pub cross_verified: bool,
    pub total_score: u8,
    pub grade: u8,
    pub grade_label: String,
    pub alerts: Vec<Alert>,
    pub area_scores: AreaScores,
    pub lucky_number: u8,
    pub lucky_color: String,
}

/// Analyse one date for a natal profile.
pub fn analyze_day(
    profile: &NatalProfile,
    transit: &TransitSnapshot,
    scale: GradeScale,
    config: &ScoringConfig,
) -> DayAnalysis {
    let target = TargetPillars::for_date(transit.date);
    let saju_keys = extract_saju_factors(&profile.saju, &target);
    let astro_keys = extract_astro_factors(&profile.planets, &transit.planets);

    let adjustments = CategoryAdjustments::build(&AdjustmentInput {
        natal_saju: &profile.saju,
        daeun: profile.daeun,
        yongsin: profile.yongsin,
        target: &target,
        natal_planets: &profile.planets,
        transit_planets: &transit.planets,
        saju_keys: &saju_keys,
        astro_keys: &astro_keys,
    });
    let summary = summarize(&adjustments, scale, config);
    let alerts = generate_alerts_capped(
        summary.grade,
        &saju_keys,
        &astro_keys,
        summary.cross.verified,
        config.max_alerts,
    );
    let area_scores =
        calculate_area_scores(summary.total as f64, &saju_keys, &astro_keys, transit.date);
    debug!(
        date = %transit.date,
        saju = ?saju_keys.tags(),
        astro = ?astro_keys.tags(),
        "analyzed day"
    );

    DayAnalysis {
        date: transit.date,
        day_pillar: target.day.name(),
        lucky_number: get_lucky_number(transit.date, profile.birth_date),
        lucky_color: lucky_color(target.day.stem).to_string(),
        saju_factor_keys: saju_keys,
        astro_factor_keys: astro_keys,
        category_scores: summary.categories,
        saju_total: summary.saju_total,
        astro_total: summary.astro_total,
        cross_adjustment: summary.cross.adjustment,
        cross_verified: summary.cross.verified,
        total_score: summary.total,
        grade: summary.grade,
        grade_label: summary.grade_label,
        alerts,
        area_scores,
    }
}

/// Analyse a series of snapshots, returned in date order.
pub fn analyze_range(
    profile: &NatalProfile,
    transits: &[TransitSnapshot],
    scale: GradeScale,
    config: &ScoringConfig,
) -> Vec<DayAnalysis> {
    let mut out: Vec<DayAnalysis> = transits
        .iter()
        .map(|t| analyze_day(profile, t, scale, config))
        .collect();
    out.sort_by_key(|a| a.date);
    out
}

/// Saju-only analysis for every day of a calendar month.
///
/// Returns an empty list for an invalid year/month.
pub fn analyze_month(
    profile: &NatalProfile,
    year: i32,
    month: u32,
    scale: GradeScale,
    config: &ScoringConfig,
) -> Vec<DayAnalysis> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .map(|d| analyze_day(profile, &TransitSnapshot::empty(d), scale, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> NatalProfile {
        NatalProfile::from_birth(NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(), Some(10)).unwrap()
    }

    #[test]
    fn invalid_hour_rejected() {
        let date = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap();
        let err = NatalProfile::from_birth(date, Some(24));
        assert!(matches!(err, Err(ScoreError::Saju(_))));
    }

    #[test]
    fn month_has_every_day() {
        let config = ScoringConfig::default();
        let days = analyze_month(&profile(), 2024, 2, GradeScale::Calendar, &config);
        assert_eq!(days.len(), 29);
        assert!(days.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn bad_month_empty() {
        let config = ScoringConfig::default();
        assert!(analyze_month(&profile(), 2024, 13, GradeScale::Daily, &config).is_empty());
    }

    #[test]
    fn range_sorted() {
        let p = profile();
        let snaps = [
            TransitSnapshot::empty(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()),
            TransitSnapshot::empty(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()),
        ];
        let out = analyze_range(&p, &snaps, GradeScale::Daily, &ScoringConfig::default());
        assert!(out[0].date < out[1].date);
    }
}
