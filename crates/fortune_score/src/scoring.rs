//! Category scores, domain totals, cross-validation and grades.
//!
//! A category score starts at `max * base_ratio` and moves by
//! `sum(adjustments) * amplification * max`, clamped to `[0, max]` and
//! rounded to one decimal. Category scores sum per domain. When both domains
//! agree strongly the grand total earns a bonus; when both are weak it takes
//! a penalty.

use serde::{Deserialize, Serialize};
use tracing::debug;

use fortune_config::{ASTRO_CATEGORIES, Category, GradeScale, SAJU_CATEGORIES, ScoringConfig};

use crate::adjust::CategoryAdjustments;

/// Round to one decimal place.
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Bounded score for one category.
///
/// A non-positive or non-finite maximum yields 0.
pub fn calculate_adjusted_score(category_max: f64, adjustments: &[f64], config: &ScoringConfig) -> f64 {
    if !(category_max.is_finite() && category_max > 0.0) {
        return 0.0;
    }
    let sum: f64 = adjustments.iter().sum();
    let raw = category_max * config.base_ratio + sum * config.amplification * category_max;
    round1(raw.clamp(0.0, category_max))
}

/// Scores for all ten categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub daeun: f64,
    pub seun: f64,
    pub wolun: f64,
    pub iljin: f64,
    pub yongsin: f64,
    pub transit_sun: f64,
    pub transit_moon: f64,
    pub major_planets: f64,
    pub lunar_phase: f64,
    pub solar_return: f64,
}

impl CategoryScores {
    /// Score every category from its adjustments.
    pub fn from_adjustments(adj: &CategoryAdjustments, config: &ScoringConfig) -> Self {
        let s = |c: Category| calculate_adjusted_score(config.max_for(c), adj.get(c), config);
        Self {
            daeun: s(Category::Daeun),
            seun: s(Category::Seun),
            wolun: s(Category::Wolun),
            iljin: s(Category::Iljin),
            yongsin: s(Category::Yongsin),
            transit_sun: s(Category::TransitSun),
            transit_moon: s(Category::TransitMoon),
            major_planets: s(Category::MajorPlanets),
            lunar_phase: s(Category::LunarPhase),
            solar_return: s(Category::SolarReturn),
        }
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Daeun => self.daeun,
            Category::Seun => self.seun,
            Category::Wolun => self.wolun,
            Category::Iljin => self.iljin,
            Category::Yongsin => self.yongsin,
            Category::TransitSun => self.transit_sun,
            Category::TransitMoon => self.transit_moon,
            Category::MajorPlanets => self.major_planets,
            Category::LunarPhase => self.lunar_phase,
            Category::SolarReturn => self.solar_return,
        }
    }

    /// daeun + seun + wolun + iljin + yongsin.
    pub fn saju_total(&self) -> f64 {
        round1(SAJU_CATEGORIES.iter().map(|c| self.get(*c)).sum())
    }

    /// transitSun + transitMoon + majorPlanets + lunarPhase + solarReturn.
    pub fn astro_total(&self) -> f64 {
        round1(ASTRO_CATEGORIES.iter().map(|c| self.get(*c)).sum())
    }
}

/// Outcome of comparing the two domain totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossValidation {
    /// Signed amount added to the grand total.
    pub adjustment: f64,
    /// True iff the agreement bonus applied.
    pub verified: bool,
}

/// Bonus when both totals exceed the strong threshold, penalty when both
/// fall below the weak threshold, otherwise nothing.
pub fn cross_validate(saju_total: f64, astro_total: f64, config: &ScoringConfig) -> CrossValidation {
    let cv = &config.cross_validation;
    if saju_total > cv.strong_threshold && astro_total > cv.strong_threshold {
        CrossValidation {
            adjustment: cv.bonus,
            verified: true,
        }
    } else if saju_total < cv.weak_threshold && astro_total < cv.weak_threshold {
        CrossValidation {
            adjustment: -cv.penalty,
            verified: false,
        }
    } else {
        CrossValidation {
            adjustment: 0.0,
            verified: false,
        }
    }
}

/// Grand total clamped to [0, 100] and rounded to an integer.
pub fn grand_total(saju_total: f64, astro_total: f64, cross: &CrossValidation) -> u8 {
    (saju_total + astro_total + cross.adjustment)
        .clamp(0.0, 100.0)
        .round() as u8
}

/// Full score breakdown for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    pub categories: CategoryScores,
    pub saju_total: f64,
    pub astro_total: f64,
    pub cross: CrossValidation,
    pub total: u8,
    pub grade: u8,
    pub grade_label: String,
}

/// Score categories, combine, cross-validate and grade.
pub fn summarize(adj: &CategoryAdjustments, scale: GradeScale, config: &ScoringConfig) -> ScoreSummary {
    let categories = CategoryScores::from_adjustments(adj, config);
    let saju_total = categories.saju_total();
    let astro_total = categories.astro_total();
    let cross = cross_validate(saju_total, astro_total, config);
    let total = grand_total(saju_total, astro_total, &cross);
    let grade = config.grade_for(total as f64, scale);
    debug!(saju_total, astro_total, cross = cross.adjustment, total, grade, "scored day");
    ScoreSummary {
        categories,
        saju_total,
        astro_total,
        cross,
        total,
        grade,
        grade_label: scale.label(grade).to_string(),
    }
}
