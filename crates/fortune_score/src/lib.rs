//! Rule-based fortune scoring.
//!
//! This crate provides:
//! - Factor keys and their extraction from a Saju chart and transits
//! - Per-category adjustments (ten gods, relations, yongsin, aspects, lunar phase)
//! - Bounded category scores, domain totals, cross-validation and grades
//! - Alerts, life-area scores, lucky number and lucky color
//! - `analyze_day` / `analyze_range` running the whole flow
//!
//! Every function is pure and synchronous. Tunable constants come from
//! [`fortune_config::ScoringConfig`].

pub mod adjust;
pub mod alerts;
pub mod analysis;
pub mod area;
pub mod astro_factors;
pub mod error;
pub mod factor;
pub mod saju_factors;
pub mod scoring;

pub use adjust::{
    AdjustmentInput, CategoryAdjustments, MAJOR_TRANSIT_PLANETS, phase_weight, relation_weight,
    sipsin_weight, yongsin_adjustments,
};
pub use alerts::{Alert, AlertKind, generate_alerts, generate_alerts_capped};
pub use analysis::{
    DayAnalysis, NatalProfile, TransitSnapshot, analyze_day, analyze_month, analyze_range,
};
pub use area::{
    ALL_AREAS, AREA_MAX, AREA_MIN, Area, AreaScores, calculate_area_scores, element_color,
    get_lucky_number, lucky_color,
};
pub use astro_factors::{
    NATAL_LUMINARIES, SOLAR_RETURN_ORB_DEG, extract_astro_factors, has_benefic_aspect,
    has_hard_aspect, is_retrograde, is_retrograde_by_name, is_solar_return, luminary_transits,
};
pub use error::ScoreError;
pub use factor::{ALL_FACTOR_KEYS, FactorKey, FactorSet};
pub use saju_factors::{
    TargetPillars, extract_saju_factors, is_cheoneul_gwiin, is_cheoneul_gwiin_by_name,
    is_dohwa_day, is_dohwa_day_by_name, is_geonrok_day, is_geonrok_day_by_name, is_gongmang_day,
    is_gongmang_day_by_name, is_hwagae_day, is_hwagae_day_by_name, is_samjae_year,
    is_samjae_year_by_name, is_stem_chung, is_stem_hap, is_yangin_day, is_yangin_day_by_name,
    is_yeokma_day, is_yeokma_day_by_name,
};
pub use scoring::{
    CategoryScores, CrossValidation, ScoreSummary, calculate_adjusted_score, cross_validate,
    grand_total, round1, summarize,
};
