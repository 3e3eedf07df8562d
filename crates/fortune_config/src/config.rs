//! Scoring configuration.
//!
//! Defaults are the product tuning. Every field can be overridden from TOML;
//! omitted fields keep their defaults.
//!
//! ```toml
//! base_ratio = 0.4
//! amplification = 3.2
//!
//! [maxima]
//! iljin = 13.0
//!
//! [cross_validation]
//! strong_threshold = 32.5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::category::{ASTRO_CATEGORIES, Category, GradeScale, SAJU_CATEGORIES};
use crate::error::ConfigError;

/// Share of a category maximum awarded with no adjustments.
pub const DEFAULT_BASE_RATIO: f64 = 0.40;
/// Multiplier applied to the summed adjustments of a category.
pub const DEFAULT_AMPLIFICATION: f64 = 3.2;
/// Calendar (6-tier) lower bounds for grades 0..=4.
pub const DEFAULT_CALENDAR_CUTS: [f64; 5] = [74.0, 66.0, 56.0, 45.0, 35.0];
/// Daily (5-tier) lower bounds for grades 0..=3.
pub const DEFAULT_DAILY_CUTS: [f64; 4] = [70.0, 55.0, 40.0, 28.0];
/// Maximum alerts returned per analysis.
pub const DEFAULT_MAX_ALERTS: usize = 5;

/// Per-category maxima.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryMaxima {
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

impl Default for CategoryMaxima {
    fn default() -> Self {
        Self {
            daeun: 8.0,
            seun: 12.0,
            wolun: 12.0,
            iljin: 13.0,
            yongsin: 5.0,
            transit_sun: 10.0,
            transit_moon: 10.0,
            major_planets: 15.0,
            lunar_phase: 10.0,
            solar_return: 5.0,
        }
    }
}

impl CategoryMaxima {
    /// Maximum for a category.
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

    /// Sum of the Saju category maxima.
    pub fn saju_total(&self) -> f64 {
        SAJU_CATEGORIES.iter().map(|c| self.get(*c)).sum()
    }

    /// Sum of the astrology category maxima.
    pub fn astro_total(&self) -> f64 {
        ASTRO_CATEGORIES.iter().map(|c| self.get(*c)).sum()
    }
}

/// Agreement bonus and disagreement penalty between the two domains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossValidation {
    /// Both domain totals above this earn the bonus.
    pub strong_threshold: f64,
    /// Both domain totals below this incur the penalty.
    pub weak_threshold: f64,
    pub bonus: f64,
    /// Subtracted from the grand total; stored positive.
    pub penalty: f64,
}

impl Default for CrossValidation {
    fn default() -> Self {
        Self {
            strong_threshold: 32.5,
            weak_threshold: 20.0,
            bonus: 5.0,
            penalty: 4.0,
        }
    }
}

/// All tunable scoring constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub base_ratio: f64,
    pub amplification: f64,
    pub maxima: CategoryMaxima,
    pub cross_validation: CrossValidation,
    /// Descending lower bounds; a total at or above `cuts[i]` (and below
    /// `cuts[i - 1]`) has grade `i`, anything below the last has the worst grade.
    pub calendar_cuts: [f64; 5],
    pub daily_cuts: [f64; 4],
    pub max_alerts: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_ratio: DEFAULT_BASE_RATIO,
            amplification: DEFAULT_AMPLIFICATION,
            maxima: CategoryMaxima::default(),
            cross_validation: CrossValidation::default(),
            calendar_cuts: DEFAULT_CALENDAR_CUTS,
            daily_cuts: DEFAULT_DAILY_CUTS,
            max_alerts: DEFAULT_MAX_ALERTS,
        }
    }
}

impl ScoringConfig {
    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), "loaded scoring config");
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Check value constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_ratio.is_finite() && (0.0..=1.0).contains(&self.base_ratio)) {
            return Err(invalid(format!(
                "base_ratio must be in [0, 1], got {}",
                self.base_ratio
            )));
        }
        if !(self.amplification.is_finite() && self.amplification > 0.0) {
            return Err(invalid(format!(
                "amplification must be positive, got {}",
                self.amplification
            )));
        }
        for c in SAJU_CATEGORIES.iter().chain(ASTRO_CATEGORIES.iter()) {
            let max = self.maxima.get(*c);
            if !(max.is_finite() && max > 0.0) {
                return Err(invalid(format!("maximum for {c} must be positive, got {max}")));
            }
        }
        let cv = &self.cross_validation;
        let thresholds_finite = cv.weak_threshold.is_finite() && cv.strong_threshold.is_finite();
        if !thresholds_finite || cv.weak_threshold >= cv.strong_threshold {
            return Err(invalid(format!(
                "weak_threshold {} must be below strong_threshold {}",
                cv.weak_threshold, cv.strong_threshold
            )));
        }
        if !(cv.bonus >= 0.0 && cv.penalty >= 0.0) {
            return Err(invalid("cross-validation bonus and penalty must be non-negative"));
        }
        check_cuts("calendar_cuts", &self.calendar_cuts)?;
        check_cuts("daily_cuts", &self.daily_cuts)?;
        if self.max_alerts == 0 {
            return Err(invalid("max_alerts must be at least 1"));
        }
        Ok(())
    }

    /// Maximum for a category.
    pub fn max_for(&self, category: Category) -> f64 {
        self.maxima.get(category)
    }

    /// Cut points for a scale.
    pub fn cuts(&self, scale: GradeScale) -> &[f64] {
        match scale {
            GradeScale::Calendar => &self.calendar_cuts,
            GradeScale::Daily => &self.daily_cuts,
        }
    }

    /// Grade for a total on a scale. 0 is best.
    pub fn grade_for(&self, total: f64, scale: GradeScale) -> u8 {
        self.cuts(scale)
            .iter()
            .position(|cut| total >= *cut)
            .map_or(scale.worst(), |i| i as u8)
    }
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}

fn check_cuts(name: &str, cuts: &[f64]) -> Result<(), ConfigError> {
    if cuts.iter().any(|c| !(c.is_finite() && (0.0..=100.0).contains(c))) {
        return Err(invalid(format!("{name} must lie in [0, 100]")));
    }
    if cuts.windows(2).any(|w| w[0] <= w[1]) {
        return Err(invalid(format!("{name} must be strictly descending")));
    }
    Ok(())
}
