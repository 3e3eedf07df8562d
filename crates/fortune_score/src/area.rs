//! Life-area scores, lucky number and lucky color.
//!
//! Area scores start from the overall score, shift by a small per-date
//! variation and then by fixed deltas for the factor keys that touch each
//! area. Results are clamped to [`AREA_MIN`, `AREA_MAX`].

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use saju_base::{Element, Stem};

use crate::factor::{FactorKey, FactorSet};

pub const AREA_MIN: i32 = 15;
pub const AREA_MAX: i32 = 95;

/// Life areas scored per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Area {
    Love,
    Career,
    Wealth,
    Health,
    Study,
    Travel,
}

pub const ALL_AREAS: [Area; 6] = [
    Area::Love,
    Area::Career,
    Area::Wealth,
    Area::Health,
    Area::Study,
    Area::Travel,
];

impl Area {
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Love => "애정운",
            Self::Career => "직장운",
            Self::Wealth => "재물운",
            Self::Health => "건강운",
            Self::Study => "학업운",
            Self::Travel => "이동운",
        }
    }

    /// Factor deltas for this area.
    ///
    /// Love, career and travel keep their positive deltas other than the
    /// lead key small enough that the lead key always moves the clamped
    /// score; health does the same for its negative deltas.
    const fn deltas(self) -> &'static [(FactorKey, i32)] {
        match self {
            Self::Love => &[
                (FactorKey::DohwaDay, 8),
                (FactorKey::BranchYukhap, 3),
                (FactorKey::BeneficAspect, 2),
                (FactorKey::BranchChung, -3),
                (FactorKey::RetrogradeVenus, -4),
                (FactorKey::HardAspect, -2),
            ],
            Self::Career => &[
                (FactorKey::GeonrokDay, 8),
                (FactorKey::CheoneulGwiin, 3),
                (FactorKey::SolarReturn, 2),
                (FactorKey::GongmangDay, -4),
                (FactorKey::RetrogradeMars, -3),
                (FactorKey::BranchXing, -2),
            ],
            Self::Wealth => &[
                (FactorKey::CheoneulGwiin, 3),
                (FactorKey::StemHap, 3),
                (FactorKey::NewMoon, 2),
                (FactorKey::GongmangDay, -4),
                (FactorKey::BranchPa, -3),
                (FactorKey::RetrogradeVenus, -2),
            ],
            Self::Health => &[
                (FactorKey::BranchChung, -8),
                (FactorKey::BranchSamhap, 2),
                (FactorKey::BeneficAspect, 2),
                (FactorKey::YanginDay, -3),
                (FactorKey::HardAspect, -2),
                (FactorKey::BranchHai, -1),
            ],
            Self::Study => &[
                (FactorKey::HwagaeDay, 6),
                (FactorKey::CheoneulGwiin, 2),
                (FactorKey::RetrogradeMercury, -4),
                (FactorKey::VoidOfCourseMoon, -2),
            ],
            Self::Travel => &[
                (FactorKey::YeokmaDay, 8),
                (FactorKey::NewMoon, 1),
                (FactorKey::RetrogradeMercury, -4),
                (FactorKey::VoidOfCourseMoon, -3),
            ],
        }
    }
}

/// Scores per life area, each in [15, 95].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaScores {
    pub love: u8,
    pub career: u8,
    pub wealth: u8,
    pub health: u8,
    pub study: u8,
    pub travel: u8,
}

impl AreaScores {
    pub fn get(&self, area: Area) -> u8 {
        match area {
            Area::Love => self.love,
            Area::Career => self.career,
            Area::Wealth => self.wealth,
            Area::Health => self.health,
            Area::Study => self.study,
            Area::Travel => self.travel,
        }
    }
}

/// Deterministic per-date, per-area variation in [-3, 3].
fn date_variation(date: NaiveDate, area: Area) -> i32 {
    let k = area as i64;
    let d = date.num_days_from_ce() as i64;
    ((d * (k + 3) + k * 11).rem_euclid(7) - 3) as i32
}

fn area_score(overall: f64, keys: &[&FactorSet], date: NaiveDate, area: Area) -> u8 {
    let base = 25 + (overall.clamp(0.0, 100.0) * 0.5).round() as i32;
    let delta: i32 = area
        .deltas()
        .iter()
        .filter(|(k, _)| keys.iter().any(|set| set.contains(*k)))
        .map(|(_, d)| *d)
        .sum();
    (base + date_variation(date, area) + delta).clamp(AREA_MIN, AREA_MAX) as u8
}

/// Area scores for an overall score and the day's factor keys.
pub fn calculate_area_scores(
    overall: f64,
    saju_keys: &FactorSet,
    astro_keys: &FactorSet,
    date: NaiveDate,
) -> AreaScores {
    let keys = [saju_keys, astro_keys];
    let s = |area| area_score(overall, &keys, date, area);
    AreaScores {
        love: s(Area::Love),
        career: s(Area::Career),
        wealth: s(Area::Wealth),
        health: s(Area::Health),
        study: s(Area::Study),
        travel: s(Area::Travel),
    }
}

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

fn date_digits(date: NaiveDate) -> u32 {
    let ymd = date.year().unsigned_abs() * 10_000 + date.month() * 100 + date.day();
    digit_sum(ymd)
}

/// Lucky number in [1, 9]: digital root of the combined digit sums of the
/// target and birth dates.
pub fn get_lucky_number(target: NaiveDate, birth: NaiveDate) -> u8 {
    let n = date_digits(target) + date_digits(birth);
    (1 + (n.max(1) - 1) % 9) as u8
}

/// Lucky color for a day stem, by its element.
pub const fn lucky_color(day_stem: Stem) -> &'static str {
    element_color(day_stem.element())
}

pub const fn element_color(element: Element) -> &'static str {
    match element {
        Element::Wood => "초록",
        Element::Fire => "빨강",
        Element::Earth => "노랑",
        Element::Metal => "흰색",
        Element::Water => "검정",
    }
}
