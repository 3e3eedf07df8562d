//! Scoring categories and grade scales.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A scored category. The first five belong to the Saju domain, the last
/// five to the astrology domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// 대운: ten-year luck period.
    Daeun,
    /// 세운: yearly luck.
    Seun,
    /// 월운: monthly luck.
    Wolun,
    /// 일진: the day pillar against the natal chart.
    Iljin,
    /// 용신: favourable element support.
    Yongsin,
    TransitSun,
    TransitMoon,
    MajorPlanets,
    LunarPhase,
    SolarReturn,
}

pub const SAJU_CATEGORIES: [Category; 5] = [
    Category::Daeun,
    Category::Seun,
    Category::Wolun,
    Category::Iljin,
    Category::Yongsin,
];

pub const ASTRO_CATEGORIES: [Category; 5] = [
    Category::TransitSun,
    Category::TransitMoon,
    Category::MajorPlanets,
    Category::LunarPhase,
    Category::SolarReturn,
];

impl Category {
    /// camelCase tag used at the API boundary.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Daeun => "daeun",
            Self::Seun => "seun",
            Self::Wolun => "wolun",
            Self::Iljin => "iljin",
            Self::Yongsin => "yongsin",
            Self::TransitSun => "transitSun",
            Self::TransitMoon => "transitMoon",
            Self::MajorPlanets => "majorPlanets",
            Self::LunarPhase => "lunarPhase",
            Self::SolarReturn => "solarReturn",
        }
    }

    pub const fn is_saju(self) -> bool {
        matches!(
            self,
            Self::Daeun | Self::Seun | Self::Wolun | Self::Iljin | Self::Yongsin
        )
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Grade scale. Grades are ordinals with 0 the best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GradeScale {
    /// Six tiers (0..=5), used by the fortune calendar.
    #[default]
    Calendar,
    /// Five tiers (0..=4), used by the daily and bad-day flows.
    Daily,
}

impl GradeScale {
    /// Number of tiers.
    pub const fn tiers(self) -> u8 {
        match self {
            Self::Calendar => 6,
            Self::Daily => 5,
        }
    }

    /// Worst grade on this scale.
    pub const fn worst(self) -> u8 {
        self.tiers() - 1
    }

    /// Korean label for a grade on this scale.
    pub const fn label(self, grade: u8) -> &'static str {
        match (self, grade) {
            (Self::Calendar, 0) => "최고",
            (Self::Calendar, 1) => "대길",
            (Self::Calendar, 2) => "길",
            (Self::Calendar, 3) => "보통",
            (Self::Calendar, 4) => "주의",
            (Self::Calendar, _) => "흉",
            (Self::Daily, 0) => "최고",
            (Self::Daily, 1) => "좋음",
            (Self::Daily, 2) => "보통",
            (Self::Daily, 3) => "주의",
            (Self::Daily, _) => "나쁨",
        }
    }
}
