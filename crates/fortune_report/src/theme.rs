//! Report themes and their structural requirements.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Report theme requested from the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportTheme {
    Life,
    Love,
    Career,
    Wealth,
    Health,
    Family,
    NewYear,
}

pub const ALL_THEMES: [ReportTheme; 7] = [
    ReportTheme::Life,
    ReportTheme::Love,
    ReportTheme::Career,
    ReportTheme::Wealth,
    ReportTheme::Health,
    ReportTheme::Family,
    ReportTheme::NewYear,
];

impl ReportTheme {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Life => "life",
            Self::Love => "love",
            Self::Career => "career",
            Self::Wealth => "wealth",
            Self::Health => "health",
            Self::Family => "family",
            Self::NewYear => "newyear",
        }
    }

    /// Top-level keys a JSON report of this theme must carry.
    pub const fn required_keys(self) -> &'static [&'static str] {
        match self {
            Self::Life => &["lifeTimeline", "categoryAnalysis", "keyInsights"],
            Self::Love => &["loveStyle", "compatibility", "loveTimeline"],
            Self::Career => &["careerAptitude", "careerTimeline", "careerAdvice"],
            Self::Wealth => &["wealthProfile", "wealthTimeline", "wealthAdvice"],
            Self::Health => &["constitution", "healthRisks", "healthAdvice"],
            Self::Family => &["familyDynamics", "parentRelation", "familyAdvice"],
            Self::NewYear => &["yearOverview", "monthlyForecast", "yearAdvice"],
        }
    }

    /// Section headings a prose report of this theme must contain.
    pub const fn required_sections(self) -> &'static [&'static str] {
        match self {
            Self::Life => &["인생 흐름", "분야별 분석", "핵심 인사이트"],
            Self::Love => &["연애 성향", "궁합", "연애 시기"],
            Self::Career => &["직업 적성", "커리어 흐름", "커리어 조언"],
            Self::Wealth => &["재물 성향", "재물 흐름", "재테크 조언"],
            Self::Health => &["타고난 체질", "주의할 건강", "건강 관리"],
            Self::Family => &["가족 관계", "부모와의 관계", "가족 조언"],
            Self::NewYear => &["올해 총운", "월별 운세", "한 해 조언"],
        }
    }
}

impl fmt::Display for ReportTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReportTheme {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ALL_THEMES
            .into_iter()
            .find(|t| t.name() == lower || (lower == "new_year" && *t == Self::NewYear))
            .ok_or_else(|| ReportError::UnknownTheme(s.to_string()))
    }
}
