//! Factor keys: named conditions detected for a chart and date.
//!
//! Keys are a closed enum internally and camelCase strings at the API
//! boundary (`"dohwaDay"`, `"retrogradeMercury"`).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

/// A detected Saju or astrology condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FactorKey {
    // Saju
    CheoneulGwiin,
    DohwaDay,
    GeonrokDay,
    YeokmaDay,
    HwagaeDay,
    YanginDay,
    SamjaeYear,
    GongmangDay,
    BranchYukhap,
    BranchSamhap,
    BranchChung,
    BranchXing,
    BranchHai,
    BranchPa,
    StemHap,
    StemChung,
    // Astrology
    RetrogradeMercury,
    RetrogradeVenus,
    RetrogradeMars,
    VoidOfCourseMoon,
    NewMoon,
    FullMoon,
    BeneficAspect,
    HardAspect,
    SolarReturn,
}

pub const ALL_FACTOR_KEYS: [FactorKey; 25] = [
    FactorKey::CheoneulGwiin,
    FactorKey::DohwaDay,
    FactorKey::GeonrokDay,
    FactorKey::YeokmaDay,
    FactorKey::HwagaeDay,
    FactorKey::YanginDay,
    FactorKey::SamjaeYear,
    FactorKey::GongmangDay,
    FactorKey::BranchYukhap,
    FactorKey::BranchSamhap,
    FactorKey::BranchChung,
    FactorKey::BranchXing,
    FactorKey::BranchHai,
    FactorKey::BranchPa,
    FactorKey::StemHap,
    FactorKey::StemChung,
    FactorKey::RetrogradeMercury,
    FactorKey::RetrogradeVenus,
    FactorKey::RetrogradeMars,
    FactorKey::VoidOfCourseMoon,
    FactorKey::NewMoon,
    FactorKey::FullMoon,
    FactorKey::BeneficAspect,
    FactorKey::HardAspect,
    FactorKey::SolarReturn,
];

impl FactorKey {
    /// Boundary tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CheoneulGwiin => "cheoneulGwiin",
            Self::DohwaDay => "dohwaDay",
            Self::GeonrokDay => "geonrokDay",
            Self::YeokmaDay => "yeokmaDay",
            Self::HwagaeDay => "hwagaeDay",
            Self::YanginDay => "yanginDay",
            Self::SamjaeYear => "samjaeYear",
            Self::GongmangDay => "gongmangDay",
            Self::BranchYukhap => "branchYukhap",
            Self::BranchSamhap => "branchSamhap",
            Self::BranchChung => "branchChung",
            Self::BranchXing => "branchXing",
            Self::BranchHai => "branchHai",
            Self::BranchPa => "branchPa",
            Self::StemHap => "stemHap",
            Self::StemChung => "stemChung",
            Self::RetrogradeMercury => "retrogradeMercury",
            Self::RetrogradeVenus => "retrogradeVenus",
            Self::RetrogradeMars => "retrogradeMars",
            Self::VoidOfCourseMoon => "voidOfCourseMoon",
            Self::NewMoon => "newMoon",
            Self::FullMoon => "fullMoon",
            Self::BeneficAspect => "beneficAspect",
            Self::HardAspect => "hardAspect",
            Self::SolarReturn => "solarReturn",
        }
    }

    /// Korean label.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::CheoneulGwiin => "천을귀인",
            Self::DohwaDay => "도화일",
            Self::GeonrokDay => "건록일",
            Self::YeokmaDay => "역마일",
            Self::HwagaeDay => "화개일",
            Self::YanginDay => "양인일",
            Self::SamjaeYear => "삼재",
            Self::GongmangDay => "공망일",
            Self::BranchYukhap => "지지 육합",
            Self::BranchSamhap => "지지 삼합",
            Self::BranchChung => "지지 충",
            Self::BranchXing => "지지 형",
            Self::BranchHai => "지지 해",
            Self::BranchPa => "지지 파",
            Self::StemHap => "천간합",
            Self::StemChung => "천간충",
            Self::RetrogradeMercury => "수성 역행",
            Self::RetrogradeVenus => "금성 역행",
            Self::RetrogradeMars => "화성 역행",
            Self::VoidOfCourseMoon => "보이드 문",
            Self::NewMoon => "신월",
            Self::FullMoon => "보름달",
            Self::BeneficAspect => "길한 트랜짓",
            Self::HardAspect => "긴장 트랜짓",
            Self::SolarReturn => "솔라 리턴",
        }
    }

    /// Whether the key comes from the Saju side.
    pub const fn is_saju(self) -> bool {
        (self as u8) <= (Self::StemChung as u8)
    }

    pub const fn is_astro(self) -> bool {
        !self.is_saju()
    }

    /// Clash, punishment or void day: the keys that drive secondary warnings.
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::BranchChung | Self::BranchXing | Self::GongmangDay)
    }

    /// Adjustment this key contributes to its daily category.
    pub const fn weight(self) -> f64 {
        match self {
            Self::CheoneulGwiin => 0.10,
            Self::DohwaDay => 0.03,
            Self::GeonrokDay => 0.06,
            Self::YeokmaDay => 0.02,
            Self::HwagaeDay => 0.01,
            Self::YanginDay => -0.05,
            Self::SamjaeYear => -0.06,
            Self::GongmangDay => -0.08,
            Self::BranchYukhap => 0.08,
            Self::BranchSamhap => 0.06,
            Self::BranchChung => -0.12,
            Self::BranchXing => -0.08,
            Self::BranchHai => -0.05,
            Self::BranchPa => -0.04,
            Self::StemHap => 0.05,
            Self::StemChung => -0.08,
            Self::RetrogradeMercury => -0.06,
            Self::RetrogradeVenus => -0.05,
            Self::RetrogradeMars => -0.05,
            Self::VoidOfCourseMoon => -0.08,
            Self::NewMoon => 0.05,
            Self::FullMoon => 0.03,
            Self::BeneficAspect => 0.06,
            Self::HardAspect => -0.06,
            Self::SolarReturn => 0.20,
        }
    }
}

impl Display for FactorKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FactorKey {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_FACTOR_KEYS
            .into_iter()
            .find(|k| k.as_str() == t)
            .ok_or_else(|| ScoreError::UnknownFactor(s.to_string()))
    }
}

/// Unique factor keys in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<FactorKey>", into = "Vec<FactorKey>")]
pub struct FactorSet {
    keys: Vec<FactorKey>,
}

impl FactorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key; returns false if it was already present.
    pub fn insert(&mut self, key: FactorKey) -> bool {
        if self.keys.contains(&key) {
            return false;
        }
        self.keys.push(key);
        true
    }

    /// Add a key when `cond` holds.
    pub fn insert_if(&mut self, cond: bool, key: FactorKey) {
        if cond {
            self.insert(key);
        }
    }

    /// Remove a key; returns whether it was present.
    pub fn remove(&mut self, key: FactorKey) -> bool {
        let before = self.keys.len();
        self.keys.retain(|k| *k != key);
        self.keys.len() != before
    }

    pub fn contains(&self, key: FactorKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = FactorKey> + '_ {
        self.keys.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn as_slice(&self) -> &[FactorKey] {
        &self.keys
    }

    /// Parse boundary tags, skipping unknown ones.
    pub fn from_tags<'a>(tags: impl IntoIterator<Item = &'a str>) -> Self {
        tags.into_iter().filter_map(|t| t.parse().ok()).collect()
    }

    /// Boundary tags in order.
    pub fn tags(&self) -> Vec<&'static str> {
        self.iter().map(FactorKey::as_str).collect()
    }
}

impl FromIterator<FactorKey> for FactorSet {
    fn from_iter<I: IntoIterator<Item = FactorKey>>(iter: I) -> Self {
        let mut set = Self::new();
        for k in iter {
            set.insert(k);
        }
        set
    }
}

impl From<Vec<FactorKey>> for FactorSet {
    fn from(keys: Vec<FactorKey>) -> Self {
        keys.into_iter().collect()
    }
}

impl From<FactorSet> for Vec<FactorKey> {
    fn from(set: FactorSet) -> Self {
        set.keys
    }
}

impl<'a> IntoIterator for &'a FactorSet {
    type Item = FactorKey;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, FactorKey>>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_back() {
        for k in ALL_FACTOR_KEYS {
            assert_eq!(k.as_str().parse::<FactorKey>(), Ok(k));
        }
        assert!("luckyDay".parse::<FactorKey>().is_err());
    }

    #[test]
    fn domain_split() {
        let saju = ALL_FACTOR_KEYS.iter().filter(|k| k.is_saju()).count();
        assert_eq!(saju, 16);
        assert!(FactorKey::RetrogradeMercury.is_astro());
        assert!(FactorKey::StemChung.is_saju());
    }

    #[test]
    fn serde_tag_matches_as_str() {
        for k in ALL_FACTOR_KEYS {
            let json = serde_json::to_string(&k).unwrap();
            assert_eq!(json, format!("\"{}\"", k.as_str()));
        }
    }

    #[test]
    fn set_is_unique_and_ordered() {
        let mut s = FactorSet::new();
        assert!(s.insert(FactorKey::DohwaDay));
        assert!(s.insert(FactorKey::BranchChung));
        assert!(!s.insert(FactorKey::DohwaDay));
        assert_eq!(s.as_slice(), &[FactorKey::DohwaDay, FactorKey::BranchChung]);
        assert!(s.remove(FactorKey::DohwaDay));
        assert!(!s.contains(FactorKey::DohwaDay));
    }

    #[test]
    fn deserialize_dedups() {
        let s: FactorSet =
            serde_json::from_str(r#"["newMoon","fullMoon","newMoon"]"#).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(serde_json::to_string(&s).unwrap(), r#"["newMoon","fullMoon"]"#);
    }

    #[test]
    fn from_tags_skips_unknown() {
        let s = FactorSet::from_tags(["geonrokDay", "bogus", "solarReturn"]);
        assert_eq!(s.tags(), vec!["geonrokDay", "solarReturn"]);
    }
}
