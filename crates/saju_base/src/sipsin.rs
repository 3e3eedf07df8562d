//! Ten gods (십신): the relationship of any stem to the day master.
//!
//! Determined by the element relation (same, generates, overcomes, overcome
//! by, generated by) and whether the polarities match.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::ElementRelation;
use crate::stem::Stem;

/// The ten gods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sipsin {
    /// 비견: same element, same polarity.
    Bigyeon,
    /// 겁재: same element, opposite polarity.
    Geopjae,
    /// 식신: day master generates, same polarity.
    Siksin,
    /// 상관: day master generates, opposite polarity.
    Sanggwan,
    /// 편재: day master overcomes, same polarity.
    Pyeonjae,
    /// 정재: day master overcomes, opposite polarity.
    Jeongjae,
    /// 편관 (칠살): overcomes day master, same polarity.
    Pyeongwan,
    /// 정관: overcomes day master, opposite polarity.
    Jeonggwan,
    /// 편인: generates day master, same polarity.
    Pyeonin,
    /// 정인: generates day master, opposite polarity.
    Jeongin,
}

/// All 10 gods in traditional order.
pub const ALL_SIPSIN: [Sipsin; 10] = [
    Sipsin::Bigyeon,
    Sipsin::Geopjae,
    Sipsin::Siksin,
    Sipsin::Sanggwan,
    Sipsin::Pyeonjae,
    Sipsin::Jeongjae,
    Sipsin::Pyeongwan,
    Sipsin::Jeonggwan,
    Sipsin::Pyeonin,
    Sipsin::Jeongin,
];

impl Sipsin {
    /// Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bigyeon => "비견",
            Self::Geopjae => "겁재",
            Self::Siksin => "식신",
            Self::Sanggwan => "상관",
            Self::Pyeonjae => "편재",
            Self::Jeongjae => "정재",
            Self::Pyeongwan => "편관",
            Self::Jeonggwan => "정관",
            Self::Pyeonin => "편인",
            Self::Jeongin => "정인",
        }
    }

    /// Parse a Korean name; `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        let n = name.trim();
        if n == "칠살" {
            return Some(Self::Pyeongwan);
        }
        ALL_SIPSIN.into_iter().find(|s| s.name() == n)
    }
}

impl Display for Sipsin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ten-god relationship of `other` to `day_master`.
pub const fn sipsin(day_master: Stem, other: Stem) -> Sipsin {
    let same_polarity = day_master.index() % 2 == other.index() % 2;
    match (day_master.element().relation_to(other.element()), same_polarity) {
        (ElementRelation::Same, true) => Sipsin::Bigyeon,
        (ElementRelation::Same, false) => Sipsin::Geopjae,
        (ElementRelation::Generates, true) => Sipsin::Siksin,
        (ElementRelation::Generates, false) => Sipsin::Sanggwan,
        (ElementRelation::Overcomes, true) => Sipsin::Pyeonjae,
        (ElementRelation::Overcomes, false) => Sipsin::Jeongjae,
        (ElementRelation::OvercomeBy, true) => Sipsin::Pyeongwan,
        (ElementRelation::OvercomeBy, false) => Sipsin::Jeonggwan,
        (ElementRelation::GeneratedBy, true) => Sipsin::Pyeonin,
        (ElementRelation::GeneratedBy, false) => Sipsin::Jeongin,
    }
}

/// Ten-god relationship of a branch, via its main hidden stem (정기).
pub const fn sipsin_of_branch(day_master: Stem, branch: Branch) -> Sipsin {
    sipsin(day_master, branch.hidden_stems().jeonggi)
}

/// Ten-god relationship by stem names; `None` if either name is unknown.
pub fn sipsin_by_name(day_master: &str, other: &str) -> Option<Sipsin> {
    Some(sipsin(Stem::from_name(day_master)?, Stem::from_name(other)?))
}
