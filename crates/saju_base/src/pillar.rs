//! Pillars (주) and the sexagenary (60갑자) cycle.
//!
//! A pillar pairs a stem and a branch of the same polarity; the 60 valid
//! pairs form the sexagenary cycle starting at 갑자 (index 0).

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::Element;
use crate::error::SajuError;
use crate::stem::Stem;

/// Length of the sexagenary cycle.
pub const SEXAGENARY_CYCLE: u8 = 60;

/// A stem-branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    /// Build a pillar, rejecting pairs of mixed polarity (e.g. 갑축).
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, SajuError> {
        if stem.yin_yang() != branch.yin_yang() {
            return Err(SajuError::PolarityMismatch {
                stem: stem.name(),
                branch: branch.name(),
            });
        }
        Ok(Self { stem, branch })
    }

    /// Pillar at a sexagenary index, wrapping modulo 60.
    pub const fn from_sexagenary(index: u8) -> Self {
        let i = index % SEXAGENARY_CYCLE;
        Self {
            stem: Stem::from_index(i % 10),
            branch: Branch::from_index(i % 12),
        }
    }

    /// Parse a two-character name such as "갑자" or "甲子".
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.trim().chars();
        let s = chars.next()?;
        let b = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let stem = Stem::from_name(s.encode_utf8(&mut [0u8; 4]))?;
        let branch = Branch::from_name(b.encode_utf8(&mut [0u8; 4]))?;
        Self::new(stem, branch).ok()
    }

    /// 0-based position in the sexagenary cycle.
    pub const fn sexagenary_index(self) -> u8 {
        // i ≡ s (mod 10) and i ≡ b (mod 12); 6s - 5b satisfies both when parities match.
        let s = self.stem.index() as u16;
        let b = self.branch.index() as u16;
        ((6 * s + 60 - 5 * b) % SEXAGENARY_CYCLE as u16) as u8
    }

    /// Hangul name, e.g. "갑자".
    pub fn name(self) -> String {
        format!("{}{}", self.stem.name(), self.branch.name())
    }

    /// Hanja name, e.g. "甲子".
    pub fn hanja(self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }

    /// The two void branches (공망) of the ten-day group (순) containing this pillar.
    pub const fn gongmang(self) -> [Branch; 2] {
        let start = (self.branch.index() + 12 - self.stem.index()) % 12;
        [
            Branch::from_index(start + 10),
            Branch::from_index(start + 11),
        ]
    }

    /// Elements of stem and branch.
    pub const fn elements(self) -> (Element, Element) {
        (self.stem.element(), self.branch.element())
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

/// Month stem (월두법) for a year stem and month branch.
///
/// The 인 month of a 갑/기 year starts at 병; each following month advances one stem.
pub const fn month_stem(year_stem: Stem, month_branch: Branch) -> Stem {
    let first = ((year_stem.index() % 5) * 2 + 2) % 10;
    let offset = (month_branch.index() + 12 - Branch::In.index()) % 12;
    Stem::from_index(first + offset)
}

/// Hour stem (시두법) for a day stem and hour branch.
///
/// The 자 hour of a 갑/기 day is 갑.
pub const fn hour_stem(day_stem: Stem, hour_branch: Branch) -> Stem {
    Stem::from_index((day_stem.index() % 5) * 2 + hour_branch.index())
}

/// A four-pillar chart. The hour pillar is absent when birth time is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SajuChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    #[serde(default)]
    pub hour: Option<Pillar>,
}

impl SajuChart {
    /// Day master (일간).
    pub const fn day_master(&self) -> Stem {
        self.day.stem
    }

    /// Present pillars in year, month, day, hour order.
    pub fn pillars(&self) -> impl Iterator<Item = Pillar> + '_ {
        [Some(self.year), Some(self.month), Some(self.day), self.hour]
            .into_iter()
            .flatten()
    }

    /// Count of each element over visible stems and branches,
    /// indexed by `Element::index()`.
    pub fn element_distribution(&self) -> [u8; 5] {
        let mut counts = [0u8; 5];
        for p in self.pillars() {
            counts[p.stem.element().index() as usize] += 1;
            counts[p.branch.element().index() as usize] += 1;
        }
        counts
    }

    /// Branches of all present pillars.
    pub fn branches(&self) -> Vec<Branch> {
        self.pillars().map(|p| p.branch).collect()
    }
}
