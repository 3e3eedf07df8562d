//! Aspects between ecliptic positions.
//!
//! An aspect holds when the shortest arc between two longitudes lies within
//! the aspect's orb of its canonical angle. When several aspects match, the
//! one with the tightest orb wins.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AstroError;
use crate::planet::{Planet, PlanetNature};
use crate::position::PlanetPosition;
use crate::util::angular_distance;

/// Aspect kinds with canonical angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
    Quincunx,
    SemiSextile,
    SemiSquare,
    Sesquiquadrate,
    Quintile,
}

/// All aspect kinds, major first.
pub const ALL_ASPECTS: [AspectKind; 10] = [
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Trine,
    AspectKind::Square,
    AspectKind::Sextile,
    AspectKind::Quincunx,
    AspectKind::SemiSextile,
    AspectKind::SemiSquare,
    AspectKind::Sesquiquadrate,
    AspectKind::Quintile,
];

/// The five Ptolemaic aspects.
pub const MAJOR_ASPECTS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Trine,
    AspectKind::Square,
    AspectKind::Sextile,
];

impl AspectKind {
    /// Canonical angle in degrees.
    pub const fn angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Opposition => 180.0,
            Self::Trine => 120.0,
            Self::Square => 90.0,
            Self::Sextile => 60.0,
            Self::Quincunx => 150.0,
            Self::SemiSextile => 30.0,
            Self::SemiSquare => 45.0,
            Self::Sesquiquadrate => 135.0,
            Self::Quintile => 72.0,
        }
    }

    /// Maximum orb in degrees.
    pub const fn orb(self) -> f64 {
        match self {
            Self::Conjunction | Self::Opposition | Self::Trine => 8.0,
            Self::Square => 7.0,
            Self::Sextile => 6.0,
            Self::Quincunx => 3.0,
            Self::SemiSextile | Self::SemiSquare | Self::Sesquiquadrate | Self::Quintile => 2.0,
        }
    }

    /// Whether this is one of the Ptolemaic aspects.
    pub const fn is_major(self) -> bool {
        matches!(
            self,
            Self::Conjunction | Self::Opposition | Self::Trine | Self::Square | Self::Sextile
        )
    }

    /// Whether this is a tension aspect (square, opposition, semi-square, sesquiquadrate).
    pub const fn is_hard(self) -> bool {
        matches!(
            self,
            Self::Square | Self::Opposition | Self::SemiSquare | Self::Sesquiquadrate
        )
    }

    /// Whether this is a flowing aspect (trine, sextile).
    pub const fn is_soft(self) -> bool {
        matches!(self, Self::Trine | Self::Sextile)
    }

    /// Base harmony weight in [-1, 1]. Conjunctions take the nature of the planets.
    pub const fn harmony(self, a: Planet, b: Planet) -> f64 {
        match self {
            Self::Trine => 1.0,
            Self::Sextile => 0.6,
            Self::Quintile => 0.3,
            Self::SemiSextile => 0.2,
            Self::Quincunx => -0.3,
            Self::SemiSquare | Self::Sesquiquadrate => -0.3,
            Self::Opposition => -0.7,
            Self::Square => -0.8,
            Self::Conjunction => conjunction_harmony(a.nature(), b.nature()),
        }
    }

    /// Lower-case name with no spaces.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Opposition => "opposition",
            Self::Trine => "trine",
            Self::Square => "square",
            Self::Sextile => "sextile",
            Self::Quincunx => "quincunx",
            Self::SemiSextile => "semisextile",
            Self::SemiSquare => "semisquare",
            Self::Sesquiquadrate => "sesquiquadrate",
            Self::Quintile => "quintile",
        }
    }
}

const fn conjunction_harmony(a: PlanetNature, b: PlanetNature) -> f64 {
    use PlanetNature::*;
    match (a, b) {
        (Malefic, Malefic) => -0.8,
        (Malefic, Benefic) | (Benefic, Malefic) => 0.0,
        (Malefic, _) | (_, Malefic) => -0.5,
        (Benefic, _) | (_, Benefic) => 0.8,
        _ => 0.3,
    }
}

impl Display for AspectKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AspectKind {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        ALL_ASPECTS
            .into_iter()
            .find(|k| k.name() == folded)
            .ok_or_else(|| AstroError::UnknownAspect(s.to_string()))
    }
}

/// A detected aspect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aspect {
    pub from: Planet,
    pub to: Planet,
    #[serde(rename = "aspectType")]
    pub kind: AspectKind,
    /// Deviation from exact, in degrees (0 = exact).
    pub orb: f64,
    /// Harmony weight scaled by exactness, in [-1, 1].
    pub score: f64,
}

/// Closest matching aspect kind and orb for two longitudes.
pub fn match_aspect(lon_a: f64, lon_b: f64) -> Option<(AspectKind, f64)> {
    let sep = angular_distance(lon_a, lon_b);
    ALL_ASPECTS
        .into_iter()
        .filter_map(|k| {
            let orb = (sep - k.angle()).abs();
            (orb <= k.orb()).then_some((k, orb))
        })
        .min_by(|x, y| x.1.total_cmp(&y.1))
}

/// Aspect between two positioned planets, if any.
pub fn find_aspect(a: &PlanetPosition, b: &PlanetPosition) -> Option<Aspect> {
    let (kind, orb) = match_aspect(a.longitude, b.longitude)?;
    let exactness = 1.0 - orb / kind.orb();
    Some(Aspect {
        from: a.planet,
        to: b.planet,
        kind,
        orb,
        score: kind.harmony(a.planet, b.planet) * exactness,
    })
}

/// Aspects from every position in `from` to every position in `to`
/// (e.g. transit to natal).
pub fn find_aspects(from: &[PlanetPosition], to: &[PlanetPosition]) -> Vec<Aspect> {
    from.iter()
        .flat_map(|a| to.iter().filter_map(move |b| find_aspect(a, b)))
        .collect()
}

/// Aspects among the positions of a single chart, each unordered pair once.
pub fn chart_aspects(positions: &[PlanetPosition]) -> Vec<Aspect> {
    let mut out = Vec::new();
    for (i, a) in positions.iter().enumerate() {
        for b in &positions[i + 1..] {
            if let Some(asp) = find_aspect(a, b) {
                out.push(asp);
            }
        }
    }
    out
}
