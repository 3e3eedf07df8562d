//! Planets and points used in transit analysis.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AstroError;

/// Planets plus the mean North Node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
}

/// All points in traditional order.
pub const ALL_PLANETS: [Planet; 11] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Uranus,
    Planet::Neptune,
    Planet::Pluto,
    Planet::NorthNode,
];

/// The seven visible planets, whose aspects the void-of-course Moon test considers.
pub const CLASSICAL_PLANETS: [Planet; 7] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
];

/// Traditional benefic/malefic classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanetNature {
    /// Sun and Moon.
    Luminary,
    /// Venus and Jupiter.
    Benefic,
    /// Mars and Saturn.
    Malefic,
    /// Everything else.
    Neutral,
}

impl Planet {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::NorthNode => "North Node",
        }
    }

    /// Korean name.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Sun => "태양",
            Self::Moon => "달",
            Self::Mercury => "수성",
            Self::Venus => "금성",
            Self::Mars => "화성",
            Self::Jupiter => "목성",
            Self::Saturn => "토성",
            Self::Uranus => "천왕성",
            Self::Neptune => "해왕성",
            Self::Pluto => "명왕성",
            Self::NorthNode => "노스노드",
        }
    }

    /// 0-based index into ALL_PLANETS.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Traditional nature.
    pub const fn nature(self) -> PlanetNature {
        match self {
            Self::Sun | Self::Moon => PlanetNature::Luminary,
            Self::Venus | Self::Jupiter => PlanetNature::Benefic,
            Self::Mars | Self::Saturn => PlanetNature::Malefic,
            _ => PlanetNature::Neutral,
        }
    }

    /// Whether the body can appear retrograde from Earth. The luminaries never do;
    /// the mean node always moves backwards and is not reported as retrograde.
    pub const fn can_retrograde(self) -> bool {
        !matches!(self, Self::Sun | Self::Moon | Self::NorthNode)
    }

    /// Parse an English (case-insensitive, spaces/underscores ignored) or Korean name.
    pub fn from_name(name: &str) -> Option<Self> {
        let n = name.trim();
        let folded: String = n
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        ALL_PLANETS.into_iter().find(|p| {
            let english: String = p
                .name()
                .chars()
                .filter(|c| *c != ' ')
                .flat_map(char::to_lowercase)
                .collect();
            folded == english || n == p.korean()
        })
    }
}

impl Display for Planet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| AstroError::UnknownPlanet(s.to_string()))
    }
}
