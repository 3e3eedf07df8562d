//! Tropical zodiac signs.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees each, starting
//! from Aries at 0 degrees.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AstroError;
use crate::planet::Planet;
use crate::util::normalize_360;

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

const NAMES: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

const KOREAN: [&str; 12] = [
    "양자리",
    "황소자리",
    "쌍둥이자리",
    "게자리",
    "사자자리",
    "처녀자리",
    "천칭자리",
    "전갈자리",
    "사수자리",
    "염소자리",
    "물병자리",
    "물고기자리",
];

/// Triplicity element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignElement {
    Fire,
    Earth,
    Air,
    Water,
}

/// Quadruplicity of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

/// Position of a longitude within its sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignPosition {
    /// The sign.
    pub sign: ZodiacSign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Decimal degrees within the sign [0.0, 30.0).
    pub degrees_in_sign: f64,
}

impl ZodiacSign {
    /// English name.
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Korean name.
    pub const fn korean(self) -> &'static str {
        KOREAN[self as usize]
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sign at a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_SIGNS[(index % 12) as usize]
    }

    /// Triplicity: fire, earth, air, water repeating from Aries.
    pub const fn element(self) -> SignElement {
        match self.index() % 4 {
            0 => SignElement::Fire,
            1 => SignElement::Earth,
            2 => SignElement::Air,
            _ => SignElement::Water,
        }
    }

    /// Quadruplicity: cardinal, fixed, mutable repeating from Aries.
    pub const fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Cardinal,
            1 => Modality::Fixed,
            _ => Modality::Mutable,
        }
    }

    /// Traditional ruler.
    pub const fn ruler(self) -> Planet {
        match self {
            Self::Aries | Self::Scorpio => Planet::Mars,
            Self::Taurus | Self::Libra => Planet::Venus,
            Self::Gemini | Self::Virgo => Planet::Mercury,
            Self::Cancer => Planet::Moon,
            Self::Leo => Planet::Sun,
            Self::Sagittarius | Self::Pisces => Planet::Jupiter,
            Self::Capricorn | Self::Aquarius => Planet::Saturn,
        }
    }

    /// Sign containing an ecliptic longitude.
    pub fn from_longitude(lon: f64) -> Self {
        sign_position(lon).sign
    }

    /// Parse an English (case-insensitive) or Korean name.
    pub fn from_name(name: &str) -> Option<Self> {
        let n = name.trim();
        NAMES
            .iter()
            .position(|s| s.eq_ignore_ascii_case(n))
            .or_else(|| KOREAN.iter().position(|s| *s == n))
            .map(|i| ALL_SIGNS[i])
    }
}

impl Display for ZodiacSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| AstroError::UnknownSign(s.to_string()))
    }
}

/// Sign and in-sign degrees for an ecliptic longitude.
pub fn sign_position(lon: f64) -> SignPosition {
    let l = normalize_360(lon);
    let idx = ((l / 30.0).floor() as u8).min(11);
    SignPosition {
        sign: ALL_SIGNS[idx as usize],
        sign_index: idx,
        degrees_in_sign: l - idx as f64 * 30.0,
    }
}
