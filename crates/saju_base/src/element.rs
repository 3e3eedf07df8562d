//! Five elements (오행) and yin-yang polarity.
//!
//! Generation cycle (상생): wood → fire → earth → metal → water → wood.
//! Overcoming cycle (상극): wood → earth → water → fire → metal → wood.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SajuError;

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in generation-cycle order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

/// Yin-yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YinYang {
    Yang,
    Yin,
}

impl YinYang {
    /// Korean name (양/음).
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Yang => "양",
            Self::Yin => "음",
        }
    }

    /// Polarity of a 0-based position in a stem or branch sequence.
    pub const fn from_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }
}

impl Element {
    /// Korean name (목/화/토/금/수).
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    /// Hanja name (木/火/土/金/水).
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// Lower-case English name, also the serialized form.
    pub const fn english(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    /// 0-based index in generation-cycle order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element at a 0-based index (wrapping modulo 5).
    pub const fn from_index(index: u8) -> Self {
        ALL_ELEMENTS[(index % 5) as usize]
    }

    /// The element this one generates (상생).
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The element this one overcomes (상극).
    pub const fn overcomes(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// The element that generates this one.
    pub const fn generated_by(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// The element that overcomes this one.
    pub const fn overcome_by(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Relation of `other` as seen from `self`.
    pub const fn relation_to(self, other: Element) -> ElementRelation {
        match (other.index() + 5 - self.index()) % 5 {
            0 => ElementRelation::Same,
            1 => ElementRelation::Generates,
            2 => ElementRelation::Overcomes,
            3 => ElementRelation::OvercomeBy,
            _ => ElementRelation::GeneratedBy,
        }
    }

    /// Parse from Korean, hanja or English. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        let n = name.trim();
        ALL_ELEMENTS.into_iter().find(|e| {
            n == e.korean() || n == e.hanja() || n.eq_ignore_ascii_case(e.english())
        })
    }
}

/// Relation between two elements from the perspective of the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementRelation {
    /// Both are the same element.
    Same,
    /// Self generates other.
    Generates,
    /// Self overcomes other.
    Overcomes,
    /// Other overcomes self.
    OvercomeBy,
    /// Other generates self.
    GeneratedBy,
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english())
    }
}

impl FromStr for Element {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| SajuError::UnknownElement(s.to_string()))
    }
}
