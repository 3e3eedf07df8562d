//! Heavenly stems (천간).
//!
//! Ten stems in cyclic order, paired two per element, alternating yang/yin:
//! 갑을 (wood), 병정 (fire), 무기 (earth), 경신 (metal), 임계 (water).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, YinYang};
use crate::error::SajuError;

/// The 10 heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stem {
    #[serde(rename = "갑", alias = "甲")]
    Gap,
    #[serde(rename = "을", alias = "乙")]
    Eul,
    #[serde(rename = "병", alias = "丙")]
    Byeong,
    #[serde(rename = "정", alias = "丁")]
    Jeong,
    #[serde(rename = "무", alias = "戊")]
    Mu,
    #[serde(rename = "기", alias = "己")]
    Gi,
    #[serde(rename = "경", alias = "庚")]
    Gyeong,
    #[serde(rename = "신", alias = "辛")]
    Sin,
    #[serde(rename = "임", alias = "壬")]
    Im,
    #[serde(rename = "계", alias = "癸")]
    Gye,
}

/// All 10 stems in order (index 0 = 갑).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

const HANGUL: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];
const HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl Stem {
    /// 0-based index (갑=0 .. 계=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at a 0-based index, wrapping modulo 10.
    pub const fn from_index(index: u8) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Hangul name.
    pub const fn name(self) -> &'static str {
        HANGUL[self as usize]
    }

    /// Hanja name.
    pub const fn hanja(self) -> &'static str {
        HANJA[self as usize]
    }

    /// Element of the stem.
    pub const fn element(self) -> Element {
        Element::from_index(self.index() / 2)
    }

    /// Polarity of the stem.
    pub const fn yin_yang(self) -> YinYang {
        YinYang::from_index(self.index())
    }

    /// Parse from hangul or hanja. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        let n = name.trim();
        HANGUL
            .iter()
            .position(|h| *h == n)
            .or_else(|| HANJA.iter().position(|h| *h == n))
            .map(|i| ALL_STEMS[i])
    }

    /// Stem combination (천간합) partner and the element it transforms into.
    ///
    /// 갑기→토, 을경→금, 병신→수, 정임→목, 무계→화.
    pub const fn hap(self) -> (Stem, Element) {
        let partner = Stem::from_index(self.index() + 5);
        let element = match self.index() % 5 {
            0 => Element::Earth,
            1 => Element::Metal,
            2 => Element::Water,
            3 => Element::Wood,
            _ => Element::Fire,
        };
        (partner, element)
    }

    /// Stem clash (천간충) partner. 무 and 기 (earth) have none.
    ///
    /// 갑경, 을신, 병임, 정계.
    pub const fn chung(self) -> Option<Stem> {
        match self {
            Self::Gap => Some(Self::Gyeong),
            Self::Gyeong => Some(Self::Gap),
            Self::Eul => Some(Self::Sin),
            Self::Sin => Some(Self::Eul),
            Self::Byeong => Some(Self::Im),
            Self::Im => Some(Self::Byeong),
            Self::Jeong => Some(Self::Gye),
            Self::Gye => Some(Self::Jeong),
            Self::Mu | Self::Gi => None,
        }
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stem {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| SajuError::UnknownStem(s.to_string()))
    }
}

/// Element of a stem given by name; `None` for unknown names.
pub fn stem_element(name: &str) -> Option<Element> {
    Stem::from_name(name).map(Stem::element)
}

/// Polarity of a stem given by name; `None` for unknown names.
pub fn stem_yin_yang(name: &str) -> Option<YinYang> {
    Stem::from_name(name).map(Stem::yin_yang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index(), i as u8);
            assert_eq!(Stem::from_index(i as u8), *s);
        }
    }

    #[test]
    fn elements_pairwise() {
        assert_eq!(Stem::Gap.element(), Element::Wood);
        assert_eq!(Stem::Eul.element(), Element::Wood);
        assert_eq!(Stem::Jeong.element(), Element::Fire);
        assert_eq!(Stem::Gi.element(), Element::Earth);
        assert_eq!(Stem::Sin.element(), Element::Metal);
        assert_eq!(Stem::Gye.element(), Element::Water);
    }

    #[test]
    fn parse_hangul_and_hanja() {
        assert_eq!(Stem::from_name("갑"), Some(Stem::Gap));
        assert_eq!(Stem::from_name(" 癸 "), Some(Stem::Gye));
        assert_eq!(Stem::from_name("자"), None);
        assert!("x".parse::<Stem>().is_err());
    }

    #[test]
    fn string_helpers_default_to_none() {
        assert_eq!(stem_element("병"), Some(Element::Fire));
        assert_eq!(stem_element(""), None);
        assert_eq!(stem_yin_yang("을"), Some(YinYang::Yin));
        assert_eq!(stem_yin_yang("unknown"), None);
    }

    #[test]
    fn hap_pairs() {
        assert_eq!(Stem::Gap.hap(), (Stem::Gi, Element::Earth));
        assert_eq!(Stem::Gi.hap(), (Stem::Gap, Element::Earth));
        assert_eq!(Stem::Eul.hap(), (Stem::Gyeong, Element::Metal));
        assert_eq!(Stem::Byeong.hap(), (Stem::Sin, Element::Water));
        assert_eq!(Stem::Jeong.hap(), (Stem::Im, Element::Wood));
        assert_eq!(Stem::Gye.hap(), (Stem::Mu, Element::Fire));
    }

    #[test]
    fn chung_is_symmetric() {
        for s in ALL_STEMS {
            if let Some(o) = s.chung() {
                assert_eq!(o.chung(), Some(s));
            }
        }
        assert_eq!(Stem::Mu.chung(), None);
    }

    #[test]
    fn serde_uses_hangul() {
        let json = serde_json::to_string(&Stem::Gyeong).unwrap();
        assert_eq!(json, "\"경\"");
        let s: Stem = serde_json::from_str("\"壬\"").unwrap();
        assert_eq!(s, Stem::Im);
    }
}
