//! Earthly branches (지지) and their hidden stems (지장간).
//!
//! Twelve branches starting from 자 (rat). Element counts are uneven:
//! earth holds the four "storage" branches 축 진 미 술.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, YinYang};
use crate::error::SajuError;
use crate::stem::Stem;

/// The 12 earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "자", alias = "子")]
    Ja,
    #[serde(rename = "축", alias = "丑")]
    Chuk,
    #[serde(rename = "인", alias = "寅")]
    In,
    #[serde(rename = "묘", alias = "卯")]
    Myo,
    #[serde(rename = "진", alias = "辰")]
    Jin,
    #[serde(rename = "사", alias = "巳")]
    Sa,
    #[serde(rename = "오", alias = "午")]
    O,
    #[serde(rename = "미", alias = "未")]
    Mi,
    #[serde(rename = "신", alias = "申")]
    Sin,
    #[serde(rename = "유", alias = "酉")]
    Yu,
    #[serde(rename = "술", alias = "戌")]
    Sul,
    #[serde(rename = "해", alias = "亥")]
    Hae,
}

/// All 12 branches in order (index 0 = 자).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

const HANGUL: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];
const HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const ANIMALS: [&str; 12] = [
    "쥐", "소", "호랑이", "토끼", "용", "뱀", "말", "양", "원숭이", "닭", "개", "돼지",
];

/// Hidden stems of a branch: 여기 (residual), 중기 (middle, optional), 정기 (main).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenStems {
    pub yeogi: Stem,
    pub junggi: Option<Stem>,
    pub jeonggi: Stem,
}

impl HiddenStems {
    /// Hidden stems in 여기, 중기, 정기 order, skipping an absent 중기.
    pub fn iter(&self) -> impl Iterator<Item = Stem> + '_ {
        std::iter::once(self.yeogi)
            .chain(self.junggi)
            .chain(std::iter::once(self.jeonggi))
    }
}

impl Branch {
    /// 0-based index (자=0 .. 해=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// Hangul name.
    pub const fn name(self) -> &'static str {
        HANGUL[self as usize]
    }

    /// Hanja name.
    pub const fn hanja(self) -> &'static str {
        HANJA[self as usize]
    }

    /// Zodiac animal (띠) in Korean.
    pub const fn animal(self) -> &'static str {
        ANIMALS[self as usize]
    }

    /// Element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => Element::Earth,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Hae | Self::Ja => Element::Water,
        }
    }

    /// Polarity of the branch (even index = yang).
    pub const fn yin_yang(self) -> YinYang {
        YinYang::from_index(self.index())
    }

    /// Hidden stems (지장간).
    pub const fn hidden_stems(self) -> HiddenStems {
        use Stem::*;
        let (yeogi, junggi, jeonggi) = match self {
            Self::Ja => (Im, None, Gye),
            Self::Chuk => (Gye, Some(Sin), Gi),
            Self::In => (Mu, Some(Byeong), Gap),
            Self::Myo => (Gap, None, Eul),
            Self::Jin => (Eul, Some(Gye), Mu),
            Self::Sa => (Mu, Some(Gyeong), Byeong),
            Self::O => (Byeong, Some(Gi), Jeong),
            Self::Mi => (Jeong, Some(Eul), Gi),
            Self::Sin => (Mu, Some(Im), Gyeong),
            Self::Yu => (Gyeong, None, Sin),
            Self::Sul => (Sin, Some(Jeong), Mu),
            Self::Hae => (Mu, Some(Gap), Im),
        };
        HiddenStems {
            yeogi,
            junggi,
            jeonggi,
        }
    }

    /// Branch governing a clock hour (0..=23). 자시 spans 23:00–00:59.
    pub fn from_hour(hour: u32) -> Result<Self, SajuError> {
        if hour > 23 {
            return Err(SajuError::InvalidHour(hour));
        }
        Ok(Self::from_index((((hour + 1) / 2) % 12) as u8))
    }

    /// Parse from hangul or hanja. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        let n = name.trim();
        HANGUL
            .iter()
            .position(|h| *h == n)
            .or_else(|| HANJA.iter().position(|h| *h == n))
            .map(|i| ALL_BRANCHES[i])
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Branch {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| SajuError::UnknownBranch(s.to_string()))
    }
}

/// Element of a branch given by name; `None` for unknown names.
pub fn branch_element(name: &str) -> Option<Element> {
    Branch::from_name(name).map(Branch::element)
}

/// Polarity of a branch given by name; `None` for unknown names.
pub fn branch_yin_yang(name: &str) -> Option<YinYang> {
    Branch::from_name(name).map(Branch::yin_yang)
}

/// Hidden stems of a branch given by name; empty for unknown names.
pub fn jijanggan(name: &str) -> Vec<Stem> {
    Branch::from_name(name)
        .map(|b| b.hidden_stems().iter().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index(), i as u8);
            assert_eq!(Branch::from_index(i as u8 + 12), *b);
        }
    }

    #[test]
    fn hour_boundaries() {
        assert_eq!(Branch::from_hour(23).unwrap(), Branch::Ja);
        assert_eq!(Branch::from_hour(0).unwrap(), Branch::Ja);
        assert_eq!(Branch::from_hour(1).unwrap(), Branch::Chuk);
        assert_eq!(Branch::from_hour(12).unwrap(), Branch::O);
        assert_eq!(Branch::from_hour(22).unwrap(), Branch::Hae);
        assert_eq!(Branch::from_hour(24), Err(SajuError::InvalidHour(24)));
    }

    #[test]
    fn main_hidden_stem_matches_element() {
        for b in ALL_BRANCHES {
            assert_eq!(b.hidden_stems().jeonggi.element(), b.element(), "{b}");
        }
    }

    #[test]
    fn jijanggan_by_name() {
        assert_eq!(jijanggan("인"), vec![Stem::Mu, Stem::Byeong, Stem::Gap]);
        assert_eq!(jijanggan("酉"), vec![Stem::Gyeong, Stem::Sin]);
        assert!(jijanggan("갑").is_empty());
    }

    #[test]
    fn name_helpers() {
        assert_eq!(branch_element("해"), Some(Element::Water));
        assert_eq!(branch_element("?"), None);
        assert_eq!(branch_yin_yang("축"), Some(YinYang::Yin));
        assert_eq!(Branch::Yu.animal(), "닭");
    }
}
