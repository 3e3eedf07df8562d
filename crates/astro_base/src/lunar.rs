//! Lunar phase and void-of-course Moon.
//!
//! The phase is derived from the Moon-Sun elongation, measured eastward from
//! the Sun in [0, 360). Void of course is tested against the classical
//! planets treated as stationary for the rest of the Moon's passage through
//! its current sign.

use serde::{Deserialize, Serialize};

use crate::aspect::MAJOR_ASPECTS;
use crate::planet::{CLASSICAL_PLANETS, Planet};
use crate::position::PlanetPosition;
use crate::sign::sign_position;
use crate::util::normalize_360;

/// Elongation window (deg) around 0 and 180 counted as new / full Moon.
pub const SYZYGY_WINDOW_DEG: f64 = 12.0;

/// Eight named phases of the synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LunarPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

pub const ALL_PHASES: [LunarPhase; 8] = [
    LunarPhase::NewMoon,
    LunarPhase::WaxingCrescent,
    LunarPhase::FirstQuarter,
    LunarPhase::WaxingGibbous,
    LunarPhase::FullMoon,
    LunarPhase::WaningGibbous,
    LunarPhase::LastQuarter,
    LunarPhase::WaningCrescent,
];

impl LunarPhase {
    /// Phase for an elongation, each phase spanning 45 deg centered on its
    /// canonical angle (new moon centered on 0).
    pub fn from_elongation(elongation: f64) -> Self {
        let e = normalize_360(elongation);
        let idx = (((e + 22.5) / 45.0).floor() as usize) % 8;
        ALL_PHASES[idx]
    }

    /// Korean name.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::NewMoon => "삭",
            Self::WaxingCrescent => "초승달",
            Self::FirstQuarter => "상현",
            Self::WaxingGibbous => "차오르는 달",
            Self::FullMoon => "망",
            Self::WaningGibbous => "기우는 달",
            Self::LastQuarter => "하현",
            Self::WaningCrescent => "그믐달",
        }
    }

    /// Whether the Moon is growing toward full.
    pub const fn is_waxing(self) -> bool {
        matches!(
            self,
            Self::WaxingCrescent | Self::FirstQuarter | Self::WaxingGibbous
        )
    }
}

/// Moon-Sun elongation in [0, 360).
pub fn elongation(moon_lon: f64, sun_lon: f64) -> f64 {
    normalize_360(moon_lon - sun_lon)
}

/// Phase of the Moon for the given longitudes.
pub fn lunar_phase(moon_lon: f64, sun_lon: f64) -> LunarPhase {
    LunarPhase::from_elongation(elongation(moon_lon, sun_lon))
}

/// Moon within [`SYZYGY_WINDOW_DEG`] of conjunction with the Sun.
pub fn is_new_moon(moon_lon: f64, sun_lon: f64) -> bool {
    let e = elongation(moon_lon, sun_lon);
    e < SYZYGY_WINDOW_DEG || e > 360.0 - SYZYGY_WINDOW_DEG
}

/// Moon within [`SYZYGY_WINDOW_DEG`] of opposition to the Sun.
pub fn is_full_moon(moon_lon: f64, sun_lon: f64) -> bool {
    (elongation(moon_lon, sun_lon) - 180.0).abs() < SYZYGY_WINDOW_DEG
}

/// Whether the Moon makes no further Ptolemaic aspect to a classical planet
/// before leaving its current sign.
///
/// `others` may contain any placements, including the Moon itself; only the
/// classical planets other than the Moon are considered. With no such
/// planets the Moon is not reported void.
pub fn is_void_of_course_moon(moon: &PlanetPosition, others: &[PlanetPosition]) -> bool {
    let remaining = 30.0 - sign_position(moon.longitude).degrees_in_sign;
    let mut considered = 0usize;
    for p in others {
        if p.planet == Planet::Moon || !CLASSICAL_PLANETS.contains(&p.planet) {
            continue;
        }
        considered += 1;
        if perfects_within(moon.longitude, p.longitude, remaining) {
            return false;
        }
    }
    considered > 0
}

/// Whether a body moving forward from `moving` reaches an exact major aspect
/// to the fixed point `fixed` within `span` degrees.
fn perfects_within(moving: f64, fixed: f64, span: f64) -> bool {
    MAJOR_ASPECTS.iter().any(|k| {
        let a = k.angle();
        [fixed + a, fixed - a]
            .into_iter()
            .any(|target| normalize_360(target - moving) <= span)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_boundaries() {
        assert_eq!(LunarPhase::from_elongation(0.0), LunarPhase::NewMoon);
        assert_eq!(LunarPhase::from_elongation(350.0), LunarPhase::NewMoon);
        assert_eq!(LunarPhase::from_elongation(45.0), LunarPhase::WaxingCrescent);
        assert_eq!(LunarPhase::from_elongation(90.0), LunarPhase::FirstQuarter);
        assert_eq!(LunarPhase::from_elongation(180.0), LunarPhase::FullMoon);
        assert_eq!(LunarPhase::from_elongation(270.0), LunarPhase::LastQuarter);
        assert_eq!(LunarPhase::from_elongation(320.0), LunarPhase::WaningCrescent);
    }

    #[test]
    fn syzygy_windows() {
        assert!(is_new_moon(5.0, 355.0));
        assert!(!is_new_moon(30.0, 0.0));
        assert!(is_full_moon(190.0, 0.0));
        assert!(!is_full_moon(200.0, 0.0));
    }

    #[test]
    fn waxing_flag() {
        assert!(lunar_phase(100.0, 0.0).is_waxing());
        assert!(!lunar_phase(260.0, 0.0).is_waxing());
    }

    #[test]
    fn void_late_in_sign() {
        // Moon at 28 Aries; Sun at 100: nearest targets are 10 and 40
        let moon = PlanetPosition::new(Planet::Moon, 28.0);
        let others = [PlanetPosition::new(Planet::Sun, 100.0)];
        assert!(is_void_of_course_moon(&moon, &others));
    }

    #[test]
    fn not_void_when_conjunction_ahead() {
        let moon = PlanetPosition::new(Planet::Moon, 28.0);
        let others = [PlanetPosition::new(Planet::Sun, 29.0)];
        assert!(!is_void_of_course_moon(&moon, &others));
    }

    #[test]
    fn outer_planets_ignored() {
        let moon = PlanetPosition::new(Planet::Moon, 28.0);
        let others = [
            PlanetPosition::new(Planet::Sun, 100.0),
            PlanetPosition::new(Planet::Pluto, 29.0),
        ];
        assert!(is_void_of_course_moon(&moon, &others));
    }

    #[test]
    fn no_planets_not_void() {
        let moon = PlanetPosition::new(Planet::Moon, 28.0);
        assert!(!is_void_of_course_moon(&moon, &[moon]));
    }
}
