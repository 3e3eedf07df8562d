//! Western astrology primitives for transit scoring.
//!
//! This crate provides:
//! - Planets, tropical zodiac signs and their element/modality/ruler
//! - Aspect detection with canonical angles, orbs and harmony scores
//! - Retrograde flags, lunar phase and the void-of-course Moon
//! - Draconic chart rotation
//!
//! Longitudes are tropical ecliptic degrees supplied by an external
//! ephemeris. Nothing here computes planetary positions.

pub mod aspect;
pub mod draconic;
pub mod error;
pub mod lunar;
pub mod planet;
pub mod position;
pub mod sign;
pub mod util;

pub use aspect::{
    ALL_ASPECTS, Aspect, AspectKind, MAJOR_ASPECTS, chart_aspects, find_aspect, find_aspects,
    match_aspect,
};
pub use draconic::{draconic_chart, draconic_longitude};
pub use error::AstroError;
pub use lunar::{
    ALL_PHASES, LunarPhase, SYZYGY_WINDOW_DEG, elongation, is_full_moon, is_new_moon,
    is_void_of_course_moon, lunar_phase,
};
pub use planet::{ALL_PLANETS, CLASSICAL_PLANETS, Planet, PlanetNature};
pub use position::{PlanetPosition, position_of, retrograde_planets};
pub use sign::{ALL_SIGNS, Modality, SignElement, SignPosition, ZodiacSign, sign_position};
pub use util::{angular_distance, normalize_360};
