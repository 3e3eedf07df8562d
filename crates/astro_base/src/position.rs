//! Planet placements as supplied by an ephemeris provider.

use serde::{Deserialize, Serialize};

use crate::planet::Planet;
use crate::sign::{SignPosition, ZodiacSign, sign_position};
use crate::util::normalize_360;

/// A planet's ecliptic placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPosition {
    pub planet: Planet,
    /// Tropical ecliptic longitude in degrees.
    pub longitude: f64,
    /// Longitude speed in degrees per day; negative when retrograde.
    #[serde(default)]
    pub speed: f64,
    /// House number 1..=12 when birth time and place are known.
    #[serde(default)]
    pub house: Option<u8>,
}

impl PlanetPosition {
    /// Placement with no speed or house information.
    pub fn new(planet: Planet, longitude: f64) -> Self {
        Self {
            planet,
            longitude: normalize_360(longitude),
            speed: 0.0,
            house: None,
        }
    }

    /// Builder-style speed setter.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Builder-style house setter.
    pub fn with_house(mut self, house: u8) -> Self {
        self.house = Some(house);
        self
    }

    /// Sign containing the planet.
    pub fn sign(&self) -> ZodiacSign {
        ZodiacSign::from_longitude(self.longitude)
    }

    /// Sign and degrees within the sign.
    pub fn sign_position(&self) -> SignPosition {
        sign_position(self.longitude)
    }

    /// Whether the planet is moving backwards along the ecliptic.
    /// Always false for bodies that cannot station.
    pub fn is_retrograde(&self) -> bool {
        self.planet.can_retrograde() && self.speed < 0.0
    }
}

/// Position of a planet in a set of placements.
pub fn position_of(positions: &[PlanetPosition], planet: Planet) -> Option<&PlanetPosition> {
    positions.iter().find(|p| p.planet == planet)
}

/// Retrograde planets in a set of placements, in input order.
pub fn retrograde_planets(positions: &[PlanetPosition]) -> Vec<Planet> {
    positions
        .iter()
        .filter(|p| p.is_retrograde())
        .map(|p| p.planet)
        .collect()
}
