//! Draconic chart: every longitude measured from the North Node.

use crate::planet::Planet;
use crate::position::{PlanetPosition, position_of};
use crate::util::normalize_360;

/// Longitude relative to the node, in [0, 360).
pub fn draconic_longitude(lon: f64, node_lon: f64) -> f64 {
    normalize_360(lon - node_lon)
}

/// Chart with the North Node rotated to 0 deg Aries.
///
/// Returns `None` when the placements carry no North Node.
pub fn draconic_chart(positions: &[PlanetPosition]) -> Option<Vec<PlanetPosition>> {
    let node = position_of(positions, Planet::NorthNode)?.longitude;
    Some(
        positions
            .iter()
            .map(|p| PlanetPosition {
                longitude: draconic_longitude(p.longitude, node),
                ..*p
            })
            .collect(),
    )
}
