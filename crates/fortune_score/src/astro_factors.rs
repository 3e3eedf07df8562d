//! Astrology factor predicates and extraction.

use astro_base::{
    Aspect, Planet, PlanetPosition, angular_distance, find_aspects, is_full_moon, is_new_moon,
    is_void_of_course_moon, position_of,
};

use crate::factor::{FactorKey, FactorSet};

/// Transit Sun within this many degrees of the natal Sun is a solar return.
pub const SOLAR_RETURN_ORB_DEG: f64 = 1.0;

/// Natal points that transit aspects are measured against.
pub const NATAL_LUMINARIES: [Planet; 2] = [Planet::Sun, Planet::Moon];

/// Whether a placement is retrograde.
pub fn is_retrograde(position: &PlanetPosition) -> bool {
    position.is_retrograde()
}

/// Retrograde check from a planet name and daily speed; false for unknown names.
pub fn is_retrograde_by_name(planet: &str, speed: f64) -> bool {
    Planet::from_name(planet).is_some_and(|p| p.can_retrograde() && speed < 0.0)
}

/// Transit Sun has returned to its natal longitude.
pub fn is_solar_return(transit_sun: f64, natal_sun: f64) -> bool {
    angular_distance(transit_sun, natal_sun) <= SOLAR_RETURN_ORB_DEG
}

/// Major aspects from transiting bodies to the natal Sun and Moon.
/// The North Node does not cast aspects.
pub fn luminary_transits(natal: &[PlanetPosition], transits: &[PlanetPosition]) -> Vec<Aspect> {
    let targets: Vec<PlanetPosition> = natal
        .iter()
        .filter(|p| NATAL_LUMINARIES.contains(&p.planet))
        .copied()
        .collect();
    let movers: Vec<PlanetPosition> = transits
        .iter()
        .filter(|p| p.planet != Planet::NorthNode)
        .copied()
        .collect();
    find_aspects(&movers, &targets)
        .into_iter()
        .filter(|a| a.kind.is_major())
        .collect()
}

/// Any supportive transit to a natal luminary.
pub fn has_benefic_aspect(aspects: &[Aspect]) -> bool {
    aspects.iter().any(|a| a.score > 0.0)
}

/// Any tense transit to a natal luminary.
pub fn has_hard_aspect(aspects: &[Aspect]) -> bool {
    aspects.iter().any(|a| a.score < 0.0)
}

/// Astrology factor keys for a natal chart and a transit snapshot.
///
/// Missing placements simply leave their keys out.
pub fn extract_astro_factors(natal: &[PlanetPosition], transits: &[PlanetPosition]) -> FactorSet {
    let mut set = FactorSet::new();
    let retro = |planet| position_of(transits, planet).is_some_and(is_retrograde);
    set.insert_if(retro(Planet::Mercury), FactorKey::RetrogradeMercury);
    set.insert_if(retro(Planet::Venus), FactorKey::RetrogradeVenus);
    set.insert_if(retro(Planet::Mars), FactorKey::RetrogradeMars);

    let moon = position_of(transits, Planet::Moon);
    let sun = position_of(transits, Planet::Sun);
    if let Some(moon) = moon {
        set.insert_if(is_void_of_course_moon(moon, transits), FactorKey::VoidOfCourseMoon);
    }
    if let (Some(moon), Some(sun)) = (moon, sun) {
        set.insert_if(is_new_moon(moon.longitude, sun.longitude), FactorKey::NewMoon);
        set.insert_if(is_full_moon(moon.longitude, sun.longitude), FactorKey::FullMoon);
    }

    let aspects = luminary_transits(natal, transits);
    set.insert_if(has_benefic_aspect(&aspects), FactorKey::BeneficAspect);
    set.insert_if(has_hard_aspect(&aspects), FactorKey::HardAspect);

    if let (Some(ts), Some(ns)) = (sun, position_of(natal, Planet::Sun)) {
        set.insert_if(is_solar_return(ts.longitude, ns.longitude), FactorKey::SolarReturn);
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(planet: Planet, lon: f64) -> PlanetPosition {
        PlanetPosition::new(planet, lon)
    }

    #[test]
    fn retrograde_by_name() {
        assert!(is_retrograde_by_name("mercury", -0.4));
        assert!(!is_retrograde_by_name("moon", -0.4));
        assert!(!is_retrograde_by_name("vulcan", -0.4));
    }

    #[test]
    fn solar_return_window() {
        assert!(is_solar_return(100.5, 100.0));
        assert!(is_solar_return(359.6, 0.2));
        assert!(!is_solar_return(102.0, 100.0));
    }

    #[test]
    fn retrograde_keys_in_order() {
        let transits = [
            pos(Planet::Mars, 10.0).with_speed(-0.2),
            pos(Planet::Mercury, 50.0).with_speed(-1.0),
        ];
        let set = extract_astro_factors(&[], &transits);
        assert_eq!(
            set.as_slice(),
            &[FactorKey::RetrogradeMercury, FactorKey::RetrogradeMars]
        );
    }

    #[test]
    fn full_moon_and_benefic() {
        let natal = [pos(Planet::Sun, 40.0)];
        let transits = [
            pos(Planet::Sun, 200.0),
            pos(Planet::Moon, 15.0),
            pos(Planet::Jupiter, 160.0),
        ];
        let set = extract_astro_factors(&natal, &transits);
        assert!(set.contains(FactorKey::FullMoon));
        assert!(!set.contains(FactorKey::NewMoon));
        // Jupiter trine natal Sun
        assert!(set.contains(FactorKey::BeneficAspect));
        assert!(!set.contains(FactorKey::SolarReturn));
    }

    #[test]
    fn hard_aspect_and_solar_return() {
        let natal = [pos(Planet::Sun, 40.0), pos(Planet::Moon, 300.0)];
        let transits = [pos(Planet::Sun, 40.4), pos(Planet::Saturn, 130.0)];
        let set = extract_astro_factors(&natal, &transits);
        assert!(set.contains(FactorKey::SolarReturn));
        assert!(set.contains(FactorKey::HardAspect));
    }

    #[test]
    fn empty_inputs_yield_nothing() {
        assert!(extract_astro_factors(&[], &[]).is_empty());
    }
}
