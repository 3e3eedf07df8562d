//! Integration tests for aspect detection, lunar phase and void-of-course.

use astro_base::{
    ALL_ASPECTS, AspectKind, LunarPhase, Planet, PlanetPosition, ZodiacSign, draconic_chart,
    find_aspects, is_full_moon, is_new_moon, is_void_of_course_moon, lunar_phase, match_aspect,
};

// ---------------------------------------------------------------------------
// Aspect angles
// ---------------------------------------------------------------------------

#[test]
fn every_kind_matches_its_exact_angle() {
    for k in ALL_ASPECTS {
        let (found, orb) = match_aspect(15.0, 15.0 + k.angle()).unwrap();
        assert_eq!(found, k, "{k}");
        assert!(orb.abs() < 1e-9);
    }
}

#[test]
fn orb_edges() {
    assert_eq!(match_aspect(0.0, 96.5).map(|a| a.0), Some(AspectKind::Square));
    assert_eq!(match_aspect(0.0, 97.1).map(|a| a.0), None);
    assert_eq!(match_aspect(0.0, 128.0).map(|a| a.0), Some(AspectKind::Trine));
}

#[test]
fn scores_bounded() {
    let natal = [
        PlanetPosition::new(Planet::Sun, 45.0),
        PlanetPosition::new(Planet::Moon, 200.0),
    ];
    let transit: Vec<PlanetPosition> = (0..36)
        .map(|i| PlanetPosition::new(Planet::Mars, i as f64 * 10.0))
        .collect();
    for a in find_aspects(&transit, &natal) {
        assert!((-1.0..=1.0).contains(&a.score), "{a:?}");
        assert!(a.orb <= a.kind.orb());
    }
}

#[test]
fn transit_to_natal_direction() {
    let natal = [PlanetPosition::new(Planet::Sun, 0.0)];
    let transit = [PlanetPosition::new(Planet::Jupiter, 120.5)];
    let found = find_aspects(&transit, &natal);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].from, Planet::Jupiter);
    assert_eq!(found[0].to, Planet::Sun);
    assert_eq!(found[0].kind, AspectKind::Trine);
}

// ---------------------------------------------------------------------------
// Moon
// ---------------------------------------------------------------------------

#[test]
fn phase_cycle_in_order() {
    let phases: Vec<LunarPhase> = (0..8)
        .map(|i| lunar_phase(100.0 + i as f64 * 45.0, 100.0))
        .collect();
    assert_eq!(phases[0], LunarPhase::NewMoon);
    assert_eq!(phases[2], LunarPhase::FirstQuarter);
    assert_eq!(phases[4], LunarPhase::FullMoon);
    assert_eq!(phases[6], LunarPhase::LastQuarter);
}

#[test]
fn new_and_full_exclusive() {
    for e in 0..360 {
        let moon = e as f64;
        assert!(!(is_new_moon(moon, 0.0) && is_full_moon(moon, 0.0)));
    }
}

#[test]
fn void_early_in_sign_is_rare() {
    // At 1 deg of a sign the Moon sweeps 29 deg; with the Sun 100 deg
    // ahead, a sextile/square target falls in range.
    let moon = PlanetPosition::new(Planet::Moon, 1.0);
    let sun = PlanetPosition::new(Planet::Sun, 100.0);
    assert!(!is_void_of_course_moon(&moon, &[sun]));
}

// ---------------------------------------------------------------------------
// Draconic
// ---------------------------------------------------------------------------

#[test]
fn draconic_node_in_aries() {
    let chart = [
        PlanetPosition::new(Planet::Venus, 250.0),
        PlanetPosition::new(Planet::NorthNode, 250.0),
    ];
    let d = draconic_chart(&chart).unwrap();
    assert_eq!(d[0].sign(), ZodiacSign::Aries);
    assert_eq!(d[1].sign(), ZodiacSign::Aries);
}
