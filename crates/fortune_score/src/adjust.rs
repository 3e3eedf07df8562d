//! Per-category adjustment builders.
//!
//! Each builder turns chart and date data into a list of signed
//! adjustments. Positive values raise the category above its base score,
//! negative values lower it. An empty list leaves the base score.

use serde::{Deserialize, Serialize};

use astro_base::{LunarPhase, Planet, PlanetPosition, find_aspects, lunar_phase, position_of};
use fortune_config::Category;
use saju_base::{
    Branch, Element, Pillar, SajuChart, Sipsin, Stem, is_chung, is_hai, is_pa,
    is_samhap_partial, is_xing, is_yukhap, sipsin,
};

use crate::factor::{FactorKey, FactorSet};
use crate::saju_factors::TargetPillars;

/// Scale applied to aspect scores from the transit Sun.
const SUN_ASPECT_SCALE: f64 = 0.10;
/// Scale applied to aspect scores from the transit Moon.
const MOON_ASPECT_SCALE: f64 = 0.08;
/// Scale applied to aspect scores from the other transiting planets.
const PLANET_ASPECT_SCALE: f64 = 0.06;
/// Scale applied to a near-return Sun-to-Sun aspect.
const RETURN_ASPECT_SCALE: f64 = 0.05;

/// Planets scored under the major-planets category.
pub const MAJOR_TRANSIT_PLANETS: [Planet; 8] = [
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Uranus,
    Planet::Neptune,
    Planet::Pluto,
];

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

/// Adjustment for the ten god a stem forms with the day master.
pub const fn sipsin_weight(god: Sipsin) -> f64 {
    match god {
        Sipsin::Jeongin => 0.18,
        Sipsin::Jeonggwan => 0.15,
        Sipsin::Siksin => 0.15,
        Sipsin::Jeongjae => 0.12,
        Sipsin::Pyeonjae => 0.08,
        Sipsin::Pyeonin => 0.05,
        Sipsin::Bigyeon => 0.03,
        Sipsin::Sanggwan => -0.08,
        Sipsin::Geopjae => -0.10,
        Sipsin::Pyeongwan => -0.15,
    }
}

/// Sum of the relation weights holding between a natal and a target branch.
pub fn relation_weight(natal: Branch, target: Branch) -> f64 {
    [
        (is_yukhap(natal, target), FactorKey::BranchYukhap),
        (is_samhap_partial(natal, target), FactorKey::BranchSamhap),
        (is_chung(natal, target), FactorKey::BranchChung),
        (is_xing(natal, target), FactorKey::BranchXing),
        (is_hai(natal, target), FactorKey::BranchHai),
        (is_pa(natal, target), FactorKey::BranchPa),
    ]
    .iter()
    .filter(|(holds, _)| *holds)
    .map(|(_, k)| k.weight())
    .sum()
}

/// Adjustment for the Moon's phase.
pub const fn phase_weight(phase: LunarPhase) -> f64 {
    match phase {
        LunarPhase::NewMoon => 0.06,
        LunarPhase::WaxingCrescent => 0.05,
        LunarPhase::FirstQuarter => -0.02,
        LunarPhase::WaxingGibbous => 0.04,
        LunarPhase::FullMoon => 0.03,
        LunarPhase::WaningGibbous => 0.0,
        LunarPhase::LastQuarter => -0.04,
        LunarPhase::WaningCrescent => -0.05,
    }
}

/// Adjustment when the favourable element (용신) meets the day.
pub fn yongsin_adjustments(yongsin: Option<Element>, day: Pillar) -> Vec<f64> {
    let Some(y) = yongsin else {
        return Vec::new();
    };
    let mut out = Vec::new();
    let (stem_el, branch_el) = day.elements();
    if stem_el == y {
        out.push(0.12);
    } else if stem_el == y.generated_by() {
        out.push(0.05);
    } else if stem_el == y.overcome_by() {
        out.push(-0.10);
    }
    if branch_el == y {
        out.push(0.06);
    } else if branch_el == y.overcome_by() {
        out.push(-0.05);
    }
    out
}

// ---------------------------------------------------------------------------
// Saju categories
// ---------------------------------------------------------------------------

/// Ten-god weight of the pillar's stem plus its branch relations to the
/// natal day branch.
pub fn pillar_adjustments(day_master: Stem, natal_day: Branch, pillar: Pillar) -> Vec<f64> {
    let mut out = vec![sipsin_weight(sipsin(day_master, pillar.stem))];
    let rel = relation_weight(natal_day, pillar.branch);
    if rel != 0.0 {
        out.push(rel);
    }
    out
}

/// 대운: the current ten-year pillar, when the provider supplies one.
pub fn daeun_adjustments(natal: &SajuChart, daeun: Option<Pillar>) -> Vec<f64> {
    daeun.map_or_else(Vec::new, |p| {
        pillar_adjustments(natal.day_master(), natal.day.branch, p)
    })
}

/// 세운: the target year pillar, with the 삼재 penalty.
pub fn seun_adjustments(natal: &SajuChart, target: &TargetPillars, keys: &FactorSet) -> Vec<f64> {
    let mut out = pillar_adjustments(natal.day_master(), natal.day.branch, target.year);
    if keys.contains(FactorKey::SamjaeYear) {
        out.push(FactorKey::SamjaeYear.weight());
    }
    out
}

/// 월운: the target month pillar.
pub fn wolun_adjustments(natal: &SajuChart, target: &TargetPillars) -> Vec<f64> {
    pillar_adjustments(natal.day_master(), natal.day.branch, target.month)
}

/// 일진: ten-god weight of the day stem plus every day-level factor.
pub fn iljin_adjustments(natal: &SajuChart, target: &TargetPillars, keys: &FactorSet) -> Vec<f64> {
    let mut out = vec![sipsin_weight(sipsin(natal.day_master(), target.day.stem))];
    out.extend(
        keys.iter()
            .filter(|k| k.is_saju() && *k != FactorKey::SamjaeYear)
            .map(FactorKey::weight),
    );
    out
}

// ---------------------------------------------------------------------------
// Astrology categories
// ---------------------------------------------------------------------------

fn aspect_adjustments(
    movers: &[Planet],
    natal: &[PlanetPosition],
    transits: &[PlanetPosition],
    scale: f64,
) -> Vec<f64> {
    let from: Vec<PlanetPosition> = transits
        .iter()
        .filter(|p| movers.contains(&p.planet))
        .copied()
        .collect();
    find_aspects(&from, natal)
        .iter()
        .filter(|a| a.kind.is_major())
        .map(|a| a.score * scale)
        .collect()
}

pub fn transit_sun_adjustments(natal: &[PlanetPosition], transits: &[PlanetPosition]) -> Vec<f64> {
    aspect_adjustments(&[Planet::Sun], natal, transits, SUN_ASPECT_SCALE)
}

/// Transit Moon aspects, with the void-of-course penalty.
pub fn transit_moon_adjustments(
    natal: &[PlanetPosition],
    transits: &[PlanetPosition],
    keys: &FactorSet,
) -> Vec<f64> {
    let mut out = aspect_adjustments(&[Planet::Moon], natal, transits, MOON_ASPECT_SCALE);
    if keys.contains(FactorKey::VoidOfCourseMoon) {
        out.push(FactorKey::VoidOfCourseMoon.weight());
    }
    out
}

/// Aspects from Mercury through Pluto, with retrograde penalties.
pub fn major_planet_adjustments(
    natal: &[PlanetPosition],
    transits: &[PlanetPosition],
    keys: &FactorSet,
) -> Vec<f64> {
    let mut out = aspect_adjustments(&MAJOR_TRANSIT_PLANETS, natal, transits, PLANET_ASPECT_SCALE);
    for k in [
        FactorKey::RetrogradeMercury,
        FactorKey::RetrogradeVenus,
        FactorKey::RetrogradeMars,
    ] {
        if keys.contains(k) {
            out.push(k.weight());
        }
    }
    out
}

pub fn lunar_phase_adjustments(transits: &[PlanetPosition]) -> Vec<f64> {
    match (
        position_of(transits, Planet::Moon),
        position_of(transits, Planet::Sun),
    ) {
        (Some(m), Some(s)) => vec![phase_weight(lunar_phase(m.longitude, s.longitude))],
        _ => Vec::new(),
    }
}

/// Full weight on a solar return, otherwise a scaled Sun-to-Sun aspect.
pub fn solar_return_adjustments(
    natal: &[PlanetPosition],
    transits: &[PlanetPosition],
    keys: &FactorSet,
) -> Vec<f64> {
    if keys.contains(FactorKey::SolarReturn) {
        return vec![FactorKey::SolarReturn.weight()];
    }
    let natal_sun: Vec<PlanetPosition> =
        position_of(natal, Planet::Sun).into_iter().copied().collect();
    aspect_adjustments(&[Planet::Sun], &natal_sun, transits, RETURN_ASPECT_SCALE)
}

// ---------------------------------------------------------------------------
// All categories
// ---------------------------------------------------------------------------

/// Everything the builders read for one date.
#[derive(Debug, Clone, Copy)]
pub struct AdjustmentInput<'a> {
    pub natal_saju: &'a SajuChart,
    pub daeun: Option<Pillar>,
    pub yongsin: Option<Element>,
    pub target: &'a TargetPillars,
    pub natal_planets: &'a [PlanetPosition],
    pub transit_planets: &'a [PlanetPosition],
    pub saju_keys: &'a FactorSet,
    pub astro_keys: &'a FactorSet,
}

/// Adjustment lists for all ten categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAdjustments {
    pub daeun: Vec<f64>,
    pub seun: Vec<f64>,
    pub wolun: Vec<f64>,
    pub iljin: Vec<f64>,
    pub yongsin: Vec<f64>,
    pub transit_sun: Vec<f64>,
    pub transit_moon: Vec<f64>,
    pub major_planets: Vec<f64>,
    pub lunar_phase: Vec<f64>,
    pub solar_return: Vec<f64>,
}

impl CategoryAdjustments {
    pub fn build(input: &AdjustmentInput<'_>) -> Self {
        let natal = input.natal_saju;
        let (np, tp) = (input.natal_planets, input.transit_planets);
        Self {
            daeun: daeun_adjustments(natal, input.daeun),
            seun: seun_adjustments(natal, input.target, input.saju_keys),
            wolun: wolun_adjustments(natal, input.target),
            iljin: iljin_adjustments(natal, input.target, input.saju_keys),
            yongsin: yongsin_adjustments(input.yongsin, input.target.day),
            transit_sun: transit_sun_adjustments(np, tp),
            transit_moon: transit_moon_adjustments(np, tp, input.astro_keys),
            major_planets: major_planet_adjustments(np, tp, input.astro_keys),
            lunar_phase: lunar_phase_adjustments(tp),
            solar_return: solar_return_adjustments(np, tp, input.astro_keys),
        }
    }

    pub fn get(&self, category: Category) -> &[f64] {
        match category {
            Category::Daeun => &self.daeun,
            Category::Seun => &self.seun,
            Category::Wolun => &self.wolun,
            Category::Iljin => &self.iljin,
            Category::Yongsin => &self.yongsin,
            Category::TransitSun => &self.transit_sun,
            Category::TransitMoon => &self.transit_moon,
            Category::MajorPlanets => &self.major_planets,
            Category::LunarPhase => &self.lunar_phase,
            Category::SolarReturn => &self.solar_return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(year: &str, month: &str, day: &str) -> SajuChart {
        SajuChart {
            year: Pillar::from_name(year).unwrap(),
            month: Pillar::from_name(month).unwrap(),
            day: Pillar::from_name(day).unwrap(),
            hour: None,
        }
    }

    #[test]
    fn jeongin_weight() {
        // 갑 day master, 계 stem: water generates wood, opposite polarity
        assert_eq!(sipsin(Stem::Gap, Stem::Gye), Sipsin::Jeongin);
        assert!((sipsin_weight(Sipsin::Jeongin) - 0.18).abs() < 1e-12);
    }

    #[test]
    fn iljin_jeongin_only() {
        let natal = chart("경오", "신사", "갑자");
        // 계유 day: 정인 stem and no factor keys
        let target = TargetPillars {
            year: Pillar::from_name("병오").unwrap(),
            month: Pillar::from_name("무술").unwrap(),
            day: Pillar::from_name("계유").unwrap(),
        };
        let adj = iljin_adjustments(&natal, &target, &FactorSet::new());
        assert_eq!(adj, vec![0.18]);
    }

    #[test]
    fn iljin_excludes_samjae() {
        let natal = chart("경오", "신사", "갑자");
        let target = TargetPillars {
            year: Pillar::from_name("병오").unwrap(),
            month: Pillar::from_name("무술").unwrap(),
            day: Pillar::from_name("계유").unwrap(),
        };
        let keys: FactorSet = [FactorKey::SamjaeYear, FactorKey::CheoneulGwiin]
            .into_iter()
            .collect();
        let adj = iljin_adjustments(&natal, &target, &keys);
        assert_eq!(adj, vec![0.18, 0.10]);
        let seun = seun_adjustments(&natal, &target, &keys);
        assert_eq!(seun.last().copied(), Some(-0.06));
    }

    #[test]
    fn chung_relation_negative() {
        assert!(relation_weight(Branch::Ja, Branch::O) < 0.0);
        assert!(relation_weight(Branch::Ja, Branch::Chuk) > 0.0);
        assert_eq!(relation_weight(Branch::Ja, Branch::In), 0.0);
    }

    #[test]
    fn yongsin_match_and_clash() {
        let day = Pillar::from_name("갑인").unwrap();
        assert_eq!(yongsin_adjustments(Some(Element::Wood), day), vec![0.12, 0.06]);
        assert!(yongsin_adjustments(None, day).is_empty());
        let metal_day = Pillar::from_name("경신").unwrap();
        let adj = yongsin_adjustments(Some(Element::Wood), metal_day);
        assert!(adj.iter().all(|a| *a < 0.0));
    }

    #[test]
    fn no_transits_no_astro_adjustments() {
        let natal = [PlanetPosition::new(Planet::Sun, 0.0)];
        assert!(transit_sun_adjustments(&natal, &[]).is_empty());
        assert!(lunar_phase_adjustments(&[]).is_empty());
        assert!(solar_return_adjustments(&natal, &[], &FactorSet::new()).is_empty());
    }

    #[test]
    fn retrograde_penalties_applied() {
        let keys: FactorSet = [FactorKey::RetrogradeMercury, FactorKey::RetrogradeMars]
            .into_iter()
            .collect();
        let adj = major_planet_adjustments(&[], &[], &keys);
        assert_eq!(adj, vec![-0.06, -0.05]);
    }
}
