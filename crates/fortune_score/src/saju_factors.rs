//! Saju factor predicates and extraction.
//!
//! Each predicate is a pure function of a natal reference and a target
//! reference. The `*_by_name` variants take hangul or hanja names and return
//! false for anything they cannot parse.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use saju_base::{
    Branch, Pillar, SajuChart, Stem, cheoneul_gwiin, day_pillar, dohwa, geonrok, hwagae,
    is_chung, is_hai, is_pa, is_samhap_partial, is_xing, is_yukhap, month_pillar, samjae_years,
    yangin, year_pillar, yeokma,
};

use crate::factor::{FactorKey, FactorSet};

/// Year, month and day pillars of the date being scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
}

impl TargetPillars {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            year: year_pillar(date),
            month: month_pillar(date),
            day: day_pillar(date),
        }
    }
}

// ---------------------------------------------------------------------------
// Typed predicates
// ---------------------------------------------------------------------------

/// Target branch is one of the day master's 천을귀인.
pub fn is_cheoneul_gwiin(day_master: Stem, target: Branch) -> bool {
    cheoneul_gwiin(day_master).contains(&target)
}

/// Target branch is the 도화 of the natal reference branch.
pub fn is_dohwa_day(natal: Branch, target: Branch) -> bool {
    dohwa(natal) == target
}

/// Target branch is the day master's 건록.
pub fn is_geonrok_day(day_master: Stem, target: Branch) -> bool {
    geonrok(day_master) == target
}

/// Target branch is the 역마 of the natal reference branch.
pub fn is_yeokma_day(natal: Branch, target: Branch) -> bool {
    yeokma(natal) == target
}

/// Target branch is the 화개 of the natal reference branch.
pub fn is_hwagae_day(natal: Branch, target: Branch) -> bool {
    hwagae(natal) == target
}

/// Target branch is the 양인 of a yang day master.
pub fn is_yangin_day(day_master: Stem, target: Branch) -> bool {
    yangin(day_master) == Some(target)
}

/// Target year branch falls in the 삼재 of the natal year branch.
pub fn is_samjae_year(natal_year: Branch, target_year: Branch) -> bool {
    samjae_years(natal_year).contains(&target_year)
}

/// Target branch is void (공망) for the natal day pillar.
pub fn is_gongmang_day(natal_day: Pillar, target: Branch) -> bool {
    natal_day.gongmang().contains(&target)
}

/// Target stem combines (천간합) with the day master.
pub fn is_stem_hap(day_master: Stem, target: Stem) -> bool {
    day_master.hap().0 == target
}

/// Target stem clashes (천간충) with the day master.
pub fn is_stem_chung(day_master: Stem, target: Stem) -> bool {
    day_master.chung() == Some(target)
}

// ---------------------------------------------------------------------------
// Name-level predicates
// ---------------------------------------------------------------------------

fn by_stem(stem: &str, branch: &str, f: fn(Stem, Branch) -> bool) -> bool {
    match (Stem::from_name(stem), Branch::from_name(branch)) {
        (Some(s), Some(b)) => f(s, b),
        _ => false,
    }
}

fn by_branch(natal: &str, target: &str, f: fn(Branch, Branch) -> bool) -> bool {
    match (Branch::from_name(natal), Branch::from_name(target)) {
        (Some(a), Some(b)) => f(a, b),
        _ => false,
    }
}

pub fn is_cheoneul_gwiin_by_name(day_master: &str, target: &str) -> bool {
    by_stem(day_master, target, is_cheoneul_gwiin)
}

pub fn is_dohwa_day_by_name(natal: &str, target: &str) -> bool {
    by_branch(natal, target, is_dohwa_day)
}

pub fn is_geonrok_day_by_name(day_master: &str, target: &str) -> bool {
    by_stem(day_master, target, is_geonrok_day)
}

pub fn is_yeokma_day_by_name(natal: &str, target: &str) -> bool {
    by_branch(natal, target, is_yeokma_day)
}

pub fn is_hwagae_day_by_name(natal: &str, target: &str) -> bool {
    by_branch(natal, target, is_hwagae_day)
}

pub fn is_yangin_day_by_name(day_master: &str, target: &str) -> bool {
    by_stem(day_master, target, is_yangin_day)
}

pub fn is_samjae_year_by_name(natal_year: &str, target_year: &str) -> bool {
    by_branch(natal_year, target_year, is_samjae_year)
}

/// `natal_day` is a two-syllable pillar name such as "갑자".
pub fn is_gongmang_day_by_name(natal_day: &str, target: &str) -> bool {
    match (Pillar::from_name(natal_day), Branch::from_name(target)) {
        (Some(p), Some(b)) => is_gongmang_day(p, b),
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Saju factor keys present for a natal chart on a target date.
///
/// 도화, 역마 and 화개 are checked against both the natal year and day
/// branches; branch relations compare the target day branch with every
/// natal branch. A 반합 with any natal branch counts as 삼합.
pub fn extract_saju_factors(natal: &SajuChart, target: &TargetPillars) -> FactorSet {
    let dm = natal.day_master();
    let day = target.day.branch;
    let refs = [natal.year.branch, natal.day.branch];
    let natal_branches = natal.branches();

    let mut set = FactorSet::new();
    set.insert_if(is_cheoneul_gwiin(dm, day), FactorKey::CheoneulGwiin);
    set.insert_if(refs.iter().any(|r| is_dohwa_day(*r, day)), FactorKey::DohwaDay);
    set.insert_if(is_geonrok_day(dm, day), FactorKey::GeonrokDay);
    set.insert_if(refs.iter().any(|r| is_yeokma_day(*r, day)), FactorKey::YeokmaDay);
    set.insert_if(refs.iter().any(|r| is_hwagae_day(*r, day)), FactorKey::HwagaeDay);
    set.insert_if(is_yangin_day(dm, day), FactorKey::YanginDay);
    set.insert_if(
        is_samjae_year(natal.year.branch, target.year.branch),
        FactorKey::SamjaeYear,
    );
    set.insert_if(is_gongmang_day(natal.day, day), FactorKey::GongmangDay);

    let any = |f: fn(Branch, Branch) -> bool| natal_branches.iter().any(|b| f(*b, day));
    set.insert_if(any(is_yukhap), FactorKey::BranchYukhap);
    set.insert_if(any(is_samhap_partial), FactorKey::BranchSamhap);
    set.insert_if(any(is_chung), FactorKey::BranchChung);
    set.insert_if(any(is_xing), FactorKey::BranchXing);
    set.insert_if(any(is_hai), FactorKey::BranchHai);
    set.insert_if(any(is_pa), FactorKey::BranchPa);

    set.insert_if(is_stem_hap(dm, target.day.stem), FactorKey::StemHap);
    set.insert_if(is_stem_chung(dm, target.day.stem), FactorKey::StemChung);
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::saju_chart;

    #[test]
    fn cheoneul_for_gap() {
        assert!(is_cheoneul_gwiin(Stem::Gap, Branch::Chuk));
        assert!(is_cheoneul_gwiin(Stem::Gap, Branch::Mi));
        assert!(!is_cheoneul_gwiin(Stem::Gap, Branch::Ja));
    }

    #[test]
    fn dohwa_for_water_group() {
        assert!(is_dohwa_day(Branch::Ja, Branch::Yu));
        assert!(!is_dohwa_day(Branch::Ja, Branch::O));
    }

    #[test]
    fn yangin_only_for_yang_stems() {
        assert!(is_yangin_day(Stem::Gap, Branch::Myo));
        assert!(
            !saju_base::ALL_BRANCHES
                .iter()
                .any(|b| is_yangin_day(Stem::Eul, *b))
        );
    }

    #[test]
    fn samjae_for_monkey_rat_dragon() {
        assert!(is_samjae_year(Branch::Ja, Branch::In));
        assert!(is_samjae_year(Branch::Ja, Branch::Jin));
        assert!(!is_samjae_year(Branch::Ja, Branch::Sa));
    }

    #[test]
    fn gongmang_of_gapja() {
        let p = Pillar::from_name("갑자").unwrap();
        assert!(is_gongmang_day(p, Branch::Sul));
        assert!(is_gongmang_day(p, Branch::Hae));
        assert!(!is_gongmang_day(p, Branch::Ja));
    }

    #[test]
    fn by_name_unknown_is_false() {
        assert!(is_cheoneul_gwiin_by_name("갑", "축"));
        assert!(is_cheoneul_gwiin_by_name("甲", "未"));
        assert!(!is_cheoneul_gwiin_by_name("없음", "축"));
        assert!(!is_dohwa_day_by_name("자", ""));
        assert!(!is_gongmang_day_by_name("갑축", "술"));
        assert!(is_gongmang_day_by_name("갑자", "술"));
    }

    #[test]
    fn stem_pairs() {
        assert!(is_stem_hap(Stem::Gap, Stem::Gi));
        assert!(is_stem_chung(Stem::Gap, Stem::Gyeong));
        assert!(!is_stem_chung(Stem::Mu, Stem::Gap));
    }

    #[test]
    fn extraction_contains_only_saju_keys() {
        let natal = saju_chart(NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(), Some(10)).unwrap();
        let mut d = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        for _ in 0..120 {
            let set = extract_saju_factors(&natal, &TargetPillars::for_date(d));
            assert!(set.iter().all(FactorKey::is_saju));
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn chung_day_detected() {
        // Natal day 갑자; a 오 day clashes with it.
        let natal = SajuChart {
            year: Pillar::from_name("경오").unwrap(),
            month: Pillar::from_name("신사").unwrap(),
            day: Pillar::from_name("갑자").unwrap(),
            hour: None,
        };
        let target = TargetPillars {
            year: Pillar::from_name("병오").unwrap(),
            month: Pillar::from_name("무술").unwrap(),
            day: Pillar::from_name("경오").unwrap(),
        };
        let set = extract_saju_factors(&natal, &target);
        assert!(set.contains(FactorKey::BranchChung));
        assert!(set.contains(FactorKey::StemChung));
        // 오 is the self-punishing branch of the natal year
        assert!(set.contains(FactorKey::BranchXing));
    }
}
