//! Special stars (신살) keyed by stem or by 삼합 group.
//!
//! - 천을귀인: day stem → two branches
//! - 건록 (녹): stem → its prosperity branch
//! - 양인: yang stem → the branch after its 녹
//! - 도화, 역마, 화개: determined by the 삼합 group of a year or day branch
//! - 삼재: three consecutive years determined by the year branch's group

use crate::branch::Branch;
use crate::relations::samhap_group;
use crate::stem::Stem;

/// 천을귀인 branches for a day stem.
///
/// 갑무경→축미, 을기→자신, 병정→해유, 신→인오, 임계→사묘.
pub const fn cheoneul_gwiin(day_stem: Stem) -> [Branch; 2] {
    match day_stem {
        Stem::Gap | Stem::Mu | Stem::Gyeong => [Branch::Chuk, Branch::Mi],
        Stem::Eul | Stem::Gi => [Branch::Ja, Branch::Sin],
        Stem::Byeong | Stem::Jeong => [Branch::Hae, Branch::Yu],
        Stem::Sin => [Branch::In, Branch::O],
        Stem::Im | Stem::Gye => [Branch::Sa, Branch::Myo],
    }
}

/// 건록 branch for a stem. 병/무 share 사 and 정/기 share 오.
pub const fn geonrok(stem: Stem) -> Branch {
    match stem {
        Stem::Gap => Branch::In,
        Stem::Eul => Branch::Myo,
        Stem::Byeong | Stem::Mu => Branch::Sa,
        Stem::Jeong | Stem::Gi => Branch::O,
        Stem::Gyeong => Branch::Sin,
        Stem::Sin => Branch::Yu,
        Stem::Im => Branch::Hae,
        Stem::Gye => Branch::Ja,
    }
}

/// 양인 branch for a yang stem; yin stems have none.
pub const fn yangin(stem: Stem) -> Option<Branch> {
    if stem.index() % 2 == 1 {
        return None;
    }
    Some(Branch::from_index(geonrok(stem).index() + 1))
}

/// 도화 (romance star) for a reference branch: the branch after the group's 생지.
///
/// 신자진→유, 해묘미→자, 인오술→묘, 사유축→오.
pub const fn dohwa(reference: Branch) -> Branch {
    let (group, _) = samhap_group(reference);
    Branch::from_index(group[0].index() + 1)
}

/// 역마 (travel star): the branch clashing the group's 생지.
///
/// 신자진→인, 해묘미→사, 인오술→신, 사유축→해.
pub const fn yeokma(reference: Branch) -> Branch {
    let (group, _) = samhap_group(reference);
    Branch::from_index(group[0].index() + 6)
}

/// 화개 (canopy star): the group's 고지.
///
/// 신자진→진, 해묘미→미, 인오술→술, 사유축→축.
pub const fn hwagae(reference: Branch) -> Branch {
    let (group, _) = samhap_group(reference);
    group[2]
}

/// The three 삼재 year branches for a birth-year branch.
///
/// 신자진→인묘진, 해묘미→사오미, 인오술→신유술, 사유축→해자축.
pub const fn samjae_years(birth_year_branch: Branch) -> [Branch; 3] {
    let start = yeokma(birth_year_branch).index();
    [
        Branch::from_index(start),
        Branch::from_index(start + 1),
        Branch::from_index(start + 2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn dohwa_by_group() {
        assert_eq!(dohwa(Branch::Ja), Branch::Yu);
        assert_eq!(dohwa(Branch::Mi), Branch::Ja);
        assert_eq!(dohwa(Branch::In), Branch::Myo);
        assert_eq!(dohwa(Branch::Chuk), Branch::O);
    }

    #[test]
    fn yeokma_by_group() {
        assert_eq!(yeokma(Branch::Jin), Branch::In);
        assert_eq!(yeokma(Branch::Hae), Branch::Sa);
        assert_eq!(yeokma(Branch::O), Branch::Sin);
        assert_eq!(yeokma(Branch::Yu), Branch::Hae);
    }

    #[test]
    fn hwagae_by_group() {
        assert_eq!(hwagae(Branch::Sin), Branch::Jin);
        assert_eq!(hwagae(Branch::Myo), Branch::Mi);
        assert_eq!(hwagae(Branch::Sul), Branch::Sul);
        assert_eq!(hwagae(Branch::Sa), Branch::Chuk);
    }

    #[test]
    fn samjae_groups() {
        assert_eq!(
            samjae_years(Branch::Ja),
            [Branch::In, Branch::Myo, Branch::Jin]
        );
        assert_eq!(
            samjae_years(Branch::Yu),
            [Branch::Hae, Branch::Ja, Branch::Chuk]
        );
    }

    #[test]
    fn yangin_only_for_yang() {
        assert_eq!(yangin(Stem::Gap), Some(Branch::Myo));
        assert_eq!(yangin(Stem::Byeong), Some(Branch::O));
        assert_eq!(yangin(Stem::Gyeong), Some(Branch::Yu));
        assert_eq!(yangin(Stem::Im), Some(Branch::Ja));
        assert_eq!(yangin(Stem::Eul), None);
    }

    #[test]
    fn geonrok_shares_element_with_non_earth_stem() {
        for s in ALL_STEMS.into_iter().filter(|s| !matches!(s, Stem::Mu | Stem::Gi)) {
            assert_eq!(geonrok(s).element(), s.element(), "{s}");
        }
        assert_eq!(geonrok(Stem::Gye), Branch::Ja);
        assert_eq!(geonrok(Stem::Gi), Branch::O);
    }

    #[test]
    fn cheoneul_pairs() {
        assert_eq!(cheoneul_gwiin(Stem::Sin), [Branch::In, Branch::O]);
        assert_eq!(cheoneul_gwiin(Stem::Gye), [Branch::Sa, Branch::Myo]);
    }
}
