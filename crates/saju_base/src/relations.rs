//! Branch interaction tables: 육합, 충, 해, 파, 삼합, 형.
//!
//! 육합, 충, 해 and 파 are perfect matchings over the 12 branches, so each
//! lookup is an involution: `chung(chung(b)) == b`. 삼합 partitions the
//! branches into four triples, one per non-earth element.

use serde::{Deserialize, Serialize};

use crate::branch::{ALL_BRANCHES, Branch};
use crate::element::Element;

// ---------------------------------------------------------------------------
// Pairwise tables
// ---------------------------------------------------------------------------

/// 육합 partner. 자축, 인해, 묘술, 진유, 사신, 오미.
pub const fn yukhap(branch: Branch) -> Branch {
    // Partners sum to 1 or 13 (mod 12).
    Branch::from_index(13 - branch.index())
}

/// Element produced by a 육합 pair.
///
/// 자축→토, 인해→목, 묘술→화, 진유→금, 사신→수, 오미→화.
pub const fn yukhap_element(branch: Branch) -> Element {
    match branch {
        Branch::Ja | Branch::Chuk => Element::Earth,
        Branch::In | Branch::Hae => Element::Wood,
        Branch::Myo | Branch::Sul => Element::Fire,
        Branch::Jin | Branch::Yu => Element::Metal,
        Branch::Sa | Branch::Sin => Element::Water,
        Branch::O | Branch::Mi => Element::Fire,
    }
}

/// 충 partner: the opposite branch (six apart).
pub const fn chung(branch: Branch) -> Branch {
    Branch::from_index(branch.index() + 6)
}

/// 해 (harm) partner. 자미, 축오, 인사, 묘진, 신해, 유술.
pub const fn hai(branch: Branch) -> Branch {
    // Partners sum to 7 or 19 (mod 12).
    Branch::from_index(19 - branch.index())
}

/// 파 (break) partner. 자유, 축진, 인해, 묘오, 사신, 미술.
pub const fn pa(branch: Branch) -> Branch {
    match branch {
        Branch::Ja => Branch::Yu,
        Branch::Yu => Branch::Ja,
        Branch::Chuk => Branch::Jin,
        Branch::Jin => Branch::Chuk,
        Branch::In => Branch::Hae,
        Branch::Hae => Branch::In,
        Branch::Myo => Branch::O,
        Branch::O => Branch::Myo,
        Branch::Sa => Branch::Sin,
        Branch::Sin => Branch::Sa,
        Branch::Mi => Branch::Sul,
        Branch::Sul => Branch::Mi,
    }
}

/// Whether two branches form a 육합.
pub const fn is_yukhap(a: Branch, b: Branch) -> bool {
    yukhap(a) as u8 == b as u8
}

/// Whether two branches clash (충).
pub const fn is_chung(a: Branch, b: Branch) -> bool {
    chung(a) as u8 == b as u8
}

/// Whether two branches harm each other (해).
pub const fn is_hai(a: Branch, b: Branch) -> bool {
    hai(a) as u8 == b as u8
}

/// Whether two branches break each other (파).
pub const fn is_pa(a: Branch, b: Branch) -> bool {
    pa(a) as u8 == b as u8
}

// ---------------------------------------------------------------------------
// 삼합 (three harmony)
// ---------------------------------------------------------------------------

/// The four 삼합 groups with their elements, each listed as (생지, 왕지, 고지).
pub const SAMHAP_GROUPS: [([Branch; 3], Element); 4] = [
    ([Branch::Sin, Branch::Ja, Branch::Jin], Element::Water),
    ([Branch::Hae, Branch::Myo, Branch::Mi], Element::Wood),
    ([Branch::In, Branch::O, Branch::Sul], Element::Fire),
    ([Branch::Sa, Branch::Yu, Branch::Chuk], Element::Metal),
];

/// The 삼합 group containing a branch.
pub const fn samhap_group(branch: Branch) -> ([Branch; 3], Element) {
    // Group members are congruent mod 4: 신자진 ≡ 0, 해묘미 ≡ 3, 인오술 ≡ 2, 사유축 ≡ 1.
    match branch.index() % 4 {
        0 => SAMHAP_GROUPS[0],
        3 => SAMHAP_GROUPS[1],
        2 => SAMHAP_GROUPS[2],
        _ => SAMHAP_GROUPS[3],
    }
}

/// Element of the 삼합 group containing a branch.
pub const fn samhap_element(branch: Branch) -> Element {
    samhap_group(branch).1
}

/// Element formed when `branches` is exactly one complete 삼합 group
/// (three distinct branches, any order). Anything else yields `None`.
pub fn is_samhap_full(branches: &[Branch]) -> Option<Element> {
    if branches.len() != 3 {
        return None;
    }
    SAMHAP_GROUPS.iter().find_map(|(group, element)| {
        let all_present = group.iter().all(|g| branches.contains(g));
        all_present.then_some(*element)
    })
}

/// Whether two distinct branches belong to the same 삼합 group (반합).
pub const fn is_samhap_partial(a: Branch, b: Branch) -> bool {
    a as u8 != b as u8 && a.index() % 4 == b.index() % 4
}

/// Complete 삼합 groups present anywhere in a branch list.
pub fn samhap_present(branches: &[Branch]) -> Vec<Element> {
    SAMHAP_GROUPS
        .iter()
        .filter(|(group, _)| group.iter().all(|g| branches.contains(g)))
        .map(|(_, e)| *e)
        .collect()
}

// ---------------------------------------------------------------------------
// 형 (punishment)
// ---------------------------------------------------------------------------

/// Kind of 형 relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum XingKind {
    /// 인사신 삼형 (무은지형).
    Ungrateful,
    /// 축술미 삼형 (지세지형).
    Bullying,
    /// 자묘 상형 (무례지형).
    Rude,
    /// 진진, 오오, 유유, 해해 자형.
    SelfPunishment,
}

/// 형 relationship between two branches, if any.
pub const fn xing(a: Branch, b: Branch) -> Option<XingKind> {
    use Branch::*;
    match (a, b) {
        (In, Sa) | (Sa, Sin) | (Sin, In) | (Sa, In) | (Sin, Sa) | (In, Sin) => {
            Some(XingKind::Ungrateful)
        }
        (Chuk, Sul) | (Sul, Mi) | (Mi, Chuk) | (Sul, Chuk) | (Mi, Sul) | (Chuk, Mi) => {
            Some(XingKind::Bullying)
        }
        (Ja, Myo) | (Myo, Ja) => Some(XingKind::Rude),
        (Jin, Jin) | (O, O) | (Yu, Yu) | (Hae, Hae) => Some(XingKind::SelfPunishment),
        _ => None,
    }
}

/// Whether two branches are in a 형 relationship.
pub const fn is_xing(a: Branch, b: Branch) -> bool {
    xing(a, b).is_some()
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// All pairwise relations holding between two branches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchRelations {
    pub yukhap: bool,
    pub samhap_partial: bool,
    pub chung: bool,
    pub xing: Option<XingKind>,
    pub hai: bool,
    pub pa: bool,
}

impl BranchRelations {
    /// Whether any harmonious relation (육합 or 반합) holds.
    pub const fn is_harmonious(&self) -> bool {
        self.yukhap || self.samhap_partial
    }

    /// Whether any conflicting relation (충, 형, 해, 파) holds.
    pub const fn is_conflicting(&self) -> bool {
        self.chung || self.xing.is_some() || self.hai || self.pa
    }
}

/// Evaluate every pairwise table for two branches.
pub const fn branch_relations(a: Branch, b: Branch) -> BranchRelations {
    BranchRelations {
        yukhap: is_yukhap(a, b),
        samhap_partial: is_samhap_partial(a, b),
        chung: is_chung(a, b),
        xing: xing(a, b),
        hai: is_hai(a, b),
        pa: is_pa(a, b),
    }
}

/// Relations between two branches given by name; all-false for unknown names.
pub fn branch_relations_by_name(a: &str, b: &str) -> BranchRelations {
    match (Branch::from_name(a), Branch::from_name(b)) {
        (Some(a), Some(b)) => branch_relations(a, b),
        _ => BranchRelations::default(),
    }
}

/// Branch pairs `(a, b)` with `a < b` for which `rel` holds, over all 12 branches.
pub fn pairs_where(rel: fn(Branch, Branch) -> bool) -> Vec<(Branch, Branch)> {
    let mut out = Vec::new();
    for (i, &a) in ALL_BRANCHES.iter().enumerate() {
        for &b in &ALL_BRANCHES[i + 1..] {
            if rel(a, b) {
                out.push((a, b));
            }
        }
    }
    out
}
