//! Four Pillars (Saju) primitives.
//!
//! This crate provides:
//! - Five elements, yin-yang, the 10 stems and 12 branches with hidden stems
//! - Pillars, the sexagenary cycle, and month/hour stem derivation
//! - Day/month/year pillars for civil dates
//! - Branch and stem interaction tables (육합, 충, 해, 파, 삼합, 형, 천간합)
//! - Ten gods (십신) and special stars (천을귀인, 건록, 양인, 도화, 역마, 화개, 삼재)
//!
//! Every lookup on a typed value is total. Lookups by name return `None`,
//! `false` or an empty collection for unknown input instead of failing.

pub mod branch;
pub mod calendar;
pub mod element;
pub mod error;
pub mod pillar;
pub mod relations;
pub mod sipsin;
pub mod stars;
pub mod stem;

pub use branch::{
    ALL_BRANCHES, Branch, HiddenStems, branch_element, branch_yin_yang, jijanggan,
};
pub use calendar::{
    SOLAR_TERM_STARTS, day_index, day_pillar, hour_pillar, julian_day_number, month_branch,
    month_pillar, saju_chart, saju_year, year_pillar, year_pillar_of,
};
pub use element::{ALL_ELEMENTS, Element, ElementRelation, YinYang};
pub use error::SajuError;
pub use pillar::{Pillar, SEXAGENARY_CYCLE, SajuChart, hour_stem, month_stem};
pub use relations::{
    BranchRelations, SAMHAP_GROUPS, XingKind, branch_relations, branch_relations_by_name, chung,
    hai, is_chung, is_hai, is_pa, is_samhap_full, is_samhap_partial, is_xing, is_yukhap, pa,
    pairs_where, samhap_element, samhap_group, samhap_present, xing, yukhap, yukhap_element,
};
pub use sipsin::{ALL_SIPSIN, Sipsin, sipsin, sipsin_by_name, sipsin_of_branch};
pub use stars::{cheoneul_gwiin, dohwa, geonrok, hwagae, samjae_years, yangin, yeokma};
pub use stem::{ALL_STEMS, Stem, stem_element, stem_yin_yang};
