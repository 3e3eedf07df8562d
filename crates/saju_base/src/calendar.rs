//! Sexagenary calendar: pillars for a civil date.
//!
//! The day pillar is exact: it follows the Julian Day Number with
//! 1900-01-01 = 갑술 (index 10). Year and month pillars switch at solar-term
//! boundaries (절기), approximated here by fixed civil dates; the true
//! boundary can fall a day either side. Charts that need the exact instant
//! should come from an ephemeris provider.

use chrono::{Datelike, NaiveDate};

use crate::branch::Branch;
use crate::error::SajuError;
use crate::pillar::{Pillar, SajuChart, hour_stem, month_stem};

/// Julian Day Number of 0001-01-01 (proleptic Gregorian) minus one.
const JDN_CE_OFFSET: i64 = 1_721_425;

/// Offset such that `(jdn + DAY_CYCLE_OFFSET) mod 60` is the day's sexagenary index.
const DAY_CYCLE_OFFSET: i64 = 49;

/// Approximate start (month, day) of each 절기 month and its branch.
///
/// 소한 Jan 6 → 축, 입춘 Feb 4 → 인, 경칩 Mar 6 → 묘, 청명 Apr 5 → 진,
/// 입하 May 6 → 사, 망종 Jun 6 → 오, 소서 Jul 7 → 미, 입추 Aug 8 → 신,
/// 백로 Sep 8 → 유, 한로 Oct 8 → 술, 입동 Nov 7 → 해, 대설 Dec 7 → 자.
pub const SOLAR_TERM_STARTS: [(u32, u32, Branch); 12] = [
    (1, 6, Branch::Chuk),
    (2, 4, Branch::In),
    (3, 6, Branch::Myo),
    (4, 5, Branch::Jin),
    (5, 6, Branch::Sa),
    (6, 6, Branch::O),
    (7, 7, Branch::Mi),
    (8, 8, Branch::Sin),
    (9, 8, Branch::Yu),
    (10, 8, Branch::Sul),
    (11, 7, Branch::Hae),
    (12, 7, Branch::Ja),
];

/// Julian Day Number (noon-based day count) of a civil date.
pub fn julian_day_number(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) + JDN_CE_OFFSET
}

/// Sexagenary index of the day (0 = 갑자).
pub fn day_index(date: NaiveDate) -> u8 {
    (julian_day_number(date) + DAY_CYCLE_OFFSET).rem_euclid(60) as u8
}

/// Day pillar (일진) of a civil date.
pub fn day_pillar(date: NaiveDate) -> Pillar {
    Pillar::from_sexagenary(day_index(date))
}

/// Saju year of a date: the civil year, minus one before 입춘.
pub fn saju_year(date: NaiveDate) -> i32 {
    let (m, d, _) = SOLAR_TERM_STARTS[1];
    if (date.month(), date.day()) < (m, d) {
        date.year() - 1
    } else {
        date.year()
    }
}

/// Year pillar (세운) of a date. 1984 (after 입춘) is 갑자.
pub fn year_pillar(date: NaiveDate) -> Pillar {
    year_pillar_of(saju_year(date))
}

/// Year pillar of a Saju year number.
pub fn year_pillar_of(year: i32) -> Pillar {
    Pillar::from_sexagenary((year - 4).rem_euclid(60) as u8)
}

/// Month branch of a date under the approximate 절기 boundaries.
pub fn month_branch(date: NaiveDate) -> Branch {
    let i = (date.month() - 1) as usize;
    let (_, start_day, branch) = SOLAR_TERM_STARTS[i];
    if date.day() >= start_day {
        branch
    } else {
        SOLAR_TERM_STARTS[(i + 11) % 12].2
    }
}

/// Month pillar (월운) of a date.
pub fn month_pillar(date: NaiveDate) -> Pillar {
    let branch = month_branch(date);
    let stem = month_stem(year_pillar(date).stem, branch);
    Pillar { stem, branch }
}

/// Hour pillar for a date and clock hour (0..=23).
///
/// The 자 hour uses the stem sequence of the civil date's day pillar.
pub fn hour_pillar(date: NaiveDate, hour: u32) -> Result<Pillar, SajuError> {
    let branch = Branch::from_hour(hour)?;
    let stem = hour_stem(day_pillar(date).stem, branch);
    Ok(Pillar { stem, branch })
}

/// Four-pillar chart for a birth date and optional clock hour.
pub fn saju_chart(date: NaiveDate, hour: Option<u32>) -> Result<SajuChart, SajuError> {
    let hour = match hour {
        Some(h) => Some(hour_pillar(date, h)?),
        None => None,
    };
    Ok(SajuChart {
        year: year_pillar(date),
        month: month_pillar(date),
        day: day_pillar(date),
        hour,
    })
}
