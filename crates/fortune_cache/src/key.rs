//! Composite cache keys.
//!
//! Layout: `fortune:<namespace>:<birth date>:<birth time|unknown>:<lat>:<lon>[:<target>]`
//! with coordinates fixed to four decimals, so the same inputs always map
//! to the same key.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};

pub const KEY_PREFIX: &str = "fortune";
const UNKNOWN_TIME: &str = "unknown";

#[derive(Debug, Clone, PartialEq)]
pub struct CacheKey {
    namespace: String,
    birth_date: NaiveDate,
    birth_time: Option<NaiveTime>,
    lat: f64,
    lon: f64,
    target: Option<String>,
}

/// `:` separates key segments, so it may not appear inside one.
fn segment(s: &str) -> String {
    s.trim().replace(':', "_")
}

fn coord(v: f64) -> String {
    // -0.0 and 0.0 must share a key
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v:.4}")
}

impl CacheKey {
    pub fn new(namespace: &str, birth_date: NaiveDate, lat: f64, lon: f64) -> Self {
        Self {
            namespace: segment(namespace),
            birth_date,
            birth_time: None,
            lat,
            lon,
            target: None,
        }
    }

    pub fn with_birth_time(mut self, time: Option<NaiveTime>) -> Self {
        self.birth_time = time;
        self
    }

    /// Appends a target segment such as a date or month.
    pub fn with_target(mut self, target: impl AsRef<str>) -> Self {
        self.target = Some(segment(target.as_ref()));
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let time = match self.birth_time {
            Some(t) => t.format("%H%M").to_string(),
            None => UNKNOWN_TIME.to_string(),
        };
        write!(
            f,
            "{KEY_PREFIX}:{}:{}:{time}:{}:{}",
            self.namespace,
            self.birth_date.format("%Y-%m-%d"),
            coord(self.lat),
            coord(self.lon),
        )?;
        if let Some(target) = &self.target {
            write!(f, ":{target}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 5, 15).unwrap()
    }

    #[test]
    fn unknown_time_layout() {
        let key = CacheKey::new("daily", birth(), 37.5665, 126.978);
        assert_eq!(key.to_string(), "fortune:daily:1990-05-15:unknown:37.5665:126.9780");
    }

    #[test]
    fn time_and_target() {
        let key = CacheKey::new("calendar", birth(), -33.86786, 151.20732)
            .with_birth_time(NaiveTime::from_hms_opt(9, 5, 0))
            .with_target("2026-10");
        assert_eq!(
            key.to_string(),
            "fortune:calendar:1990-05-15:0905:-33.8679:151.2073:2026-10"
        );
    }

    #[test]
    fn negative_zero_shares_key() {
        let a = CacheKey::new("daily", birth(), 0.0, -0.0).to_string();
        let b = CacheKey::new("daily", birth(), -0.0, 0.0).to_string();
        assert_eq!(a, b);
    }

    #[test]
    fn separators_escaped() {
        let key = CacheKey::new("a:b", birth(), 1.0, 2.0).with_target("x:y");
        assert_eq!(key.namespace(), "a_b");
        assert_eq!(key.to_string().matches(':').count(), 6);
    }
}
