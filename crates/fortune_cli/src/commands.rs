//! Subcommand handlers. Each returns the JSON value printed on stdout.

use std::fs;
use std::path::Path;

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use astro_base::{PlanetPosition, angular_distance, match_aspect};
use fortune_cache::CacheKey;
use fortune_config::{GradeScale, ScoringConfig};
use fortune_report::{cleanse_text, validate_report};
use fortune_score::{
    NatalProfile, TransitSnapshot, analyze_day, analyze_month, analyze_range, get_lucky_number,
    lucky_color,
};
use saju_base::{
    ALL_ELEMENTS, Branch, Element, Pillar, Stem, branch_relations, day_pillar, saju_chart, sipsin,
};

use crate::error::CliError;

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn pillars(date: NaiveDate, hour: Option<u32>) -> Result<Value, CliError> {
    let chart = saju_chart(date, hour)?;
    let counts = chart.element_distribution();
    let elements: serde_json::Map<String, Value> = ALL_ELEMENTS
        .into_iter()
        .map(|e| (e.korean().to_string(), json!(counts[e.index() as usize])))
        .collect();
    Ok(json!({
        "year": chart.year.name(),
        "month": chart.month.name(),
        "day": chart.day.name(),
        "hour": chart.hour.map(Pillar::name),
        "dayMaster": chart.day_master().name(),
        "gongmang": chart.day.gongmang().map(Branch::name),
        "elements": elements,
    }))
}

pub fn relation(a: &str, b: &str) -> Result<Value, CliError> {
    let (a, b): (Branch, Branch) = (a.parse()?, b.parse()?);
    let rel = branch_relations(a, b);
    Ok(json!({
        "a": a.name(),
        "b": b.name(),
        "relations": rel,
        "harmonious": rel.is_harmonious(),
        "conflicting": rel.is_conflicting(),
    }))
}

pub fn ten_god(day_stem: &str, other: &str) -> Result<Value, CliError> {
    let (day, other): (Stem, Stem) = (day_stem.parse()?, other.parse()?);
    let god = sipsin(day, other);
    Ok(json!({
        "dayMaster": day.name(),
        "stem": other.name(),
        "sipsin": god.name(),
        "key": god,
    }))
}

pub fn aspect(lon_a: f64, lon_b: f64) -> Value {
    let separation = angular_distance(lon_a, lon_b);
    match match_aspect(lon_a, lon_b) {
        Some((kind, orb)) => json!({ "separation": separation, "aspect": kind, "orb": orb }),
        None => json!({ "separation": separation, "aspect": null }),
    }
}

/// Input document for `analyze`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeInput {
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub birth_hour: Option<u32>,
    #[serde(default)]
    pub yongsin: Option<String>,
    #[serde(default)]
    pub daeun: Option<String>,
    #[serde(default)]
    pub planets: Vec<PlanetPosition>,
    #[serde(default)]
    pub transits: Vec<TransitSnapshot>,
    /// `YYYY-MM`; analysed Saju-only when no transits are given.
    #[serde(default)]
    pub month: Option<String>,
}

impl AnalyzeInput {
    fn profile(&self) -> Result<NatalProfile, CliError> {
        let mut profile = NatalProfile::from_birth(self.birth_date, self.birth_hour)?;
        profile.yongsin = self.yongsin.as_deref().map(str::parse::<Element>).transpose()?;
        profile.daeun = match self.daeun.as_deref() {
            Some(name) => Some(
                Pillar::from_name(name)
                    .ok_or_else(|| CliError::Input(format!("not a sexagenary pillar: {name}")))?,
            ),
            None => None,
        };
        profile.planets = self.planets.clone();
        Ok(profile)
    }
}

fn parse_month(text: &str) -> Result<(i32, u32), CliError> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", text.trim()), "%Y-%m-%d")
        .map_err(|e| CliError::Input(format!("month {text:?}: {e}")))?;
    Ok((first.year(), first.month()))
}

pub fn analyze(
    input: &Path,
    config: Option<&Path>,
    scale: GradeScale,
) -> Result<Value, CliError> {
    let config = match config {
        Some(path) => ScoringConfig::load(path)?,
        None => ScoringConfig::default(),
    };
    let doc: AnalyzeInput = serde_json::from_str(&read_file(input)?)?;
    let profile = doc.profile()?;

    let days = if !doc.transits.is_empty() {
        analyze_range(&profile, &doc.transits, scale, &config)
    } else if let Some(month) = &doc.month {
        let (year, month) = parse_month(month)?;
        analyze_month(&profile, year, month, scale, &config)
    } else {
        return Err(CliError::Input("expected `transits` or `month`".into()));
    };
    info!(days = days.len(), ?scale, "analysis complete");
    Ok(serde_json::to_value(days)?)
}

pub fn lucky(date: NaiveDate, birth: NaiveDate) -> Value {
    let day = day_pillar(date);
    json!({
        "date": date,
        "dayPillar": day.name(),
        "luckyNumber": get_lucky_number(date, birth),
        "luckyColor": lucky_color(day.stem),
    })
}

pub fn validate(theme: &str, file: &Path) -> Result<Value, CliError> {
    let warnings = validate_report(theme, &read_file(file)?);
    Ok(json!({ "valid": warnings.is_empty(), "warnings": warnings }))
}

pub fn sanitize(file: &Path) -> Result<String, CliError> {
    Ok(cleanse_text(&read_file(file)?))
}

pub fn cache_key(
    namespace: &str,
    birth_date: NaiveDate,
    birth_time: Option<NaiveTime>,
    lat: f64,
    lon: f64,
    target: Option<&str>,
) -> String {
    let key = CacheKey::new(namespace, birth_date, lat, lon).with_birth_time(birth_time);
    match target {
        Some(t) => key.with_target(t).to_string(),
        None => key.to_string(),
    }
}
