use astro_base::{Planet, PlanetPosition};
use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fortune_config::{GradeScale, ScoringConfig};
use fortune_score::{
    FactorKey, FactorSet, NatalProfile, TransitSnapshot, analyze_day, analyze_month,
    calculate_adjusted_score, generate_alerts,
};

fn profile() -> NatalProfile {
    let mut p = NatalProfile::from_birth(NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(), Some(10))
        .unwrap();
    p.planets = vec![
        PlanetPosition::new(Planet::Sun, 54.3),
        PlanetPosition::new(Planet::Moon, 201.7),
        PlanetPosition::new(Planet::Venus, 22.0),
    ];
    p
}

fn transits(date: NaiveDate) -> TransitSnapshot {
    TransitSnapshot {
        date,
        planets: vec![
            PlanetPosition::new(Planet::Sun, 205.9),
            PlanetPosition::new(Planet::Moon, 318.2),
            PlanetPosition::new(Planet::Mercury, 221.4).with_speed(-0.3),
            PlanetPosition::new(Planet::Venus, 180.0),
            PlanetPosition::new(Planet::Mars, 110.5),
            PlanetPosition::new(Planet::Jupiter, 112.0),
            PlanetPosition::new(Planet::Saturn, 2.5).with_speed(-0.02),
        ],
    }
}

fn scoring_bench(c: &mut Criterion) {
    let config = ScoringConfig::default();
    let mut group = c.benchmark_group("scoring");
    group.bench_function("adjusted_score", |b| {
        b.iter(|| calculate_adjusted_score(black_box(13.0), black_box(&[0.18, -0.05]), &config))
    });
    let saju: FactorSet = [FactorKey::BranchChung, FactorKey::CheoneulGwiin]
        .into_iter()
        .collect();
    let astro: FactorSet = [FactorKey::RetrogradeMercury].into_iter().collect();
    group.bench_function("alerts", |b| {
        b.iter(|| generate_alerts(black_box(4), &saju, &astro, false))
    });
    group.finish();
}

fn analysis_bench(c: &mut Criterion) {
    let config = ScoringConfig::default();
    let p = profile();
    let snap = transits(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());

    let mut group = c.benchmark_group("analysis");
    group.bench_function("analyze_day", |b| {
        b.iter(|| analyze_day(&p, black_box(&snap), GradeScale::Daily, &config))
    });
    group.bench_function("analyze_month", |b| {
        b.iter(|| analyze_month(&p, black_box(2026), black_box(10), GradeScale::Calendar, &config))
    });
    group.finish();
}

criterion_group!(benches, scoring_bench, analysis_bench);
criterion_main!(benches);
