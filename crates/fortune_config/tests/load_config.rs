//! File-based config loading.

use std::io::Write;

use fortune_config::{ConfigError, GradeScale, ScoringConfig};

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "max_alerts = 3\ndaily_cuts = [80.0, 60.0, 40.0, 20.0]\n\n[cross_validation]\nbonus = 6.0"
    )
    .unwrap();
    let c = ScoringConfig::load(file.path()).unwrap();
    assert_eq!(c.max_alerts, 3);
    assert_eq!(c.cross_validation.bonus, 6.0);
    assert_eq!(c.cross_validation.penalty, 4.0);
    assert_eq!(c.grade_for(65.0, GradeScale::Daily), 1);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ScoringConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn bad_toml_is_parse_error() {
    let err = ScoringConfig::from_toml_str("base_ratio = \"high\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn invalid_values_rejected_on_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "base_ratio = 1.5").unwrap();
    let err = ScoringConfig::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("base_ratio"));
}
