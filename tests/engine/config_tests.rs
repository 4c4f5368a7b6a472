use approx::assert_abs_diff_eq;

use infotheory::Error;
use infotheory::estimators::approaches::histogram::OuterShiftPolicy;
use infotheory::estimators::{EngineConfig, EqualIntervalBinning, InfoEngine};

use crate::test_helpers::{binary_engine, or_data};

#[test]
fn test_from_config_applies_binning() {
    let config = EngineConfig::new(2, 1)
        .with_policy(OuterShiftPolicy::Unshifted)
        .with_binning(EqualIntervalBinning::uniform(2, 3, 0.0, 3.0));
    assert_eq!(config.num_shifts(), 3);

    let engine = InfoEngine::from_config(&config).unwrap();
    assert_eq!(engine.num_shifts(), 3);
    assert_eq!(engine.bin_spec().policy(), OuterShiftPolicy::Unshifted);
    assert_eq!(engine.bin_spec().bin_count(1), Some(3));
    assert_eq!(engine.bin_spec().boundaries(1, 2), Some(&[1.25, 2.0][..]));
}

#[test]
fn test_from_config_without_binning() {
    let engine = InfoEngine::from_config(&EngineConfig::new(4, 0)).unwrap();
    assert_eq!(engine.bin_spec().first_unconfigured(), Some(0));
}

#[test]
fn test_from_config_rejects_bad_binning() {
    let config = EngineConfig::new(2, 0).with_binning(EqualIntervalBinning::uniform(3, 2, 0.0, 1.0));
    assert!(matches!(
        InfoEngine::from_config(&config),
        Err(Error::LengthMismatch { expected: 2, got: 3, .. })
    ));

    assert_eq!(
        InfoEngine::from_config(&EngineConfig::new(0, 0)).err(),
        Some(Error::InvalidDimensionality)
    );
}

#[test]
fn test_config_json_round_trip() {
    let config = EngineConfig::new(3, 2).with_binning(EqualIntervalBinning {
        bin_counts: vec![2, 4, 8],
        mins: vec![0.0, -1.0, 10.0],
        maxs: vec![1.0, 1.0, 20.0],
    });
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"reuse_adjacent_gap\""));

    let parsed: EngineConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_config_json_defaults() {
    let parsed: EngineConfig = serde_json::from_str(r#"{"dims": 2}"#).unwrap();
    assert_eq!(parsed, EngineConfig::new(2, 0));

    let parsed: EngineConfig =
        serde_json::from_str(r#"{"dims": 1, "shift_half_width": 3, "outer_shift_policy": "unshifted"}"#)
            .unwrap();
    assert_eq!(parsed.num_shifts(), 7);
    assert_eq!(parsed.outer_shift_policy, OuterShiftPolicy::Unshifted);
}

#[test]
fn test_config_summary() {
    let mut engine = InfoEngine::new(2, 1).unwrap();
    engine.set_bin_boundaries(&[0.0, 1.0, 3.0], 0).unwrap();

    let summary = engine.config_summary();
    assert_eq!(summary.dims, 2);
    assert_eq!(summary.num_shifts, 3);
    assert_eq!(summary.bin_counts, vec![Some(4), None]);
    assert_eq!(summary.boundaries[0].len(), 3);
    assert_eq!(summary.boundaries[0][1], vec![0.0, 1.0, 3.0]);
    assert!(summary.boundaries[1].is_empty());

    let text = summary.to_string();
    assert!(text.contains("dimension 0: 4 bins"));
    assert!(text.contains("dimension 1: not configured"));
    assert!(text.contains("  shift 2: [0.25, 1.5, 3.5]"));
}

#[test]
fn test_snapshot() {
    let mut engine = binary_engine(&or_data());
    let before = engine.snapshot();
    assert_eq!(before.points_added, 4);
    assert_eq!(before.populated_bins, 4);
    assert!(!before.aggregated);
    assert_eq!(before.aggregated_mass, None);
    assert!(!before.to_string().contains("aggregated mass"));

    engine.finalize();
    let after = engine.snapshot();
    assert!(after.aggregated);
    assert_abs_diff_eq!(after.aggregated_mass.unwrap(), 4.0);
    assert!(after.to_string().contains("aggregated across shifts: yes"));
}
