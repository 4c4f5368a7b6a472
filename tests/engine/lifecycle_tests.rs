use approx::assert_abs_diff_eq;
use ndarray::array;

use infotheory::Error;
use infotheory::estimators::{InfoEngine, State};

use crate::test_helpers::{binary_engine, generate_uniform_data, init_tracing, unit_engine, xor_data};

#[test]
fn test_zero_dimensions_rejected() {
    assert_eq!(InfoEngine::new(0, 1).err(), Some(Error::InvalidDimensionality));
}

#[test]
fn test_shift_count() {
    for h in 0..4 {
        let engine = InfoEngine::new(2, h).unwrap();
        assert_eq!(engine.num_shifts(), 2 * h + 1);
        assert_eq!(engine.dims(), 2);
        assert_eq!(engine.state(), State::Accumulating);
    }
}

#[test]
fn test_binning_length_mismatch() {
    let mut engine = InfoEngine::new(3, 0).unwrap();
    assert_eq!(
        engine.set_equal_interval_binning(&[2, 2], &[0.0; 3], &[1.0; 3]),
        Err(Error::LengthMismatch {
            what: "bin counts",
            expected: 3,
            got: 2
        })
    );
    assert!(matches!(
        engine.set_equal_interval_binning(&[2; 3], &[0.0; 3], &[1.0; 4]),
        Err(Error::LengthMismatch { what: "maxs", .. })
    ));
}

#[test]
fn test_rejected_binning_changes_nothing() {
    let mut engine = InfoEngine::new(2, 0).unwrap();
    assert_eq!(
        engine.set_equal_interval_binning(&[4, 0], &[0.0; 2], &[1.0; 2]),
        Err(Error::ZeroBins { dim: 1 })
    );
    assert!(!engine.bin_spec().is_configured(0));

    assert!(engine
        .set_all_bin_boundaries(&[vec![0.5], vec![0.3, 0.1]])
        .is_err());
    assert!(!engine.bin_spec().is_configured(0));
}

#[test]
fn test_data_requires_binning() {
    let mut engine = InfoEngine::new(2, 0).unwrap();
    engine.set_bin_boundaries(&[0.5], 0).unwrap();
    assert_eq!(
        engine.add_data_point(&[0.1, 0.2]),
        Err(Error::BinningNotSet { dim: 1 })
    );
    assert_eq!(engine.points_added(), 0);
}

#[test]
fn test_binning_locked_after_data() {
    let mut engine = unit_engine(2, 1, 4);
    engine.add_data_point(&[0.1, 0.2]).unwrap();

    assert_eq!(
        engine.set_equal_interval_binning(&[2, 2], &[0.0; 2], &[1.0; 2]),
        Err(Error::BinningLocked)
    );
    assert_eq!(engine.set_bin_boundaries(&[0.5], 0), Err(Error::BinningLocked));

    engine.finalize();
    assert_eq!(engine.set_bin_boundaries(&[0.5], 0), Err(Error::BinningLocked));

    engine.clear_data();
    assert_eq!(engine.points_added(), 0);
    assert_eq!(engine.state(), State::Accumulating);
    engine
        .set_equal_interval_binning(&[2, 2], &[0.0; 2], &[1.0; 2])
        .unwrap();
    assert_eq!(engine.bin_spec().bin_count(0), Some(2));
}

#[test]
fn test_malformed_point_skipped() {
    init_tracing();
    let mut engine = unit_engine(3, 0, 2);

    assert_eq!(engine.add_data_point(&[0.1, 0.2]), Ok(false));
    assert_eq!(engine.add_data_point(&[0.1, 0.2, 0.3, 0.4]), Ok(false));
    assert_eq!(engine.points_added(), 0);

    let points = vec![vec![0.1, 0.2, 0.3], vec![0.5], vec![0.9, 0.9, 0.9]];
    assert_eq!(engine.add_data(&points), Ok(2));
    assert_eq!(engine.points_added(), 2);
    assert_eq!(engine.finalize().mass(), 2.0);
}

#[test]
fn test_finalize_transitions_state() {
    let mut engine = binary_engine(&xor_data());
    assert_eq!(engine.state(), State::Accumulating);
    assert!(engine.aggregated().is_none());

    let mass = engine.finalize().mass();
    assert_eq!(mass, 4.0);
    assert_eq!(engine.state(), State::Aggregated);
    assert_eq!(engine.aggregated().map(|t| t.len()), Some(4));

    // idempotent
    assert_eq!(engine.finalize().mass(), 4.0);
}

#[test]
fn test_query_aggregates_implicitly() {
    let mut engine = binary_engine(&xor_data());
    engine.entropy(&[0, -1, -1]).unwrap();
    assert_eq!(engine.state(), State::Aggregated);
}

#[test]
fn test_data_after_aggregation_starts_new_phase() {
    init_tracing();
    let mut engine = unit_engine(1, 0, 2);
    engine.add_data(&[[0.1], [0.2], [0.3]]).unwrap();
    assert_eq!(engine.entropy(&[0]).unwrap(), 0.0);

    assert_eq!(engine.add_data_point(&[0.9]), Ok(true));
    assert_eq!(engine.state(), State::Accumulating);
    assert_eq!(engine.points_added(), 1);

    // only the new point is counted
    assert_eq!(engine.finalize().mass(), 1.0);
    assert_eq!(engine.marginal_probabilities(&[0]).unwrap().probabilities, vec![(vec![1], 1.0)]);
}

#[test]
fn test_query_without_data() {
    let mut engine = unit_engine(2, 1, 3);
    assert_eq!(engine.entropy(&[0, -1]), Err(Error::NoData));
    assert_eq!(engine.mutual_info(&[0, 1]), Err(Error::NoData));
    assert_eq!(engine.state(), State::Aggregated);
}

#[test]
fn test_nan_point_counts_as_added_but_not_binned() {
    let mut engine = unit_engine(1, 1, 2);
    assert_eq!(engine.add_data_point(&[f64::NAN]), Ok(true));
    assert_eq!(engine.points_added(), 1);
    assert_eq!(engine.entropy(&[0]), Err(Error::NoData));
}

#[test]
fn test_role_vector_validation() {
    let mut engine = binary_engine(&xor_data());
    assert_eq!(
        engine.mutual_info(&[0, 1]),
        Err(Error::LengthMismatch {
            what: "role vector",
            expected: 3,
            got: 2
        })
    );
    assert_eq!(
        engine.pid(&[0, 1, 3]),
        Err(Error::InvalidRole { dim: 2, id: 3 })
    );
    assert_eq!(
        engine.entropy(&[-2, 0, 0]),
        Err(Error::InvalidRole { dim: 0, id: -2 })
    );
}

#[test]
fn test_add_array_matches_add_data() {
    let data = generate_uniform_data(500, 3, 7);

    let mut from_array = unit_engine(3, 2, 5);
    assert_eq!(from_array.add_array(data.view()), Ok(500));

    let rows: Vec<Vec<f64>> = data.rows().into_iter().map(|r| r.to_vec()).collect();
    let mut from_rows = unit_engine(3, 2, 5);
    assert_eq!(from_rows.add_data(&rows), Ok(500));

    assert_eq!(from_array.finalize(), from_rows.finalize());
}

#[test]
fn test_add_array_non_contiguous_rows() {
    // rows of the transposed view are strided columns of `data`
    let data = array![[0.1, 0.6], [0.2, 0.7], [0.3, 0.8]];
    let transposed = data.t();
    let mut engine = unit_engine(3, 0, 2);
    assert_eq!(engine.add_array(transposed), Ok(2));
    assert_eq!(engine.finalize().count(&[0, 0, 0]), 1.0);
    assert_eq!(engine.finalize().count(&[1, 1, 1]), 1.0);
}

#[test]
fn test_clear_data_keeps_binning() {
    let mut engine = binary_engine(&xor_data());
    engine.pid(&[1, 2, 0]).unwrap();
    engine.clear_data();

    assert_eq!(engine.bin_spec().bin_count(2), Some(2));
    assert_eq!(engine.snapshot().points_added, 0);
    engine.add_data(&xor_data()).unwrap();
    assert_abs_diff_eq!(engine.synergy(&[1, 2, 0]).unwrap(), 1.0, epsilon = 1e-12);
}
