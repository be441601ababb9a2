//! Integration tests for parallel sampling functionality
//!
//! Parallel draws must follow the same distribution as sequential ones and
//! keep shared variables consistent within each draw.

#![cfg(feature = "parallel")]

use airfoil_lift::config::{AtmosphereRanges, NominalConditions};
use airfoil_lift::scenario::atmosphere_inputs;
use airfoil_lift::{PressureProfile, UncertainValue, compute_lift};

fn mean_and_std(samples: &[f64]) -> (f64, f64) {
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

#[test]
fn test_parallel_sampling_produces_valid_results() {
    let normal = UncertainValue::normal(0.0, 1.0).unwrap();
    let samples = normal.take_samples_par(10_000);

    assert_eq!(samples.len(), 10_000);
    let support = normal.support();
    for &sample in &samples {
        assert!(support.contains(sample), "Sample {sample} is outside {support}");
    }

    let (mean, std) = mean_and_std(&samples);
    assert!(mean.abs() < 0.1, "Mean {mean} is too far from 0");
    assert!((std - 1.0).abs() < 0.1, "Std {std} is too far from 1");
}

#[test]
fn test_parallel_vs_sequential_statistical_consistency() {
    let normal = UncertainValue::normal(5.0, 2.0).unwrap();
    let count = 50_000;

    let (seq_mean, seq_std) = mean_and_std(&normal.take_samples(count));
    let (par_mean, par_std) = mean_and_std(&normal.take_samples_par(count));

    assert!((seq_mean - 5.0).abs() < 0.1, "Sequential mean {seq_mean} too far from 5.0");
    assert!((par_mean - 5.0).abs() < 0.1, "Parallel mean {par_mean} too far from 5.0");
    assert!((seq_std - 2.0).abs() < 0.1, "Sequential std {seq_std} too far from 2.0");
    assert!((par_std - 2.0).abs() < 0.1, "Parallel std {par_std} too far from 2.0");
}

#[test]
fn test_parallel_sampling_with_arithmetic() {
    let base = UncertainValue::normal(10.0, 2.0).unwrap();
    let transformed = base * 2.0 + 5.0;

    let (mean, std) = mean_and_std(&transformed.take_samples_par(10_000));
    assert!((mean - 25.0).abs() < 0.2, "Transformed mean {mean} too far from 25.0");
    assert!((std - 4.0).abs() < 0.2, "Transformed std {std} too far from 4.0");
}

#[test]
fn test_parallel_sampling_keeps_shared_variables_consistent() {
    let x = UncertainValue::uniform(0.0, 10.0).unwrap();
    let zero = x.clone() - x;
    assert!(zero.take_samples_par(1_000).iter().all(|&s| s == 0.0));
}

#[test]
fn test_parallel_lift_sampling() {
    let inputs = atmosphere_inputs(
        &NominalConditions::default(),
        &AtmosphereRanges::default(),
        &PressureProfile::naca2412_ten_degrees(),
    )
    .unwrap();
    let lift = compute_lift(&inputs).unwrap().lift;

    let (seq_mean, _) = mean_and_std(&lift.take_samples(20_000));
    let (par_mean, _) = mean_and_std(&lift.take_samples_par(20_000));
    assert!(
        (seq_mean - par_mean).abs() / seq_mean < 0.05,
        "Sequential and parallel lift means differ too much: {seq_mean} vs {par_mean}"
    );
}

#[test]
fn test_parallel_sampling_empty_and_edge_cases() {
    let normal = UncertainValue::normal(0.0, 1.0).unwrap();

    assert_eq!(normal.take_samples_par(0).len(), 0);
    assert_eq!(normal.take_samples_par(1).len(), 1);
    assert_eq!(normal.take_samples_par(10).len(), 10);

    let certain = UncertainValue::point(3.5);
    assert!(certain.take_samples_par(100).iter().all(|&s| s == 3.5));
}
