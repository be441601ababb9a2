//! Empirical distributions over alternative sample curves.

use airfoil_lift::{
    Distribution, EmpiricalDistributionBuilder, ScenarioCoupling, UncertainError, UncertainValue,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn curves() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ]
}

#[test]
fn test_positions_draw_only_observed_values() {
    let values = EmpiricalDistributionBuilder::new().build(&curves()).unwrap();
    let expected = [[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]];

    let mut rng = StdRng::seed_from_u64(3);
    for (value, allowed) in values.iter().zip(expected) {
        let samples = value.take_samples_with(600, &mut rng);
        assert!(samples.iter().all(|s| allowed.contains(s)));
        for observed in allowed {
            assert!(samples.contains(&observed), "{observed} never drawn");
        }
    }
}

#[test]
fn test_scenarios_are_equally_likely() {
    let values = EmpiricalDistributionBuilder::new().build(&curves()).unwrap();
    let mut rng = StdRng::seed_from_u64(21);
    let samples = values[0].take_samples_with(9_000, &mut rng);
    for observed in [1.0, 4.0, 7.0] {
        let share = samples.iter().filter(|&&s| s == observed).count() as f64 / 9_000.0;
        assert!((share - 1.0 / 3.0).abs() < 0.03, "{observed} drawn {share}");
    }
}

#[test]
fn test_ragged_curves_rejected() {
    let ragged = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0]];
    for coupling in [ScenarioCoupling::Independent, ScenarioCoupling::Shared] {
        let err = EmpiricalDistributionBuilder::new()
            .coupling(coupling)
            .build(&ragged)
            .unwrap_err();
        assert_eq!(
            err,
            UncertainError::ShapeMismatch {
                curve: 2,
                expected: 3,
                actual: 2
            }
        );
    }
}

#[test]
fn test_non_finite_sample_rejected() {
    let curves = vec![vec![1.0, f64::NAN], vec![2.0, 3.0]];
    assert!(matches!(
        EmpiricalDistributionBuilder::new().build(&curves),
        Err(UncertainError::NonFiniteParameter { .. })
    ));
    assert!(matches!(
        EmpiricalDistributionBuilder::new().build_coupled(&curves),
        Err(UncertainError::NonFiniteParameter { .. })
    ));
}

#[test]
fn test_coupled_positions_move_together() {
    let values = EmpiricalDistributionBuilder::new()
        .build_coupled(&curves())
        .unwrap();
    let total = UncertainValue::mean_of(&values).unwrap();

    let mut rng = StdRng::seed_from_u64(8);
    for sample in total.take_samples_with(300, &mut rng) {
        assert!([2.0, 5.0, 8.0].iter().any(|m| (sample - m).abs() < 1e-12));
    }
}

#[test]
fn test_builder_accepts_slices() {
    let a = [0.1, 0.2];
    let b = [0.3, 0.4];
    let values = EmpiricalDistributionBuilder::new()
        .build(&[&a[..], &b[..]])
        .unwrap();
    assert_eq!(
        values[1].distribution(),
        Some(&Distribution::Empirical(vec![0.2, 0.4].into()))
    );
}
