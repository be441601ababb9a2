//! Turning a handful of alternative sample curves into per-position
//! uncertain values.
//!
//! Each curve is one scenario (for the airfoil: one angle of attack), and every
//! scenario is taken to be equally plausible. Position `i` of the output is
//! uncertain only because we do not know which scenario applies; the values the
//! scenarios put at `i` are used as they are, never smoothed or interpolated.

#![allow(clippy::cast_precision_loss)]

use crate::computation::UnaryOperation;
use crate::distributions::Distribution;
use crate::error::{Result, UncertainError};
use crate::uncertain::UncertainValue;
use std::sync::Arc;

/// How draws at different positions relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScenarioCoupling {
    /// Every position picks its scenario on its own.
    #[default]
    Independent,
    /// One scenario is picked per draw and applies at every position.
    Shared,
}

/// Builds one empirical [`UncertainValue`] per position from `k` curves of
/// length `n`.
///
/// # Example
/// ```rust
/// use airfoil_lift::EmpiricalDistributionBuilder;
///
/// let curves = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0]];
/// let values = EmpiricalDistributionBuilder::new().build(&curves).unwrap();
/// assert_eq!(values.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EmpiricalDistributionBuilder {
    coupling: ScenarioCoupling,
}

impl EmpiricalDistributionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn coupling(mut self, coupling: ScenarioCoupling) -> Self {
        self.coupling = coupling;
        self
    }

    /// Builds the per-position values.
    ///
    /// # Errors
    /// Returns `EmptyData` if no curves are given, `ShapeMismatch` if the
    /// curves differ in length and `NonFiniteParameter` for NaN or infinite
    /// entries.
    pub fn build<C: AsRef<[f64]>>(&self, curves: &[C]) -> Result<Vec<UncertainValue>> {
        let positions = check_shape(curves)?;
        let columns: Vec<Vec<f64>> = (0..positions)
            .map(|i| curves.iter().map(|curve| curve.as_ref()[i]).collect())
            .collect();

        let values = match self.coupling {
            ScenarioCoupling::Independent => columns
                .into_iter()
                .map(UncertainValue::empirical)
                .collect::<Result<Vec<_>>>()?,
            ScenarioCoupling::Shared => {
                for column in &columns {
                    Distribution::Empirical(column.as_slice().into()).validate()?;
                }
                let scenario = UncertainValue::empirical(
                    (0..curves.len()).map(|j| j as f64).collect(),
                )?;
                columns
                    .into_iter()
                    .map(|column| scenario.unary(UnaryOperation::Select(Arc::from(column))))
                    .collect()
            }
        };

        tracing::debug!(
            scenarios = curves.len(),
            positions,
            coupling = ?self.coupling,
            "built empirical distributions"
        );
        Ok(values)
    }

    /// Shorthand for a [`ScenarioCoupling::Shared`] build: one draw selects
    /// the same curve at every position.
    ///
    /// # Errors
    /// Same as [`EmpiricalDistributionBuilder::build`].
    pub fn build_coupled<C: AsRef<[f64]>>(&self, curves: &[C]) -> Result<Vec<UncertainValue>> {
        self.coupling(ScenarioCoupling::Shared).build(curves)
    }
}

fn check_shape<C: AsRef<[f64]>>(curves: &[C]) -> Result<usize> {
    let first = curves.first().ok_or(UncertainError::EmptyData {
        what: "sample curves",
    })?;
    let expected = first.as_ref().len();
    for (index, curve) in curves.iter().enumerate().skip(1) {
        let actual = curve.as_ref().len();
        if actual != expected {
            return Err(UncertainError::shape_mismatch(index, expected, actual));
        }
    }
    Ok(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn test_independent_sample_sets_per_position() {
        let values = EmpiricalDistributionBuilder::new().build(&curves()).unwrap();
        let expected = [[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]];
        for (value, samples) in values.iter().zip(expected) {
            assert_eq!(
                value.distribution(),
                Some(&Distribution::Empirical(Arc::from(samples.to_vec())))
            );
        }
    }

    #[test]
    fn test_shape_mismatch() {
        let curves = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0]];
        let err = EmpiricalDistributionBuilder::new().build(&curves).unwrap_err();
        assert_eq!(err, UncertainError::shape_mismatch(2, 3, 2));
    }

    #[test]
    fn test_no_curves() {
        let curves: Vec<Vec<f64>> = Vec::new();
        assert!(matches!(
            EmpiricalDistributionBuilder::new().build(&curves),
            Err(UncertainError::EmptyData { .. })
        ));
    }

    #[test]
    fn test_shared_coupling_picks_one_curve_per_draw() {
        let values = EmpiricalDistributionBuilder::new()
            .coupling(ScenarioCoupling::Shared)
            .build(&curves())
            .unwrap();
        // Position 2 minus position 0 is always 2 when both come from one curve.
        let spread = values[2].clone() - values[0].clone();
        let mut rng = StdRng::seed_from_u64(11);
        for sample in spread.take_samples_with(200, &mut rng) {
            assert!((sample - 2.0).abs() < f64::EPSILON);
        }
        assert_eq!(values[1].support().lower, 2.0);
        assert_eq!(values[1].support().upper, 8.0);
    }

    #[test]
    fn test_independent_coupling_mixes_curves() {
        let values = EmpiricalDistributionBuilder::new().build(&curves()).unwrap();
        let spread = values[2].clone() - values[0].clone();
        let samples = spread.take_samples(500);
        assert!(samples.iter().any(|&s| (s - 2.0).abs() > f64::EPSILON));
    }

    #[test]
    fn test_single_scenario_is_degenerate() {
        let values = EmpiricalDistributionBuilder::new()
            .build_coupled(&[vec![0.5, -1.25]])
            .unwrap();
        assert_eq!(values[1].point_value(), Some(-1.25));
    }
}
