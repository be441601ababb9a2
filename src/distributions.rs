#![allow(clippy::cast_precision_loss)]

use crate::error::{Result, UncertainError};
use crate::support::Support;
use crate::uncertain::UncertainValue;
use rand::Rng;
use std::f64::consts::PI;
use std::sync::Arc;

/// Smallest uniform draw fed to the Box-Muller transform.
///
/// Clamping both draws to `[MIN_UNIFORM, 1 - MIN_UNIFORM]` bounds every normal
/// sample to `mean ± normal_tail_bound() * std_dev`.
pub const MIN_UNIFORM: f64 = 0.001;

/// Largest |z| the clamped Box-Muller transform can return (about 3.717).
#[must_use]
pub fn normal_tail_bound() -> f64 {
    (-2.0 * MIN_UNIFORM.ln()).sqrt()
}

/// How the uncertainty of an input is known.
#[derive(Debug, Clone, PartialEq)]
pub enum Distribution {
    /// A certain value.
    Point(f64),
    /// Equally likely anywhere in `[low, high]`.
    Uniform { low: f64, high: f64 },
    /// Gaussian, truncated to `mean ± normal_tail_bound() * std_dev`
    /// (about 3.717σ).
    Normal { mean: f64, std_dev: f64 },
    /// Equally likely to be any of the observed samples.
    Empirical(Arc<[f64]>),
}

impl Distribution {
    /// Checks the parameters of the distribution.
    ///
    /// # Errors
    /// Returns `NonFiniteParameter` for NaN or infinite parameters,
    /// `InvalidParameter` for `low > high` or a negative standard deviation and
    /// `EmptyData` for an empirical distribution without samples.
    pub fn validate(&self) -> Result<()> {
        match self {
            Distribution::Point(value) => finite("value", *value),
            Distribution::Uniform { low, high } => {
                finite("low", *low)?;
                finite("high", *high)?;
                if low > high {
                    return Err(UncertainError::invalid_parameter(
                        "low",
                        *low,
                        "must not exceed high",
                    ));
                }
                Ok(())
            }
            Distribution::Normal { mean, std_dev } => {
                finite("mean", *mean)?;
                finite("std_dev", *std_dev)?;
                if *std_dev < 0.0 {
                    return Err(UncertainError::invalid_parameter(
                        "std_dev",
                        *std_dev,
                        "must be non-negative",
                    ));
                }
                Ok(())
            }
            Distribution::Empirical(samples) => {
                if samples.is_empty() {
                    return Err(UncertainError::EmptyData {
                        what: "empirical samples",
                    });
                }
                samples.iter().try_for_each(|&x| finite("sample", x))
            }
        }
    }

    /// Interval containing every value [`Distribution::sample`] can return.
    #[must_use]
    pub fn support(&self) -> Support {
        match self {
            Distribution::Point(value) => Support::point(*value),
            Distribution::Uniform { low, high } => Support::new(*low, *high),
            Distribution::Normal { mean, std_dev } => {
                if *std_dev == 0.0 {
                    Support::point(*mean)
                } else {
                    let reach = std_dev * normal_tail_bound();
                    Support::new(mean - reach, mean + reach)
                }
            }
            Distribution::Empirical(samples) => Support::spanning(samples.iter().copied())
                .unwrap_or_else(|| Support::point(f64::NAN)),
        }
    }

    /// Draws one value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Distribution::Point(value) => *value,
            Distribution::Uniform { low, high } => low + (high - low) * rng.random::<f64>(),
            Distribution::Normal { mean, std_dev } => {
                // Box-Muller transform for normal distribution
                let u1: f64 = rng.random::<f64>().clamp(MIN_UNIFORM, 1.0 - MIN_UNIFORM);
                let u2: f64 = rng.random::<f64>().clamp(MIN_UNIFORM, 1.0 - MIN_UNIFORM);
                let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
                mean + std_dev * z0
            }
            Distribution::Empirical(samples) => samples[rng.random_range(0..samples.len())],
        }
    }
}

fn finite(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(UncertainError::non_finite(parameter, value))
    }
}

impl UncertainValue {
    /// Creates a point-mass distribution (certain value)
    ///
    /// # Example
    /// ```rust
    /// use airfoil_lift::UncertainValue;
    ///
    /// let certain_value = UncertainValue::point(42.0);
    /// assert_eq!(certain_value.sample(), 42.0);
    /// ```
    #[must_use]
    pub fn point(value: f64) -> Self {
        Self::leaf(Distribution::Point(value))
    }

    /// Creates a uniform distribution over `[low, high]`
    ///
    /// # Errors
    /// Returns an error if `low > high` or either bound is not finite.
    ///
    /// # Example
    /// ```rust
    /// use airfoil_lift::UncertainValue;
    ///
    /// let humidity = UncertainValue::uniform(0.0, 1.0).unwrap();
    /// assert!(humidity.support().contains(0.5));
    /// ```
    pub fn uniform(low: f64, high: f64) -> Result<Self> {
        Self::from_distribution(Distribution::Uniform { low, high })
    }

    /// Creates a normal (Gaussian) distribution
    ///
    /// Draws come from a Box-Muller transform whose uniform inputs are clamped
    /// to `[MIN_UNIFORM, 1 - MIN_UNIFORM]`, so every sample lies within
    /// `mean ± normal_tail_bound() * std_dev` (about 3.717σ). That interval is
    /// the value's support, which is what division and domain checks see.
    ///
    /// # Errors
    /// Returns an error if `std_dev` is negative or a parameter is not finite.
    ///
    /// # Example
    /// ```rust
    /// use airfoil_lift::UncertainValue;
    ///
    /// let temperature = UncertainValue::normal(15.0, 5.0).unwrap();
    /// ```
    pub fn normal(mean: f64, std_dev: f64) -> Result<Self> {
        Self::from_distribution(Distribution::Normal { mean, std_dev })
    }

    /// Creates an empirical distribution from observed data
    ///
    /// Every sample is equally likely; nothing is interpolated between them.
    ///
    /// # Errors
    /// Returns an error if the data vector is empty or holds non-finite values.
    ///
    /// # Example
    /// ```rust
    /// use airfoil_lift::UncertainValue;
    ///
    /// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    /// let empirical = UncertainValue::empirical(data).unwrap();
    /// ```
    pub fn empirical(data: Vec<f64>) -> Result<Self> {
        Self::from_distribution(Distribution::Empirical(data.into()))
    }

    /// Creates an uncertain value from any validated distribution.
    ///
    /// # Errors
    /// Returns the validation error of the distribution.
    pub fn from_distribution(distribution: Distribution) -> Result<Self> {
        distribution.validate()?;
        Ok(Self::leaf(distribution))
    }
}

impl From<f64> for UncertainValue {
    fn from(value: f64) -> Self {
        Self::point(value)
    }
}
