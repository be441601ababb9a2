#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

use crate::error::{Result, UncertainError};
use crate::uncertain::UncertainValue;
use rand::Rng;
use std::fmt;

/// Collapsed view of a distribution for reporting.
///
/// This is the only place where an uncertain value turns into plain numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Point estimate (sample mean)
    pub mean: f64,
    /// Sample standard deviation (population form)
    pub std_dev: f64,
    /// Lower bound of the central percentile interval
    pub lower: f64,
    /// Upper bound of the central percentile interval
    pub upper: f64,
    /// Probability mass of the interval
    pub confidence: f64,
    /// Number of samples the summary was computed from; zero when exact
    pub samples: usize,
}

impl Summary {
    /// Summary of a value with no uncertainty.
    #[must_use]
    pub fn exact(value: f64, confidence: f64) -> Self {
        Self {
            mean: value,
            std_dev: 0.0,
            lower: value,
            upper: value,
            confidence,
            samples: 0,
        }
    }

    /// Summarizes a batch of samples.
    ///
    /// # Errors
    /// Returns `InvalidSampleCount` for an empty batch and `InvalidConfidence`
    /// if `confidence` is outside `(0, 1)`.
    pub fn from_samples(mut samples: Vec<f64>, confidence: f64) -> Result<Self> {
        check_confidence(confidence)?;
        check_sample_count(samples.len())?;

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

        samples.sort_by(f64::total_cmp);
        let (lower, upper) = central_interval(&samples, confidence);

        Ok(Self {
            mean,
            std_dev: variance.sqrt(),
            lower,
            upper,
            confidence,
            samples: samples.len(),
        })
    }

    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.std_dev == 0.0 && self.lower == self.upper
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_exact() {
            write!(f, "{:.6}", self.mean)
        } else {
            write!(
                f,
                "{:.6} ± {:.6} ({:.0}% interval [{:.6}, {:.6}])",
                self.mean,
                self.std_dev,
                self.confidence * 100.0,
                self.lower,
                self.upper
            )
        }
    }
}

fn check_sample_count(count: usize) -> Result<()> {
    if count == 0 {
        return Err(UncertainError::invalid_sample_count(
            count,
            "must be greater than zero",
        ));
    }
    Ok(())
}

fn check_confidence(confidence: f64) -> Result<()> {
    if confidence > 0.0 && confidence < 1.0 {
        Ok(())
    } else {
        Err(UncertainError::InvalidConfidence { value: confidence })
    }
}

/// Central interval of sorted samples holding `confidence` of the mass.
fn central_interval(sorted: &[f64], confidence: f64) -> (f64, f64) {
    let alpha = 1.0 - confidence;
    let samples_len = sorted.len();
    let lower_idx = ((alpha / 2.0) * samples_len as f64).floor() as usize;
    let upper_idx = (((1.0 - alpha / 2.0) * samples_len as f64).floor() as usize).saturating_sub(1);

    let lower_idx = lower_idx.min(samples_len - 1);
    let upper_idx = upper_idx.min(samples_len - 1).max(lower_idx);

    (sorted[lower_idx], sorted[upper_idx])
}

/// Statistical analysis methods for uncertain values
///
/// Degenerate values short-circuit to their exact point value, so a certain
/// computation reports the same number plain arithmetic would.
impl UncertainValue {
    /// Calculates the expected value (mean) of the distribution
    ///
    /// # Errors
    /// Returns `InvalidSampleCount` if `sample_count` is zero.
    ///
    /// # Example
    /// ```rust
    /// use airfoil_lift::UncertainValue;
    ///
    /// let normal = UncertainValue::normal(10.0, 2.0).unwrap();
    /// let mean = normal.expected_value(1000).unwrap();
    /// // Should be approximately 10.0
    /// ```
    pub fn expected_value(&self, sample_count: usize) -> Result<f64> {
        check_sample_count(sample_count)?;
        if let Some(value) = self.point_value() {
            return Ok(value);
        }
        let samples = self.take_samples(sample_count);
        Ok(samples.iter().sum::<f64>() / sample_count as f64)
    }

    /// Calculates the variance of the distribution
    ///
    /// # Errors
    /// Returns `InvalidSampleCount` if `sample_count` is zero.
    pub fn variance(&self, sample_count: usize) -> Result<f64> {
        check_sample_count(sample_count)?;
        if self.is_degenerate() {
            return Ok(0.0);
        }
        let samples = self.take_samples(sample_count);
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        Ok(samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / samples.len() as f64)
    }

    /// Calculates the standard deviation of the distribution
    ///
    /// # Errors
    /// Returns `InvalidSampleCount` if `sample_count` is zero.
    ///
    /// # Example
    /// ```rust
    /// use airfoil_lift::UncertainValue;
    ///
    /// let normal = UncertainValue::normal(0.0, 2.0).unwrap();
    /// let std_dev = normal.standard_deviation(1000).unwrap();
    /// // Should be approximately 2.0
    /// ```
    pub fn standard_deviation(&self, sample_count: usize) -> Result<f64> {
        Ok(self.variance(sample_count)?.sqrt())
    }

    /// Estimates quantiles of the distribution
    ///
    /// # Errors
    /// Returns `InvalidQuantile` if `q` is outside `[0, 1]` and
    /// `InvalidSampleCount` if `sample_count` is zero.
    pub fn quantile(&self, q: f64, sample_count: usize) -> Result<f64> {
        if !(0.0..=1.0).contains(&q) {
            return Err(UncertainError::InvalidQuantile { value: q });
        }
        check_sample_count(sample_count)?;
        if let Some(value) = self.point_value() {
            return Ok(value);
        }

        let mut samples = self.take_samples(sample_count);
        samples.sort_by(f64::total_cmp);

        let index = (q * samples.len().saturating_sub(1) as f64).floor() as usize;
        let index = index.min(samples.len() - 1);

        Ok(samples[index])
    }

    /// Calculates confidence interval bounds
    ///
    /// # Errors
    /// Returns `InvalidConfidence` if `confidence` is outside `(0, 1)` and
    /// `InvalidSampleCount` if `sample_count` is zero.
    ///
    /// # Example
    /// ```rust
    /// use airfoil_lift::UncertainValue;
    ///
    /// let normal = UncertainValue::normal(100.0, 15.0).unwrap();
    /// let (lower, upper) = normal.confidence_interval(0.95, 1000).unwrap();
    /// // 95% of values should fall between lower and upper
    /// ```
    pub fn confidence_interval(&self, confidence: f64, sample_count: usize) -> Result<(f64, f64)> {
        check_confidence(confidence)?;
        check_sample_count(sample_count)?;
        if let Some(value) = self.point_value() {
            return Ok((value, value));
        }
        let mut samples = self.take_samples(sample_count);
        samples.sort_by(f64::total_cmp);
        Ok(central_interval(&samples, confidence))
    }

    /// Summarizes the distribution from a single batch of draws.
    ///
    /// # Errors
    /// Returns `InvalidConfidence` or `InvalidSampleCount` for bad settings.
    pub fn summarize_with<R: Rng + ?Sized>(
        &self,
        sample_count: usize,
        confidence: f64,
        rng: &mut R,
    ) -> Result<Summary> {
        check_confidence(confidence)?;
        check_sample_count(sample_count)?;
        if let Some(value) = self.point_value() {
            return Ok(Summary::exact(value, confidence));
        }
        Summary::from_samples(self.take_samples_with(sample_count, rng), confidence)
    }

    /// Summarizes the distribution using the thread-local RNG.
    ///
    /// # Errors
    /// Returns `InvalidConfidence` or `InvalidSampleCount` for bad settings.
    pub fn summarize(&self, sample_count: usize, confidence: f64) -> Result<Summary> {
        self.summarize_with(sample_count, confidence, &mut rand::rng())
    }
}
