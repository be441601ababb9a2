//! Run settings and the fixed input conditions of the scenarios.

use crate::error::{Result, UncertainError};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for how distributions are collapsed for reporting
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingConfig {
    /// Monte Carlo draws per reported quantity
    pub sample_count: usize,
    /// Probability mass of the reported percentile interval
    pub confidence: f64,
    /// Seed for a reproducible run; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            sample_count: 10_000,
            confidence: 0.95,
            seed: None,
        }
    }
}

impl SamplingConfig {
    /// # Errors
    /// `InvalidSampleCount` for zero draws and `InvalidConfidence` for a
    /// confidence level outside `(0, 1)`.
    pub fn validate(&self) -> Result<()> {
        if self.sample_count == 0 {
            return Err(UncertainError::invalid_sample_count(
                self.sample_count,
                "must be greater than zero",
            ));
        }
        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            return Err(UncertainError::InvalidConfidence {
                value: self.confidence,
            });
        }
        Ok(())
    }

    /// RNG for the run, seeded when a seed is configured.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Inputs held fixed unless a scenario makes them uncertain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NominalConditions {
    /// Ambient temperature, °C
    pub temperature: f64,
    /// Elevation above sea level, m
    pub elevation: f64,
    /// Relative humidity as a fraction
    pub humidity: f64,
    /// Free stream velocity, m/s
    pub freestream_velocity: f64,
    /// Airfoil area, m²
    pub area: f64,
}

impl Default for NominalConditions {
    fn default() -> Self {
        Self {
            temperature: 15.0,
            elevation: 0.0,
            humidity: 0.0,
            freestream_velocity: 30.0,
            area: 0.23,
        }
    }
}

/// Distributions of the uncertain atmosphere scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereRanges {
    /// Relative humidity, uniform over this range
    pub humidity: (f64, f64),
    /// Elevation in m, uniform over the troposphere
    pub elevation: (f64, f64),
    /// Mean of the normally distributed temperature, °C
    pub temperature_mean: f64,
    /// Standard deviation of the temperature, °C
    pub temperature_std_dev: f64,
}

impl Default for AtmosphereRanges {
    fn default() -> Self {
        Self {
            humidity: (0.0, 1.0),
            elevation: (0.0, 11_019.2),
            temperature_mean: 0.0,
            temperature_std_dev: 50.0,
        }
    }
}
