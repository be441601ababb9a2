//! Collapsing a [`LiftResult`] into printable summaries.

use crate::config::SamplingConfig;
use crate::error::Result;
use crate::physics::LiftResult;
use crate::statistics::Summary;
use crate::uncertain::UncertainValue;
use rand::Rng;
use std::fmt;

/// One summarized line of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub label: &'static str,
    pub unit: &'static str,
    pub summary: Summary,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{} = {}", self.label, self.summary)
        } else {
            write!(f, "{} = {} {}", self.label, self.summary, self.unit)
        }
    }
}

/// Intermediate quantities followed by the lift force.
#[derive(Debug, Clone, PartialEq)]
pub struct LiftReport {
    pub quantities: Vec<ReportLine>,
    pub lift: ReportLine,
}

impl LiftReport {
    /// Summarizes every quantity of `result` with draws from `rng`.
    ///
    /// # Errors
    /// Invalid sampling settings in `config`.
    pub fn from_result_with<R: Rng + ?Sized>(
        result: &LiftResult,
        config: &SamplingConfig,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        let mut line = |label, unit, value: &UncertainValue| -> Result<ReportLine> {
            Ok(ReportLine {
                label,
                unit,
                summary: value.summarize_with(config.sample_count, config.confidence, &mut *rng)?,
            })
        };

        let quantities = vec![
            line("Temperature", "°C", &result.temperature)?,
            line("Elevation", "m", &result.elevation)?,
            line("Relative humidity", "", &result.humidity)?,
            line("Air pressure", "Pa", &result.air_pressure)?,
            line("Saturation vapor pressure", "Pa", &result.saturation_pressure)?,
            line("Vapor pressure", "Pa", &result.vapor_pressure)?,
            line("Dry air pressure", "Pa", &result.dry_pressure)?,
            line("Velocity over", "m/s", &result.v_over)?,
            line("Velocity under", "m/s", &result.v_under)?,
            line("Area", "m²", &result.area)?,
            line("Density", "kg/m³", &result.density)?,
        ];
        let lift = line("Lift force", "N", &result.lift)?;

        tracing::info!(
            mean = lift.summary.mean,
            std_dev = lift.summary.std_dev,
            samples = lift.summary.samples,
            "summarized lift force"
        );
        Ok(Self { quantities, lift })
    }

    /// Summarizes with the RNG configured in `config`.
    ///
    /// # Errors
    /// Invalid sampling settings in `config`.
    pub fn from_result(result: &LiftResult, config: &SamplingConfig) -> Result<Self> {
        Self::from_result_with(result, config, &mut config.rng())
    }
}

impl fmt::Display for LiftReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.quantities {
            writeln!(f, "{line}")?;
        }
        write!(f, "{}", self.lift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NominalConditions;
    use crate::physics::compute_lift;
    use crate::profiles::PressureProfile;
    use crate::scenario::fixed_inputs;

    fn fixed_result() -> LiftResult {
        let inputs = fixed_inputs(
            &NominalConditions::default(),
            &PressureProfile::naca2412_ten_degrees(),
        );
        compute_lift(&inputs).unwrap()
    }

    #[test]
    fn test_fixed_report_is_exact() {
        let report = LiftReport::from_result(&fixed_result(), &SamplingConfig::default()).unwrap();
        assert_eq!(report.quantities.len(), 11);
        assert!(report.quantities.iter().all(|line| line.summary.is_exact()));
        assert!(report.lift.summary.is_exact());
        assert_eq!(report.quantities[0].to_string(), "Temperature = 15.000000 °C");
    }

    #[test]
    fn test_report_ends_with_lift_line() {
        let report = LiftReport::from_result(&fixed_result(), &SamplingConfig::default()).unwrap();
        let text = report.to_string();
        let last = text.lines().last().unwrap();
        assert!(last.starts_with("Lift force = 156.96"));
        assert!(last.ends_with(" N"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SamplingConfig {
            sample_count: 0,
            ..SamplingConfig::default()
        };
        assert!(LiftReport::from_result(&fixed_result(), &config).is_err());
    }
}
