//! Input construction for the three lift scenarios.
//!
//! All scenarios feed the same [`compute_lift`](crate::physics::compute_lift);
//! they differ only in which inputs carry uncertainty.

use crate::config::{AtmosphereRanges, NominalConditions};
use crate::empirical::{EmpiricalDistributionBuilder, ScenarioCoupling};
use crate::error::{Result, UncertainError};
use crate::physics::LiftInputs;
use crate::profiles::PressureProfile;
use crate::table::{AngleOfAttackCurves, TABLE_ROWS};
use crate::uncertain::UncertainValue;
use std::fmt;

/// Which inputs of the lift computation are uncertain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scenario {
    /// Every input is a plain number.
    Fixed,
    /// Temperature, elevation and humidity follow [`AtmosphereRanges`].
    Atmosphere,
    /// The angle of attack is unknown; coefficients come from a table.
    #[default]
    AngleOfAttack,
}

impl Scenario {
    /// Whether the scenario reads its coefficients from a table file.
    #[must_use]
    pub fn needs_table(self) -> bool {
        matches!(self, Scenario::AngleOfAttack)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scenario::Fixed => "fixed",
            Scenario::Atmosphere => "atmosphere",
            Scenario::AngleOfAttack => "angle-of-attack",
        };
        f.write_str(name)
    }
}

fn profile_coefficients(profile: &PressureProfile) -> (Vec<UncertainValue>, Vec<UncertainValue>) {
    let lift = |values: &[f64]| values.iter().copied().map(UncertainValue::point).collect();
    (lift(profile.over()), lift(profile.under()))
}

/// Fully deterministic inputs: nominal conditions and a known profile.
#[must_use]
pub fn fixed_inputs(nominal: &NominalConditions, profile: &PressureProfile) -> LiftInputs {
    let (over_coefficients, under_coefficients) = profile_coefficients(profile);
    LiftInputs {
        temperature: nominal.temperature.into(),
        elevation: nominal.elevation.into(),
        humidity: nominal.humidity.into(),
        freestream_velocity: nominal.freestream_velocity.into(),
        area: nominal.area.into(),
        over_coefficients,
        under_coefficients,
    }
}

/// Uncertain atmosphere around a known profile.
///
/// # Errors
/// `InvalidParameter` if a range in `ranges` is not a valid distribution.
pub fn atmosphere_inputs(
    nominal: &NominalConditions,
    ranges: &AtmosphereRanges,
    profile: &PressureProfile,
) -> Result<LiftInputs> {
    let (over_coefficients, under_coefficients) = profile_coefficients(profile);
    Ok(LiftInputs {
        temperature: UncertainValue::normal(ranges.temperature_mean, ranges.temperature_std_dev)?,
        elevation: UncertainValue::uniform(ranges.elevation.0, ranges.elevation.1)?,
        humidity: UncertainValue::uniform(ranges.humidity.0, ranges.humidity.1)?,
        freestream_velocity: nominal.freestream_velocity.into(),
        area: nominal.area.into(),
        over_coefficients,
        under_coefficients,
    })
}

/// Nominal atmosphere with pressure coefficients that are uncertain over the
/// angle of attack.
///
/// # Errors
/// `EmptyData` for a table without positions and any error from the
/// empirical builder.
pub fn angle_of_attack_inputs(
    nominal: &NominalConditions,
    curves: &AngleOfAttackCurves,
    coupling: ScenarioCoupling,
) -> Result<LiftInputs> {
    let per_surface = curves.positions_per_surface();
    if per_surface == 0 {
        return Err(UncertainError::EmptyData {
            what: "angle of attack table",
        });
    }
    if per_surface != TABLE_ROWS - 1 {
        tracing::warn!(
            positions = per_surface,
            expected = TABLE_ROWS - 1,
            "coefficient table has an unusual number of positions"
        );
    }

    let mut coefficients = EmpiricalDistributionBuilder::new()
        .coupling(coupling)
        .build(&curves.scenario_curves())?;
    let under_coefficients = coefficients.split_off(per_surface);

    Ok(LiftInputs {
        temperature: nominal.temperature.into(),
        elevation: nominal.elevation.into(),
        humidity: nominal.humidity.into(),
        freestream_velocity: nominal.freestream_velocity.into(),
        area: nominal.area.into(),
        over_coefficients: coefficients,
        under_coefficients,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{SampleTable, TableLayout};

    #[test]
    fn test_fixed_inputs_are_degenerate() {
        let inputs = fixed_inputs(
            &NominalConditions::default(),
            &PressureProfile::naca2412_ten_degrees(),
        );
        assert_eq!(inputs.temperature.point_value(), Some(15.0));
        assert_eq!(inputs.over_coefficients.len(), 84);
        assert!(inputs.under_coefficients.iter().all(UncertainValue::is_degenerate));
    }

    #[test]
    fn test_atmosphere_inputs_are_uncertain() {
        let inputs = atmosphere_inputs(
            &NominalConditions::default(),
            &AtmosphereRanges::default(),
            &PressureProfile::naca2412_ten_degrees(),
        )
        .unwrap();
        assert!(!inputs.temperature.is_degenerate());
        assert_eq!(inputs.elevation.support().upper, 11_019.2);
        assert_eq!(inputs.area.point_value(), Some(0.23));
    }

    #[test]
    fn test_bad_atmosphere_range_rejected() {
        let ranges = AtmosphereRanges {
            humidity: (1.0, 0.0),
            ..AtmosphereRanges::default()
        };
        let result = atmosphere_inputs(
            &NominalConditions::default(),
            &ranges,
            &PressureProfile::naca2412_ten_degrees(),
        );
        assert!(matches!(result, Err(UncertainError::InvalidParameter { .. })));
    }

    #[test]
    fn test_angle_of_attack_split() {
        let text = "pos;o10;o5;o0;u0;u5;u10\n\
                    0;-1,0;-0,5;-0,25;0,1;0,2;0,3\n\
                    1;-2,0;-1,5;-1,25;0,4;0,5;0,6\n";
        let table = SampleTable::parse(text, &TableLayout::any_rows()).unwrap();
        let curves = AngleOfAttackCurves::from_table(&table).unwrap();
        let inputs = angle_of_attack_inputs(
            &NominalConditions::default(),
            &curves,
            ScenarioCoupling::Independent,
        )
        .unwrap();

        assert_eq!(inputs.over_coefficients.len(), 2);
        assert_eq!(inputs.under_coefficients.len(), 2);
        let over = inputs.over_coefficients[0].support();
        assert_eq!((over.lower, over.upper), (-1.0, -0.25));
        let under = inputs.under_coefficients[1].support();
        assert_eq!((under.lower, under.upper), (0.4, 0.6));
    }

    #[test]
    fn test_scenario_names() {
        assert_eq!(Scenario::default(), Scenario::AngleOfAttack);
        assert_eq!(Scenario::Atmosphere.to_string(), "atmosphere");
        assert!(!Scenario::Fixed.needs_table());
    }
}
