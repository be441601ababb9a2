//! Bernoulli lift on a 2D airfoil in inviscid, incompressible flow.
//!
//! The formula is written once against [`UncertainValue`] arithmetic. Which
//! inputs are uncertain is decided entirely by the caller (see
//! [`crate::scenario`]); with all inputs degenerate the result is the plain
//! scalar computation.

use crate::error::{Result, UncertainError};
use crate::uncertain::UncertainValue;

/// Sea-level reference pressure, Pa
pub const SEA_LEVEL_PRESSURE: f64 = 101_325.0;
/// Gravitational acceleration, m/s²
pub const GRAVITY: f64 = 9.81;
/// Molar mass of dry air, kg/mol
pub const MOLAR_MASS_AIR: f64 = 0.028_964_4;
/// Universal gas constant, N·m/(mol·K)
pub const GAS_CONSTANT: f64 = 8.314_32;
/// Offset between °C and K
pub const KELVIN_OFFSET: f64 = 273.15;
/// Specific gas constant of dry air, J/(kg·K)
pub const DRY_AIR_GAS_CONSTANT: f64 = 287.058;
/// Specific gas constant of water vapor, J/(kg·K)
pub const WATER_VAPOR_GAS_CONSTANT: f64 = 461.495;
/// Magnus formula: saturation pressure at 0 °C
pub const MAGNUS_BASE_PRESSURE: f64 = 6.1078;
pub const MAGNUS_A: f64 = 7.5;
pub const MAGNUS_B: f64 = 237.3;

/// Everything the lift formula needs.
#[derive(Debug, Clone)]
pub struct LiftInputs {
    /// °C
    pub temperature: UncertainValue,
    /// m
    pub elevation: UncertainValue,
    /// fraction in `[0, 1]`
    pub humidity: UncertainValue,
    /// m/s
    pub freestream_velocity: UncertainValue,
    /// m²
    pub area: UncertainValue,
    pub over_coefficients: Vec<UncertainValue>,
    pub under_coefficients: Vec<UncertainValue>,
}

/// Air state derived from temperature, elevation and humidity.
#[derive(Debug, Clone)]
pub struct Atmosphere {
    pub air_pressure: UncertainValue,
    pub saturation_pressure: UncertainValue,
    pub vapor_pressure: UncertainValue,
    pub dry_pressure: UncertainValue,
    pub density: UncertainValue,
}

/// Final and intermediate quantities of one lift computation.
#[derive(Debug, Clone)]
pub struct LiftResult {
    pub temperature: UncertainValue,
    pub elevation: UncertainValue,
    pub humidity: UncertainValue,
    pub air_pressure: UncertainValue,
    pub saturation_pressure: UncertainValue,
    pub vapor_pressure: UncertainValue,
    pub dry_pressure: UncertainValue,
    pub density: UncertainValue,
    pub area: UncertainValue,
    pub v_over: UncertainValue,
    pub v_under: UncertainValue,
    /// N
    pub lift: UncertainValue,
}

/// Barometric pressure, vapor pressures and humid-air density.
///
/// # Errors
/// `DivisionByZero` if the absolute temperature (or `T + 237.3`) can reach zero.
pub fn atmosphere(
    temperature: &UncertainValue,
    elevation: &UncertainValue,
    humidity: &UncertainValue,
) -> Result<Atmosphere> {
    let kelvin = temperature.clone() + KELVIN_OFFSET;

    let exponent =
        (elevation.clone() * (-GRAVITY * MOLAR_MASS_AIR)).try_div(kelvin.clone() * GAS_CONSTANT)?;
    let air_pressure = exponent.exp() * SEA_LEVEL_PRESSURE;

    let saturation_pressure = (temperature.clone() * MAGNUS_A)
        .try_div(temperature.clone() + MAGNUS_B)?
        .base_pow(10.0)?
        * MAGNUS_BASE_PRESSURE;
    let vapor_pressure = saturation_pressure.clone() * humidity.clone();
    let dry_pressure = air_pressure.clone() - vapor_pressure.clone();

    let density = dry_pressure
        .clone()
        .try_div(kelvin.clone() * DRY_AIR_GAS_CONSTANT)?
        + vapor_pressure
            .clone()
            .try_div(kelvin * WATER_VAPOR_GAS_CONSTANT)?;

    Ok(Atmosphere {
        air_pressure,
        saturation_pressure,
        vapor_pressure,
        dry_pressure,
        density,
    })
}

/// Mean local velocity over one surface: `V * sqrt(|1 - Cp|)` averaged over
/// all positions.
///
/// # Errors
/// `EmptyData` if there are no coefficients.
pub fn surface_velocity(
    freestream_velocity: &UncertainValue,
    coefficients: &[UncertainValue],
) -> Result<UncertainValue> {
    let local = coefficients
        .iter()
        .map(|cp| Ok(freestream_velocity.clone() * (1.0 - cp.clone()).abs().sqrt()?))
        .collect::<Result<Vec<_>>>()?;
    UncertainValue::mean_of(&local)
}

/// Lift force `density * A * (v_over² - v_under²) / 2`.
///
/// # Errors
/// `EmptyData` for a surface without coefficients and any domain error raised
/// while propagating the inputs.
pub fn compute_lift(inputs: &LiftInputs) -> Result<LiftResult> {
    if inputs.over_coefficients.is_empty() || inputs.under_coefficients.is_empty() {
        return Err(UncertainError::EmptyData {
            what: "surface pressure coefficients",
        });
    }

    let atmosphere = atmosphere(&inputs.temperature, &inputs.elevation, &inputs.humidity)?;
    let v_over = surface_velocity(&inputs.freestream_velocity, &inputs.over_coefficients)?;
    let v_under = surface_velocity(&inputs.freestream_velocity, &inputs.under_coefficients)?;

    let lift = (atmosphere.density.clone()
        * inputs.area.clone()
        * (v_over.pow(2.0)? - v_under.pow(2.0)?))
    .try_div(2.0)?;

    tracing::debug!(
        nodes = lift.node_count(),
        depth = lift.depth(),
        inputs = lift.leaf_count(),
        degenerate = lift.is_degenerate(),
        "built lift computation graph"
    );

    Ok(LiftResult {
        temperature: inputs.temperature.clone(),
        elevation: inputs.elevation.clone(),
        humidity: inputs.humidity.clone(),
        air_pressure: atmosphere.air_pressure,
        saturation_pressure: atmosphere.saturation_pressure,
        vapor_pressure: atmosphere.vapor_pressure,
        dry_pressure: atmosphere.dry_pressure,
        density: atmosphere.density,
        area: inputs.area.clone(),
        v_over,
        v_under,
        lift,
    })
}
