//! # airfoil-lift
//!
//! Uncertainty propagation for the lift force on a 2D airfoil, using
//! sampling-based computation in the style of
//! "Uncertain<T>: A First-Order Type for Uncertain Data" by Bornholt, Mytkowicz, and McKinley.
//!
//! ## Core Concept: One Formula, Any Inputs
//!
//! Every input is an [`UncertainValue`]. A plain number is the degenerate case,
//! so the same formula serves fixed inputs, parametric distributions and
//! empirical scenario sets:
//!
//! ```rust
//! use airfoil_lift::UncertainValue;
//!
//! // Certain inputs give exactly the scalar result
//! let exact = UncertainValue::point(5.0) * UncertainValue::point(3.0);
//! assert_eq!(exact.point_value(), Some(15.0));
//!
//! // Uncertain inputs give a distribution
//! let temperature = UncertainValue::normal(15.0, 2.0).unwrap();
//! let kelvin = temperature + 273.15;
//! let summary = kelvin.summarize(1_000, 0.95).unwrap();
//! assert!((summary.mean - 288.15).abs() < 1.0);
//!
//! // Division is refused when the divisor might be zero
//! let straddles_zero = UncertainValue::uniform(-1.0, 1.0).unwrap();
//! assert!(UncertainValue::point(1.0).try_div(straddles_zero).is_err());
//! ```
//!
//! ## Features
//!
//! - **Degenerate closure**: certain operands produce bit-exact scalar results
//! - **Support tracking**: every value knows the interval it can take
//! - **Shared variables**: a value used twice in a formula takes one draw per evaluation
//! - **Empirical scenarios**: per-position distributions over alternative curves
//! - **Statistical summaries**: mean, standard deviation and percentile intervals

pub mod computation;
pub mod config;
pub mod distributions;
pub mod empirical;
pub mod error;
pub mod logging;
pub mod operations;
pub mod physics;
pub mod profiles;
pub mod report;
pub mod scenario;
pub mod statistics;
pub mod support;
pub mod table;
pub mod uncertain;

pub use config::{AtmosphereRanges, NominalConditions, SamplingConfig};
pub use distributions::Distribution;
pub use empirical::{EmpiricalDistributionBuilder, ScenarioCoupling};
pub use error::{Result, TableError, UncertainError};
pub use physics::{LiftInputs, LiftResult, compute_lift};
pub use profiles::PressureProfile;
pub use report::LiftReport;
pub use scenario::Scenario;
pub use statistics::Summary;
pub use support::Support;
pub use table::{AngleOfAttack, AngleOfAttackCurves, SampleTable, TableLayout};
pub use uncertain::UncertainValue;
