//! Digitized pressure-coefficient distributions for a NACA 2412 airfoil at a
//! 10° angle of attack, used by the scenarios that do not read a table.

use crate::error::{Result, UncertainError};

/// Positions digitized on each surface.
pub const PROFILE_POSITIONS: usize = 84;

/// Cp over the upper surface, leading edge to trailing edge.
pub const NACA2412_AOA10_OVER: [f64; PROFILE_POSITIONS] = [
    -2.3444, -2.4402, -2.5411, -2.577, -2.7322, -2.7316, -2.5977,
    -2.575, -2.5415, -2.3405, -2.3121, -2.2061, -2.1597, -2.0826,
    -1.9988, -1.9037, -1.7997, -1.7692, -1.63, -1.6235, -1.4999,
    -1.4769, -1.4098, -1.3809, -1.3528, -1.3367, -1.3181, -1.2695,
    -1.239, -1.1633, -1.1599, -1.0807, -1.0715, -1.0127, -0.9936,
    -0.9336, -0.8987, -0.8544, -0.8222, -0.7642, -0.7355, -0.6851,
    -0.645, -0.6061, -0.5636, -0.538, -0.4927, -0.4825, -0.4468,
    -0.4431, -0.4454, -0.444, -0.4329, -0.4205, -0.4094, -0.3889,
    -0.3636, -0.349, -0.3179, -0.2992, -0.2832, -0.2727, -0.2596,
    -0.2451, -0.2248, -0.2195, -0.2012, -0.1998, -0.1808, -0.1781,
    -0.1831, -0.1885, -0.1837, -0.1769, -0.1889, -0.1865, -0.1799,
    -0.1841, -0.1785, -0.1838, -0.1742, -0.1779, -0.1823, -0.1789,
];

/// Cp under the lower surface, leading edge to trailing edge.
pub const NACA2412_AOA10_UNDER: [f64; PROFILE_POSITIONS] = [
    0.8111, 0.9226, 1.0007, 0.9934, 0.8905, 0.8737, 0.7471,
    0.7336, 0.714, 0.6252, 0.6152, 0.5857, 0.5611, 0.4833,
    0.429, 0.403, 0.3861, 0.3781, 0.3431, 0.3423, 0.3439,
    0.3448, 0.3393, 0.3353, 0.3354, 0.3368, 0.3345, 0.3272,
    0.3228, 0.3067, 0.3057, 0.2782, 0.275, 0.2539, 0.2432,
    0.2017, 0.1893, 0.2187, 0.2461, 0.2578, 0.2585, 0.2675,
    0.2711, 0.2632, 0.2392, 0.2206, 0.1912, 0.1853, 0.1643,
    0.1539, 0.1427, 0.1439, 0.1585, 0.1679, 0.1675, 0.1579,
    0.1564, 0.159, 0.164, 0.1606, 0.1438, 0.1286, 0.1278,
    0.1299, 0.1214, 0.1199, 0.1316, 0.1322, 0.1217, 0.1134,
    0.1001, 0.102, 0.1118, 0.1173, 0.1216, 0.1122, 0.1017,
    0.1134, 0.1031, 0.1022, 0.1164, 0.1036, 0.1032, 0.1174,
];

/// Over- and under-surface pressure coefficients of one airfoil state.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureProfile {
    over: Vec<f64>,
    under: Vec<f64>,
}

impl PressureProfile {
    /// # Errors
    /// `EmptyData` if either surface is empty, `ShapeMismatch` if the surfaces
    /// differ in length and `NonFiniteParameter` for NaN or infinite entries.
    pub fn new(over: Vec<f64>, under: Vec<f64>) -> Result<Self> {
        if over.is_empty() || under.is_empty() {
            return Err(UncertainError::EmptyData {
                what: "pressure profile surface",
            });
        }
        if over.len() != under.len() {
            return Err(UncertainError::shape_mismatch(1, over.len(), under.len()));
        }
        if let Some(&bad) = over.iter().chain(&under).find(|v| !v.is_finite()) {
            return Err(UncertainError::non_finite("pressure coefficient", bad));
        }
        Ok(Self { over, under })
    }

    /// The NACA 2412 profile at 10°.
    #[must_use]
    pub fn naca2412_ten_degrees() -> Self {
        Self {
            over: NACA2412_AOA10_OVER.to_vec(),
            under: NACA2412_AOA10_UNDER.to_vec(),
        }
    }

    #[must_use]
    pub fn over(&self) -> &[f64] {
        &self.over
    }

    #[must_use]
    pub fn under(&self) -> &[f64] {
        &self.under
    }
}
