#![allow(clippy::cast_precision_loss)]

use crate::computation::{ComputationNode, UnaryOperation};
use crate::error::{Result, UncertainError};
use crate::support::Support;
use crate::uncertain::UncertainValue;
use std::ops::{Add, Mul, Neg, Sub};

/// Binary operation types for computation graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperation {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperation {
    #[must_use]
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperation::Add => left + right,
            BinaryOperation::Sub => left - right,
            BinaryOperation::Mul => left * right,
            BinaryOperation::Div => left / right,
        }
    }

    #[must_use]
    pub fn support(&self, left: &Support, right: &Support) -> Support {
        match self {
            BinaryOperation::Add => left.add(right),
            BinaryOperation::Sub => left.sub(right),
            BinaryOperation::Mul => left.mul(right),
            BinaryOperation::Div => left.div(right),
        }
    }
}

impl UncertainValue {
    fn binary(self, rhs: Self, operation: BinaryOperation) -> Self {
        let support = operation.support(&self.support(), &rhs.support());
        let node = ComputationNode::BinaryOp {
            left: self.node,
            right: rhs.node,
            operation,
        };
        UncertainValue::with_node(node, support)
    }

    /// Divides by another uncertain value.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if zero lies within the divisor's support.
    ///
    /// # Example
    /// ```rust
    /// use airfoil_lift::UncertainValue;
    ///
    /// let ratio = UncertainValue::point(6.0).try_div(4.0).unwrap();
    /// assert_eq!(ratio.point_value(), Some(1.5));
    ///
    /// let straddling = UncertainValue::uniform(-1.0, 1.0).unwrap();
    /// assert!(UncertainValue::point(1.0).try_div(straddling).is_err());
    /// ```
    pub fn try_div(self, rhs: impl Into<UncertainValue>) -> Result<Self> {
        let rhs = rhs.into();
        let divisor = rhs.support();
        if divisor.contains(0.0) || divisor.lower.is_nan() {
            return Err(UncertainError::DivisionByZero {
                lower: divisor.lower,
                upper: divisor.upper,
            });
        }
        Ok(self.binary(rhs, BinaryOperation::Div))
    }

    /// Raises the uncertain value to a power
    ///
    /// # Errors
    /// Returns `InvalidArgument` if a possibly negative base meets a
    /// non-integer exponent, or a possibly zero base meets a negative exponent.
    ///
    /// # Example
    /// ```rust
    /// use airfoil_lift::UncertainValue;
    ///
    /// let base = UncertainValue::normal(2.0, 0.1).unwrap();
    /// let squared = base.pow(2.0).unwrap();
    /// ```
    pub fn pow(&self, exponent: f64) -> Result<Self> {
        let support = self.support();
        if exponent.fract() != 0.0 && support.lower < 0.0 {
            return Err(UncertainError::invalid_argument(
                "pow",
                support.lower,
                support.upper,
                "reaches below zero with a fractional exponent",
            ));
        }
        if exponent < 0.0 && support.contains(0.0) {
            return Err(UncertainError::invalid_argument(
                "pow",
                support.lower,
                support.upper,
                "contains zero with a negative exponent",
            ));
        }
        Ok(self.unary(UnaryOperation::Powf(exponent)))
    }

    /// Raises a positive constant to the power of this uncertain value
    ///
    /// # Errors
    /// Returns `InvalidParameter` if `base` is not positive and finite.
    pub fn base_pow(&self, base: f64) -> Result<Self> {
        if !(base.is_finite() && base > 0.0) {
            return Err(UncertainError::invalid_parameter(
                "base",
                base,
                "must be positive and finite",
            ));
        }
        Ok(self.unary(UnaryOperation::BasePow(base)))
    }

    /// Takes the square root of the uncertain value
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the support reaches below zero; take
    /// [`UncertainValue::abs`] first for quantities that may be negative.
    ///
    /// # Example
    /// ```rust
    /// use airfoil_lift::UncertainValue;
    ///
    /// let coefficient = UncertainValue::uniform(-2.8, 1.1).unwrap();
    /// let speed_ratio = (1.0 - coefficient).abs().sqrt().unwrap();
    /// ```
    pub fn sqrt(&self) -> Result<Self> {
        let support = self.support();
        if support.lower < 0.0 || support.lower.is_nan() {
            return Err(UncertainError::invalid_argument(
                "sqrt",
                support.lower,
                support.upper,
                "reaches below zero",
            ));
        }
        Ok(self.unary(UnaryOperation::Sqrt))
    }

    /// Takes the absolute value of the uncertain value
    #[must_use]
    pub fn abs(&self) -> Self {
        self.unary(UnaryOperation::Abs)
    }

    /// Takes the exponential of the uncertain value
    #[must_use]
    pub fn exp(&self) -> Self {
        self.unary(UnaryOperation::Exp)
    }

    /// Arithmetic mean of a sequence of uncertain values.
    ///
    /// Each operand keeps its own draw, so the result is the mean of
    /// independent variables rather than a collapsed number. The sum is built
    /// pairwise, so the graph depth grows with `log2(values.len())`.
    ///
    /// # Errors
    /// Returns `EmptyData` for an empty slice.
    pub fn mean_of(values: &[UncertainValue]) -> Result<Self> {
        let count = values.len();
        let mut level = values.to_vec();
        while level.len() > 1 {
            let mut pairs = level.into_iter();
            let mut next = Vec::with_capacity(count.div_ceil(2));
            while let Some(left) = pairs.next() {
                next.push(match pairs.next() {
                    Some(right) => left + right,
                    None => left,
                });
            }
            level = next;
        }
        let sum = level.pop().ok_or(UncertainError::EmptyData {
            what: "values to average",
        })?;
        sum.try_div(count as f64)
    }
}

// Addition operations
impl Add for UncertainValue {
    type Output = UncertainValue;

    fn add(self, rhs: Self) -> Self::Output {
        self.binary(rhs, BinaryOperation::Add)
    }
}

impl Add<f64> for UncertainValue {
    type Output = UncertainValue;

    fn add(self, rhs: f64) -> Self::Output {
        self + UncertainValue::point(rhs)
    }
}

impl Add<UncertainValue> for f64 {
    type Output = UncertainValue;

    fn add(self, rhs: UncertainValue) -> Self::Output {
        UncertainValue::point(self) + rhs
    }
}

// Subtraction operations
impl Sub for UncertainValue {
    type Output = UncertainValue;

    fn sub(self, rhs: Self) -> Self::Output {
        self.binary(rhs, BinaryOperation::Sub)
    }
}

impl Sub<f64> for UncertainValue {
    type Output = UncertainValue;

    fn sub(self, rhs: f64) -> Self::Output {
        self - UncertainValue::point(rhs)
    }
}

impl Sub<UncertainValue> for f64 {
    type Output = UncertainValue;

    fn sub(self, rhs: UncertainValue) -> Self::Output {
        UncertainValue::point(self) - rhs
    }
}

// Multiplication operations
impl Mul for UncertainValue {
    type Output = UncertainValue;

    fn mul(self, rhs: Self) -> Self::Output {
        self.binary(rhs, BinaryOperation::Mul)
    }
}

impl Mul<f64> for UncertainValue {
    type Output = UncertainValue;

    fn mul(self, rhs: f64) -> Self::Output {
        self * UncertainValue::point(rhs)
    }
}

impl Mul<UncertainValue> for f64 {
    type Output = UncertainValue;

    fn mul(self, rhs: UncertainValue) -> Self::Output {
        UncertainValue::point(self) * rhs
    }
}

// Negation
impl Neg for UncertainValue {
    type Output = UncertainValue;

    fn neg(self) -> Self::Output {
        self.unary(UnaryOperation::Neg)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn point(x: f64) -> UncertainValue {
        UncertainValue::point(x)
    }

    #[test]
    fn test_addition() {
        let sum = point(5.0) + point(3.0);
        assert_eq!(sum.point_value(), Some(8.0));
        assert!((sum.sample() - 8.0_f64).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scalar_addition() {
        let sum = point(5.0) + 3.0;
        assert_eq!(sum.point_value(), Some(8.0));

        let sum2 = 3.0 + point(5.0);
        assert_eq!(sum2.point_value(), Some(8.0));
    }

    #[test]
    fn test_multiplication() {
        let product = point(5.0) * point(3.0);
        assert_eq!(product.point_value(), Some(15.0));
        assert_eq!(product.sample(), 15.0);
    }

    #[test]
    fn test_complex_expression() {
        let result = (point(2.0) + point(3.0)) * 2.0 - 1.0;
        assert_eq!(result.point_value(), Some(9.0)); // (2 + 3) * 2 - 1 = 9
    }

    #[test]
    fn test_degenerate_results_match_scalar_arithmetic() {
        let (x, y) = (0.1_f64, 0.7_f64);
        assert_eq!((point(x) + point(y)).point_value(), Some(x + y));
        assert_eq!((point(x) - point(y)).point_value(), Some(x - y));
        assert_eq!((point(x) * point(y)).point_value(), Some(x * y));
        assert_eq!(point(x).try_div(y).unwrap().point_value(), Some(x / y));
        assert_eq!(point(y).pow(1.7).unwrap().point_value(), Some(y.powf(1.7)));
        assert_eq!(point(-x).abs().point_value(), Some(x));
        assert_eq!(point(y).sqrt().unwrap().point_value(), Some(y.sqrt()));
        assert_eq!(point(x).exp().point_value(), Some(x.exp()));
        assert_eq!(
            point(x).base_pow(10.0).unwrap().point_value(),
            Some(10.0_f64.powf(x))
        );
        assert_eq!((-point(x)).point_value(), Some(-x));
    }

    #[test]
    fn test_degenerate_samples_match_point_value() {
        let value = (point(1.0) - point(-1.8)).abs().sqrt().unwrap() * 30.0;
        let expected = value.point_value().unwrap();
        assert!(value.take_samples(10).iter().all(|&s| s == expected));
    }

    #[test]
    fn test_mixed_distribution_kinds_combine() {
        let uniform = UncertainValue::uniform(1.0, 2.0).unwrap();
        let normal = UncertainValue::normal(10.0, 1.0).unwrap();
        let sum = uniform + normal;
        assert!(!sum.is_degenerate());
        assert!(sum.support().contains(11.5));
    }

    #[test]
    fn test_division_by_straddling_support_fails() {
        let divisor = UncertainValue::uniform(-1.0, 1.0).unwrap();
        let err = point(1.0).try_div(divisor).unwrap_err();
        assert_eq!(
            err,
            UncertainError::DivisionByZero {
                lower: -1.0,
                upper: 1.0
            }
        );
    }

    #[test]
    fn test_division_by_scalar_zero_fails() {
        assert!(matches!(
            point(1.0).try_div(0.0),
            Err(UncertainError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_division_by_positive_support() {
        let divisor = UncertainValue::uniform(2.0, 4.0).unwrap();
        let quotient = point(8.0).try_div(divisor).unwrap();
        assert_eq!(quotient.support(), Support::new(2.0, 4.0));
        assert!(quotient.take_samples(200).iter().all(|x| x.is_finite()));
    }

    #[test]
    fn test_sqrt_rejects_negative_support() {
        let coefficient = UncertainValue::uniform(-2.8, 1.1).unwrap();
        let err = (1.0 - coefficient.clone()).sqrt().unwrap_err();
        assert!(matches!(
            err,
            UncertainError::InvalidArgument {
                operation: "sqrt",
                ..
            }
        ));

        let fine = (1.0 - coefficient).abs().sqrt().unwrap();
        assert!(fine.take_samples(200).iter().all(|x| x.is_finite()));
    }

    #[test]
    fn test_pow_domain_checks() {
        let straddling = UncertainValue::uniform(-1.0, 1.0).unwrap();
        assert!(straddling.pow(2.0).is_ok());
        assert!(straddling.pow(0.5).is_err());
        assert!(straddling.pow(-1.0).is_err());
        assert!(point(2.0).base_pow(-10.0).is_err());
    }

    #[test]
    fn test_mathematical_functions() {
        assert_eq!(point(4.0).sqrt().unwrap().point_value(), Some(2.0));
        assert_eq!(point(2.0).pow(3.0).unwrap().point_value(), Some(8.0));
    }

    #[test]
    fn test_mean_of() {
        let values = vec![point(1.0), point(2.0), point(6.0)];
        let mean = UncertainValue::mean_of(&values).unwrap();
        assert_eq!(mean.point_value(), Some(3.0));
        assert!(matches!(
            UncertainValue::mean_of(&[]),
            Err(UncertainError::EmptyData { .. })
        ));
    }

    #[test]
    fn test_mean_of_many_values_stays_shallow() {
        let count = 100_000;
        let values: Vec<UncertainValue> = (0..count)
            .map(|i| UncertainValue::uniform(i as f64, i as f64 + 1.0).unwrap())
            .collect();
        let mean = UncertainValue::mean_of(&values).unwrap();

        assert!(mean.depth() <= 20, "depth {}", mean.depth());
        let sample = mean.sample();
        assert!(mean.support().contains(sample));
        assert!((sample - count as f64 / 2.0).abs() < 1.0, "sample {sample}");
    }

    #[test]
    fn test_mean_of_odd_count_keeps_every_value() {
        let values: Vec<UncertainValue> = [1.0, 2.0, 3.0, 4.0, 5.0]
            .into_iter()
            .map(UncertainValue::point)
            .collect();
        let mean = UncertainValue::mean_of(&values).unwrap();
        assert_eq!(mean.point_value(), Some(3.0));
        assert_eq!(mean.leaf_count(), 5);
    }
}
