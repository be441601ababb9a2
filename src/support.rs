//! Closed intervals bounding the values an uncertain quantity can take.
//!
//! Every [`UncertainValue`](crate::UncertainValue) carries a [`Support`] that is
//! propagated through arithmetic with ordinary interval rules. The interval is
//! what lets division and square roots be rejected up front instead of
//! producing `inf` or `NaN` somewhere inside a Monte Carlo loop, and it is what
//! identifies degenerate (zero-width) values whose results must match plain
//! scalar arithmetic exactly.

use std::fmt;

/// A closed interval `[lower, upper]` containing every possible sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Support {
    pub lower: f64,
    pub upper: f64,
}

impl Support {
    /// Creates an interval; the bounds are reordered if given backwards.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { lower: a, upper: b }
        } else {
            Self { lower: b, upper: a }
        }
    }

    /// The zero-width interval `[value, value]`.
    #[must_use]
    pub fn point(value: f64) -> Self {
        Self {
            lower: value,
            upper: value,
        }
    }

    /// Smallest interval containing all the given values.
    ///
    /// Returns `None` for an empty iterator.
    pub fn spanning<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Self::point(v)),
            Some(s) => Some(Self {
                lower: s.lower.min(v),
                upper: s.upper.max(v),
            }),
        })
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Image of the interval under a monotone function.
    ///
    /// For degenerate intervals `f` is evaluated once, so the bound is exactly
    /// the scalar result.
    #[must_use]
    pub fn map_monotone<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        if self.is_degenerate() {
            Self::point(f(self.lower))
        } else {
            Self::new(f(self.lower), f(self.upper))
        }
    }

    #[must_use]
    pub fn add(&self, rhs: &Self) -> Self {
        Self {
            lower: self.lower + rhs.lower,
            upper: self.upper + rhs.upper,
        }
    }

    #[must_use]
    pub fn sub(&self, rhs: &Self) -> Self {
        Self {
            lower: self.lower - rhs.upper,
            upper: self.upper - rhs.lower,
        }
    }

    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        self.corners(rhs, |a, b| a * b)
    }

    /// Quotient interval. The caller must have checked that `rhs` excludes zero.
    #[must_use]
    pub fn div(&self, rhs: &Self) -> Self {
        self.corners(rhs, |a, b| a / b)
    }

    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            lower: -self.upper,
            upper: -self.lower,
        }
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        if self.lower >= 0.0 {
            *self
        } else if self.upper <= 0.0 {
            self.neg()
        } else {
            Self {
                lower: 0.0,
                upper: self.upper.max(-self.lower),
            }
        }
    }

    /// Image under `x.powf(exponent)`.
    ///
    /// Assumes the caller rejected negative bases for non-integer exponents and
    /// zero bases for negative exponents.
    #[must_use]
    pub fn powf(&self, exponent: f64) -> Self {
        if self.is_degenerate() {
            return Self::point(self.lower.powf(exponent));
        }
        let at_lower = self.lower.powf(exponent);
        let at_upper = self.upper.powf(exponent);
        let even = exponent.fract() == 0.0 && exponent % 2.0 == 0.0;
        if even && self.lower < 0.0 && self.upper > 0.0 {
            let zero = 0.0_f64.powf(exponent);
            Self::new(zero.min(at_lower.min(at_upper)), at_lower.max(at_upper))
        } else {
            Self::new(at_lower, at_upper)
        }
    }

    fn corners<F>(&self, rhs: &Self, op: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.is_degenerate() && rhs.is_degenerate() {
            return Self::point(op(self.lower, rhs.lower));
        }
        let candidates = [
            op(self.lower, rhs.lower),
            op(self.lower, rhs.upper),
            op(self.upper, rhs.lower),
            op(self.upper, rhs.upper),
        ];
        let lower = candidates.iter().copied().fold(f64::INFINITY, f64::min);
        let upper = candidates.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self { lower, upper }
    }
}

impl fmt::Display for Support {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_bounds() {
        let s = Support::new(3.0, -1.0);
        assert_eq!(s, Support { lower: -1.0, upper: 3.0 });
    }

    #[test]
    fn test_spanning() {
        let s = Support::spanning([2.0, -4.0, 7.5]).unwrap();
        assert_eq!(s, Support::new(-4.0, 7.5));
        assert!(Support::spanning(Vec::<f64>::new()).is_none());
    }

    #[test]
    fn test_mul_with_mixed_signs() {
        let a = Support::new(-2.0, 3.0);
        let b = Support::new(-1.0, 4.0);
        assert_eq!(a.mul(&b), Support::new(-8.0, 12.0));
    }

    #[test]
    fn test_sub_is_conservative() {
        let a = Support::new(1.0, 2.0);
        assert_eq!(a.sub(&a), Support::new(-1.0, 1.0));
    }

    #[test]
    fn test_abs_straddling_zero() {
        assert_eq!(Support::new(-5.0, 2.0).abs(), Support::new(0.0, 5.0));
        assert_eq!(Support::new(-5.0, -2.0).abs(), Support::new(2.0, 5.0));
    }

    #[test]
    fn test_even_power_folds_at_zero() {
        assert_eq!(Support::new(-3.0, 2.0).powf(2.0), Support::new(0.0, 9.0));
        assert_eq!(Support::new(-3.0, 2.0).powf(3.0), Support::new(-27.0, 8.0));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_degenerate_operations_are_exact() {
        let a = Support::point(0.1);
        let b = Support::point(0.2);
        assert_eq!(a.add(&b).lower, 0.1 + 0.2);
        assert_eq!(a.mul(&b).upper, 0.1 * 0.2);
        assert!(a.div(&b).is_degenerate());
    }
}
