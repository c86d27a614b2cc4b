//! Numeric weight abstraction for the absolute center computation.
//!
//! Integral weights are compared exactly. Floating weights are compared with a
//! relative tolerance, since halving a sum of two doubled weights can round.

use std::fmt::{Debug, Display};
use std::ops::{Add, Sub};

/// Edge weight / distance type.
///
/// Implemented for `i32`, `i64`, `f32` and `f64`.
pub trait Weight:
    Copy + PartialOrd + Debug + Display + Add<Output = Self> + Sub<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;

    /// Sentinel used when the caller does not supply one.
    fn default_infinity() -> Self;

    /// `self + rhs`, or `None` on overflow / non-finite result.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Half of `self`. Exact for integers whenever `self` is even.
    fn halve(self) -> Self;

    /// True if the value is a usable number (not NaN, not infinite).
    fn is_finite(self) -> bool;

    /// Tolerance used when the caller does not supply one: a few thousand
    /// ulps of the type's precision, 0 for integers.
    fn default_tolerance() -> f64;

    /// Equality under `tolerance`, relative to `max(|self|, |other|)`
    /// (floats only).
    fn approx_eq(self, other: Self, tolerance: f64) -> bool;

    /// Lossy conversion used at the tensor boundary.
    fn to_f64(self) -> f64;

    /// `self + self`, or `None` on overflow.
    fn doubled(self) -> Option<Self> {
        self.checked_add(self)
    }
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0;

                fn default_infinity() -> Self {
                    <$t>::MAX / 4
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                fn halve(self) -> Self {
                    self / 2
                }

                fn is_finite(self) -> bool {
                    true
                }

                fn default_tolerance() -> f64 {
                    0.0
                }

                fn approx_eq(self, other: Self, _tolerance: f64) -> bool {
                    self == other
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty => $tol:expr),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0.0;

                fn default_infinity() -> Self {
                    <$t>::INFINITY
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    let sum = self + rhs;
                    if sum.is_finite() { Some(sum) } else { None }
                }

                fn halve(self) -> Self {
                    self / 2.0
                }

                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }

                fn default_tolerance() -> f64 {
                    $tol
                }

                fn approx_eq(self, other: Self, tolerance: f64) -> bool {
                    if self == other {
                        return true;
                    }
                    let (a, b) = (self as f64, other as f64);
                    let scale = a.abs().max(b.abs());
                    (a - b).abs() <= tolerance * scale
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_integer_weight!(i32, i64);
impl_float_weight!(f32 => 1e-5, f64 => 1e-12);
