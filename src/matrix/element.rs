use num_traits::{One, Zero};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Maximum per-element difference treated as numerically equal.
pub const EQUALITY_TOLERANCE: f64 = 1e-11;

/// Comparison semantics of a single matrix element. Floating-point types
/// compare within [`EQUALITY_TOLERANCE`], exact types compare with `==`.
pub trait Tolerance {
    fn almost_eq(&self, rhs: &Self) -> bool;
    fn almost_zero(&self) -> bool;
}

macro_rules! exact_tolerance {
    ($($t:ty)*) => {$(
        impl Tolerance for $t {
            fn almost_eq(&self, rhs: &Self) -> bool {
                self == rhs
            }
            fn almost_zero(&self) -> bool {
                *self == 0
            }
        }
    )*};
}

exact_tolerance!(i8 i16 i32 i64 i128 isize);

impl Tolerance for f64 {
    fn almost_eq(&self, rhs: &Self) -> bool {
        (self - rhs).abs() <= EQUALITY_TOLERANCE
    }
    fn almost_zero(&self) -> bool {
        self.abs() <= EQUALITY_TOLERANCE
    }
}

impl Tolerance for f32 {
    fn almost_eq(&self, rhs: &Self) -> bool {
        (self - rhs).abs() <= EQUALITY_TOLERANCE as f32
    }
    fn almost_zero(&self) -> bool {
        self.abs() <= EQUALITY_TOLERANCE as f32
    }
}

pub trait Element:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::fmt::Debug
    + Tolerance
{
}

impl<T> Element for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Neg<Output = T>
        + std::iter::Sum<T>
        + std::fmt::Display
        + std::fmt::Debug
        + Tolerance
{
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_tolerance() {
        assert!(1.0f64.almost_eq(&(1.0 + 1e-12)));
        assert!(1.0f64.almost_eq(&(1.0 - 1e-12)));
        assert!(!1.0f64.almost_eq(&(1.0 + 1e-9)));

        assert!(0.0f64.almost_zero());
        assert!(1e-13f64.almost_zero());
        assert!((-1e-13f64).almost_zero());
        assert!(!1e-9f64.almost_zero());
    }

    #[test]
    fn test_integer_tolerance() {
        assert!(7i64.almost_eq(&7));
        assert!(!7i64.almost_eq(&8));
        assert!(0i64.almost_zero());
        assert!(!1i64.almost_zero());
    }
}
