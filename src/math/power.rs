//! Pluggable integer exponentiation policies

use super::identity::one_like;
use super::point::Point;

/// Strategy for raising an algebraic value to a non-negative integer power.
///
/// `pow(x, 0)` must equal `one_like(&x)` for every implementation, and all
/// implementations must agree on every input (multiplication of the base
/// type is assumed associative). Policies differ only in how many
/// multiplications they spend.
pub trait Power {
    /// Raise `base` to the `exp`-th power.
    fn pow<U: Point>(base: &U, exp: usize) -> U;
}

/// Sequential exponentiation: `exp` multiplications into a running product.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinearPow;

impl Power for LinearPow {
    fn pow<U: Point>(base: &U, exp: usize) -> U {
        let mut acc = one_like(base);
        for _ in 0..exp {
            acc = acc * base.clone();
        }
        acc
    }
}

/// Square-and-multiply exponentiation: `O(log exp)` multiplications.
///
/// Worth choosing when multiplication of the element type is expensive
/// (matrices, long polynomials) or the exponent is large.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BinaryPow;

impl Power for BinaryPow {
    fn pow<U: Point>(base: &U, exp: usize) -> U {
        if exp == 0 {
            return one_like(base);
        }
        if exp % 2 == 1 {
            base.clone() * Self::pow(base, exp - 1)
        } else {
            let half = Self::pow(base, exp / 2);
            half.clone() * half
        }
    }
}
