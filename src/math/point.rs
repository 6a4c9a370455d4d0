//! The algebraic bound shared by substitution and exponentiation
//!
//! Raising a value to a power and evaluating a polynomial at it both need
//! the same three things: the value must multiply with itself, copy, and
//! produce its own conformant identities. Scalars, matrices, monomials and
//! polynomials all qualify, which is what lets one substitution code path
//! serve numeric evaluation, matrix polynomials and composition alike.

use std::ops::Mul;

use super::identity::Conformant;

/// Types usable as substitution points and exponentiation bases.
///
/// Blanket-implemented; implement [`Conformant`] plus a closed `Mul` and the
/// type is a `Point` automatically.
pub trait Point: Conformant + Clone + Mul<Output = Self> {}

impl<T> Point for T where T: Conformant + Clone + Mul<Output = T> {}
