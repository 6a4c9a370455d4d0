//! Generic single-variable algebra: matrices, monomials and polynomials
//! over arbitrary coefficient types.
//!
//! The pieces compose freely — a matrix of matrices, a polynomial with
//! matrix coefficients, a polynomial evaluated at another polynomial — and
//! the [`Conformant`] identity protocol keeps "zero" and "one" well-defined
//! for all of them by deriving shape from a sibling value at runtime.
//!
//! ```
//! use univar::{BinaryPow, Matrix, Polynomial};
//!
//! let p = Polynomial::<i64, BinaryPow>::from([(1, 2), (-3, 0)]); // x^2 - 3
//! assert_eq!(p.eval(&5_i64), 22);
//!
//! let m = Matrix::<i64>::from([[2, 0], [1, 1]]);
//! assert_eq!(p.eval(&m), m.clone() * m - 3 * Matrix::<i64>::identity(2));
//! ```

mod display;
mod error;
mod math;
mod matrix;
mod poly;

pub use crate::error::{Error, Result};
pub use crate::math::{
    BinaryPow, Conformant, Constant, LinearPow, Point, Power, one_like, zero_like,
};
pub use crate::matrix::{Matrix, MatrixDescriptor};
pub use crate::poly::{Monomial, Polynomial, one_polynomial, zero_polynomial};
pub use num_traits;
