//! Textual polynomial expressions
//!
//! Parsing builds a [`Polynomial`] purely through the engine's public
//! addition contract: each recognized term becomes a [`Monomial`] and is
//! merged in with `+=`, so duplicate degrees collapse exactly as they do in
//! arithmetic.

use std::ops::{AddAssign, Neg};
use std::str::FromStr;
use std::sync::LazyLock;

use num_traits::One;
use regex::Regex;

use crate::error::Error;
use crate::poly::monomial::Monomial;
use crate::poly::polynomial::Polynomial;

// One term: sign, coefficient digits, variable letter, caret exponent.
// Whitespace is stripped before matching, so the pattern never sees it.
static TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([+-]?)(\d*\.?\d*)([a-zA-Z])?(\^(\d+))?").expect("term pattern is valid")
});

impl<T, P> FromStr for Polynomial<T, P>
where
    T: FromStr + One + Neg<Output = T> + AddAssign,
{
    type Err = Error;

    /// Parse a single-variable polynomial expression such as
    /// `"x + 23x^3 - 2x + 37"`.
    ///
    /// A term with no coefficient digits and no variable letter is skipped;
    /// a bare variable has coefficient 1; a variable with no exponent has
    /// degree 1; a term without a variable has degree 0. Coefficient digits
    /// that `T` cannot parse are an [`Error::Parse`].
    fn from_str(input: &str) -> Result<Self, Error> {
        let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();

        let mut poly = Polynomial::new();
        for captures in TERM.captures_iter(&compact) {
            let sign = captures.get(1).map_or("", |m| m.as_str());
            let digits = captures.get(2).map_or("", |m| m.as_str());
            let variable = captures.get(3);
            let exponent = captures.get(5);

            if digits.is_empty() && variable.is_none() {
                continue;
            }

            let mut coef = if digits.is_empty() {
                T::one()
            } else {
                digits.parse::<T>().map_err(|_| Error::Parse {
                    token: captures[0].to_string(),
                })?
            };
            if sign == "-" {
                coef = -coef;
            }

            let degree = match (variable, exponent) {
                (Some(_), Some(exp)) => exp.as_str().parse::<usize>().map_err(|_| Error::Parse {
                    token: captures[0].to_string(),
                })?,
                (Some(_), None) => 1,
                (None, _) => 0,
            };

            poly += Monomial::new(coef, degree);
        }
        Ok(poly)
    }
}
