//! Sparse single-variable polynomials keyed by degree

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::math::{Conformant, Constant, LinearPow, Point, Power, zero_like};
use crate::poly::monomial::Monomial;

/// A sparse single-variable polynomial: one stored term per distinct degree.
///
/// The internal map is keyed by degree and every stored monomial's degree
/// equals its key; merging on that key during addition is the only place the
/// invariant is enforced, and it is enough. Terms whose coefficient becomes
/// zero are **kept** until [`reduce`](Polynomial::reduce) is called —
/// arithmetic never cancels them implicitly. Equality compares the raw term
/// maps, so a polynomial holding an explicit zero term differs from one
/// without it until both are reduced. Callers relying on equality after
/// cancellation must reduce first; the representation deliberately preserves
/// which degrees have been touched.
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: serde::Deserialize<'de>"))]
pub struct Polynomial<T, P = LinearPow> {
    terms: BTreeMap<usize, Monomial<T, P>>,
}

// Manual impls, as for Monomial: no bounds on the phantom policy.
impl<T, P> Default for Polynomial<T, P> {
    fn default() -> Self {
        Polynomial {
            terms: BTreeMap::new(),
        }
    }
}

impl<T: Clone, P> Clone for Polynomial<T, P> {
    fn clone(&self) -> Self {
        Polynomial {
            terms: self.terms.clone(),
        }
    }
}

impl<T: PartialEq, P> PartialEq for Polynomial<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
    }
}

impl<T: Eq, P> Eq for Polynomial<T, P> {}

impl<T, P> Polynomial<T, P> {
    /// The empty polynomial (no stored terms).
    pub fn new() -> Self {
        Self::default()
    }

    /// A constant polynomial with an explicit degree-0 term.
    pub fn from_coef(coef: T) -> Self {
        let mut terms = BTreeMap::new();
        terms.insert(0, Monomial::constant(coef));
        Polynomial { terms }
    }

    /// Build from (coefficient, degree) pairs, merging duplicate degrees.
    pub fn from_terms<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, usize)>,
        T: AddAssign,
    {
        let mut poly = Self::new();
        for (coef, degree) in pairs {
            poly.add_term(coef, degree);
        }
        poly
    }

    /// Number of stored terms, zero-coefficient terms included.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no terms are stored.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The stored monomials in descending degree order — the canonical
    /// observable view of the polynomial's contents.
    pub fn monomials(&self) -> Vec<Monomial<T, P>>
    where
        T: Clone,
    {
        self.terms.values().rev().cloned().collect()
    }

    /// Drop every term whose coefficient equals its own conformant zero.
    ///
    /// This is the only cancellation point in the API; arithmetic keeps
    /// zero-coefficient terms observable until this is called.
    pub fn reduce(&mut self)
    where
        T: Conformant + PartialEq,
    {
        self.terms
            .retain(|_, monom| *monom.coef() != zero_like(monom.coef()));
    }

    // Merge point for every addition path; keeps degree keys unique.
    fn add_term(&mut self, coef: T, degree: usize)
    where
        T: AddAssign,
    {
        match self.terms.entry(degree) {
            Entry::Occupied(mut entry) => *entry.get_mut().coef_mut() += coef,
            Entry::Vacant(entry) => {
                entry.insert(Monomial::new(coef, degree));
            }
        }
    }

    fn add_monomial(&mut self, monom: Monomial<T, P>)
    where
        T: AddAssign,
    {
        match self.terms.entry(monom.degree()) {
            Entry::Occupied(mut entry) => *entry.get_mut().coef_mut() += monom.into_coef(),
            Entry::Vacant(entry) => {
                entry.insert(monom);
            }
        }
    }
}

impl<T: AddAssign, P, const N: usize> From<[(T, usize); N]> for Polynomial<T, P> {
    fn from(pairs: [(T, usize); N]) -> Self {
        Self::from_terms(pairs)
    }
}

impl<T, P: Power> Polynomial<T, P> {
    /// Evaluate at a `point` of arbitrary algebraic type.
    ///
    /// The accumulator is seeded with `zero_like(point)` so it already has
    /// the point's shape before any term lands — with a matrix point the
    /// first `+=` would otherwise have nothing conformant to add to. Numeric
    /// evaluation, matrix polynomials and composition with another
    /// polynomial all go through this one path.
    pub fn eval<U>(&self, point: &U) -> U
    where
        U: Point + AddAssign<<T as Mul<U>>::Output>,
        T: Mul<U> + Clone,
    {
        let mut acc = zero_like(point);
        for monom in self.terms.values() {
            acc += monom.eval(point);
        }
        acc
    }
}

/// The constant-zero polynomial, with its explicit degree-0 term.
pub fn zero_polynomial<T: Zero, P>() -> Polynomial<T, P> {
    Polynomial::from_coef(T::zero())
}

/// The constant-one polynomial.
pub fn one_polynomial<T: One, P>() -> Polynomial<T, P> {
    Polynomial::from_coef(T::one())
}

// --- Addition ---------------------------------------------------------------------

impl<T: AddAssign, P> AddAssign<T> for Polynomial<T, P> {
    /// Adds a constant term.
    fn add_assign(&mut self, rhs: T) {
        self.add_term(rhs, 0);
    }
}

impl<T: AddAssign, P> AddAssign<Monomial<T, P>> for Polynomial<T, P> {
    fn add_assign(&mut self, rhs: Monomial<T, P>) {
        self.add_monomial(rhs);
    }
}

impl<T: AddAssign, P> AddAssign for Polynomial<T, P> {
    fn add_assign(&mut self, rhs: Self) {
        for (_, monom) in rhs.terms {
            self.add_monomial(monom);
        }
    }
}

impl<T: AddAssign + Clone, P> AddAssign<&Polynomial<T, P>> for Polynomial<T, P> {
    fn add_assign(&mut self, rhs: &Polynomial<T, P>) {
        for monom in rhs.terms.values() {
            self.add_monomial(monom.clone());
        }
    }
}

impl<T: AddAssign, P> Add<T> for Polynomial<T, P> {
    type Output = Polynomial<T, P>;

    fn add(mut self, rhs: T) -> Self {
        self += rhs;
        self
    }
}

impl<T: AddAssign, P> Add<Monomial<T, P>> for Polynomial<T, P> {
    type Output = Polynomial<T, P>;

    fn add(mut self, rhs: Monomial<T, P>) -> Self {
        self += rhs;
        self
    }
}

impl<T: AddAssign, P> Add<Polynomial<T, P>> for Monomial<T, P> {
    type Output = Polynomial<T, P>;

    fn add(self, mut rhs: Polynomial<T, P>) -> Polynomial<T, P> {
        rhs += self;
        rhs
    }
}

impl<T: AddAssign, P> Add for Polynomial<T, P> {
    type Output = Polynomial<T, P>;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: AddAssign + Clone, P> Add for &Polynomial<T, P> {
    type Output = Polynomial<T, P>;

    fn add(self, rhs: Self) -> Polynomial<T, P> {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

// --- Negation and subtraction -----------------------------------------------------

impl<T: Neg<Output = T>, P> Neg for Polynomial<T, P> {
    type Output = Polynomial<T, P>;

    /// Every coefficient negated; degrees and term count unchanged.
    fn neg(self) -> Self {
        Polynomial {
            terms: self.terms.into_iter().map(|(d, m)| (d, -m)).collect(),
        }
    }
}

impl<T: Neg<Output = T> + AddAssign, P> SubAssign<T> for Polynomial<T, P> {
    /// Subtracts a constant term.
    fn sub_assign(&mut self, rhs: T) {
        self.add_term(-rhs, 0);
    }
}

impl<T: Neg<Output = T> + AddAssign, P> SubAssign for Polynomial<T, P> {
    /// Degree-keyed coefficient subtraction.
    fn sub_assign(&mut self, rhs: Self) {
        for (degree, monom) in rhs.terms {
            self.add_term(-monom.into_coef(), degree);
        }
    }
}

impl<T: Neg<Output = T> + AddAssign + Clone, P> SubAssign<&Polynomial<T, P>>
    for Polynomial<T, P>
{
    fn sub_assign(&mut self, rhs: &Polynomial<T, P>) {
        for monom in rhs.terms.values() {
            self.add_term(-monom.coef().clone(), monom.degree());
        }
    }
}

impl<T: Neg<Output = T> + AddAssign, P> Sub<T> for Polynomial<T, P> {
    type Output = Polynomial<T, P>;

    fn sub(mut self, rhs: T) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Neg<Output = T> + AddAssign, P> Sub for Polynomial<T, P> {
    type Output = Polynomial<T, P>;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Neg<Output = T> + AddAssign + Clone, P> Sub for &Polynomial<T, P> {
    type Output = Polynomial<T, P>;

    fn sub(self, rhs: Self) -> Polynomial<T, P> {
        let mut out = self.clone();
        out -= rhs;
        out
    }
}

// --- Multiplication ---------------------------------------------------------------

impl<T: MulAssign + Clone, P> MulAssign<T> for Polynomial<T, P> {
    /// Scales every coefficient.
    fn mul_assign(&mut self, rhs: T) {
        for monom in self.terms.values_mut() {
            *monom.coef_mut() *= rhs.clone();
        }
    }
}

impl<T: MulAssign + Clone, P> Mul<T> for Polynomial<T, P> {
    type Output = Polynomial<T, P>;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T, P> Mul for &Polynomial<T, P>
where
    T: Clone + Mul<Output = T> + AddAssign,
{
    type Output = Polynomial<T, P>;

    /// Convolution: every pair of terms contributes its coefficient product
    /// at the summed degree, merged through the usual degree-keyed path.
    fn mul(self, rhs: Self) -> Polynomial<T, P> {
        let mut out = Polynomial::new();
        for (d1, m1) in &self.terms {
            for (d2, m2) in &rhs.terms {
                out.add_term(m1.coef().clone() * m2.coef().clone(), d1 + d2);
            }
        }
        out
    }
}

impl<T, P> Mul for Polynomial<T, P>
where
    T: Clone + Mul<Output = T> + AddAssign,
{
    type Output = Polynomial<T, P>;

    fn mul(self, rhs: Self) -> Polynomial<T, P> {
        &self * &rhs
    }
}

impl<T, P> MulAssign for Polynomial<T, P>
where
    T: Clone + Mul<Output = T> + AddAssign,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = &*self * &rhs;
    }
}

macro_rules! impl_left_scalar_ops {
    ($($s:ty),* $(,)?) => {$(
        impl<P> Add<Polynomial<$s, P>> for $s {
            type Output = Polynomial<$s, P>;

            fn add(self, mut rhs: Polynomial<$s, P>) -> Polynomial<$s, P> {
                rhs += self;
                rhs
            }
        }

        impl<P> Mul<Polynomial<$s, P>> for $s {
            type Output = Polynomial<$s, P>;

            fn mul(self, rhs: Polynomial<$s, P>) -> Polynomial<$s, P> {
                let mut out = Polynomial::new();
                for (degree, monom) in rhs.terms {
                    out.add_term(self * monom.into_coef(), degree);
                }
                out
            }
        }

        impl<P> Mul<&Polynomial<$s, P>> for $s {
            type Output = Polynomial<$s, P>;

            fn mul(self, rhs: &Polynomial<$s, P>) -> Polynomial<$s, P> {
                self * rhs.clone()
            }
        }
    )*};
}

impl_left_scalar_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

// --- Identity protocol ------------------------------------------------------------

impl<T: Conformant, P> Conformant for Polynomial<T, P> {
    type Descriptor = T::Descriptor;

    /// A polynomial's shape is its coefficients' shape; any stored
    /// coefficient serves, since all are conformant with each other.
    fn describe(&self) -> T::Descriptor {
        self.terms
            .values()
            .next()
            .map_or_else(Default::default, |monom| monom.coef().describe())
    }

    /// A constant polynomial holding the built coefficient constant, with
    /// its explicit degree-0 term.
    fn build(descriptor: &T::Descriptor, constant: Constant) -> Self {
        Self::from_coef(T::build(descriptor, constant))
    }
}
