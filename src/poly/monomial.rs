//! Single terms `coef · x^degree`

use std::marker::PhantomData;
use std::ops::{Mul, MulAssign, Neg};

use serde::{Deserialize, Serialize};

use crate::math::{Conformant, Constant, LinearPow, Point, Power};

/// One term of a single-variable polynomial: a coefficient and a degree.
///
/// `P` is the exponentiation policy used by [`eval`](Monomial::eval); it is
/// carried in the type, not in the value. A degree of 0 makes the term a
/// constant. A coefficient that happens to equal zero is kept as-is — terms
/// never collapse on their own.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Monomial<T, P = LinearPow> {
    coef: T,
    degree: usize,
    pow: PhantomData<P>,
}

// Manual impls: the derived ones would demand the same capability of the
// phantom policy parameter, which carries no data.
impl<T: Clone, P> Clone for Monomial<T, P> {
    fn clone(&self) -> Self {
        Monomial::new(self.coef.clone(), self.degree)
    }
}

impl<T: Copy, P> Copy for Monomial<T, P> {}

impl<T: PartialEq, P> PartialEq for Monomial<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.coef == other.coef && self.degree == other.degree
    }
}

impl<T: Eq, P> Eq for Monomial<T, P> {}

impl<T, P> Monomial<T, P> {
    /// A term `coef · x^degree`.
    pub fn new(coef: T, degree: usize) -> Self {
        Monomial {
            coef,
            degree,
            pow: PhantomData,
        }
    }

    /// A constant term (degree 0).
    pub fn constant(coef: T) -> Self {
        Self::new(coef, 0)
    }

    /// The degree of the term.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Borrow the coefficient.
    pub fn coef(&self) -> &T {
        &self.coef
    }

    /// Mutably borrow the coefficient.
    pub fn coef_mut(&mut self) -> &mut T {
        &mut self.coef
    }

    /// Take the coefficient out of the term.
    pub fn into_coef(self) -> T {
        self.coef
    }
}

impl<T, P: Power> Monomial<T, P> {
    /// Evaluate the term at `point`: `coef · point^degree`.
    ///
    /// The point's type is arbitrary — a number, a matrix, a polynomial —
    /// and the result type is whatever multiplying the coefficient by the
    /// raised point produces.
    pub fn eval<U>(&self, point: &U) -> <T as Mul<U>>::Output
    where
        U: Point,
        T: Mul<U> + Clone,
    {
        self.coef.clone() * P::pow(point, self.degree)
    }
}

impl<T: MulAssign, P> MulAssign for Monomial<T, P> {
    /// Coefficients multiply, degrees add.
    fn mul_assign(&mut self, rhs: Self) {
        self.coef *= rhs.coef;
        self.degree += rhs.degree;
    }
}

impl<T: MulAssign, P> MulAssign<T> for Monomial<T, P> {
    /// Scales the coefficient only.
    fn mul_assign(&mut self, rhs: T) {
        self.coef *= rhs;
    }
}

impl<T: MulAssign, P> Mul for Monomial<T, P> {
    type Output = Monomial<T, P>;

    fn mul(mut self, rhs: Self) -> Self {
        self *= rhs;
        self
    }
}

impl<T: MulAssign, P> Mul<T> for Monomial<T, P> {
    type Output = Monomial<T, P>;

    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Neg<Output = T>, P> Neg for Monomial<T, P> {
    type Output = Monomial<T, P>;

    fn neg(self) -> Self {
        Monomial::new(-self.coef, self.degree)
    }
}

macro_rules! impl_left_scalar_mul {
    ($($s:ty),* $(,)?) => {$(
        impl<P> Mul<Monomial<$s, P>> for $s {
            type Output = Monomial<$s, P>;

            fn mul(self, rhs: Monomial<$s, P>) -> Monomial<$s, P> {
                Monomial::new(self * rhs.coef, rhs.degree)
            }
        }
    )*};
}

impl_left_scalar_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: Conformant, P> Conformant for Monomial<T, P> {
    type Descriptor = T::Descriptor;

    fn describe(&self) -> T::Descriptor {
        self.coef.describe()
    }

    /// A constant term holding the built coefficient constant.
    fn build(descriptor: &T::Descriptor, constant: Constant) -> Self {
        Self::constant(T::build(descriptor, constant))
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256PlusPlus;

    use super::*;
    use crate::Matrix;
    use crate::poly::Polynomial;

    #[test]
    fn constructors_and_basic_ops() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);

        let a = Monomial::<i64>::default();
        assert_eq!(*a.coef(), 0);
        assert_eq!(a.degree(), 0);
        let point: i64 = rng.gen_range(-1_000_000..1_000_000);
        assert_eq!(a.eval(&point), 0);

        let mut b = Monomial::<f64>::new(1.0, 2);
        *b.coef_mut() /= 2.0;
        let c = Monomial::<f64>::new(7.0, 1);
        b *= c;
        assert_eq!(*b.coef(), 3.5);
        assert_eq!(b.degree(), 3);

        b *= 2.0;
        let d = b * 5.0;
        assert_eq!(*d.coef(), 35.0);
        assert_eq!(d.degree(), 3);
    }

    #[test]
    fn substitution_at_scalars() {
        let a = Monomial::<i64>::new(2, 4); // 2x^4
        assert_eq!(a.eval(&3_i64), 162);

        let a = Monomial::<f64>::new(2.0, 4);
        assert_eq!(a.eval(&1.5), 10.125);
    }

    #[test]
    fn substitution_at_monomials() {
        let a = Monomial::<f64>::new(2.0, 4); // 2x^4
        let b = Monomial::<f64>::new(5.5, 2); // 5.5x^2
        assert_eq!(b.eval(&a), Monomial::new(22.0, 8));
        assert_eq!(a.eval(&b), Monomial::new(1830.125, 8));
    }

    #[test]
    fn substitution_at_matrices() {
        let a = Monomial::<i64>::new(2, 4);

        let identity = Matrix::<i64>::identity(3);
        assert_eq!(a.eval(&identity), 2 * Matrix::<i64>::identity(3));

        let matrix = Matrix::from([[2, 1, 5], [3, 3, 7], [8, 0, 4]]);
        let expected = Matrix::from([
            [8680, 1182, 8262],
            [14522, 2022, 13958],
            [11024, 1568, 10848],
        ]);
        assert_eq!(a.eval(&matrix), expected);
    }

    #[test]
    fn substitution_at_polynomials() {
        let b = Monomial::<f64>::new(5.5, 2); // 5.5x^2
        let poly: Polynomial<f64> = Polynomial::from([(10.0, 0), (5.0, 3), (2.0, 1)]); // 5x^3 + 2x + 10
        let expected = vec![
            Monomial::new(137.5, 6),
            Monomial::new(110.0, 4),
            Monomial::new(550.0, 3),
            Monomial::new(22.0, 2),
            Monomial::new(220.0, 1),
            Monomial::new(550.0, 0),
        ];
        assert_eq!(b.eval(&poly).monomials(), expected);
    }

    #[test]
    fn zero_coefficient_is_representable() {
        let z = Monomial::<i64>::new(0, 5);
        assert_eq!(*z.coef(), 0);
        assert_eq!(z.degree(), 5);
        assert_ne!(z, Monomial::new(0, 0));
    }
}
