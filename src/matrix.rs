//! Dense matrices over a generic element type
//!
//! Storage is a row-major list of rows with value semantics: clones are
//! independent, there is no aliasing and no interior mutability. Element
//! access and the element-wise compound operators are *checked* — mismatched
//! shapes and out-of-range indices panic with a shape report rather than
//! proceeding silently. Only the inner-dimension check of the matrix product
//! is a recoverable [`Error`](crate::Error); see [`Matrix::try_mul`].

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::math::{Conformant, Constant};

/// A rows × cols grid of `T`.
///
/// `T` may itself be composite (`Matrix<Matrix<i64>>`, polynomials over
/// matrices); everything here is generic over the element's arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix<T> {
    pub(crate) data: Vec<Vec<T>>,
}

/// Shape parameters of a [`Matrix`], as published through [`Conformant`].
///
/// The element descriptor nests, so matrices of matrices (or of any other
/// conformant composite) describe themselves without special cases.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatrixDescriptor<D> {
    /// Row count
    pub rows: usize,
    /// Column count
    pub cols: usize,
    /// Descriptor of the element type, taken from any cell
    pub element: D,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Matrix { data: Vec::new() }
    }
}

impl<T> Matrix<T> {
    /// A rows × cols matrix filled with `T::default()`.
    pub fn new(rows: usize, cols: usize) -> Self
    where
        T: Default + Clone,
    {
        Matrix {
            data: vec![vec![T::default(); cols]; rows],
        }
    }

    /// A dim × dim matrix filled with `T::default()`.
    pub fn square(dim: usize) -> Self
    where
        T: Default + Clone,
    {
        Self::new(dim, dim)
    }

    /// Build from a list of rows.
    ///
    /// Rows must all have the same length; this is the caller's contract and
    /// is only checked in debug builds.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        debug_assert!(
            rows.windows(2).all(|w| w[0].len() == w[1].len()),
            "matrix rows have unequal lengths"
        );
        Matrix { data: rows }
    }

    /// Number of rows; 0 for the empty matrix.
    pub fn rows(&self) -> usize {
        self.data.len()
    }

    /// Number of columns; 0 for the empty matrix.
    pub fn columns(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.columns())
    }

    /// Borrow the cell at (row, col), `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.data.get(row).and_then(|r| r.get(col))
    }

    /// Mutably borrow the cell at (row, col), `None` when out of range.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.data.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// The transposed matrix: cell (i, j) is the source's (j, i).
    pub fn transpose(&self) -> Matrix<T>
    where
        T: Clone,
    {
        let data = (0..self.columns())
            .map(|j| self.data.iter().map(|row| row[j].clone()).collect())
            .collect();
        Matrix { data }
    }

    /// The n × n identity matrix: `one_like` on the diagonal, `zero_like`
    /// elsewhere, both derived through the identity protocol from the
    /// element type's default descriptor.
    pub fn identity(n: usize) -> Self
    where
        T: Conformant + Clone,
    {
        Self::build(
            &MatrixDescriptor {
                rows: n,
                cols: n,
                element: Default::default(),
            },
            Constant::One,
        )
    }

    /// Matrix product, failing on an inner-dimension mismatch.
    ///
    /// The right operand is transposed up front so the O(n³) accumulation
    /// walks both operands row-major; one O(n²) transpose buys contiguous
    /// access in the hot loop. Semantics are exactly the naive triple loop.
    pub fn try_mul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>>
    where
        T: Clone + Default + AddAssign + Mul<Output = T>,
    {
        if self.columns() != rhs.rows() {
            return Err(Error::dimension_mismatch(self.shape(), rhs.shape()));
        }
        let rhs_t = rhs.transpose();
        let data = self
            .data
            .iter()
            .map(|row| {
                rhs_t
                    .data
                    .iter()
                    .map(|rhs_row| dot(row, rhs_row))
                    .collect()
            })
            .collect();
        Ok(Matrix { data })
    }

    /// Row-parallel [`try_mul`](Self::try_mul). Same result, same error;
    /// only the wall clock differs.
    #[cfg(feature = "rayon")]
    pub fn par_mul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>>
    where
        T: Clone + Default + AddAssign + Mul<Output = T> + Send + Sync,
    {
        use rayon::prelude::*;

        if self.columns() != rhs.rows() {
            return Err(Error::dimension_mismatch(self.shape(), rhs.shape()));
        }
        let rhs_t = rhs.transpose();
        let data = self
            .data
            .par_iter()
            .map(|row| {
                rhs_t
                    .data
                    .iter()
                    .map(|rhs_row| dot(row, rhs_row))
                    .collect()
            })
            .collect();
        Ok(Matrix { data })
    }
}

// Seeded from the first product so composite elements accumulate at their
// own shape; `T::default()` only ever materializes for a degenerate empty
// inner dimension.
fn dot<T>(lhs: &[T], rhs: &[T]) -> T
where
    T: Clone + Default + AddAssign + Mul<Output = T>,
{
    let mut products = lhs.iter().zip(rhs).map(|(a, b)| a.clone() * b.clone());
    match products.next() {
        None => T::default(),
        Some(first) => products.fold(first, |mut acc, product| {
            acc += product;
            acc
        }),
    }
}

impl<T> From<Vec<Vec<T>>> for Matrix<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Self::from_rows(rows)
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T> {
    fn from(rows: [[T; C]; R]) -> Self {
        Matrix {
            data: rows.into_iter().map(|row| row.into_iter().collect()).collect(),
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row][col]
    }
}

// --- Element-wise arithmetic ------------------------------------------------------

impl<T: AddAssign> AddAssign for Matrix<T> {
    /// Shapes must match; panics otherwise.
    fn add_assign(&mut self, rhs: Self) {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "matrix shapes differ in element-wise `+=`"
        );
        for (row, rhs_row) in self.data.iter_mut().zip(rhs.data) {
            for (cell, rhs_cell) in row.iter_mut().zip(rhs_row) {
                *cell += rhs_cell;
            }
        }
    }
}

impl<T: AddAssign + Clone> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        *self += rhs.clone();
    }
}

impl<T: SubAssign> SubAssign for Matrix<T> {
    /// Shapes must match; panics otherwise.
    fn sub_assign(&mut self, rhs: Self) {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "matrix shapes differ in element-wise `-=`"
        );
        for (row, rhs_row) in self.data.iter_mut().zip(rhs.data) {
            for (cell, rhs_cell) in row.iter_mut().zip(rhs_row) {
                *cell -= rhs_cell;
            }
        }
    }
}

impl<T: SubAssign + Clone> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        *self -= rhs.clone();
    }
}

impl<T: AddAssign> Add for Matrix<T> {
    type Output = Matrix<T>;

    fn add(mut self, rhs: Self) -> Matrix<T> {
        self += rhs;
        self
    }
}

impl<T: AddAssign + Clone> Add for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: Self) -> Matrix<T> {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

impl<T: SubAssign> Sub for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(mut self, rhs: Self) -> Matrix<T> {
        self -= rhs;
        self
    }
}

impl<T: SubAssign + Clone> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: Self) -> Matrix<T> {
        let mut out = self.clone();
        out -= rhs;
        out
    }
}

impl<T: Neg<Output = T>> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        Matrix {
            data: self
                .data
                .into_iter()
                .map(|row| row.into_iter().map(Neg::neg).collect())
                .collect(),
        }
    }
}

// --- Scaling and the matrix product -----------------------------------------------

impl<T: MulAssign + Clone> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        for row in &mut self.data {
            for cell in row {
                *cell *= rhs.clone();
            }
        }
    }
}

impl<T: MulAssign + Clone> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(mut self, rhs: T) -> Matrix<T> {
        self *= rhs;
        self
    }
}

impl<T> MulAssign for Matrix<T>
where
    T: Clone + Default + AddAssign + Mul<Output = T>,
{
    /// Replaces the contents with the product; panics on a dimension
    /// mismatch (use [`Matrix::try_mul`] for the recoverable path).
    fn mul_assign(&mut self, rhs: Self) {
        let lhs = std::mem::take(self);
        *self = lhs * rhs;
    }
}

impl<T> Mul for Matrix<T>
where
    T: Clone + Default + AddAssign + Mul<Output = T>,
{
    type Output = Matrix<T>;

    /// Panics on a dimension mismatch; [`Matrix::try_mul`] is the
    /// recoverable form.
    fn mul(self, rhs: Self) -> Matrix<T> {
        match self.try_mul(&rhs) {
            Ok(product) => product,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> Mul for &Matrix<T>
where
    T: Clone + Default + AddAssign + Mul<Output = T>,
{
    type Output = Matrix<T>;

    /// Panics on a dimension mismatch; [`Matrix::try_mul`] is the
    /// recoverable form.
    fn mul(self, rhs: Self) -> Matrix<T> {
        match self.try_mul(rhs) {
            Ok(product) => product,
            Err(e) => panic!("{e}"),
        }
    }
}

macro_rules! impl_left_scalar_mul {
    ($($s:ty),* $(,)?) => {$(
        impl Mul<Matrix<$s>> for $s {
            type Output = Matrix<$s>;

            fn mul(self, rhs: Matrix<$s>) -> Matrix<$s> {
                Matrix {
                    data: rhs
                        .data
                        .into_iter()
                        .map(|row| row.into_iter().map(|cell| self * cell).collect())
                        .collect(),
                }
            }
        }

        impl Mul<&Matrix<$s>> for $s {
            type Output = Matrix<$s>;

            fn mul(self, rhs: &Matrix<$s>) -> Matrix<$s> {
                self * rhs.clone()
            }
        }
    )*};
}

impl_left_scalar_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

// --- Identity protocol ------------------------------------------------------------

impl<T: Conformant + Clone> Conformant for Matrix<T> {
    type Descriptor = MatrixDescriptor<T::Descriptor>;

    fn describe(&self) -> Self::Descriptor {
        MatrixDescriptor {
            rows: self.rows(),
            cols: self.columns(),
            element: self
                .data
                .first()
                .and_then(|row| row.first())
                .map_or_else(Default::default, Conformant::describe),
        }
    }

    /// `Constant::One` at a square shape builds the identity matrix, not an
    /// all-ones fill; every other request is a conformant fill of the built
    /// constant. The asymmetry is deliberate: "one" at a square shape means
    /// the ring's multiplicative identity.
    fn build(descriptor: &Self::Descriptor, constant: Constant) -> Self {
        if descriptor.rows == descriptor.cols && constant == Constant::One {
            let zero = T::build(&descriptor.element, Constant::Zero);
            let mut data = vec![vec![zero; descriptor.cols]; descriptor.rows];
            for (i, row) in data.iter_mut().enumerate() {
                row[i] = T::build(&descriptor.element, Constant::One);
            }
            Matrix { data }
        } else {
            let fill = T::build(&descriptor.element, constant);
            Matrix {
                data: vec![vec![fill; descriptor.cols]; descriptor.rows],
            }
        }
    }
}
