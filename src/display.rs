//! Human-facing rendering for matrices, monomials and polynomials

use std::fmt::{self, Display, Formatter};
use std::ops::Neg;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::math::{Conformant, zero_like};
use crate::matrix::Matrix;
use crate::poly::{Monomial, Polynomial};

impl<T: Display, P> Display for Monomial<T, P> {
    /// `<coef>x^<degree>`, with the degree marker omitted for constants.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coef())?;
        if self.degree() != 0 {
            write!(f, "x^{}", self.degree())?;
        }
        Ok(())
    }
}

impl<T, P> Display for Polynomial<T, P>
where
    T: Display + Clone + Neg<Output = T> + PartialOrd + Conformant,
{
    /// Terms in descending degree order, joined with ` + ` / ` - `, each
    /// coefficient printed by absolute value with its sign extracted into
    /// the separator.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, monom) in self.monomials().into_iter().enumerate() {
            let negative = *monom.coef() < zero_like(monom.coef());
            match (index, negative) {
                (0, false) => {}
                (0, true) => write!(f, "-")?,
                (_, false) => write!(f, " + ")?,
                (_, true) => write!(f, " - ")?,
            }
            let coef = if negative {
                -monom.coef().clone()
            } else {
                monom.coef().clone()
            };
            write!(f, "{}", Monomial::<T, P>::new(coef, monom.degree()))?;
        }
        Ok(())
    }
}

impl<T: Display> Display for Matrix<T> {
    /// One line per row, cells separated by single spaces.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

impl<T: Display> Matrix<T> {
    /// Render the matrix as a bordered table, one cell per table cell.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);
        for row in &self.data {
            table.add_row(
                row.iter()
                    .map(|cell| Cell::new(cell).set_alignment(CellAlignment::Right))
                    .collect::<Vec<_>>(),
            );
        }
        table
    }
}
