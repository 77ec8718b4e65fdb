//! Single polynomial terms.

use std::cmp::Ordering;

use crate::coeff::Coefficient;

/// One `coeff * x^degree` term of a univariate polynomial.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Term<C: Coefficient = f64> {
    /// The coefficient.
    pub coeff: C,
    /// The exponent of `x`.
    pub degree: u64,
}

impl<C: Coefficient> Term<C> {
    /// Creates a new term.
    #[must_use]
    pub const fn new(coeff: C, degree: u64) -> Self {
        Self { coeff, degree }
    }

    /// Returns true if the coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero_coeff()
    }

    /// Multiplies two terms (multiplies coefficients, adds degrees).
    ///
    /// # Panics
    ///
    /// Panics if the degree sum overflows `u64`. Degrees read from text fit
    /// in `u32`, so products of parsed lists never reach this.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let degree = self
            .degree
            .checked_add(other.degree)
            .expect("term degree overflows u64");
        Self::new(self.coeff * other.coeff, degree)
    }

    /// Returns the term with its coefficient sign-flipped.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(-self.coeff, self.degree)
    }

    /// Evaluates `coeff * x^degree`.
    #[must_use]
    pub fn evaluate(&self, x: C) -> C {
        self.coeff * x.pow_degree(self.degree)
    }
}

impl<C: Coefficient> From<(C, u64)> for Term<C> {
    fn from((coeff, degree): (C, u64)) -> Self {
        Self::new(coeff, degree)
    }
}

impl<C: Coefficient> std::fmt::Display for Term<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}^{}", self.coeff, self.degree)
    }
}

/// Compares two terms by degree, highest first.
///
/// `Ordering::Less` means `a` sorts before `b` in a term list.
#[must_use]
pub fn cmp_descending<C: Coefficient>(a: &Term<C>, b: &Term<C>) -> Ordering {
    b.degree.cmp(&a.degree)
}
