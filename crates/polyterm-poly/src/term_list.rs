//! Sparse univariate polynomials as descending term lists.
//!
//! A [`TermList`] owns its terms outright. Every combining operation takes
//! its operands by shared reference and allocates a fresh result, so
//! results can be fed back into further additions and multiplications
//! without any aliasing between values.

use tracing::instrument;

use crate::algorithms::geobucket::geobucket_multiply;
use crate::algorithms::merge::{combine_like_terms, merge_descending, strip_zeros};
use crate::coeff::Coefficient;
use crate::term::{cmp_descending, Term};

/// A sparse univariate polynomial.
///
/// Terms are stored highest degree first. Every list produced by this
/// crate satisfies:
/// - degrees strictly decrease from front to back
/// - no term has a zero coefficient
/// - the empty list is the zero polynomial
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TermList<C: Coefficient = f64> {
    /// Terms in strictly descending degree order.
    terms: Vec<Term<C>>,
}

impl<C: Coefficient> TermList<C> {
    /// Creates a polynomial from arbitrary terms.
    ///
    /// Terms are sorted, like terms are combined and zeros are dropped.
    #[must_use]
    pub fn from_terms(terms: Vec<Term<C>>) -> Self {
        let mut poly = Self { terms };
        poly.normalize_in_place();
        poly
    }

    /// Wraps terms that are already descending and zero-free.
    pub(crate) fn from_sorted_unchecked(terms: Vec<Term<C>>) -> Self {
        Self { terms }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(C::one())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: C) -> Self {
        Self::monomial(c, 0)
    }

    /// Creates the monomial `c * x^degree`.
    #[must_use]
    pub fn monomial(c: C, degree: u64) -> Self {
        if c.is_zero_coeff() {
            Self::zero()
        } else {
            Self {
                terms: vec![Term::new(c, degree)],
            }
        }
    }

    /// Returns a term-for-term duplicate backed by fresh storage.
    #[must_use]
    pub fn copy(&self) -> Self {
        Self {
            terms: self.terms.iter().copied().collect(),
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the terms, highest degree first.
    #[must_use]
    pub fn terms(&self) -> &[Term<C>] {
        &self.terms
    }

    /// Iterates over the terms, highest degree first.
    pub fn iter(&self) -> std::slice::Iter<'_, Term<C>> {
        self.terms.iter()
    }

    /// Consumes the list, returning its terms.
    #[must_use]
    pub fn into_terms(self) -> Vec<Term<C>> {
        self.terms
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<u64> {
        self.terms.first().map(|t| t.degree)
    }

    /// Returns the leading term.
    #[must_use]
    pub fn leading_term(&self) -> Option<&Term<C>> {
        self.terms.first()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<C> {
        self.terms.first().map(|t| t.coeff)
    }

    /// Returns the coefficient of `x^degree` (zero if absent).
    #[must_use]
    pub fn coeff(&self, degree: u64) -> C {
        self.terms
            .binary_search_by(|t| degree.cmp(&t.degree))
            .map_or_else(|_| C::zero(), |i| self.terms[i].coeff)
    }

    /// Returns true if the list is strictly descending and zero-free.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.terms.iter().all(|t| !t.is_zero())
            && self.terms.windows(2).all(|w| w[0].degree > w[1].degree)
    }

    /// Returns a fresh list with the term-list invariants restored.
    ///
    /// Terms are stably sorted by descending degree, equal degrees are
    /// summed and zero coefficients dropped.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let mut poly = self.copy();
        poly.normalize_in_place();
        poly
    }

    fn normalize_in_place(&mut self) {
        self.terms.sort_by(cmp_descending);
        combine_like_terms(&mut self.terms);
        strip_zeros(&mut self.terms);
    }

    /// Adds two polynomials.
    ///
    /// Neither operand is touched; the result never shares storage with
    /// either of them.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        if other.is_zero() {
            return self.copy();
        }
        if self.is_zero() {
            return other.copy();
        }

        let mut terms = merge_descending(&self.terms, &other.terms);
        strip_zeros(&mut terms);
        Self { terms }
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(Term::neg).collect(),
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies every term by `t`.
    ///
    /// This is the partial product used by [`TermList::multiply`]; it stays
    /// descending because the degree offset is constant.
    #[must_use]
    pub fn mul_term(&self, t: &Term<C>) -> Self {
        let mut terms: Vec<_> = self.terms.iter().map(|own| t.mul(own)).collect();
        // Products of tiny coefficients can underflow to zero
        strip_zeros(&mut terms);
        Self { terms }
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: C) -> Self {
        self.mul_term(&Term::new(c, 0))
    }

    /// Multiplies two polynomials by repeated addition.
    ///
    /// Each term of `self` forms a partial product with all of `other`,
    /// which is then folded into the running total with [`TermList::add`].
    ///
    /// # Panics
    ///
    /// Panics if a product degree overflows `u64`. Lists read from text
    /// have `u32` degrees, so their products are always exact.
    #[instrument(level = "trace", skip_all, fields(lhs = self.len(), rhs = other.len()))]
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        self.terms
            .iter()
            .fold(Self::zero(), |acc, t| acc.add(&other.mul_term(t)))
    }

    /// Multiplies two polynomials by accumulating every partial product
    /// into a geobucket and merging once.
    ///
    /// Produces the same terms as [`TermList::multiply`] up to floating
    /// point rounding in the order of coefficient sums.
    #[must_use]
    pub fn multiply_geobucket(&self, other: &Self) -> Self {
        Self {
            terms: geobucket_multiply(&self.terms, &other.terms),
        }
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }
        if n == 1 {
            return self.copy();
        }

        let mut result = Self::one();
        let mut base = self.copy();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.multiply(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.multiply(&base);
            }
        }

        result
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// Terms are accumulated front to back, highest degree first, so the
    /// rounding of the sum is reproducible.
    #[must_use]
    pub fn evaluate(&self, x: C) -> C {
        self.terms
            .iter()
            .fold(C::zero(), |total, t| total + t.evaluate(x))
    }
}

impl<'a, C: Coefficient> IntoIterator for &'a TermList<C> {
    type Item = &'a Term<C>;
    type IntoIter = std::slice::Iter<'a, Term<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl<C: Coefficient> FromIterator<Term<C>> for TermList<C> {
    fn from_iter<T: IntoIterator<Item = Term<C>>>(iter: T) -> Self {
        Self::from_terms(iter.into_iter().collect())
    }
}

impl<C: Coefficient> std::fmt::Display for TermList<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let terms: Vec<_> = self.terms.iter().map(ToString::to_string).collect();
        write!(f, "{}", terms.join(" + "))
    }
}
