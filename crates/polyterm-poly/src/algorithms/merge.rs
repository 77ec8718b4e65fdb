//! Merging of descending term sequences.
//!
//! This is the merge step of mergesort with one extra rule: terms of equal
//! degree collapse into a single term carrying the summed coefficient.

use std::cmp::Ordering;

use crate::coeff::Coefficient;
use crate::term::Term;

/// Merges two descending term slices into a new vector.
///
/// Equal-degree terms are summed. Sums that cancel to zero are kept here;
/// callers strip them with [`strip_zeros`].
#[must_use]
pub fn merge_descending<C: Coefficient>(a: &[Term<C>], b: &[Term<C>]) -> Vec<Term<C>> {
    let mut result = Vec::with_capacity(a.len() + b.len());
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        match a[i].degree.cmp(&b[j].degree) {
            Ordering::Greater => {
                result.push(a[i]);
                i += 1;
            }
            Ordering::Less => {
                result.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                result.push(Term::new(a[i].coeff + b[j].coeff, a[i].degree));
                i += 1;
                j += 1;
            }
        }
    }

    // At most one side has terms left
    result.extend_from_slice(&a[i..]);
    result.extend_from_slice(&b[j..]);

    result
}

/// Removes every zero-coefficient term, preserving order.
pub fn strip_zeros<C: Coefficient>(terms: &mut Vec<Term<C>>) {
    terms.retain(|t| !t.is_zero());
}

/// Collapses adjacent equal-degree terms of a descending vector in place.
///
/// Zero sums are left for [`strip_zeros`].
pub fn combine_like_terms<C: Coefficient>(terms: &mut Vec<Term<C>>) {
    terms.dedup_by(|next, kept| {
        if next.degree == kept.degree {
            kept.coeff = kept.coeff + next.coeff;
            true
        } else {
            false
        }
    });
}
