//! Geobucket-based sparse polynomial multiplication.
//!
//! Geobuckets accumulate the terms of a product into buckets of
//! geometrically increasing size, so each term is merged O(log n) times
//! instead of once per partial product.
//!
//! Reference: Yan, "The Geobucket Data Structure for Polynomials" (1998)

use tracing::instrument;

use crate::algorithms::merge::{merge_descending, strip_zeros};
use crate::coeff::Coefficient;
use crate::term::Term;

/// A geobucket for accumulating univariate terms.
///
/// Every bucket holds a descending, duplicate-free run of terms.
#[derive(Clone, Debug)]
pub struct Geobucket<C: Coefficient> {
    /// Bucket i holds at most 2^(i+1) terms.
    buckets: Vec<Vec<Term<C>>>,
}

impl<C: Coefficient> Default for Geobucket<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Coefficient> Geobucket<C> {
    /// Creates a new empty geobucket.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buckets: Vec::new(),
        }
    }

    /// Returns the capacity of bucket i.
    #[inline]
    fn bucket_capacity(i: usize) -> usize {
        1 << (i + 1) // 2, 4, 8, 16, ...
    }

    /// Returns true if nothing has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Adds a single term to the geobucket.
    pub fn add_term(&mut self, term: Term<C>) {
        if term.is_zero() {
            return;
        }
        self.insert_run(vec![term], 0);
    }

    /// Adds a descending, duplicate-free run of terms.
    pub fn add_run(&mut self, terms: &[Term<C>]) {
        if terms.is_empty() {
            return;
        }

        let mut start = 0;
        while Self::bucket_capacity(start) < terms.len() {
            start += 1;
        }
        self.insert_run(terms.to_vec(), start);
    }

    /// Carry-propagates `run` upward starting at bucket `i`.
    fn insert_run(&mut self, mut run: Vec<Term<C>>, mut i: usize) {
        loop {
            while self.buckets.len() <= i {
                self.buckets.push(Vec::new());
            }

            if self.buckets[i].is_empty() {
                self.buckets[i] = run;
                return;
            }

            let existing = std::mem::take(&mut self.buckets[i]);
            run = merge_descending(&existing, &run);
            strip_zeros(&mut run);

            if run.len() <= Self::bucket_capacity(i) {
                self.buckets[i] = run;
                return;
            }

            // Overflow - carry to next bucket
            i += 1;
        }
    }

    /// Merges all buckets into one descending, zero-free term vector.
    #[must_use]
    pub fn extract(self) -> Vec<Term<C>> {
        let mut result = Vec::new();
        for bucket in &self.buckets {
            if !bucket.is_empty() {
                result = merge_descending(&result, bucket);
                strip_zeros(&mut result);
            }
        }
        result
    }
}

/// Multiplies two descending term slices using a geobucket.
///
/// Each partial product of the smaller operand is added as a sorted run,
/// and the runs are merged once at the end.
#[instrument(level = "trace", skip_all, fields(lhs = a.len(), rhs = b.len()))]
#[must_use]
pub fn geobucket_multiply<C: Coefficient>(a: &[Term<C>], b: &[Term<C>]) -> Vec<Term<C>> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let (smaller, larger) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut bucket = Geobucket::new();
    let mut partial = Vec::with_capacity(larger.len());
    for t1 in smaller {
        partial.clear();
        partial.extend(larger.iter().map(|t2| t1.mul(t2)));
        strip_zeros(&mut partial);
        bucket.add_run(&partial);
    }

    bucket.extract()
}
