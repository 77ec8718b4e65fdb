//! Coefficient trait.
//!
//! Term lists are generic over a floating-point coefficient type. The
//! trait is blanket-implemented, so `f32` and `f64` both qualify.

use std::fmt::Debug;
use std::str::FromStr;

use num_traits::Float;

/// A floating-point coefficient of a polynomial term.
///
/// # Laws
///
/// - Addition and multiplication follow IEEE 754 semantics
/// - A coefficient that compares equal to `zero()` marks an absent term
pub trait Coefficient: Float + FromStr + Debug + Send + Sync + 'static {
    /// Returns true if this coefficient makes its term vanish.
    ///
    /// `-0.0` counts as zero.
    #[inline]
    fn is_zero_coeff(&self) -> bool {
        *self == Self::zero()
    }

    /// Computes `self^degree` with `powf`.
    ///
    /// `powi` is avoided because its precision is platform-dependent.
    #[must_use]
    fn pow_degree(self, degree: u64) -> Self {
        match <Self as num_traits::NumCast>::from(degree) {
            Some(d) => self.powf(d),
            None => Self::nan(),
        }
    }
}

impl<T> Coefficient for T where T: Float + FromStr + Debug + Send + Sync + 'static {}
