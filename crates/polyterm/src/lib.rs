//! # polyterm
//!
//! Sparse univariate polynomial arithmetic.
//!
//! A polynomial is a list of `(coefficient, degree)` terms kept in strictly
//! descending degree order with no zero coefficients. Addition merges two
//! lists, multiplication folds partial products through addition, and
//! neither ever touches or shares storage with its operands.
//!
//! ## Features
//!
//! - **Term lists**: descending, duplicate-free, zero-free by construction
//! - **Arithmetic**: add, subtract, negate, multiply, scale, power
//! - **Evaluation**: front-to-back accumulation at a point
//! - **Text input**: `<coefficient> <degree>` lines from strings or readers
//!
//! ## Quick Start
//!
//! ```rust
//! use polyterm::prelude::*;
//!
//! let a: TermList = "4 5\n-2 3\n2 1\n3 0".parse().unwrap();
//! let b: TermList = "1 3\n-3 0".parse().unwrap();
//!
//! let product = a.multiply(&b);
//! assert_eq!(product.degree(), Some(8));
//! assert_eq!(product.evaluate(2.0), a.evaluate(2.0) * b.evaluate(2.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polyterm_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polyterm_poly::{Coefficient, LineOrder, ParseError, ReadOptions, Term, TermList};
}
