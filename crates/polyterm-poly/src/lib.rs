//! # polyterm-poly
//!
//! Sparse univariate polynomial arithmetic over descending term lists.
//!
//! This crate provides:
//! - `Term` and `TermList`, a polynomial stored highest degree first
//! - Merge-based addition with cancellation of zero terms
//! - Multiplication by repeated addition of partial products, plus a
//!   geobucket variant that merges all partial products once
//! - Point evaluation and `<coefficient> <degree>` text construction
//!
//! ## Ownership
//!
//! Operations never mutate their operands and never return storage that
//! is shared with an operand, so results compose freely.
//!
//! ```
//! use polyterm_poly::TermList;
//!
//! let a: TermList = "4 5\n-2 3\n2 1\n3 0".parse().unwrap();
//! let b: TermList = "1 3\n-3 0".parse().unwrap();
//!
//! assert_eq!(a.add(&b).to_string(), "4.0^5 + -1.0^3 + 2.0^1");
//! assert_eq!(a.evaluate(2.0), 119.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod coeff;
pub mod error;
pub mod parse;
pub mod term;
pub mod term_list;

#[cfg(test)]
mod proptests;

pub use coeff::Coefficient;
pub use error::ParseError;
pub use parse::{LineOrder, ReadOptions};
pub use term::Term;
pub use term_list::TermList;
