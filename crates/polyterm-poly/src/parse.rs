//! Construction of term lists from `<coefficient> <degree>` text.
//!
//! The input format is one term per line:
//!
//! ```text
//!  4 5
//! -2 3
//!  2 1
//!  3 0
//! ```
//!
//! which represents `4x^5 - 2x^3 + 2x + 3`. Lines are expected to already
//! be sorted by degree; the reader does not re-sort them.

use std::io::BufRead;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::coeff::Coefficient;
use crate::error::ParseError;
use crate::term::Term;
use crate::term_list::TermList;

/// The degree order in which input lines are supplied.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum LineOrder {
    /// Highest degree first. Terms keep their feed order.
    #[default]
    Descending,
    /// Lowest degree first. Each term is prepended to the list built so
    /// far, which turns the input into descending order.
    Ascending,
}

/// Options controlling how text is turned into a term list.
#[derive(Clone, Debug)]
pub struct ReadOptions {
    /// Degree order of the input lines.
    pub order: LineOrder,
    /// Skip lines that are empty after trimming.
    pub skip_blank_lines: bool,
    /// Skip lines starting with this character.
    pub comment_prefix: Option<char>,
    /// Reject input whose degrees are not strictly monotone in `order`.
    pub validate_order: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            order: LineOrder::Descending,
            skip_blank_lines: true,
            comment_prefix: Some('#'),
            validate_order: false,
        }
    }
}

impl ReadOptions {
    /// Options that reject out-of-order or duplicate degrees.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            validate_order: true,
            ..Self::default()
        }
    }

    /// Sets the input line order.
    #[must_use]
    pub fn with_order(mut self, order: LineOrder) -> Self {
        self.order = order;
        self
    }
}

/// Parses a single `<coefficient> <degree>` line.
///
/// Degrees in text are limited to `u32` so that a product of any two
/// parsed lists has an exact `u64` degree. Tokens after the degree are
/// ignored.
pub fn parse_term<C: Coefficient>(text: &str, line: usize) -> Result<Term<C>, ParseError> {
    let mut tokens = text.split_whitespace();

    let coeff_token = tokens.next().ok_or(ParseError::MissingField {
        line,
        field: "coefficient",
    })?;
    let coeff = coeff_token
        .parse::<C>()
        .map_err(|_| ParseError::InvalidCoefficient {
            line,
            token: coeff_token.to_string(),
        })?;

    let degree_token = tokens.next().ok_or(ParseError::MissingField {
        line,
        field: "degree",
    })?;
    let degree = degree_token
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidDegree {
            line,
            token: degree_token.to_string(),
        })?;

    Ok(Term::new(coeff, u64::from(degree)))
}

/// Accumulates parsed lines into a term list.
struct TermListBuilder<'a, C: Coefficient> {
    options: &'a ReadOptions,
    terms: Vec<Term<C>>,
    previous: Option<u64>,
}

impl<'a, C: Coefficient> TermListBuilder<'a, C> {
    fn new(options: &'a ReadOptions) -> Self {
        Self {
            options,
            terms: Vec::new(),
            previous: None,
        }
    }

    fn push_line(&mut self, line: usize, raw: &str) -> Result<(), ParseError> {
        let text = raw.trim();

        if text.is_empty() && self.options.skip_blank_lines {
            trace!(line, "skipping blank line");
            return Ok(());
        }
        if let Some(prefix) = self.options.comment_prefix {
            if text.starts_with(prefix) {
                trace!(line, "skipping comment line");
                return Ok(());
            }
        }

        let term = parse_term::<C>(text, line)?;

        if self.options.validate_order {
            if let Some(previous) = self.previous {
                let in_order = match self.options.order {
                    LineOrder::Descending => term.degree < previous,
                    LineOrder::Ascending => term.degree > previous,
                };
                if !in_order {
                    return Err(ParseError::OutOfOrder {
                        line,
                        previous,
                        degree: term.degree,
                    });
                }
            }
        }
        self.previous = Some(term.degree);

        if term.is_zero() {
            trace!(line, degree = term.degree, "dropping zero-coefficient term");
            return Ok(());
        }

        self.terms.push(term);
        Ok(())
    }

    fn finish(self) -> TermList<C> {
        let mut terms = self.terms;
        if self.options.order == LineOrder::Ascending {
            // Same result as prepending each term as it arrives
            terms.reverse();
        }
        debug!(terms = terms.len(), order = ?self.options.order, "read polynomial");
        TermList::from_sorted_unchecked(terms)
    }
}

impl<C: Coefficient> TermList<C> {
    /// Builds a term list from `<coefficient> <degree>` lines using the
    /// default [`ReadOptions`].
    ///
    /// Lines are taken in the order given and are not re-sorted. The result
    /// is normalized only when the input honours that order with no
    /// repeated degrees; [`ReadOptions::strict`] rejects input that does
    /// not, and [`TermList::normalize`] repairs it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if a line cannot be decoded into a float
    /// coefficient and a non-negative integer degree.
    pub fn from_text<I, S>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_text_with(lines, &ReadOptions::default())
    }

    /// Builds a term list from `<coefficient> <degree>` lines.
    ///
    /// Without `options.validate_order`, out-of-order or repeated degrees
    /// pass through as given and the result is not normalized.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] on a malformed line, or on an out-of-order
    /// degree when `options.validate_order` is set.
    pub fn from_text_with<I, S>(lines: I, options: &ReadOptions) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = TermListBuilder::new(options);
        for (i, line) in lines.into_iter().enumerate() {
            builder.push_line(i + 1, line.as_ref())?;
        }
        Ok(builder.finish())
    }

    /// Reads a term list from a buffered reader with default options.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] if reading fails, or any error of
    /// [`TermList::from_text`].
    pub fn read<R: BufRead>(reader: R) -> Result<Self, ParseError> {
        Self::read_with(reader, &ReadOptions::default())
    }

    /// Reads a term list from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] if reading fails, or any error of
    /// [`TermList::from_text_with`].
    pub fn read_with<R: BufRead>(reader: R, options: &ReadOptions) -> Result<Self, ParseError> {
        let mut builder = TermListBuilder::new(options);
        for (i, line) in reader.lines().enumerate() {
            builder.push_line(i + 1, &line?)?;
        }
        Ok(builder.finish())
    }
}

impl<C: Coefficient> FromStr for TermList<C> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s.lines())
    }
}
