//! Property-based tests for term-list arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::term::Term;
    use crate::term_list::TermList;

    // Strategy for generating small integral coefficients, so sums and
    // products stay exact in f64
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-20i32..=20i32).prop_map(f64::from)
    }

    // Strategy for generating small polynomials (degree 0-10)
    fn small_poly() -> impl Strategy<Value = TermList> {
        proptest::collection::vec((small_coeff(), 0u64..=10), 0..=6).prop_map(|pairs| {
            TermList::from_terms(pairs.into_iter().map(Term::from).collect())
        })
    }

    // Evaluation points with exact binary representations
    fn sample_point() -> impl Strategy<Value = f64> {
        (-6i32..=6i32).prop_map(|k| f64::from(k) / 2.0)
    }

    fn close(lhs: f64, rhs: f64) -> bool {
        (lhs - rhs).abs() <= 1e-9 * lhs.abs().max(rhs.abs()).max(1.0)
    }

    fn disjoint(a: &TermList, b: &TermList) -> bool {
        if a.is_empty() || b.is_empty() {
            return true;
        }
        let a = a.terms().as_ptr_range();
        let b = b.terms().as_ptr_range();
        a.end <= b.start || b.end <= a.start
    }

    proptest! {
        // Ownership

        #[test]
        fn add_does_not_mutate(a in small_poly(), b in small_poly()) {
            let (before_a, before_b) = (a.to_string(), b.to_string());
            let _ = a.add(&b);
            prop_assert_eq!(a.to_string(), before_a);
            prop_assert_eq!(b.to_string(), before_b);
        }

        #[test]
        fn multiply_does_not_mutate(a in small_poly(), b in small_poly()) {
            let (before_a, before_b) = (a.clone(), b.clone());
            let _ = a.multiply(&b);
            let _ = a.multiply_geobucket(&b);
            prop_assert_eq!(a, before_a);
            prop_assert_eq!(b, before_b);
        }

        #[test]
        fn results_share_no_storage(a in small_poly(), b in small_poly()) {
            let sum = a.add(&b);
            let product = a.multiply(&b);
            let copy = a.copy();
            prop_assert!(disjoint(&sum, &a) && disjoint(&sum, &b));
            prop_assert!(disjoint(&product, &a) && disjoint(&product, &b));
            prop_assert!(disjoint(&copy, &a));
            prop_assert_eq!(copy, a);
        }

        // Algebraic laws

        #[test]
        fn add_identity(a in small_poly()) {
            let zero = TermList::zero();
            prop_assert_eq!(a.add(&zero), a.clone());
            prop_assert_eq!(zero.add(&a), a);
        }

        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn multiply_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.multiply(&b), b.multiply(&a));
        }

        #[test]
        fn distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.multiply(&b.add(&c));
            let right = a.multiply(&b).add(&a.multiply(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        #[test]
        fn multiply_identity_and_zero(a in small_poly()) {
            prop_assert_eq!(a.multiply(&TermList::one()), a.clone());
            prop_assert!(a.multiply(&TermList::zero()).is_zero());
            prop_assert!(TermList::zero().multiply(&a).is_zero());
        }

        // Invariants

        #[test]
        fn outputs_are_normalized(a in small_poly(), b in small_poly()) {
            prop_assert!(a.is_normalized());
            prop_assert!(a.add(&b).is_normalized());
            prop_assert!(a.sub(&b).is_normalized());
            prop_assert!(a.multiply(&b).is_normalized());
            prop_assert!(a.multiply_geobucket(&b).is_normalized());
        }

        #[test]
        fn multiply_degree(a in small_poly(), b in small_poly()) {
            // deg(a * b) = deg(a) + deg(b) for non-zero operands
            let product = a.multiply(&b);
            match (a.degree(), b.degree()) {
                (Some(da), Some(db)) => prop_assert_eq!(product.degree(), Some(da + db)),
                _ => prop_assert!(product.is_zero()),
            }
        }

        #[test]
        fn geobucket_matches_repeated_addition(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.multiply_geobucket(&b), a.multiply(&b));
        }

        // Evaluation

        #[test]
        fn evaluate_add(a in small_poly(), b in small_poly(), x in sample_point()) {
            // (a + b)(x) = a(x) + b(x)
            let sum = a.add(&b);
            prop_assert!(close(sum.evaluate(x), a.evaluate(x) + b.evaluate(x)));
        }

        #[test]
        fn evaluate_multiply(a in small_poly(), b in small_poly(), x in sample_point()) {
            // (a * b)(x) = a(x) * b(x)
            let product = a.multiply(&b);
            prop_assert!(close(product.evaluate(x), a.evaluate(x) * b.evaluate(x)));
        }

        // Text

        #[test]
        fn text_round_trip(a in small_poly()) {
            let lines: Vec<String> = a
                .iter()
                .map(|t| format!("{} {}", t.coeff, t.degree))
                .collect();
            let parsed = TermList::<f64>::from_text(&lines).unwrap();
            prop_assert_eq!(parsed.to_string(), a.to_string());
            prop_assert_eq!(parsed, a);
        }
    }
}
