//! Property-based tests for stack operations.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use ratpoly_integers::Rational;
    use ratpoly_poly::{Polynomial, Term};

    use crate::{PolyStack, StackOp};

    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec((-9i64..9i64, 0u32..=4u32), 0..=4).prop_map(|terms| {
            Polynomial::from_terms(
                terms
                    .into_iter()
                    .map(|(c, e)| Term::new(Rational::from(c), e)),
            )
        })
    }

    fn small_stack() -> impl Strategy<Value = PolyStack> {
        proptest::collection::vec(small_poly(), 0..=4).prop_map(PolyStack::from_iter)
    }

    fn any_op() -> impl Strategy<Value = StackOp> {
        proptest::sample::select(StackOp::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn push_pop_round_trip(mut stack in small_stack(), p in small_poly()) {
            let before = stack.clone();
            stack.push(p.clone());
            prop_assert_eq!(stack.len(), before.len() + 1);
            prop_assert_eq!(stack.pop(), Ok(p));
            prop_assert_eq!(stack, before);
        }

        #[test]
        fn dup_grows_by_one(mut stack in small_stack()) {
            let size = stack.len();
            if stack.dup().is_ok() {
                prop_assert_eq!(stack.len(), size + 1);
                prop_assert_eq!(stack.peek(0), stack.peek(1));
            } else {
                prop_assert_eq!(size, 0);
            }
        }

        #[test]
        fn ops_respect_arity(mut stack in small_stack(), op in any_op()) {
            let before = stack.clone();
            let result = stack.apply(op);
            if before.len() < op.arity() {
                prop_assert!(result.is_err());
                prop_assert_eq!(stack, before);
            } else {
                prop_assert!(result.is_ok());
                let expected = match op {
                    StackOp::Add | StackOp::Sub | StackOp::Mul | StackOp::Div | StackOp::Pop => {
                        before.len() - 1
                    }
                    StackOp::Integrate | StackOp::Differentiate | StackOp::Swap => before.len(),
                    StackOp::Dup => before.len() + 1,
                    StackOp::Clear => 0,
                };
                prop_assert_eq!(stack.len(), expected);
            }
        }

        #[test]
        fn binary_ops_match_polynomial_ops(a in small_poly(), b in small_poly()) {
            // a is pushed first, so b is p1 (top) and a is p2.
            for (op, expected) in [
                (StackOp::Add, b.add(&a)),
                (StackOp::Sub, a.sub(&b)),
                (StackOp::Mul, b.mul(&a)),
                (StackOp::Div, a.div(&b)),
            ] {
                let mut stack = PolyStack::from_iter([a.clone(), b.clone()]);
                stack.apply(op).unwrap();
                prop_assert_eq!(stack.pop(), Ok(expected));
                prop_assert!(stack.is_empty());
            }
        }
    }
}
