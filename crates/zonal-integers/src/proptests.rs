//! Property-based tests for exact rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{ArithmeticError, Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                &a * &(&b + &c),
                &(&a * &b) + &(&a * &c)
            );
        }

        #[test]
        fn gcd_commutative(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.gcd(&b), b.gcd(&a));
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_mul_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!((&a * &b) * &c, a * (&b * &c));
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn rational_additive_inverse(a in rational()) {
            prop_assert!((&a + &(-&a)).is_zero());
            prop_assert_eq!(&a - &a, Rational::zero());
        }

        #[test]
        fn rational_multiplicative_inverse(a in non_zero_rational()) {
            let inv = a.checked_recip().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn rational_division_undoes_multiplication(a in rational(), b in non_zero_rational()) {
            let product = &a * &b;
            prop_assert_eq!(product.checked_div(&b).unwrap(), a);
        }

        #[test]
        fn rational_division_by_zero_is_an_error(a in rational()) {
            prop_assert_eq!(
                a.checked_div(&Rational::zero()),
                Err(ArithmeticError::DivisionByZero)
            );
        }

        #[test]
        fn rational_denominator_positive(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d).unwrap();
            prop_assert_eq!(r.denominator().signum(), 1);
            prop_assert!(r.numerator().gcd(&r.denominator()).is_one() || r.is_zero());
        }

        #[test]
        fn rational_display_parses_back(a in rational()) {
            let text = a.to_string();
            prop_assert_eq!(text.parse::<Rational>().unwrap(), a);
        }
    }
}
