//! Property-based tests for field arithmetic.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;
    use zonal_integers::Rational;

    use crate::{AlgebraicField, AlgebraicMatrix, AlgebraicNumber, AlgebraicVector};

    /// Fields whose basis is independent after normalization, so every
    /// nonzero number is invertible.
    fn invertible_fields() -> Vec<Arc<AlgebraicField>> {
        vec![
            AlgebraicField::golden(),
            AlgebraicField::sqrt(2).unwrap(),
            AlgebraicField::sqrt(9).unwrap(),
            AlgebraicField::polygon(4).unwrap(),
            AlgebraicField::polygon(6).unwrap(),
            AlgebraicField::polygon(7).unwrap(),
            AlgebraicField::polygon(8).unwrap(),
            AlgebraicField::polygon(11).unwrap(),
            AlgebraicField::phi_plus_sqrt(2).unwrap(),
            AlgebraicField::phi_plus_sqrt(4).unwrap(),
            AlgebraicField::sqrt_phi(),
            AlgebraicField::snub_cube(),
        ]
    }

    fn field() -> impl Strategy<Value = Arc<AlgebraicField>> {
        prop::sample::select(invertible_fields())
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (-50i64..50, 1i64..20).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    fn number_in(field: Arc<AlgebraicField>) -> impl Strategy<Value = AlgebraicNumber> {
        prop::collection::vec(rational(), field.order())
            .prop_map(move |coeffs| field.create_number(&coeffs).unwrap())
    }

    fn numbers(count: usize) -> impl Strategy<Value = Vec<AlgebraicNumber>> {
        field().prop_flat_map(move |f| prop::collection::vec(number_in(f), count))
    }

    proptest! {
        #[test]
        fn reciprocal_is_inverse(xs in numbers(1)) {
            let x = &xs[0];
            prop_assume!(!x.is_zero());
            let inverse = x.reciprocal().unwrap();
            prop_assert!(x.times(&inverse).unwrap().is_one());
            prop_assert_eq!(&inverse.reciprocal().unwrap(), x);
        }

        #[test]
        fn multiplication_associative(xs in numbers(3)) {
            let (a, b, c) = (&xs[0], &xs[1], &xs[2]);
            let left = a.times(b).unwrap().times(c).unwrap();
            let right = a.times(&b.times(c).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn multiplication_commutative(xs in numbers(2)) {
            prop_assert_eq!(xs[0].times(&xs[1]).unwrap(), xs[1].times(&xs[0]).unwrap());
        }

        #[test]
        fn distributive(xs in numbers(3)) {
            let (a, b, c) = (&xs[0], &xs[1], &xs[2]);
            let left = a.times(&b.plus(c).unwrap()).unwrap();
            let right = a.times(b).unwrap().plus(&a.times(c).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn evaluate_is_a_homomorphism(xs in numbers(2)) {
            let (a, b) = (&xs[0], &xs[1]);
            let product = a.times(b).unwrap().evaluate();
            let expected = a.evaluate() * b.evaluate();
            prop_assert!((product - expected).abs() <= 1e-6 * (1.0 + expected.abs()));
        }

        #[test]
        fn division_undoes_multiplication(xs in numbers(2)) {
            let (a, b) = (&xs[0], &xs[1]);
            prop_assume!(!b.is_zero());
            prop_assert_eq!(&a.times(b).unwrap().divided_by(b).unwrap(), a);
        }

        #[test]
        fn matrix_inverse(xs in numbers(9)) {
            let field = Arc::clone(xs[0].field());
            let columns: Vec<AlgebraicVector> = xs
                .chunks(3)
                .map(|column| AlgebraicVector::new(&field, column.to_vec()).unwrap())
                .collect();
            let m = AlgebraicMatrix::from_columns(&field, &columns).unwrap();
            let determinant = m.determinant().unwrap();
            prop_assume!(!determinant.is_zero());
            let inverse = m.inverse().unwrap();
            prop_assert_eq!(m.times(&inverse).unwrap(), field.identity_matrix(3));
            prop_assert_eq!(
                inverse.determinant().unwrap(),
                determinant.reciprocal().unwrap()
            );
        }

        #[test]
        fn text_formats_round_trip(xs in numbers(1)) {
            use crate::NumberFormat;
            let x = &xs[0];
            let field = x.field();
            prop_assert_eq!(&field.parse_number(&x.to_string_format(NumberFormat::Zomic)).unwrap(), x);
            prop_assert_eq!(&field.parse_expression(&x.to_string_format(NumberFormat::Default)).unwrap(), x);
            prop_assert_eq!(&field.parse_expression(&x.to_string_format(NumberFormat::Expression)).unwrap(), x);
            prop_assert_eq!(&field.parse_vef_number(&x.to_string_format(NumberFormat::Vef)).unwrap(), x);
        }
    }
}
