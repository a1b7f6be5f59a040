//! Integration tests for zonal-fields.

#[cfg(test)]
mod integration_tests {
    use std::sync::Arc;

    use zonal_integers::Rational;

    use crate::{
        AlgebraError, AlgebraicField, AlgebraicMatrix, AlgebraicVector, FieldConfig, FieldKind,
        NumberFormat,
    };

    fn all_fields() -> Vec<Arc<AlgebraicField>> {
        let mut fields = vec![
            AlgebraicField::golden(),
            AlgebraicField::sqrt(2).unwrap(),
            AlgebraicField::sqrt(3).unwrap(),
            AlgebraicField::sqrt(4).unwrap(),
            AlgebraicField::sqrt(5).unwrap(),
            AlgebraicField::phi_plus_sqrt(2).unwrap(),
            AlgebraicField::phi_plus_sqrt(4).unwrap(),
            AlgebraicField::sqrt_phi(),
            AlgebraicField::snub_cube(),
        ];
        fields.extend((4..=16).map(|n| AlgebraicField::polygon(n).unwrap()));
        fields
    }

    #[test]
    fn test_power_zero_is_one_everywhere() {
        for field in all_fields() {
            let one = field.create_power(0).unwrap();
            assert_eq!(one, field.create_rational(1, 1).unwrap(), "{field}");
            assert!(one.is_one());
        }
    }

    #[test]
    fn test_basis_pairs_commute() {
        for field in all_fields() {
            let order = i64::try_from(field.order()).unwrap();
            for i in 0..order {
                for j in 0..order {
                    let a = field.unit_term(i).unwrap();
                    let b = field.unit_term(j).unwrap();
                    assert_eq!(a.times(&b).unwrap(), b.times(&a).unwrap(), "{field} e{i}·e{j}");
                }
            }
        }
    }

    #[test]
    fn test_polygon_basis_associative() {
        for sides in 4..=16 {
            let field = AlgebraicField::polygon(sides).unwrap();
            let order = i64::try_from(field.order()).unwrap();
            let units: Vec<_> = (0..order).map(|i| field.unit_term(i).unwrap()).collect();
            for a in &units {
                for b in &units {
                    for c in &units {
                        let left = a.times(b).unwrap().times(c).unwrap();
                        let right = a.times(&b.times(c).unwrap()).unwrap();
                        assert_eq!(left, right, "polygon{sides}");
                    }
                }
            }
        }
    }

    /// Evaluates every `a + b·e_1` with integer `a, b` in -100..=100 in both
    /// fields and requires bit-identical results.
    fn assert_same_evaluation(tensor: &Arc<AlgebraicField>, reference: &Arc<AlgebraicField>) {
        assert_ne!(**tensor, **reference);
        for a in -100..=100 {
            for b in -100..=100 {
                let coeffs = [Rational::from(a), Rational::from(b)];
                let x = tensor.create_number(&coeffs).unwrap();
                let y = reference.create_number(&coeffs).unwrap();
                assert_eq!(x.evaluate(), y.evaluate(), "{tensor} vs {reference}: a={a} b={b}");
            }
        }
    }

    #[test]
    fn test_tensor_and_closed_form_fields_agree() {
        assert_same_evaluation(&AlgebraicField::polygon(5).unwrap(), &AlgebraicField::golden());
        assert_same_evaluation(&AlgebraicField::polygon(4).unwrap(), &AlgebraicField::sqrt(2).unwrap());
        assert_same_evaluation(&AlgebraicField::polygon(6).unwrap(), &AlgebraicField::sqrt(3).unwrap());
    }

    #[test]
    fn test_pentagon_matches_golden_arithmetic() {
        let pentagon = AlgebraicField::polygon(5).unwrap();
        let golden = AlgebraicField::golden();
        for (a, b) in [([2, 3], [-1, 4]), ([0, 1], [0, 1]), ([7, -5], [3, 2])] {
            let p = pentagon
                .create_algebraic_number(&a)
                .unwrap()
                .times(&pentagon.create_algebraic_number(&b).unwrap())
                .unwrap();
            let g = golden
                .create_algebraic_number(&a)
                .unwrap()
                .times(&golden.create_algebraic_number(&b).unwrap())
                .unwrap();
            assert_eq!(p.coefficients(), g.coefficients());
            let pr = pentagon.create_algebraic_number(&a).unwrap().reciprocal().unwrap();
            let gr = golden.create_algebraic_number(&a).unwrap().reciprocal().unwrap();
            assert_eq!(pr.coefficients(), gr.coefficients());
        }
    }

    #[test]
    fn test_golden_dot_product() {
        let field = AlgebraicField::golden();
        let a = field.create_vector_flat(&[1, 1, 0, 1, 0, 1, 1, 1]).unwrap();
        let b = field.create_vector_flat(&[0, 1, -5, 1, 5, 1, 0, 1]).unwrap();
        // (1, φ) · (−5φ, 5) = −5φ + 5φ
        assert!(a.dot(&b).unwrap().is_zero());
        assert_eq!(a.dimension(), 2);
    }

    #[test]
    fn test_flat_vector_validation() {
        let field = AlgebraicField::golden();
        assert!(matches!(
            field.create_vector_flat(&[1, 1, 0]),
            Err(AlgebraError::DimensionMismatch { .. })
        ));
        assert_eq!(field.create_vector_flat(&[1, 0, 0, 1]), Err(AlgebraError::DivisionByZero));
        assert!(matches!(
            field.create_vector(&[[1, 1, 1]]),
            Err(AlgebraError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            field.create_vector(&[[1, 1, 1, 1, 1, 1]]),
            Err(AlgebraError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_create_scaled_formats() {
        let field = AlgebraicField::golden();
        let n = field.create_scaled(22, 15, 6, 0).unwrap();
        assert_eq!(n.to_string_format(NumberFormat::Default), "11/3 +5/2φ");
        assert_eq!(n.to_string_format(NumberFormat::Expression), "11/3 +5/2*phi");
        assert_eq!(n.to_string_format(NumberFormat::Zomic), "11/3 5/2");
        assert_eq!(n.to_string_format(NumberFormat::Vef), "(5/2,11/3)");

        let zero = field.zero();
        assert_eq!(zero.to_string_format(NumberFormat::Default), "0");
        assert_eq!(zero.to_string_format(NumberFormat::Zomic), "0 0");
        assert_eq!(field.one().to_string_format(NumberFormat::Expression), "1");
    }

    #[test]
    fn test_format_round_trips() {
        for field in all_fields() {
            let coeffs: Vec<i64> = (0..field.order())
                .map(|i| if i % 2 == 0 { 3 } else { -2 })
                .collect();
            let n = field
                .create_algebraic_number(&coeffs)
                .unwrap()
                .times(&field.create_rational(1, 7).unwrap())
                .unwrap();
            for format in [NumberFormat::Default, NumberFormat::Expression] {
                let text = n.to_string_format(format);
                assert_eq!(field.parse_expression(&text).unwrap(), n, "{field}: {text}");
            }
            let zomic = n.to_string_format(NumberFormat::Zomic);
            assert_eq!(field.parse_number(&zomic).unwrap(), n, "{field}: {zomic}");
            let vef = n.to_string_format(NumberFormat::Vef);
            assert_eq!(field.parse_vef_number(&vef).unwrap(), n, "{field}: {vef}");
        }
    }

    #[test]
    fn test_vef_reverses_order() {
        let field = AlgebraicField::snub_cube();
        let n = field.create_algebraic_number(&[1, 2, 3]).unwrap();
        assert_eq!(n.to_string_format(NumberFormat::Vef), "(3,2,1)");
        assert_eq!(n.to_string_format(NumberFormat::Zomic), "1 2 3");
    }

    #[test]
    fn test_matrix_inversion_exact() {
        let field = AlgebraicField::polygon(7).unwrap();
        let rho = field.unit_term(1).unwrap();
        let sigma = field.unit_term(2).unwrap();
        let x = field.basis_vector(3, AlgebraicVector::X).unwrap();
        let y = field.basis_vector(3, AlgebraicVector::Y).unwrap();
        let z = field.basis_vector(3, AlgebraicVector::Z).unwrap();
        let columns = [
            x.scale(&rho).unwrap().plus(&y).unwrap(),
            y.scale(&sigma).unwrap().minus(&z).unwrap(),
            z.plus(&x.scale(&rho).unwrap()).unwrap(),
        ];
        let m = AlgebraicMatrix::from_columns(&field, &columns).unwrap();
        // det = ρσ − ρ
        let det = rho.times(&sigma).unwrap().minus(&rho).unwrap();
        assert_eq!(m.determinant().unwrap(), det);

        let inverse = m.inverse().unwrap();
        assert_eq!(m.times(&inverse).unwrap(), field.identity_matrix(3));
        assert_eq!(inverse.times(&m).unwrap(), field.identity_matrix(3));
        for (axis, column) in columns.iter().enumerate() {
            let back = inverse.times_column(column).unwrap();
            assert_eq!(back, field.basis_vector(3, axis).unwrap());
        }

        let v = AlgebraicVector::new(
            &field,
            vec![
                field.create_algebraic_number(&[2, -1, 3]).unwrap(),
                field.create_rational(-5, 4).unwrap(),
                sigma.times(&sigma).unwrap(),
            ],
        )
        .unwrap();
        let image = m.times_column(&v).unwrap();
        assert_ne!(image, v);
        assert_eq!(inverse.times_column(&image).unwrap(), v);
        assert_eq!(m.times_column(&inverse.times_column(&v).unwrap()).unwrap(), v);
    }

    #[test]
    fn test_transform_and_evaluate() {
        // Rotation by 90° about z, applied to an exact golden vector.
        let field = AlgebraicField::golden();
        let rotation = AlgebraicMatrix::from_columns(
            &field,
            &[
                field.create_vector(&[[0, 1], [1, 1], [0, 1]]).unwrap(),
                field.create_vector(&[[-1, 1], [0, 1], [0, 1]]).unwrap(),
                field.basis_vector(3, AlgebraicVector::Z).unwrap(),
            ],
        )
        .unwrap();
        let v = field.create_vector(&[[1, 1, 1, 1], [0, 1, 1, 1], [2, 1, 0, 1]]).unwrap();
        let rotated = rotation.times_column(&v).unwrap();
        assert_eq!(
            rotated,
            field.create_vector(&[[0, 1, -1, 1], [1, 1, 1, 1], [2, 1, 0, 1]]).unwrap()
        );
        let real = rotated.to_real_vector();
        assert!((real[0] + crate::PHI).abs() < 1e-12);
        assert_eq!(rotation.times(&rotation).unwrap().determinant().unwrap(), field.one());
    }

    #[test]
    fn test_concurrent_power_reads() {
        let field = AlgebraicField::polygon(9).unwrap();
        let expected: Vec<_> = (-12..=12).map(|e| field.create_power(e).unwrap()).collect();
        let fresh = AlgebraicField::polygon(9).unwrap();
        std::thread::scope(|scope| {
            for worker in 0..8 {
                let fresh = &fresh;
                let expected = &expected;
                scope.spawn(move || {
                    for round in 0..25 {
                        let e = (worker * 7 + round * 3) % 25;
                        let power = fresh.create_power(i32::try_from(e).unwrap() - 12).unwrap();
                        assert_eq!(power, expected[e]);
                    }
                });
            }
        });
    }

    #[test]
    fn test_field_kind_build() {
        let config = FieldConfig::default();
        for name in ["golden", "sqrt2", "polygon7", "phiPlusSqrt3", "sqrtPhi", "snubCube"] {
            let kind: FieldKind = name.parse().unwrap();
            let field = kind.build(&config).unwrap();
            assert_eq!(field.name(), name);
            assert_eq!(field.kind(), kind);
        }
    }
}
