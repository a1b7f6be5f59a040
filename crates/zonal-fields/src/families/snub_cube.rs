//! The snub cube field Q(ψ), ψ the tribonacci constant.

use std::sync::Arc;

use crate::structure::{FieldStructure, Label, StructureConstants};
use crate::{AlgebraicField, FieldKind, Normalization};

/// Real root of `x³ = x² + x + 1`, about 1.839.
#[must_use]
pub fn psi() -> f64 {
    let root33 = 33.0_f64.sqrt();
    (1.0 + (19.0 - 3.0 * root33).cbrt() + (19.0 + 3.0 * root33).cbrt()) / 3.0
}

impl AlgebraicField {
    /// Q(ψ), order 3, basis `{1, ψ, ψ²}`.
    #[must_use]
    pub fn snub_cube() -> Arc<Self> {
        let constants = StructureConstants::from_layers([
            [[1, 0, 0], [0, 0, 1], [0, 1, 1]],
            [[0, 1, 0], [1, 0, 1], [0, 1, 2]],
            [[0, 0, 1], [0, 1, 1], [1, 1, 2]],
        ]);
        let psi = psi();
        let structure = FieldStructure {
            constants,
            coefficients: vec![1.0, psi, psi * psi],
            labels: vec![Label::rational(), Label::new("ψ", "psi"), Label::new("ψ²", "psi^2")],
        };
        Self::from_structure(FieldKind::SnubCube, structure, Normalization::None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NumberFormat;

    #[test]
    fn test_psi_value() {
        let psi = psi();
        assert!((psi - 1.839_286_755_214_161).abs() < 1e-12);
        assert!((psi.powi(3) - (psi * psi + psi + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_psi_cubed() {
        let field = AlgebraicField::snub_cube();
        let psi = field.create_power(1).unwrap();
        let cubed = psi.times(&psi).unwrap().times(&psi).unwrap();
        assert_eq!(cubed, field.create_algebraic_number(&[1, 1, 1]).unwrap());
        assert_eq!(field.create_power(3).unwrap(), cubed);
        assert_eq!(field.create_power(2).unwrap(), field.unit_term(2).unwrap());
    }

    #[test]
    fn test_reciprocal_of_psi() {
        // ψ(ψ² − ψ − 1) = 1
        let field = AlgebraicField::snub_cube();
        assert_eq!(
            field.create_power(-1).unwrap(),
            field.create_algebraic_number(&[-1, -1, 1]).unwrap()
        );
    }

    #[test]
    fn test_labels_and_evaluate() {
        let field = AlgebraicField::snub_cube();
        assert_eq!(field.irrational_label(2, NumberFormat::Default), "ψ²");
        assert_eq!(field.irrational_label(2, NumberFormat::Expression), "psi^2");
        let x = field.create_algebraic_number(&[1, 1, 1]).unwrap();
        assert!((x.evaluate() - psi().powi(3)).abs() < 1e-9);
    }
}
