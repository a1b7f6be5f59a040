//! Composite fields over the golden field: Q(φ, √r) and Q(φ, √φ).
//!
//! Both have order 4 with the golden basis `{1, φ}` in the first two slots,
//! so golden numbers lift by zero extension and `create_power` walks
//! powers of φ.

use std::sync::Arc;

use crate::families::{sqrt, PHI};
use crate::structure::{FieldStructure, Label, StructureConstants};
use crate::{AlgebraError, AlgebraicField, FieldKind, Normalization};

impl AlgebraicField {
    /// Q(φ, √r), basis `{1, φ, √r, φ√r}`.
    ///
    /// For a perfect-square radicand, `√r` and `φ√r` fold into `1` and `φ`.
    /// The radicand 5 is accepted but yields a dependent basis (`√5 = 2φ − 1`),
    /// so some nonzero numbers there have no reciprocal.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidFieldConfiguration`] if `radicand` is zero.
    pub fn phi_plus_sqrt(radicand: u32) -> Result<Arc<Self>, AlgebraError> {
        sqrt::validate_radicand(radicand)?;
        let structure = phi_plus_sqrt_structure(radicand)?;
        let normalization = match sqrt::perfect_root(radicand) {
            Some(root) => Normalization::CompositePerfectSquare { root },
            None => Normalization::None,
        };
        Ok(Self::from_structure(
            FieldKind::PhiPlusSqrt(radicand),
            structure,
            normalization,
            Some(Self::golden()),
        ))
    }

    /// Q(φ, √φ), basis `{1, φ, √φ, φ√φ}`.
    #[must_use]
    pub fn sqrt_phi() -> Arc<Self> {
        let constants = StructureConstants::from_layers([
            [[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 0, 1], [0, 0, 1, 1]],
            [[0, 1, 0, 0], [1, 1, 0, 0], [0, 0, 1, 1], [0, 0, 1, 2]],
            [[0, 0, 1, 0], [0, 0, 0, 1], [1, 0, 0, 0], [0, 1, 0, 0]],
            [[0, 0, 0, 1], [0, 0, 1, 1], [0, 1, 0, 0], [1, 1, 0, 0]],
        ]);
        let root = PHI.sqrt();
        let coefficients = vec![1.0, PHI, root, PHI * root];
        let labels = vec![
            Label::rational(),
            Label::new("φ", "phi"),
            Label::new("√φ", "sqrt(phi)"),
            Label::new("φ√φ", "phi*sqrt(phi)"),
        ];
        let structure = FieldStructure {
            constants,
            coefficients,
            labels,
        };
        Self::from_structure(
            FieldKind::SqrtPhi,
            structure,
            Normalization::None,
            Some(Self::golden()),
        )
    }
}

fn phi_plus_sqrt_structure(radicand: u32) -> Result<FieldStructure, AlgebraError> {
    let r = i64::from(radicand);
    // e_1 = φ, e_2 = s = √r, e_3 = t = φs; s² = r, st = rφ, t² = r + rφ.
    let constants = StructureConstants::from_layers([
        [[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, r, 0], [0, 0, 0, r]],
        [[0, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, r], [0, 0, r, r]],
        [[0, 0, 1, 0], [0, 0, 0, 1], [1, 0, 0, 0], [0, 1, 0, 0]],
        [[0, 0, 0, 1], [0, 0, 1, 1], [0, 1, 0, 0], [1, 1, 0, 0]],
    ]);
    let root = f64::from(radicand).sqrt();
    let coefficients = vec![1.0, PHI, root, PHI * root];

    let root_label = sqrt::label(radicand);
    let product_label = Label::new(
        format!("φ{}", root_label.glyph),
        format!("phi*{}", root_label.name),
    );
    let labels = vec![
        Label::rational(),
        Label::new("φ", "phi"),
        root_label,
        product_label,
    ];
    FieldStructure::new(constants, coefficients, labels)
}
