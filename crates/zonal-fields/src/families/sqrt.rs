//! Square-root fields Q(√r).

use std::sync::Arc;

use crate::structure::{FieldStructure, Label, StructureConstants};
use crate::{AlgebraError, AlgebraicField, FieldKind, Normalization};

impl AlgebraicField {
    /// Q(√r), order 2, basis `{1, √r}`.
    ///
    /// A perfect-square radicand yields a field equal to Q: every number
    /// normalizes onto its rational coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidFieldConfiguration`] if `radicand` is zero.
    pub fn sqrt(radicand: u32) -> Result<Arc<Self>, AlgebraError> {
        validate_radicand(radicand)?;
        let structure = structure(radicand)?;
        let normalization = match perfect_root(radicand) {
            Some(root) => Normalization::PerfectSquare { root },
            None => Normalization::None,
        };
        Ok(Self::from_structure(
            FieldKind::Sqrt(radicand),
            structure,
            normalization,
            None,
        ))
    }
}

pub(crate) fn validate_radicand(radicand: u32) -> Result<(), AlgebraError> {
    if radicand == 0 {
        return Err(AlgebraError::InvalidFieldConfiguration(
            "radicand 0 is not positive".to_string(),
        ));
    }
    Ok(())
}

/// The integer square root of `radicand`, if it is a perfect square.
pub(crate) fn perfect_root(radicand: u32) -> Option<i64> {
    let radicand = u64::from(radicand);
    let root = floor_sqrt(radicand);
    if root * root == radicand {
        i64::try_from(root).ok()
    } else {
        None
    }
}

/// Display label of `√r`.
pub(crate) fn label(radicand: u32) -> Label {
    Label::new(format!("√{radicand}"), format!("sqrt({radicand})"))
}

fn structure(radicand: u32) -> Result<FieldStructure, AlgebraError> {
    let r = i64::from(radicand);
    let constants = StructureConstants::from_layers([
        [[1, 0], [0, r]], // units
        [[0, 1], [1, 0]], // √r
    ]);
    let coefficients = vec![1.0, f64::from(radicand).sqrt()];
    let labels = vec![Label::rational(), label(radicand)];
    FieldStructure::new(constants, coefficients, labels)
}

/// Floor of the square root, exact for every `u32`-sized input.
fn floor_sqrt(n: u64) -> u64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let mut root = (n as f64).sqrt() as u64;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}
