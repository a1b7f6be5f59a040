//! Field identity: a family tag plus its operand.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::{AlgebraError, AlgebraicField, FieldConfig};

/// The family and operand that identify a field.
///
/// Field equality and hashing are defined by this value, so two
/// independently built `Sqrt(3)` fields are interchangeable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    /// Q(φ), φ = (1 + √5)/2.
    Golden,
    /// Q(√r).
    Sqrt(u32),
    /// The diagonal-ratio field of the regular n-gon.
    Polygon(u32),
    /// Q(φ, √r).
    PhiPlusSqrt(u32),
    /// Q(φ, √φ).
    SqrtPhi,
    /// Q(ψ), ψ the real root of x³ = x² + x + 1.
    SnubCube,
}

impl FieldKind {
    /// Builds the field, applying the application bounds in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidFieldConfiguration`] if the operand is
    /// rejected by the family or exceeds `config.max_polygon_sides`.
    pub fn build(self, config: &FieldConfig) -> Result<Arc<AlgebraicField>, AlgebraError> {
        match self {
            Self::Golden => Ok(AlgebraicField::golden()),
            Self::Sqrt(radicand) => AlgebraicField::sqrt(radicand),
            Self::Polygon(sides) if sides > config.max_polygon_sides => {
                Err(AlgebraError::InvalidFieldConfiguration(format!(
                    "polygon fields are limited to {} sides, got {sides}",
                    config.max_polygon_sides
                )))
            }
            Self::Polygon(sides) => AlgebraicField::polygon(sides),
            Self::PhiPlusSqrt(radicand) => AlgebraicField::phi_plus_sqrt(radicand),
            Self::SqrtPhi => Ok(AlgebraicField::sqrt_phi()),
            Self::SnubCube => Ok(AlgebraicField::snub_cube()),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Golden => f.write_str("golden"),
            Self::Sqrt(r) => write!(f, "sqrt{r}"),
            Self::Polygon(n) => write!(f, "polygon{n}"),
            Self::PhiPlusSqrt(r) => write!(f, "phiPlusSqrt{r}"),
            Self::SqrtPhi => f.write_str("sqrtPhi"),
            Self::SnubCube => f.write_str("snubCube"),
        }
    }
}

impl FromStr for FieldKind {
    type Err = AlgebraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let operand = |digits: &str| {
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(AlgebraError::InvalidFieldConfiguration(format!(
                    "unknown field name `{s}`"
                )));
            }
            digits
                .parse::<u32>()
                .map_err(|_| AlgebraError::InvalidFieldConfiguration(format!("operand too large in `{s}`")))
        };

        match s {
            "golden" => Ok(Self::Golden),
            "sqrtPhi" => Ok(Self::SqrtPhi),
            "snubCube" => Ok(Self::SnubCube),
            _ => {
                if let Some(rest) = s.strip_prefix("phiPlusSqrt") {
                    operand(rest).map(Self::PhiPlusSqrt)
                } else if let Some(rest) = s.strip_prefix("sqrt") {
                    operand(rest).map(Self::Sqrt)
                } else if let Some(rest) = s.strip_prefix("polygon") {
                    operand(rest).map(Self::Polygon)
                } else {
                    Err(AlgebraError::InvalidFieldConfiguration(format!(
                        "unknown field name `{s}`"
                    )))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        let kinds = [
            FieldKind::Golden,
            FieldKind::Sqrt(3),
            FieldKind::Polygon(7),
            FieldKind::PhiPlusSqrt(5),
            FieldKind::SqrtPhi,
            FieldKind::SnubCube,
        ];
        let names = ["golden", "sqrt3", "polygon7", "phiPlusSqrt5", "sqrtPhi", "snubCube"];
        for (kind, name) in kinds.iter().zip(names) {
            assert_eq!(kind.to_string(), name);
            assert_eq!(name.parse::<FieldKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_bad_names() {
        for name in ["", "sqrt", "sqrt-3", "polygon+5", "heptagon", "sqrt3x"] {
            assert!(name.parse::<FieldKind>().is_err(), "{name}");
        }
    }

    #[test]
    fn test_build_applies_polygon_bound() {
        let config = FieldConfig::default();
        assert_eq!(FieldKind::Polygon(30).build(&config).unwrap().order(), 15);
        assert!(matches!(
            FieldKind::Polygon(31).build(&config),
            Err(AlgebraError::InvalidFieldConfiguration(_))
        ));
        assert!(AlgebraicField::polygon(31).is_ok());
    }

    #[test]
    fn test_build_validates_operands() {
        let config = FieldConfig::default();
        assert!(FieldKind::Sqrt(0).build(&config).is_err());
        assert!(FieldKind::Polygon(3).build(&config).is_err());
        assert!(FieldKind::PhiPlusSqrt(0).build(&config).is_err());
        assert_eq!(FieldKind::Golden.build(&config).unwrap().kind(), FieldKind::Golden);
    }
}
