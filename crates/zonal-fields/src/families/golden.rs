//! The golden field Q(φ).
//!
//! Multiplication and inversion use closed forms derived from `φ² = φ + 1`
//! instead of a structure tensor.

use std::sync::Arc;

use num_traits::Zero;
use smallvec::smallvec;
use zonal_integers::Rational;

use crate::field::{Arithmetic, Coefficients};
use crate::structure::Label;
use crate::{AlgebraError, AlgebraicField, AlgebraicNumber, FieldKind, Normalization};

/// The golden ratio `(1 + √5) / 2`.
pub const PHI: f64 = 1.618_033_988_749_895;

impl AlgebraicField {
    /// Q(φ), order 2, basis `{1, φ}`.
    #[must_use]
    pub fn golden() -> Arc<Self> {
        Self::from_parts(
            FieldKind::Golden,
            Arithmetic::Golden,
            vec![1.0, PHI],
            golden_labels(),
            Normalization::None,
            None,
        )
    }

    /// Parses the legacy golden text forms `"3phi+2"`, `"-phi"`,
    /// `"(3phi+4)/5"` and the pair form `"(3,4)/5"`.
    ///
    /// The pair form lists the φ coefficient first, as VEF does, so
    /// `"(3,4)/5"` is `(4 + 3φ)/5`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::UnsupportedLegacyFormat`] outside the golden
    /// field, [`AlgebraError::InvalidLiteral`] for malformed text and
    /// [`AlgebraError::DivisionByZero`] for a zero divisor.
    pub fn parse_legacy_number(self: &Arc<Self>, text: &str) -> Result<AlgebraicNumber, AlgebraError> {
        if self.kind() != FieldKind::Golden {
            return Err(AlgebraError::UnsupportedLegacyFormat(self.name().to_string()));
        }
        let invalid = || AlgebraError::InvalidLiteral(text.to_string());
        let integer = |s: &str| s.trim().parse::<i64>().map_err(|_| invalid());

        let text = text.trim();
        let (body, divisor) = match text.strip_prefix('(') {
            Some(rest) => {
                let close = rest.find(')').ok_or_else(invalid)?;
                let divisor = match &rest[close + 1..] {
                    "" => 1,
                    tail => integer(tail.strip_prefix('/').ok_or_else(invalid)?)?,
                };
                (&rest[..close], divisor)
            }
            None => (text, 1),
        };

        let (phis, ones) = if let Some((phis, ones)) = body.split_once(',') {
            (integer(phis)?, integer(ones)?)
        } else if let Some(index) = body.find("phi") {
            let phis = match body[..index].trim() {
                "" | "+" => 1,
                "-" => -1,
                coefficient => integer(coefficient.trim_end_matches('*'))?,
            };
            let rest = body[index + 3..].trim();
            let ones = if rest.is_empty() {
                0
            } else {
                integer(rest.strip_prefix('+').unwrap_or(rest))?
            };
            (phis, ones)
        } else {
            (0, integer(body)?)
        };

        self.create_scaled(ones, phis, divisor, 0)
    }
}

fn golden_labels() -> Vec<Label> {
    vec![Label::rational(), Label::new("φ", "phi")]
}

fn part(v: &[Rational], i: usize) -> Rational {
    v.get(i).cloned().unwrap_or_else(Rational::zero)
}

/// `(a0 + a1φ)(b0 + b1φ) = (a0b0 + a1b1) + (a1b0 + a0b1 + a1b1)φ`.
pub(crate) fn multiply(a: &[Rational], b: &[Rational]) -> Coefficients {
    let (a0, a1) = (part(a, 0), part(a, 1));
    let (b0, b1) = (part(b, 0), part(b, 1));
    let cross = &a1 * &b1;
    let ones = &a0 * &b0 + &cross;
    let phis = &a1 * &b0 + &a0 * &b1 + cross;
    smallvec![ones, phis]
}

/// `(a0 + a1φ)·φ = a1 + (a0 + a1)φ`.
pub(crate) fn scale_by_phi(a: &[Rational]) -> Coefficients {
    let (a0, a1) = (part(a, 0), part(a, 1));
    let phis = &a0 + &a1;
    smallvec![a1, phis]
}

/// `1/(a0 + a1φ) = ((a0 + a1) − a1φ) / (a0² + a0a1 − a1²)`.
pub(crate) fn reciprocal(a: &[Rational]) -> Result<Coefficients, AlgebraError> {
    let (a0, a1) = (part(a, 0), part(a, 1));
    let denominator = &a0 * &a0 + &a0 * &a1 - &a1 * &a1;
    let ones = (&a0 + &a1).checked_div(&denominator)?;
    let phis = (-&a1).checked_div(&denominator)?;
    Ok(smallvec![ones, phis])
}

pub(crate) fn evaluate(a: &[Rational]) -> f64 {
    part(a, 0).to_f64() + PHI * part(a, 1).to_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phi_constant() {
        assert_eq!(PHI, (1.0 + 5.0_f64.sqrt()) / 2.0);
    }

    #[test]
    fn test_phi_squared() {
        let field = AlgebraicField::golden();
        let phi = field.create_power(1).unwrap();
        let one_plus_phi = field.create_algebraic_number(&[1, 1]).unwrap();
        assert_eq!(phi.times(&phi).unwrap(), one_plus_phi);
        assert_eq!(field.create_power(2).unwrap(), one_plus_phi);
    }

    #[test]
    fn test_powers() {
        let field = AlgebraicField::golden();
        // φ^5 = 3 + 5φ, φ^-5 = -8 + 5φ
        assert_eq!(field.create_power(5).unwrap(), field.create_algebraic_number(&[3, 5]).unwrap());
        assert_eq!(field.create_power(-5).unwrap(), field.create_algebraic_number(&[-8, 5]).unwrap());
        assert_eq!(field.create_power(-1).unwrap(), field.create_algebraic_number(&[-1, 1]).unwrap());
    }

    #[test]
    fn test_default_strut_scaling_and_affine_scalar() {
        let field = AlgebraicField::golden();
        let strut = field.default_strut_scaling().unwrap();
        assert_eq!(strut.to_string(), "-1/2 +1/2φ");
        assert_eq!(field.affine_scalar(), field.create_power(1).unwrap());
    }

    #[test]
    fn test_conjugate() {
        let field = AlgebraicField::golden();
        let x = field.create_algebraic_number(&[2, 3]).unwrap();
        let conjugate = field.golden_conjugate(&x).unwrap();
        assert_eq!(conjugate, field.create_algebraic_number(&[5, -3]).unwrap());
        // x · x̄ is the rational norm 2² + 2·3 − 3² = 1
        assert_eq!(x.times(&conjugate).unwrap(), field.create_rational(1, 1).unwrap());
        let root2 = AlgebraicField::sqrt(2).unwrap();
        assert!(root2.golden_conjugate(&root2.one()).is_err());
    }

    #[test]
    fn test_legacy_parse() {
        let field = AlgebraicField::golden();
        let number = |ones, phis, den| field.create_scaled(ones, phis, den, 0).unwrap();

        assert_eq!(field.parse_legacy_number("3phi+2").unwrap(), number(2, 3, 1));
        assert_eq!(field.parse_legacy_number("phi").unwrap(), number(0, 1, 1));
        assert_eq!(field.parse_legacy_number("-phi").unwrap(), number(0, -1, 1));
        assert_eq!(field.parse_legacy_number("-4").unwrap(), number(-4, 0, 1));
        assert_eq!(field.parse_legacy_number("(3phi+4)/5").unwrap(), number(4, 3, 5));
        assert_eq!(field.parse_legacy_number("(3,4)/5").unwrap(), number(4, 3, 5));
        assert_eq!(field.parse_legacy_number("2phi-1").unwrap(), number(-1, 2, 1));
    }

    #[test]
    fn test_legacy_parse_errors() {
        let field = AlgebraicField::golden();
        assert_eq!(field.parse_legacy_number("(3phi+4)/0"), Err(AlgebraError::DivisionByZero));
        assert!(matches!(
            field.parse_legacy_number("(3phi+4"),
            Err(AlgebraError::InvalidLiteral(_))
        ));
        assert!(matches!(
            field.parse_legacy_number("xphi"),
            Err(AlgebraError::InvalidLiteral(_))
        ));

        let root2 = AlgebraicField::sqrt(2).unwrap();
        assert_eq!(
            root2.parse_legacy_number("3phi+2"),
            Err(AlgebraError::UnsupportedLegacyFormat("sqrt2".to_string()))
        );
    }
}
