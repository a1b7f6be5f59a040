//! Reading numbers and vectors back from text.
//!
//! Each parser accepts what the matching [`NumberFormat`](crate::NumberFormat)
//! writes: [`parse_number`](AlgebraicField::parse_number) reads Zomic,
//! [`parse_expression`](AlgebraicField::parse_expression) reads Default and
//! Expression, and [`parse_vef_number`](AlgebraicField::parse_vef_number)
//! reads VEF.

use std::sync::Arc;

use num_traits::{One, Zero};
use zonal_integers::Rational;

use crate::{AlgebraError, AlgebraicField, AlgebraicNumber, AlgebraicVector, Coefficients};

impl AlgebraicField {
    /// Parses exactly `order` whitespace-separated rationals, index 0 first.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] for the wrong token count
    /// and [`AlgebraError::InvalidLiteral`] for a malformed rational.
    pub fn parse_number(self: &Arc<Self>, text: &str) -> Result<AlgebraicNumber, AlgebraError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != self.order() {
            return Err(AlgebraError::DimensionMismatch {
                expected: self.order(),
                found: tokens.len(),
            });
        }
        let coeffs = parse_rationals(&tokens)?;
        self.create_number(&coeffs)
    }

    /// Parses whitespace-separated rationals, `order` per component.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] unless the token count is
    /// a positive multiple of `order`, and [`AlgebraError::InvalidLiteral`]
    /// for a malformed rational.
    pub fn parse_vector(self: &Arc<Self>, text: &str) -> Result<AlgebraicVector, AlgebraError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let order = self.order();
        if tokens.is_empty() || tokens.len() % order != 0 {
            return Err(AlgebraError::DimensionMismatch {
                expected: tokens.len().next_multiple_of(order).max(order),
                found: tokens.len(),
            });
        }
        let components = tokens
            .chunks(order)
            .map(|chunk| parse_rationals(chunk).and_then(|coeffs| self.create_number(&coeffs)))
            .collect::<Result<Vec<_>, _>>()?;
        AlgebraicVector::new(self, components)
    }

    /// Parses a sum of signed terms such as `"-7/5 +3/5φ"` or `"2 -phi"`.
    ///
    /// Each term is a rational, a label, or a rational followed by a label
    /// (optionally joined by `*`). Both label forms are accepted. Repeated
    /// labels add up.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidLiteral`] for empty text or a term
    /// that matches no label.
    pub fn parse_expression(self: &Arc<Self>, text: &str) -> Result<AlgebraicNumber, AlgebraError> {
        let invalid = || AlgebraError::InvalidLiteral(text.to_string());
        let mut coeffs: Coefficients = (0..self.order()).map(|_| Rational::zero()).collect();
        let mut terms = 0;

        // Longest labels first, so `φ√3` is not read as `φ` times `√3`.
        let mut labels: Vec<(usize, &str)> = self
            .labels()
            .iter()
            .enumerate()
            .skip(1)
            .flat_map(|(i, label)| [(i, label.glyph.as_str()), (i, label.name.as_str())])
            .filter(|(_, s)| !s.is_empty())
            .collect();
        labels.sort_by_key(|(_, s)| std::cmp::Reverse(s.len()));

        for token in text.split_whitespace() {
            let (negative, body) = match token.as_bytes().first() {
                Some(b'-') => (true, &token[1..]),
                Some(b'+') => (false, &token[1..]),
                _ => (false, token),
            };
            let (index, magnitude) = parse_term(body, &labels).ok_or_else(invalid)?;
            let value = if negative { -magnitude } else { magnitude };
            coeffs[index] = &coeffs[index] + &value;
            terms += 1;
        }
        if terms == 0 {
            return Err(invalid());
        }
        self.create_number(&coeffs)
    }

    /// Parses the VEF form `"(a_{n-1},…,a_1,a_0)"`, highest index first.
    ///
    /// A bare rational without parentheses is read as the rational part.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] for the wrong entry count
    /// and [`AlgebraError::InvalidLiteral`] for malformed text.
    pub fn parse_vef_number(self: &Arc<Self>, text: &str) -> Result<AlgebraicNumber, AlgebraError> {
        let text = text.trim();
        let Some(inner) = text.strip_prefix('(') else {
            return self.create_number(&[text.parse::<Rational>()?]);
        };
        let inner = inner
            .strip_suffix(')')
            .ok_or_else(|| AlgebraError::InvalidLiteral(text.to_string()))?;
        let tokens: Vec<&str> = inner.split(',').map(str::trim).collect();
        if tokens.len() != self.order() {
            return Err(AlgebraError::DimensionMismatch {
                expected: self.order(),
                found: tokens.len(),
            });
        }
        let mut coeffs = parse_rationals(&tokens)?;
        coeffs.reverse();
        self.create_number(&coeffs)
    }
}

fn parse_rationals(tokens: &[&str]) -> Result<Vec<Rational>, AlgebraError> {
    tokens
        .iter()
        .map(|token| token.parse::<Rational>().map_err(AlgebraError::from))
        .collect()
}

/// Splits an unsigned term into its basis index and coefficient.
fn parse_term(body: &str, labels: &[(usize, &str)]) -> Option<(usize, Rational)> {
    for &(index, label) in labels {
        let Some(prefix) = body.strip_suffix(label) else {
            continue;
        };
        let prefix = prefix.strip_suffix('*').unwrap_or(prefix);
        if prefix.is_empty() {
            return Some((index, Rational::one()));
        }
        if let Ok(coefficient) = prefix.parse::<Rational>() {
            if !coefficient.is_negative() {
                return Some((index, coefficient));
            }
        }
    }
    body.parse::<Rational>()
        .ok()
        .filter(|value| !value.is_negative())
        .map(|value| (0, value))
}
