//! Text forms of algebraic numbers.
//!
//! With `-7/5 + 3/5·φ` as the running example:
//!
//! | format | text |
//! |---|---|
//! | `Default` | `-7/5 +3/5φ` |
//! | `Expression` | `-7/5 +3/5*phi` |
//! | `Zomic` | `-7/5 3/5` |
//! | `Vef` | `(3/5,-7/5)` |

use std::fmt::Write as _;

use num_traits::{One, Zero};
use zonal_integers::Rational;

/// Selects one of the four text forms of a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum NumberFormat {
    /// Signed terms with Unicode labels, zero terms suppressed.
    #[default]
    Default,
    /// Like `Default` but with ASCII labels joined by `*`.
    Expression,
    /// Every coefficient in index order, space separated.
    Zomic,
    /// Every coefficient in reverse index order, parenthesized.
    Vef,
}

impl NumberFormat {
    /// The numeric code used by persisted documents (0 through 3).
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Default => 0,
            Self::Expression => 1,
            Self::Zomic => 2,
            Self::Vef => 3,
        }
    }

    /// Inverse of [`code`](Self::code).
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Default),
            1 => Some(Self::Expression),
            2 => Some(Self::Zomic),
            3 => Some(Self::Vef),
            _ => None,
        }
    }
}

/// Renders `factors` in `format`; `label(i)` supplies the label of basis element `i`.
pub(crate) fn render<'a>(
    factors: &[Rational],
    format: NumberFormat,
    label: impl Fn(usize) -> &'a str,
) -> String {
    match format {
        NumberFormat::Default | NumberFormat::Expression => render_terms(factors, format, label),
        NumberFormat::Zomic => factors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" "),
        NumberFormat::Vef => {
            let reversed: Vec<String> = factors.iter().rev().map(ToString::to_string).collect();
            format!("({})", reversed.join(","))
        }
    }
}

fn render_terms<'a>(
    factors: &[Rational],
    format: NumberFormat,
    label: impl Fn(usize) -> &'a str,
) -> String {
    let mut out = String::new();
    // Count of leading zero terms; the first printed term gets no separator or `+`.
    let mut skipped = 0;
    for (i, factor) in factors.iter().enumerate() {
        if factor.is_zero() {
            skipped += 1;
            continue;
        }
        let leading = i == skipped;
        if !leading {
            out.push(' ');
        }
        let magnitude = if factor.is_negative() {
            out.push('-');
            -factor
        } else {
            if !leading {
                out.push('+');
            }
            factor.clone()
        };

        if i == 0 {
            let _ = write!(out, "{magnitude}");
        } else {
            if !magnitude.is_one() {
                let _ = write!(out, "{magnitude}");
                if format == NumberFormat::Expression {
                    out.push('*');
                }
            }
            out.push_str(label(i));
        }
    }
    if skipped == factors.len() {
        out.push('0');
    }
    out
}
