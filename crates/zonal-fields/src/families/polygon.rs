//! Polygon fields: the ratios of the diagonals of a regular n-gon to its edge.
//!
//! For an n-gon the field has order ⌊n/2⌋ with basis `d_0 = 1, d_1, …`,
//! where `d_i = sin((i+1)π/n) / sin(π/n)`. Products of diagonals are sums
//! of diagonals; the multiplication tensor follows two families of
//! diagonal stripes through each layer.

use std::f64::consts::{PI, SQRT_2};
use std::sync::Arc;

use crate::families::PHI;
use crate::structure::{FieldStructure, Label, StructureConstants};
use crate::{AlgebraError, AlgebraicField, FieldKind, Normalization};

/// The smallest polygon that yields an irrational field.
pub const MINIMUM_SIDES: u32 = 4;

impl AlgebraicField {
    /// The diagonal-ratio field of the regular polygon with `sides` sides.
    ///
    /// The hexagon is special: its second diagonal is exactly 2, so that
    /// coordinate is carried into the units.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidFieldConfiguration`] if `sides < 4`.
    pub fn polygon(sides: u32) -> Result<Arc<Self>, AlgebraError> {
        if sides < MINIMUM_SIDES {
            return Err(AlgebraError::InvalidFieldConfiguration(format!(
                "polygon sides = {sides}. It must be at least {MINIMUM_SIDES}."
            )));
        }
        let structure = structure(sides)?;
        let normalization = if sides == 6 {
            Normalization::HexagonCarry
        } else {
            Normalization::None
        };
        Ok(Self::from_structure(
            FieldKind::Polygon(sides),
            structure,
            normalization,
            None,
        ))
    }
}

fn structure(sides: u32) -> Result<FieldStructure, AlgebraError> {
    let order = (sides / 2) as usize;
    let constants = multiplication_tensor(sides);
    let coefficients = coefficients(sides, order);
    let labels = labels(sides, order);
    FieldStructure::new(constants, coefficients, labels)
}

/// Builds `M[layer][y][x]` by walking diagonal stripes.
pub(crate) fn multiplication_tensor(sides: u32) -> StructureConstants {
    let n = sides as usize;
    let order = n / 2;
    let mut m = StructureConstants::zeros(order);

    // South-easterly stripes, mirrored about the main diagonal.
    for layer in 0..order {
        let mid_way = layer / 2;
        let (mut bx, mut by) = (layer, 0);
        while bx > mid_way || bx == by {
            let (mut x, mut y) = (bx, by);
            while x < order && y < order {
                m.add(layer, y, x, 1);
                if x != y {
                    m.add(layer, x, y, 1);
                }
                x += 1;
                y += 1;
            }
            if bx == 0 {
                break;
            }
            bx -= 1;
            by += 1;
        }
    }

    // South-westerly stripes reflected off the far side of the polygon.
    let far = n - 2;
    let parity = (n + 1) % 2;
    for layer in 0..order - parity {
        let base = far - layer;
        for offset in 0..=base {
            let (mut x, mut y) = (base - offset, offset);
            while x < order && y < order {
                m.add(layer, y, x, 1);
                x += 1;
                y += 1;
            }
        }
    }

    if sides == 6 {
        // d₂ = 2: move layer 2 into the units.
        for x in 0..order {
            for y in 0..order {
                let carry = m.get(2, x, y);
                m.add(0, x, y, 2 * carry);
                m.set(2, x, y, 0);
            }
        }
    }
    m
}

fn coefficients(sides: u32, order: usize) -> Vec<f64> {
    let n = f64::from(sides);
    let unit = (PI / n).sin();
    let mut coefficients: Vec<f64> = (0..order)
        .map(|i| {
            if i == 0 {
                1.0
            } else {
                #[allow(clippy::cast_precision_loss)]
                let k = (i + 1) as f64;
                (k * PI / n).sin() / unit
            }
        })
        .collect();

    // Trig rounding misses these closed forms in the last bit.
    match sides {
        4 => coefficients[1] = SQRT_2,
        5 => coefficients[1] = PHI,
        6 => {
            coefficients[1] = 3.0_f64.sqrt();
            coefficients[2] = 2.0;
        }
        _ => {}
    }
    coefficients
}

fn labels(sides: u32, order: usize) -> Vec<Label> {
    let mut labels = vec![Label::rational()];
    match sides {
        4 => labels.push(Label::new("√2", "sqrtTwo")),
        5 => labels.push(Label::new("φ", "phi")),
        6 => {
            labels.push(Label::new("√3", "sqrtThree"));
            labels.push(Label::new("Two", "two"));
        }
        7 => {
            labels.push(Label::new("ρ", "rho"));
            labels.push(Label::new("σ", "sigma"));
        }
        _ if order - 1 <= 26 => {
            labels.extend(('a'..='z').take(order - 1).map(|c| Label::new(c, c)));
        }
        _ => {
            labels.extend((1..order).map(|i| Label::new(format!("d{}", subscript(i)), format!("d[{i}]"))));
        }
    }
    labels
}

fn subscript(i: usize) -> String {
    i.to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x2080 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}
