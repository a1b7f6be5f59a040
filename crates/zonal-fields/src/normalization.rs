//! Canonical forms for fields whose basis is not independent over Q.
//!
//! When an operand makes some basis element rational (a perfect square
//! radicand) or a fixed rational multiple of another (the hexagon's
//! `d₂ = 2`), that coordinate is folded into a lower one so equal numbers
//! have equal coefficients.

use num_traits::Zero;
use smallvec::SmallVec;
use zonal_integers::Rational;

/// One folding rule: `coeffs[to] += factor · coeffs[from]; coeffs[from] = 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Fold {
    from: usize,
    to: usize,
    factor: i64,
}

/// A field's normalization rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Normalization {
    /// The basis is independent; every representation is canonical.
    #[default]
    None,
    /// `√r = root`: coordinate 1 folds into coordinate 0.
    PerfectSquare {
        /// The integer square root of the radicand.
        root: i64,
    },
    /// `d₂ = 2` in the hexagon field: coordinate 2 folds into coordinate 0.
    HexagonCarry,
    /// `√r = root` inside Q(φ, √r): `√r → root` and `φ√r → root·φ`.
    CompositePerfectSquare {
        /// The integer square root of the radicand.
        root: i64,
    },
}

impl Normalization {
    fn folds(self) -> SmallVec<[Fold; 2]> {
        let mut folds = SmallVec::new();
        match self {
            Self::None => {}
            Self::PerfectSquare { root } => folds.push(Fold { from: 1, to: 0, factor: root }),
            Self::HexagonCarry => folds.push(Fold { from: 2, to: 0, factor: 2 }),
            Self::CompositePerfectSquare { root } => {
                folds.push(Fold { from: 2, to: 0, factor: root });
                folds.push(Fold { from: 3, to: 1, factor: root });
            }
        }
        folds
    }

    /// Rewrites `coeffs` into canonical form in place.
    ///
    /// Idempotent; mass only moves to lower indices.
    pub fn apply(self, coeffs: &mut [Rational]) {
        for fold in self.folds() {
            if fold.from >= coeffs.len() || coeffs[fold.from].is_zero() {
                continue;
            }
            let moved = std::mem::take(&mut coeffs[fold.from]) * Rational::from(fold.factor);
            coeffs[fold.to] = &coeffs[fold.to] + &moved;
        }
    }

    /// Returns true if coordinate `index` is always zero after [`apply`](Self::apply).
    #[must_use]
    pub fn collapses(self, index: usize) -> bool {
        self.folds().iter().any(|fold| fold.from == index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coeffs(values: &[i64]) -> Vec<Rational> {
        values.iter().map(|&v| Rational::from(v)).collect()
    }

    #[test]
    fn test_perfect_square() {
        let mut c = coeffs(&[4, 5]);
        Normalization::PerfectSquare { root: 3 }.apply(&mut c);
        assert_eq!(c, coeffs(&[19, 0]));
    }

    #[test]
    fn test_hexagon_carry() {
        let mut c = coeffs(&[3, 4, 5]);
        Normalization::HexagonCarry.apply(&mut c);
        assert_eq!(c, coeffs(&[13, 4, 0]));
    }

    #[test]
    fn test_composite_perfect_square() {
        let mut c = coeffs(&[3, 5, 7, 11]);
        Normalization::CompositePerfectSquare { root: 2 }.apply(&mut c);
        assert_eq!(c, coeffs(&[17, 27, 0, 0]));
    }

    #[test]
    fn test_idempotent() {
        let rule = Normalization::CompositePerfectSquare { root: 5 };
        let mut once = coeffs(&[1, -2, 3, -4]);
        rule.apply(&mut once);
        let mut twice = once.clone();
        rule.apply(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_collapses() {
        assert!(!Normalization::None.collapses(1));
        assert!(Normalization::PerfectSquare { root: 2 }.collapses(1));
        assert!(!Normalization::PerfectSquare { root: 2 }.collapses(0));
        assert!(Normalization::HexagonCarry.collapses(2));
        assert!(!Normalization::HexagonCarry.collapses(1));
        let composite = Normalization::CompositePerfectSquare { root: 3 };
        assert!(composite.collapses(2) && composite.collapses(3) && !composite.collapses(1));
    }
}
