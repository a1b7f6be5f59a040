//! Append-only cache of the powers of a field's first irrational.

use parking_lot::RwLock;

use crate::{AlgebraError, Coefficients};

/// Two arenas holding `g^1, g^2, …` and `g^-1, g^-2, …`.
///
/// Entries are never replaced, so a value read under the shared lock
/// stays valid; growth takes the exclusive lock and fills every missing
/// exponent up to the requested one.
#[derive(Debug, Default)]
pub(crate) struct PowerCache {
    positive: RwLock<Vec<Coefficients>>,
    negative: RwLock<Vec<Coefficients>>,
}

impl PowerCache {
    /// Returns `base^exponent` for `exponent ≥ 1`, filling the arena on a miss.
    ///
    /// `seed` produces `base` (the generator, or its reciprocal for the
    /// negative arena); `step` multiplies two cached values.
    pub(crate) fn power<S, M>(
        &self,
        negative: bool,
        exponent: usize,
        seed: S,
        step: M,
    ) -> Result<Coefficients, AlgebraError>
    where
        S: FnOnce() -> Result<Coefficients, AlgebraError>,
        M: Fn(&Coefficients, &Coefficients) -> Coefficients,
    {
        debug_assert!(exponent >= 1);
        let arena = if negative { &self.negative } else { &self.positive };
        let index = exponent - 1;

        if let Some(hit) = arena.read().get(index).cloned() {
            return Ok(hit);
        }

        let mut powers = arena.write();
        if powers.is_empty() {
            powers.push(seed()?);
        }
        let before = powers.len();
        while powers.len() <= index {
            let next = step(&powers[powers.len() - 1], &powers[0]);
            powers.push(next);
        }
        log::trace!(
            "power cache ({}) grew from {before} to {} entries",
            if negative { "negative" } else { "positive" },
            powers.len()
        );
        Ok(powers[index].clone())
    }

    /// Number of cached entries in one arena.
    #[cfg(test)]
    pub(crate) fn len(&self, negative: bool) -> usize {
        if negative {
            self.negative.read().len()
        } else {
            self.positive.read().len()
        }
    }
}
