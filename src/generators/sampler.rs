// src/generators/sampler.rs
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};

use super::{Alphabet, GeneratorError, Result};

/// Uniform index sampler over a cryptographically secure source.
///
/// The `RngCore + CryptoRng` bound keeps general-purpose generators out of
/// the engine: swapping the source means supplying another CSPRNG, nothing
/// weaker. Production code uses [`OsRng`].
pub struct SecureSampler<R: RngCore + CryptoRng = OsRng> {
    rng: R,
}

impl SecureSampler<OsRng> {
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl<R: RngCore + CryptoRng> SecureSampler<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a uniform index in `[0, bound)`.
    ///
    /// Rejection sampling on 32-bit draws: any draw at or above the largest
    /// multiple of `bound` below 2^32 is discarded and redrawn, so the
    /// final `draw % bound` is exactly uniform. A bare `draw % bound`
    /// would skew toward low indices whenever `bound` does not divide 2^32.
    pub fn index(&mut self, bound: usize) -> Result<usize> {
        debug_assert!(bound > 0 && bound <= u32::MAX as usize);
        let bound = bound as u64;
        let zone = (1u64 << 32) - ((1u64 << 32) % bound);

        loop {
            let mut buf = [0u8; 4];
            self.rng
                .try_fill_bytes(&mut buf)
                .map_err(|e| GeneratorError::RandomSourceUnavailable(e.to_string()))?;

            let draw = u64::from(u32::from_le_bytes(buf));
            if draw < zone {
                return Ok((draw % bound) as usize);
            }
        }
    }

    /// Draw `count` symbols independently and uniformly from `alphabet`.
    pub fn sample(&mut self, alphabet: &Alphabet, count: usize) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            let idx = self.index(alphabet.len())?;
            out.push(alphabet.byte_at(idx));
        }
        Ok(out)
    }

    /// Draw one symbol uniformly from an arbitrary non-empty symbol set.
    pub fn pick(&mut self, set: &[u8]) -> Result<u8> {
        let idx = self.index(set.len())?;
        Ok(set[idx])
    }
}
