use rand::{Rng, RngCore};

/// Stateful source of uniform floats in `[0, 1)`.
///
/// The simulation only ever draws randomness through this trait. Food
/// placement is deterministic exactly when the generator behind it is, so a
/// seeded implementation makes whole games replayable.
pub trait RandomSource {
    /// Returns the next value in `[0, 1)` and advances the generator.
    fn next_unit(&mut self) -> f64;
}

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;
const LCG_MODULUS: f64 = 4_294_967_296.0;

/// Reference 32-bit linear congruential generator.
///
/// `next = value * 1664525 + 1013904223 (mod 2^32)`, emitted as
/// `next / 2^32`. Two generators built from the same seed emit identical
/// streams.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Lcg {
    value: u32,
}

impl Lcg {
    /// Creates a generator from an integer seed.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { value: seed }
    }
}

impl RandomSource for Lcg {
    fn next_unit(&mut self) -> f64 {
        self.value = self
            .value
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        f64::from(self.value) / LCG_MODULUS
    }
}

/// Adapter exposing any `rand` generator as a [`RandomSource`].
///
/// Lets the engine run from a general-purpose generator such as `StdRng`
/// without touching simulation code.
#[derive(Debug, Clone)]
pub struct EntropySource<R> {
    inner: R,
}

impl<R: RngCore> EntropySource<R> {
    /// Wraps a `rand` generator.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: RngCore> RandomSource for EntropySource<R> {
    fn next_unit(&mut self) -> f64 {
        self.inner.r#gen::<f64>()
    }
}
