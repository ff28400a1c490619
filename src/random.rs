//! Deterministic random source.
//!
//! [`Mulberry32`] is a tiny 32-bit state generator. It is fully described by
//! its seed, so two runs with the same seed and the same sequence of calls
//! produce bit-identical draws. The optimizer consumes randomness only through
//! [`UnitRng`], which maps raw `u32` output to floats in `[0, 1)`.
//!
//! # Consumption order
//!
//! Reproducibility depends on the *order* of draws as much as on the seed.
//! Every stochastic step in this crate draws sequentially from a single
//! generator; nothing that consumes randomness runs in parallel.

use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};

const INCREMENT: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Mulberry32 pseudo-random generator.
///
/// # Examples
///
/// ```
/// use u_genesis::random::{create_rng, UnitRng};
///
/// let mut a = create_rng(1337);
/// let mut b = create_rng(1337);
/// assert_eq!(a.next_unit(), b.next_unit());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Creates a generator from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let t = self.state;
        let mut x = (t ^ (t >> 15)).wrapping_mul(1 | t);
        x ^= x.wrapping_add((x ^ (x >> 7)).wrapping_mul(61 | x));
        x ^ (x >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Keeps the low 32 bits of `state` verbatim instead of scrambling it,
    /// so a caller-supplied integer seed maps directly onto generator state.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}

/// Creates a seeded generator.
pub fn create_rng(seed: u64) -> Mulberry32 {
    Mulberry32::seed_from_u64(seed)
}

/// A seed for runs where the caller did not ask for reproducibility.
///
/// Wall-clock milliseconds, or OS entropy if the clock reads before 1970.
#[cfg(not(target_arch = "wasm32"))]
pub fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_millis() as u64,
        Err(_) => rand::random(),
    }
}

/// A seed for runs where the caller did not ask for reproducibility.
///
/// `wasm32` has no system clock, so this draws OS entropy.
#[cfg(target_arch = "wasm32")]
pub fn entropy_seed() -> u64 {
    rand::random()
}

/// Float draws on top of any [`RngCore`].
///
/// These are the only draw shapes the optimizer uses. Each method consumes
/// exactly one `u32` from the underlying generator.
pub trait UnitRng: RngCore {
    /// A float in `[0, 1)` with 32 bits of resolution.
    fn next_unit(&mut self) -> f64 {
        self.next_u32() as f64 / TWO_POW_32
    }

    /// A float in `[lo, hi)`. Works for reversed or empty ranges as well.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_unit()
    }

    /// An index in `0..n`.
    ///
    /// Returns 0 when `n == 0`; callers guard against empty collections.
    fn pick_index(&mut self, n: usize) -> usize {
        let idx = (self.next_unit() * n as f64) as usize;
        idx.min(n.saturating_sub(1))
    }
}

impl<R: RngCore + ?Sized> UnitRng for R {}
