//! Cryptographically secure random number generation.

use rand_core::{CryptoRng, CryptoRngCore, OsRng, RngCore};

use crate::error::RandomError;

/// Cryptographically secure random number generator.
///
/// This is a thin wrapper around `OsRng` that provides a consistent interface
/// for cryptographic randomness throughout the library. It holds no state, so
/// constructing one per call is free and it is safe to use from any thread.
#[derive(Clone, Copy, Debug)]
pub struct SecureRng(OsRng);

impl SecureRng {
    /// Creates a new cryptographically secure random number generator.
    pub fn new() -> Self {
        Self(OsRng)
    }
}

impl Default for SecureRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for SecureRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.0.try_fill_bytes(dest)
    }
}

impl CryptoRng for SecureRng {}

/// Returns an integer uniformly distributed in `[min, max)`.
///
/// # Errors
///
/// Returns [`RandomError::EmptyRange`] if `max <= min`, or
/// [`RandomError::Entropy`] if the generator fails.
pub fn uniform_in_range<R>(rng: &mut R, min: usize, max: usize) -> Result<usize, RandomError>
where
    R: CryptoRngCore + ?Sized,
{
    if max <= min {
        return Err(RandomError::EmptyRange { min, max });
    }
    let span = (max - min) as u64;
    Ok(min + below(rng, span)? as usize)
}

/// Returns an integer uniformly distributed in `[0, limit)`.
///
/// # Errors
///
/// Returns [`RandomError::EmptyRange`] if `limit` is zero, or
/// [`RandomError::Entropy`] if the generator fails.
pub fn uniform_index<R>(rng: &mut R, limit: usize) -> Result<usize, RandomError>
where
    R: CryptoRngCore + ?Sized,
{
    uniform_in_range(rng, 0, limit)
}

/// Rejection sampling over 64-bit draws. `span` must be nonzero.
fn below<R>(rng: &mut R, span: u64) -> Result<u64, RandomError>
where
    R: CryptoRngCore + ?Sized,
{
    // Largest multiple of `span` representable; draws at or above it are biased.
    let zone = u64::MAX - (u64::MAX % span);
    let mut buf = [0u8; 8];
    loop {
        rng.try_fill_bytes(&mut buf)?;
        let value = u64::from_le_bytes(buf);
        if value < zone {
            return Ok(value % span);
        }
    }
}
