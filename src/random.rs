//! Secure random source: uniform draws over `[a,b]`, their odd-only variants, and draws of an
//! exact bit length (MSB forced set), odd or not. Every draw reads the caller's
//! `CryptoRngCore` — `OsRng` by default — exactly once per accepted candidate; a failed read
//! surfaces [`Error::EntropyUnavailable`] instead of panicking.

use crate::bigint::Natural;
use crate::Error;
use num_bigint::BigUint;
use rand_core::CryptoRngCore;

/// Generous bound on rejection-sampling retries before giving up. A single retry succeeds with
/// probability >= 1/2 for the ranged draws below, so this is never exercised in practice; it
/// exists only to turn a theoretical infinite loop into a reported error.
const MAX_REJECTION_ATTEMPTS: u32 = 10_000;

fn fill(rng: &mut impl CryptoRngCore, buf: &mut [u8]) -> Result<(), Error> {
    rng.try_fill_bytes(buf).map_err(|_| Error::EntropyUnavailable)
}

/// Draws `n` uniformly random bits and returns the big-endian value with bit `n-1` (the most
/// significant bit) forced to 1, i.e. a uniform value in `[2^(n-1), 2^n)`.
///
/// # Errors
/// Returns [`Error::EntropyUnavailable`] if the entropy source cannot be read, and
/// [`Error::ParameterInvalid`] if `n == 0`.
pub(crate) fn uniform_bits(n: u32, rng: &mut impl CryptoRngCore) -> Result<Natural, Error> {
    if n == 0 {
        return Err(Error::ParameterInvalid("bit length must be nonzero".into()));
    }
    let mut bytes = vec![0u8; usize::try_from((n as u64 + 7) / 8).expect("fits in usize")];
    fill(rng, &mut bytes)?;
    mask_to_bits(&mut bytes, n);
    set_bit(&mut bytes, n - 1);
    Ok(Natural::from_biguint(BigUint::from_bytes_be(&bytes)))
}

/// As [`uniform_bits`], additionally forcing the least-significant bit to 1 so the result is odd.
///
/// # Errors
/// Same as [`uniform_bits`].
pub(crate) fn uniform_odd_bits(n: u32, rng: &mut impl CryptoRngCore) -> Result<Natural, Error> {
    let mut bytes = {
        if n == 0 {
            return Err(Error::ParameterInvalid("bit length must be nonzero".into()));
        }
        vec![0u8; usize::try_from((n as u64 + 7) / 8).expect("fits in usize")]
    };
    fill(rng, &mut bytes)?;
    mask_to_bits(&mut bytes, n);
    set_bit(&mut bytes, n - 1);
    set_bit(&mut bytes, 0);
    Ok(Natural::from_biguint(BigUint::from_bytes_be(&bytes)))
}

/// Draws a value uniformly from `[a, b]` inclusive, via rejection sampling over the smallest
/// byte buffer that can represent `b - a`.
///
/// # Errors
/// Returns [`Error::ParameterInvalid`] if `a > b`, [`Error::EntropyUnavailable`] if the entropy
/// source cannot be read or if rejection sampling fails to converge within an astronomically
/// generous retry budget.
pub(crate) fn uniform_range(a: &Natural, b: &Natural, rng: &mut impl CryptoRngCore) -> Result<Natural, Error> {
    if a > b {
        return Err(Error::ParameterInvalid("lower bound exceeds upper bound".into()));
    }
    let span = b.as_biguint() - a.as_biguint() + BigUint::from(1u8);
    let span = Natural::from_biguint(span);
    let k = u32::try_from(span.bits()).expect("span bit length fits u32");
    let byte_len = usize::try_from((u64::from(k) + 7) / 8).expect("fits in usize");
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let mut bytes = vec![0u8; byte_len];
        fill(rng, &mut bytes)?;
        mask_to_bits(&mut bytes, k);
        let candidate = Natural::from_biguint(BigUint::from_bytes_be(&bytes));
        if candidate < span {
            return Ok(a.add(&candidate));
        }
    }
    Err(Error::EntropyUnavailable)
}

/// As [`uniform_range`], but the result is additionally constrained to be odd (by re-drawing
/// until the sampled value is odd, mirroring the reference construction).
///
/// # Errors
/// Same as [`uniform_range`].
pub(crate) fn uniform_odd_range(a: &Natural, b: &Natural, rng: &mut impl CryptoRngCore) -> Result<Natural, Error> {
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let candidate = uniform_range(a, b, rng)?;
        if candidate.is_odd() {
            return Ok(candidate);
        }
    }
    Err(Error::EntropyUnavailable)
}

/// Zeroes the high bits of `bytes` above bit index `n - 1`, leaving exactly an `n`-bit value.
fn mask_to_bits(bytes: &mut [u8], n: u32) {
    if bytes.is_empty() {
        return;
    }
    let total_bits = u32::try_from(bytes.len()).expect("buffer length fits u32") * 8;
    let extra_bits = total_bits - n;
    if extra_bits == 0 {
        return;
    }
    let mask = 0xFFu8 >> extra_bits.min(8);
    bytes[0] &= mask;
}

/// Sets bit index `bit` (0 = least significant) in a big-endian buffer.
fn set_bit(bytes: &mut [u8], bit: u32) {
    let byte_index = bytes.len() - 1 - usize::try_from(bit / 8).expect("fits in usize");
    bytes[byte_index] |= 1 << (bit % 8);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn uniform_bits_has_exact_length_and_msb_set() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..50 {
            let v = uniform_bits(37, &mut rng).unwrap();
            assert_eq!(v.bits(), 37);
        }
    }

    #[test]
    fn uniform_odd_bits_is_odd_and_exact_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..50 {
            let v = uniform_odd_bits(129, &mut rng).unwrap();
            assert_eq!(v.bits(), 129);
            assert!(v.is_odd());
        }
    }

    #[test]
    fn uniform_range_stays_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let a = Natural::from(5);
        let b = Natural::from(9);
        for _ in 0..200 {
            let v = uniform_range(&a, &b, &mut rng).unwrap();
            assert!(v >= a && v <= b);
        }
    }

    #[test]
    fn uniform_range_rejects_inverted_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let a = Natural::from(9);
        let b = Natural::from(5);
        assert!(uniform_range(&a, &b, &mut rng).is_err());
    }

    #[test]
    fn uniform_odd_range_is_always_odd() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let a = Natural::from(1);
        let b = Natural::from(64);
        for _ in 0..200 {
            let v = uniform_odd_range(&a, &b, &mut rng).unwrap();
            assert!(v.is_odd());
        }
    }
}
