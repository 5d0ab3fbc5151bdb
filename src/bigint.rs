//! Thin façade over [`num_bigint`], exposing exactly the arbitrary-precision operations the
//! DGHV scheme needs and nothing else: construction, addition, multiplication, non-negative
//! Euclidean modulo, ceiling division, parity, and the canonical base-62 textual form.
//!
//! Every value produced by this module is non-negative by construction (`BigUint`), so modular
//! reduction is always the non-negative Euclidean remainder — there is no sign to get wrong
//! because there is no signed representation in the first place.

use crate::Error;
use num_bigint::BigUint;
use num_integer::Integer as _;
use num_traits::{One, Zero};
use std::fmt;

/// The base-62 alphabet: digits, then uppercase, then lowercase — the numeric ordering the
/// serialization grammar relies on.
const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// An arbitrary-precision non-negative integer.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Natural(BigUint);

impl Natural {
    /// The value zero.
    #[must_use]
    pub(crate) fn zero() -> Self { Natural(BigUint::zero()) }

    /// The value one.
    #[must_use]
    pub(crate) fn one() -> Self { Natural(BigUint::one()) }

    /// `2^n`.
    #[must_use]
    pub(crate) fn pow2(n: u32) -> Self { Natural(BigUint::one() << n) }

    /// The bit length of this value (0 for zero).
    #[must_use]
    pub(crate) fn bits(&self) -> u64 { self.0.bits() }

    /// `self + other`.
    #[must_use]
    pub(crate) fn add(&self, other: &Self) -> Self { Natural(&self.0 + &other.0) }

    /// `self * other`.
    #[must_use]
    pub(crate) fn mul(&self, other: &Self) -> Self { Natural(&self.0 * &other.0) }

    /// `self - other`.
    ///
    /// # Panics
    /// Panics if `other > self`; every call site subtracts a smaller bound from a larger one by
    /// construction.
    #[must_use]
    pub(crate) fn sub(&self, other: &Self) -> Self { Natural(&self.0 - &other.0) }

    /// Non-negative Euclidean remainder of `self` modulo `modulus`.
    ///
    /// # Panics
    /// Panics if `modulus` is zero; callers only reduce modulo the public modulus `x`, which is
    /// never zero for a validly constructed key.
    #[must_use]
    pub(crate) fn rem_euclid(&self, modulus: &Self) -> Self {
        debug_assert!(!modulus.0.is_zero(), "reduction modulus must not be zero");
        Natural(&self.0 % &modulus.0)
    }

    /// `⌈self / other⌉`.
    ///
    /// # Panics
    /// Panics if `other` is zero.
    #[must_use]
    pub(crate) fn div_ceil(&self, other: &Self) -> Self { Natural(self.0.div_ceil(&other.0)) }

    /// Whether this value is odd.
    #[must_use]
    pub(crate) fn is_odd(&self) -> bool { self.0.is_odd() }

    /// Whether this value is zero.
    #[must_use]
    pub(crate) fn is_zero(&self) -> bool { self.0.is_zero() }

    /// The least significant bit, as a `bool` (used to recover a plaintext bit after decryption).
    #[must_use]
    pub(crate) fn lsb(&self) -> bool { self.0.bit(0) }

    pub(crate) fn as_biguint(&self) -> &BigUint { &self.0 }

    /// Narrows this value to a `u32`, used when parsing the small scalar fields (`etha`, `s`,
    /// `l`, `gamma`) out of a serialized key.
    ///
    /// # Errors
    /// Returns [`Error::ParameterInvalid`] if the value does not fit in 32 bits.
    pub(crate) fn to_u32(&self) -> Result<u32, Error> {
        let digits = self.0.to_u32_digits();
        match digits.as_slice() {
            [] => Ok(0),
            [only] => Ok(*only),
            _ => Err(Error::ParameterInvalid("scalar field exceeds 32 bits".into())),
        }
    }

    pub(crate) fn from_biguint(v: BigUint) -> Self { Natural(v) }

    /// Serializes this value as base-62 ASCII text using the `0-9A-Za-z` alphabet, most
    /// significant digit first. Zero serializes to `"0"`.
    #[must_use]
    pub(crate) fn to_base62(&self) -> String {
        if self.0.is_zero() {
            return "0".to_string();
        }
        let sixty_two = BigUint::from(62u8);
        let mut digits = Vec::new();
        let mut v = self.0.clone();
        while !v.is_zero() {
            let (q, r) = v.div_rem(&sixty_two);
            let r = r.to_u32_digits().first().copied().unwrap_or(0);
            digits.push(ALPHABET[r as usize]);
            v = q;
        }
        digits.reverse();
        String::from_utf8(digits).expect("alphabet is ASCII")
    }

    /// Parses a base-62 string produced by [`Natural::to_base62`].
    ///
    /// # Errors
    /// Returns [`Error::ParameterInvalid`] if the string is empty or contains a byte outside the
    /// `0-9A-Za-z` alphabet.
    pub(crate) fn from_base62(s: &str) -> Result<Self, Error> {
        if s.is_empty() {
            return Err(Error::ParameterInvalid("empty base-62 field".into()));
        }
        let mut acc = BigUint::zero();
        let sixty_two = BigUint::from(62u8);
        for b in s.bytes() {
            let digit = digit_value(b).ok_or_else(|| {
                Error::ParameterInvalid(format!("byte {b:#x} is not valid base-62"))
            })?;
            acc = acc * &sixty_two + BigUint::from(digit);
        }
        Ok(Natural(acc))
    }
}

fn digit_value(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some(u32::from(b - b'0')),
        b'A'..=b'Z' => Some(u32::from(b - b'A') + 10),
        b'a'..=b'z' => Some(u32::from(b - b'a') + 36),
        _ => None,
    }
}

impl From<u64> for Natural {
    fn from(v: u64) -> Self { Natural(BigUint::from(v)) }
}

impl fmt::Debug for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Natural({} bits)", self.bits())
    }
}
