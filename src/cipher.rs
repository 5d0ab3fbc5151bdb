//! Per-bit encryption and decryption via the approximate-GCD construction.

use crate::bigint::Natural;
use crate::error::ensure;
use crate::keys::{upper_bound, PrivateKey, PublicKey};
use crate::random::uniform_range;
use crate::traits::SerDes;
use crate::Error;
use rand_core::CryptoRngCore;

#[cfg(feature = "default-rng")]
use rand_core::OsRng;

/// An ordered sequence of big integers, one per encrypted plaintext bit, produced either by
/// [`encrypt`] or by one of the homomorphic operators in [`crate::ops`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ciphertext(pub(crate) Vec<Natural>);

impl Ciphertext {
    /// Number of encrypted elements.
    #[must_use]
    pub fn len(&self) -> usize { self.0.len() }

    /// Whether this ciphertext carries no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub(crate) fn elements(&self) -> &[Natural] { &self.0 }
}

/// Encrypts `m`, a vector of plaintext bits, under `pk`/`sk`, using the operating system's
/// default random number generator.
///
/// # Errors
/// Returns [`Error::ShapeMismatch`] if `pk` and `sk` were generated under different `s` or `l`,
/// and [`Error::EntropyUnavailable`] if the entropy source cannot be read.
#[cfg(feature = "default-rng")]
pub fn encrypt(pk: &PublicKey, sk: &PrivateKey, m: &[bool]) -> Result<Ciphertext, Error> {
    encrypt_with_rng(pk, sk, m, &mut OsRng)
}

/// As [`encrypt`], drawing randomness from the caller-supplied RNG.
///
/// # Errors
/// Same as [`encrypt`].
pub fn encrypt_with_rng(
    pk: &PublicKey, sk: &PrivateKey, m: &[bool], rng: &mut impl CryptoRngCore,
) -> Result<Ciphertext, Error> {
    ensure!(pk.l() == sk.l(), ShapeMismatch, "public and private keys disagree on l");
    ensure!(pk.s() == sk.s(), ShapeMismatch, "public and private keys disagree on s");

    let u = upper_bound(&sk.p, pk.gamma());
    let u_minus_one = u.sub(&Natural::one());
    let noise_bound = Natural::pow2(sk.s).sub(&Natural::one());

    let mut out = Vec::with_capacity(m.len());
    for &bit in m {
        let q = uniform_range(&Natural::one(), &u_minus_one, rng)?;
        let r = uniform_range(&Natural::one(), &noise_bound, rng)?;
        let bit_val = if bit { Natural::one() } else { Natural::zero() };
        let c = q.mul(&sk.p).add(&r.add(&r)).add(&bit_val).rem_euclid(pk.modulus());
        out.push(c);
    }
    Ok(Ciphertext(out))
}

/// Decrypts every element of `c` under `sk`, returning the recovered plaintext bits.
#[must_use]
pub fn decrypt(sk: &PrivateKey, c: &Ciphertext) -> Vec<bool> {
    c.0.iter().map(|elem| elem.rem_euclid(&sk.p).lsb()).collect()
}

impl SerDes for Ciphertext {
    /// `(<element_b62> "/")*`, trailing-slash-terminated. The empty ciphertext serializes to the
    /// empty string.
    fn to_text(&self) -> String {
        let mut out = String::new();
        for elem in &self.0 {
            out.push_str(&elem.to_base62());
            out.push('/');
        }
        out
    }

    fn from_text(text: &str) -> Result<Self, Error> {
        if text.is_empty() {
            return Ok(Ciphertext(Vec::new()));
        }
        ensure!(text.ends_with('/'), ParameterInvalid, "ciphertext text must be slash-terminated");
        let body = &text[..text.len() - 1];
        let elements = body
            .split('/')
            .map(Natural::from_base62)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Ciphertext(elements))
    }
}
