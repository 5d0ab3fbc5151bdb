//! Key generation: a private scalar `p` and a matching public modulus `x = q0 * p`.

use crate::bigint::Natural;
use crate::error::ensure;
use crate::random::{uniform_odd_bits, uniform_odd_range};
use crate::traits::SerDes;
use crate::Error;
use rand_core::CryptoRngCore;

#[cfg(feature = "default-rng")]
use rand_core::OsRng;

/// The private half of a key pair: the DGHV secret `p`, odd and exactly `etha` bits, alongside
/// the parameters it was generated under.
#[derive(Clone)]
pub struct PrivateKey {
    pub(crate) p: Natural,
    pub(crate) etha: u32,
    pub(crate) s: u32,
    pub(crate) l: u32,
}

/// The public half of a key pair: `x = q0 * p`, a "level-0 encryption of zero" that hides `p`
/// inside a `gamma`-bit modulus.
#[derive(Clone)]
pub struct PublicKey {
    pub(crate) x: Natural,
    pub(crate) gamma: u32,
    pub(crate) s: u32,
    pub(crate) l: u32,
}

impl PrivateKey {
    /// Generates a private key for security parameter `s` and input bit length `l`, using the
    /// operating system's default random number generator.
    ///
    /// # Errors
    /// Returns [`Error::ParameterInvalid`] if `s == 0 || l == 0`, and
    /// [`Error::EntropyUnavailable`] if the entropy source cannot be read.
    #[cfg(feature = "default-rng")]
    pub fn generate(s: u32, l: u32) -> Result<Self, Error> { Self::generate_with_rng(s, l, &mut OsRng) }

    /// As [`PrivateKey::generate`], drawing randomness from the caller-supplied RNG.
    ///
    /// # Errors
    /// Same as [`PrivateKey::generate`].
    pub fn generate_with_rng(s: u32, l: u32, rng: &mut impl CryptoRngCore) -> Result<Self, Error> {
        ensure!(s != 0, ParameterInvalid, "security parameter s must be nonzero");
        ensure!(l != 0, ParameterInvalid, "input bit length l must be nonzero");
        let etha = (s + 3) * l;
        let p = uniform_odd_bits(etha, rng)?;
        Ok(PrivateKey { p, etha, s, l })
    }

    /// Bit length of the private scalar `p` (`(s+3)*l`).
    #[must_use]
    pub fn etha(&self) -> u32 { self.etha }

    /// The security parameter this key was generated under.
    #[must_use]
    pub fn s(&self) -> u32 { self.s }

    /// The supported input bit length this key was generated under.
    #[must_use]
    pub fn l(&self) -> u32 { self.l }
}

impl PublicKey {
    /// Generates the public key matching `sk`, using the operating system's default random
    /// number generator.
    ///
    /// # Errors
    /// Returns [`Error::EntropyUnavailable`] if the entropy source cannot be read.
    #[cfg(feature = "default-rng")]
    pub fn generate(sk: &PrivateKey) -> Result<Self, Error> { Self::generate_with_rng(sk, &mut OsRng) }

    /// As [`PublicKey::generate`], drawing randomness from the caller-supplied RNG.
    ///
    /// # Errors
    /// Same as [`PublicKey::generate`].
    pub fn generate_with_rng(sk: &PrivateKey, rng: &mut impl CryptoRngCore) -> Result<Self, Error> {
        let gamma = 5 * (sk.s + 3) * sk.l / 2;
        let upper = upper_bound(&sk.p, gamma);
        let q0 = uniform_odd_range(&Natural::one(), &upper.sub(&Natural::one()), rng)?;
        let x = q0.mul(&sk.p);
        Ok(PublicKey { x, gamma, s: sk.s, l: sk.l })
    }

    /// Bit length of the public modulus `x` (`5*(s+3)*l/2`, integer division).
    #[must_use]
    pub fn gamma(&self) -> u32 { self.gamma }

    /// The security parameter this key was generated under.
    #[must_use]
    pub fn s(&self) -> u32 { self.s }

    /// The supported input bit length this key was generated under.
    #[must_use]
    pub fn l(&self) -> u32 { self.l }

    pub(crate) fn modulus(&self) -> &Natural { &self.x }
}

/// `U = ceil(2^gamma / p)`, recomputed fresh at each call site rather than cached on the key.
pub(crate) fn upper_bound(p: &Natural, gamma: u32) -> Natural { Natural::pow2(gamma).div_ceil(p) }

/// Splits `text` on `/` into exactly `n` non-empty fields, parsing each as base-62.
fn split_fields(text: &str, n: usize) -> Result<Vec<Natural>, Error> {
    let parts: Vec<&str> = text.split('/').collect();
    ensure!(parts.len() == n, ParameterInvalid, "wrong field count");
    parts.iter().map(|p| Natural::from_base62(p)).collect()
}

impl SerDes for PrivateKey {
    /// `<p_b62> "/" <etha_b62> "/" <s_b62> "/" <l_b62>`.
    fn to_text(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.p.to_base62(),
            Natural::from(u64::from(self.etha)).to_base62(),
            Natural::from(u64::from(self.s)).to_base62(),
            Natural::from(u64::from(self.l)).to_base62(),
        )
    }

    fn from_text(text: &str) -> Result<Self, Error> {
        let fields = split_fields(text, 4)?;
        let p = fields[0].clone();
        let etha = fields[1].to_u32()?;
        let s = fields[2].to_u32()?;
        let l = fields[3].to_u32()?;
        ensure!(etha == (s + 3) * l, ParameterInvalid, "etha does not match s and l");
        Ok(PrivateKey { p, etha, s, l })
    }
}

impl SerDes for PublicKey {
    /// `<x_b62> "/" <gamma_b62> "/" <s_b62> "/" <l_b62>`.
    fn to_text(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.x.to_base62(),
            Natural::from(u64::from(self.gamma)).to_base62(),
            Natural::from(u64::from(self.s)).to_base62(),
            Natural::from(u64::from(self.l)).to_base62(),
        )
    }

    fn from_text(text: &str) -> Result<Self, Error> {
        let fields = split_fields(text, 4)?;
        let x = fields[0].clone();
        let gamma = fields[1].to_u32()?;
        let s = fields[2].to_u32()?;
        let l = fields[3].to_u32()?;
        Ok(PublicKey { x, gamma, s, l })
    }
}
