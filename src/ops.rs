//! The homomorphic operators: `xor_many` (elementwise XOR over N ciphertexts), `sumprod`
//! (AND-of-sums row-equality test against a plaintext shard), and `dot` (bitwise dot product —
//! the PIR server response). Each interleaves modular reductions to keep intermediate operands
//! bounded near `|x|` in size; the reduction schedules below (every 5 additions, every
//! multiplication step) are a tuning knob, not a correctness contract.

use crate::bigint::Natural;
use crate::cipher::Ciphertext;
use crate::error::ensure;
use crate::keys::PublicKey;
use crate::shard::PlaintextShard;
use crate::Error;

/// How many additions accumulate before an intermediate reduction modulo `x`.
const REDUCE_EVERY: usize = 5;

/// Elementwise XOR of `cs`, an ordered sequence of ciphertexts that must all share the same
/// length. Plaintext XOR is realized as the additive sum of the underlying integers, since a
/// plaintext bit is the LSB of a reduction modulo `p`.
///
/// # Errors
/// Returns [`Error::ParameterInvalid`] if `cs` is empty, and [`Error::ShapeMismatch`] if any
/// ciphertext in `cs` has a different length than the first, or if that length is zero.
pub fn xor_many(pk: &PublicKey, cs: &[Ciphertext]) -> Result<Ciphertext, Error> {
    ensure!(!cs.is_empty(), ParameterInvalid, "xor_many requires at least one ciphertext");
    let width = cs[0].len();
    ensure!(width != 0, ShapeMismatch, "ciphertexts must carry at least one element");
    for c in cs {
        ensure!(c.len() == width, ShapeMismatch, "all ciphertexts must share the same length");
    }

    let x = pk.modulus();
    let mut out = Vec::with_capacity(width);
    for j in 0..width {
        let mut acc = Natural::zero();
        for (i, c) in cs.iter().enumerate() {
            acc = acc.add(&c.elements()[j]);
            if (i + 1) % REDUCE_EVERY == 0 {
                acc = acc.rem_euclid(x);
            }
        }
        out.push(acc.rem_euclid(x));
    }
    Ok(Ciphertext(out))
}

/// AND-of-sums row-equality test: row `i` of the output is 1 iff row `i` of `shard` equals the
/// plaintext bits encrypted in `a`, tested over the row width — `a` is indexed by row width, not
/// by the shard's flattened size, since the latter would re-visit bits of later rows whenever
/// `shard` holds more than one row.
///
/// # Errors
/// Returns [`Error::ShapeMismatch`] if `shard`'s row width is zero or exceeds `a.len()`.
pub fn sumprod(pk: &PublicKey, a: &Ciphertext, shard: &PlaintextShard) -> Result<Ciphertext, Error> {
    let width = shard.row_width();
    ensure!(width != 0, ShapeMismatch, "shard row width must be nonzero");
    ensure!(a.len() >= width, ShapeMismatch, "ciphertext shorter than shard row width");

    let x = pk.modulus();
    let one = Natural::one();
    let mut out = Vec::with_capacity(shard.entry_count());
    for row in 0..shard.entry_count() {
        let mut acc = Natural::one();
        for (j, a_j) in a.elements().iter().enumerate().take(width) {
            let beta = shard.get_bit(row, j);
            let beta_val = if beta { Natural::one() } else { Natural::zero() };
            let a_j = if a_j >= x { a_j.rem_euclid(x) } else { a_j.clone() };
            let term = a_j.add(&beta_val).add(&one);
            let term = if &term >= x { term.rem_euclid(x) } else { term };
            acc = acc.mul(&term).rem_euclid(x);
        }
        out.push(acc);
    }
    Ok(Ciphertext(out))
}

/// Bitwise dot product: column `j` of the output is the homomorphic XOR-sum of `g[i]` over rows
/// `i` where `shard[i][j] == 1` — a PIR server response against index encryption `g`.
///
/// # Errors
/// Returns [`Error::ShapeMismatch`] if `shard.bit_size() == 0` or `g.len() < shard.entry_count()`.
pub fn dot(pk: &PublicKey, g: &Ciphertext, shard: &PlaintextShard) -> Result<Ciphertext, Error> {
    ensure!(shard.bit_size() != 0, ShapeMismatch, "shard must carry at least one bit");
    ensure!(g.len() >= shard.entry_count(), ShapeMismatch, "ciphertext shorter than shard entry count");

    let x = pk.modulus();
    let width = shard.row_width();
    let mut out = Vec::with_capacity(width);
    for j in 0..width {
        let mut acc = Natural::zero();
        let mut count = 0usize;
        for i in 0..shard.entry_count() {
            if shard.get_bit(i, j) {
                acc = acc.add(&g.elements()[i]);
                count += 1;
                if count % REDUCE_EVERY == 0 {
                    acc = acc.rem_euclid(x);
                }
            }
        }
        out.push(acc.rem_euclid(x));
    }
    Ok(Ciphertext(out))
}
