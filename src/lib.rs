#![deny(clippy::pedantic, warnings, missing_docs, unsafe_code)]
#![deny(absolute_paths_not_starting_with_crate, dead_code)]
#![deny(elided_lifetimes_in_paths, explicit_outlives_requirements, keyword_idents)]
#![deny(let_underscore_drop, macro_use_extern_crate, meta_variable_misuse, missing_abi)]
#![deny(non_ascii_idents, rust_2021_incompatible_closure_captures)]
#![deny(rust_2021_incompatible_or_patterns, rust_2021_prefixes_incompatible_syntax)]
#![deny(rust_2021_prelude_collisions, single_use_lifetimes, trivial_casts)]
#![deny(trivial_numeric_casts, unreachable_pub, unstable_features)]
#![deny(unused_extern_crates, unused_import_braces, unused_lifetimes, unused_macro_rules)]
#![deny(unused_qualifications, variant_size_differences)]
//
//! A somewhat-homomorphic encryption scheme over single bits, built on the approximate-GCD
//! hardness assumption (van Dijk, Gentry, Halevi, Vaikuntanathan). Ciphertexts support an
//! additive homomorphism (`xor_many`) and the two read patterns a private-information-retrieval
//! server needs against an encrypted index: a row-equality test (`sumprod`) and a bitwise dot
//! product (`dot`). There is no bootstrapping or ciphertext compression here — depth is bounded
//! by how often `x` gets reduced, not refreshed.
//!
//! Typical usage flow entails:
//! 1. The client picks a security parameter `s` and a supported plaintext bit length `l`, then
//!    runs [`PrivateKey::generate`] followed by [`PublicKey::generate`].
//! 2. The client serializes the public key (and any ciphertexts it sends) with [`traits::SerDes`]
//!    and hands them to the server; the private key never leaves the client.
//! 3. The server accumulates plaintext rows into a [`PlaintextShard`] and evaluates [`sumprod`]
//!    or [`dot`] against ciphertexts the client supplies, returning the resulting ciphertext.
//! 4. The client decrypts the response with [`decrypt`].

mod bigint;
mod cipher;
mod error;
mod keys;
mod ops;
mod random;
mod shard;

/// Serialization is covered by a trait so that callers storing keys and ciphertexts behind a
/// trait object aren't tied to the concrete types.
pub mod traits;

pub use cipher::{decrypt, Ciphertext};
pub use error::Error;
pub use keys::{PrivateKey, PublicKey};
pub use ops::{dot, sumprod, xor_many};
pub use shard::PlaintextShard;

#[cfg(feature = "default-rng")]
pub use cipher::encrypt;
pub use cipher::encrypt_with_rng;

/// The `rand_core` types are re-exported so that callers do not have to worry about pulling in
/// the exact correct version of `rand_core` themselves.
pub use rand_core::{CryptoRng, CryptoRngCore, Error as RngError, RngCore};
