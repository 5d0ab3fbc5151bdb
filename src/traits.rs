//! Serialization is covered by a trait so that callers storing keys and ciphertexts behind a
//! trait object (e.g. a pluggable key store) aren't tied to the concrete types.

use crate::Error;

/// Canonical textual serialization and deserialization.
///
/// # Examples
/// ```
/// use blindstore_she::traits::SerDes;
/// use blindstore_she::PrivateKey;
///
/// let sk = PrivateKey::generate(60, 8)?;
/// let text = sk.to_text();
/// let sk2 = PrivateKey::from_text(&text)?;
/// assert_eq!(sk.etha(), sk2.etha());
/// # Ok::<(), blindstore_she::Error>(())
/// ```
pub trait SerDes {
    /// Produces the canonical textual form: base-62 fields separated by `/`.
    fn to_text(&self) -> String;

    /// Parses the textual form produced by [`SerDes::to_text`].
    ///
    /// # Errors
    /// Returns [`Error::ParameterInvalid`] on a malformed or incomplete field.
    fn from_text(text: &str) -> Result<Self, Error>
    where
        Self: Sized;
}
