//! The server-side plaintext database: an ordered, equal-width bit matrix with O(1) bit access.
//!
//! Rows are packed into `u64` words (rather than one `bool` per bit) so that a shard with many
//! rows of modest width stays compact, the same role a packed bit-vector collaborator plays in
//! the reference construction — reimplemented in-crate here since that collaborator type is
//! explicitly out of scope.

use crate::Error;

/// An ordered sequence of equal-width bit vectors, owned by the server side of a PIR protocol.
#[derive(Clone, Debug, Default)]
pub struct PlaintextShard {
    row_width: usize,
    rows: Vec<Vec<u64>>,
}

const WORD_BITS: usize = 64;

fn words_for(row_width: usize) -> usize { row_width.div_ceil(WORD_BITS) }

fn pack(bits: &[bool]) -> Vec<u64> {
    let mut words = vec![0u64; words_for(bits.len())];
    for (i, &bit) in bits.iter().enumerate() {
        if bit {
            words[i / WORD_BITS] |= 1u64 << (i % WORD_BITS);
        }
    }
    words
}

impl PlaintextShard {
    /// Creates an empty shard whose rows, once appended, must have exactly `row_width` bits.
    #[must_use]
    pub fn new(row_width: usize) -> Self { PlaintextShard { row_width, rows: Vec::new() } }

    /// Appends a row. `bits.len()` must equal this shard's row width.
    ///
    /// # Errors
    /// Returns [`Error::ShapeMismatch`] if `bits.len() != self.row_width()`.
    pub fn append_row(&mut self, bits: &[bool]) -> Result<(), Error> {
        crate::error::ensure!(
            bits.len() == self.row_width,
            ShapeMismatch,
            "row width does not match shard"
        );
        self.rows.push(pack(bits));
        Ok(())
    }

    /// Replaces row `i` in place. `bits.len()` must equal this shard's row width.
    ///
    /// # Errors
    /// Returns [`Error::ShapeMismatch`] if `bits.len() != self.row_width()`, and
    /// [`Error::ParameterInvalid`] if `i` is out of range.
    pub fn update_row(&mut self, i: usize, bits: &[bool]) -> Result<(), Error> {
        crate::error::ensure!(
            bits.len() == self.row_width,
            ShapeMismatch,
            "row width does not match shard"
        );
        crate::error::ensure!(i < self.rows.len(), ParameterInvalid, "row index out of range");
        self.rows[i] = pack(bits);
        Ok(())
    }

    /// Reads bit `(row, column)`. Panics (as an internal, caller-verified invariant rather than
    /// a recoverable error — see DESIGN.md) if either index is out of range, mirroring the
    /// "O(1) access with caller-checked bounds" contract of the packed-bit-vector collaborator
    /// this type replaces.
    #[must_use]
    pub fn get_bit(&self, row: usize, column: usize) -> bool {
        debug_assert!(row < self.rows.len(), "row out of range");
        debug_assert!(column < self.row_width, "column out of range");
        let word = self.rows[row][column / WORD_BITS];
        (word >> (column % WORD_BITS)) & 1 == 1
    }

    /// Number of rows currently stored.
    #[must_use]
    pub fn entry_count(&self) -> usize { self.rows.len() }

    /// Total number of bits stored across all rows (`entry_count() * row_width()`).
    #[must_use]
    pub fn bit_size(&self) -> usize { self.rows.len() * self.row_width }

    /// The fixed width of every row in this shard.
    #[must_use]
    pub fn row_width(&self) -> usize { self.row_width }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_and_read_bits() {
        let mut shard = PlaintextShard::new(8);
        shard.append_row(&[true, true, true, false, false, false, false, false]).unwrap();
        shard.append_row(&[true; 8]).unwrap();
        assert_eq!(shard.entry_count(), 2);
        assert_eq!(shard.bit_size(), 16);
        assert!(shard.get_bit(0, 0));
        assert!(!shard.get_bit(0, 3));
        assert!(shard.get_bit(1, 7));
    }

    #[test]
    fn rejects_mismatched_row_width() {
        let mut shard = PlaintextShard::new(8);
        assert!(shard.append_row(&[true, false]).is_err());
    }

    #[test]
    fn update_row_replaces_in_place() {
        let mut shard = PlaintextShard::new(4);
        shard.append_row(&[false, false, false, false]).unwrap();
        shard.update_row(0, &[true, false, true, false]).unwrap();
        assert!(shard.get_bit(0, 0));
        assert!(shard.get_bit(0, 2));
        assert!(shard.update_row(1, &[true, false, true, false]).is_err());
    }
}
