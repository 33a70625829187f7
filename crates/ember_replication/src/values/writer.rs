//! Bit-level writer for section words.
//!
//! Values are packed LSB-first into 32-bit words. A value that crosses a
//! word boundary continues in the low bits of the next word, so a u64
//! occupies two words with its low half first.

use crate::{BLOCK_BITS, BLOCK_BYTES};

/// Packs values into a run of 32-bit words.
#[derive(Clone, Debug, Default)]
pub struct BlockWriter {
    words: Vec<u32>,
    cursor: usize,
}

impl BlockWriter {
    /// Creates an empty writer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: Vec::new(),
            cursor: 0,
        }
    }

    /// Starts a new run of `block_count` zeroed words.
    pub fn reset(&mut self, block_count: usize) {
        self.words.clear();
        self.words.resize(block_count, 0);
        self.cursor = 0;
    }

    /// Moves the cursor to `bit`, counted from the start of the run.
    #[inline]
    pub fn seek(&mut self, bit: usize) {
        debug_assert!(bit <= self.words.len() * BLOCK_BITS);
        self.cursor = bit;
    }

    /// Current cursor position in bits.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Writes the low `width` bits of `value` and advances the cursor.
    pub fn write_bits(&mut self, value: u64, width: usize) {
        debug_assert!(width <= 64);
        debug_assert!(self.cursor + width <= self.words.len() * BLOCK_BITS);

        let mut remaining = width;
        let mut value = if width == 64 { value } else { value & ((1u64 << width) - 1) };

        while remaining > 0 {
            let word = self.cursor / BLOCK_BITS;
            let shift = self.cursor % BLOCK_BITS;
            let take = remaining.min(BLOCK_BITS - shift);
            // take <= 32, so neither shift below can overflow.
            let chunk = value & ((1u64 << take) - 1);

            #[allow(clippy::cast_possible_truncation)]
            {
                self.words[word] |= (chunk as u32) << shift;
            }

            value >>= take;
            remaining -= take;
            self.cursor += take;
        }
    }

    /// Words of the current run.
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Appends the run to `out`, each word little-endian.
    pub fn write_le(&self, out: &mut Vec<u8>) {
        out.reserve(self.words.len() * BLOCK_BYTES);
        for word in &self.words {
            out.extend_from_slice(&word.to_le_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_pack_lsb_first() {
        let mut w = BlockWriter::new();
        w.reset(1);
        w.write_bits(0x11, 8);
        w.write_bits(0x22, 8);
        w.write_bits(0x33, 8);
        w.write_bits(0x44, 8);
        assert_eq!(w.words(), &[0x4433_2211]);
    }

    #[test]
    fn test_u64_low_word_first() {
        let mut w = BlockWriter::new();
        w.reset(2);
        w.write_bits(0x1122_3344_5566_7788, 64);
        assert_eq!(w.words(), &[0x5566_7788, 0x1122_3344]);

        let mut out = Vec::new();
        w.write_le(&mut out);
        assert_eq!(out, vec![0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]);
    }

    #[test]
    fn test_bits_and_seek() {
        let mut w = BlockWriter::new();
        w.reset(2);
        w.write_bits(1, 1);
        w.write_bits(0, 1);
        w.write_bits(1, 1);
        w.seek(32);
        w.write_bits(0xFFFF_FFFF, 32);
        assert_eq!(w.words(), &[0b101, 0xFFFF_FFFF]);
        assert_eq!(w.position(), 64);
    }

    #[test]
    fn test_value_is_masked_to_width() {
        let mut w = BlockWriter::new();
        w.reset(1);
        w.write_bits(u64::MAX, 16);
        assert_eq!(w.words(), &[0x0000_FFFF]);
    }

    #[test]
    fn test_reset_zeroes() {
        let mut w = BlockWriter::new();
        w.reset(1);
        w.write_bits(0xAB, 8);
        w.reset(1);
        assert_eq!(w.words(), &[0]);
    }
}
