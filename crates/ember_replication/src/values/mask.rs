//! # Block Presence Mask
//!
//! One bit per block: set if that block's data follows in the payload.
//!
//! ## Wire Layout
//!
//! ```text
//! [word count: u8][word 0: u32 LE]...[word n-1: u32 LE]
//! ```
//!
//! The mask only grows when a bit is set, so it never carries trailing zero
//! words. An empty mask encodes as the single byte `0x00`. The count is one
//! byte, so blocks at or past [`MAX_MASK_BLOCKS`] cannot be marked.

use std::ops::BitOrAssign;

use crate::protocol::WireWriter;
use crate::schema::{Section, SectionSpan};
use crate::{BLOCK_BITS, MAX_MASK_WORDS};

/// First block index a mask cannot address.
pub const MAX_MASK_BLOCKS: usize = MAX_MASK_WORDS * BLOCK_BITS;

/// Presence mask over the blocks of one record or composite.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockMask {
    words: Vec<u32>,
}

impl BlockMask {
    /// Creates an empty mask.
    #[must_use]
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Marks `block` present, growing the mask as needed.
    ///
    /// Returns false, leaving the mask unchanged, if `block` is past what
    /// the count byte can address.
    #[inline]
    pub fn insert(&mut self, block: usize) -> bool {
        if block >= MAX_MASK_BLOCKS {
            return false;
        }
        let word = block / BLOCK_BITS;
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= 1 << (block % BLOCK_BITS);
        true
    }

    /// Checks whether `block` is marked.
    #[inline]
    #[must_use]
    pub fn contains(&self, block: usize) -> bool {
        self.words
            .get(block / BLOCK_BITS)
            .is_some_and(|word| (word >> (block % BLOCK_BITS)) & 1 == 1)
    }

    /// Marks every block of `span`, shifted right by `offset` blocks.
    ///
    /// Returns false, leaving the mask unchanged, if any shifted block is
    /// unaddressable.
    pub fn insert_span(&mut self, span: SectionSpan, offset: usize) -> bool {
        let span = span.shifted(offset);
        if span.end() > MAX_MASK_BLOCKS {
            return false;
        }
        for block in span.block_start..span.end() {
            self.insert(block);
        }
        true
    }

    /// Marks every block of `section`, shifted right by `offset` blocks.
    #[inline]
    pub fn insert_section(&mut self, section: &Section, offset: usize) -> bool {
        self.insert_span(section.span(), offset)
    }

    /// Mask words, lowest blocks first.
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Number of mask words. Never includes trailing zero words.
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no block is marked.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of marked blocks.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Encoded size in bytes (count byte plus words).
    #[inline]
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        1 + self.words.len() * 4
    }

    /// Writes the count byte and the words.
    pub fn write_to(&self, out: &mut WireWriter) {
        // insert never grows past MAX_MASK_WORDS
        let count = u8::try_from(self.words.len()).unwrap_or(u8::MAX);
        out.write_u8(count);
        for word in &self.words {
            out.write_u32(*word);
        }
    }

    /// Encodes the mask on its own.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = WireWriter::with_capacity(self.encoded_len());
        self.write_to(&mut out);
        out.into_inner()
    }
}

impl BitOrAssign<&BlockMask> for BlockMask {
    fn bitor_assign(&mut self, rhs: &BlockMask) {
        if rhs.words.len() > self.words.len() {
            self.words.resize(rhs.words.len(), 0);
        }
        for (word, other) in self.words.iter_mut().zip(&rhs.words) {
            *word |= other;
        }
    }
}
