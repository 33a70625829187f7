//! # Wire Writer
//!
//! Little-endian byte sink shared by every encoder in the crate.
//!
//! ## Design
//!
//! - Growable buffer: encoding never fails, it only allocates
//! - Every multi-byte value is little-endian
//! - `Pod` types are copied as their byte image

use bytemuck::{bytes_of, Pod};
use ember_shared::Guid;

use super::guid::PackedGuid;

/// Longest list a count prefix may announce. Entries past it are dropped.
pub const MAX_LIST_LEN: usize = u16::MAX as usize;

/// Little-endian serializer over a growable buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WireWriter {
    buffer: Vec<u8>,
}

impl WireWriter {
    /// Creates an empty writer.
    #[must_use]
    pub const fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Creates an empty writer with room for `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Resets the writer for reuse, keeping its allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns the number of bytes written.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no bytes have been written.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns a slice of the written data.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    /// Consumes the writer, returning its bytes.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_u8(&mut self, value: u8) {
        self.buffer.push(value);
    }

    /// Writes a u16 in little-endian format.
    #[inline]
    pub fn write_u16(&mut self, value: u16) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a u32 in little-endian format.
    #[inline]
    pub fn write_u32(&mut self, value: u32) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes the low 48 bits of `value` (6 bytes, little-endian).
    #[inline]
    pub fn write_u48(&mut self, value: u64) {
        self.buffer.extend_from_slice(&value.to_le_bytes()[..6]);
    }

    /// Writes a u64 in little-endian format.
    #[inline]
    pub fn write_u64(&mut self, value: u64) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a f32 in little-endian format.
    #[inline]
    pub fn write_f32(&mut self, value: f32) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    /// Writes a Pod type directly.
    #[inline]
    pub fn write_pod<T: Pod>(&mut self, value: &T) {
        self.buffer.extend_from_slice(bytes_of(value));
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Writes the u32 count prefix of a list of `len` entries, capped at
    /// [`MAX_LIST_LEN`]. Returns how many entries the caller must write.
    pub fn write_count(&mut self, len: usize) -> usize {
        let count = len.min(MAX_LIST_LEN);
        if count < len {
            tracing::warn!(len, count, "list longer than count prefix allows; truncated");
        }
        self.write_u32(u32::try_from(count).unwrap_or(u32::MAX));
        count
    }

    /// Writes a guid in packed form.
    #[inline]
    pub fn write_packed_guid(&mut self, guid: Guid) {
        self.write_bytes(PackedGuid::new(guid).as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_shared::Vector3;

    #[test]
    fn test_little_endian_integers() {
        let mut w = WireWriter::new();
        w.write_u8(0xAB);
        w.write_u16(0x1234);
        w.write_u32(0xDEAD_BEEF);
        assert_eq!(w.as_slice(), &[0xAB, 0x34, 0x12, 0xEF, 0xBE, 0xAD, 0xDE]);
    }

    #[test]
    fn test_u48_drops_top_two_bytes() {
        let mut w = WireWriter::new();
        w.write_u48(0xFFFF_6655_4433_2211);
        assert_eq!(w.as_slice(), &[0x11, 0x22, 0x33, 0x44, 0x55, 0x66]);
    }

    #[test]
    fn test_pod_vector() {
        let mut w = WireWriter::new();
        w.write_pod(&Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(w.len(), 12);
        assert_eq!(&w.as_slice()[8..12], &3.0f32.to_le_bytes());
    }

    #[test]
    fn test_packed_guid_and_reuse() {
        let mut w = WireWriter::with_capacity(16);
        w.write_packed_guid(Guid::new(1));
        assert_eq!(w.as_slice(), &[0x01, 0x01]);
        w.clear();
        assert!(w.is_empty());
    }

    #[test]
    fn test_count_is_capped() {
        let mut out = WireWriter::new();
        assert_eq!(out.write_count(3), 3);
        assert_eq!(out.write_count(MAX_LIST_LEN + 10), MAX_LIST_LEN);
        assert_eq!(out.as_slice(), &[3, 0, 0, 0, 0xFF, 0xFF, 0, 0]);
    }
}
