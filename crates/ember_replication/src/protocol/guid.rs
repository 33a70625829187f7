//! Packed guids: the variable-length form of a 64-bit identifier.
//!
//! ```text
//! 0x0000_0000_0012_0034  ->  [0b0000_0101] [0x34] [0x12]
//!                              mask         byte0  byte2
//! ```

use ember_shared::Guid;

/// Mask byte plus up to eight bytes.
pub const MAX_PACKED_GUID_LEN: usize = 9;

/// A guid with its zero bytes stripped.
///
/// Bit *i* of the leading mask byte is set iff byte *i* (least significant
/// first) of the guid is non-zero; only those bytes follow, in ascending
/// index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PackedGuid {
    bytes: [u8; MAX_PACKED_GUID_LEN],
    len: u8,
}

impl PackedGuid {
    /// Packs `guid`.
    #[must_use]
    pub fn new(guid: Guid) -> Self {
        let mut bytes = [0u8; MAX_PACKED_GUID_LEN];
        let mut len = 1;

        for (i, byte) in guid.raw().to_le_bytes().into_iter().enumerate() {
            if byte != 0 {
                bytes[0] |= 1 << i;
                bytes[len] = byte;
                len += 1;
            }
        }

        Self {
            bytes,
            len: len as u8,
        }
    }

    /// Encoded bytes, mask first.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }

    /// Encoded length (1..=9).
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false: the mask byte is always present.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl From<Guid> for PackedGuid {
    fn from(guid: Guid) -> Self {
        Self::new(guid)
    }
}

impl From<u64> for PackedGuid {
    fn from(raw: u64) -> Self {
        Self::new(Guid::new(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_packs_to_mask_only() {
        assert_eq!(PackedGuid::from(0).as_bytes(), &[0x00]);
    }

    #[test]
    fn test_one() {
        assert_eq!(PackedGuid::from(1).as_bytes(), &[0x01, 0x01]);
    }

    #[test]
    fn test_all_bytes_present() {
        let packed = PackedGuid::from(0x1122_3344_5566_7788);
        assert_eq!(
            packed.as_bytes(),
            &[0xFF, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]
        );
        assert_eq!(packed.len(), MAX_PACKED_GUID_LEN);
    }

    #[test]
    fn test_sparse_bytes_keep_order() {
        let packed = PackedGuid::from(0x0000_0000_0012_0034);
        assert_eq!(packed.as_bytes(), &[0b0000_0101, 0x34, 0x12]);

        let high_only = PackedGuid::from(0xF100_0000_0000_0000);
        assert_eq!(high_only.as_bytes(), &[0x80, 0xF1]);
    }
}
