//! Field descriptors: the hand-authored input to the schema compiler.

/// Wire type of a field. Determines its width in bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Single bit.
    Bool,
    /// Unsigned byte.
    U8,
    /// Signed byte.
    I8,
    /// Unsigned 16-bit integer.
    U16,
    /// Signed 16-bit integer.
    I16,
    /// Unsigned 32-bit integer.
    U32,
    /// Signed 32-bit integer.
    I32,
    /// 32-bit float.
    F32,
    /// Unsigned 64-bit integer (two blocks, low word first).
    U64,
    /// Signed 64-bit integer (two blocks, low word first).
    I64,
    /// End-of-schema marker. Zero width.
    End,
}

impl FieldKind {
    /// Width of one element in bits.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> usize {
        match self {
            Self::Bool => 1,
            Self::U8 | Self::I8 => 8,
            Self::U16 | Self::I16 => 16,
            Self::U32 | Self::I32 | Self::F32 => 32,
            Self::U64 | Self::I64 => 64,
            Self::End => 0,
        }
    }
}

/// Name used for padding fields. Padding counts toward width but is never encoded.
pub const PADDING_NAME: &str = "_";

/// One declared field (scalar or fixed-length array).
///
/// Declaration order is the position in the descriptor table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name, unique within a schema. `"_"` marks padding.
    pub name: &'static str,
    /// Element type.
    pub kind: FieldKind,
    /// Element count (1 for scalars).
    pub len: usize,
}

impl FieldDescriptor {
    /// Stops the compiler. Anything after it is bookkeeping, not wire data.
    pub const END: Self = Self {
        name: "END",
        kind: FieldKind::End,
        len: 0,
    };

    /// A single value.
    #[must_use]
    pub const fn scalar(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, len: 1 }
    }

    /// A fixed-length array of `len` elements.
    #[must_use]
    pub const fn array(name: &'static str, kind: FieldKind, len: usize) -> Self {
        Self { name, kind, len }
    }

    /// `len` elements of padding.
    #[must_use]
    pub const fn padding(kind: FieldKind, len: usize) -> Self {
        Self {
            name: PADDING_NAME,
            kind,
            len,
        }
    }

    /// Total width in bits.
    #[inline]
    #[must_use]
    pub const fn bits(&self) -> usize {
        self.kind.bits() * self.len
    }

    /// Returns true for padding fields.
    #[inline]
    #[must_use]
    pub fn is_padding(&self) -> bool {
        self.name == PADDING_NAME
    }

    /// Returns true for the end-of-schema marker.
    #[inline]
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.kind == FieldKind::End
    }
}

/// Index of a field in its descriptor table.
///
/// Generated field enums convert into this, so dirty flagging never has to
/// look a name up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub usize);

impl From<usize> for FieldId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(FieldDescriptor::scalar("a", FieldKind::Bool).bits(), 1);
        assert_eq!(FieldDescriptor::scalar("a", FieldKind::I16).bits(), 16);
        assert_eq!(FieldDescriptor::array("a", FieldKind::F32, 7).bits(), 224);
        assert_eq!(FieldDescriptor::array("a", FieldKind::U64, 3).bits(), 192);
        assert_eq!(FieldDescriptor::END.bits(), 0);
    }

    #[test]
    fn test_markers() {
        assert!(FieldDescriptor::padding(FieldKind::U8, 3).is_padding());
        assert!(!FieldDescriptor::scalar("level", FieldKind::U32).is_padding());
        assert!(FieldDescriptor::END.is_end());
    }
}
