//! # Value Records
//!
//! The live state of one entity part under one schema, plus its dirty set.
//!
//! Each declared element owns one `u64` slot holding its raw bits. Setters
//! write the slot and flag the owning section; [`ValueRecord::marshal`]
//! lays the chosen sections down as little-endian words.

use std::sync::Arc;

use ember_shared::{Guid, ObjectTypeMask};

use super::composite::CompositeValues;
use super::dirty::DirtySet;
use super::writer::BlockWriter;
use crate::schema::{FieldId, FieldKind, Schema, Section, SectionSpan};

/// A Rust type that maps onto one wire field kind.
pub trait WireValue: Copy {
    /// Field kind this type is stored as.
    const KIND: FieldKind;

    /// Raw bits, zero-extended to 64.
    fn to_bits(self) -> u64;

    /// Rebuilds the value from its raw bits.
    fn from_bits(bits: u64) -> Self;
}

impl WireValue for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn to_bits(self) -> u64 {
        u64::from(self)
    }

    fn from_bits(bits: u64) -> Self {
        bits & 1 == 1
    }
}

macro_rules! impl_wire_int {
    ($($ty:ty => $unsigned:ty, $kind:ident;)*) => {
        $(
            impl WireValue for $ty {
                const KIND: FieldKind = FieldKind::$kind;

                #[allow(clippy::cast_sign_loss, clippy::cast_lossless)]
                fn to_bits(self) -> u64 {
                    self as $unsigned as u64
                }

                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                fn from_bits(bits: u64) -> Self {
                    bits as $unsigned as $ty
                }
            }
        )*
    };
}

impl_wire_int! {
    u8 => u8, U8;
    i8 => u8, I8;
    u16 => u16, U16;
    i16 => u16, I16;
    u32 => u32, U32;
    i32 => u32, I32;
    u64 => u64, U64;
    i64 => u64, I64;
}

impl WireValue for f32 {
    const KIND: FieldKind = FieldKind::F32;

    fn to_bits(self) -> u64 {
        u64::from(f32::to_bits(self))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_bits(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }
}

impl WireValue for Guid {
    const KIND: FieldKind = FieldKind::U64;

    fn to_bits(self) -> u64 {
        self.raw()
    }

    fn from_bits(bits: u64) -> Self {
        Guid::new(bits)
    }
}

impl WireValue for ObjectTypeMask {
    const KIND: FieldKind = FieldKind::U32;

    fn to_bits(self) -> u64 {
        u64::from(self.bits())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_bits(bits: u64) -> Self {
        ObjectTypeMask::from_bits(bits as u32)
    }
}

/// Sections of one record laid down without a mask, ready to be merged into
/// a composite.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodedPart {
    /// Block spans in the order their data appears.
    pub spans: Vec<SectionSpan>,
    /// Section words, little-endian.
    pub data: Vec<u8>,
}

impl EncodedPart {
    /// Returns true if no section was chosen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// State of one entity part plus the sections changed since the last
/// dirty marshal.
#[derive(Clone, Debug)]
pub struct ValueRecord {
    schema: Arc<Schema>,
    slots: Vec<u64>,
    dirty: DirtySet,
}

impl ValueRecord {
    /// Creates a zeroed record with nothing dirty.
    #[must_use]
    pub fn new(schema: Arc<Schema>) -> Self {
        Self {
            slots: vec![0; schema.slot_count()],
            dirty: DirtySet::new(schema.sections().len()),
            schema,
        }
    }

    /// The schema this record is laid out by.
    #[inline]
    #[must_use]
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Sets a scalar field (element 0) and flags its section.
    #[inline]
    pub fn set<T: WireValue>(&mut self, field: impl Into<FieldId>, value: T) {
        self.set_at(field, 0, value);
    }

    /// Sets element `index` of a field and flags its section.
    ///
    /// Padding and out-of-range indices are ignored.
    pub fn set_at<T: WireValue>(&mut self, field: impl Into<FieldId>, index: usize, value: T) {
        let field = field.into();
        let Some(slot) = self.slot_of::<T>(field, index) else {
            return;
        };
        self.slots[slot] = value.to_bits();
        self.dirty.flag_field(&self.schema, field);
    }

    /// Reads a scalar field.
    #[inline]
    #[must_use]
    pub fn get<T: WireValue>(&self, field: impl Into<FieldId>) -> T {
        self.get_at(field, 0)
    }

    /// Reads element `index` of a field. Padding reads as zero.
    #[must_use]
    pub fn get_at<T: WireValue>(&self, field: impl Into<FieldId>, index: usize) -> T {
        let bits = self
            .slot_of::<T>(field.into(), index)
            .map_or(0, |slot| self.slots[slot]);
        T::from_bits(bits)
    }

    fn slot_of<T: WireValue>(&self, field: FieldId, index: usize) -> Option<usize> {
        let layout = self.schema.field(field)?;
        debug_assert_eq!(
            layout.descriptor.kind,
            T::KIND,
            "{}: field {} accessed as the wrong type",
            self.schema.name(),
            layout.descriptor.name
        );
        if layout.descriptor.is_padding() || index >= layout.descriptor.len {
            return None;
        }
        Some(layout.slot + index)
    }

    /// Flags a section by field name, for callers that only have a name.
    ///
    /// Returns false (after logging) if the schema has no such field.
    pub fn flag(&mut self, name: &str) -> bool {
        self.dirty.flag(&self.schema, name)
    }

    /// Flags the section owning `field`.
    #[inline]
    pub fn flag_field(&mut self, field: impl Into<FieldId>) {
        self.dirty.flag_field(&self.schema, field.into());
    }

    /// The dirty set.
    #[inline]
    #[must_use]
    pub fn dirty(&self) -> &DirtySet {
        &self.dirty
    }

    /// Returns true if any section changed since the last marshal.
    #[inline]
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Clears the dirty set without encoding.
    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty.clear();
    }

    /// Encodes the dirty sections (or every section) without a mask.
    ///
    /// The dirty set is cleared either way.
    pub fn marshal_part(&mut self, only_dirty: bool) -> EncodedPart {
        let schema = Arc::clone(&self.schema);
        let sections: Vec<&Section> = if only_dirty {
            self.dirty.sections(&schema)
        } else {
            schema.sections().iter().collect()
        };

        let mut part = EncodedPart::default();
        let mut writer = BlockWriter::new();
        for section in sections {
            self.encode_section(section, &mut writer);
            writer.write_le(&mut part.data);
            part.spans.push(section.span());
        }

        self.dirty.clear();
        tracing::trace!(
            schema = schema.name(),
            only_dirty,
            sections = part.spans.len(),
            bytes = part.data.len(),
            "marshalled values"
        );
        part
    }

    /// Encodes the record as a values block: mask, then section words.
    ///
    /// The dirty set is cleared either way.
    pub fn marshal(&mut self, only_dirty: bool) -> Vec<u8> {
        let part = self.marshal_part(only_dirty);
        let mut composite = CompositeValues::with_blocks(self.schema.total_blocks());
        composite.push(0, &part);
        composite.finish()
    }

    fn encode_section(&self, section: &Section, writer: &mut BlockWriter) {
        let base = section.block_start() * crate::BLOCK_BITS;
        writer.reset(section.block_count());

        for &index in section.fields() {
            let layout = &self.schema.fields()[index];
            let width = layout.descriptor.kind.bits();
            // Padding between fields is never listed; seeking leaves it zero.
            writer.seek(layout.bit_offset - base);
            for slot in &self.slots[layout.slot..layout.slot + layout.descriptor.len] {
                writer.write_bits(*slot, width);
            }
        }
    }
}
