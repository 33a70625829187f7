//! # Composite Offsetting
//!
//! Entities built from several schemas (object + unit + player) share one
//! mask. Each part's spans are shifted by the total blocks of the parts
//! before it, so the result is byte-for-byte what a single schema declaring
//! every field in order would produce.
//!
//! ```text
//! object [0..6) | unit [6..148) | player [148..1326)
//! ```
//!
//! Offsets come from a [`CompositeLayout`], which was checked against the
//! mask limit when it was built. Encoding never has to.

use super::mask::BlockMask;
use super::record::{EncodedPart, ValueRecord};
use crate::protocol::WireWriter;
use crate::schema::CompositeLayout;
use crate::BLOCK_BYTES;

/// Accumulates encoded parts into one values block.
#[derive(Clone, Debug)]
pub struct CompositeValues {
    mask: BlockMask,
    data: Vec<u8>,
    capacity: usize,
}

impl CompositeValues {
    /// Creates an empty composite covering the blocks of `layout`.
    #[must_use]
    pub fn new(layout: &CompositeLayout) -> Self {
        Self::with_blocks(layout.total_blocks())
    }

    /// Capacity must already be within the mask limit.
    pub(crate) const fn with_blocks(capacity: usize) -> Self {
        Self {
            mask: BlockMask::new(),
            data: Vec::new(),
            capacity,
        }
    }

    /// Adds a part whose blocks start at `offset` in the composite.
    ///
    /// Parts must be pushed in ascending offset order. Spans that would end
    /// past the layout are dropped along with their data.
    pub fn push(&mut self, offset: usize, part: &EncodedPart) {
        let mut cursor = 0;
        for span in &part.spans {
            let len = span.block_count * BLOCK_BYTES;
            let data = part.data.get(cursor..cursor + len).unwrap_or_default();
            cursor += len;

            let fits = span.shifted(offset).end() <= self.capacity && data.len() == len;
            debug_assert!(fits, "span {span:?} at offset {offset} is outside the layout");
            if !fits {
                tracing::error!(
                    block = span.block_start + offset,
                    blocks = span.block_count,
                    capacity = self.capacity,
                    "dropped span outside composite layout"
                );
                continue;
            }
            if self.mask.insert_span(*span, offset) {
                self.data.extend_from_slice(data);
            }
        }
    }

    /// The merged mask so far.
    #[inline]
    #[must_use]
    pub fn mask(&self) -> &BlockMask {
        &self.mask
    }

    /// Returns true if no block has been added.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    /// Writes the values block (mask, then data) into `out`.
    pub fn write_to(&self, out: &mut WireWriter) {
        self.mask.write_to(out);
        out.write_bytes(&self.data);
    }

    /// Finishes the values block.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        let mut out = WireWriter::with_capacity(self.mask.encoded_len() + self.data.len());
        self.write_to(&mut out);
        out.into_inner()
    }
}

/// Marshals `records` as the parts of `layout`, in order.
///
/// A record whose schema does not match its part's block count is skipped
/// and logged; a release build still produces a well-formed block.
pub fn marshal_composite(
    layout: &CompositeLayout,
    records: &mut [&mut ValueRecord],
    only_dirty: bool,
) -> Vec<u8> {
    debug_assert_eq!(records.len(), layout.part_count(), "{}: part count", layout.name());
    let mut composite = CompositeValues::new(layout);
    for ((offset, blocks), record) in layout.parts().zip(records.iter_mut()) {
        let matches = record.schema().total_blocks() == blocks;
        debug_assert!(matches, "{}: part at {offset} is not {blocks} blocks", layout.name());
        if !matches {
            tracing::error!(
                composite = layout.name(),
                schema = record.schema().name(),
                offset,
                blocks,
                "record does not match composite layout"
            );
            continue;
        }
        let part = record.marshal_part(only_dirty);
        composite.push(offset, &part);
    }
    composite.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReplicationConfig;
    use crate::schema::{FieldDescriptor, FieldId, FieldKind, Schema, SectionSpan};
    use std::sync::Arc;

    const HEAD: &[FieldDescriptor] = &[
        FieldDescriptor::scalar("guid", FieldKind::U64),
        FieldDescriptor::padding(FieldKind::U32, 1),
    ];
    const TAIL: &[FieldDescriptor] = &[
        FieldDescriptor::scalar("level", FieldKind::U32),
        FieldDescriptor::scalar("health", FieldKind::U32),
    ];
    const WHOLE: &[FieldDescriptor] = &[
        FieldDescriptor::scalar("guid", FieldKind::U64),
        FieldDescriptor::padding(FieldKind::U32, 1),
        FieldDescriptor::scalar("level", FieldKind::U32),
        FieldDescriptor::scalar("health", FieldKind::U32),
    ];

    fn record(name: &'static str, fields: &[FieldDescriptor]) -> ValueRecord {
        ValueRecord::new(Arc::new(Schema::compile(name, fields).unwrap()))
    }

    fn layout(parts: &[&ValueRecord]) -> CompositeLayout {
        let schemas: Vec<&Schema> = parts.iter().map(|r| r.schema().as_ref()).collect();
        CompositeLayout::new("test", &schemas, &ReplicationConfig::default()).unwrap()
    }

    #[test]
    fn test_offsets_match_single_schema() {
        let mut head = record("head", HEAD);
        let mut tail = record("tail", TAIL);
        let mut whole = record("whole", WHOLE);

        head.set(FieldId(0), 0xAABB_u64);
        tail.set(FieldId(1), 77u32);
        whole.set(FieldId(0), 0xAABB_u64);
        whole.set(FieldId(3), 77u32);

        let layout = layout(&[&head, &tail]);
        let composite = marshal_composite(&layout, &mut [&mut head, &mut tail], true);
        assert_eq!(composite, whole.marshal(true));
        assert_eq!(composite[1], 0b1_0011);
    }

    #[test]
    fn test_full_composite_matches_single_schema() {
        let mut head = record("head", HEAD);
        let mut tail = record("tail", TAIL);
        let mut whole = record("whole", WHOLE);
        let layout = layout(&[&head, &tail]);
        assert_eq!(
            marshal_composite(&layout, &mut [&mut head, &mut tail], false),
            whole.marshal(false)
        );
    }

    #[test]
    fn test_clean_composite_is_empty_mask() {
        let mut head = record("head", HEAD);
        let mut tail = record("tail", TAIL);
        let layout = layout(&[&head, &tail]);
        assert_eq!(marshal_composite(&layout, &mut [&mut head, &mut tail], true), vec![0x00]);
    }

    #[test]
    fn test_oversized_parts_fail_when_laid_out() {
        const WIDE: &[FieldDescriptor] = &[FieldDescriptor::array("words", FieldKind::U32, 6400)];
        let a = record("wide_a", WIDE);
        let b = record("wide_b", WIDE);
        assert_eq!(a.schema().total_blocks(), 6400);

        let schemas = [a.schema().as_ref(), b.schema().as_ref()];
        let err = CompositeLayout::new("wide", &schemas, &ReplicationConfig::default());
        assert!(err.is_err());
    }

    #[test]
    fn test_large_layout_marshals_full_mask() {
        const WIDE: &[FieldDescriptor] = &[
            FieldDescriptor::array("words", FieldKind::U32, 4000),
            FieldDescriptor::scalar("last", FieldKind::U32),
        ];
        let mut a = record("wide_a", WIDE);
        let mut b = record("wide_b", WIDE);
        let layout = layout(&[&a, &b]);
        assert_eq!(layout.total_blocks(), 8002);

        b.set(FieldId(1), 9u32);
        let bytes = marshal_composite(&layout, &mut [&mut a, &mut b], true);
        // block 8001 is bit 1 of word 250
        assert_eq!(bytes[0], 251);
        assert_eq!(&bytes[1 + 250 * 4..1 + 251 * 4], &2u32.to_le_bytes());
        assert_eq!(&bytes[1 + 251 * 4..], &9u32.to_le_bytes());
    }

    #[test]
    fn test_push_stays_within_layout() {
        let head = record("head", HEAD);
        let layout = layout(&[&head]);
        let mut composite = CompositeValues::new(&layout);
        let part = EncodedPart {
            spans: vec![SectionSpan::new(0, 1)],
            data: vec![1, 2, 3, 4],
        };
        composite.push(0, &part);
        assert_eq!(composite.mask().words(), &[1]);
        assert_eq!(composite.finish(), vec![0x01, 0x01, 0x00, 0x00, 0x00, 1, 2, 3, 4]);
    }
}
