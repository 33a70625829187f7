//! # Dirty Tracking
//!
//! Records which sections of a value record changed since the last dirty
//! marshal. One bit per section, 64 sections per word.
//!
//! ## Performance
//!
//! - Flagging is O(1) and idempotent
//! - Iteration skips clean words with `trailing_zeros`
//! - Flagging by [`FieldId`] never hashes; flagging by name does one lookup

use crate::config::UnknownFieldLog;
use crate::schema::{FieldId, Schema, Section};

/// Set of dirty section indices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirtySet {
    /// Bitset: 1 = dirty.
    bits: Vec<u64>,
    /// Number of sections tracked.
    capacity: usize,
    /// Cached count of dirty sections.
    dirty_count: usize,
}

impl DirtySet {
    /// Creates an empty set for a schema with `section_count` sections.
    #[must_use]
    pub fn new(section_count: usize) -> Self {
        Self {
            bits: vec![0u64; section_count.div_ceil(64)],
            capacity: section_count,
            dirty_count: 0,
        }
    }

    /// Flags the section owning the named field.
    ///
    /// Returns false if `schema` has no such field. The miss is logged at the
    /// schema's configured level and otherwise ignored.
    pub fn flag(&mut self, schema: &Schema, name: &str) -> bool {
        match schema.section_of_name(name) {
            Some(section) => {
                self.flag_section(section);
                true
            }
            None => {
                match schema.unknown_field_log() {
                    UnknownFieldLog::Off => {}
                    UnknownFieldLog::Debug => {
                        tracing::debug!(schema = schema.name(), field = name, "dirty flag for unknown field");
                    }
                    UnknownFieldLog::Warn => {
                        tracing::warn!(schema = schema.name(), field = name, "dirty flag for unknown field");
                    }
                }
                false
            }
        }
    }

    /// Flags the section owning `field`. Padding and out-of-range ids are
    /// ignored.
    #[inline]
    pub fn flag_field(&mut self, schema: &Schema, field: FieldId) {
        if let Some(section) = schema.section_of_field(field) {
            self.flag_section(section);
        }
    }

    /// Flags a section by index.
    #[inline]
    pub fn flag_section(&mut self, section: usize) {
        debug_assert!(section < self.capacity, "section index out of bounds");
        let word = section / 64;
        let mask = 1u64 << (section % 64);
        if let Some(bits) = self.bits.get_mut(word) {
            if *bits & mask == 0 {
                *bits |= mask;
                self.dirty_count += 1;
            }
        }
    }

    /// Checks whether a section is flagged.
    #[inline]
    #[must_use]
    pub fn is_flagged(&self, section: usize) -> bool {
        if section >= self.capacity {
            return false;
        }
        (self.bits[section / 64] >> (section % 64)) & 1 == 1
    }

    /// Flagged section indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter().enumerate().flat_map(|(word_idx, &word)| {
            let mut remaining = word;
            std::iter::from_fn(move || {
                if remaining == 0 {
                    return None;
                }
                let bit = remaining.trailing_zeros() as usize;
                remaining &= remaining - 1;
                Some(word_idx * 64 + bit)
            })
        })
    }

    /// Flagged sections of `schema`, in ascending block order.
    #[must_use]
    pub fn sections<'s>(&self, schema: &'s Schema) -> Vec<&'s Section> {
        self.indices().filter_map(|i| schema.sections().get(i)).collect()
    }

    /// Number of flagged sections.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.dirty_count
    }

    /// Returns true if nothing is flagged.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirty_count == 0
    }

    /// Clears every flag.
    pub fn clear(&mut self) {
        self.bits.fill(0);
        self.dirty_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDescriptor, FieldKind};
    use test_log::test;

    fn schema() -> Schema {
        Schema::compile(
            "dirty",
            &[
                FieldDescriptor::scalar("guid", FieldKind::U64),
                FieldDescriptor::scalar("level", FieldKind::U32),
                FieldDescriptor::scalar("race", FieldKind::U8),
                FieldDescriptor::scalar("class", FieldKind::U8),
                FieldDescriptor::padding(FieldKind::U8, 2),
                FieldDescriptor::scalar("health", FieldKind::U32),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_flag_is_idempotent() {
        let schema = schema();
        let mut dirty = DirtySet::new(schema.sections().len());
        assert!(dirty.flag(&schema, "level"));
        assert!(dirty.flag(&schema, "level"));
        assert_eq!(dirty.len(), 1);
        assert!(dirty.is_flagged(1));
    }

    #[test]
    fn test_fields_in_one_section_share_a_flag() {
        let schema = schema();
        let mut dirty = DirtySet::new(schema.sections().len());
        dirty.flag(&schema, "race");
        dirty.flag_field(&schema, FieldId(3));
        assert_eq!(dirty.indices().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_sections_come_out_ascending() {
        let schema = schema();
        let mut dirty = DirtySet::new(schema.sections().len());
        dirty.flag(&schema, "health");
        dirty.flag(&schema, "guid");
        dirty.flag(&schema, "level");

        let starts: Vec<_> = dirty.sections(&schema).iter().map(|s| s.block_start()).collect();
        assert_eq!(starts, vec![0, 2, 4]);
    }

    #[test]
    fn test_unknown_name_is_ignored() {
        let schema = schema();
        let mut dirty = DirtySet::new(schema.sections().len());
        assert!(!dirty.flag(&schema, "mana"));
        assert!(!dirty.flag(&schema, "_"));
        assert!(dirty.is_empty());
    }

    #[test]
    fn test_padding_id_is_ignored() {
        let schema = schema();
        let mut dirty = DirtySet::new(schema.sections().len());
        dirty.flag_field(&schema, FieldId(4));
        dirty.flag_field(&schema, FieldId(99));
        assert!(dirty.is_empty());
    }

    #[test]
    fn test_clear_and_wide_sets() {
        let mut dirty = DirtySet::new(130);
        dirty.flag_section(0);
        dirty.flag_section(64);
        dirty.flag_section(129);
        assert_eq!(dirty.indices().collect::<Vec<_>>(), vec![0, 64, 129]);
        assert!(!dirty.is_flagged(200));

        dirty.clear();
        assert!(dirty.is_empty());
        assert_eq!(dirty.indices().count(), 0);
    }
}
