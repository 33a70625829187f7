//! # Composite Layouts
//!
//! The validated block placement of several schemas sharing one mask.
//! Built once, at construction time, so encoding a composite never meets a
//! mask it cannot address.

use super::compiler::Schema;
use crate::config::ReplicationConfig;
use crate::error::{ReplicationError, ReplicationResult};

/// Block offsets of the parts of a composite, checked against the mask limit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositeLayout {
    name: &'static str,
    /// Total blocks of each part, in order.
    part_blocks: Vec<usize>,
    total_blocks: usize,
}

impl CompositeLayout {
    /// Lays `parts` out back to back.
    ///
    /// # Errors
    ///
    /// Returns [`ReplicationError::SchemaTooLarge`] if the parts together
    /// need more blocks than `config`'s mask can address.
    pub fn new(
        name: &'static str,
        parts: &[&Schema],
        config: &ReplicationConfig,
    ) -> ReplicationResult<Self> {
        let part_blocks: Vec<usize> = parts.iter().map(|s| s.total_blocks()).collect();
        let total_blocks = part_blocks.iter().sum();
        let limit = config.max_blocks();
        if total_blocks > limit {
            return Err(ReplicationError::SchemaTooLarge {
                schema: name,
                blocks: total_blocks,
                limit,
            });
        }

        Ok(Self {
            name,
            part_blocks,
            total_blocks,
        })
    }

    /// Layout of a single compiled schema. Always valid, since compiling
    /// already bounded its size.
    #[must_use]
    pub fn single(schema: &Schema) -> Self {
        Self {
            name: schema.name(),
            part_blocks: vec![schema.total_blocks()],
            total_blocks: schema.total_blocks(),
        }
    }

    /// Composite name.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Number of parts.
    #[inline]
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.part_blocks.len()
    }

    /// Blocks across every part.
    #[inline]
    #[must_use]
    pub const fn total_blocks(&self) -> usize {
        self.total_blocks
    }

    /// Total blocks of part `index`.
    #[inline]
    #[must_use]
    pub fn part_blocks(&self, index: usize) -> Option<usize> {
        self.part_blocks.get(index).copied()
    }

    /// First composite block of part `index`.
    #[must_use]
    pub fn offset(&self, index: usize) -> Option<usize> {
        (index < self.part_blocks.len()).then(|| self.part_blocks[..index].iter().sum())
    }

    /// `(offset, blocks)` of every part, in order.
    pub fn parts(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.part_blocks.iter().scan(0, |offset, &blocks| {
            let start = *offset;
            *offset += blocks;
            Some((start, blocks))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDescriptor, FieldKind};

    fn schema(name: &'static str, words: usize) -> Schema {
        let fields = [FieldDescriptor::array("words", FieldKind::U32, words)];
        Schema::compile(name, &fields).unwrap()
    }

    #[test]
    fn test_offsets_are_running_totals() {
        let a = schema("a", 6);
        let b = schema("b", 142);
        let c = schema("c", 10);
        let layout = CompositeLayout::new("abc", &[&a, &b, &c], &ReplicationConfig::default())
            .unwrap();

        assert_eq!(layout.part_count(), 3);
        assert_eq!(layout.total_blocks(), 158);
        assert_eq!(layout.offset(2), Some(148));
        assert_eq!(layout.offset(3), None);
        assert_eq!(layout.parts().collect::<Vec<_>>(), vec![(0, 6), (6, 142), (148, 10)]);
    }

    #[test]
    fn test_parts_that_fit_alone_can_overflow_together() {
        let a = schema("a", 200 * 32);
        let b = schema("b", 200 * 32);
        let err = CompositeLayout::new("ab", &[&a, &b], &ReplicationConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            ReplicationError::SchemaTooLarge { schema: "ab", blocks: 12_800, limit: 8160 }
        ));
    }

    #[test]
    fn test_single() {
        let a = schema("a", 3);
        let layout = CompositeLayout::single(&a);
        assert_eq!(layout.name(), "a");
        assert_eq!(layout.parts().collect::<Vec<_>>(), vec![(0, 3)]);
    }
}
