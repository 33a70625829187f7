//! # Schema Compiler
//!
//! Derives the block layout of an entity type from its descriptor table.
//!
//! Fields are scanned in declaration order while their widths accumulate.
//! Whenever the running width reaches 32 bits or more, the fields seen so
//! far close into a [`Section`]. A section that does not end exactly on a
//! block boundary is a declaration error and fails compilation.
//!
//! ```text
//! guid:u64 | type:u32 | entry:u32 | scale:f32 | _:u32
//! [ 0  1 ] |   [2]    |   [3]     |   [4]     | (5)      <- (5) padding only
//! ```

use std::collections::HashMap;
use std::mem;

use super::descriptor::{FieldDescriptor, FieldId};
use crate::config::{ReplicationConfig, UnknownFieldLog};
use crate::error::{ReplicationError, ReplicationResult};
use crate::BLOCK_BITS;

/// A run of whole blocks, independent of which fields fill it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SectionSpan {
    /// First block of the run.
    pub block_start: usize,
    /// Number of blocks in the run.
    pub block_count: usize,
}

impl SectionSpan {
    /// Creates a span.
    #[inline]
    #[must_use]
    pub const fn new(block_start: usize, block_count: usize) -> Self {
        Self {
            block_start,
            block_count,
        }
    }

    /// One past the last block.
    #[inline]
    #[must_use]
    pub const fn end(self) -> usize {
        self.block_start + self.block_count
    }

    /// The same span moved `offset` blocks to the right.
    #[inline]
    #[must_use]
    pub const fn shifted(self, offset: usize) -> Self {
        Self::new(self.block_start + offset, self.block_count)
    }
}

/// Contiguous fields that fill one or more whole blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    span: SectionSpan,
    /// Descriptor indices, padding excluded.
    fields: Vec<usize>,
}

impl Section {
    /// Block run covered by this section.
    #[inline]
    #[must_use]
    pub const fn span(&self) -> SectionSpan {
        self.span
    }

    /// First block.
    #[inline]
    #[must_use]
    pub const fn block_start(&self) -> usize {
        self.span.block_start
    }

    /// Number of blocks.
    #[inline]
    #[must_use]
    pub const fn block_count(&self) -> usize {
        self.span.block_count
    }

    /// Descriptor indices of the encoded fields, in declaration order.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[usize] {
        &self.fields
    }
}

/// Where a declared field lives once compiled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldLayout {
    /// The declaration.
    pub descriptor: FieldDescriptor,
    /// Absolute bit offset from the start of the record.
    pub bit_offset: usize,
    /// First value slot (one slot per element). Padding owns no slots.
    pub slot: usize,
}

/// Compiled layout of one entity type. Immutable once built.
#[derive(Debug)]
pub struct Schema {
    name: &'static str,
    fields: Vec<FieldLayout>,
    sections: Vec<Section>,
    padding: Vec<SectionSpan>,
    name_to_section: HashMap<&'static str, usize>,
    field_to_section: Vec<Option<usize>>,
    total_blocks: usize,
    slot_count: usize,
    unknown_field_log: UnknownFieldLog,
}

/// Scan state while walking a descriptor table.
struct Compiler {
    schema: &'static str,
    bits: usize,
    block: usize,
    current: Vec<usize>,
    sections: Vec<Section>,
    padding: Vec<SectionSpan>,
}

impl Compiler {
    fn close_section(&mut self) -> ReplicationResult<()> {
        let spill = self.bits % BLOCK_BITS;
        if spill != 0 {
            return Err(ReplicationError::MisalignedSchema {
                schema: self.schema,
                block: self.block,
                spill,
            });
        }

        let span = SectionSpan::new(self.block, self.bits / BLOCK_BITS);
        self.block = span.end();
        self.bits = 0;

        // Runs made only of padding widen the schema but are never encoded.
        if self.current.is_empty() {
            self.padding.push(span);
        } else {
            self.sections.push(Section {
                span,
                fields: mem::take(&mut self.current),
            });
        }
        Ok(())
    }
}

impl Schema {
    /// Compiles a descriptor table with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ReplicationError::MisalignedSchema`] if a group of fields
    /// does not fill whole blocks, [`ReplicationError::DuplicateField`] on a
    /// repeated name, or [`ReplicationError::SchemaTooLarge`] if the mask
    /// cannot address every block.
    pub fn compile(name: &'static str, descriptors: &[FieldDescriptor]) -> ReplicationResult<Self> {
        Self::compile_with(name, descriptors, &ReplicationConfig::default())
    }

    /// Compiles a descriptor table under `config`.
    ///
    /// # Errors
    ///
    /// Same as [`Schema::compile`].
    pub fn compile_with(
        name: &'static str,
        descriptors: &[FieldDescriptor],
        config: &ReplicationConfig,
    ) -> ReplicationResult<Self> {
        let mut compiler = Compiler {
            schema: name,
            bits: 0,
            block: 0,
            current: Vec::new(),
            sections: Vec::new(),
            padding: Vec::new(),
        };
        let mut fields = Vec::with_capacity(descriptors.len());
        let mut field_to_section = Vec::with_capacity(descriptors.len());
        let mut name_to_section = HashMap::new();
        let mut bit_offset = 0;
        let mut slot = 0;

        for (index, descriptor) in descriptors.iter().enumerate() {
            if descriptor.is_end() {
                break;
            }

            fields.push(FieldLayout {
                descriptor: *descriptor,
                bit_offset,
                slot,
            });
            bit_offset += descriptor.bits();
            compiler.bits += descriptor.bits();

            if descriptor.is_padding() {
                field_to_section.push(None);
            } else {
                // A section holding a real field is always emitted, so its
                // index is the number of sections closed so far.
                let section = compiler.sections.len();
                if name_to_section.insert(descriptor.name, section).is_some() {
                    return Err(ReplicationError::DuplicateField {
                        schema: name,
                        name: descriptor.name,
                    });
                }
                field_to_section.push(Some(section));
                compiler.current.push(index);
                slot += descriptor.len;
            }

            if compiler.bits >= BLOCK_BITS {
                compiler.close_section()?;
            }
        }

        if compiler.bits > 0 {
            compiler.close_section()?;
        }

        let total_blocks = compiler.block;
        let limit = config.max_blocks();
        if total_blocks > limit {
            return Err(ReplicationError::SchemaTooLarge {
                schema: name,
                blocks: total_blocks,
                limit,
            });
        }

        tracing::debug!(
            schema = name,
            sections = compiler.sections.len(),
            padding = compiler.padding.len(),
            blocks = total_blocks,
            "compiled schema"
        );

        Ok(Self {
            name,
            fields,
            sections: compiler.sections,
            padding: compiler.padding,
            name_to_section,
            field_to_section,
            total_blocks,
            slot_count: slot,
            unknown_field_log: config.unknown_field_log,
        })
    }

    /// Schema name.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Encoded sections in ascending block order.
    #[inline]
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Padding-only block runs. Together with [`Schema::sections`] they tile
    /// `[0, total_blocks)`.
    #[inline]
    #[must_use]
    pub fn padding(&self) -> &[SectionSpan] {
        &self.padding
    }

    /// Total width in blocks, padding included.
    #[inline]
    #[must_use]
    pub const fn total_blocks(&self) -> usize {
        self.total_blocks
    }

    /// Number of value slots a record of this schema needs.
    #[inline]
    #[must_use]
    pub const fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Compiled layout of every field before the end marker.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[FieldLayout] {
        &self.fields
    }

    /// Layout of one field.
    #[inline]
    #[must_use]
    pub fn field(&self, field: FieldId) -> Option<&FieldLayout> {
        self.fields.get(field.0)
    }

    /// Section index owning the named field.
    #[must_use]
    pub fn section_of_name(&self, name: &str) -> Option<usize> {
        self.name_to_section.get(name).copied()
    }

    /// Section index owning the field. `None` for padding or out of range.
    #[inline]
    #[must_use]
    pub fn section_of_field(&self, field: FieldId) -> Option<usize> {
        self.field_to_section.get(field.0).copied().flatten()
    }

    /// How dirty-flag lookup misses are reported for this schema.
    #[inline]
    #[must_use]
    pub const fn unknown_field_log(&self) -> UnknownFieldLog {
        self.unknown_field_log
    }
}
