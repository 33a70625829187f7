//! # Update Blocks
//!
//! Byte layout of the blocks an object-update message carries. The framer
//! chooses which blocks to send and wraps the batch in its own header; this
//! module only lays the bytes down.
//!
//! ```text
//! batch:   [block count u32][block]...
//! partial: [type u8][packed guid][values]
//! move:    [type u8][packed guid][movement]
//! create:  [type u8][packed guid][object type u8][movement][values]
//! range:   [type u8][count u32][packed guid]...
//! ```

use ember_shared::{Guid, ObjectType};

use super::wire::WireWriter;
use crate::movement::MovementBlock;

/// Kind of update block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UpdateType {
    /// Changed values of a known object.
    Partial = 0,
    /// Changed movement of a known object.
    Movement = 1,
    /// Object came into view.
    CreateObject = 2,
    /// Object was just spawned.
    CreateObject2 = 3,
    /// Objects left view.
    OutOfRangeObjects = 4,
    /// Objects nearby.
    NearObjects = 5,
}

/// One block of an object-update message.
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateBlock {
    /// Values changed.
    Partial {
        /// Object guid.
        guid: Guid,
        /// Values block from a dirty marshal.
        values: Vec<u8>,
    },
    /// Movement changed.
    Movement {
        /// Object guid.
        guid: Guid,
        /// Movement block.
        movement: MovementBlock,
    },
    /// Object appeared.
    Create {
        /// Object guid.
        guid: Guid,
        /// Object type.
        object_type: ObjectType,
        /// Movement block.
        movement: MovementBlock,
        /// Values block from a full marshal.
        values: Vec<u8>,
        /// Sent as [`UpdateType::CreateObject2`] when true.
        spawned: bool,
    },
    /// Objects left view.
    OutOfRange(Vec<Guid>),
    /// Objects nearby.
    NearObjects(Vec<Guid>),
}

impl UpdateBlock {
    /// Type byte written at the start of the block.
    #[must_use]
    pub const fn update_type(&self) -> UpdateType {
        match self {
            Self::Partial { .. } => UpdateType::Partial,
            Self::Movement { .. } => UpdateType::Movement,
            Self::Create { spawned: false, .. } => UpdateType::CreateObject,
            Self::Create { spawned: true, .. } => UpdateType::CreateObject2,
            Self::OutOfRange(_) => UpdateType::OutOfRangeObjects,
            Self::NearObjects(_) => UpdateType::NearObjects,
        }
    }

    /// Writes the block.
    pub fn encode(&self, out: &mut WireWriter) {
        out.write_u8(self.update_type() as u8);
        match self {
            Self::Partial { guid, values } => {
                out.write_packed_guid(*guid);
                out.write_bytes(values);
            }
            Self::Movement { guid, movement } => {
                out.write_packed_guid(*guid);
                movement.encode(out);
            }
            Self::Create {
                guid,
                object_type,
                movement,
                values,
                ..
            } => {
                out.write_packed_guid(*guid);
                out.write_u8(object_type.as_u8());
                movement.encode(out);
                out.write_bytes(values);
            }
            Self::OutOfRange(guids) | Self::NearObjects(guids) => {
                let count = out.write_count(guids.len());
                for guid in &guids[..count] {
                    out.write_packed_guid(*guid);
                }
            }
        }
    }
}

/// Blocks sent together in one object-update message.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateBatch {
    blocks: Vec<UpdateBlock>,
}

impl UpdateBatch {
    /// Creates an empty batch.
    #[must_use]
    pub const fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Appends a block.
    pub fn push(&mut self, block: UpdateBlock) {
        self.blocks.push(block);
    }

    /// Number of blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if there are no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The blocks, in send order.
    #[must_use]
    pub fn blocks(&self) -> &[UpdateBlock] {
        &self.blocks
    }

    /// Writes the block count and every block into `out`.
    pub fn encode_into(&self, out: &mut WireWriter) {
        let count = out.write_count(self.blocks.len());
        for block in &self.blocks[..count] {
            block.encode(out);
        }
    }

    /// Encodes the batch.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut out = WireWriter::new();
        self.encode_into(&mut out);
        tracing::trace!(blocks = self.blocks.len(), bytes = out.len(), "encoded update batch");
        out.into_inner()
    }
}

impl FromIterator<UpdateBlock> for UpdateBatch {
    fn from_iter<I: IntoIterator<Item = UpdateBlock>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}
