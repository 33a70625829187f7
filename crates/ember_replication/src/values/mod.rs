//! # Values Blocks
//!
//! Dirty tracking, bit packing, the block presence mask, and composite
//! merging for schema-driven entity state.

mod composite;
mod dirty;
mod mask;
mod record;
mod writer;

pub use composite::{marshal_composite, CompositeValues};
pub use dirty::DirtySet;
pub use mask::{BlockMask, MAX_MASK_BLOCKS};
pub use record::{EncodedPart, ValueRecord, WireValue};
pub use writer::BlockWriter;
