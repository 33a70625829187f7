//! # Protocol
//!
//! Byte-level building blocks shared by values and movement encoding, and
//! the update-block glue handed to the packet framer.

mod guid;
mod update;
mod wire;

pub use guid::{PackedGuid, MAX_PACKED_GUID_LEN};
pub use update::{UpdateBatch, UpdateBlock, UpdateType};
pub use wire::{WireWriter, MAX_LIST_LEN};
