//! # EMBER Replication - Entity State Codec
//!
//! Encodes avatar and creature state into the compact, partially-updatable
//! binary form that world clients consume.
//!
//! ## Architecture
//!
//! ```text
//!  descriptor table ──► Schema::compile ──► SchemaRegistry (once per type)
//!                                               │
//!  setter ──► ValueRecord ──► DirtySet          │
//!                 │                             │
//!                 └── marshal(only_dirty) ◄─────┘
//!                         │
//!            BlockMask + section words ──► CompositeValues (CompositeLayout offsets)
//!                                               │
//!  MovementBlock ──────────────────────────────►│
//!                                               ▼
//!                                     UpdateBlock / UpdateBatch ──► framer
//! ```
//!
//! - **Schema**: fields are grouped into sections that fill whole 32-bit
//!   blocks. A schema that does not tile into blocks fails at registration.
//! - **Values block**: `[word count][mask words][section words]`, all
//!   little-endian. Only dirty sections are sent unless a full update is
//!   requested.
//! - **Movement block**: not mask driven. A 16-bit update flag and a 48-bit
//!   living flag select optional regions in a fixed order.
//!
//! The codec does no I/O and holds no locks on the encode path. The schema
//! registry is the only shared state, and its entries are immutable once
//! inserted.
//!
//! ## Example
//!
//! ```rust,ignore
//! use ember_replication::{register_builtin_schemas, Player};
//! use ember_shared::Guid;
//!
//! register_builtin_schemas()?;
//!
//! let mut player = Player::new(Guid::new(1));
//! player.unit_mut().set_health(1200);
//! let create = player.marshal(false);   // every section
//! player.unit_mut().set_health(1100);
//! let partial = player.marshal(true);   // only the health section
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod entity;
pub mod error;
pub mod movement;
pub mod protocol;
pub mod schema;
pub mod values;

pub use config::{ReplicationConfig, UnknownFieldLog};
pub use entity::{
    register_builtin_schemas, Creature, ObjectField, ObjectValues, Player, PlayerField,
    PlayerValues, QuestLogEntry, SkillEntry, UnitField, UnitValues, VisibleItem,
};
pub use error::{ReplicationError, ReplicationResult};
pub use movement::{
    FallData, LivingData, LivingFlags, LivingMovement, MovementBlock, MovementSpeeds,
    PositionData, SplineData, SplineFacing, SplineFlags, StationaryPosition, TransportPassenger,
    UpdateFlags, VehicleData,
};
pub use protocol::{PackedGuid, UpdateBatch, UpdateBlock, UpdateType, WireWriter, MAX_LIST_LEN};
pub use schema::{
    composite_layout_of, global, install_global, schema_of, CompositeLayout, FieldDescriptor,
    FieldId, FieldKind, Replicated, Schema, SchemaRegistry, Section, SectionSpan,
};
pub use values::{
    marshal_composite, BlockMask, CompositeValues, DirtySet, EncodedPart, ValueRecord, WireValue,
    MAX_MASK_BLOCKS,
};

/// Size of one block (mask bit / section unit) in bits.
pub const BLOCK_BITS: usize = 32;

/// Size of one block in bytes.
pub const BLOCK_BYTES: usize = 4;

/// The mask word count is a single byte on the wire.
pub const MAX_MASK_WORDS: usize = u8::MAX as usize;
