//! # Replication Error Types
//!
//! Every error here is a start-up error: a mis-declared schema or a bad
//! config file. Nothing on the encode path returns an error.

use thiserror::Error;

/// Errors that can occur while building schemas or loading configuration.
#[derive(Error, Debug)]
pub enum ReplicationError {
    /// A group of fields closed a section on a width that is not a whole
    /// number of 32-bit blocks.
    #[error("schema {schema}: fields ending at block {block} spill {spill} bits past a 32-bit boundary")]
    MisalignedSchema {
        /// Schema name.
        schema: &'static str,
        /// Block index at which the offending section starts.
        block: usize,
        /// Bits left over after the last whole block.
        spill: usize,
    },

    /// Two fields in one schema share a name.
    #[error("schema {schema}: duplicate field name {name:?}")]
    DuplicateField {
        /// Schema name.
        schema: &'static str,
        /// The repeated field name.
        name: &'static str,
    },

    /// The schema (or composite) has more blocks than a mask can address.
    #[error("schema {schema}: {blocks} blocks exceed the mask limit of {limit}")]
    SchemaTooLarge {
        /// Schema name.
        schema: &'static str,
        /// Total blocks in the schema.
        blocks: usize,
        /// Maximum addressable blocks.
        limit: usize,
    },

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for schema and configuration operations.
pub type ReplicationResult<T> = Result<T, ReplicationError>;
