//! # EMBER Shared
//!
//! Plain world types used by the replication codec and by game logic.
//!
//! Everything in here is `Copy`, fixed-size and free of I/O. Vectors are
//! `Pod` so they can be laid on the wire without field-by-field copies.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod math;
pub mod object;

pub use math::{Vector3, Vector4};
pub use object::{Guid, ObjectType, ObjectTypeMask};
