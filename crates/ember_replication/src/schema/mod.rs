//! # Schemas
//!
//! Descriptor tables, the compiler that turns them into block sections,
//! composite layouts, and the registry that holds the compiled result for
//! each entity type.

mod compiler;
mod descriptor;
mod layout;
mod registry;

pub use compiler::{FieldLayout, Schema, Section, SectionSpan};
pub use descriptor::{FieldDescriptor, FieldId, FieldKind, PADDING_NAME};
pub use layout::CompositeLayout;
pub use registry::{
    composite_layout_of, global, install_global, schema_of, Replicated, SchemaRegistry,
};
