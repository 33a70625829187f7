//! # Built-in Entities
//!
//! Descriptor tables and typed wrappers for the object, unit and player
//! schemas, plus the composites the world sends to clients.
//!
//! | Entity | Parts | Blocks |
//! |--------|-------|--------|
//! | [`Creature`] | object + unit | 6 + 142 |
//! | [`Player`] | object + unit + player | 6 + 142 + 1178 |
//!
//! Every table comes with a field enum whose discriminant is the descriptor
//! index, so setters flag sections without a name lookup.

use crate::error::ReplicationResult;
use crate::schema::{global, SchemaRegistry};

/// Builds one [`FieldDescriptor`](crate::schema::FieldDescriptor) from the
/// short table syntax.
macro_rules! descriptor {
    (_ : $kind:ident [$len:literal]) => {
        $crate::schema::FieldDescriptor::padding($crate::schema::FieldKind::$kind, $len)
    };
    ($name:literal : $kind:ident [$len:literal]) => {
        $crate::schema::FieldDescriptor::array($name, $crate::schema::FieldKind::$kind, $len)
    };
    ($name:literal : $kind:ident) => {
        $crate::schema::FieldDescriptor::scalar($name, $crate::schema::FieldKind::$kind)
    };
}

/// Declares a field enum and its descriptor table side by side.
///
/// ```text
/// field_table! {
///     pub enum ObjectField in OBJECT_FIELDS {
///         Guid => ["guid": U64],
///         Padding => [_: U32[1]],
///     }
/// }
/// ```
macro_rules! field_table {
    (
        $(#[$meta:meta])*
        pub enum $name:ident in $table:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => [$($desc:tt)+],
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(usize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        #[doc = concat!("Descriptor table for [`", stringify!($name), "`], in declaration order.")]
        pub const $table: &[$crate::schema::FieldDescriptor] = &[
            $(descriptor!($($desc)+),)+
        ];

        impl $name {
            /// Declaration of this field.
            #[must_use]
            pub const fn descriptor(self) -> $crate::schema::FieldDescriptor {
                $table[self as usize]
            }
        }

        impl From<$name> for $crate::schema::FieldId {
            fn from(field: $name) -> Self {
                $crate::schema::FieldId(field as usize)
            }
        }
    };
}

/// Record plumbing shared by every typed wrapper.
macro_rules! values_wrapper {
    ($wrapper:ident, $field:ident, $schema:literal, $table:ident) => {
        impl $crate::schema::Replicated for $wrapper {
            const NAME: &'static str = $schema;
            const FIELDS: &'static [$crate::schema::FieldDescriptor] = $table;
        }

        impl $wrapper {
            /// Creates a zeroed instance with nothing dirty.
            ///
            /// # Panics
            ///
            /// Panics if the descriptor table does not compile.
            #[must_use]
            pub fn new() -> Self {
                Self {
                    record: $crate::values::ValueRecord::new($crate::schema::schema_of::<Self>()),
                }
            }

            /// Sets a scalar field and flags its section.
            #[inline]
            pub fn set<T: $crate::values::WireValue>(&mut self, field: $field, value: T) {
                self.record.set(field, value);
            }

            /// Sets one element of an array field and flags its section.
            #[inline]
            pub fn set_at<T: $crate::values::WireValue>(&mut self, field: $field, index: usize, value: T) {
                self.record.set_at(field, index, value);
            }

            /// Reads a scalar field.
            #[inline]
            #[must_use]
            pub fn get<T: $crate::values::WireValue>(&self, field: $field) -> T {
                self.record.get(field)
            }

            /// Reads one element of an array field.
            #[inline]
            #[must_use]
            pub fn get_at<T: $crate::values::WireValue>(&self, field: $field, index: usize) -> T {
                self.record.get_at(field, index)
            }

            /// Flags the section owning `field` without changing it.
            #[inline]
            pub fn flag(&mut self, field: $field) {
                self.record.flag_field(field);
            }

            /// The underlying record.
            #[inline]
            #[must_use]
            pub fn record(&self) -> &$crate::values::ValueRecord {
                &self.record
            }

            /// The underlying record, mutably.
            #[inline]
            pub fn record_mut(&mut self) -> &mut $crate::values::ValueRecord {
                &mut self.record
            }

            /// Returns true if anything changed since the last marshal.
            #[inline]
            #[must_use]
            pub fn is_dirty(&self) -> bool {
                self.record.is_dirty()
            }

            /// Encodes this part on its own as a values block.
            pub fn marshal(&mut self, only_dirty: bool) -> Vec<u8> {
                self.record.marshal(only_dirty)
            }
        }

        impl Default for $wrapper {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

/// Named getter and setter pairs for scalar fields.
macro_rules! scalar_accessors {
    ($field:ident; $($(#[$doc:meta])* $get:ident, $set:ident: $variant:ident => $ty:ty;)+) => {
        $(
            $(#[$doc])*
            #[inline]
            #[must_use]
            pub fn $get(&self) -> $ty {
                self.record.get($field::$variant)
            }

            #[doc = concat!("Sets `", stringify!($get), "` and flags its section.")]
            #[inline]
            pub fn $set(&mut self, value: $ty) {
                self.record.set($field::$variant, value);
            }
        )+
    };
}

/// Named getter and setter pairs for array fields.
macro_rules! array_accessors {
    ($field:ident; $($(#[$doc:meta])* $get:ident, $set:ident: $variant:ident => $ty:ty;)+) => {
        $(
            $(#[$doc])*
            #[inline]
            #[must_use]
            pub fn $get(&self, index: usize) -> $ty {
                self.record.get_at($field::$variant, index)
            }

            #[doc = concat!("Sets one element of `", stringify!($get), "` and flags its section.")]
            #[inline]
            pub fn $set(&mut self, index: usize, value: $ty) {
                self.record.set_at($field::$variant, index, value);
            }
        )+
    };
}

mod composite;
mod object;
mod player;
mod unit;

pub use composite::{Creature, Player, CREATURE_BLOCKS, PLAYER_BLOCKS};
pub use object::{ObjectField, ObjectValues, OBJECT_FIELDS};
pub use player::{
    PlayerField, PlayerValues, QuestLogEntry, SkillEntry, VisibleItem, BANK_SLOT_COUNT,
    EXPLORED_ZONE_WORDS, INVENTORY_SLOT_COUNT, PACK_SLOT_COUNT, PLAYER_FIELDS, QUEST_LOG_COUNT,
    SKILL_COUNT, VISIBLE_ITEM_COUNT,
};
pub use unit::{UnitField, UnitValues, POWER_COUNT, SCHOOL_COUNT, STAT_COUNT, UNIT_FIELDS};

/// Registers the object, unit and player schemas into `registry` and checks
/// that both composites fit the mask.
///
/// # Errors
///
/// Returns the first schema or composite that fails to compile.
pub fn register_builtin_schemas_in(registry: &SchemaRegistry) -> ReplicationResult<()> {
    let object = registry.register::<ObjectValues>()?;
    let unit = registry.register::<UnitValues>()?;
    let player = registry.register::<PlayerValues>()?;

    registry.check_composite("creature", &[object.as_ref(), unit.as_ref()])?;
    let layout =
        registry.check_composite("player", &[object.as_ref(), unit.as_ref(), player.as_ref()])?;
    tracing::debug!(player_blocks = layout.total_blocks(), "registered builtin schemas");
    Ok(())
}

/// Registers the built-in schemas into the global registry. Call once at
/// start-up, before any entity is constructed.
///
/// # Errors
///
/// Same as [`register_builtin_schemas_in`].
pub fn register_builtin_schemas() -> ReplicationResult<()> {
    register_builtin_schemas_in(global())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_schemas_register() {
        let registry = SchemaRegistry::new();
        register_builtin_schemas_in(&registry).unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get::<ObjectValues>().unwrap().total_blocks(), 6);
        assert_eq!(registry.get::<UnitValues>().unwrap().total_blocks(), 142);
        assert_eq!(registry.get::<PlayerValues>().unwrap().total_blocks(), 1178);
    }

    #[test]
    fn test_small_mask_rejects_player_composite() {
        let registry = SchemaRegistry::with_config(crate::ReplicationConfig {
            max_mask_words: 41,
            ..crate::ReplicationConfig::default()
        });
        // 1312 blocks fit every part but not the 1326-block player.
        let err = register_builtin_schemas_in(&registry).unwrap_err();
        assert!(matches!(
            err,
            crate::ReplicationError::SchemaTooLarge { schema: "player", blocks: 1326, .. }
        ));
    }
}
