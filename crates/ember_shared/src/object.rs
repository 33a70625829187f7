//! Object identity: globally unique ids and object type classification.

use serde::{Deserialize, Serialize};

/// Globally unique 64-bit object identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Guid(pub u64);

impl Guid {
    /// The empty guid (no object).
    pub const EMPTY: Self = Self(0);

    /// Creates a guid from its raw value.
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Low 32 bits.
    #[inline]
    #[must_use]
    pub const fn low(self) -> u32 {
        self.0 as u32
    }

    /// High 32 bits.
    #[inline]
    #[must_use]
    pub const fn high(self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// Returns true for the empty guid.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for Guid {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<Guid> for u64 {
    fn from(guid: Guid) -> Self {
        guid.0
    }
}

/// Kind of world object. The discriminant is the bit index used in
/// [`ObjectTypeMask`] and the byte sent in create blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ObjectType {
    /// Base object.
    Object = 0,
    /// Item.
    Item = 1,
    /// Bag.
    Container = 2,
    /// Creature or NPC.
    Unit = 3,
    /// Player character.
    Player = 4,
    /// Static world object (doors, chests).
    GameObject = 5,
    /// Area effect.
    DynamicObject = 6,
    /// Corpse.
    Corpse = 7,
}

impl ObjectType {
    /// Wire byte for this type.
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Set of [`ObjectType`]s an object "is a" (a player is also a unit and an object).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectTypeMask(u32);

impl ObjectTypeMask {
    /// Empty mask.
    pub const EMPTY: Self = Self(0);

    /// Builds a mask from a list of types.
    #[must_use]
    pub fn from_types(types: &[ObjectType]) -> Self {
        Self(types.iter().fold(0, |acc, t| acc | 1 << t.as_u8()))
    }

    /// The standard hierarchy for a player: object, unit, player.
    #[must_use]
    pub fn player() -> Self {
        Self::from_types(&[ObjectType::Object, ObjectType::Unit, ObjectType::Player])
    }

    /// The standard hierarchy for a creature: object, unit.
    #[must_use]
    pub fn unit() -> Self {
        Self::from_types(&[ObjectType::Object, ObjectType::Unit])
    }

    /// Returns true if `t` is in the mask.
    #[inline]
    #[must_use]
    pub const fn contains(self, t: ObjectType) -> bool {
        self.0 & (1 << t as u8) != 0
    }

    /// Raw bits as sent in the object type field.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Rebuilds a mask from raw bits.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guid_halves() {
        let guid = Guid::new(0x1122_3344_5566_7788);
        assert_eq!(guid.low(), 0x5566_7788);
        assert_eq!(guid.high(), 0x1122_3344);
        assert!(!guid.is_empty());
        assert!(Guid::EMPTY.is_empty());
    }

    #[test]
    fn test_player_type_mask() {
        let mask = ObjectTypeMask::player();
        assert_eq!(mask.bits(), 0x19);
        assert!(mask.contains(ObjectType::Unit));
        assert!(!mask.contains(ObjectType::Item));
        assert_eq!(ObjectTypeMask::unit().bits(), 0x09);
    }
}
