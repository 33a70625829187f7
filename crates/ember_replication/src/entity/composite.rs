//! Entities made of several parts sharing one mask.

use ember_shared::{Guid, ObjectType};

use super::object::ObjectValues;
use super::player::PlayerValues;
use super::unit::UnitValues;
use crate::schema::{composite_layout_of, CompositeLayout};
use crate::values::marshal_composite;

/// Blocks in a creature (object + unit).
pub const CREATURE_BLOCKS: usize = 6 + 142;

/// Blocks in a player (object + unit + player).
pub const PLAYER_BLOCKS: usize = 6 + 142 + 1178;

/// A non-player unit.
#[derive(Clone, Debug)]
pub struct Creature {
    object: ObjectValues,
    unit: UnitValues,
    layout: CompositeLayout,
}

impl Creature {
    /// Object type sent in create blocks.
    pub const OBJECT_TYPE: ObjectType = ObjectType::Unit;

    /// Creates a creature with its guid and type mask set and nothing dirty.
    ///
    /// # Panics
    ///
    /// Panics if the object and unit schemas together exceed the mask limit.
    #[must_use]
    pub fn new(guid: Guid) -> Self {
        let mut object = ObjectValues::new();
        object.set_guid(guid);
        object.set_types(&[ObjectType::Object, ObjectType::Unit]);
        object.set_scale_x(1.0);
        object.record_mut().clear_dirty();

        let unit = UnitValues::new();
        let layout = composite_layout_of(
            "creature",
            &[object.record().schema().as_ref(), unit.record().schema().as_ref()],
        );

        Self { object, unit, layout }
    }

    /// Guid stored in the object part.
    #[inline]
    #[must_use]
    pub fn guid(&self) -> Guid {
        self.object.guid()
    }

    /// Object part.
    #[inline]
    #[must_use]
    pub fn object(&self) -> &ObjectValues {
        &self.object
    }

    /// Object part, mutably.
    #[inline]
    pub fn object_mut(&mut self) -> &mut ObjectValues {
        &mut self.object
    }

    /// Unit part.
    #[inline]
    #[must_use]
    pub fn unit(&self) -> &UnitValues {
        &self.unit
    }

    /// Unit part, mutably.
    #[inline]
    pub fn unit_mut(&mut self) -> &mut UnitValues {
        &mut self.unit
    }

    /// Block placement of the object and unit parts.
    #[inline]
    #[must_use]
    pub fn layout(&self) -> &CompositeLayout {
        &self.layout
    }

    /// Returns true if any part changed since the last marshal.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.object.is_dirty() || self.unit.is_dirty()
    }

    /// Encodes both parts as one values block, unit blocks offset by the
    /// object's.
    pub fn marshal(&mut self, only_dirty: bool) -> Vec<u8> {
        marshal_composite(
            &self.layout,
            &mut [self.object.record_mut(), self.unit.record_mut()],
            only_dirty,
        )
    }
}

/// A player avatar.
#[derive(Clone, Debug)]
pub struct Player {
    object: ObjectValues,
    unit: UnitValues,
    player: PlayerValues,
    layout: CompositeLayout,
}

impl Player {
    /// Object type sent in create blocks.
    pub const OBJECT_TYPE: ObjectType = ObjectType::Player;

    /// Creates a player with its guid and type mask set and nothing dirty.
    ///
    /// # Panics
    ///
    /// Panics if the three schemas together exceed the mask limit.
    #[must_use]
    pub fn new(guid: Guid) -> Self {
        let mut object = ObjectValues::new();
        object.set_guid(guid);
        object.set_types(&[ObjectType::Object, ObjectType::Unit, ObjectType::Player]);
        object.set_scale_x(1.0);
        object.record_mut().clear_dirty();

        let unit = UnitValues::new();
        let player = PlayerValues::new();
        let layout = composite_layout_of(
            "player",
            &[
                object.record().schema().as_ref(),
                unit.record().schema().as_ref(),
                player.record().schema().as_ref(),
            ],
        );

        Self {
            object,
            unit,
            player,
            layout,
        }
    }

    /// Guid stored in the object part.
    #[inline]
    #[must_use]
    pub fn guid(&self) -> Guid {
        self.object.guid()
    }

    /// Object part.
    #[inline]
    #[must_use]
    pub fn object(&self) -> &ObjectValues {
        &self.object
    }

    /// Object part, mutably.
    #[inline]
    pub fn object_mut(&mut self) -> &mut ObjectValues {
        &mut self.object
    }

    /// Unit part.
    #[inline]
    #[must_use]
    pub fn unit(&self) -> &UnitValues {
        &self.unit
    }

    /// Unit part, mutably.
    #[inline]
    pub fn unit_mut(&mut self) -> &mut UnitValues {
        &mut self.unit
    }

    /// Player part.
    #[inline]
    #[must_use]
    pub fn player(&self) -> &PlayerValues {
        &self.player
    }

    /// Player part, mutably.
    #[inline]
    pub fn player_mut(&mut self) -> &mut PlayerValues {
        &mut self.player
    }

    /// Block placement of the three parts.
    #[inline]
    #[must_use]
    pub fn layout(&self) -> &CompositeLayout {
        &self.layout
    }

    /// Returns true if any part changed since the last marshal.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.object.is_dirty() || self.unit.is_dirty() || self.player.is_dirty()
    }

    /// Encodes all three parts as one values block.
    pub fn marshal(&mut self, only_dirty: bool) -> Vec<u8> {
        marshal_composite(
            &self.layout,
            &mut [
                self.object.record_mut(),
                self.unit.record_mut(),
                self.player.record_mut(),
            ],
            only_dirty,
        )
    }
}
