//! Fields shared by creatures and players.

use ember_shared::Guid;

use crate::values::ValueRecord;

/// Number of power types (mana, rage, focus, energy, happiness, runes,
/// runic power).
pub const POWER_COUNT: usize = 7;

/// Number of primary stats (strength, agility, stamina, intellect, spirit).
pub const STAT_COUNT: usize = 5;

/// Number of spell schools.
pub const SCHOOL_COUNT: usize = 7;

field_table! {
    /// Fields of the unit schema.
    pub enum UnitField in UNIT_FIELDS {
        /// Unit this one charms.
        Charm => ["charm": U64],
        /// Active summon.
        Summon => ["summon": U64],
        /// Companion critter.
        Critter => ["critter": U64],
        /// Unit charming this one.
        CharmedBy => ["charmed_by": U64],
        /// Summoner.
        SummonedBy => ["summoned_by": U64],
        /// Creator.
        CreatedBy => ["created_by": U64],
        /// Current target.
        Target => ["target": U64],
        /// Object being channelled at.
        ChannelObject => ["channel_object": U64],
        /// Spell being channelled.
        ChannelSpell => ["channel_spell": U32],
        /// Race id.
        Race => ["race": U8],
        /// Class id.
        Class => ["class": U8],
        /// Gender.
        Gender => ["gender": U8],
        /// Display power type.
        PowerType => ["power_type": U8],
        /// Current health.
        Health => ["health": U32],
        /// Current mana.
        Mana => ["mana": U32],
        /// Current rage.
        Rage => ["rage": U32],
        /// Current focus.
        Focus => ["focus": U32],
        /// Current energy.
        Energy => ["energy": U32],
        /// Current pet happiness.
        Happiness => ["happiness": U32],
        /// Current runes.
        Runes => ["runes": U32],
        /// Current runic power.
        RunicPower => ["runic_power": U32],
        /// Maximum health.
        MaxHealth => ["max_health": U32],
        /// Maximum mana.
        MaxMana => ["max_mana": U32],
        /// Maximum rage.
        MaxRage => ["max_rage": U32],
        /// Maximum focus.
        MaxFocus => ["max_focus": U32],
        /// Maximum energy.
        MaxEnergy => ["max_energy": U32],
        /// Maximum pet happiness.
        MaxHappiness => ["max_happiness": U32],
        /// Maximum runes.
        MaxRunes => ["max_runes": U32],
        /// Maximum runic power.
        MaxRunicPower => ["max_runic_power": U32],
        /// Out-of-combat regen per power type.
        PowerRegenFlatModifier => ["power_regen_flat_modifier": F32[7]],
        /// In-combat regen per power type.
        PowerRegenInterruptedFlatModifier => ["power_regen_interrupted_flat_modifier": F32[7]],
        /// Level.
        Level => ["level": U32],
        /// Faction template id.
        FactionTemplate => ["faction_template": U32],
        /// Displayed weapon item ids.
        VirtualItemSlotIds => ["virtual_item_slot_ids": U32[3]],
        /// 0x1
        ServerControlled => ["server_controlled": Bool],
        /// 0x2
        NonAttackable => ["non_attackable": Bool],
        /// 0x4
        RemoveClientControl => ["remove_client_control": Bool],
        /// 0x8
        PlayerControlled => ["player_controlled": Bool],
        /// 0x10
        Rename => ["rename": Bool],
        /// 0x20
        PetAbandon => ["pet_abandon": Bool],
        /// 0x40
        Unk6 => ["unit_flag_unk6": Bool],
        /// 0x80
        Unk7 => ["unit_flag_unk7": Bool],
        /// 0x100
        OocNotAttackable => ["ooc_not_attackable": Bool],
        /// 0x200
        Passive => ["passive": Bool],
        /// 0x400
        Unk10 => ["unit_flag_unk10": Bool],
        /// 0x800
        Unk11 => ["unit_flag_unk11": Bool],
        /// 0x1000
        Pvp => ["pvp": Bool],
        /// 0x2000
        IsSilenced => ["is_silenced": Bool],
        /// 0x4000
        IsPersuaded => ["is_persuaded": Bool],
        /// 0x8000
        Swimming => ["swimming": Bool],
        /// 0x10000
        RemoveAttackIcon => ["remove_attack_icon": Bool],
        /// 0x20000
        IsPacified => ["is_pacified": Bool],
        /// 0x40000
        IsStunned => ["is_stunned": Bool],
        /// 0x80000
        InCombat => ["in_combat": Bool],
        /// 0x100000
        InTaxiFlight => ["in_taxi_flight": Bool],
        /// 0x200000
        Disarmed => ["disarmed": Bool],
        /// 0x400000
        Confused => ["confused": Bool],
        /// 0x800000
        Fleeing => ["fleeing": Bool],
        /// 0x1000000
        Possessed => ["possessed": Bool],
        /// 0x2000000
        NotSelectable => ["not_selectable": Bool],
        /// 0x4000000
        Skinnable => ["skinnable": Bool],
        /// 0x8000000
        AurasVisible => ["auras_visible": Bool],
        /// 0x10000000
        Unk28 => ["unit_flag_unk28": Bool],
        /// 0x20000000
        Unk29 => ["unit_flag_unk29": Bool],
        /// 0x40000000
        Sheathe => ["sheathe": Bool],
        /// 0x80000000
        NoKillReward => ["no_kill_reward": Bool],
        /// Feigning death.
        FeignDeath => ["feign_death": Bool],
        /// Hide body armor.
        HideBodyArmor => ["hide_body_armor": Bool],
        /// Ignores reputation.
        IgnoreReputation => ["ignore_reputation": Bool],
        /// Understands all languages.
        ComprehendLanguage => ["comprehend_language": Bool],
        /// Mirror image.
        Cloned => ["cloned": Bool],
        /// Flags2 0x20.
        Flags2Unk5 => ["unit_flag2_unk5": Bool],
        /// Forced movement.
        ForceMove => ["force_move": Bool],
        /// Off-hand disarmed.
        DisarmOffhand => ["disarm_offhand": Bool],
        /// Flags2 0x100.
        Flags2Unk8 => ["unit_flag2_unk8": Bool],
        /// Flags2 0x200.
        Flags2Unk9 => ["unit_flag2_unk9": Bool],
        /// Ranged disarmed.
        DisarmRanged => ["disarm_ranged": Bool],
        /// Power regenerates.
        RegeneratePower => ["regenerate_power": Bool],
        /// Spell click restricted to group.
        SpellClickInGroup => ["spell_click_in_group": Bool],
        /// Spell click disabled.
        SpellClickDisabled => ["spell_click_disabled": Bool],
        /// Interactable by any reaction.
        InteractAnyReaction => ["interact_any_reaction": Bool],
        /// Unused flags2 bits.
        Flags2Padding => [_: Bool[17]],
        /// Aura state bits.
        AuraState => ["aura_state": U32],
        /// Main-hand swing timer.
        BaseAttackTime => ["base_attack_time": U32],
        /// Off-hand swing timer.
        OffhandAttackTime => ["offhand_attack_time": U32],
        /// Ranged swing timer.
        RangedAttackTime => ["ranged_attack_time": U32],
        /// Collision radius.
        BoundingRadius => ["bounding_radius": F32],
        /// Melee reach.
        CombatReach => ["combat_reach": F32],
        /// Current model.
        DisplayId => ["display_id": U32],
        /// Model when unmodified.
        NativeDisplayId => ["native_display_id": U32],
        /// Mount model.
        MountDisplayId => ["mount_display_id": U32],
        /// Main-hand minimum damage.
        MinDamage => ["min_damage": F32],
        /// Main-hand maximum damage.
        MaxDamage => ["max_damage": F32],
        /// Off-hand minimum damage.
        MinOffhandDamage => ["min_offhand_damage": U32],
        /// Off-hand maximum damage.
        MaxOffhandDamage => ["max_offhand_damage": U32],
        /// Stand state.
        StandState => ["stand_state": U8],
        /// Pet loyalty level.
        LoyaltyLevel => ["loyalty_level": U8],
        /// Shapeshift form.
        ShapeshiftForm => ["shapeshift_form": U8],
        /// Stand state modifiers.
        StandMiscFlags => ["stand_misc_flags": U8],
        /// Pet number.
        PetNumber => ["pet_number": U32],
        /// Pet name timestamp.
        PetNameTimestamp => ["pet_name_timestamp": U32],
        /// Pet experience.
        PetExperience => ["pet_experience": U32],
        /// Pet experience to next level.
        PetNextLevelExp => ["pet_next_level_exp": U32],
        /// Can be looted.
        Lootable => ["lootable": Bool],
        /// Shown on the minimap tracker.
        TrackUnit => ["track_unit": Bool],
        /// Tapped by someone.
        Tapped => ["tapped": Bool],
        /// Tapped by the viewing player.
        TappedByPlayer => ["tapped_by_player": Bool],
        /// Special info visible.
        SpecialInfo => ["special_info": Bool],
        /// Displays as dead.
        VisuallyDead => ["visually_dead": Bool],
        /// Refer-a-friend link.
        ReferAFriend => ["refer_a_friend": Bool],
        /// Tapped by the whole threat list.
        TappedByAllThreatList => ["tapped_by_all_threat_list": Bool],
        /// Unused dynamic flag bits.
        DynamicFlagsPadding => [_: Bool[24]],
        /// Cast speed multiplier.
        ModCastSpeed => ["mod_cast_speed": F32],
        /// Spell that created this unit.
        CreatedBySpell => ["created_by_spell": U32],
        /// Has gossip.
        Gossip => ["gossip": Bool],
        /// Gives quests.
        QuestGiver => ["quest_giver": Bool],
        /// Sells items.
        Vendor => ["vendor": Bool],
        /// Flight master.
        FlightMaster => ["flight_master": Bool],
        /// Trains skills.
        Trainer => ["trainer": Bool],
        /// Spirit healer.
        SpiritHealer => ["spirit_healer": Bool],
        /// Spirit guide.
        SpiritGuide => ["spirit_guide": Bool],
        /// Innkeeper.
        Innkeeper => ["innkeeper": Bool],
        /// Banker.
        Banker => ["banker": Bool],
        /// Accepts petitions.
        Petitioner => ["petitioner": Bool],
        /// Designs tabards.
        TabardDesigner => ["tabard_designer": Bool],
        /// Battleground master.
        BattleMaster => ["battle_master": Bool],
        /// Auctioneer.
        Auctioneer => ["auctioneer": Bool],
        /// Stable master.
        StableMaster => ["stable_master": Bool],
        /// Repairs items.
        Repairer => ["repairer": Bool],
        /// Unused NPC flag bits.
        NpcFlagsPadding => [_: Bool[17]],
        /// Looping emote.
        NpcEmoteState => ["npc_emote_state": U32],
        /// Strength.
        Strength => ["strength": U32],
        /// Agility.
        Agility => ["agility": U32],
        /// Stamina.
        Stamina => ["stamina": U32],
        /// Intellect.
        Intellect => ["intellect": U32],
        /// Spirit.
        Spirit => ["spirit": U32],
        /// Positive stat buffs.
        PosStats => ["pos_stats": U32[5]],
        /// Negative stat buffs.
        NegStats => ["neg_stats": U32[5]],
        /// Resistances per school.
        Resistances => ["resistances": U32[7]],
        /// Positive resistance buffs per school.
        ResistanceBuffModsPositive => ["resistance_buff_mods_positive": U32[7]],
        /// Negative resistance buffs per school.
        ResistanceBuffModsNegative => ["resistance_buff_mods_negative": U32[7]],
        /// Base mana.
        BaseMana => ["base_mana": U32],
        /// Base health.
        BaseHealth => ["base_health": U32],
        /// Sheath state.
        SheathState => ["sheath_state": U8],
        /// Aura byte flags.
        AuraByteFlags => ["aura_byte_flags": U8],
        /// Pet can be renamed.
        PetRename => ["pet_rename": U8],
        /// Pet shapeshift form.
        PetShapeshiftForm => ["pet_shapeshift_form": U8],
        /// Melee attack power.
        AttackPower => ["attack_power": I32],
        /// Melee attack power modifiers.
        AttackPowerMods => ["attack_power_mods": I32],
        /// Melee attack power multiplier.
        AttackPowerMultiplier => ["attack_power_multiplier": F32],
        /// Ranged attack power.
        RangedAttackPower => ["ranged_attack_power": I32],
        /// Ranged attack power modifiers.
        RangedAttackPowerMods => ["ranged_attack_power_mods": I32],
        /// Ranged attack power multiplier.
        RangedAttackPowerMultiplier => ["ranged_attack_power_multiplier": F32],
        /// Ranged minimum damage.
        MinRangedDamage => ["min_ranged_damage": F32],
        /// Ranged maximum damage.
        MaxRangedDamage => ["max_ranged_damage": F32],
        /// Flat power cost modifier per school.
        PowerCostModifier => ["power_cost_modifier": U32[7]],
        /// Power cost multiplier per school.
        PowerCostMultiplier => ["power_cost_multiplier": F32[7]],
        /// Maximum health multiplier.
        MaxHealthModifier => ["max_health_modifier": F32],
        /// Hover height.
        HoverHeight => ["hover_height": F32],
        /// Unused trailing block.
        Padding => [_: U32[1]],
    }
}

/// Current power fields, indexed by power type.
const POWER_FIELDS: [UnitField; POWER_COUNT] = [
    UnitField::Mana,
    UnitField::Rage,
    UnitField::Focus,
    UnitField::Energy,
    UnitField::Happiness,
    UnitField::Runes,
    UnitField::RunicPower,
];

/// Maximum power fields, indexed by power type.
const MAX_POWER_FIELDS: [UnitField; POWER_COUNT] = [
    UnitField::MaxMana,
    UnitField::MaxRage,
    UnitField::MaxFocus,
    UnitField::MaxEnergy,
    UnitField::MaxHappiness,
    UnitField::MaxRunes,
    UnitField::MaxRunicPower,
];

/// Primary stat fields, in stat order.
const STAT_FIELDS: [UnitField; STAT_COUNT] = [
    UnitField::Strength,
    UnitField::Agility,
    UnitField::Stamina,
    UnitField::Intellect,
    UnitField::Spirit,
];

/// Unit part of a creature or player.
#[derive(Clone, Debug)]
pub struct UnitValues {
    record: ValueRecord,
}

values_wrapper!(UnitValues, UnitField, "unit", UNIT_FIELDS);

impl UnitValues {
    scalar_accessors! {
        UnitField;
        /// Unit this one charms.
        charm, set_charm: Charm => Guid;
        /// Active summon.
        summon, set_summon: Summon => Guid;
        /// Summoner.
        summoned_by, set_summoned_by: SummonedBy => Guid;
        /// Creator.
        created_by, set_created_by: CreatedBy => Guid;
        /// Current target.
        target, set_target: Target => Guid;
        /// Spell being channelled.
        channel_spell, set_channel_spell: ChannelSpell => u32;
        /// Race id.
        race, set_race: Race => u8;
        /// Class id.
        class, set_class: Class => u8;
        /// Gender.
        gender, set_gender: Gender => u8;
        /// Display power type.
        power_type, set_power_type: PowerType => u8;
        /// Current health.
        health, set_health: Health => u32;
        /// Maximum health.
        max_health, set_max_health: MaxHealth => u32;
        /// Level.
        level, set_level: Level => u32;
        /// Faction template id.
        faction_template, set_faction_template: FactionTemplate => u32;
        /// Controlled by the server.
        server_controlled, set_server_controlled: ServerControlled => bool;
        /// Cannot be attacked.
        non_attackable, set_non_attackable: NonAttackable => bool;
        /// Controlled by a player.
        player_controlled, set_player_controlled: PlayerControlled => bool;
        /// PvP flagged.
        pvp, set_pvp: Pvp => bool;
        /// Swimming.
        swimming, set_swimming: Swimming => bool;
        /// In combat.
        in_combat, set_in_combat: InCombat => bool;
        /// On a taxi flight.
        in_taxi_flight, set_in_taxi_flight: InTaxiFlight => bool;
        /// Cannot be selected.
        not_selectable, set_not_selectable: NotSelectable => bool;
        /// Can be skinned.
        skinnable, set_skinnable: Skinnable => bool;
        /// Feigning death.
        feign_death, set_feign_death: FeignDeath => bool;
        /// Power regenerates.
        regenerate_power, set_regenerate_power: RegeneratePower => bool;
        /// Aura state bits.
        aura_state, set_aura_state: AuraState => u32;
        /// Main-hand swing timer.
        base_attack_time, set_base_attack_time: BaseAttackTime => u32;
        /// Ranged swing timer.
        ranged_attack_time, set_ranged_attack_time: RangedAttackTime => u32;
        /// Collision radius.
        bounding_radius, set_bounding_radius: BoundingRadius => f32;
        /// Melee reach.
        combat_reach, set_combat_reach: CombatReach => f32;
        /// Current model.
        display_id, set_display_id: DisplayId => u32;
        /// Model when unmodified.
        native_display_id, set_native_display_id: NativeDisplayId => u32;
        /// Mount model.
        mount_display_id, set_mount_display_id: MountDisplayId => u32;
        /// Main-hand minimum damage.
        min_damage, set_min_damage: MinDamage => f32;
        /// Main-hand maximum damage.
        max_damage, set_max_damage: MaxDamage => f32;
        /// Stand state.
        stand_state, set_stand_state: StandState => u8;
        /// Shapeshift form.
        shapeshift_form, set_shapeshift_form: ShapeshiftForm => u8;
        /// Can be looted.
        lootable, set_lootable: Lootable => bool;
        /// Tapped by someone.
        tapped, set_tapped: Tapped => bool;
        /// Displays as dead.
        visually_dead, set_visually_dead: VisuallyDead => bool;
        /// Cast speed multiplier.
        mod_cast_speed, set_mod_cast_speed: ModCastSpeed => f32;
        /// Has gossip.
        gossip, set_gossip: Gossip => bool;
        /// Gives quests.
        quest_giver, set_quest_giver: QuestGiver => bool;
        /// Sells items.
        vendor, set_vendor: Vendor => bool;
        /// Trains skills.
        trainer, set_trainer: Trainer => bool;
        /// Looping emote.
        npc_emote_state, set_npc_emote_state: NpcEmoteState => u32;
        /// Base mana.
        base_mana, set_base_mana: BaseMana => u32;
        /// Base health.
        base_health, set_base_health: BaseHealth => u32;
        /// Sheath state.
        sheath_state, set_sheath_state: SheathState => u8;
        /// Melee attack power.
        attack_power, set_attack_power: AttackPower => i32;
        /// Melee attack power multiplier.
        attack_power_multiplier, set_attack_power_multiplier: AttackPowerMultiplier => f32;
        /// Ranged attack power.
        ranged_attack_power, set_ranged_attack_power: RangedAttackPower => i32;
        /// Maximum health multiplier.
        max_health_modifier, set_max_health_modifier: MaxHealthModifier => f32;
        /// Hover height.
        hover_height, set_hover_height: HoverHeight => f32;
    }

    array_accessors! {
        UnitField;
        /// Out-of-combat regen for one power type.
        power_regen, set_power_regen: PowerRegenFlatModifier => f32;
        /// One weapon slot's item id.
        virtual_item, set_virtual_item: VirtualItemSlotIds => u32;
        /// Positive buff to one stat.
        pos_stat, set_pos_stat: PosStats => u32;
        /// Negative buff to one stat.
        neg_stat, set_neg_stat: NegStats => u32;
        /// One school's resistance.
        resistance, set_resistance: Resistances => u32;
        /// Flat power cost modifier for one school.
        power_cost_modifier, set_power_cost_modifier: PowerCostModifier => u32;
        /// Power cost multiplier for one school.
        power_cost_multiplier, set_power_cost_multiplier: PowerCostMultiplier => f32;
    }

    /// Current power of one type. Zero for an unknown type.
    #[must_use]
    pub fn power(&self, power_type: usize) -> u32 {
        POWER_FIELDS.get(power_type).map_or(0, |&f| self.record.get(f))
    }

    /// Sets the current power of one type. Unknown types are ignored.
    pub fn set_power(&mut self, power_type: usize, value: u32) {
        if let Some(&field) = POWER_FIELDS.get(power_type) {
            self.record.set(field, value);
        }
    }

    /// Maximum power of one type. Zero for an unknown type.
    #[must_use]
    pub fn max_power(&self, power_type: usize) -> u32 {
        MAX_POWER_FIELDS.get(power_type).map_or(0, |&f| self.record.get(f))
    }

    /// Sets the maximum power of one type. Unknown types are ignored.
    pub fn set_max_power(&mut self, power_type: usize, value: u32) {
        if let Some(&field) = MAX_POWER_FIELDS.get(power_type) {
            self.record.set(field, value);
        }
    }

    /// One primary stat. Zero for an unknown stat.
    #[must_use]
    pub fn stat(&self, stat: usize) -> u32 {
        STAT_FIELDS.get(stat).map_or(0, |&f| self.record.get(f))
    }

    /// Sets one primary stat. Unknown stats are ignored.
    pub fn set_stat(&mut self, stat: usize, value: u32) {
        if let Some(&field) = STAT_FIELDS.get(stat) {
            self.record.set(field, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let unit = UnitValues::new();
        let schema = unit.record().schema();
        assert_eq!(schema.total_blocks(), 142);
        assert_eq!(schema.sections().len(), 81);
        assert_eq!(schema.padding().len(), 1);
        assert_eq!(schema.padding()[0].block_start, 141);
        assert_eq!(schema.slot_count(), 208);
    }

    #[test]
    fn test_section_starts() {
        let unit = UnitValues::new();
        let schema = unit.record().schema();
        let start = |field: UnitField| {
            let section = schema.section_of_field(field.into()).unwrap();
            let section = &schema.sections()[section];
            (section.block_start(), section.block_count())
        };

        assert_eq!(start(UnitField::ChannelSpell), (16, 1));
        assert_eq!(start(UnitField::PowerType), (17, 1));
        assert_eq!(start(UnitField::MaxRunicPower), (33, 1));
        assert_eq!(start(UnitField::PowerRegenInterruptedFlatModifier), (41, 7));
        assert_eq!(start(UnitField::VirtualItemSlotIds), (50, 3));
        assert_eq!(start(UnitField::NoKillReward), (53, 1));
        assert_eq!(start(UnitField::InteractAnyReaction), (54, 1));
        assert_eq!(start(UnitField::MaxOffhandDamage), (67, 1));
        assert_eq!(start(UnitField::StandMiscFlags), (68, 1));
        assert_eq!(start(UnitField::TappedByAllThreatList), (73, 1));
        assert_eq!(start(UnitField::Repairer), (76, 1));
        assert_eq!(start(UnitField::PosStats), (83, 5));
        assert_eq!(start(UnitField::ResistanceBuffModsNegative), (107, 7));
        assert_eq!(start(UnitField::BaseMana), (114, 1));
        assert_eq!(start(UnitField::PetShapeshiftForm), (116, 1));
        assert_eq!(start(UnitField::PowerCostModifier), (125, 7));
        assert_eq!(start(UnitField::PowerCostMultiplier), (132, 7));
        assert_eq!(start(UnitField::HoverHeight), (140, 1));
    }

    #[test]
    fn test_field_enum_matches_table() {
        assert_eq!(UNIT_FIELDS.len(), UnitField::Padding as usize + 1);
        assert_eq!(UnitField::Health.descriptor().name, "health");
        assert_eq!(UnitField::HoverHeight.descriptor().name, "hover_height");
        assert_eq!(UnitField::Flags2Padding.descriptor().len, 17);
    }

    #[test]
    fn test_health_flags_one_block() {
        let mut unit = UnitValues::new();
        unit.set_health(1200);
        assert_eq!(unit.health(), 1200);
        let bytes = unit.marshal(true);
        // block 18 is bit 18 of word 0
        assert_eq!(bytes, [&[0x01, 0x00, 0x00, 0x04, 0x00][..], &1200u32.to_le_bytes()].concat());
    }

    #[test]
    fn test_unit_flags_pack_into_one_word() {
        let mut unit = UnitValues::new();
        unit.set_server_controlled(true);
        unit.set_in_combat(true);
        let bytes = unit.marshal(true);
        // block 53 is bit 21 of word 1
        assert_eq!(bytes[0], 2);
        assert_eq!(&bytes[5..9], &(1u32 << 21).to_le_bytes());
        assert_eq!(&bytes[9..], &(1u32 | 0x8_0000).to_le_bytes());
    }

    #[test]
    fn test_flags2_bools_pack_into_one_word() {
        let mut unit = UnitValues::new();
        unit.set_feign_death(true);
        unit.set_regenerate_power(true);
        let bytes = unit.marshal(true);
        assert_eq!(&bytes[9..], &(1u32 | 0x800).to_le_bytes());
    }

    #[test]
    fn test_power_by_type() {
        let mut unit = UnitValues::new();
        unit.set_power(3, 100);
        unit.set_max_power(POWER_COUNT, 1);
        assert_eq!(unit.power(3), 100);
        assert_eq!(unit.max_power(POWER_COUNT), 0);
        assert_eq!(unit.record().dirty().len(), 1);

        let bytes = unit.marshal(true);
        // energy is block 22
        assert_eq!(bytes, [&[0x01, 0x00, 0x00, 0x40, 0x00][..], &100u32.to_le_bytes()].concat());
    }

    #[test]
    fn test_stats_are_separate_sections() {
        let mut unit = UnitValues::new();
        unit.set_stat(0, 20);
        unit.set_stat(4, 25);
        unit.set_stat(STAT_COUNT, 1);
        assert_eq!(unit.stat(4), 25);
        assert_eq!(unit.record().dirty().len(), 2);
    }
}
