//! Fields only player avatars carry.
//!
//! Quest log entries, visible items and skills are records on the client.
//! Here they are flat word arrays with typed accessors, which lays out the
//! same bytes.

use ember_shared::Guid;

use crate::values::ValueRecord;

/// Number of quest log entries.
pub const QUEST_LOG_COUNT: usize = 25;

/// Words per quest log entry (id, state, two count words, time).
const QUEST_LOG_WORDS: usize = 5;

/// Number of visible equipment slots.
pub const VISIBLE_ITEM_COUNT: usize = 19;

/// Number of equipped inventory slots.
pub const INVENTORY_SLOT_COUNT: usize = 23;

/// Number of backpack slots.
pub const PACK_SLOT_COUNT: usize = 16;

/// Number of bank slots.
pub const BANK_SLOT_COUNT: usize = 28;

/// Number of skill entries.
pub const SKILL_COUNT: usize = 128;

/// Halfwords per skill entry.
const SKILL_HALFWORDS: usize = 6;

/// Number of explored-zone bitmask words.
pub const EXPLORED_ZONE_WORDS: usize = 128;

field_table! {
    /// Fields of the player schema.
    pub enum PlayerField in PLAYER_FIELDS {
        /// Duel flag object.
        DuelArbiter => ["duel_arbiter": U64],
        /// Leads a group.
        GroupLeader => ["group_leader": Bool],
        /// Away.
        Afk => ["afk": Bool],
        /// Do not disturb.
        Dnd => ["dnd": Bool],
        /// Game master.
        Gm => ["gm": Bool],
        /// Dead and released.
        Ghost => ["ghost": Bool],
        /// In a rest area.
        Resting => ["resting": Bool],
        /// Voice chat enabled.
        VoiceChat => ["voice_chat": Bool],
        /// Free-for-all PvP.
        FfaPvp => ["ffa_pvp": Bool],
        /// Flagged by a contested action.
        ContestedPvp => ["contested_pvp": Bool],
        /// PvP enabled.
        InPvp => ["in_pvp": Bool],
        /// Helm hidden.
        HideHelm => ["hide_helm": Bool],
        /// Cloak hidden.
        HideCloak => ["hide_cloak": Bool],
        /// Played for a long time.
        PlayedLongTime => ["played_long_time": Bool],
        /// Played for too long.
        PlayedTooLong => ["played_too_long": Bool],
        /// Outside the map bounds.
        OutOfBounds => ["out_of_bounds": Bool],
        /// Developer.
        Developer => ["developer": Bool],
        /// Player flag 0x10000.
        FlagsUnused16 => [_: Bool[1]],
        /// Taxi benchmark mode.
        TaxiBenchmark => ["taxi_benchmark": Bool],
        /// PvP timer running.
        PvpTimer => ["pvp_timer": Bool],
        /// Uber.
        Uber => ["uber": Bool],
        /// Player flags 0x100000 and 0x200000.
        FlagsUnused20 => [_: Bool[2]],
        /// Commentator.
        Commentator => ["commentator": Bool],
        /// Only abilities allowed.
        OnlyAllowAbilities => ["only_allow_abilities": Bool],
        /// Tab targeting stops melee.
        StopMeleeOnTab => ["stop_melee_on_tab": Bool],
        /// Gains no experience.
        NoExperienceGain => ["no_experience_gain": Bool],
        /// Unused player flag bits.
        FlagsPadding => [_: Bool[6]],
        /// Guild id.
        GuildId => ["guild_id": U32],
        /// Rank within the guild.
        GuildRank => ["guild_rank": U32],
        /// Skin color.
        Skin => ["skin": U8],
        /// Face.
        Face => ["face": U8],
        /// Hair style.
        HairStyle => ["hair_style": U8],
        /// Hair color.
        HairColor => ["hair_color": U8],
        /// Facial hair.
        FacialHair => ["facial_hair": U8],
        /// Rest bits.
        RestBits => ["rest_bits": U8],
        /// Purchased bank bag slots.
        BankBagSlotCount => ["bank_bag_slot_count": U8],
        /// Rest state.
        RestState => ["rest_state": U8],
        /// Player gender.
        PlayerGender => ["player_gender": U8],
        /// Unknown byte next to the gender.
        GenderUnk => ["gender_unk": U8],
        /// Drunkenness.
        Drunkenness => ["drunkenness": U8],
        /// PvP rank.
        PvpRank => ["pvp_rank": U8],
        /// Duel team.
        DuelTeam => ["duel_team": U32],
        /// Guild join timestamp.
        GuildTimestamp => ["guild_timestamp": U32],
        /// Quest log, five words per entry.
        QuestLog => ["quest_log": U32[125]],
        /// Visible equipment, item id and enchantment per slot.
        VisibleItems => ["visible_items": U32[38]],
        /// Displayed title.
        ChosenTitle => ["chosen_title": U32],
        /// Faked inebriation.
        FakeInebriation => ["fake_inebriation": U32],
        /// Unused block before the inventory.
        InventoryPadding => [_: U32[1]],
        /// Item guid per equipped slot.
        InventorySlots => ["inventory_slots": U64[23]],
        /// Item guid per backpack slot.
        PackSlots => ["pack_slots": U64[16]],
        /// Item guid per bank slot.
        BankSlots => ["bank_slots": U64[28]],
        /// Bag guid per bank bag slot.
        BankBagSlots => ["bank_bag_slots": U64[7]],
        /// Item guid per buyback slot.
        VendorBuybackSlots => ["vendor_buyback_slots": U64[12]],
        /// Key guid per keyring slot.
        KeyringSlots => ["keyring_slots": U64[32]],
        /// Token guid per currency slot.
        CurrencyTokenSlots => ["currency_token_slots": U64[32]],
        /// Far sight object.
        FarSight => ["far_sight": U64],
        /// Known title bitmask.
        KnownTitles => ["known_titles": U32[6]],
        /// Known currency bitmask.
        KnownCurrencies => ["known_currencies": U32[2]],
        /// Experience.
        Xp => ["xp": U32],
        /// Experience to next level.
        NextLevelXp => ["next_level_xp": U32],
        /// Skills, six halfwords per entry.
        Skills => ["skills": U16[768]],
        /// Unspent talent and profession points.
        CharacterPoints => ["character_points": U32[2]],
        /// Tracked creature types.
        TrackCreatures => ["track_creatures": U32],
        /// Tracked resource types.
        TrackResources => ["track_resources": U32],
        /// Block chance.
        BlockPercentage => ["block_percentage": F32],
        /// Dodge chance.
        DodgePercentage => ["dodge_percentage": F32],
        /// Parry chance.
        ParryPercentage => ["parry_percentage": F32],
        /// Main-hand expertise.
        Expertise => ["expertise": U32],
        /// Off-hand expertise.
        OffhandExpertise => ["offhand_expertise": U32],
        /// Melee crit chance.
        CritPercentage => ["crit_percentage": F32],
        /// Ranged crit chance.
        RangedCritPercentage => ["ranged_crit_percentage": F32],
        /// Off-hand crit chance.
        OffhandCritPercentage => ["offhand_crit_percentage": F32],
        /// Spell crit chance per school.
        SpellCritPercentage => ["spell_crit_percentage": F32[7]],
        /// Shield block value.
        ShieldBlock => ["shield_block": U32],
        /// Shield block crit chance.
        ShieldBlockCritPercentage => ["shield_block_crit_percentage": F32],
        /// Explored-zone bitmask.
        ExploredZones => ["explored_zones": U32[128]],
        /// Rested experience.
        RestStateExperience => ["rest_state_experience": U32],
        /// Money in copper.
        Coinage => ["coinage": I32],
        /// Positive damage done per school.
        ModDamageDonePositive => ["mod_damage_done_positive": U32[7]],
        /// Negative damage done per school.
        ModDamageDoneNegative => ["mod_damage_done_negative": U32[7]],
        /// Damage done multiplier per school.
        ModDamageDonePercentage => ["mod_damage_done_percentage": F32[7]],
        /// Bonus healing done.
        ModHealingDonePos => ["mod_healing_done_pos": U32],
        /// Healing taken multiplier.
        ModHealingPercentage => ["mod_healing_percentage": F32],
        /// Healing done multiplier.
        ModHealingDonePercentage => ["mod_healing_done_percentage": F32],
        /// Target resistance reduction.
        ModTargetResistance => ["mod_target_resistance": U32],
        /// Target armor reduction.
        ModTargetPhysicalResistance => ["mod_target_physical_resistance": U32],
        /// Field bytes 0x1.
        FieldBytesUnused0 => [_: Bool[1]],
        /// Tracks stealthed units.
        TrackStealthed => ["track_stealthed": Bool],
        /// Field bytes 0x4.
        FieldBytesUnused2 => [_: Bool[1]],
        /// Shows the spirit auto-release timer.
        DisplaySpiritAutoReleaseTimer => ["display_spirit_auto_release_timer": Bool],
        /// Hides the spirit release window.
        HideSpiritReleaseWindow => ["hide_spirit_release_window": Bool],
        /// Field bytes 0x20 to 0x80.
        FieldBytesPadding => [_: Bool[3]],
        /// Highest level grantable through refer-a-friend.
        ReferAFriendGrantableLevel => ["refer_a_friend_grantable_level": U8],
        /// Action bar visibility bits.
        ActionBarToggles => ["action_bar_toggles": U8],
        /// Highest PvP rank reached.
        LifetimeMaxPvpRank => ["lifetime_max_pvp_rank": U8],
        /// Equipped ammo item id.
        AmmoId => ["ammo_id": U32],
        /// Self-resurrection spell.
        SelfResSpell => ["self_res_spell": U32],
        /// PvP medals.
        PvpMedals => ["pvp_medals": U32],
        /// Price per buyback slot.
        BuybackPrices => ["buyback_prices": U32[12]],
        /// Timestamp per buyback slot.
        BuybackTimestamps => ["buyback_timestamps": U32[12]],
        /// Honorable kills.
        Kills => ["kills": U32],
        /// Honorable kills today.
        TodayKills => ["today_kills": U32],
        /// Honorable kills yesterday.
        YesterdayKills => ["yesterday_kills": U32],
        /// Lifetime honorable kills.
        LifetimeHonorableKills => ["lifetime_honorable_kills": U32],
        /// Unused field bytes 2 flags.
        FieldBytes2Flags => [_: U8[1]],
        /// Power regen prediction mask.
        IgnorePowerRegenPredictionMask => ["ignore_power_regen_prediction_mask": U8],
        /// Override spells id.
        OverrideSpellsId => ["override_spells_id": U16],
        /// Faction watched on the reputation bar.
        WatchedFactionIndex => ["watched_faction_index": I32],
        /// Combat ratings.
        CombatRatings => ["combat_ratings": U32[25]],
        /// Arena team info.
        ArenaTeamInfo => ["arena_team_info": U32[21]],
        /// Honor points.
        HonorCurrency => ["honor_currency": U32],
        /// Arena points.
        ArenaCurrency => ["arena_currency": U32],
        /// Level cap.
        MaxLevel => ["max_level": U32],
        /// Completed daily quests.
        DailyQuests => ["daily_quests": U32[25]],
        /// Rune regen rate per rune type.
        RuneRegen => ["rune_regen": F32[4]],
        /// Reagent-free spell masks.
        NoReagentCost => ["no_reagent_cost": U32[3]],
        /// Glyph slot ids.
        GlyphSlots => ["glyph_slots": U32[6]],
        /// Glyph ids.
        Glyphs => ["glyphs": U32[6]],
        /// Enabled glyph slots.
        GlyphsEnabled => ["glyphs_enabled": U32],
        /// Pet spell power.
        PetSpellPower => ["pet_spell_power": U32],
    }
}

/// One quest log entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuestLogEntry {
    /// Quest id.
    pub id: u32,
    /// Quest state.
    pub state: u32,
    /// Objective counters.
    pub count: u64,
    /// Time limit.
    pub time: u32,
}

/// One visible equipment slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibleItem {
    /// Item id.
    pub id: u32,
    /// Enchantment id.
    pub enchantment: u32,
}

/// One skill line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkillEntry {
    /// Skill line id.
    pub id: u16,
    /// Step.
    pub step: u16,
    /// Current level.
    pub skill_level: u16,
    /// Level cap.
    pub skill_cap: u16,
    /// Temporary bonus.
    pub temp_bonus: u16,
    /// Permanent bonus.
    pub permanent_bonus: u16,
}

/// Player part of an avatar.
#[derive(Clone, Debug)]
pub struct PlayerValues {
    record: ValueRecord,
}

values_wrapper!(PlayerValues, PlayerField, "player", PLAYER_FIELDS);

impl PlayerValues {
    scalar_accessors! {
        PlayerField;
        /// Duel flag object.
        duel_arbiter, set_duel_arbiter: DuelArbiter => Guid;
        /// Leads a group.
        group_leader, set_group_leader: GroupLeader => bool;
        /// Away.
        afk, set_afk: Afk => bool;
        /// Do not disturb.
        dnd, set_dnd: Dnd => bool;
        /// Game master.
        gm, set_gm: Gm => bool;
        /// Dead and released.
        ghost, set_ghost: Ghost => bool;
        /// In a rest area.
        resting, set_resting: Resting => bool;
        /// PvP enabled.
        in_pvp, set_in_pvp: InPvp => bool;
        /// Gains no experience.
        no_experience_gain, set_no_experience_gain: NoExperienceGain => bool;
        /// Guild id.
        guild_id, set_guild_id: GuildId => u32;
        /// Rank within the guild.
        guild_rank, set_guild_rank: GuildRank => u32;
        /// Skin color.
        skin, set_skin: Skin => u8;
        /// Face.
        face, set_face: Face => u8;
        /// Hair style.
        hair_style, set_hair_style: HairStyle => u8;
        /// Hair color.
        hair_color, set_hair_color: HairColor => u8;
        /// Facial hair.
        facial_hair, set_facial_hair: FacialHair => u8;
        /// Rest state.
        rest_state, set_rest_state: RestState => u8;
        /// Player gender.
        player_gender, set_player_gender: PlayerGender => u8;
        /// Displayed title.
        chosen_title, set_chosen_title: ChosenTitle => u32;
        /// Far sight object.
        far_sight, set_far_sight: FarSight => Guid;
        /// Experience.
        xp, set_xp: Xp => u32;
        /// Experience to next level.
        next_level_xp, set_next_level_xp: NextLevelXp => u32;
        /// Rested experience.
        rest_state_experience, set_rest_state_experience: RestStateExperience => u32;
        /// Money in copper.
        coinage, set_coinage: Coinage => i32;
        /// Tracks stealthed units.
        track_stealthed, set_track_stealthed: TrackStealthed => bool;
        /// Action bar visibility bits.
        action_bar_toggles, set_action_bar_toggles: ActionBarToggles => u8;
        /// Equipped ammo item id.
        ammo_id, set_ammo_id: AmmoId => u32;
        /// Override spells id.
        override_spells_id, set_override_spells_id: OverrideSpellsId => u16;
        /// Faction watched on the reputation bar.
        watched_faction_index, set_watched_faction_index: WatchedFactionIndex => i32;
        /// Level cap.
        max_level, set_max_level: MaxLevel => u32;
        /// Pet spell power.
        pet_spell_power, set_pet_spell_power: PetSpellPower => u32;
    }

    array_accessors! {
        PlayerField;
        /// Item guid in one equipped slot.
        inventory_slot, set_inventory_slot: InventorySlots => Guid;
        /// Item guid in one backpack slot.
        pack_slot, set_pack_slot: PackSlots => Guid;
        /// Item guid in one bank slot.
        bank_slot, set_bank_slot: BankSlots => Guid;
        /// One known-title bitmask word.
        known_titles, set_known_titles: KnownTitles => u32;
        /// One explored-zone bitmask word.
        explored_zones, set_explored_zones: ExploredZones => u32;
        /// One combat rating.
        combat_rating, set_combat_rating: CombatRatings => u32;
        /// One glyph id.
        glyph, set_glyph: Glyphs => u32;
    }

    /// One quest log entry. Default for an index past the log.
    #[must_use]
    pub fn quest_log(&self, index: usize) -> QuestLogEntry {
        if index >= QUEST_LOG_COUNT {
            return QuestLogEntry::default();
        }
        let base = index * QUEST_LOG_WORDS;
        let word = |i: usize| self.record.get_at::<u32>(PlayerField::QuestLog, base + i);
        QuestLogEntry {
            id: word(0),
            state: word(1),
            count: u64::from(word(2)) | u64::from(word(3)) << 32,
            time: word(4),
        }
    }

    /// Sets one quest log entry. Indices past the log are ignored.
    pub fn set_quest_log(&mut self, index: usize, entry: QuestLogEntry) {
        if index >= QUEST_LOG_COUNT {
            return;
        }
        let base = index * QUEST_LOG_WORDS;
        #[allow(clippy::cast_possible_truncation)]
        let words = [
            entry.id,
            entry.state,
            entry.count as u32,
            (entry.count >> 32) as u32,
            entry.time,
        ];
        for (i, word) in words.into_iter().enumerate() {
            self.record.set_at(PlayerField::QuestLog, base + i, word);
        }
    }

    /// One visible equipment slot. Default for an index past the slots.
    #[must_use]
    pub fn visible_item(&self, slot: usize) -> VisibleItem {
        if slot >= VISIBLE_ITEM_COUNT {
            return VisibleItem::default();
        }
        VisibleItem {
            id: self.record.get_at(PlayerField::VisibleItems, slot * 2),
            enchantment: self.record.get_at(PlayerField::VisibleItems, slot * 2 + 1),
        }
    }

    /// Sets one visible equipment slot. Slots past the last are ignored.
    pub fn set_visible_item(&mut self, slot: usize, item: VisibleItem) {
        if slot >= VISIBLE_ITEM_COUNT {
            return;
        }
        self.record.set_at(PlayerField::VisibleItems, slot * 2, item.id);
        self.record.set_at(PlayerField::VisibleItems, slot * 2 + 1, item.enchantment);
    }

    /// One skill line. Default for an index past the skills.
    #[must_use]
    pub fn skill(&self, index: usize) -> SkillEntry {
        if index >= SKILL_COUNT {
            return SkillEntry::default();
        }
        let base = index * SKILL_HALFWORDS;
        let half = |i: usize| self.record.get_at::<u16>(PlayerField::Skills, base + i);
        SkillEntry {
            id: half(0),
            step: half(1),
            skill_level: half(2),
            skill_cap: half(3),
            temp_bonus: half(4),
            permanent_bonus: half(5),
        }
    }

    /// Sets one skill line. Indices past the skills are ignored.
    pub fn set_skill(&mut self, index: usize, skill: SkillEntry) {
        if index >= SKILL_COUNT {
            return;
        }
        let base = index * SKILL_HALFWORDS;
        let halves = [
            skill.id,
            skill.step,
            skill.skill_level,
            skill.skill_cap,
            skill.temp_bonus,
            skill.permanent_bonus,
        ];
        for (i, half) in halves.into_iter().enumerate() {
            self.record.set_at(PlayerField::Skills, base + i, half);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section_of(player: &PlayerValues, field: PlayerField) -> (usize, usize) {
        let schema = player.record().schema();
        let section = &schema.sections()[schema.section_of_field(field.into()).unwrap()];
        (section.block_start(), section.block_count())
    }

    #[test]
    fn test_layout() {
        let player = PlayerValues::new();
        let schema = player.record().schema();
        assert_eq!(schema.total_blocks(), 1178);
        assert_eq!(schema.sections().len(), 75);
        let padding: Vec<_> = schema.padding().iter().map(|s| s.block_start).collect();
        assert_eq!(padding, vec![175]);
        assert_eq!(schema.slot_count(), 1446);
    }

    #[test]
    fn test_section_starts() {
        let player = PlayerValues::new();
        assert_eq!(section_of(&player, PlayerField::NoExperienceGain), (2, 1));
        assert_eq!(section_of(&player, PlayerField::GuildId), (3, 1));
        assert_eq!(section_of(&player, PlayerField::PvpRank), (7, 1));
        assert_eq!(section_of(&player, PlayerField::QuestLog), (10, 125));
        assert_eq!(section_of(&player, PlayerField::VisibleItems), (135, 38));
        assert_eq!(section_of(&player, PlayerField::InventorySlots), (176, 46));
        assert_eq!(section_of(&player, PlayerField::CurrencyTokenSlots), (412, 64));
        assert_eq!(section_of(&player, PlayerField::Skills), (488, 384));
        assert_eq!(section_of(&player, PlayerField::ExploredZones), (893, 128));
        assert_eq!(section_of(&player, PlayerField::LifetimeMaxPvpRank), (1049, 1));
        assert_eq!(section_of(&player, PlayerField::OverrideSpellsId), (1081, 1));
        assert_eq!(section_of(&player, PlayerField::DailyQuests), (1132, 25));
        assert_eq!(section_of(&player, PlayerField::PetSpellPower), (1177, 1));
    }

    #[test]
    fn test_inventory_slot_is_two_blocks_per_guid() {
        let mut player = PlayerValues::new();
        player.set_inventory_slot(INVENTORY_SLOT_COUNT - 1, Guid::new(0xAABB_CCDD_0000_0001));
        player.set_inventory_slot(INVENTORY_SLOT_COUNT, Guid::new(1));
        assert_eq!(player.inventory_slot(22).raw(), 0xAABB_CCDD_0000_0001);

        let bytes = player.marshal(true);
        // blocks 176..222 -> mask words 5..=6
        assert_eq!(bytes[0], 7);
        let data = &bytes[1 + 7 * 4..];
        assert_eq!(data.len(), INVENTORY_SLOT_COUNT * 8);
        assert_eq!(&data[data.len() - 8..], &0xAABB_CCDD_0000_0001u64.to_le_bytes());
    }

    #[test]
    fn test_player_flags_word() {
        let mut player = PlayerValues::new();
        player.set_afk(true);
        player.set_ghost(true);
        player.set_no_experience_gain(true);
        let bytes = player.marshal(true);
        assert_eq!(&bytes[..5], &[0x01, 0x04, 0x00, 0x00, 0x00]);
        assert_eq!(&bytes[5..], &(0b1_0010u32 | 0x200_0000).to_le_bytes());
    }

    #[test]
    fn test_quest_log_entry_words() {
        let mut player = PlayerValues::new();
        let entry = QuestLogEntry {
            id: 7,
            state: 1,
            count: 0x0000_0002_0000_0003,
            time: 60,
        };
        player.set_quest_log(2, entry);
        player.set_quest_log(QUEST_LOG_COUNT, entry);
        assert_eq!(player.quest_log(2), entry);
        assert_eq!(player.quest_log(QUEST_LOG_COUNT), QuestLogEntry::default());

        let bytes = player.marshal(true);
        // whole quest log section, entry 2 at word 10
        assert_eq!(bytes[0], 5);
        let data = &bytes[1 + 5 * 4..];
        assert_eq!(data.len(), 125 * 4);
        let expected: Vec<u8> = [7u32, 1, 3, 2, 60].iter().flat_map(|w| w.to_le_bytes()).collect();
        assert_eq!(&data[40..60], expected.as_slice());
    }

    #[test]
    fn test_skill_halfwords_pack_two_per_block() {
        let mut player = PlayerValues::new();
        let skill = SkillEntry {
            id: 0x00A4,
            step: 1,
            skill_level: 75,
            skill_cap: 150,
            temp_bonus: 0,
            permanent_bonus: 5,
        };
        player.set_skill(1, skill);
        assert_eq!(player.skill(1), skill);

        let bytes = player.marshal(true);
        let data = &bytes[1 + usize::from(bytes[0]) * 4..];
        assert_eq!(data.len(), 384 * 4);
        // entry 1 starts at block 3
        assert_eq!(&data[12..16], &(0x00A4u32 | 1 << 16).to_le_bytes());
        assert_eq!(&data[16..20], &(75u32 | 150 << 16).to_le_bytes());
        assert_eq!(&data[20..24], &(5u32 << 16).to_le_bytes());
    }

    #[test]
    fn test_visible_item_pairs() {
        let mut player = PlayerValues::new();
        player.set_visible_item(
            VISIBLE_ITEM_COUNT - 1,
            VisibleItem {
                id: 2092,
                enchantment: 3,
            },
        );
        assert_eq!(player.visible_item(18).id, 2092);
        assert_eq!(player.record().get_at::<u32>(PlayerField::VisibleItems, 37), 3);
    }

    #[test]
    fn test_explored_zones_constant() {
        assert_eq!(PlayerField::ExploredZones.descriptor().len, EXPLORED_ZONE_WORDS);
        assert_eq!(PlayerField::VisibleItems.descriptor().len, VISIBLE_ITEM_COUNT * 2);
        assert_eq!(PlayerField::Skills.descriptor().len, SKILL_COUNT * SKILL_HALFWORDS);
        assert_eq!(PlayerField::QuestLog.descriptor().len, QUEST_LOG_COUNT * QUEST_LOG_WORDS);
        assert_eq!(PlayerField::PackSlots.descriptor().len, PACK_SLOT_COUNT);
        assert_eq!(PlayerField::BankSlots.descriptor().len, BANK_SLOT_COUNT);
    }
}
