//! Closed string sets documented by the API.
//!
//! Field docs list these as "legal values"; the server never promised to stick to
//! them, so every set keeps an `Other` escape hatch (see [`legal_values!`]).

use crate::legal_values;

legal_values! {
    /// Game mode of a played or in-progress game.
    pub enum GameMode {
        Classic => "CLASSIC",
        Odin => "ODIN",
        Aram => "ARAM",
        Tutorial => "TUTORIAL",
        OneForAll => "ONEFORALL",
        Ascension => "ASCENSION",
        FirstBlood => "FIRSTBLOOD",
        KingPoro => "KINGPORO",
    }
}

legal_values! {
    /// Game type, also used as the match type of a match detail.
    pub enum GameType {
        CustomGame => "CUSTOM_GAME",
        MatchedGame => "MATCHED_GAME",
        TutorialGame => "TUTORIAL_GAME",
    }
}

legal_values! {
    /// Sub type of a recent game.
    pub enum GameSubType {
        None => "NONE",
        Normal => "NORMAL",
        Bot => "BOT",
        RankedSolo5x5 => "RANKED_SOLO_5x5",
        RankedPremade3x3 => "RANKED_PREMADE_3x3",
        RankedPremade5x5 => "RANKED_PREMADE_5x5",
        OdinUnranked => "ODIN_UNRANKED",
        RankedTeam3x3 => "RANKED_TEAM_3x3",
        RankedTeam5x5 => "RANKED_TEAM_5x5",
        Normal3x3 => "NORMAL_3x3",
        Bot3x3 => "BOT_3x3",
        Cap5x5 => "CAP_5x5",
        AramUnranked5x5 => "ARAM_UNRANKED_5x5",
        OneForAll5x5 => "ONEFORALL_5x5",
        FirstBlood1x1 => "FIRSTBLOOD_1x1",
        FirstBlood2x2 => "FIRSTBLOOD_2x2",
        Sr6x6 => "SR_6x6",
        Urf => "URF",
        UrfBot => "URF_BOT",
        NightmareBot => "NIGHTMARE_BOT",
        Ascension => "ASCENSION",
        Hexakill => "HEXAKILL",
        KingPoro => "KING_PORO",
        CounterPick => "COUNTER_PICK",
        Bilgewater => "BILGEWATER",
    }
}

legal_values! {
    /// Matchmaking queue, as reported by match, match list and league data.
    pub enum QueueType {
        Custom => "CUSTOM",
        Normal5x5Blind => "NORMAL_5x5_BLIND",
        RankedSolo5x5 => "RANKED_SOLO_5x5",
        RankedPremade5x5 => "RANKED_PREMADE_5x5",
        Bot5x5 => "BOT_5x5",
        Normal3x3 => "NORMAL_3x3",
        RankedPremade3x3 => "RANKED_PREMADE_3x3",
        Normal5x5Draft => "NORMAL_5x5_DRAFT",
        Odin5x5Blind => "ODIN_5x5_BLIND",
        Odin5x5Draft => "ODIN_5x5_DRAFT",
        BotOdin5x5 => "BOT_ODIN_5x5",
        Bot5x5Intro => "BOT_5x5_INTRO",
        Bot5x5Beginner => "BOT_5x5_BEGINNER",
        Bot5x5Intermediate => "BOT_5x5_INTERMEDIATE",
        RankedTeam3x3 => "RANKED_TEAM_3x3",
        RankedTeam5x5 => "RANKED_TEAM_5x5",
        BotTt3x3 => "BOT_TT_3x3",
        GroupFinder5x5 => "GROUP_FINDER_5x5",
        Aram5x5 => "ARAM_5x5",
        OneForAll5x5 => "ONEFORALL_5x5",
        FirstBlood1x1 => "FIRSTBLOOD_1x1",
        FirstBlood2x2 => "FIRSTBLOOD_2x2",
        Sr6x6 => "SR_6x6",
        Urf5x5 => "URF_5x5",
        OneForAllMirrorMode5x5 => "ONEFORALL_MIRRORMODE_5x5",
        BotUrf5x5 => "BOT_URF_5x5",
        NightmareBot5x5Rank1 => "NIGHTMARE_BOT_5x5_RANK1",
        NightmareBot5x5Rank2 => "NIGHTMARE_BOT_5x5_RANK2",
        NightmareBot5x5Rank5 => "NIGHTMARE_BOT_5x5_RANK5",
        Ascension5x5 => "ASCENSION_5x5",
        Hexakill => "HEXAKILL",
        BilgewaterAram5x5 => "BILGEWATER_ARAM_5x5",
        KingPoro5x5 => "KING_PORO_5x5",
        CounterPick => "COUNTER_PICK",
        Bilgewater5x5 => "BILGEWATER_5x5",
        TeamBuilderDraftUnranked5x5 => "TEAM_BUILDER_DRAFT_UNRANKED_5x5",
        TeamBuilderDraftRanked5x5 => "TEAM_BUILDER_DRAFT_RANKED_5x5",
    }
}

legal_values! {
    pub enum Season {
        Preseason3 => "PRESEASON3",
        Season3 => "SEASON3",
        Preseason2014 => "PRESEASON2014",
        Season2014 => "SEASON2014",
        Preseason2015 => "PRESEASON2015",
        Season2015 => "SEASON2015",
        Preseason2016 => "PRESEASON2016",
        Season2016 => "SEASON2016",
    }
}

legal_values! {
    /// Ranked tier. `UNRANKED` only shows up as a highest achieved tier.
    pub enum Tier {
        Challenger => "CHALLENGER",
        Master => "MASTER",
        Diamond => "DIAMOND",
        Platinum => "PLATINUM",
        Gold => "GOLD",
        Silver => "SILVER",
        Bronze => "BRONZE",
        Unranked => "UNRANKED",
    }
}

legal_values! {
    /// Division inside a tier.
    pub enum Division {
        One => "I",
        Two => "II",
        Three => "III",
        Four => "IV",
        Five => "V",
    }
}

legal_values! {
    /// Lane a participant played, as inferred by the server.
    pub enum Lane {
        Mid => "MID",
        Middle => "MIDDLE",
        Top => "TOP",
        Jungle => "JUNGLE",
        Bot => "BOT",
        Bottom => "BOTTOM",
    }
}

legal_values! {
    pub enum Role {
        Duo => "DUO",
        None => "NONE",
        Solo => "SOLO",
        DuoCarry => "DUO_CARRY",
        DuoSupport => "DUO_SUPPORT",
    }
}

legal_values! {
    /// Kind of a match timeline event; decides which event fields are filled.
    pub enum EventType {
        AscendedEvent => "ASCENDED_EVENT",
        BuildingKill => "BUILDING_KILL",
        CapturePoint => "CAPTURE_POINT",
        ChampionKill => "CHAMPION_KILL",
        EliteMonsterKill => "ELITE_MONSTER_KILL",
        ItemDestroyed => "ITEM_DESTROYED",
        ItemPurchased => "ITEM_PURCHASED",
        ItemSold => "ITEM_SOLD",
        ItemUndo => "ITEM_UNDO",
        PoroKingSummon => "PORO_KING_SUMMON",
        SkillLevelUp => "SKILL_LEVEL_UP",
        WardKill => "WARD_KILL",
        WardPlaced => "WARD_PLACED",
    }
}

legal_values! {
    pub enum AscendedType {
        ChampionAscended => "CHAMPION_ASCENDED",
        ClearAscended => "CLEAR_ASCENDED",
        MinionAscended => "MINION_ASCENDED",
    }
}

legal_values! {
    pub enum BuildingType {
        InhibitorBuilding => "INHIBITOR_BUILDING",
        TowerBuilding => "TOWER_BUILDING",
    }
}

legal_values! {
    pub enum LaneType {
        BotLane => "BOT_LANE",
        MidLane => "MID_LANE",
        TopLane => "TOP_LANE",
    }
}

legal_values! {
    pub enum LevelUpType {
        Evolve => "EVOLVE",
        Normal => "NORMAL",
    }
}

legal_values! {
    pub enum MonsterType {
        BaronNashor => "BARON_NASHOR",
        BlueGolem => "BLUE_GOLEM",
        Dragon => "DRAGON",
        RedLizard => "RED_LIZARD",
        RiftHerald => "RIFTHERALD",
        Vilemaw => "VILEMAW",
    }
}

legal_values! {
    /// Dominion capture point.
    pub enum PointCaptured {
        PointA => "POINT_A",
        PointB => "POINT_B",
        PointC => "POINT_C",
        PointD => "POINT_D",
        PointE => "POINT_E",
    }
}

legal_values! {
    pub enum TowerType {
        BaseTurret => "BASE_TURRET",
        FountainTurret => "FOUNTAIN_TURRET",
        InnerTurret => "INNER_TURRET",
        NexusTurret => "NEXUS_TURRET",
        OuterTurret => "OUTER_TURRET",
        UndefinedTurret => "UNDEFINED_TURRET",
    }
}

legal_values! {
    pub enum WardType {
        BlueTrinket => "BLUE_TRINKET",
        SightWard => "SIGHT_WARD",
        TeemoMushroom => "TEEMO_MUSHROOM",
        Undefined => "UNDEFINED",
        VisionWard => "VISION_WARD",
        YellowTrinket => "YELLOW_TRINKET",
        YellowTrinketUpgrade => "YELLOW_TRINKET_UPGRADE",
    }
}

legal_values! {
    /// Bucket a stats summary aggregates over.
    pub enum PlayerStatSummaryType {
        AramUnranked5x5 => "AramUnranked5x5",
        Ascension => "Ascension",
        Bilgewater => "Bilgewater",
        Cap5x5 => "CAP5x5",
        CoopVsAi => "CoopVsAI",
        CoopVsAi3x3 => "CoopVsAI3x3",
        CounterPick => "CounterPick",
        FirstBlood1x1 => "FirstBlood1x1",
        FirstBlood2x2 => "FirstBlood2x2",
        Hexakill => "Hexakill",
        KingPoro => "KingPoro",
        NightmareBot => "NightmareBot",
        OdinUnranked => "OdinUnranked",
        OneForAll5x5 => "OneForAll5x5",
        RankedPremade3x3 => "RankedPremade3x3",
        RankedPremade5x5 => "RankedPremade5x5",
        RankedSolo5x5 => "RankedSolo5x5",
        RankedTeam3x3 => "RankedTeam3x3",
        RankedTeam5x5 => "RankedTeam5x5",
        SummonersRift6x6 => "SummonersRift6x6",
        Unranked => "Unranked",
        Unranked3x3 => "Unranked3x3",
        Urf => "URF",
        UrfBots => "URFBots",
    }
}

legal_values! {
    pub enum MasteryTreeType {
        Cunning => "Cunning",
        Ferocity => "Ferocity",
        Resolve => "Resolve",
    }
}

legal_values! {
    /// Health of a platform service.
    pub enum ServiceStatus {
        Online => "online",
        Alert => "alert",
        Offline => "offline",
        Deploying => "deploying",
    }
}

legal_values! {
    pub enum MessageSeverity {
        Info => "Info",
        Alert => "Alert",
        Error => "Error",
    }
}

legal_values! {
    /// Map a tournament game is played on.
    pub enum MapType {
        SummonersRift => "SUMMONERS_RIFT",
        TwistedTreeline => "TWISTED_TREELINE",
        CrystalScar => "CRYSTAL_SCAR",
        HowlingAbyss => "HOWLING_ABYSS",
    }
}

legal_values! {
    pub enum PickType {
        BlindPick => "BLIND_PICK",
        DraftMode => "DRAFT_MODE",
        AllRandom => "ALL_RANDOM",
        TournamentDraft => "TOURNAMENT_DRAFT",
    }
}

legal_values! {
    pub enum SpectatorType {
        None => "NONE",
        LobbyOnly => "LOBBYONLY",
        All => "ALL",
    }
}

legal_values! {
    /// Region a tournament provider registers for.
    pub enum TournamentRegion {
        Br => "BR",
        Eune => "EUNE",
        Euw => "EUW",
        Jp => "JP",
        Kr => "KR",
        Lan => "LAN",
        Las => "LAS",
        Na => "NA",
        Oce => "OCE",
        Pbe => "PBE",
        Ru => "RU",
        Tr => "TR",
    }
}

legal_values! {
    /// Tournament lobby state transition.
    pub enum LobbyEventType {
        PracticeGameCreated => "PracticeGameCreatedEvent",
        PlayerJoinedGame => "PlayerJoinedGameEvent",
        PlayerSwitchedTeam => "PlayerSwitchedTeamEvent",
        PlayerQuitGame => "PlayerQuitGameEvent",
        ChampSelectStarted => "ChampSelectStartedEvent",
        GameAllocationStarted => "GameAllocationStartedEvent",
        GameAllocatedToLsm => "GameAllocatedToLsmEvent",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_values_map_to_variants() {
        assert_eq!(GameMode::from("KINGPORO"), GameMode::KingPoro);
        assert_eq!(Division::from("II"), Division::Two);
        assert_eq!(ServiceStatus::from("online"), ServiceStatus::Online);
        assert_eq!(QueueType::RankedSolo5x5.as_str(), "RANKED_SOLO_5x5");
        assert_eq!(Tier::Master.to_string(), "MASTER");
    }

    #[test]
    fn every_known_value_resolves_to_a_known_variant() {
        for value in QueueType::KNOWN {
            let queue = QueueType::from(*value);
            assert!(queue.is_known(), "{value} should be known");
            assert_eq!(queue.as_str(), *value);
        }
        for value in PlayerStatSummaryType::KNOWN {
            assert!(PlayerStatSummaryType::from(*value).is_known());
        }
    }

    #[test]
    fn undocumented_values_are_kept() {
        let mode: GameMode = serde_json::from_str("\"NEXUSBLITZ\"").unwrap();
        assert_eq!(mode, GameMode::Other("NEXUSBLITZ".to_string()));
        assert!(!mode.is_known());
        assert_eq!(serde_json::to_string(&mode).unwrap(), "\"NEXUSBLITZ\"");
    }

    #[test]
    fn values_are_case_sensitive() {
        // The status API is lower case while every other set is upper case.
        assert!(matches!(ServiceStatus::from("ONLINE"), ServiceStatus::Other(_)));
    }

    #[test]
    fn serde_uses_the_documented_string() {
        let json = serde_json::to_string(&vec![Tier::Gold, Tier::Unranked]).unwrap();
        assert_eq!(json, r#"["GOLD","UNRANKED"]"#);

        let back: Vec<Tier> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Tier::Gold, Tier::Unranked]);
    }
}
