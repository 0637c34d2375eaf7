use std::{collections::HashMap, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{
    api::client::{ApiHosts, Endpoint, HostKind},
    registry::{ApiModule, EntityDescriptor, OperationDescriptor, entities},
    types::{
        Region,
        legal::{
            AscendedType, BuildingType, EventType, GameMode, GameType, Lane, LaneType,
            LevelUpType, MonsterType, PointCaptured, QueueType, Role, Season, Tier, TowerType,
            WardType,
        },
    },
};

/// Match-v2.2: full detail of a finished match, timeline optional.
#[derive(Debug, Clone)]
pub struct MatchApi(Arc<ApiHosts>);

impl MatchApi {
    pub fn new(hosts: Arc<ApiHosts>) -> Self {
        Self(hosts)
    }

    fn path(&self, region: Region, rest: &str) -> String {
        format!(
            "{}/api/lol/{}/v2.2/match/{}",
            self.0.base(HostKind::Regional, region),
            region,
            rest
        )
    }

    pub fn get_match(
        &self,
        region: Region,
        match_id: i64,
        include_timeline: Option<bool>,
    ) -> Endpoint<MatchDetail> {
        tracing::trace!("[MATCH-V2.2 API] get_match {} in {:?}", match_id, region);

        Endpoint::get("get_match", self.path(region, &match_id.to_string()))
            .with_optional_query("includeTimeline", include_timeline)
    }

    /// Ids of the matches played with a tournament code.
    pub fn get_match_ids_by_tournament(
        &self,
        region: Region,
        tournament_code: &str,
    ) -> Endpoint<Vec<i64>> {
        tracing::trace!(
            "[MATCH-V2.2 API] get_match_ids_by_tournament {} in {:?}",
            tournament_code,
            region
        );

        let code = urlencoding::encode(tournament_code);

        Endpoint::get(
            "get_match_ids_by_tournament",
            self.path(region, &format!("by-tournament/{code}/ids")),
        )
    }

    /// A tournament match, only visible to the provider owning the code.
    pub fn get_match_for_tournament(
        &self,
        region: Region,
        match_id: i64,
        tournament_code: &str,
        include_timeline: Option<bool>,
    ) -> Endpoint<MatchDetail> {
        tracing::trace!(
            "[MATCH-V2.2 API] get_match_for_tournament {} ({}) in {:?}",
            match_id,
            tournament_code,
            region
        );

        Endpoint::get(
            "get_match_for_tournament",
            self.path(region, &format!("for-tournament/{match_id}")),
        )
        .with_query("tournamentCode", tournament_code)
        .with_optional_query("includeTimeline", include_timeline)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetail {
    pub map_id: i32,
    /// Epoch milliseconds.
    pub match_creation: i64,
    /// Seconds.
    pub match_duration: i64,
    pub match_id: i64,
    pub match_mode: GameMode,
    pub match_type: GameType,
    pub match_version: String,
    pub participant_identities: Vec<ParticipantIdentity>,
    pub participants: Vec<Participant>,
    pub platform_id: String,
    pub queue_type: QueueType,
    pub region: String,
    pub season: Season,
    pub teams: Vec<Team>,
    /// Only when requested with `includeTimeline`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Timeline>,
}

impl MatchDetail {
    pub fn participant(&self, participant_id: i32) -> Option<&Participant> {
        self.participants
            .iter()
            .find(|p| p.participant_id == participant_id)
    }

    /// Player behind a participant. Absent for ranked matches requested by a third party.
    pub fn player_of(&self, participant_id: i32) -> Option<&Player> {
        self.participant_identities
            .iter()
            .find(|i| i.participant_id == participant_id)
            .and_then(|i| i.player.as_ref())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub champion_id: i32,
    pub highest_achieved_season_tier: Tier,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub masteries: Vec<Mastery>,
    pub participant_id: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub runes: Vec<Rune>,
    pub spell1_id: i32,
    pub spell2_id: i32,
    pub stats: ParticipantStats,
    pub team_id: i32,
    pub timeline: ParticipantTimeline,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantIdentity {
    pub participant_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<Player>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Absent in matches without a ban phase.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bans: Vec<BannedChampion>,
    pub baron_kills: i32,
    /// Only for dominion matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominion_victory_score: Option<i64>,
    pub dragon_kills: i32,
    pub first_baron: bool,
    pub first_blood: bool,
    pub first_dragon: bool,
    pub first_inhibitor: bool,
    pub first_rift_herald: bool,
    pub first_tower: bool,
    pub inhibitor_kills: i32,
    pub rift_herald_kills: i32,
    /// 100 for blue side, 200 for purple side.
    pub team_id: i32,
    pub tower_kills: i32,
    pub vilemaw_kills: i32,
    pub winner: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    /// Milliseconds between two frames.
    pub frame_interval: i64,
    pub frames: Vec<Frame>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Mastery {
    pub mastery_id: i64,
    pub rank: i64,
}

/// Match bans carry no team id: the ban list hangs off its team.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BannedChampion {
    pub champion_id: i32,
    pub pick_turn: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Rune {
    pub rank: i64,
    pub rune_id: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub match_history_uri: String,
    pub profile_icon: i32,
    pub summoner_id: i64,
    pub summoner_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantStats {
    pub assists: i64,
    pub champ_level: i64,
    /// Dominion only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combat_player_score: Option<i64>,
    pub deaths: i64,
    pub double_kills: i64,
    pub first_blood_assist: bool,
    pub first_blood_kill: bool,
    pub first_inhibitor_assist: bool,
    pub first_inhibitor_kill: bool,
    pub first_tower_assist: bool,
    pub first_tower_kill: bool,
    pub gold_earned: i64,
    pub gold_spent: i64,
    pub inhibitor_kills: i64,
    pub item0: i64,
    pub item1: i64,
    pub item2: i64,
    pub item3: i64,
    pub item4: i64,
    pub item5: i64,
    pub item6: i64,
    pub killing_sprees: i64,
    pub kills: i64,
    pub largest_critical_strike: i64,
    pub largest_killing_spree: i64,
    pub largest_multi_kill: i64,
    pub magic_damage_dealt: i64,
    pub magic_damage_dealt_to_champions: i64,
    pub magic_damage_taken: i64,
    pub minions_killed: i64,
    pub neutral_minions_killed: i64,
    pub neutral_minions_killed_enemy_jungle: i64,
    pub neutral_minions_killed_team_jungle: i64,
    /// Dominion only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_capture: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_capture_assist: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_neutralize: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_neutralize_assist: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective_player_score: Option<i64>,
    pub penta_kills: i64,
    pub physical_damage_dealt: i64,
    pub physical_damage_dealt_to_champions: i64,
    pub physical_damage_taken: i64,
    pub quadra_kills: i64,
    pub sight_wards_bought_in_game: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_objective: Option<i64>,
    pub total_damage_dealt: i64,
    pub total_damage_dealt_to_champions: i64,
    pub total_damage_taken: i64,
    pub total_heal: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_player_score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score_rank: Option<i64>,
    pub total_time_crowd_control_dealt: i64,
    pub total_units_healed: i64,
    pub tower_kills: i64,
    pub triple_kills: i64,
    pub true_damage_dealt: i64,
    pub true_damage_dealt_to_champions: i64,
    pub true_damage_taken: i64,
    pub unreal_kills: i64,
    pub vision_wards_bought_in_game: i64,
    pub wards_killed: i64,
    pub wards_placed: i64,
    pub winner: bool,
}

/// Per-phase deltas and counts of a participant. Which series are present depends on
/// the map and on how long the game lasted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantTimeline {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ancient_golem_assists_per_min_counts: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ancient_golem_kills_per_min_counts: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assisted_lane_deaths_per_min_deltas: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assisted_lane_kills_per_min_deltas: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baron_assists_per_min_counts: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baron_kills_per_min_counts: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creeps_per_min_deltas: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cs_diff_per_min_deltas: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_taken_diff_per_min_deltas: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_taken_per_min_deltas: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dragon_assists_per_min_counts: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dragon_kills_per_min_counts: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elder_lizard_assists_per_min_counts: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elder_lizard_kills_per_min_counts: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold_per_min_deltas: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inhibitor_assists_per_min_counts: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inhibitor_kills_per_min_counts: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lane: Option<Lane>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tower_assists_per_min_counts: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tower_kills_per_min_counts: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tower_kills_per_min_deltas: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vilemaw_assists_per_min_counts: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vilemaw_kills_per_min_counts: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wards_per_min_deltas: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp_diff_per_min_deltas: Option<ParticipantTimelineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp_per_min_deltas: Option<ParticipantTimelineData>,
}

/// Value per game phase. Late phases are missing when the game ended before them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantTimelineData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ten_to_twenty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thirty_to_end: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twenty_to_thirty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero_to_ten: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,
    /// Keyed by participant id.
    pub participant_frames: HashMap<String, ParticipantFrame>,
    /// Milliseconds since the game started.
    pub timestamp: i64,
}

/// Something that happened during a frame. Which fields are set depends on
/// `event_type`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascended_type: Option<AscendedType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assisting_participant_ids: Vec<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_type: Option<BuildingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<i32>,
    pub event_type: EventType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_after: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_before: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub killer_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lane_type: Option<LaneType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_up_type: Option<LevelUpType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monster_type: Option<MonsterType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_captured: Option<PointCaptured>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_slot: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i32>,
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tower_type: Option<TowerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub victim_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ward_type: Option<WardType>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantFrame {
    pub current_gold: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominion_score: Option<i32>,
    pub jungle_minions_killed: i32,
    pub level: i32,
    pub minions_killed: i32,
    pub participant_id: i32,
    /// Absent on the first frame and for dead participants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_score: Option<i32>,
    pub total_gold: i32,
    pub xp: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

pub(crate) const OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::get(
        ApiModule::Match,
        "get_match",
        HostKind::Regional,
        "/api/lol/{region}/v2.2/match/{matchId}",
        "MatchDetail",
    )
    .with_query(&["includeTimeline"]),
    OperationDescriptor::get(
        ApiModule::Match,
        "get_match_ids_by_tournament",
        HostKind::Regional,
        "/api/lol/{region}/v2.2/match/by-tournament/{tournamentCode}/ids",
        "List[long]",
    ),
    OperationDescriptor::get(
        ApiModule::Match,
        "get_match_for_tournament",
        HostKind::Regional,
        "/api/lol/{region}/v2.2/match/for-tournament/{matchId}",
        "MatchDetail",
    )
    .with_query(&["tournamentCode", "includeTimeline"]),
];

pub(crate) fn entities() -> Vec<EntityDescriptor> {
    entities![
        ApiModule::Match =>
        MatchDetail,
        Participant,
        ParticipantIdentity,
        Team,
        Timeline,
        Mastery,
        BannedChampion,
        Rune,
        Player,
        ParticipantStats,
        ParticipantTimeline,
        ParticipantTimelineData,
        Frame,
        Event,
        ParticipantFrame,
        Position,
    ]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn api() -> MatchApi {
        MatchApi::new(Arc::new(ApiHosts::default()))
    }

    #[test]
    fn match_routes() {
        let endpoint = api().get_match(Region::Euw, 2511983720, Some(true));
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://euw.api.pvp.net/api/lol/euw/v2.2/match/2511983720?includeTimeline=true"
        );

        let endpoint = api().get_match_ids_by_tournament(Region::Na, "NA0418d-8899c");
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://na.api.pvp.net/api/lol/na/v2.2/match/by-tournament/NA0418d-8899c/ids"
        );
        assert_eq!(endpoint.decode(b"[1, 2]").unwrap(), vec![1, 2]);

        let endpoint = api().get_match_for_tournament(Region::Na, 12, "NA0418d-8899c", None);
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://na.api.pvp.net/api/lol/na/v2.2/match/for-tournament/12?tournamentCode=NA0418d-8899c"
        );
    }

    #[test]
    fn events_only_carry_their_fields() {
        let raw = json!({
            "eventType": "CHAMPION_KILL",
            "timestamp": 401123,
            "killerId": 3,
            "victimId": 7,
            "assistingParticipantIds": [1, 4],
            "position": {"x": 7012, "y": 7431}
        });

        let event: Event = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(event.event_type, EventType::ChampionKill);
        assert_eq!(event.ward_type, None);
        assert_eq!(event.position, Some(Position { x: 7012, y: 7431 }));
        assert_eq!(serde_json::to_value(&event).unwrap(), raw);
    }

    #[test]
    fn timeline_data_keeps_missing_phases_missing() {
        let raw = json!({"zeroToTen": 5.3, "tenToTwenty": 7.1});
        let data: ParticipantTimelineData = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(data.thirty_to_end, None);
        assert_eq!(serde_json::to_value(&data).unwrap(), raw);
    }

    #[test]
    fn lookups_by_participant() {
        let identity = ParticipantIdentity {
            participant_id: 1,
            player: Some(Player {
                match_history_uri: "/v1/stats/player_history/EUW1/22931237".to_string(),
                profile_icon: 588,
                summoner_id: 22931237,
                summoner_name: "Chalop".to_string(),
            }),
        };
        let detail = MatchDetail {
            map_id: 11,
            match_creation: 0,
            match_duration: 1834,
            match_id: 1,
            match_mode: GameMode::Classic,
            match_type: GameType::MatchedGame,
            match_version: "6.5.0.280".to_string(),
            participant_identities: vec![identity],
            participants: vec![],
            platform_id: "EUW1".to_string(),
            queue_type: QueueType::RankedSolo5x5,
            region: "EUW".to_string(),
            season: Season::Season2016,
            teams: vec![],
            timeline: None,
        };

        assert_eq!(detail.player_of(1).unwrap().summoner_name, "Chalop");
        assert!(detail.player_of(2).is_none());
        assert!(detail.participant(1).is_none());

        let value = serde_json::to_value(&detail).unwrap();
        assert!(value.get("timeline").is_none());
    }
}
