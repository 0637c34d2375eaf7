use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    api::client::{ApiHosts, Endpoint, HostKind},
    registry::{ApiModule, EntityDescriptor, OperationDescriptor, entities},
    types::{
        Region,
        legal::{GameMode, GameSubType, GameType},
    },
};

/// Game-v1.3: the ten most recent games of a summoner.
#[derive(Debug, Clone)]
pub struct GameApi(Arc<ApiHosts>);

impl GameApi {
    pub fn new(hosts: Arc<ApiHosts>) -> Self {
        Self(hosts)
    }

    pub fn get_recent_games(&self, region: Region, summoner_id: i64) -> Endpoint<RecentGamesDto> {
        tracing::trace!(
            "[GAME-V1.3 API] get_recent_games {} in {:?}",
            summoner_id,
            region
        );

        let path = format!(
            "{}/api/lol/{}/v1.3/game/by-summoner/{}/recent",
            self.0.base(HostKind::Regional, region),
            region,
            summoner_id
        );

        Endpoint::get("get_recent_games", path)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentGamesDto {
    pub games: Vec<GameDto>,
    pub summoner_id: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub champion_id: i32,
    /// Epoch milliseconds.
    pub create_date: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fellow_players: Vec<PlayerDto>,
    pub game_id: i64,
    pub game_mode: GameMode,
    pub game_type: GameType,
    /// Invalid flag, set on games that do not count.
    pub invalid: bool,
    pub ip_earned: i32,
    pub level: i32,
    pub map_id: i32,
    pub spell1: i32,
    pub spell2: i32,
    pub stats: RawStatsDto,
    pub sub_type: GameSubType,
    pub team_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub champion_id: i32,
    pub summoner_id: i64,
    pub team_id: i32,
}

/// Raw game statistics. The server omits every stat that is zero or does not apply
/// to the game mode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawStatsDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assists: Option<i32>,
    /// Number of enemy inhibitors killed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barracks_killed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounty_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub champions_killed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combat_player_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumables_purchased: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_dealt_player: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_kills: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_blood: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold_earned: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold_spent: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item0: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item1: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item2: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item3: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item4: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item5: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item6: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_purchased: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub killing_sprees: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub largest_critical_strike: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub largest_killing_spree: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub largest_multi_kill: Option<i32>,
    /// Number of tier 3 items built.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legendary_items_created: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magic_damage_dealt_player: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magic_damage_dealt_to_champions: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magic_damage_taken: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minions_denied: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minions_killed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neutral_minions_killed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neutral_minions_killed_enemy_jungle: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neutral_minions_killed_your_jungle: Option<i32>,
    /// Flag specifying if the summoner got the killing blow on the nexus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nexus_killed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_capture: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_capture_assist: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_neutralize: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_neutralize_assist: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_deaths: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_items_bought: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective_player_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penta_kills: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_damage_dealt_player: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_damage_dealt_to_champions: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_damage_taken: Option<i32>,
    /// Player position (Legal values: TOP(1), MIDDLE(2), JUNGLE(3), BOT(4)).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_position: Option<i32>,
    /// Player role (Legal values: DUO(1), SUPPORT(2), CARRY(3), SOLO(4)).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_role: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_score0: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_score1: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_score2: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_score3: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_score4: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_score5: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_score6: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_score7: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_score8: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_score9: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quadra_kills: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sight_wards_bought: Option<i32>,
    /// Number of times the first champion spell was cast.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spell1_cast: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spell2_cast: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spell3_cast: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spell4_cast: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summon_spell1_cast: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summon_spell2_cast: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_monster_killed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_objective: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_played: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_damage_dealt: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_damage_dealt_to_champions: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_damage_taken: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_heal: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_player_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score_rank: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time_crowd_control_dealt: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_units_healed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triple_kills: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub true_damage_dealt_player: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub true_damage_dealt_to_champions: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub true_damage_taken: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turrets_killed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unreal_kills: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub victory_point_total: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision_wards_bought: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ward_killed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ward_placed: Option<i32>,
    /// Flag specifying whether or not this game was won.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub win: Option<bool>,
}

pub(crate) const OPERATIONS: &[OperationDescriptor] = &[OperationDescriptor::get(
    ApiModule::Game,
    "get_recent_games",
    HostKind::Regional,
    "/api/lol/{region}/v1.3/game/by-summoner/{summonerId}/recent",
    "RecentGamesDto",
)];

pub(crate) fn entities() -> Vec<EntityDescriptor> {
    entities![ApiModule::Game => RecentGamesDto, GameDto, PlayerDto, RawStatsDto]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn recent_games_keep_sparse_stats_sparse() {
        let api = GameApi::new(Arc::new(ApiHosts::default()));
        let endpoint = api.get_recent_games(Region::Euw, 22931237);
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://euw.api.pvp.net/api/lol/euw/v1.3/game/by-summoner/22931237/recent"
        );

        let raw = json!({
            "games": [{
                "championId": 266,
                "createDate": 1457142736000i64,
                "fellowPlayers": [{"championId": 1, "summonerId": 5, "teamId": 200}],
                "gameId": 2511983720i64,
                "gameMode": "CLASSIC",
                "gameType": "MATCHED_GAME",
                "invalid": false,
                "ipEarned": 89,
                "level": 30,
                "mapId": 11,
                "spell1": 4,
                "spell2": 12,
                "stats": {
                    "assists": 4,
                    "championsKilled": 7,
                    "goldEarned": 11204,
                    "item0": 3071,
                    "nexusKilled": true,
                    "playerPosition": 1,
                    "timePlayed": 1834,
                    "win": true
                },
                "subType": "RANKED_SOLO_5x5",
                "teamId": 100
            }],
            "summonerId": 22931237
        });

        let recent = endpoint.decode(raw.to_string().as_bytes()).unwrap();
        let game = &recent.games[0];
        assert_eq!(game.sub_type, GameSubType::RankedSolo5x5);
        assert_eq!(game.stats.num_deaths, None);
        assert_eq!(game.stats.win, Some(true));
        assert_eq!(serde_json::to_value(&recent).unwrap(), raw);
    }

    #[test]
    fn solo_bot_games_have_no_fellow_players() {
        let raw = json!({
            "championId": 1,
            "createDate": 1,
            "gameId": 2,
            "gameMode": "CLASSIC",
            "gameType": "CUSTOM_GAME",
            "invalid": false,
            "ipEarned": 0,
            "level": 1,
            "mapId": 11,
            "spell1": 4,
            "spell2": 7,
            "stats": {},
            "subType": "NONE",
            "teamId": 100
        });

        let game: GameDto = serde_json::from_value(raw.clone()).unwrap();
        assert!(game.fellow_players.is_empty());
        assert_eq!(game.stats, RawStatsDto::default());
        assert_eq!(serde_json::to_value(&game).unwrap(), raw);
    }
}
