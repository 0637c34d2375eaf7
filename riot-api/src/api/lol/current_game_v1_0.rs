use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    api::client::{ApiHosts, Endpoint, HostKind},
    registry::{ApiModule, EntityDescriptor, OperationDescriptor, entities},
    types::{
        Platform,
        legal::{GameMode, GameType},
    },
};

/// Current-game-v1.0: the game a summoner is playing right now, through observer mode.
#[derive(Debug, Clone)]
pub struct CurrentGameApi(Arc<ApiHosts>);

impl CurrentGameApi {
    pub fn new(hosts: Arc<ApiHosts>) -> Self {
        Self(hosts)
    }

    /// Answers 404 when the summoner is not in a game.
    pub fn get_spectator_game_info(
        &self,
        platform: Platform,
        summoner_id: i64,
    ) -> Endpoint<CurrentGameInfo> {
        tracing::trace!(
            "[CURRENT-GAME-V1.0 API] get_spectator_game_info {} on {}",
            summoner_id,
            platform
        );

        let path = format!(
            "{}/observer-mode/rest/consumer/getSpectatorGameInfo/{}/{}",
            self.0.base(HostKind::Regional, platform.to_region()),
            platform,
            summoner_id
        );

        Endpoint::get("get_spectator_game_info", path)
    }
}

/// In-progress game. Changes continuously until the game ends.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameInfo {
    pub banned_champions: Vec<BannedChampion>,
    pub game_id: i64,
    /// Seconds since the game started.
    pub game_length: i64,
    pub game_mode: GameMode,
    /// Queue id, see the game constants documentation.
    pub game_queue_config_id: i64,
    /// Epoch milliseconds.
    pub game_start_time: i64,
    pub game_type: GameType,
    pub map_id: i64,
    pub observers: Observer,
    pub participants: Vec<CurrentGameParticipant>,
    pub platform_id: String,
}

/// A champion banned during the pick phase. Featured games use the same record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BannedChampion {
    pub champion_id: i64,
    /// The turn during which the champion was banned.
    pub pick_turn: i32,
    /// The team that banned the champion.
    pub team_id: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameParticipant {
    pub bot: bool,
    pub champion_id: i64,
    pub masteries: Vec<Mastery>,
    pub profile_icon_id: i64,
    pub runes: Vec<Rune>,
    pub spell1_id: i64,
    pub spell2_id: i64,
    pub summoner_id: i64,
    pub summoner_name: String,
    pub team_id: i64,
}

/// Observer information of a spectatable game.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Observer {
    /// Key used to decrypt the spectator grid game data for playback.
    pub encryption_key: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Mastery {
    pub mastery_id: i64,
    pub rank: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Rune {
    /// Number of this rune used.
    pub count: i32,
    pub rune_id: i64,
}

pub(crate) const OPERATIONS: &[OperationDescriptor] = &[OperationDescriptor::get(
    ApiModule::CurrentGame,
    "get_spectator_game_info",
    HostKind::Regional,
    "/observer-mode/rest/consumer/getSpectatorGameInfo/{platformId}/{summonerId}",
    "CurrentGameInfo",
)];

pub(crate) fn entities() -> Vec<EntityDescriptor> {
    entities![
        ApiModule::CurrentGame =>
        CurrentGameInfo,
        BannedChampion,
        CurrentGameParticipant,
        Observer,
        Mastery,
        Rune,
    ]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn spectator_route_uses_platform_id() {
        let api = CurrentGameApi::new(Arc::new(ApiHosts::default()));
        let endpoint = api.get_spectator_game_info(Platform::EUW1, 22931237);

        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://euw.api.pvp.net/observer-mode/rest/consumer/getSpectatorGameInfo/EUW1/22931237"
        );
    }

    #[test]
    fn current_game_round_trips() {
        let raw = json!({
            "bannedChampions": [{"championId": 64, "pickTurn": 1, "teamId": 100}],
            "gameId": 2511983720i64,
            "gameLength": 312,
            "gameMode": "CLASSIC",
            "gameQueueConfigId": 4,
            "gameStartTime": 1457142736000i64,
            "gameType": "MATCHED_GAME",
            "mapId": 11,
            "observers": {"encryptionKey": "nB2nhvN5X6dFXfYrnHIPHzIl5e4ETfGz"},
            "participants": [{
                "bot": false,
                "championId": 266,
                "masteries": [{"masteryId": 6111, "rank": 5}],
                "profileIconId": 588,
                "runes": [{"count": 9, "runeId": 5245}],
                "spell1Id": 4,
                "spell2Id": 11,
                "summonerId": 22931237,
                "summonerName": "Chalop",
                "teamId": 100
            }],
            "platformId": "EUW1"
        });

        let info: CurrentGameInfo = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(info.game_mode, GameMode::Classic);
        assert_eq!(info.game_type, GameType::MatchedGame);
        assert_eq!(info.participants[0].runes[0].count, 9);
        assert_eq!(serde_json::to_value(&info).unwrap(), raw);
    }
}
