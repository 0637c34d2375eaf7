use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    api::client::{ApiHosts, Endpoint, HostKind},
    registry::{ApiModule, EntityDescriptor, OperationDescriptor, entities},
    types::{
        Region,
        legal::{GameMode, GameType},
    },
};

pub use super::current_game_v1_0::{BannedChampion, Observer};

/// Featured-games-v1.0: the games the client advertises for spectating.
#[derive(Debug, Clone)]
pub struct FeaturedGamesApi(Arc<ApiHosts>);

impl FeaturedGamesApi {
    pub fn new(hosts: Arc<ApiHosts>) -> Self {
        Self(hosts)
    }

    pub fn get_featured_games(&self, region: Region) -> Endpoint<FeaturedGames> {
        tracing::trace!("[FEATURED-GAMES-V1.0 API] get_featured_games in {:?}", region);

        let path = format!(
            "{}/observer-mode/rest/featured",
            self.0.base(HostKind::Regional, region)
        );

        Endpoint::get("get_featured_games", path)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedGames {
    /// Suggested interval to wait before requesting the list again, in seconds.
    pub client_refresh_interval: i64,
    pub game_list: Vec<FeaturedGameInfo>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedGameInfo {
    pub banned_champions: Vec<BannedChampion>,
    pub game_id: i64,
    pub game_length: i64,
    pub game_mode: GameMode,
    pub game_queue_config_id: i64,
    pub game_start_time: i64,
    pub game_type: GameType,
    pub map_id: i64,
    pub observers: Observer,
    pub participants: Vec<Participant>,
    pub platform_id: String,
}

/// Participant of a featured game. Carries less than a current-game participant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub bot: bool,
    pub champion_id: i64,
    pub profile_icon_id: i64,
    pub spell1_id: i64,
    pub spell2_id: i64,
    pub summoner_name: String,
    pub team_id: i64,
}

pub(crate) const OPERATIONS: &[OperationDescriptor] = &[OperationDescriptor::get(
    ApiModule::FeaturedGames,
    "get_featured_games",
    HostKind::Regional,
    "/observer-mode/rest/featured",
    "FeaturedGames",
)];

pub(crate) fn entities() -> Vec<EntityDescriptor> {
    entities![
        ApiModule::FeaturedGames =>
        FeaturedGames,
        FeaturedGameInfo,
        Participant,
        BannedChampion,
        Observer,
    ]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn featured_games_share_the_banned_champion_record() {
        let api = FeaturedGamesApi::new(Arc::new(ApiHosts::default()));
        let endpoint = api.get_featured_games(Region::Kr);
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://kr.api.pvp.net/observer-mode/rest/featured"
        );

        let raw = json!({
            "clientRefreshInterval": 300,
            "gameList": [{
                "bannedChampions": [{"championId": 157, "pickTurn": 2, "teamId": 200}],
                "gameId": 2511983720i64,
                "gameLength": 1080,
                "gameMode": "ARAM",
                "gameQueueConfigId": 65,
                "gameStartTime": 1457142736000i64,
                "gameType": "MATCHED_GAME",
                "mapId": 12,
                "observers": {"encryptionKey": "key"},
                "participants": [{
                    "bot": false,
                    "championId": 103,
                    "profileIconId": 7,
                    "spell1Id": 4,
                    "spell2Id": 32,
                    "summonerName": "Faker",
                    "teamId": 100
                }],
                "platformId": "KR"
            }]
        });

        let featured = endpoint.decode(raw.to_string().as_bytes()).unwrap();
        let game = &featured.game_list[0];
        assert_eq!(game.game_mode, GameMode::Aram);
        assert_eq!(
            game.banned_champions[0],
            BannedChampion {
                champion_id: 157,
                pick_turn: 2,
                team_id: 200
            }
        );
        assert_eq!(serde_json::to_value(&featured).unwrap(), raw);
    }
}
