use std::sync::Arc;

use super::client::ApiHosts;

pub mod champion_v1_2;
pub mod championmastery;
pub mod current_game_v1_0;
pub mod featured_games_v1_0;
pub mod game_v1_3;
pub mod league_v2_5;
pub mod match_v2_2;
pub mod matchlist_v2_2;
pub mod static_data_v1_2;
pub mod stats_v1_3;
pub mod status_v1_0;
pub mod summoner_v1_4;
pub mod team_v2_4;
pub mod tournament_provider_v1;

pub use champion_v1_2::ChampionApi;
pub use championmastery::ChampionMasteryApi;
pub use current_game_v1_0::CurrentGameApi;
pub use featured_games_v1_0::FeaturedGamesApi;
pub use game_v1_3::GameApi;
pub use league_v2_5::LeagueApi;
pub use match_v2_2::MatchApi;
pub use matchlist_v2_2::MatchListApi;
pub use static_data_v1_2::StaticDataApi;
pub use stats_v1_3::StatsApi;
pub use status_v1_0::StatusApi;
pub use summoner_v1_4::SummonerApi;
pub use team_v2_4::TeamApi;
pub use tournament_provider_v1::TournamentProviderApi;

/// Every LoL API module, sharing one host configuration.
#[derive(Debug, Clone)]
pub struct LolApi {
    pub champion: ChampionApi,
    pub champion_mastery: ChampionMasteryApi,
    pub current_game: CurrentGameApi,
    pub featured_games: FeaturedGamesApi,
    pub game: GameApi,
    pub league: LeagueApi,
    pub matches: MatchApi,
    pub match_list: MatchListApi,
    pub static_data: StaticDataApi,
    pub stats: StatsApi,
    pub status: StatusApi,
    pub summoner: SummonerApi,
    pub team: TeamApi,
    pub tournament: TournamentProviderApi,
}

impl LolApi {
    pub fn new(hosts: ApiHosts) -> Self {
        let hosts = Arc::new(hosts);

        Self {
            champion: ChampionApi::new(hosts.clone()),
            champion_mastery: ChampionMasteryApi::new(hosts.clone()),
            current_game: CurrentGameApi::new(hosts.clone()),
            featured_games: FeaturedGamesApi::new(hosts.clone()),
            game: GameApi::new(hosts.clone()),
            league: LeagueApi::new(hosts.clone()),
            matches: MatchApi::new(hosts.clone()),
            match_list: MatchListApi::new(hosts.clone()),
            static_data: StaticDataApi::new(hosts.clone()),
            stats: StatsApi::new(hosts.clone()),
            status: StatusApi::new(hosts.clone()),
            summoner: SummonerApi::new(hosts.clone()),
            team: TeamApi::new(hosts.clone()),
            tournament: TournamentProviderApi::new(hosts),
        }
    }
}

impl Default for LolApi {
    fn default() -> Self {
        Self::new(ApiHosts::default())
    }
}
