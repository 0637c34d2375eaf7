use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    api::client::{ApiHosts, Endpoint, HostKind},
    registry::{ApiModule, EntityDescriptor, OperationDescriptor, entities},
    types::{
        Region,
        legal::{PlayerStatSummaryType, Season},
    },
};

/// Stats-v1.3: ranked and per-queue aggregated stats of a summoner.
#[derive(Debug, Clone)]
pub struct StatsApi(Arc<ApiHosts>);

impl StatsApi {
    pub fn new(hosts: Arc<ApiHosts>) -> Self {
        Self(hosts)
    }

    fn path(&self, region: Region, summoner_id: i64, rest: &str) -> String {
        format!(
            "{}/api/lol/{}/v1.3/stats/by-summoner/{}/{}",
            self.0.base(HostKind::Regional, region),
            region,
            summoner_id,
            rest
        )
    }

    /// Ranked stats per champion. Defaults to the current season.
    pub fn get_ranked_stats(
        &self,
        region: Region,
        summoner_id: i64,
        season: Option<Season>,
    ) -> Endpoint<RankedStatsDto> {
        tracing::trace!(
            "[STATS-V1.3 API] get_ranked_stats {} in {:?}",
            summoner_id,
            region
        );

        Endpoint::get("get_ranked_stats", self.path(region, summoner_id, "ranked"))
            .with_optional_query("season", season)
    }

    pub fn get_stats_summary(
        &self,
        region: Region,
        summoner_id: i64,
        season: Option<Season>,
    ) -> Endpoint<PlayerStatsSummaryListDto> {
        tracing::trace!(
            "[STATS-V1.3 API] get_stats_summary {} in {:?}",
            summoner_id,
            region
        );

        Endpoint::get("get_stats_summary", self.path(region, summoner_id, "summary"))
            .with_optional_query("season", season)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RankedStatsDto {
    /// One entry per champion played, plus id 0 for the totals.
    pub champions: Vec<ChampionStatsDto>,
    pub modify_date: i64,
    pub summoner_id: i64,
}

impl RankedStatsDto {
    /// Aggregate over every champion, carried by the entry with id 0.
    pub fn totals(&self) -> Option<&AggregatedStatsDto> {
        self.champions.iter().find(|c| c.id == 0).map(|c| &c.stats)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChampionStatsDto {
    pub id: i32,
    pub stats: AggregatedStatsDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsSummaryListDto {
    pub player_stat_summaries: Vec<PlayerStatsSummaryDto>,
    pub summoner_id: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsSummaryDto {
    pub aggregated_stats: AggregatedStatsDto,
    /// Absent for queues without losses, e.g. co-op vs AI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub losses: Option<i32>,
    pub modify_date: i64,
    pub player_stat_summary_type: PlayerStatSummaryType,
    pub wins: i32,
}

/// Aggregated stats. The API only sends counters that are relevant to the queue
/// and non-zero, so every field is optional.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedStatsDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_assists: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_champions_killed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_combat_player_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_node_capture: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_node_capture_assist: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_node_neutralize: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_node_neutralize_assist: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_num_deaths: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_objective_player_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_team_objective: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_total_player_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_games_played: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub killing_spree: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_assists: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_champions_killed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_combat_player_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_largest_critical_strike: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_largest_killing_spree: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_node_capture: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_node_capture_assist: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_node_neutralize: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_node_neutralize_assist: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_num_deaths: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_objective_player_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_team_objective: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_time_played: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_time_spent_living: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_total_player_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_champion_kills_per_session: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_spells_cast: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal_games_played: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranked_premade_games_played: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranked_solo_games_played: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_assists: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_champion_kills: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_damage_dealt: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_damage_taken: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_deaths_per_session: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_double_kills: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_first_blood: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_gold_earned: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_heal: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_magic_damage_dealt: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_minion_kills: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_neutral_minions_killed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_node_capture: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_node_neutralize: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_penta_kills: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_physical_damage_dealt: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_quadra_kills: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sessions_lost: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sessions_played: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sessions_won: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_triple_kills: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_turrets_killed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_unreal_kills: Option<i32>,
}

pub(crate) const OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::get(
        ApiModule::Stats,
        "get_ranked_stats",
        HostKind::Regional,
        "/api/lol/{region}/v1.3/stats/by-summoner/{summonerId}/ranked",
        "RankedStatsDto",
    )
    .with_query(&["season"]),
    OperationDescriptor::get(
        ApiModule::Stats,
        "get_stats_summary",
        HostKind::Regional,
        "/api/lol/{region}/v1.3/stats/by-summoner/{summonerId}/summary",
        "PlayerStatsSummaryListDto",
    )
    .with_query(&["season"]),
];

pub(crate) fn entities() -> Vec<EntityDescriptor> {
    entities![
        ApiModule::Stats =>
        RankedStatsDto,
        ChampionStatsDto,
        AggregatedStatsDto,
        PlayerStatsSummaryListDto,
        PlayerStatsSummaryDto,
    ]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn api() -> StatsApi {
        StatsApi::new(Arc::new(ApiHosts::default()))
    }

    #[test]
    fn season_is_optional() {
        let endpoint = api().get_ranked_stats(Region::Euw, 22931237, Some(Season::Season2015));
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://euw.api.pvp.net/api/lol/euw/v1.3/stats/by-summoner/22931237/ranked?season=SEASON2015"
        );

        let endpoint = api().get_stats_summary(Region::Euw, 22931237, None);
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://euw.api.pvp.net/api/lol/euw/v1.3/stats/by-summoner/22931237/summary"
        );
    }

    #[test]
    fn ranked_totals_sit_on_champion_zero() {
        let raw = json!({
            "champions": [
                {"id": 266, "stats": {"totalSessionsPlayed": 4, "totalSessionsWon": 3}},
                {"id": 0, "stats": {"totalSessionsPlayed": 40, "totalSessionsWon": 21, "maxChampionsKilled": 17}}
            ],
            "modifyDate": 1457142736000i64,
            "summonerId": 22931237
        });

        let stats: RankedStatsDto = serde_json::from_value(raw.clone()).unwrap();
        let totals = stats.totals().unwrap();
        assert_eq!(totals.total_sessions_played, Some(40));
        assert_eq!(totals.total_penta_kills, None);
        assert_eq!(serde_json::to_value(&stats).unwrap(), raw);
    }

    #[test]
    fn summary_without_losses() {
        let raw = json!({
            "playerStatSummaries": [{
                "aggregatedStats": {"totalChampionKills": 120},
                "modifyDate": 1457142736000i64,
                "playerStatSummaryType": "CoopVsAI",
                "wins": 37
            }],
            "summonerId": 22931237
        });

        let summary: PlayerStatsSummaryListDto = serde_json::from_value(raw.clone()).unwrap();
        let entry = &summary.player_stat_summaries[0];
        assert_eq!(entry.player_stat_summary_type, PlayerStatSummaryType::CoopVsAi);
        assert_eq!(entry.losses, None);
        assert_eq!(serde_json::to_value(&summary).unwrap(), raw);
    }
}
