use std::{collections::HashMap, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{
    api::client::{ApiHosts, Endpoint, HostKind, join_ids},
    registry::{ApiModule, EntityDescriptor, OperationDescriptor, entities},
    types::{
        Region, SchemaResult,
        legal::{Division, QueueType, Tier},
    },
};

/// Maximum number of summoner or team ids per league request.
pub const MAX_IDS: usize = 10;

/// Leagues keyed by the summoner or team id they were requested for.
pub type LeaguesById = HashMap<String, Vec<LeagueDto>>;

/// League-v2.5: ranked leagues of summoners and teams.
#[derive(Debug, Clone)]
pub struct LeagueApi(Arc<ApiHosts>);

impl LeagueApi {
    pub fn new(hosts: Arc<ApiHosts>) -> Self {
        Self(hosts)
    }

    fn path(&self, region: Region, rest: &str) -> String {
        format!(
            "{}/api/lol/{}/v2.5/league/{}",
            self.0.base(HostKind::Regional, region),
            region,
            rest
        )
    }

    /// Full leagues of up to 10 summoners.
    pub fn get_leagues_by_summoner(
        &self,
        region: Region,
        summoner_ids: &[i64],
    ) -> SchemaResult<Endpoint<LeaguesById>> {
        tracing::trace!(
            "[LEAGUE-V2.5 API] get_leagues_by_summoner {:?} in {:?}",
            summoner_ids,
            region
        );

        let ids = join_ids("get_leagues_by_summoner", summoner_ids, MAX_IDS)?;

        Ok(Endpoint::get(
            "get_leagues_by_summoner",
            self.path(region, &format!("by-summoner/{ids}")),
        ))
    }

    /// Leagues of up to 10 summoners, each holding only the requested summoner's entry.
    pub fn get_league_entries_by_summoner(
        &self,
        region: Region,
        summoner_ids: &[i64],
    ) -> SchemaResult<Endpoint<LeaguesById>> {
        tracing::trace!(
            "[LEAGUE-V2.5 API] get_league_entries_by_summoner {:?} in {:?}",
            summoner_ids,
            region
        );

        let ids = join_ids("get_league_entries_by_summoner", summoner_ids, MAX_IDS)?;

        Ok(Endpoint::get(
            "get_league_entries_by_summoner",
            self.path(region, &format!("by-summoner/{ids}/entry")),
        ))
    }

    /// Full leagues of up to 10 ranked teams.
    pub fn get_leagues_by_team(
        &self,
        region: Region,
        team_ids: &[&str],
    ) -> SchemaResult<Endpoint<LeaguesById>> {
        tracing::trace!(
            "[LEAGUE-V2.5 API] get_leagues_by_team {:?} in {:?}",
            team_ids,
            region
        );

        let ids = join_ids("get_leagues_by_team", team_ids, MAX_IDS)?;

        Ok(Endpoint::get(
            "get_leagues_by_team",
            self.path(region, &format!("by-team/{ids}")),
        ))
    }

    pub fn get_league_entries_by_team(
        &self,
        region: Region,
        team_ids: &[&str],
    ) -> SchemaResult<Endpoint<LeaguesById>> {
        tracing::trace!(
            "[LEAGUE-V2.5 API] get_league_entries_by_team {:?} in {:?}",
            team_ids,
            region
        );

        let ids = join_ids("get_league_entries_by_team", team_ids, MAX_IDS)?;

        Ok(Endpoint::get(
            "get_league_entries_by_team",
            self.path(region, &format!("by-team/{ids}/entry")),
        ))
    }

    /// Challenger tier league of a ranked queue
    /// (`RANKED_SOLO_5x5`, `RANKED_TEAM_3x3` or `RANKED_TEAM_5x5`).
    pub fn get_challenger(&self, region: Region, queue: QueueType) -> Endpoint<LeagueDto> {
        tracing::trace!("[LEAGUE-V2.5 API] get_challenger {} in {:?}", queue, region);

        Endpoint::get("get_challenger", self.path(region, "challenger")).with_query("type", queue)
    }

    pub fn get_master(&self, region: Region, queue: QueueType) -> Endpoint<LeagueDto> {
        tracing::trace!("[LEAGUE-V2.5 API] get_master {} in {:?}", queue, region);

        Endpoint::get("get_master", self.path(region, "master")).with_query("type", queue)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueDto {
    /// Entries of the league. Only the requested one(s) on `/entry` routes.
    pub entries: Vec<LeagueEntryDto>,
    pub name: String,
    /// Summoner or team id the league was requested for. Absent on challenger and
    /// master leagues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_id: Option<String>,
    pub queue: QueueType,
    pub tier: Tier,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub division: Division,
    pub is_fresh_blood: bool,
    pub is_hot_streak: bool,
    pub is_inactive: bool,
    pub is_veteran: bool,
    pub league_points: i32,
    pub losses: i32,
    /// Only present while a promotion series is in progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mini_series: Option<MiniSeriesDto>,
    /// Summoner id or team id, depending on the queue.
    pub player_or_team_id: String,
    pub player_or_team_name: String,
    pub wins: i32,
}

impl LeagueEntryDto {
    pub fn is_in_promotion(&self) -> bool {
        self.mini_series.is_some()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MiniSeriesDto {
    pub losses: i32,
    /// One character per game: `W` win, `L` loss, `N` not played.
    pub progress: String,
    /// Number of wins required for promotion.
    pub target: i32,
    pub wins: i32,
}

pub(crate) const OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::get(
        ApiModule::League,
        "get_leagues_by_summoner",
        HostKind::Regional,
        "/api/lol/{region}/v2.5/league/by-summoner/{summonerIds}",
        "Map[string, List[LeagueDto]]",
    )
    .with_constraints("maximum 10 summoner ids"),
    OperationDescriptor::get(
        ApiModule::League,
        "get_league_entries_by_summoner",
        HostKind::Regional,
        "/api/lol/{region}/v2.5/league/by-summoner/{summonerIds}/entry",
        "Map[string, List[LeagueDto]]",
    )
    .with_constraints("maximum 10 summoner ids"),
    OperationDescriptor::get(
        ApiModule::League,
        "get_leagues_by_team",
        HostKind::Regional,
        "/api/lol/{region}/v2.5/league/by-team/{teamIds}",
        "Map[string, List[LeagueDto]]",
    )
    .with_constraints("maximum 10 team ids"),
    OperationDescriptor::get(
        ApiModule::League,
        "get_league_entries_by_team",
        HostKind::Regional,
        "/api/lol/{region}/v2.5/league/by-team/{teamIds}/entry",
        "Map[string, List[LeagueDto]]",
    )
    .with_constraints("maximum 10 team ids"),
    OperationDescriptor::get(
        ApiModule::League,
        "get_challenger",
        HostKind::Regional,
        "/api/lol/{region}/v2.5/league/challenger",
        "LeagueDto",
    )
    .with_query(&["type"])
    .with_constraints("type is RANKED_SOLO_5x5, RANKED_TEAM_3x3 or RANKED_TEAM_5x5"),
    OperationDescriptor::get(
        ApiModule::League,
        "get_master",
        HostKind::Regional,
        "/api/lol/{region}/v2.5/league/master",
        "LeagueDto",
    )
    .with_query(&["type"])
    .with_constraints("type is RANKED_SOLO_5x5, RANKED_TEAM_3x3 or RANKED_TEAM_5x5"),
];

pub(crate) fn entities() -> Vec<EntityDescriptor> {
    entities![ApiModule::League => LeagueDto, LeagueEntryDto, MiniSeriesDto]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::SchemaError;

    fn api() -> LeagueApi {
        LeagueApi::new(Arc::new(ApiHosts::default()))
    }

    #[test]
    fn summoner_ids_are_joined_and_bounded() {
        let endpoint = api()
            .get_league_entries_by_summoner(Region::Euw, &[22931237, 5908])
            .unwrap();
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://euw.api.pvp.net/api/lol/euw/v2.5/league/by-summoner/22931237,5908/entry"
        );

        let too_many: Vec<i64> = (0..11).collect();
        assert!(matches!(
            api().get_leagues_by_summoner(Region::Euw, &too_many),
            Err(SchemaError::TooManyIds { limit: 10, given: 11, .. })
        ));
        assert!(matches!(
            api().get_leagues_by_team(Region::Euw, &[]),
            Err(SchemaError::EmptyIdList { .. })
        ));
    }

    #[test]
    fn challenger_takes_the_queue_as_type() {
        let endpoint = api().get_challenger(Region::Na, QueueType::RankedSolo5x5);
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://na.api.pvp.net/api/lol/na/v2.5/league/challenger?type=RANKED_SOLO_5x5"
        );
    }

    #[test]
    fn entry_without_series_stays_without_series() {
        let raw = json!({
            "division": "II",
            "isFreshBlood": false,
            "isHotStreak": false,
            "isInactive": false,
            "isVeteran": true,
            "leaguePoints": 12,
            "losses": 10,
            "miniSeries": null,
            "playerOrTeamId": "22931237",
            "playerOrTeamName": "Chalop",
            "wins": 42
        });

        let entry: LeagueEntryDto = serde_json::from_value(raw).unwrap();
        assert_eq!(entry.division, Division::Two);
        assert_eq!((entry.wins, entry.losses), (42, 10));
        assert!(!entry.is_in_promotion());

        let back = serde_json::to_value(&entry).unwrap();
        assert!(back.get("miniSeries").is_none());
    }

    #[test]
    fn leagues_by_summoner_decode() {
        let raw = json!({
            "22931237": [{
                "entries": [{
                    "division": "V",
                    "isFreshBlood": true,
                    "isHotStreak": false,
                    "isInactive": false,
                    "isVeteran": false,
                    "leaguePoints": 100,
                    "losses": 3,
                    "miniSeries": {"losses": 1, "progress": "WLN", "target": 2, "wins": 1},
                    "playerOrTeamId": "22931237",
                    "playerOrTeamName": "Chalop",
                    "wins": 4
                }],
                "name": "Nasus's Warmongers",
                "participantId": "22931237",
                "queue": "RANKED_SOLO_5x5",
                "tier": "GOLD"
            }]
        });

        let leagues = api()
            .get_leagues_by_summoner(Region::Euw, &[22931237])
            .unwrap()
            .decode(raw.to_string().as_bytes())
            .unwrap();

        let league = &leagues["22931237"][0];
        assert_eq!(league.tier, Tier::Gold);
        assert_eq!(league.queue, QueueType::RankedSolo5x5);
        let series = league.entries[0].mini_series.as_ref().unwrap();
        assert_eq!(series.progress, "WLN");
        assert_eq!(serde_json::to_value(&leagues).unwrap(), raw);
    }
}
