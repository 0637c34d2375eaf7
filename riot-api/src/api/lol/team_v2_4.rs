use std::{collections::HashMap, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{
    api::client::{ApiHosts, Endpoint, HostKind, join_ids},
    registry::{ApiModule, EntityDescriptor, OperationDescriptor, entities},
    types::{Region, SchemaResult},
};

/// Maximum number of summoner or team ids per request.
pub const MAX_IDS: usize = 10;

/// Team-v2.4: ranked teams, their rosters and recent games.
#[derive(Debug, Clone)]
pub struct TeamApi(Arc<ApiHosts>);

impl TeamApi {
    pub fn new(hosts: Arc<ApiHosts>) -> Self {
        Self(hosts)
    }

    fn path(&self, region: Region, rest: &str) -> String {
        format!(
            "{}/api/lol/{}/v2.4/team/{}",
            self.0.base(HostKind::Regional, region),
            region,
            rest
        )
    }

    /// Teams of up to 10 summoners, keyed by summoner id.
    pub fn get_teams_by_summoner(
        &self,
        region: Region,
        summoner_ids: &[i64],
    ) -> SchemaResult<Endpoint<HashMap<String, Vec<TeamDto>>>> {
        tracing::trace!(
            "[TEAM-V2.4 API] get_teams_by_summoner {:?} in {:?}",
            summoner_ids,
            region
        );

        let ids = join_ids("get_teams_by_summoner", summoner_ids, MAX_IDS)?;

        Ok(Endpoint::get(
            "get_teams_by_summoner",
            self.path(region, &format!("by-summoner/{ids}")),
        ))
    }

    /// Up to 10 teams, keyed by team id.
    pub fn get_teams(
        &self,
        region: Region,
        team_ids: &[&str],
    ) -> SchemaResult<Endpoint<HashMap<String, TeamDto>>> {
        tracing::trace!("[TEAM-V2.4 API] get_teams {:?} in {:?}", team_ids, region);

        let ids = join_ids("get_teams", team_ids, MAX_IDS)?;

        Ok(Endpoint::get("get_teams", self.path(region, &ids)))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub create_date: i64,
    /// Team id, `TEAM-` followed by a UUID.
    pub full_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_game_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_join_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_joined_ranked_team_queue_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub match_history: Vec<MatchHistorySummaryDto>,
    pub modify_date: i64,
    pub name: String,
    pub roster: RosterDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_last_join_date: Option<i64>,
    pub status: String,
    pub tag: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub team_stat_details: Vec<TeamStatDetailDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third_last_join_date: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchHistorySummaryDto {
    pub assists: i32,
    pub date: i64,
    pub deaths: i32,
    pub game_id: i64,
    pub game_mode: String,
    pub invalid: bool,
    pub kills: i32,
    pub map_id: i32,
    pub opposing_team_kills: i32,
    pub opposing_team_name: String,
    pub win: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RosterDto {
    pub member_list: Vec<TeamMemberInfoDto>,
    pub owner_id: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberInfoDto {
    pub invite_date: i64,
    pub join_date: i64,
    pub player_id: i64,
    /// `MEMBER` or `PENDING`.
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatDetailDto {
    pub average_games_played: i32,
    pub losses: i32,
    pub team_stat_type: String,
    pub wins: i32,
}

pub(crate) const OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::get(
        ApiModule::Team,
        "get_teams_by_summoner",
        HostKind::Regional,
        "/api/lol/{region}/v2.4/team/by-summoner/{summonerIds}",
        "Map[string, List[TeamDto]]",
    )
    .with_constraints("maximum 10 summoner ids"),
    OperationDescriptor::get(
        ApiModule::Team,
        "get_teams",
        HostKind::Regional,
        "/api/lol/{region}/v2.4/team/{teamIds}",
        "Map[string, TeamDto]",
    )
    .with_constraints("maximum 10 team ids"),
];

pub(crate) fn entities() -> Vec<EntityDescriptor> {
    entities![
        ApiModule::Team =>
        TeamDto,
        MatchHistorySummaryDto,
        RosterDto,
        TeamMemberInfoDto,
        TeamStatDetailDto,
    ]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::SchemaError;

    fn api() -> TeamApi {
        TeamApi::new(Arc::new(ApiHosts::default()))
    }

    #[test]
    fn team_routes() {
        let endpoint = api().get_teams_by_summoner(Region::Euw, &[22931237]).unwrap();
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://euw.api.pvp.net/api/lol/euw/v2.4/team/by-summoner/22931237"
        );

        let endpoint = api()
            .get_teams(
                Region::Euw,
                &["TEAM-1f0f1a60-5cc3-11e3-9ae3-782bcb4d1861"],
            )
            .unwrap();
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://euw.api.pvp.net/api/lol/euw/v2.4/team/TEAM-1f0f1a60-5cc3-11e3-9ae3-782bcb4d1861"
        );

        let ids: Vec<&str> = vec!["TEAM-a"; 11];
        assert!(matches!(
            api().get_teams(Region::Euw, &ids),
            Err(SchemaError::TooManyIds { limit: 10, .. })
        ));
    }

    #[test]
    fn fresh_team_round_trips() {
        let raw = json!({
            "createDate": 1386172800000i64,
            "fullId": "TEAM-1f0f1a60-5cc3-11e3-9ae3-782bcb4d1861",
            "modifyDate": 1386172800000i64,
            "name": "Les Conservateurs",
            "roster": {
                "memberList": [{
                    "inviteDate": 1386172800000i64,
                    "joinDate": 1386172800000i64,
                    "playerId": 22931237,
                    "status": "MEMBER"
                }],
                "ownerId": 22931237
            },
            "status": "RANKED",
            "tag": "LCS",
            "teamStatDetails": [
                {"averageGamesPlayed": 0, "losses": 0, "teamStatType": "RANKED_TEAM_5x5", "wins": 0}
            ]
        });

        let team: TeamDto = serde_json::from_value(raw.clone()).unwrap();
        assert!(team.match_history.is_empty());
        assert_eq!(team.last_game_date, None);
        assert_eq!(team.roster.owner_id, 22931237);
        assert_eq!(serde_json::to_value(&team).unwrap(), raw);
    }
}
