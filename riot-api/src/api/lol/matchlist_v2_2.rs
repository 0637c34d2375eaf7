use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    api::client::{ApiHosts, Endpoint, HostKind},
    registry::{ApiModule, EntityDescriptor, OperationDescriptor, entities},
    types::{
        Region, SchemaError, SchemaResult,
        legal::{Lane, QueueType, Role, Season},
    },
};

/// Filters of a match list request. Empty lists and `None` are left out of the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchListParams {
    pub champion_ids: Vec<i64>,
    /// `RANKED_SOLO_5x5`, `RANKED_TEAM_3x3` or `RANKED_TEAM_5x5`.
    pub ranked_queues: Vec<QueueType>,
    pub seasons: Vec<Season>,
    /// Epoch milliseconds, inclusive.
    pub begin_time: Option<i64>,
    pub end_time: Option<i64>,
    pub begin_index: Option<i32>,
    pub end_index: Option<i32>,
}

impl MatchListParams {
    fn validate(&self) -> SchemaResult<()> {
        if let (Some(begin), Some(end)) = (self.begin_index, self.end_index) {
            if end < begin {
                return Err(SchemaError::OutOfRange {
                    parameter: "endIndex",
                    min: begin.into(),
                    max: i32::MAX.into(),
                    given: end.into(),
                });
            }
        }
        if let (Some(begin), Some(end)) = (self.begin_time, self.end_time) {
            if end < begin {
                return Err(SchemaError::OutOfRange {
                    parameter: "endTime",
                    min: begin,
                    max: i64::MAX,
                    given: end,
                });
            }
        }

        Ok(())
    }
}

fn comma_list<T: ToString>(values: &[T]) -> Option<String> {
    if values.is_empty() {
        return None;
    }

    Some(
        values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(","),
    )
}

/// Matchlist-v2.2: the ranked match history of a summoner.
#[derive(Debug, Clone)]
pub struct MatchListApi(Arc<ApiHosts>);

impl MatchListApi {
    pub fn new(hosts: Arc<ApiHosts>) -> Self {
        Self(hosts)
    }

    pub fn get_match_list(
        &self,
        region: Region,
        summoner_id: i64,
        params: &MatchListParams,
    ) -> SchemaResult<Endpoint<MatchList>> {
        tracing::trace!(
            "[MATCHLIST-V2.2 API] get_match_list {} in {:?}",
            summoner_id,
            region
        );

        params.validate()?;

        let path = format!(
            "{}/api/lol/{}/v2.2/matchlist/by-summoner/{}",
            self.0.base(HostKind::Regional, region),
            region,
            summoner_id
        );

        Ok(Endpoint::get("get_match_list", path)
            .with_optional_query("championIds", comma_list(&params.champion_ids))
            .with_optional_query("rankedQueues", comma_list(&params.ranked_queues))
            .with_optional_query("seasons", comma_list(&params.seasons))
            .with_optional_query("beginTime", params.begin_time)
            .with_optional_query("endTime", params.end_time)
            .with_optional_query("beginIndex", params.begin_index)
            .with_optional_query("endIndex", params.end_index))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchList {
    pub end_index: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<MatchReference>,
    pub start_index: i32,
    pub total_games: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchReference {
    pub champion: i64,
    pub lane: Lane,
    pub match_id: i64,
    pub platform_id: String,
    pub queue: QueueType,
    pub region: String,
    pub role: Role,
    pub season: Season,
    pub timestamp: i64,
}

pub(crate) const OPERATIONS: &[OperationDescriptor] = &[OperationDescriptor::get(
    ApiModule::MatchList,
    "get_match_list",
    HostKind::Regional,
    "/api/lol/{region}/v2.2/matchlist/by-summoner/{summonerId}",
    "MatchList",
)
.with_query(&[
    "championIds",
    "rankedQueues",
    "seasons",
    "beginTime",
    "endTime",
    "beginIndex",
    "endIndex",
])];

pub(crate) fn entities() -> Vec<EntityDescriptor> {
    entities![ApiModule::MatchList => MatchList, MatchReference]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn api() -> MatchListApi {
        MatchListApi::new(Arc::new(ApiHosts::default()))
    }

    #[test]
    fn no_filter_means_no_query() {
        let endpoint = api()
            .get_match_list(Region::Euw, 22931237, &MatchListParams::default())
            .unwrap();
        assert!(endpoint.query().is_empty());
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://euw.api.pvp.net/api/lol/euw/v2.2/matchlist/by-summoner/22931237"
        );
    }

    #[test]
    fn filters_are_comma_joined_in_order() {
        let params = MatchListParams {
            champion_ids: vec![266, 103],
            ranked_queues: vec![QueueType::RankedSolo5x5],
            seasons: vec![Season::Season2015, Season::Season2016],
            begin_index: Some(0),
            end_index: Some(20),
            ..Default::default()
        };

        let endpoint = api().get_match_list(Region::Euw, 1, &params).unwrap();
        assert_eq!(
            endpoint.query(),
            &[
                ("championIds", "266,103".to_string()),
                ("rankedQueues", "RANKED_SOLO_5x5".to_string()),
                ("seasons", "SEASON2015,SEASON2016".to_string()),
                ("beginIndex", "0".to_string()),
                ("endIndex", "20".to_string()),
            ]
        );
    }

    #[test]
    fn reversed_index_range_is_rejected() {
        let params = MatchListParams {
            begin_index: Some(10),
            end_index: Some(5),
            ..Default::default()
        };

        assert!(matches!(
            api().get_match_list(Region::Euw, 1, &params),
            Err(SchemaError::OutOfRange {
                parameter: "endIndex",
                ..
            })
        ));
    }

    #[test]
    fn match_reference_round_trips() {
        let raw = json!({
            "endIndex": 1,
            "matches": [{
                "champion": 266,
                "lane": "TOP",
                "matchId": 2511983720i64,
                "platformId": "EUW1",
                "queue": "TEAM_BUILDER_DRAFT_RANKED_5x5",
                "region": "EUW",
                "role": "SOLO",
                "season": "SEASON2016",
                "timestamp": 1457142736000i64
            }],
            "startIndex": 0,
            "totalGames": 1
        });

        let list: MatchList = serde_json::from_value(raw.clone()).unwrap();
        let reference = &list.matches[0];
        assert_eq!(reference.lane, Lane::Top);
        // Queue names newer than the documented set are kept as-is.
        assert!(!reference.queue.is_known());
        assert_eq!(serde_json::to_value(&list).unwrap(), raw);
    }
}
