use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    api::client::{ApiHosts, Endpoint, HostKind, ensure_range},
    registry::{ApiModule, EntityDescriptor, OperationDescriptor, entities},
    types::{Platform, SchemaResult},
};

/// Champion mastery: per-player mastery points, addressed by platform.
#[derive(Debug, Clone)]
pub struct ChampionMasteryApi(Arc<ApiHosts>);

impl ChampionMasteryApi {
    pub fn new(hosts: Arc<ApiHosts>) -> Self {
        Self(hosts)
    }

    fn player_path(&self, platform: Platform, player_id: i64) -> String {
        format!(
            "{}/championmastery/location/{}/player/{}",
            self.0.base(HostKind::Regional, platform.to_region()),
            platform,
            player_id
        )
    }

    pub fn get_champion_mastery(
        &self,
        platform: Platform,
        player_id: i64,
        champion_id: i64,
    ) -> Endpoint<ChampionMasteryDto> {
        tracing::trace!(
            "[CHAMPIONMASTERY API] get_champion_mastery {} {} on {}",
            player_id,
            champion_id,
            platform
        );

        let path = format!(
            "{}/champion/{}",
            self.player_path(platform, player_id),
            champion_id
        );

        Endpoint::get("get_champion_mastery", path)
    }

    pub fn get_champion_masteries(
        &self,
        platform: Platform,
        player_id: i64,
    ) -> Endpoint<Vec<ChampionMasteryDto>> {
        tracing::trace!(
            "[CHAMPIONMASTERY API] get_champion_masteries {} on {}",
            player_id,
            platform
        );

        let path = format!("{}/champions", self.player_path(platform, player_id));

        Endpoint::get("get_champion_masteries", path)
    }

    /// Total mastery score: the sum of individual champion mastery levels.
    pub fn get_score(&self, platform: Platform, player_id: i64) -> Endpoint<i32> {
        tracing::trace!("[CHAMPIONMASTERY API] get_score {} on {}", player_id, platform);

        let path = format!("{}/score", self.player_path(platform, player_id));

        Endpoint::get("get_score", path)
    }

    /// Top champions by mastery. The server defaults `count` to 3.
    pub fn get_top_champions(
        &self,
        platform: Platform,
        player_id: i64,
        count: Option<u32>,
    ) -> SchemaResult<Endpoint<Vec<ChampionMasteryDto>>> {
        tracing::trace!(
            "[CHAMPIONMASTERY API] get_top_champions {} on {}",
            player_id,
            platform
        );

        if let Some(count) = count {
            ensure_range("count", count.into(), 1, i64::from(u32::MAX))?;
        }

        let path = format!("{}/topchampions", self.player_path(platform, player_id));

        Ok(Endpoint::get("get_top_champions", path).with_optional_query("count", count))
    }
}

/// Champion mastery of one player for one champion.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMasteryDto {
    pub champion_id: i64,
    pub champion_level: i32,
    /// Total number of points earned for this champion.
    pub champion_points: i32,
    pub champion_points_since_last_level: i64,
    /// Zero once the champion reached the maximum level.
    pub champion_points_until_next_level: i64,
    /// Whether a chest was granted for this champion this season.
    pub chest_granted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_grade: Option<String>,
    /// Epoch milliseconds.
    pub last_play_time: i64,
    pub player_id: i64,
}

pub(crate) const OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::get(
        ApiModule::ChampionMastery,
        "get_champion_mastery",
        HostKind::Regional,
        "/championmastery/location/{platformId}/player/{playerId}/champion/{championId}",
        "ChampionMasteryDto",
    ),
    OperationDescriptor::get(
        ApiModule::ChampionMastery,
        "get_champion_masteries",
        HostKind::Regional,
        "/championmastery/location/{platformId}/player/{playerId}/champions",
        "List[ChampionMasteryDto]",
    ),
    OperationDescriptor::get(
        ApiModule::ChampionMastery,
        "get_score",
        HostKind::Regional,
        "/championmastery/location/{platformId}/player/{playerId}/score",
        "int",
    ),
    OperationDescriptor::get(
        ApiModule::ChampionMastery,
        "get_top_champions",
        HostKind::Regional,
        "/championmastery/location/{platformId}/player/{playerId}/topchampions",
        "List[ChampionMasteryDto]",
    )
    .with_query(&["count"])
    .with_constraints("count must be at least 1, defaults to 3"),
];

pub(crate) fn entities() -> Vec<EntityDescriptor> {
    entities![ApiModule::ChampionMastery => ChampionMasteryDto]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::SchemaError;

    fn api() -> ChampionMasteryApi {
        ChampionMasteryApi::new(Arc::new(ApiHosts::default()))
    }

    #[test]
    fn platform_routes_to_its_region_host() {
        let endpoint = api().get_champion_mastery(Platform::EUN1, 42, 266);
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://eune.api.pvp.net/championmastery/location/EUN1/player/42/champion/266"
        );

        let endpoint = api().get_score(Platform::KR, 7);
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://kr.api.pvp.net/championmastery/location/KR/player/7/score"
        );
        assert_eq!(endpoint.decode(b"113").unwrap(), 113);
    }

    #[test]
    fn top_champions_count_is_checked() {
        let endpoint = api()
            .get_top_champions(Platform::NA1, 7, Some(5))
            .unwrap();
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://na.api.pvp.net/championmastery/location/NA1/player/7/topchampions?count=5"
        );

        assert!(matches!(
            api().get_top_champions(Platform::NA1, 7, Some(0)),
            Err(SchemaError::OutOfRange { parameter: "count", .. })
        ));
        assert!(api().get_top_champions(Platform::NA1, 7, None).is_ok());
    }

    #[test]
    fn mastery_decodes_without_grade() {
        let raw = json!([{
            "championId": 1,
            "championLevel": 5,
            "championPoints": 34356,
            "championPointsSinceLastLevel": 12756,
            "championPointsUntilNextLevel": 0,
            "chestGranted": true,
            "lastPlayTime": 1457142736000i64,
            "playerId": 7
        }]);

        let masteries = api()
            .get_champion_masteries(Platform::NA1, 7)
            .decode(raw.to_string().as_bytes())
            .unwrap();

        assert_eq!(masteries[0].highest_grade, None);
        assert_eq!(serde_json::to_value(&masteries).unwrap(), raw);
    }
}
