use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    api::client::{ApiHosts, Endpoint, HostKind},
    registry::{ApiModule, EntityDescriptor, OperationDescriptor, entities},
    types::Region,
};

/// Champion-v1.2: availability flags of every champion.
#[derive(Debug, Clone)]
pub struct ChampionApi(Arc<ApiHosts>);

impl ChampionApi {
    pub fn new(hosts: Arc<ApiHosts>) -> Self {
        Self(hosts)
    }

    /// All champions, or only the current free-to-play rotation.
    pub fn get_champions(
        &self,
        region: Region,
        free_to_play: Option<bool>,
    ) -> Endpoint<ChampionListDto> {
        tracing::trace!("[CHAMPION-V1.2 API] get_champions in {:?}", region);

        let path = format!(
            "{}/api/lol/{}/v1.2/champion",
            self.0.base(HostKind::Regional, region),
            region
        );

        Endpoint::get("get_champions", path).with_optional_query("freeToPlay", free_to_play)
    }

    pub fn get_champion(&self, region: Region, id: i64) -> Endpoint<ChampionDto> {
        tracing::trace!("[CHAMPION-V1.2 API] get_champion {} in {:?}", id, region);

        let path = format!(
            "{}/api/lol/{}/v1.2/champion/{}",
            self.0.base(HostKind::Regional, region),
            region,
            id
        );

        Endpoint::get("get_champion", path)
    }
}

/// Contains a collection of champion information.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChampionListDto {
    pub champions: Vec<ChampionDto>,
}

/// Contains champion information.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChampionDto {
    pub active: bool,
    /// Bot enabled flag (for custom games).
    pub bot_enabled: bool,
    /// Bot Match Made enabled flag (for Co-op vs. AI games).
    pub bot_mm_enabled: bool,
    /// Free to play champions are rotated periodically.
    pub free_to_play: bool,
    pub id: i64,
    pub ranked_play_enabled: bool,
}

pub(crate) const OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::get(
        ApiModule::Champion,
        "get_champions",
        HostKind::Regional,
        "/api/lol/{region}/v1.2/champion",
        "ChampionListDto",
    )
    .with_query(&["freeToPlay"]),
    OperationDescriptor::get(
        ApiModule::Champion,
        "get_champion",
        HostKind::Regional,
        "/api/lol/{region}/v1.2/champion/{id}",
        "ChampionDto",
    ),
];

pub(crate) fn entities() -> Vec<EntityDescriptor> {
    entities![ApiModule::Champion => ChampionListDto, ChampionDto]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn api() -> ChampionApi {
        ChampionApi::new(Arc::new(ApiHosts::default()))
    }

    #[test]
    fn endpoints_follow_their_templates() {
        let endpoint = api().get_champions(Region::Euw, Some(true));
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://euw.api.pvp.net/api/lol/euw/v1.2/champion?freeToPlay=true"
        );

        let endpoint = api().get_champion(Region::Na, 266);
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://na.api.pvp.net/api/lol/na/v1.2/champion/266"
        );
        assert_eq!(endpoint.method(), reqwest::Method::GET);
    }

    #[test]
    fn champion_list_decodes() {
        let raw = json!({
            "champions": [{
                "active": true,
                "botEnabled": false,
                "botMmEnabled": true,
                "freeToPlay": false,
                "id": 266,
                "rankedPlayEnabled": true
            }]
        });

        let list = api()
            .get_champions(Region::Euw, None)
            .decode(raw.to_string().as_bytes())
            .unwrap();

        assert_eq!(list.champions.len(), 1);
        assert!(list.champions[0].bot_mm_enabled);
        assert_eq!(serde_json::to_value(&list).unwrap(), raw);
    }
}
