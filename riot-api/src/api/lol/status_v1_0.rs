use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    api::client::{ApiHosts, Endpoint, HostKind},
    registry::{ApiModule, EntityDescriptor, OperationDescriptor, entities},
    types::{
        Region,
        legal::{MessageSeverity, ServiceStatus},
    },
};

/// Lol-status-v1.0: shard and service health. Keys are snake_case on this API.
#[derive(Debug, Clone)]
pub struct StatusApi(Arc<ApiHosts>);

impl StatusApi {
    pub fn new(hosts: Arc<ApiHosts>) -> Self {
        Self(hosts)
    }

    /// Every shard. The status host is not regional, `region` only picks the host entry.
    pub fn get_shards(&self, region: Region) -> Endpoint<Vec<Shard>> {
        tracing::trace!("[LOL-STATUS-V1.0 API] get_shards");

        let path = format!("{}/shards", self.0.base(HostKind::Status, region));

        Endpoint::get("get_shards", path)
    }

    pub fn get_shard_status(&self, region: Region) -> Endpoint<ShardStatus> {
        tracing::trace!("[LOL-STATUS-V1.0 API] get_shard_status in {:?}", region);

        let path = format!(
            "{}/shards/{}",
            self.0.base(HostKind::Status, region),
            region
        );

        Endpoint::get("get_shard_status", path)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Shard {
    pub hostname: String,
    pub locales: Vec<String>,
    pub name: String,
    pub region_tag: String,
    pub slug: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShardStatus {
    pub hostname: String,
    pub locales: Vec<String>,
    pub name: String,
    pub region_tag: String,
    pub services: Vec<Service>,
    pub slug: String,
}

impl ShardStatus {
    /// Whether every service reports `online`.
    pub fn is_healthy(&self) -> bool {
        self.services
            .iter()
            .all(|s| s.status == ServiceStatus::Online)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub incidents: Vec<Incident>,
    pub name: String,
    pub slug: String,
    pub status: ServiceStatus,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Incident {
    pub active: bool,
    pub created_at: String,
    pub id: i64,
    pub updates: Vec<Message>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub author: String,
    pub content: String,
    pub created_at: String,
    pub id: String,
    pub severity: MessageSeverity,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub translations: Vec<Translation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub content: String,
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

pub(crate) const OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::get(
        ApiModule::Status,
        "get_shards",
        HostKind::Status,
        "/shards",
        "List[Shard]",
    ),
    OperationDescriptor::get(
        ApiModule::Status,
        "get_shard_status",
        HostKind::Status,
        "/shards/{region}",
        "ShardStatus",
    ),
];

pub(crate) fn entities() -> Vec<EntityDescriptor> {
    entities![
        ApiModule::Status =>
        Shard,
        ShardStatus,
        Service,
        Incident,
        Message,
        Translation,
    ]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn api() -> StatusApi {
        StatusApi::new(Arc::new(ApiHosts::default()))
    }

    #[test]
    fn status_host_is_plain_http() {
        assert_eq!(
            api().get_shards(Region::Euw).url().unwrap().as_str(),
            "http://status.leagueoflegends.com/shards"
        );
        assert_eq!(
            api().get_shard_status(Region::Eune).url().unwrap().as_str(),
            "http://status.leagueoflegends.com/shards/eune"
        );
    }

    #[test]
    fn shard_status_keeps_snake_case() {
        let raw = json!({
            "hostname": "prod.euw1.lol.riotgames.com",
            "locales": ["en_GB", "de_DE"],
            "name": "EU West",
            "region_tag": "eu",
            "services": [
                {"incidents": [], "name": "Game", "slug": "game", "status": "online"},
                {
                    "incidents": [{
                        "active": true,
                        "created_at": "2016-03-05T01:52:16.960Z",
                        "id": 2314,
                        "updates": [{
                            "author": "",
                            "content": "Store purchases are delayed.",
                            "created_at": "2016-03-05T01:52:16.960Z",
                            "id": "56da3ba0ee6e9b0100000001",
                            "severity": "Alert",
                            "translations": [{"content": "Käufe sind verzögert.", "locale": "de_DE"}],
                            "updated_at": "2016-03-05T02:10:00.000Z"
                        }]
                    }],
                    "name": "Store",
                    "slug": "store",
                    "status": "deploying"
                }
            ],
            "slug": "euw"
        });

        let status: ShardStatus = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(status.region_tag, "eu");
        assert_eq!(status.services[1].status, ServiceStatus::Deploying);
        assert_eq!(
            status.services[1].incidents[0].updates[0].severity,
            MessageSeverity::Alert
        );
        assert!(!status.is_healthy());
        assert_eq!(serde_json::to_value(&status).unwrap(), raw);
    }
}
