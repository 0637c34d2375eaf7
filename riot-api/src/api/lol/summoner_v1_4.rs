use std::{collections::HashMap, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{
    api::client::{ApiHosts, Endpoint, HostKind, join_ids},
    registry::{ApiModule, EntityDescriptor, OperationDescriptor, entities},
    types::{Region, SchemaResult},
};

/// Maximum number of summoner ids or names per request.
pub const MAX_IDS: usize = 40;

/// Key used by the API for results requested by name: lower case, no whitespace.
pub fn standardize_summoner_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Summoner-v1.4: summoner accounts with their mastery and rune pages.
#[derive(Debug, Clone)]
pub struct SummonerApi(Arc<ApiHosts>);

impl SummonerApi {
    pub fn new(hosts: Arc<ApiHosts>) -> Self {
        Self(hosts)
    }

    fn path(&self, region: Region, rest: &str) -> String {
        format!(
            "{}/api/lol/{}/v1.4/summoner/{}",
            self.0.base(HostKind::Regional, region),
            region,
            rest
        )
    }

    /// Summoners keyed by standardised name, see [`standardize_summoner_name`].
    pub fn get_summoners_by_name(
        &self,
        region: Region,
        names: &[&str],
    ) -> SchemaResult<Endpoint<HashMap<String, SummonerDto>>> {
        tracing::trace!(
            "[SUMMONER-V1.4 API] get_summoners_by_name {:?} in {:?}",
            names,
            region
        );

        let names = join_ids("get_summoners_by_name", names, MAX_IDS)?;

        Ok(Endpoint::get(
            "get_summoners_by_name",
            self.path(region, &format!("by-name/{names}")),
        ))
    }

    pub fn get_summoners(
        &self,
        region: Region,
        summoner_ids: &[i64],
    ) -> SchemaResult<Endpoint<HashMap<String, SummonerDto>>> {
        tracing::trace!(
            "[SUMMONER-V1.4 API] get_summoners {:?} in {:?}",
            summoner_ids,
            region
        );

        let ids = join_ids("get_summoners", summoner_ids, MAX_IDS)?;

        Ok(Endpoint::get("get_summoners", self.path(region, &ids)))
    }

    pub fn get_masteries(
        &self,
        region: Region,
        summoner_ids: &[i64],
    ) -> SchemaResult<Endpoint<HashMap<String, MasteryPagesDto>>> {
        tracing::trace!(
            "[SUMMONER-V1.4 API] get_masteries {:?} in {:?}",
            summoner_ids,
            region
        );

        let ids = join_ids("get_masteries", summoner_ids, MAX_IDS)?;

        Ok(Endpoint::get(
            "get_masteries",
            self.path(region, &format!("{ids}/masteries")),
        ))
    }

    /// Summoner names keyed by summoner id.
    pub fn get_names(
        &self,
        region: Region,
        summoner_ids: &[i64],
    ) -> SchemaResult<Endpoint<HashMap<String, String>>> {
        tracing::trace!(
            "[SUMMONER-V1.4 API] get_names {:?} in {:?}",
            summoner_ids,
            region
        );

        let ids = join_ids("get_names", summoner_ids, MAX_IDS)?;

        Ok(Endpoint::get(
            "get_names",
            self.path(region, &format!("{ids}/name")),
        ))
    }

    pub fn get_runes(
        &self,
        region: Region,
        summoner_ids: &[i64],
    ) -> SchemaResult<Endpoint<HashMap<String, RunePagesDto>>> {
        tracing::trace!(
            "[SUMMONER-V1.4 API] get_runes {:?} in {:?}",
            summoner_ids,
            region
        );

        let ids = join_ids("get_runes", summoner_ids, MAX_IDS)?;

        Ok(Endpoint::get(
            "get_runes",
            self.path(region, &format!("{ids}/runes")),
        ))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub id: i64,
    pub name: String,
    pub profile_icon_id: i32,
    /// Epoch milliseconds of the last change to the summoner (name, icon, level).
    pub revision_date: i64,
    pub summoner_level: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MasteryPagesDto {
    pub pages: Vec<MasteryPageDto>,
    pub summoner_id: i64,
}

impl MasteryPagesDto {
    pub fn current(&self) -> Option<&MasteryPageDto> {
        self.pages.iter().find(|p| p.current)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MasteryPageDto {
    pub current: bool,
    pub id: i64,
    /// Absent on empty pages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub masteries: Vec<MasteryDto>,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MasteryDto {
    pub id: i32,
    pub rank: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RunePagesDto {
    pub pages: Vec<RunePageDto>,
    pub summoner_id: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RunePageDto {
    pub current: bool,
    pub id: i64,
    pub name: String,
    /// Absent on empty pages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<RuneSlotDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RuneSlotDto {
    pub rune_id: i32,
    pub rune_slot_id: i32,
}

pub(crate) const OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::get(
        ApiModule::Summoner,
        "get_summoners_by_name",
        HostKind::Regional,
        "/api/lol/{region}/v1.4/summoner/by-name/{summonerNames}",
        "Map[string, SummonerDto]",
    )
    .with_constraints("maximum 40 names, keyed by standardised name"),
    OperationDescriptor::get(
        ApiModule::Summoner,
        "get_summoners",
        HostKind::Regional,
        "/api/lol/{region}/v1.4/summoner/{summonerIds}",
        "Map[string, SummonerDto]",
    )
    .with_constraints("maximum 40 summoner ids"),
    OperationDescriptor::get(
        ApiModule::Summoner,
        "get_masteries",
        HostKind::Regional,
        "/api/lol/{region}/v1.4/summoner/{summonerIds}/masteries",
        "Map[string, MasteryPagesDto]",
    )
    .with_constraints("maximum 40 summoner ids"),
    OperationDescriptor::get(
        ApiModule::Summoner,
        "get_names",
        HostKind::Regional,
        "/api/lol/{region}/v1.4/summoner/{summonerIds}/name",
        "Map[string, string]",
    )
    .with_constraints("maximum 40 summoner ids"),
    OperationDescriptor::get(
        ApiModule::Summoner,
        "get_runes",
        HostKind::Regional,
        "/api/lol/{region}/v1.4/summoner/{summonerIds}/runes",
        "Map[string, RunePagesDto]",
    )
    .with_constraints("maximum 40 summoner ids"),
];

pub(crate) fn entities() -> Vec<EntityDescriptor> {
    entities![
        ApiModule::Summoner =>
        SummonerDto,
        MasteryPagesDto,
        MasteryPageDto,
        MasteryDto,
        RunePagesDto,
        RunePageDto,
        RuneSlotDto,
    ]
}
