//! Lol-static-data-v1.2: game reference data served from the global host.
//!
//! Most records are sparse: without a data flag (`champData`, `itemListData`, ...)
//! the API only sends ids and names, so the heavier fields are optional.

mod champion;
mod item;
mod mastery;
mod realm;
mod spell;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use self::{
    champion::{
        BlockDto, BlockItemDto, ChampionDto, ChampionListDto, ChampionSpellDto, InfoDto,
        PassiveDto, RecommendedDto, SkinDto, StatsDto,
    },
    item::{
        BasicDataDto, BasicDataStatsDto, GoldDto, GroupDto, ItemDto, ItemListDto, ItemTreeDto,
        MetaDataDto, RuneDto, RuneListDto,
    },
    mastery::{MasteryDto, MasteryListDto, MasteryTreeDto, MasteryTreeItemDto, MasteryTreeListDto},
    realm::{LanguageStringsDto, MapDataDto, MapDetailsDto, RealmDto},
    spell::{SummonerSpellDto, SummonerSpellListDto},
};
use crate::{
    api::client::{ApiHosts, Endpoint, HostKind},
    registry::{ApiModule, EntityDescriptor, OperationDescriptor, entities},
    types::Region,
};

/// Optional parameters shared by the static data operations.
///
/// Operations ignore the parameters they do not take (e.g. `dataById` on single
/// records).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticDataQuery {
    /// e.g. `en_US`. Defaults to the region's locale.
    pub locale: Option<String>,
    /// Data dragon version. Defaults to the latest.
    pub version: Option<String>,
    /// Key the `data` map by numeric id instead of by key.
    pub data_by_id: Option<bool>,
    /// Data flags, `all` for everything.
    pub data: Vec<String>,
}

impl StaticDataQuery {
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn data_by_id(mut self, data_by_id: bool) -> Self {
        self.data_by_id = Some(data_by_id);
        self
    }

    pub fn data<S: AsRef<str>>(mut self, flags: &[S]) -> Self {
        self.data
            .extend(flags.iter().map(|flag| flag.as_ref().to_string()));
        self
    }
}

/// Which parameters of [`StaticDataQuery`] an operation forwards.
#[derive(Clone, Copy)]
struct Accepts {
    localized: bool,
    by_id: bool,
    data_key: Option<&'static str>,
}

impl Accepts {
    const NOTHING: Self = Self {
        localized: false,
        by_id: false,
        data_key: None,
    };
    const LOCALIZED: Self = Self {
        localized: true,
        by_id: false,
        data_key: None,
    };

    const fn keyed(data_key: &'static str) -> Self {
        Self {
            localized: true,
            by_id: true,
            data_key: Some(data_key),
        }
    }

    const fn flagged(data_key: &'static str) -> Self {
        Self {
            localized: true,
            by_id: false,
            data_key: Some(data_key),
        }
    }
}

/// Range of a spell: one value per rank, or `"self"`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum SpellRange {
    Ranks(Vec<i32>),
    Label(String),
}

impl SpellRange {
    pub fn is_self(&self) -> bool {
        matches!(self, Self::Label(label) if label == "self")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageDto {
    pub full: String,
    pub group: String,
    pub h: i32,
    pub sprite: String,
    pub w: i32,
    pub x: i32,
    pub y: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LevelTipDto {
    pub effect: Vec<String>,
    pub label: Vec<String>,
}

/// Variable of a spell tooltip, `{{ a1 }}` and friends.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpellVarsDto {
    pub coeff: Vec<f64>,
    #[serde(rename = "dyn", skip_serializing_if = "Option::is_none")]
    pub dynamic: Option<String>,
    pub key: String,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranks_with: Option<String>,
}

/// Static data API.
#[derive(Debug, Clone)]
pub struct StaticDataApi(Arc<ApiHosts>);

impl StaticDataApi {
    pub fn new(hosts: Arc<ApiHosts>) -> Self {
        Self(hosts)
    }

    fn endpoint<T>(
        &self,
        operation: &'static str,
        region: Region,
        rest: &str,
        query: &StaticDataQuery,
        accepts: Accepts,
    ) -> Endpoint<T> {
        tracing::trace!(
            "[LOL-STATIC-DATA-V1.2 API] {} {} in {:?}",
            operation,
            rest,
            region
        );

        let path = format!(
            "{}/api/lol/static-data/{}/v1.2/{}",
            self.0.base(HostKind::Global, region),
            region,
            rest
        );
        let mut endpoint = Endpoint::get(operation, path);

        if accepts.localized {
            endpoint = endpoint
                .with_optional_query("locale", query.locale.as_deref())
                .with_optional_query("version", query.version.as_deref());
        }
        if accepts.by_id {
            endpoint = endpoint.with_optional_query("dataById", query.data_by_id);
        }
        if let Some(key) = accepts.data_key {
            if !query.data.is_empty() {
                endpoint = endpoint.with_query(key, query.data.join(","));
            }
        }

        endpoint
    }

    pub fn get_champions(
        &self,
        region: Region,
        query: &StaticDataQuery,
    ) -> Endpoint<ChampionListDto> {
        self.endpoint(
            "get_champions",
            region,
            "champion",
            query,
            Accepts::keyed("champData"),
        )
    }

    pub fn get_champion(
        &self,
        region: Region,
        id: i32,
        query: &StaticDataQuery,
    ) -> Endpoint<ChampionDto> {
        self.endpoint(
            "get_champion",
            region,
            &format!("champion/{id}"),
            query,
            Accepts::flagged("champData"),
        )
    }

    pub fn get_items(&self, region: Region, query: &StaticDataQuery) -> Endpoint<ItemListDto> {
        self.endpoint(
            "get_items",
            region,
            "item",
            query,
            Accepts::flagged("itemListData"),
        )
    }

    pub fn get_item(&self, region: Region, id: i32, query: &StaticDataQuery) -> Endpoint<ItemDto> {
        self.endpoint(
            "get_item",
            region,
            &format!("item/{id}"),
            query,
            Accepts::flagged("itemData"),
        )
    }

    pub fn get_language_strings(
        &self,
        region: Region,
        query: &StaticDataQuery,
    ) -> Endpoint<LanguageStringsDto> {
        self.endpoint(
            "get_language_strings",
            region,
            "language-strings",
            query,
            Accepts::LOCALIZED,
        )
    }

    /// Locales supported by the region.
    pub fn get_languages(&self, region: Region) -> Endpoint<Vec<String>> {
        self.endpoint(
            "get_languages",
            region,
            "languages",
            &StaticDataQuery::default(),
            Accepts::NOTHING,
        )
    }

    pub fn get_maps(&self, region: Region, query: &StaticDataQuery) -> Endpoint<MapDataDto> {
        self.endpoint("get_maps", region, "map", query, Accepts::LOCALIZED)
    }

    pub fn get_masteries(
        &self,
        region: Region,
        query: &StaticDataQuery,
    ) -> Endpoint<MasteryListDto> {
        self.endpoint(
            "get_masteries",
            region,
            "mastery",
            query,
            Accepts::flagged("masteryListData"),
        )
    }

    pub fn get_mastery(
        &self,
        region: Region,
        id: i32,
        query: &StaticDataQuery,
    ) -> Endpoint<MasteryDto> {
        self.endpoint(
            "get_mastery",
            region,
            &format!("mastery/{id}"),
            query,
            Accepts::flagged("masteryData"),
        )
    }

    pub fn get_realm(&self, region: Region) -> Endpoint<RealmDto> {
        self.endpoint(
            "get_realm",
            region,
            "realm",
            &StaticDataQuery::default(),
            Accepts::NOTHING,
        )
    }

    pub fn get_runes(&self, region: Region, query: &StaticDataQuery) -> Endpoint<RuneListDto> {
        self.endpoint(
            "get_runes",
            region,
            "rune",
            query,
            Accepts::flagged("runeListData"),
        )
    }

    pub fn get_rune(&self, region: Region, id: i32, query: &StaticDataQuery) -> Endpoint<RuneDto> {
        self.endpoint(
            "get_rune",
            region,
            &format!("rune/{id}"),
            query,
            Accepts::flagged("runeData"),
        )
    }

    pub fn get_summoner_spells(
        &self,
        region: Region,
        query: &StaticDataQuery,
    ) -> Endpoint<SummonerSpellListDto> {
        self.endpoint(
            "get_summoner_spells",
            region,
            "summoner-spell",
            query,
            Accepts::keyed("spellData"),
        )
    }

    pub fn get_summoner_spell(
        &self,
        region: Region,
        id: i32,
        query: &StaticDataQuery,
    ) -> Endpoint<SummonerSpellDto> {
        self.endpoint(
            "get_summoner_spell",
            region,
            &format!("summoner-spell/{id}"),
            query,
            Accepts::flagged("spellData"),
        )
    }

    /// Data dragon versions, latest first.
    pub fn get_versions(&self, region: Region) -> Endpoint<Vec<String>> {
        self.endpoint(
            "get_versions",
            region,
            "versions",
            &StaticDataQuery::default(),
            Accepts::NOTHING,
        )
    }
}

const fn static_get(
    name: &'static str,
    template: &'static str,
    response: &'static str,
) -> OperationDescriptor {
    OperationDescriptor::get(ApiModule::StaticData, name, HostKind::Global, template, response)
}

pub(crate) const OPERATIONS: &[OperationDescriptor] = &[
    static_get(
        "get_champions",
        "/api/lol/static-data/{region}/v1.2/champion",
        "ChampionListDto",
    )
    .with_query(&["locale", "version", "dataById", "champData"]),
    static_get(
        "get_champion",
        "/api/lol/static-data/{region}/v1.2/champion/{id}",
        "ChampionDto",
    )
    .with_query(&["locale", "version", "champData"]),
    static_get(
        "get_items",
        "/api/lol/static-data/{region}/v1.2/item",
        "ItemListDto",
    )
    .with_query(&["locale", "version", "itemListData"]),
    static_get(
        "get_item",
        "/api/lol/static-data/{region}/v1.2/item/{id}",
        "ItemDto",
    )
    .with_query(&["locale", "version", "itemData"]),
    static_get(
        "get_language_strings",
        "/api/lol/static-data/{region}/v1.2/language-strings",
        "LanguageStringsDto",
    )
    .with_query(&["locale", "version"]),
    static_get(
        "get_languages",
        "/api/lol/static-data/{region}/v1.2/languages",
        "List[string]",
    ),
    static_get(
        "get_maps",
        "/api/lol/static-data/{region}/v1.2/map",
        "MapDataDto",
    )
    .with_query(&["locale", "version"]),
    static_get(
        "get_masteries",
        "/api/lol/static-data/{region}/v1.2/mastery",
        "MasteryListDto",
    )
    .with_query(&["locale", "version", "masteryListData"]),
    static_get(
        "get_mastery",
        "/api/lol/static-data/{region}/v1.2/mastery/{id}",
        "MasteryDto",
    )
    .with_query(&["locale", "version", "masteryData"]),
    static_get(
        "get_realm",
        "/api/lol/static-data/{region}/v1.2/realm",
        "RealmDto",
    ),
    static_get(
        "get_runes",
        "/api/lol/static-data/{region}/v1.2/rune",
        "RuneListDto",
    )
    .with_query(&["locale", "version", "runeListData"]),
    static_get(
        "get_rune",
        "/api/lol/static-data/{region}/v1.2/rune/{id}",
        "RuneDto",
    )
    .with_query(&["locale", "version", "runeData"]),
    static_get(
        "get_summoner_spells",
        "/api/lol/static-data/{region}/v1.2/summoner-spell",
        "SummonerSpellListDto",
    )
    .with_query(&["locale", "version", "dataById", "spellData"]),
    static_get(
        "get_summoner_spell",
        "/api/lol/static-data/{region}/v1.2/summoner-spell/{id}",
        "SummonerSpellDto",
    )
    .with_query(&["locale", "version", "spellData"]),
    static_get(
        "get_versions",
        "/api/lol/static-data/{region}/v1.2/versions",
        "List[string]",
    ),
];

pub(crate) fn entities() -> Vec<EntityDescriptor> {
    entities![
        ApiModule::StaticData =>
        ChampionListDto,
        ChampionDto,
        ChampionSpellDto,
        ImageDto,
        InfoDto,
        PassiveDto,
        RecommendedDto,
        BlockDto,
        BlockItemDto,
        SkinDto,
        StatsDto,
        LevelTipDto,
        SpellVarsDto,
        ItemListDto,
        BasicDataDto,
        BasicDataStatsDto,
        GoldDto,
        GroupDto,
        ItemTreeDto,
        ItemDto,
        MetaDataDto,
        LanguageStringsDto,
        MapDataDto,
        MapDetailsDto,
        MasteryListDto,
        MasteryDto,
        MasteryTreeDto,
        MasteryTreeListDto,
        MasteryTreeItemDto,
        RealmDto,
        RuneListDto,
        RuneDto,
        SummonerSpellListDto,
        SummonerSpellDto,
    ]
}
