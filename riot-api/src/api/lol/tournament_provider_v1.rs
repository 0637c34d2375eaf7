use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    api::client::{ApiHosts, Endpoint, HostKind, ensure_range},
    registry::{ApiModule, EntityDescriptor, OperationDescriptor, entities},
    types::{
        Region, SchemaResult,
        legal::{LobbyEventType, MapType, PickType, SpectatorType, TournamentRegion},
    },
};

/// Codes generated by one `create_codes` call.
pub const MAX_CODES: u32 = 1000;
/// Players per team in a tournament game.
pub const MAX_TEAM_SIZE: i32 = 5;

/// Tournament-provider-v1: tournament codes and lobby events, global host.
#[derive(Debug, Clone)]
pub struct TournamentProviderApi(Arc<ApiHosts>);

impl TournamentProviderApi {
    pub fn new(hosts: Arc<ApiHosts>) -> Self {
        Self(hosts)
    }

    // The global host ignores the region.
    fn path(&self, rest: &str) -> String {
        format!(
            "{}/tournament/public/v1/{}",
            self.0.base(HostKind::Global, Region::Na),
            rest
        )
    }

    /// Create `count` (1 to 1000, server default 1) codes for a tournament.
    pub fn create_codes(
        &self,
        tournament_id: i64,
        count: Option<u32>,
        parameters: &TournamentCodeParameters,
    ) -> SchemaResult<Endpoint<Vec<String>>> {
        tracing::trace!(
            "[TOURNAMENT-PROVIDER-V1 API] create_codes for tournament {}",
            tournament_id
        );

        if let Some(count) = count {
            ensure_range("count", count.into(), 1, MAX_CODES.into())?;
        }
        parameters.validate()?;

        Endpoint::new("create_codes", Method::POST, self.path("code"))
            .with_query("tournamentId", tournament_id)
            .with_optional_query("count", count)
            .with_body(parameters)
    }

    pub fn get_code(&self, tournament_code: &str) -> Endpoint<TournamentCodeDto> {
        tracing::trace!(
            "[TOURNAMENT-PROVIDER-V1 API] get_code {}",
            tournament_code
        );

        let code = urlencoding::encode(tournament_code);

        Endpoint::get("get_code", self.path(&format!("code/{code}")))
    }

    /// Update the pick type, map, spectator type or allowed participants of a code.
    pub fn update_code(
        &self,
        tournament_code: &str,
        parameters: &TournamentCodeUpdateParameters,
    ) -> SchemaResult<Endpoint<()>> {
        tracing::trace!(
            "[TOURNAMENT-PROVIDER-V1 API] update_code {}",
            tournament_code
        );

        let code = urlencoding::encode(tournament_code);

        Endpoint::new(
            "update_code",
            Method::PUT,
            self.path(&format!("code/{code}")),
        )
        .with_body(parameters)
    }

    pub fn get_lobby_events(&self, tournament_code: &str) -> Endpoint<LobbyEventDtoWrapper> {
        tracing::trace!(
            "[TOURNAMENT-PROVIDER-V1 API] get_lobby_events {}",
            tournament_code
        );

        let code = urlencoding::encode(tournament_code);

        Endpoint::get(
            "get_lobby_events",
            self.path(&format!("lobby/events/by-code/{code}")),
        )
    }

    /// Register a provider callback URL. Answers with the provider id.
    pub fn register_provider(
        &self,
        parameters: &ProviderRegistrationParameters,
    ) -> SchemaResult<Endpoint<i32>> {
        tracing::trace!(
            "[TOURNAMENT-PROVIDER-V1 API] register_provider {} in {}",
            parameters.url,
            parameters.region
        );

        Endpoint::new("register_provider", Method::POST, self.path("provider"))
            .with_body(parameters)
    }

    /// Register a tournament under a provider. Answers with the tournament id.
    pub fn register_tournament(
        &self,
        parameters: &TournamentRegistrationParameters,
    ) -> SchemaResult<Endpoint<i32>> {
        tracing::trace!(
            "[TOURNAMENT-PROVIDER-V1 API] register_tournament for provider {}",
            parameters.provider_id
        );

        Endpoint::new("register_tournament", Method::POST, self.path("tournament"))
            .with_body(parameters)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentCodeParameters {
    /// Summoners allowed to join the lobby. Anyone may join when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_summoner_ids: Option<SummonerIdParams>,
    pub map_type: MapType,
    /// Passed back to the provider callback with the game result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    pub pick_type: PickType,
    pub spectator_type: SpectatorType,
    /// 1 to 5.
    pub team_size: i32,
}

impl TournamentCodeParameters {
    pub fn validate(&self) -> SchemaResult<()> {
        ensure_range(
            "teamSize",
            self.team_size.into(),
            1,
            MAX_TEAM_SIZE.into(),
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SummonerIdParams {
    pub participants: Vec<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentCodeDto {
    pub code: String,
    pub id: i32,
    pub lobby_name: String,
    pub map: MapType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<i64>,
    pub password: String,
    pub pick_type: PickType,
    pub provider_id: i32,
    pub region: TournamentRegion,
    pub spectators: SpectatorType,
    pub team_size: i32,
    pub tournament_id: i32,
}

/// Only the fields set are changed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TournamentCodeUpdateParameters {
    /// Comma separated summoner ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_participants: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_type: Option<MapType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pick_type: Option<PickType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spectator_type: Option<SpectatorType>,
}

impl TournamentCodeUpdateParameters {
    pub fn with_allowed_participants(mut self, summoner_ids: &[i64]) -> Self {
        self.allowed_participants = Some(
            summoner_ids
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(","),
        );
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LobbyEventDtoWrapper {
    pub event_list: Vec<LobbyEventDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LobbyEventDto {
    pub event_type: LobbyEventType,
    /// Absent on lobby-wide events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summoner_id: Option<String>,
    /// Carried as a string by the API.
    pub timestamp: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRegistrationParameters {
    pub region: TournamentRegion,
    /// Callback receiving game results. Must use port 80 (http) or 443 (https).
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRegistrationParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub provider_id: i32,
}

pub(crate) const OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor::get(
        ApiModule::TournamentProvider,
        "create_codes",
        HostKind::Global,
        "/tournament/public/v1/code",
        "List[string]",
    )
    .with_method("POST")
    .with_query(&["tournamentId", "count"])
    .with_body("TournamentCodeParameters")
    .with_constraints("count between 1 and 1000, teamSize between 1 and 5"),
    OperationDescriptor::get(
        ApiModule::TournamentProvider,
        "get_code",
        HostKind::Global,
        "/tournament/public/v1/code/{tournamentCode}",
        "TournamentCodeDto",
    ),
    OperationDescriptor::get(
        ApiModule::TournamentProvider,
        "update_code",
        HostKind::Global,
        "/tournament/public/v1/code/{tournamentCode}",
        "no content",
    )
    .with_method("PUT")
    .with_body("TournamentCodeUpdateParameters"),
    OperationDescriptor::get(
        ApiModule::TournamentProvider,
        "get_lobby_events",
        HostKind::Global,
        "/tournament/public/v1/lobby/events/by-code/{tournamentCode}",
        "LobbyEventDtoWrapper",
    ),
    OperationDescriptor::get(
        ApiModule::TournamentProvider,
        "register_provider",
        HostKind::Global,
        "/tournament/public/v1/provider",
        "int",
    )
    .with_method("POST")
    .with_body("ProviderRegistrationParameters"),
    OperationDescriptor::get(
        ApiModule::TournamentProvider,
        "register_tournament",
        HostKind::Global,
        "/tournament/public/v1/tournament",
        "int",
    )
    .with_method("POST")
    .with_body("TournamentRegistrationParameters"),
];

pub(crate) fn entities() -> Vec<EntityDescriptor> {
    entities![
        ApiModule::TournamentProvider =>
        TournamentCodeParameters,
        SummonerIdParams,
        TournamentCodeDto,
        TournamentCodeUpdateParameters,
        LobbyEventDtoWrapper,
        LobbyEventDto,
        ProviderRegistrationParameters,
        TournamentRegistrationParameters,
    ]
}
