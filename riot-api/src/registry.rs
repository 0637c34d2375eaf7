//! Catalogue of every entity and operation the API modules declare.
//!
//! Entities are looked up by name, qualified with their module when the same name
//! is declared by several modules (`champion/ChampionDto` vs
//! `lol-static-data/ChampionDto`). Each entity can round-trip a raw payload to see
//! what the schema drops or alters.

use std::{fmt, str::FromStr, sync::LazyLock};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    api::{client::HostKind, lol},
    types::{SchemaError, SchemaResult},
};

/// Builds the entity list of a module from its type names.
macro_rules! entities {
    ($module:expr => $($ty:ident),+ $(,)?) => {
        vec![$($crate::registry::EntityDescriptor::of::<$ty>($module, stringify!($ty))),+]
    };
}
pub(crate) use entities;

/// API module and the version modelled for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiModule {
    Champion,
    ChampionMastery,
    CurrentGame,
    FeaturedGames,
    Game,
    League,
    StaticData,
    Status,
    Match,
    MatchList,
    Stats,
    Summoner,
    Team,
    TournamentProvider,
}

impl ApiModule {
    pub const ALL: [ApiModule; 14] = [
        Self::Champion,
        Self::ChampionMastery,
        Self::CurrentGame,
        Self::FeaturedGames,
        Self::Game,
        Self::League,
        Self::StaticData,
        Self::Status,
        Self::Match,
        Self::MatchList,
        Self::Stats,
        Self::Summoner,
        Self::Team,
        Self::TournamentProvider,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Champion => "champion",
            Self::ChampionMastery => "championmastery",
            Self::CurrentGame => "current-game",
            Self::FeaturedGames => "featured-games",
            Self::Game => "game",
            Self::League => "league",
            Self::StaticData => "lol-static-data",
            Self::Status => "lol-status",
            Self::Match => "match",
            Self::MatchList => "matchlist",
            Self::Stats => "stats",
            Self::Summoner => "summoner",
            Self::Team => "team",
            Self::TournamentProvider => "tournament-provider",
        }
    }

    pub fn version(&self) -> &'static str {
        match self {
            Self::Champion => "v1.2",
            Self::ChampionMastery => "v1",
            Self::CurrentGame => "v1.0",
            Self::FeaturedGames => "v1.0",
            Self::Game => "v1.3",
            Self::League => "v2.5",
            Self::StaticData => "v1.2",
            Self::Status => "v1.0",
            Self::Match => "v2.2",
            Self::MatchList => "v2.2",
            Self::Stats => "v1.3",
            Self::Summoner => "v1.4",
            Self::Team => "v2.4",
            Self::TournamentProvider => "v1",
        }
    }
}

impl FromStr for ApiModule {
    type Err = SchemaError;

    /// Accepts the bare module name or `name-version`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|module| {
                wanted == module.name() || wanted == format!("{}-{}", module.name(), module.version())
            })
            .ok_or_else(|| SchemaError::UnknownModule(s.to_string()))
    }
}

impl fmt::Display for ApiModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.name(), self.version())
    }
}

/// A named record of an API module, able to re-serialise payloads of its shape.
#[derive(Debug, Clone, Copy)]
pub struct EntityDescriptor {
    pub module: ApiModule,
    pub name: &'static str,
    reserialize: fn(&[u8]) -> SchemaResult<Value>,
}

fn reserialize<T: DeserializeOwned + Serialize>(raw: &[u8]) -> SchemaResult<Value> {
    let parsed: T = serde_json::from_slice(raw)?;
    Ok(serde_json::to_value(parsed)?)
}

impl EntityDescriptor {
    pub(crate) fn of<T: DeserializeOwned + Serialize>(module: ApiModule, name: &'static str) -> Self {
        Self {
            module,
            name,
            reserialize: reserialize::<T>,
        }
    }

    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.module.name(), self.name)
    }

    /// Parse `raw` as this entity and serialise it back.
    pub fn reserialize(&self, raw: &[u8]) -> SchemaResult<Value> {
        (self.reserialize)(raw)
    }

    /// Parse `raw` as this entity and report every JSON path the schema did not keep.
    pub fn round_trip(&self, raw: &[u8]) -> SchemaResult<RoundTrip> {
        let before: Value = serde_json::from_slice(raw)?;
        let after = self.reserialize(raw)?;

        let mut report = RoundTrip {
            value: Value::Null,
            dropped: Vec::new(),
            altered: Vec::new(),
        };
        compare("", &before, Some(&after), &mut report);
        report.value = after;

        tracing::debug!(
            "[REGISTRY] round trip of {}: {} dropped, {} altered",
            self.qualified_name(),
            report.dropped.len(),
            report.altered.len()
        );

        Ok(report)
    }
}

/// Outcome of [`EntityDescriptor::round_trip`]. Paths are JSON pointers.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTrip {
    /// The payload as the schema re-serialises it.
    pub value: Value,
    /// Present in the input, unknown to the schema.
    pub dropped: Vec<String>,
    /// Present on both sides with different values.
    pub altered: Vec<String>,
}

impl RoundTrip {
    pub fn is_lossless(&self) -> bool {
        self.dropped.is_empty() && self.altered.is_empty()
    }
}

fn pointer_token(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

// `null` and absent are the same thing on this API.
fn compare(path: &str, before: &Value, after: Option<&Value>, report: &mut RoundTrip) {
    match (before, after) {
        (Value::Null, None | Some(Value::Null)) => {}
        (_, None) => report.dropped.push(path.to_string()),
        (Value::Object(before), Some(Value::Object(after))) => {
            for (key, value) in before {
                let child = format!("{path}/{}", pointer_token(key));
                compare(&child, value, after.get(key), report);
            }
            for (key, value) in after {
                if !before.contains_key(key) && !value.is_null() {
                    report
                        .altered
                        .push(format!("{path}/{}", pointer_token(key)));
                }
            }
        }
        (Value::Array(before), Some(Value::Array(after))) if before.len() == after.len() => {
            for (index, (b, a)) in before.iter().zip(after).enumerate() {
                compare(&format!("{path}/{index}"), b, Some(a), report);
            }
        }
        // 1 and 1.0 are the same number once typed as a double.
        (Value::Number(b), Some(Value::Number(a))) => {
            if b.as_f64() != a.as_f64() {
                report.altered.push(path.to_string());
            }
        }
        (before, Some(after)) => {
            if before != after {
                report.altered.push(path.to_string());
            }
        }
    }
}

/// A remote operation: verb, URL template, declared result and prose constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub module: ApiModule,
    /// Name of the builder method producing it.
    pub name: &'static str,
    pub method: &'static str,
    pub host: HostKind,
    /// Path template appended to the host.
    pub template: &'static str,
    pub query: &'static [&'static str],
    pub body: Option<&'static str>,
    pub response: &'static str,
    pub constraints: Option<&'static str>,
}

impl OperationDescriptor {
    pub(crate) const fn get(
        module: ApiModule,
        name: &'static str,
        host: HostKind,
        template: &'static str,
        response: &'static str,
    ) -> Self {
        Self {
            module,
            name,
            method: "GET",
            host,
            template,
            query: &[],
            body: None,
            response,
            constraints: None,
        }
    }

    pub(crate) const fn with_method(mut self, method: &'static str) -> Self {
        self.method = method;
        self
    }

    pub(crate) const fn with_query(mut self, query: &'static [&'static str]) -> Self {
        self.query = query;
        self
    }

    pub(crate) const fn with_body(mut self, body: &'static str) -> Self {
        self.body = Some(body);
        self
    }

    pub(crate) const fn with_constraints(mut self, constraints: &'static str) -> Self {
        self.constraints = Some(constraints);
        self
    }
}

/// Every entity and operation of every module.
#[derive(Debug)]
pub struct Registry {
    entities: Vec<EntityDescriptor>,
    operations: Vec<OperationDescriptor>,
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::build);

/// The process-wide registry.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

impl Registry {
    fn build() -> Self {
        let entities = [
            lol::champion_v1_2::entities(),
            lol::championmastery::entities(),
            lol::current_game_v1_0::entities(),
            lol::featured_games_v1_0::entities(),
            lol::game_v1_3::entities(),
            lol::league_v2_5::entities(),
            lol::static_data_v1_2::entities(),
            lol::status_v1_0::entities(),
            lol::match_v2_2::entities(),
            lol::matchlist_v2_2::entities(),
            lol::stats_v1_3::entities(),
            lol::summoner_v1_4::entities(),
            lol::team_v2_4::entities(),
            lol::tournament_provider_v1::entities(),
        ]
        .concat();

        let operations = [
            lol::champion_v1_2::OPERATIONS,
            lol::championmastery::OPERATIONS,
            lol::current_game_v1_0::OPERATIONS,
            lol::featured_games_v1_0::OPERATIONS,
            lol::game_v1_3::OPERATIONS,
            lol::league_v2_5::OPERATIONS,
            lol::static_data_v1_2::OPERATIONS,
            lol::status_v1_0::OPERATIONS,
            lol::match_v2_2::OPERATIONS,
            lol::matchlist_v2_2::OPERATIONS,
            lol::stats_v1_3::OPERATIONS,
            lol::summoner_v1_4::OPERATIONS,
            lol::team_v2_4::OPERATIONS,
            lol::tournament_provider_v1::OPERATIONS,
        ]
        .concat();

        Self {
            entities,
            operations,
        }
    }

    pub fn modules(&self) -> &'static [ApiModule] {
        &ApiModule::ALL
    }

    pub fn entities(&self) -> &[EntityDescriptor] {
        &self.entities
    }

    pub fn entities_of(&self, module: ApiModule) -> impl Iterator<Item = &EntityDescriptor> {
        self.entities.iter().filter(move |e| e.module == module)
    }

    /// Look an entity up by bare name or by `module/Name`.
    pub fn entity(&self, name: &str) -> SchemaResult<&EntityDescriptor> {
        if let Some((module, name)) = name.split_once('/') {
            return self.entity_in(module.parse()?, name);
        }

        let mut found = self.entities.iter().filter(|e| e.name == name);
        match (found.next(), found.next()) {
            (Some(entity), None) => Ok(entity),
            (None, _) => Err(SchemaError::UnknownEntity(name.to_string())),
            (Some(first), Some(second)) => {
                let mut modules = vec![first.module.name(), second.module.name()];
                modules.extend(found.map(|e| e.module.name()));
                Err(SchemaError::AmbiguousEntity {
                    name: name.to_string(),
                    modules,
                })
            }
        }
    }

    pub fn entity_in(&self, module: ApiModule, name: &str) -> SchemaResult<&EntityDescriptor> {
        self.entities_of(module)
            .find(|e| e.name == name)
            .ok_or_else(|| SchemaError::UnknownEntity(format!("{}/{}", module.name(), name)))
    }

    pub fn operations(&self) -> &[OperationDescriptor] {
        &self.operations
    }

    pub fn operations_of(&self, module: ApiModule) -> impl Iterator<Item = &OperationDescriptor> {
        self.operations.iter().filter(move |o| o.module == module)
    }
}
