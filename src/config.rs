use std::env;

use riot_schema_api::api::ApiHosts;
use riot_schema_shared::Region;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub hosts: ApiHosts,
    /// Region substituted in the URLs printed by `operations`.
    pub default_region: Region,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        const DEFAULT_REGION: Region = Region::Euw;

        let regional =
            env::var("RIOT_API_HOST").unwrap_or_else(|_| ApiHosts::DEFAULT_REGIONAL.into());
        if !regional.contains("{region}") {
            return Err(AppError::Config(format!(
                "RIOT_API_HOST must contain {{region}}, got {regional}"
            )));
        }

        let global =
            env::var("RIOT_GLOBAL_HOST").unwrap_or_else(|_| ApiHosts::DEFAULT_GLOBAL.into());

        let status =
            env::var("RIOT_STATUS_HOST").unwrap_or_else(|_| ApiHosts::DEFAULT_STATUS.into());

        let default_region = match env::var("RIOT_DEFAULT_REGION") {
            Ok(value) => value.parse::<Region>().map_err(|_| {
                AppError::Config(format!("RIOT_DEFAULT_REGION is invalid: {value}"))
            })?,
            Err(_) => DEFAULT_REGION,
        };

        Ok(Self {
            hosts: ApiHosts {
                regional,
                global,
                status,
            },
            default_region,
        })
    }
}
