use std::{fs, path::Path};

use riot_schema_api::{
    api::ApiHosts,
    registry::{ApiModule, EntityDescriptor, OperationDescriptor, RoundTrip, registry},
};
use riot_schema_shared::{Region, SchemaError, SchemaResult};

use crate::error::AppError;

pub fn modules() {
    let registry = registry();

    for module in registry.modules() {
        println!(
            "{:<32} {:>3} entities {:>3} operations",
            module.to_string(),
            registry.entities_of(*module).count(),
            registry.operations_of(*module).count()
        );
    }
}

pub fn entities(module: Option<ApiModule>) {
    let registry = registry();

    let selected: Vec<&EntityDescriptor> = match module {
        Some(module) => registry.entities_of(module).collect(),
        None => registry.entities().iter().collect(),
    };

    for entity in selected {
        println!("{}", entity.qualified_name());
    }
}

pub fn operations(module: Option<ApiModule>, hosts: &ApiHosts, region: Region) {
    let registry = registry();

    let selected: Vec<&OperationDescriptor> = match module {
        Some(module) => registry.operations_of(module).collect(),
        None => registry.operations().iter().collect(),
    };

    for operation in selected {
        let mut line = format!(
            "{:<6} {}",
            operation.method,
            resolve_url(operation, hosts, region)
        );
        if !operation.query.is_empty() {
            line.push_str(&format!("?{}", operation.query.join("&")));
        }
        if let Some(body) = operation.body {
            line.push_str(&format!(" <- {body}"));
        }
        line.push_str(&format!(" -> {}", operation.response));

        println!("{}/{}: {}", operation.module.name(), operation.name, line);
        if let Some(constraints) = operation.constraints {
            println!("    {constraints}");
        }
    }
}

/// Host and template of an operation with the region placeholders filled in.
pub fn resolve_url(operation: &OperationDescriptor, hosts: &ApiHosts, region: Region) -> String {
    let path = operation
        .template
        .replace("{region}", region.as_str())
        .replace("{platformId}", region.to_platform().as_str());

    format!("{}{}", hosts.base(operation.host, region), path)
}

/// Round-trip the JSON file at `path` through an entity and print the drift.
pub fn check(entity: &str, path: &Path, module: Option<ApiModule>) -> Result<(), AppError> {
    let entity = lookup(entity, module)?;

    let raw = fs::read(path).map_err(|source| AppError::Io {
        path: path.display().to_string(),
        source,
    })?;

    tracing::info!(
        "checking {} against {}",
        path.display(),
        entity.qualified_name()
    );

    let report = entity.round_trip(&raw)?;
    print_report(entity, &report);

    if report.is_lossless() {
        Ok(())
    } else {
        Err(AppError::Drift {
            entity: entity.qualified_name(),
            dropped: report.dropped.len(),
            altered: report.altered.len(),
        })
    }
}

/// `--module` and a qualified name may be combined when they agree.
fn lookup(name: &str, module: Option<ApiModule>) -> SchemaResult<&'static EntityDescriptor> {
    let registry = registry();

    let Some(module) = module else {
        return registry.entity(name);
    };

    match name.split_once('/') {
        Some((prefix, bare)) if prefix.parse::<ApiModule>()? == module => {
            registry.entity_in(module, bare)
        }
        Some(_) => Err(SchemaError::UnknownEntity(format!(
            "{name} is not part of {}",
            module.name()
        ))),
        None => registry.entity_in(module, name),
    }
}

fn print_report(entity: &EntityDescriptor, report: &RoundTrip) {
    if report.is_lossless() {
        println!("{}: lossless", entity.qualified_name());
        return;
    }

    println!("{}:", entity.qualified_name());
    for path in &report.dropped {
        println!("  dropped {path}");
    }
    for path in &report.altered {
        println!("  altered {path}");
    }
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use super::*;

    fn scratch_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(format!("riot-schema-{}-{name}", process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn urls_are_resolved_for_the_region() {
        let registry = registry();
        let hosts = ApiHosts::default();

        let challenger = registry
            .operations_of(ApiModule::League)
            .find(|o| o.name == "get_challenger")
            .unwrap();
        assert_eq!(
            resolve_url(challenger, &hosts, Region::Kr),
            "https://kr.api.pvp.net/api/lol/kr/v2.5/league/challenger"
        );

        let spectator = registry
            .operations_of(ApiModule::CurrentGame)
            .next()
            .unwrap();
        assert_eq!(
            resolve_url(spectator, &hosts, Region::Euw),
            "https://euw.api.pvp.net/observer-mode/rest/consumer/getSpectatorGameInfo/EUW1/{summonerId}"
        );
    }

    #[test]
    fn check_accepts_lossless_payloads() {
        let path = scratch_file(
            "series.json",
            r#"{"losses": 1, "progress": "WLN", "target": 2, "wins": 1}"#,
        );

        check("MiniSeriesDto", &path, None).unwrap();
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn check_reports_drift() {
        let path = scratch_file(
            "champion.json",
            r#"{"active": true, "botEnabled": false, "botMmEnabled": false,
                "freeToPlay": false, "id": 266, "rankedPlayEnabled": true, "extra": 1}"#,
        );

        let result = check("ChampionDto", &path, Some(ApiModule::Champion));
        assert!(matches!(
            result,
            Err(AppError::Drift {
                dropped: 1,
                altered: 0,
                ..
            })
        ));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn module_flag_accepts_matching_qualified_names() {
        let entity = lookup("league/LeagueDto", Some(ApiModule::League)).unwrap();
        assert_eq!(entity.qualified_name(), "league/LeagueDto");

        let entity = lookup("LeagueDto", Some(ApiModule::League)).unwrap();
        assert_eq!(entity.module, ApiModule::League);

        assert!(matches!(
            lookup("team/TeamDto", Some(ApiModule::League)),
            Err(SchemaError::UnknownEntity(_))
        ));
        assert!(matches!(
            lookup("nope/LeagueDto", Some(ApiModule::League)),
            Err(SchemaError::UnknownModule(_))
        ));
    }

    #[test]
    fn check_accepts_qualified_names_with_module_flag() {
        let path = scratch_file(
            "qualified.json",
            r#"{"losses": 0, "progress": "WNN", "target": 2, "wins": 1}"#,
        );

        check("league/MiniSeriesDto", &path, Some(ApiModule::League)).unwrap();
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn check_reports_missing_files() {
        let result = check(
            "MiniSeriesDto",
            Path::new("/nonexistent/riot-schema.json"),
            None,
        );
        assert!(matches!(result, Err(AppError::Io { .. })));
    }
}
