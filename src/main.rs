use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use riot_schema_api::registry::ApiModule;

use config::Config;
use error::AppError;

mod commands;
mod config;
mod error;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "riot-schema")]
#[command(about = "Inspect the League of Legends API contract", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List API modules with their version
    Modules,

    /// List entities
    Entities {
        /// Only this module, e.g. `league` or `league-v2.5`
        #[arg(short, long)]
        module: Option<ApiModule>,
    },

    /// List operations with verb, URL and result
    Operations {
        #[arg(short, long)]
        module: Option<ApiModule>,
    },

    /// Round-trip a JSON payload through an entity and report what it loses
    Check {
        /// Entity name, optionally qualified: `lol-static-data/ChampionDto`
        entity: String,

        /// JSON file holding one payload of the entity
        file: PathBuf,

        #[arg(short, long)]
        module: Option<ApiModule>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    match args.command {
        Command::Modules => commands::modules(),
        Command::Entities { module } => commands::entities(module),
        Command::Operations { module } => {
            let config = Config::from_env()?;
            commands::operations(module, &config.hosts, config.default_region)
        }
        Command::Check {
            entity,
            file,
            module,
        } => commands::check(&entity, &file, module)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    #[test]
    fn only_operations_read_the_environment() {
        // No other test in this crate reads RIOT_DEFAULT_REGION.
        unsafe { env::set_var("RIOT_DEFAULT_REGION", "atlantis") };

        assert!(run(Args { command: Command::Modules }).is_ok());
        assert!(run(Args { command: Command::Entities { module: None } }).is_ok());
        assert!(matches!(
            run(Args { command: Command::Operations { module: None } }),
            Err(AppError::Config(_))
        ));

        unsafe { env::remove_var("RIOT_DEFAULT_REGION") };
    }
}
