use thiserror::Error;

use riot_schema_shared::SchemaError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{entity} does not round-trip: {dropped} dropped, {altered} altered")]
    Drift {
        entity: String,
        dropped: usize,
        altered: usize,
    },
}
