use thiserror::Error;

/// Everything the contract layer can reject before or after a request is issued elsewhere.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("{operation} requires at least one id")]
    EmptyIdList { operation: &'static str },

    #[error("{operation} accepts at most {limit} ids, got {given}")]
    TooManyIds {
        operation: &'static str,
        limit: usize,
        given: usize,
    },

    #[error("{parameter} must be within {min}..={max}, got {given}")]
    OutOfRange {
        parameter: &'static str,
        min: i64,
        max: i64,
        given: i64,
    },

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Decoding raw payload error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Unknown API module: {0}")]
    UnknownModule(String),

    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    #[error("Entity {name} is declared by several modules: {}", modules.join(", "))]
    AmbiguousEntity {
        name: String,
        modules: Vec<&'static str>,
    },

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Invalid platform: {0}")]
    InvalidPlatform(String),
}

/// Outcome of any contract-level operation.
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_their_context() {
        let err = SchemaError::TooManyIds {
            operation: "get_summoners_by_id",
            limit: 40,
            given: 41,
        };
        assert_eq!(
            err.to_string(),
            "get_summoners_by_id accepts at most 40 ids, got 41"
        );

        let err = SchemaError::AmbiguousEntity {
            name: "ChampionDto".to_string(),
            modules: vec!["champion", "lol-static-data"],
        };
        assert_eq!(
            err.to_string(),
            "Entity ChampionDto is declared by several modules: champion, lol-static-data"
        );
    }

    #[test]
    fn serde_errors_convert() {
        let raw = serde_json::from_str::<u8>("\"nope\"").unwrap_err();
        let err: SchemaError = raw.into();
        assert!(matches!(err, SchemaError::Serde(_)));
    }
}
