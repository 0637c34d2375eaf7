pub use riot_schema_shared::legal;
pub use riot_schema_shared::{Platform, Region, SchemaError, SchemaResult};
