//! Pieces shared by every API module: routing values, legal-value sets and the
//! error taxonomy of the contract layer.

mod macros;

pub mod errors;
pub mod legal;
pub mod region;

pub use errors::{SchemaError, SchemaResult};
pub use region::{Platform, Region};
