pub mod client;
pub mod lol;

pub use client::{ApiHosts, Endpoint, HostKind};
pub use lol::LolApi;
