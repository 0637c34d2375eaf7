//! Typed contract for the League of Legends REST API.
//!
//! Every API module gets its DTOs and one builder per remote operation. Builders
//! never talk to the network: they return an [`api::client::Endpoint`] describing the
//! request (verb, URL, body) and knowing how to decode the answer. The
//! [`registry`] catalogues all of it for tooling.

pub mod api;
pub mod registry;
pub mod types;
