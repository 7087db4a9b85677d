//! Client for the social-graph API used to enrich roster handles with live
//! profile signals.
//!
//! Lookups never fail the caller: every error is flattened into the
//! `error` field of the returned [`cintel_core::ExtractedSignal`].

pub mod client;
pub mod enrich;
pub mod error;
pub(crate) mod types;

pub use client::GraphClient;
pub use enrich::enrich_handles;
pub use error::GraphError;
