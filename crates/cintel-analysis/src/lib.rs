//! Prompt composition and the request/response contract with the generative
//! completion service.

pub mod client;
pub mod error;
pub mod instruction;
pub mod prompt;
pub mod schema;
pub(crate) mod wire;

pub use client::AnalysisClient;
pub use error::AnalysisError;
pub use instruction::system_instruction;
pub use prompt::compose_prompt;
pub use schema::{response_schema, SCHEMA_VERSION};
