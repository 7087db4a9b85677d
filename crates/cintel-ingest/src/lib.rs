//! Roster ingestion: turns pasted text and uploaded files into a single
//! [`cintel_core::RosterInput`], and pulls social handles out of free text.

pub mod error;
pub mod file;
pub mod handles;
pub mod normalize;

pub use error::NormalizeError;
pub use file::InputFile;
pub use handles::extract_handles;
pub use normalize::{FileFailure, FormatHandler, Normalizer, Parsed};
