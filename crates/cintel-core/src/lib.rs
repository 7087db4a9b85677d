//! Shared domain types, configuration, and local settings for the creator
//! intelligence workspace.

pub mod app_config;
pub mod config;
pub mod error;
pub mod input;
pub mod settings;
pub mod signal;
pub mod types;
pub mod validate;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, SettingsError};
pub use input::{Attachment, AttachmentKind, RosterInput};
pub use settings::{
    CredentialProvider, CredentialSource, LayeredCredentials, SettingsStore, StaticCredential,
};
pub use signal::ExtractedSignal;
pub use types::{
    AgeGroup, AnalysisResponse, AnalysisResult, AudienceIntent, BrandSafety, CampaignFit,
    ContentIntelligence, Demographics, GenderSkew, KpiAnalysis, KpiMetric, KpiTier, MetroSplit,
    ReachCategory, ReachEstimation, RegionSplit, Regions, StateShare,
};
pub use validate::{check_response, reconcile_handles, HandleReconciliation, SchemaViolation};

#[cfg(test)]
pub(crate) mod fixtures;
