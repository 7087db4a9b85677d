//! Local settings store and credential resolution for the social-graph API.
//!
//! The store holds an optional user override of the graph access token in a
//! small JSON file. [`LayeredCredentials`] resolves the token that a request
//! should use: stored override, then the environment default, then the
//! compiled-in fallback. Blank values at any layer are skipped.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Token used when neither an override nor an environment value exists.
/// Intentionally empty: no credential ships inside the binary.
pub const FALLBACK_GRAPH_TOKEN: Option<&str> = None;

#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    graph_access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

/// File-backed store for user settings.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored graph token override, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the file exists but cannot be read or parsed.
    pub fn graph_token(&self) -> Result<Option<String>, SettingsError> {
        Ok(self
            .read()?
            .graph_access_token
            .filter(|t| !t.trim().is_empty()))
    }

    /// Persists `value` trimmed, or clears the override when it is blank.
    ///
    /// Returns `true` when a token was stored and `false` when the override
    /// was cleared.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] on I/O or parse failures.
    pub fn set_graph_token(&self, value: &str) -> Result<bool, SettingsError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.clear_graph_token()?;
            return Ok(false);
        }
        let mut file = self.read()?;
        file.graph_access_token = Some(trimmed.to_string());
        file.updated_at = Some(Utc::now());
        self.write(&file)?;
        tracing::info!(path = %self.path.display(), "stored graph token override");
        Ok(true)
    }

    /// Removes the stored override. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] on I/O or parse failures.
    pub fn clear_graph_token(&self) -> Result<(), SettingsError> {
        let mut file = self.read()?;
        if file.graph_access_token.take().is_none() {
            return Ok(());
        }
        file.updated_at = Some(Utc::now());
        self.write(&file)?;
        tracing::info!(path = %self.path.display(), "cleared graph token override");
        Ok(())
    }

    fn read(&self) -> Result<SettingsFile, SettingsError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SettingsFile::default())
            }
            Err(e) => {
                return Err(SettingsError::Io {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };
        serde_json::from_str(&raw).map_err(|e| SettingsError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    fn write(&self, file: &SettingsFile) -> Result<(), SettingsError> {
        let io_err = |source| SettingsError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        let body = serde_json::to_string_pretty(file).map_err(|e| SettingsError::Parse {
            path: self.path.clone(),
            source: e,
        })?;
        std::fs::write(&self.path, body).map_err(io_err)
    }
}

/// Where a resolved credential came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Override,
    Environment,
    Fallback,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Override => write!(f, "settings override"),
            CredentialSource::Environment => write!(f, "environment"),
            CredentialSource::Fallback => write!(f, "built-in fallback"),
        }
    }
}

/// Supplies the social-graph credential for one request.
pub trait CredentialProvider: Send + Sync {
    fn resolve(&self) -> Option<String>;
}

/// A fixed credential, used when no settings layer applies.
#[derive(Debug, Clone, Default)]
pub struct StaticCredential(pub Option<String>);

impl CredentialProvider for StaticCredential {
    fn resolve(&self) -> Option<String> {
        self.0.clone().filter(|t| !t.trim().is_empty())
    }
}

/// Override > environment default > fallback.
#[derive(Debug, Clone)]
pub struct LayeredCredentials {
    store: SettingsStore,
    env_default: Option<String>,
    fallback: Option<String>,
}

impl LayeredCredentials {
    #[must_use]
    pub fn new(store: SettingsStore, env_default: Option<String>) -> Self {
        Self {
            store,
            env_default,
            fallback: FALLBACK_GRAPH_TOKEN.map(str::to_string),
        }
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    #[must_use]
    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    /// Resolves the credential and reports which layer supplied it.
    ///
    /// An unreadable settings file is logged and treated as "no override".
    #[must_use]
    pub fn resolve_with_source(&self) -> Option<(String, CredentialSource)> {
        let stored = self.store.graph_token().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring unreadable settings file");
            None
        });

        let non_blank = |v: &Option<String>| v.clone().filter(|t| !t.trim().is_empty());

        stored
            .map(|t| (t, CredentialSource::Override))
            .or_else(|| non_blank(&self.env_default).map(|t| (t, CredentialSource::Environment)))
            .or_else(|| non_blank(&self.fallback).map(|t| (t, CredentialSource::Fallback)))
    }
}

impl CredentialProvider for LayeredCredentials {
    fn resolve(&self) -> Option<String> {
        self.resolve_with_source().map(|(token, _)| token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, SettingsStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::new(dir.path().join("nested").join("settings.json"));
        (dir, store)
    }

    #[test]
    fn missing_file_means_no_override() {
        let (_dir, store) = temp_store();
        assert_eq!(store.graph_token().unwrap(), None);
    }

    #[test]
    fn set_trims_and_persists() {
        let (_dir, store) = temp_store();
        assert!(store.set_graph_token("  tok-123 \n").unwrap());
        assert_eq!(store.graph_token().unwrap().as_deref(), Some("tok-123"));

        let reopened = SettingsStore::new(store.path());
        assert_eq!(reopened.graph_token().unwrap().as_deref(), Some("tok-123"));
    }

    #[test]
    fn setting_blank_value_clears_override() {
        let (_dir, store) = temp_store();
        store.set_graph_token("tok").unwrap();
        assert!(!store.set_graph_token("   ").unwrap());
        assert_eq!(store.graph_token().unwrap(), None);
    }

    #[test]
    fn clear_on_missing_file_is_ok() {
        let (_dir, store) = temp_store();
        store.clear_graph_token().unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let (_dir, store) = temp_store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{not json").unwrap();
        assert!(matches!(
            store.graph_token(),
            Err(SettingsError::Parse { .. })
        ));
    }

    #[test]
    fn override_wins_over_environment() {
        let (_dir, store) = temp_store();
        store.set_graph_token("user-token").unwrap();
        let creds = LayeredCredentials::new(store, Some("env-token".to_string()));
        assert_eq!(
            creds.resolve_with_source(),
            Some(("user-token".to_string(), CredentialSource::Override))
        );
    }

    #[test]
    fn cleared_override_falls_back_to_environment() {
        let (_dir, store) = temp_store();
        store.set_graph_token("user-token").unwrap();
        let creds = LayeredCredentials::new(store, Some("env-token".to_string()));
        creds.store().clear_graph_token().unwrap();
        assert_eq!(creds.resolve().as_deref(), Some("env-token"));
    }

    #[test]
    fn fallback_used_when_nothing_else_is_set() {
        let (_dir, store) = temp_store();
        let creds = LayeredCredentials::new(store, Some("  ".to_string())).with_fallback("demo");
        assert_eq!(
            creds.resolve_with_source(),
            Some(("demo".to_string(), CredentialSource::Fallback))
        );
    }

    #[test]
    fn nothing_configured_resolves_to_none() {
        let (_dir, store) = temp_store();
        let creds = LayeredCredentials::new(store, None);
        assert_eq!(creds.resolve(), None);
    }

    #[test]
    fn unreadable_settings_fall_through_to_environment() {
        let (_dir, store) = temp_store();
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "garbage").unwrap();
        let creds = LayeredCredentials::new(store, Some("env-token".to_string()));
        assert_eq!(creds.resolve().as_deref(), Some("env-token"));
    }

    #[test]
    fn static_credential_skips_blank() {
        assert_eq!(StaticCredential(Some(" ".to_string())).resolve(), None);
        assert_eq!(
            StaticCredential(Some("t".to_string())).resolve().as_deref(),
            Some("t")
        );
    }
}
