use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.facebook.com";
pub const DEFAULT_GRAPH_API_VERSION: &str = "v21.0";
/// Upper bound on graph lookups per analysis.
pub const DEFAULT_MAX_ENRICH: usize = 15;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Both secrets are optional here: a missing completion key is reported by
/// the analysis client at call time, and a missing graph token degrades
/// enrichment to a per-handle error.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Blank secrets count as absent.
    let secret = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_usize = |var: &str, default: usize| -> Result<usize, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(default),
        }
    };

    let parse_optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        match lookup(var) {
            Ok(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            _ => Ok(None),
        }
    };

    let gemini_api_key = secret("GEMINI_API_KEY");
    let gemini_model = or_default("CINTEL_GEMINI_MODEL", DEFAULT_GEMINI_MODEL);
    let gemini_base_url = or_default("CINTEL_GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL);

    let meta_access_token = secret("META_ACCESS_TOKEN");
    let graph_base_url = or_default("CINTEL_GRAPH_BASE_URL", DEFAULT_GRAPH_BASE_URL);
    let graph_api_version = or_default("CINTEL_GRAPH_API_VERSION", DEFAULT_GRAPH_API_VERSION);

    let max_enrich = parse_usize("CINTEL_MAX_ENRICH", DEFAULT_MAX_ENRICH)?;
    if max_enrich == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "CINTEL_MAX_ENRICH".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let request_timeout_secs = parse_optional_u64("CINTEL_REQUEST_TIMEOUT_SECS")?;
    let settings_path = PathBuf::from(or_default(
        "CINTEL_SETTINGS_PATH",
        ".cintel/settings.json",
    ));
    let log_level = or_default("CINTEL_LOG_LEVEL", "info");

    Ok(AppConfig {
        gemini_api_key,
        gemini_model,
        gemini_base_url,
        meta_access_token,
        graph_base_url,
        graph_api_version,
        max_enrich,
        request_timeout_secs,
        settings_path,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
