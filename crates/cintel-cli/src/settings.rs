//! `cintel settings` command handlers.

use clap::Subcommand;
use cintel_core::{AppConfig, LayeredCredentials, SettingsStore};

/// Sub-commands available under `settings`.
#[derive(Debug, Subcommand)]
pub enum SettingsCommands {
    /// Show the effective configuration and where the graph token comes from
    Show,
    /// Store a graph access token override (a blank value clears it)
    SetToken {
        /// Access token for the social-graph API
        token: String,
    },
    /// Remove the stored override and fall back to the environment default
    ClearToken,
}

/// # Errors
///
/// Returns an error if the settings file cannot be read or written.
pub(crate) fn run_settings(config: &AppConfig, command: &SettingsCommands) -> anyhow::Result<()> {
    let store = SettingsStore::new(config.settings_path.clone());
    match command {
        SettingsCommands::Show => {
            let creds = LayeredCredentials::new(store, config.meta_access_token.clone());
            println!("{}", describe_settings(config, &creds));
        }
        SettingsCommands::SetToken { token } => {
            if store.set_graph_token(token)? {
                println!("graph token override saved to {}", store.path().display());
            } else {
                println!("blank token; graph token override cleared");
            }
        }
        SettingsCommands::ClearToken => {
            store.clear_graph_token()?;
            println!("graph token override cleared; the environment default applies");
        }
    }
    Ok(())
}

pub(crate) fn describe_settings(config: &AppConfig, creds: &LayeredCredentials) -> String {
    let token = match creds.resolve_with_source() {
        Some((token, source)) => format!("{} (from {source})", mask_token(&token)),
        None => "not configured".to_string(),
    };
    let key = if config.gemini_api_key.is_some() {
        "configured"
    } else {
        "missing"
    };
    format!(
        "settings file:  {}\ngraph token:    {token}\ngraph API:      {}/{}\ncompletion key: {key}\nmodel:          {}\nenrichment cap: {}",
        creds.store().path().display(),
        config.graph_base_url,
        config.graph_api_version,
        config.gemini_model,
        config.max_enrich,
    )
}

/// Keeps only the last four characters visible.
pub(crate) fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "********".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("********{tail}")
}
