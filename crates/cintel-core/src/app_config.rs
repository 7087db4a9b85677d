use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub meta_access_token: Option<String>,
    pub graph_base_url: String,
    pub graph_api_version: String,
    pub max_enrich: usize,
    pub request_timeout_secs: Option<u64>,
    pub settings_path: PathBuf,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field(
                "meta_access_token",
                &self.meta_access_token.as_ref().map(|_| "[redacted]"),
            )
            .field("graph_base_url", &self.graph_base_url)
            .field("graph_api_version", &self.graph_api_version)
            .field("max_enrich", &self.max_enrich)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("settings_path", &self.settings_path)
            .field("log_level", &self.log_level)
            .finish()
    }
}
