//! HTTP client for the generative completion service.
//!
//! One call per analysis: the rubric goes in `systemInstruction`, the
//! composed prompt and any attachments go in a single user turn, and the
//! output is constrained to the JSON schema from [`crate::schema`].

use std::time::Duration;

use cintel_core::{AnalysisResponse, AppConfig, Attachment};
use reqwest::{Client, Url};

use crate::error::AnalysisError;
use crate::instruction::system_instruction;
use crate::schema::{response_schema, SCHEMA_VERSION};
use crate::wire::{
    ApiErrorEnvelope, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    InlineData, Part,
};

const API_KEY_HEADER: &str = "x-goog-api-key";
const PROMPT_PREFIX: &str = "Analyze the following creator data and provide comprehensive KPI and state-level demographic categorizations:\n";

/// Client for the completion service.
///
/// The key is optional at construction so that a missing key surfaces as
/// [`AnalysisError::MissingApiKey`] from [`AnalysisClient::analyze`] rather
/// than at startup.
pub struct AnalysisClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    endpoint: Url,
}

impl std::fmt::Debug for AnalysisClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisClient")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl AnalysisClient {
    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`AnalysisError::InvalidBaseUrl`] if the endpoint URL
    /// does not parse.
    pub fn with_base_url(
        base_url: &str,
        api_key: Option<String>,
        model: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self, AnalysisError> {
        let mut builder = Client::builder().user_agent("cintel/0.1 (creator-intelligence)");
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let raw = format!(
            "{}/v1beta/models/{model}:generateContent",
            base_url.trim_end_matches('/')
        );
        let endpoint = Url::parse(&raw).map_err(|e| AnalysisError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: model.to_string(),
            endpoint,
        })
    }

    /// Builds a client from the environment configuration.
    ///
    /// # Errors
    ///
    /// See [`AnalysisClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, AnalysisError> {
        Self::with_base_url(
            &config.gemini_base_url,
            config.gemini_api_key.clone(),
            &config.gemini_model,
            config.request_timeout_secs,
        )
    }

    /// Sends `prompt` plus `attachments` and parses the structured report.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::MissingApiKey`] if no key is configured; no request
    ///   is sent.
    /// - [`AnalysisError::Http`] on network failure.
    /// - [`AnalysisError::Api`] on a non-2xx status.
    /// - [`AnalysisError::EmptyResponse`] if no candidate text came back.
    /// - [`AnalysisError::Malformed`] if the text is not a valid report.
    pub async fn analyze(
        &self,
        prompt: &str,
        attachments: &[Attachment],
    ) -> Result<AnalysisResponse, AnalysisError> {
        let api_key = self.api_key.as_deref().ok_or(AnalysisError::MissingApiKey)?;

        let body = build_request(prompt, attachments);
        tracing::info!(
            model = %self.model,
            schema_version = SCHEMA_VERSION,
            attachments = attachments.len(),
            prompt_chars = prompt.len(),
            "requesting roster analysis"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorEnvelope>(&raw)
                .map(|e| e.error.message)
                .ok()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            tracing::warn!(status = status.as_u16(), error = %message, "completion request failed");
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: GenerateContentResponse =
            serde_json::from_str(&raw).map_err(|source| AnalysisError::Malformed { source })?;
        let Some(text) = envelope.text() else {
            return Err(AnalysisError::EmptyResponse(envelope.empty_reason()));
        };

        let report: AnalysisResponse =
            serde_json::from_str(&text).map_err(|source| AnalysisError::Malformed { source })?;
        tracing::info!(creators = report.creators.len(), "analysis complete");
        Ok(report)
    }
}

/// Request body: rubric, one user turn with the prompt then one inline part
/// per attachment, and the JSON response constraint.
pub(crate) fn build_request<'a>(
    prompt: &str,
    attachments: &'a [Attachment],
) -> GenerateContentRequest<'a> {
    let mut parts = Vec::with_capacity(attachments.len() + 1);
    parts.push(Part::Text {
        text: format!("{PROMPT_PREFIX}{prompt}"),
    });
    parts.extend(attachments.iter().map(|a| Part::Inline {
        inline_data: InlineData {
            mime_type: &a.mime_type,
            data: &a.data,
        },
    }));

    GenerateContentRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part::Text {
                text: system_instruction(),
            }],
        },
        contents: vec![Content {
            role: Some("user"),
            parts,
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: response_schema(),
        },
    }
}
