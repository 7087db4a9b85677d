//! HTTP client for the social-graph API.
//!
//! A lookup walks three calls: the token's first page, the page's linked
//! business account, then business discovery for the target username. The
//! token travels as the `access_token` query parameter on every call.

use std::time::Duration;

use cintel_core::{AppConfig, ExtractedSignal};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::GraphError;
use crate::types::{AccountsResponse, BusinessDiscovery, DiscoveryResponse, PageResponse};

const MAX_RECENT_CAPTIONS: usize = 5;

const PROFILE_FIELDS: &str =
    "name,username,biography,followers_count,media_count,profile_picture_url,media{caption}";

/// Client for the social-graph API.
///
/// Use [`GraphClient::from_config`] for production or
/// [`GraphClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct GraphClient {
    client: Client,
    base_url: Url,
}

impl GraphClient {
    /// Creates a client rooted at `{base_url}/{api_version}/`.
    ///
    /// No timeout is applied unless `timeout_secs` is set.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`GraphError::InvalidBaseUrl`] if the URL does not parse.
    pub fn with_base_url(
        base_url: &str,
        api_version: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self, GraphError> {
        let mut builder = Client::builder().user_agent("cintel/0.1 (creator-intelligence)");
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        // Trailing slash so relative joins append below the version segment.
        let root = format!(
            "{}/{}/",
            base_url.trim_end_matches('/'),
            api_version.trim_matches('/')
        );
        let base_url = Url::parse(&root).map_err(|e| GraphError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Builds a client from the environment configuration.
    ///
    /// # Errors
    ///
    /// See [`GraphClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, GraphError> {
        Self::with_base_url(
            &config.graph_base_url,
            &config.graph_api_version,
            config.request_timeout_secs,
        )
    }

    /// Looks up live profile signals for `handle`.
    ///
    /// Never fails: any error along the chain is returned as a signal whose
    /// `error` field carries a user-facing message.
    pub async fn fetch_creator_signals(&self, handle: &str, token: &str) -> ExtractedSignal {
        match self.discover(handle, token).await {
            Ok(profile) => {
                tracing::debug!(handle, "fetched graph signals");
                signal_from_profile(handle, profile)
            }
            Err(e) => {
                tracing::warn!(handle, error = %e, "graph lookup failed");
                ExtractedSignal::failed(handle, e.to_string())
            }
        }
    }

    async fn discover(&self, handle: &str, token: &str) -> Result<BusinessDiscovery, GraphError> {
        if token.trim().is_empty() {
            return Err(GraphError::MissingToken);
        }
        let username = handle.replace('@', "");

        let accounts: AccountsResponse = self.get(&self.build_url("me/accounts", &[], token)?).await?;
        if let Some(err) = accounts.error {
            return Err(GraphError::Auth(err.message));
        }
        let page_id = accounts
            .data
            .into_iter()
            .next()
            .map(|page| page.id)
            .ok_or(GraphError::NoPage)?;

        let page: PageResponse = self
            .get(&self.build_url(&page_id, &[("fields", "instagram_business_account")], token)?)
            .await?;
        let ig_id = page
            .instagram_business_account
            .map(|account| account.id)
            .ok_or(GraphError::NoBusinessAccount)?;

        let fields = discovery_fields(&username);
        let discovery: DiscoveryResponse = self
            .get(&self.build_url(&ig_id, &[("fields", &fields)], token)?)
            .await?;
        if let Some(err) = discovery.error {
            return Err(GraphError::Discovery(err.message));
        }
        discovery
            .business_discovery
            .ok_or_else(|| GraphError::NoProfile(handle.to_string()))
    }

    /// Builds `{base}/{version}/{node}?{extra}&access_token=..` with every
    /// value percent-encoded.
    fn build_url(&self, node: &str, extra: &[(&str, &str)], token: &str) -> Result<Url, GraphError> {
        let mut url = self.base_url.join(node).map_err(|e| GraphError::InvalidBaseUrl {
            url: format!("{}{node}", self.base_url),
            reason: e.to_string(),
        })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("access_token", token);
        }
        Ok(url)
    }

    /// Sends a GET and decodes the body regardless of HTTP status; the API
    /// reports failures through the `error` envelope.
    async fn get<T: DeserializeOwned>(&self, url: &Url) -> Result<T, GraphError> {
        let response = self.client.get(url.clone()).send().await?;
        Ok(response.json::<T>().await?)
    }
}

/// The `fields` expression for a business-discovery lookup of `username`.
#[must_use]
pub fn discovery_fields(username: &str) -> String {
    format!("business_discovery.username({username}){{{PROFILE_FIELDS}}}")
}

fn signal_from_profile(handle: &str, profile: BusinessDiscovery) -> ExtractedSignal {
    let recent_captions = profile
        .media
        .unwrap_or_default()
        .data
        .into_iter()
        .filter_map(|item| item.caption)
        .filter(|caption| !caption.trim().is_empty())
        .take(MAX_RECENT_CAPTIONS)
        .collect();

    ExtractedSignal {
        handle: handle.to_string(),
        name: profile.name,
        biography: profile.biography,
        follower_count: profile.followers_count,
        media_count: profile.media_count,
        profile_picture_url: profile.profile_picture_url,
        recent_captions,
        error: None,
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
