//! Response shapes for the three graph calls.
//!
//! Every call may instead carry an `{"error": {"message": ...}}` envelope,
//! usually alongside a 4xx status, so each shape keeps an optional `error`.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
}

/// `GET me/accounts`
#[derive(Debug, Deserialize)]
pub(crate) struct AccountsResponse {
    #[serde(default)]
    pub data: Vec<NodeRef>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NodeRef {
    pub id: String,
}

/// `GET {page_id}?fields=instagram_business_account`
#[derive(Debug, Deserialize)]
pub(crate) struct PageResponse {
    pub instagram_business_account: Option<NodeRef>,
}

/// `GET {ig_id}?fields=business_discovery.username(..){..}`
#[derive(Debug, Deserialize)]
pub(crate) struct DiscoveryResponse {
    pub business_discovery: Option<BusinessDiscovery>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BusinessDiscovery {
    pub name: Option<String>,
    pub biography: Option<String>,
    pub followers_count: Option<u64>,
    pub media_count: Option<u64>,
    pub profile_picture_url: Option<String>,
    pub media: Option<MediaPage>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MediaPage {
    #[serde(default)]
    pub data: Vec<MediaItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MediaItem {
    pub caption: Option<String>,
}
