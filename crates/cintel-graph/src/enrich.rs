//! Bounded batch enrichment of extracted handles.

use cintel_core::{CredentialProvider, ExtractedSignal};
use futures::future::join_all;

use crate::client::GraphClient;
use crate::error::GraphError;

/// Looks up the first `cap` handles concurrently.
///
/// The credential is resolved once for the whole batch. Results follow the
/// input order, one signal per looked-up handle; handles past the cap are
/// not fetched. Without a credential no request is made and every selected
/// handle gets a missing-token error.
pub async fn enrich_handles(
    client: &GraphClient,
    credentials: &dyn CredentialProvider,
    handles: &[String],
    cap: usize,
) -> Vec<ExtractedSignal> {
    let selected = &handles[..handles.len().min(cap)];
    if selected.is_empty() {
        return Vec::new();
    }
    if handles.len() > selected.len() {
        tracing::info!(
            total = handles.len(),
            cap,
            "enrichment capped; remaining handles stay in roster text only"
        );
    }

    let Some(token) = credentials.resolve() else {
        tracing::warn!(handles = selected.len(), "no graph credential configured");
        let message = GraphError::MissingToken.to_string();
        return selected
            .iter()
            .map(|handle| ExtractedSignal::failed(handle, message.clone()))
            .collect();
    };

    let signals = join_all(
        selected
            .iter()
            .map(|handle| client.fetch_creator_signals(handle, &token)),
    )
    .await;

    let failed = signals.iter().filter(|s| !s.is_ok()).count();
    tracing::info!(
        looked_up = signals.len(),
        failed,
        "graph enrichment complete"
    );
    signals
}
