//! End-to-end analysis of one roster: extract handles, enrich, compose,
//! analyze, validate.

use cintel_analysis::{compose_prompt, AnalysisClient, AnalysisError};
use cintel_core::{
    check_response, reconcile_handles, AnalysisResponse, CredentialProvider, ExtractedSignal,
    HandleReconciliation, RosterInput, SchemaViolation,
};
use cintel_graph::{enrich_handles, GraphClient};
use cintel_ingest::extract_handles;
use thiserror::Error;

use crate::view::Stage;

#[derive(Debug, Error)]
pub(crate) enum PipelineError {
    /// Nothing to analyze; raised before any network call.
    #[error("Please provide a list of creators or a document.")]
    EmptyInput,

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

pub(crate) struct Pipeline<'a> {
    pub analysis: &'a AnalysisClient,
    /// `None` skips live enrichment.
    pub graph: Option<&'a GraphClient>,
    pub credentials: &'a dyn CredentialProvider,
    pub max_enrich: usize,
}

#[derive(Debug)]
pub(crate) struct PipelineOutcome {
    pub response: AnalysisResponse,
    pub handles: Vec<String>,
    pub signals: Vec<ExtractedSignal>,
    pub violations: Vec<SchemaViolation>,
    pub reconciliation: HandleReconciliation,
}

impl Pipeline<'_> {
    /// Runs the pipeline, reporting each stage to `on_stage` as it starts.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::EmptyInput`] for blank input with no
    /// attachments, or [`PipelineError::Analysis`] if the completion call
    /// fails. Enrichment failures are never fatal.
    pub(crate) async fn run(
        &self,
        input: &RosterInput,
        mut on_stage: impl FnMut(&Stage),
    ) -> Result<PipelineOutcome, PipelineError> {
        if input.is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        on_stage(&Stage::AnalyzingStructure);
        let handles = extract_handles(&input.text);
        tracing::info!(
            handles = handles.len(),
            attachments = input.attachments.len(),
            "roster normalized"
        );

        let signals = match self.graph {
            Some(graph) if !handles.is_empty() => {
                on_stage(&Stage::FetchingSignals {
                    count: handles.len(),
                });
                enrich_handles(graph, self.credentials, &handles, self.max_enrich).await
            }
            _ => Vec::new(),
        };

        let prompt = compose_prompt(&input.text, handles.len(), &signals);
        on_stage(&Stage::Generating {
            count: handles.len(),
        });
        let response = self.analysis.analyze(&prompt, &input.attachments).await?;

        let violations = check_response(&response);
        for violation in &violations {
            tracing::warn!(%violation, "analysis value outside rubric");
        }
        let reconciliation = reconcile_handles(&handles, &response);
        if !reconciliation.is_complete() {
            tracing::warn!(
                missing = ?reconciliation.missing,
                unexpected = ?reconciliation.unexpected,
                "report does not cover the requested handles exactly"
            );
        }

        Ok(PipelineOutcome {
            response,
            handles,
            signals,
            violations,
            reconciliation,
        })
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
