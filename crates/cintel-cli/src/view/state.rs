//! Dashboard state machine.
//!
//! Every analysis run holds a [`Ticket`]. Updates carrying a ticket that is
//! no longer current are dropped, so a result arriving after a reset or a
//! newer run never overwrites what the user is looking at.

use std::fmt;

use cintel_core::AnalysisResponse;

/// Generic message shown when a failure carries no text of its own.
pub const GENERIC_FAILURE: &str = "An error occurred during bulk analysis.";

/// Progress stage of a running analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    AnalyzingStructure,
    FetchingSignals { count: usize },
    /// `count` is zero when the roster came only from attachments.
    Generating { count: usize },
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::AnalyzingStructure => write!(f, "Analyzing roster structure..."),
            Stage::FetchingSignals { count } => {
                write!(f, "Fetching live Meta signals for {count} creators...")
            }
            Stage::Generating { count: 0 } => {
                write!(f, "Generating bulk intelligence for uploaded profiles...")
            }
            Stage::Generating { count } => {
                write!(f, "Generating bulk intelligence for {count} profiles...")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading { stage: String },
    Results(AnalysisResponse),
    Failed(String),
}

/// Identifies one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct Dashboard {
    state: ViewState,
    generation: u64,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ViewState::Idle,
            generation: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Starts a run, superseding any run in flight.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = ViewState::Loading {
            stage: Stage::AnalyzingStructure.to_string(),
        };
        Ticket(self.generation)
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation && matches!(self.state, ViewState::Loading { .. })
    }

    /// Returns `false` if the ticket is stale and the update was dropped.
    pub fn set_stage(&mut self, ticket: Ticket, stage: &Stage) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = ViewState::Loading {
            stage: stage.to_string(),
        };
        true
    }

    /// Lands the outcome of a run. Returns `false` if the ticket is stale.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<AnalysisResponse, String>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!("discarding result of a superseded analysis run");
            return false;
        }
        self.state = match outcome {
            Ok(response) => ViewState::Results(response),
            Err(message) if message.trim().is_empty() => ViewState::Failed(GENERIC_FAILURE.to_string()),
            Err(message) => ViewState::Failed(message),
        };
        true
    }

    /// Back to idle; outstanding tickets become stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = ViewState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::fixtures::sample_response;

    #[test]
    fn stage_texts() {
        assert_eq!(
            Stage::AnalyzingStructure.to_string(),
            "Analyzing roster structure..."
        );
        assert_eq!(
            Stage::FetchingSignals { count: 3 }.to_string(),
            "Fetching live Meta signals for 3 creators..."
        );
        assert_eq!(
            Stage::Generating { count: 0 }.to_string(),
            "Generating bulk intelligence for uploaded profiles..."
        );
        assert_eq!(
            Stage::Generating { count: 12 }.to_string(),
            "Generating bulk intelligence for 12 profiles..."
        );
    }

    #[test]
    fn run_moves_through_loading_to_results() {
        let mut dash = Dashboard::new();
        assert_eq!(dash.state(), &ViewState::Idle);

        let ticket = dash.begin();
        assert!(dash.set_stage(ticket, &Stage::Generating { count: 2 }));
        assert!(matches!(
            dash.state(),
            ViewState::Loading { stage } if stage.contains("2 profiles")
        ));

        assert!(dash.complete(ticket, Ok(sample_response(&["@a", "@b"]))));
        assert!(matches!(dash.state(), ViewState::Results(r) if r.creators.len() == 2));
    }

    #[test]
    fn late_result_after_reset_is_discarded() {
        let mut dash = Dashboard::new();
        let ticket = dash.begin();
        dash.reset();

        assert!(!dash.set_stage(ticket, &Stage::FetchingSignals { count: 1 }));
        assert!(!dash.complete(ticket, Ok(sample_response(&["@a"]))));
        assert_eq!(dash.state(), &ViewState::Idle);
    }

    #[test]
    fn newer_run_supersedes_older_one() {
        let mut dash = Dashboard::new();
        let first = dash.begin();
        let second = dash.begin();

        assert!(!dash.complete(first, Err("old failure".to_string())));
        assert!(dash.complete(second, Ok(sample_response(&["@new"]))));
        assert!(matches!(dash.state(), ViewState::Results(_)));
        assert!(!dash.complete(second, Err("double completion".to_string())));
    }

    #[test]
    fn blank_failure_uses_generic_message() {
        let mut dash = Dashboard::new();
        let ticket = dash.begin();
        dash.complete(ticket, Err("  ".to_string()));
        assert_eq!(dash.state(), &ViewState::Failed(GENERIC_FAILURE.to_string()));
    }
}
