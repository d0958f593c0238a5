//! ALJ ruling workflow.
//!
//! ```text
//! Writing --submit for proofing--> Proofing --finalize--> Complete
//!    ^  <--request revisions------    |
//!    |                                |
//!    +--resolve escalation-- Escalated <--escalate-- (Writing | Proofing)
//! ```

use super::{StageEvent, StageMachine};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RulingStage {
    #[default]
    Writing,
    Proofing,
    Escalated,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RulingEvent {
    SubmitForProofing,
    RequestRevisions,
    Finalize,
    Escalate,
    ResolveEscalation,
}

impl StageEvent for RulingEvent {
    const ALL: &'static [Self] = &[
        Self::SubmitForProofing,
        Self::RequestRevisions,
        Self::Finalize,
        Self::Escalate,
        Self::ResolveEscalation,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::SubmitForProofing => "submit for proofing",
            Self::RequestRevisions => "request revisions",
            Self::Finalize => "finalize",
            Self::Escalate => "escalate",
            Self::ResolveEscalation => "resolve escalation",
        }
    }
}

impl StageMachine for RulingStage {
    type Event = RulingEvent;

    fn next(&self, event: RulingEvent) -> Option<Self> {
        use RulingEvent::*;
        use RulingStage::*;

        match (self, event) {
            (Writing, SubmitForProofing) => Some(Proofing),
            (Proofing, RequestRevisions) => Some(Writing),
            (Proofing, Finalize) => Some(Complete),
            (Writing | Proofing, Escalate) => Some(Escalated),
            (Escalated, ResolveEscalation) => Some(Writing),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Writing => "writing",
            Self::Proofing => "proofing",
            Self::Escalated => "escalated",
            Self::Complete => "complete",
        }
    }
}
