//! Filing extension request workflow.
//!
//! A request is assessed against the statutory deadline rules. Compliant
//! requests go straight to a decision; non-compliant ones are flagged and
//! must be escalated before they can be granted.

use super::{StageEvent, StageMachine};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionStage {
    #[default]
    Requested,
    Compliant,
    Flagged,
    Escalated,
    Granted,
    Denied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionEvent {
    AssessCompliant,
    AssessNonCompliant,
    Escalate,
    Grant,
    Deny,
}

impl ExtensionEvent {
    /// The assessment event for a statutory compliance check result.
    pub fn assess(statutory_compliant: bool) -> Self {
        if statutory_compliant {
            Self::AssessCompliant
        } else {
            Self::AssessNonCompliant
        }
    }
}

impl StageEvent for ExtensionEvent {
    const ALL: &'static [Self] = &[
        Self::AssessCompliant,
        Self::AssessNonCompliant,
        Self::Escalate,
        Self::Grant,
        Self::Deny,
    ];

    fn name(&self) -> &'static str {
        match self {
            Self::AssessCompliant => "assess as compliant",
            Self::AssessNonCompliant => "assess as non-compliant",
            Self::Escalate => "escalate",
            Self::Grant => "grant",
            Self::Deny => "deny",
        }
    }
}

impl StageMachine for ExtensionStage {
    type Event = ExtensionEvent;

    fn next(&self, event: ExtensionEvent) -> Option<Self> {
        use ExtensionEvent::*;
        use ExtensionStage::*;

        match (self, event) {
            (Requested, AssessCompliant) => Some(Compliant),
            (Requested, AssessNonCompliant) => Some(Flagged),
            (Flagged, Escalate) => Some(Escalated),
            (Compliant | Escalated, Grant) => Some(Granted),
            (Compliant | Flagged | Escalated, Deny) => Some(Denied),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Requested => "requested",
            Self::Compliant => "compliant",
            Self::Flagged => "flagged",
            Self::Escalated => "escalated",
            Self::Granted => "granted",
            Self::Denied => "denied",
        }
    }
}
