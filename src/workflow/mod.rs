//! Stage machines for the ruling and extension workflows.
//!
//! Each workflow is one enum naming its stages and one enum naming the
//! events that move between them. [`Workflow`] holds the current stage,
//! refuses events the stage does not allow, and records every accepted
//! transition. Screens ask [`Workflow::allowed_events`] which actions to
//! enable instead of tracking their own flags.

pub mod extension;
pub mod ruling;

pub use extension::{ExtensionEvent, ExtensionStage};
pub use ruling::{RulingEvent, RulingStage};

use crate::error::{WorkflowError, WorkflowResult};
use chrono::{DateTime, Utc};
use std::fmt::Debug;
use tracing::debug;

/// An event that can be offered to a stage machine.
pub trait StageEvent: Copy + Eq + Debug + 'static {
    /// Every event, in the order actions are presented.
    const ALL: &'static [Self];

    fn name(&self) -> &'static str;
}

/// A set of named stages with guarded transitions.
pub trait StageMachine: Copy + Eq + Debug {
    type Event: StageEvent;

    /// The stage `event` leads to, or `None` if it is not allowed here.
    fn next(&self, event: Self::Event) -> Option<Self>;

    fn name(&self) -> &'static str;

    fn is_terminal(&self) -> bool {
        Self::Event::ALL.iter().all(|event| self.next(*event).is_none())
    }
}

/// One accepted transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S: StageMachine> {
    pub from: S,
    pub to: S,
    pub event: S::Event,
    pub note: Option<String>,
    pub at: DateTime<Utc>,
}

/// A running instance of a stage machine.
#[derive(Debug, Clone)]
pub struct Workflow<S: StageMachine> {
    stage: S,
    history: Vec<Transition<S>>,
}

impl<S: StageMachine> Workflow<S> {
    pub fn new(initial: S) -> Self {
        Self {
            stage: initial,
            history: Vec::new(),
        }
    }

    pub fn stage(&self) -> S {
        self.stage
    }

    pub fn history(&self) -> &[Transition<S>] {
        &self.history
    }

    pub fn is_terminal(&self) -> bool {
        self.stage.is_terminal()
    }

    pub fn can(&self, event: S::Event) -> bool {
        self.stage.next(event).is_some()
    }

    /// Events the current stage accepts.
    pub fn allowed_events(&self) -> Vec<S::Event> {
        S::Event::ALL
            .iter()
            .copied()
            .filter(|event| self.can(*event))
            .collect()
    }

    /// Apply an event.
    ///
    /// # Errors
    ///
    /// `WorkflowError::IllegalTransition` if the current stage does not
    /// allow `event`; the workflow is left unchanged.
    pub fn apply(&mut self, event: S::Event) -> WorkflowResult<S> {
        self.transition(event, None)
    }

    /// Apply an event and keep a note with the transition (for example
    /// the reason for an escalation).
    pub fn apply_with_note(
        &mut self,
        event: S::Event,
        note: impl Into<String>,
    ) -> WorkflowResult<S> {
        self.transition(event, Some(note.into()))
    }

    fn transition(&mut self, event: S::Event, note: Option<String>) -> WorkflowResult<S> {
        let from = self.stage;
        let to = from
            .next(event)
            .ok_or_else(|| WorkflowError::IllegalTransition {
                stage: from.name().to_string(),
                event: event.name().to_string(),
            })?;

        debug!("Workflow {} -> {} on {}", from.name(), to.name(), event.name());

        self.history.push(Transition {
            from,
            to,
            event,
            note,
            at: Utc::now(),
        });
        self.stage = to;
        Ok(to)
    }
}

impl<S: StageMachine + Default> Default for Workflow<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
