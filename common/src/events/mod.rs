//! State changes emitted by the orchestrator while an operation runs.
//!
//! The orchestrator never touches the workspace directly. It reports what
//! happened through an [`EventSink`]; the UI forwards each event into its
//! component update loop and folds it into the [`crate::workspace::Workspace`]
//! with `Workspace::apply`. Events are delivered in emission order.

use crate::model::{ConvertedFile, Operation, StatusMessage};

#[derive(Clone, Debug, PartialEq)]
pub enum WorkflowEvent {
    /// An operation began: busy, progress 0, previous message cleared.
    Started { operation: Operation, label: String },
    /// Completion fraction in `[0, 1]`, optionally with a new step label.
    Progress {
        fraction: f32,
        label: Option<String>,
    },
    /// Replaces the message on screen.
    Message(StatusMessage),
    /// Files converted during the run, appended to the converted list in order.
    Converted(Vec<ConvertedFile>),
    /// Storage token of the merged document.
    Merged(String),
    /// The operation is over: back to idle.
    Finished,
}

pub trait EventSink {
    fn emit(&self, event: WorkflowEvent);
}

impl<F> EventSink for F
where
    F: Fn(WorkflowEvent),
{
    fn emit(&self, event: WorkflowEvent) {
        self(event)
    }
}
