//! The application state the UI renders: both file lists, the workflow
//! status and the merged result.
//!
//! The workspace is owned by the root component. User edits call its methods
//! directly; orchestration runs only reach it through [`WorkflowEvent`]s
//! folded in with [`Workspace::apply`]. Starting a run goes through
//! `begin_convert` / `begin_merge`, which mark the workspace busy before the
//! run is spawned so a second click cannot start a concurrent run.

use log::{debug, warn};

use crate::collection::OrderedCollection;
use crate::error::{CollectionError, WorkflowError};
use crate::events::WorkflowEvent;
use crate::model::{ConvertedFile, Operation, PendingFile, StatusMessage, WorkflowStatus};
use crate::workflow::{MSG_NEED_TWO_FILES, MSG_NO_FILES};

pub const MSG_BUSY: &str = "Please wait for the current operation to finish";

#[derive(Debug, Clone, Default)]
pub struct Workspace {
    pending: OrderedCollection<PendingFile>,
    converted: OrderedCollection<ConvertedFile>,
    status: WorkflowStatus,
    merged: Option<String>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &OrderedCollection<PendingFile> {
        &self.pending
    }

    pub fn converted(&self) -> &OrderedCollection<ConvertedFile> {
        &self.converted
    }

    pub fn status(&self) -> &WorkflowStatus {
        &self.status
    }

    /// Storage token of the last merge, if one completed.
    pub fn merged(&self) -> Option<&str> {
        self.merged.as_deref()
    }

    pub fn can_convert(&self) -> bool {
        !self.status.busy && !self.pending.is_empty()
    }

    pub fn can_merge(&self) -> bool {
        !self.status.busy && self.converted.len() >= 2
    }

    pub fn is_running(&self, operation: Operation) -> bool {
        self.status.busy && self.status.operation == Some(operation)
    }

    pub fn add_files(&mut self, files: Vec<PendingFile>) {
        debug!("adding {} file(s) to the pending list", files.len());
        self.pending.append(files);
    }

    /// Warns about picked files that could not be read and were left out.
    pub fn report_unreadable(&mut self, names: &[String]) {
        if names.is_empty() {
            return;
        }
        warn!("{} picked file(s) could not be read", names.len());
        self.report(StatusMessage::warning(format!(
            "Could not read {}. Skipped.",
            names.join(", ")
        )));
    }

    pub fn remove_pending(&mut self, index: usize) -> Result<PendingFile, CollectionError> {
        self.pending.remove_at(index)
    }

    pub fn remove_converted(&mut self, index: usize) -> Result<ConvertedFile, CollectionError> {
        self.converted.remove_at(index)
    }

    pub fn move_pending(&mut self, from: usize, to: usize) -> Result<(), CollectionError> {
        self.pending.move_item(from, to)
    }

    pub fn move_converted(&mut self, from: usize, to: usize) -> Result<(), CollectionError> {
        self.converted.move_item(from, to)
    }

    pub fn reorder_pending(&mut self, order: Vec<PendingFile>) -> Result<(), CollectionError> {
        self.pending.reorder(order)
    }

    pub fn reorder_converted(&mut self, order: Vec<ConvertedFile>) -> Result<(), CollectionError> {
        self.converted.reorder(order)
    }

    /// Gate for a conversion run. On success the workspace is busy and the
    /// returned snapshot is the exact list the run must process; later edits
    /// of the pending list do not affect it.
    pub fn begin_convert(&mut self) -> Result<Vec<PendingFile>, WorkflowError> {
        self.ensure_idle()?;
        if self.pending.is_empty() {
            self.report(StatusMessage::error(MSG_NO_FILES));
            return Err(WorkflowError::NothingToConvert);
        }
        self.mark_busy(Operation::Convert);
        Ok(self.pending.snapshot())
    }

    /// Gate for a merge run. Returns the storage tokens in current list order.
    pub fn begin_merge(&mut self) -> Result<Vec<String>, WorkflowError> {
        self.ensure_idle()?;
        if self.converted.len() < 2 {
            self.report(StatusMessage::error(MSG_NEED_TWO_FILES));
            return Err(WorkflowError::TooFewToMerge {
                found: self.converted.len(),
            });
        }
        self.mark_busy(Operation::Merge);
        Ok(self.converted.iter().map(|f| f.name.clone()).collect())
    }

    /// Replaces the message on screen.
    pub fn report(&mut self, message: StatusMessage) {
        self.status.message = Some(message);
    }

    pub fn dismiss_message(&mut self) {
        self.status.message = None;
    }

    pub fn apply(&mut self, event: WorkflowEvent) {
        match event {
            WorkflowEvent::Started { operation, label } => {
                self.mark_busy(operation);
                self.status.message = None;
                self.status.label = label;
            }
            WorkflowEvent::Progress { fraction, label } => {
                self.status.progress = fraction.clamp(0.0, 1.0);
                if let Some(label) = label {
                    self.status.label = label;
                }
            }
            WorkflowEvent::Message(message) => self.report(message),
            WorkflowEvent::Converted(files) => self.converted.append(files),
            WorkflowEvent::Merged(token) => self.merged = Some(token),
            WorkflowEvent::Finished => self.status.reset_to_idle(),
        }
    }

    fn ensure_idle(&mut self) -> Result<(), WorkflowError> {
        if self.status.busy {
            warn!("ignoring request while {:?} is running", self.status.operation);
            self.report(StatusMessage::warning(MSG_BUSY));
            return Err(WorkflowError::Busy);
        }
        Ok(())
    }

    fn mark_busy(&mut self, operation: Operation) {
        self.status.busy = true;
        self.status.operation = Some(operation);
        self.status.progress = 0.0;
        self.status.label = operation.label().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;

    fn workspace_with(pending: &[&str], converted: &[&str]) -> Workspace {
        let mut ws = Workspace::new();
        ws.add_files(
            pending
                .iter()
                .map(|n| PendingFile::new(*n, b"x".to_vec(), 0))
                .collect(),
        );
        ws.apply(WorkflowEvent::Converted(
            converted.iter().map(|n| ConvertedFile::new(*n, *n)).collect(),
        ));
        ws
    }

    #[test]
    fn convert_gate_rejects_empty_list_without_going_busy() {
        let mut ws = Workspace::new();
        assert_eq!(ws.begin_convert(), Err(WorkflowError::NothingToConvert));
        assert!(ws.status().is_idle());
        assert_eq!(
            ws.status().message,
            Some(StatusMessage::error("Please add files to convert"))
        );
    }

    #[test]
    fn convert_snapshot_is_unaffected_by_later_edits() {
        let mut ws = workspace_with(&["a.docx", "b.xlsx"], &[]);
        let snapshot = ws.begin_convert().unwrap();
        ws.remove_pending(0).unwrap();

        let names: Vec<_> = snapshot.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a.docx", "b.xlsx"]);
        assert!(ws.is_running(Operation::Convert));
    }

    #[test]
    fn second_run_is_refused_while_busy() {
        let mut ws = workspace_with(&["a.docx"], &["x.pdf", "y.pdf"]);
        ws.begin_convert().unwrap();

        assert_eq!(ws.begin_merge(), Err(WorkflowError::Busy));
        assert_eq!(ws.begin_convert(), Err(WorkflowError::Busy));
        let message = ws.status().message.clone().unwrap();
        assert_eq!(message.severity, Severity::Warning);
        assert!(ws.is_running(Operation::Convert));
    }

    #[test]
    fn merge_gate_needs_two_files() {
        let mut ws = workspace_with(&[], &["x.pdf"]);
        assert_eq!(ws.begin_merge(), Err(WorkflowError::TooFewToMerge { found: 1 }));
        assert!(!ws.status().busy);
        assert_eq!(ws.merged(), None);
        assert_eq!(
            ws.status().message.as_ref().map(|m| m.text.as_str()),
            Some("Please convert at least two files to merge them")
        );
    }

    #[test]
    fn merge_gate_returns_tokens_in_list_order() {
        let mut ws = workspace_with(&[], &["x.pdf", "y.pdf", "z.pdf"]);
        ws.move_converted(2, 0).unwrap();
        assert_eq!(ws.begin_merge().unwrap(), ["z.pdf", "x.pdf", "y.pdf"]);
    }

    #[test]
    fn wholesale_reorder_validates_membership() {
        let mut ws = workspace_with(&["a.docx", "b.xlsx"], &[]);
        let mut order = ws.pending().snapshot();
        order.reverse();
        ws.reorder_pending(order).unwrap();
        let names: Vec<_> = ws.pending().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["b.xlsx", "a.docx"]);

        let foreign = vec![ConvertedFile::new("z.pdf", "z.doc")];
        assert!(ws.reorder_converted(foreign).is_err());
        assert!(ws.converted().is_empty());
    }

    #[test]
    fn unreadable_files_surface_as_a_warning() {
        let mut ws = workspace_with(&["a.docx"], &[]);
        ws.report_unreadable(&[]);
        assert_eq!(ws.status().message, None);

        ws.report_unreadable(&["b.xlsx".to_string(), "c.pptx".to_string()]);
        assert_eq!(
            ws.status().message,
            Some(StatusMessage::warning("Could not read b.xlsx, c.pptx. Skipped."))
        );
        assert_eq!(ws.pending().len(), 1);
        assert!(ws.status().is_idle());
    }

    #[test]
    fn events_drive_the_status_machine() {
        let mut ws = Workspace::new();
        ws.report(StatusMessage::info("old"));
        ws.apply(WorkflowEvent::Started {
            operation: Operation::Merge,
            label: "Merging PDF files".into(),
        });
        assert!(ws.status().busy);
        assert_eq!(ws.status().message, None);

        ws.apply(WorkflowEvent::Progress {
            fraction: 0.7,
            label: None,
        });
        assert_eq!(ws.status().progress_percent(), 70);
        assert_eq!(ws.status().label, "Merging PDF files");

        ws.apply(WorkflowEvent::Merged("merged123.pdf".into()));
        ws.apply(WorkflowEvent::Message(StatusMessage::success("PDFs merged successfully!")));
        ws.apply(WorkflowEvent::Finished);

        assert!(ws.status().is_idle());
        assert_eq!(ws.merged(), Some("merged123.pdf"));
        assert_eq!(
            ws.status().message,
            Some(StatusMessage::success("PDFs merged successfully!"))
        );
    }
}
