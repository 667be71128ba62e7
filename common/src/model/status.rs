//! Status reported to the user while and after an operation runs.

use serde::{Deserialize, Serialize};

/// Presentation class of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

impl Severity {
    /// CSS class used by the message banner.
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
            Severity::Warning => "warning",
        }
    }
}

/// The single message on screen. A new one always replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub severity: Severity,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            text: text.into(),
        }
    }
}

/// The two long-running operations. Only one may run at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Convert,
    Merge,
}

impl Operation {
    /// Label shown while the operation starts up.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Convert => "Converting files to PDF",
            Operation::Merge => "Merging PDF files",
        }
    }
}

/// What the orchestrator is doing right now.
///
/// Idle means `busy == false`, `operation == None`, `progress == 0` and an
/// empty label; the last message survives into idle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowStatus {
    pub busy: bool,
    pub operation: Option<Operation>,
    /// Completion fraction in `[0, 1]`.
    pub progress: f32,
    pub label: String,
    pub message: Option<StatusMessage>,
}

impl WorkflowStatus {
    pub fn is_idle(&self) -> bool {
        !self.busy && self.operation.is_none() && self.progress == 0.0 && self.label.is_empty()
    }

    /// Progress as a whole percentage for the progress bar.
    pub fn progress_percent(&self) -> u8 {
        (self.progress.clamp(0.0, 1.0) * 100.0).round() as u8
    }

    pub(crate) fn reset_to_idle(&mut self) {
        self.busy = false;
        self.operation = None;
        self.progress = 0.0;
        self.label.clear();
    }
}
