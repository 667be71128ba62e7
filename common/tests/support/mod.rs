#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::time::Duration;

use common::error::{PlatformError, ServiceError, ServiceOperation};
use common::model::PendingFile;
use common::service::{ConversionService, Platform};
use common::{EventSink, WorkflowEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Upload(String),
    Convert(String),
    Merge(Vec<String>),
}

/// In-memory conversion service. Uploads return `u_<name>`, conversions turn
/// `u_<stem>.<ext>` into `<stem>.pdf`.
#[derive(Default)]
pub struct FakeService {
    pub calls: RefCell<Vec<Call>>,
    pub failing_uploads: HashSet<String>,
    pub failing_conversions: HashSet<String>,
    pub merge_result: Option<Result<String, ServiceError>>,
}

impl FakeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_upload(mut self, name: &str) -> Self {
        self.failing_uploads.insert(name.to_string());
        self
    }

    pub fn fail_convert(mut self, name: &str) -> Self {
        self.failing_conversions.insert(name.to_string());
        self
    }

    pub fn merging_to(mut self, result: Result<String, ServiceError>) -> Self {
        self.merge_result = Some(result);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl ConversionService for FakeService {
    async fn upload(&self, file: &PendingFile) -> Result<String, ServiceError> {
        self.calls.borrow_mut().push(Call::Upload(file.name.clone()));
        if self.failing_uploads.contains(&file.name) {
            return Err(ServiceError::Status {
                operation: ServiceOperation::Upload,
                status: 413,
                status_text: "Payload Too Large".to_string(),
            });
        }
        Ok(format!("u_{}", file.name))
    }

    async fn convert(&self, filename: &str) -> Result<String, ServiceError> {
        self.calls.borrow_mut().push(Call::Convert(filename.to_string()));
        let original = filename.trim_start_matches("u_");
        if self.failing_conversions.contains(original) {
            return Err(ServiceError::Rejected {
                operation: ServiceOperation::Convert,
                status: 500,
                message: "Failed to convert document: libreoffice exited".to_string(),
            });
        }
        let stem = original.rsplit_once('.').map_or(original, |(stem, _)| stem);
        Ok(format!("{stem}.pdf"))
    }

    async fn merge(&self, files: &[String]) -> Result<String, ServiceError> {
        self.calls.borrow_mut().push(Call::Merge(files.to_vec()));
        self.merge_result
            .clone()
            .unwrap_or_else(|| Ok(format!("merged_{}", files[0])))
    }

    fn download_url(&self, filename: &str) -> String {
        format!("/api/download/{filename}")
    }
}

#[derive(Default)]
pub struct FakePlatform {
    pub pauses: RefCell<Vec<Duration>>,
    pub opened: RefCell<Vec<String>>,
    pub popup_blocked: bool,
}

impl Platform for FakePlatform {
    async fn pause(&self, duration: Duration) {
        self.pauses.borrow_mut().push(duration);
    }

    fn open_in_new_tab(&self, url: &str) -> Result<(), PlatformError> {
        if self.popup_blocked {
            return Err(PlatformError::OpenWindow("popup blocked".to_string()));
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct Recorder {
    pub events: RefCell<Vec<WorkflowEvent>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<WorkflowEvent> {
        self.events.borrow().clone()
    }

    /// Texts of all `Message` events, in order.
    pub fn messages(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                WorkflowEvent::Message(m) => Some(m.text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn fractions(&self) -> Vec<f32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                WorkflowEvent::Progress { fraction, .. } => Some(*fraction),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for Recorder {
    fn emit(&self, event: WorkflowEvent) {
        self.events.borrow_mut().push(event);
    }
}

pub fn pending(names: &[&str]) -> Vec<PendingFile> {
    names
        .iter()
        .map(|n| PendingFile::new(*n, n.as_bytes().to_vec(), 1_700_000_000_000))
        .collect()
}
