//! Conversion and merge orchestration.
//!
//! A conversion run walks its snapshot strictly in order, one request in
//! flight at a time: upload, then convert, then the next file. A failing file
//! produces a transient error message, a short pause so the message can be
//! read, and the run moves on. The run never aborts on a single file.
//!
//! A merge run sends the converted tokens in list order; that order is the
//! page order of the merged document. Its progress checkpoints are cosmetic,
//! the remote call gives no sub-progress.
//!
//! Every run that emitted `Started` ends with `Finished`.

use log::{debug, info, warn};

use crate::config::WorkflowConfig;
use crate::error::{ServiceError, WorkflowError};
use crate::events::{EventSink, WorkflowEvent};
use crate::model::{ConvertedFile, Operation, PendingFile, StatusMessage};
use crate::service::{ConversionService, Platform};

pub const MSG_NO_FILES: &str = "Please add files to convert";
pub const MSG_NEED_TWO_FILES: &str = "Please convert at least two files to merge them";
pub const MSG_NONE_CONVERTED: &str = "Failed to convert any files";
pub const MSG_MERGED: &str = "PDFs merged successfully!";

/// Checkpoints shown while a merge runs: started, request built, response
/// received, response decoded, done.
const MERGE_STARTED: f32 = 0.1;
const MERGE_REQUEST_BUILT: f32 = 0.3;
const MERGE_RESPONDED: f32 = 0.7;
const MERGE_DECODED: f32 = 0.9;
const MERGE_DONE: f32 = 1.0;

/// Outcome of a conversion run that converted at least one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub converted: usize,
    pub total: usize,
}

impl ConvertSummary {
    pub fn failed(&self) -> usize {
        self.total - self.converted
    }

    pub fn message(&self) -> String {
        format!(
            "Converted {} out of {} files successfully",
            self.converted, self.total
        )
    }
}

/// Where in the per-file pipeline a file failed.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FileFailure {
    Upload(ServiceError),
    Convert(ServiceError),
}

impl FileFailure {
    fn reason(&self) -> String {
        match self {
            FileFailure::Upload(err) => format!("Error uploading file: {err}"),
            FileFailure::Convert(err) => err.to_string(),
        }
    }
}

pub struct Orchestrator<S, P> {
    service: S,
    platform: P,
    config: WorkflowConfig,
}

impl<S, P> Orchestrator<S, P>
where
    S: ConversionService,
    P: Platform,
{
    pub fn new(service: S, platform: P, config: WorkflowConfig) -> Self {
        Self { service, platform, config }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Uploads and converts every file of `files`, in order.
    ///
    /// Converted files are reported in one `Converted` event after the loop,
    /// followed by the summary message. Returns the summary, or
    /// `NoneConverted` when every file failed.
    pub async fn convert_all(
        &self,
        files: &[PendingFile],
        sink: &impl EventSink,
    ) -> Result<ConvertSummary, WorkflowError> {
        if files.is_empty() {
            sink.emit(WorkflowEvent::Message(StatusMessage::error(MSG_NO_FILES)));
            return Err(WorkflowError::NothingToConvert);
        }

        sink.emit(WorkflowEvent::Started {
            operation: Operation::Convert,
            label: Operation::Convert.label().to_string(),
        });

        let total = files.len();
        let mut converted = Vec::with_capacity(total);
        info!("converting {total} file(s)");

        for (index, file) in files.iter().enumerate() {
            sink.emit(WorkflowEvent::Progress {
                fraction: index as f32 / total as f32,
                label: Some(format!("Converting {} ({}/{})", file.name, index + 1, total)),
            });

            match self.convert_one(file).await {
                Ok(pdf) => {
                    debug!("{} converted to {}", file.name, pdf.name);
                    converted.push(pdf);
                }
                Err(failure) => {
                    warn!("{} failed: {:?}", file.name, failure);
                    sink.emit(WorkflowEvent::Message(StatusMessage::error(format!(
                        "Error with {}: {}. Continuing with other files...",
                        file.name,
                        failure.reason()
                    ))));
                    self.platform.pause(self.config.failure_pause()).await;
                }
            }
        }

        let result = if converted.is_empty() {
            sink.emit(WorkflowEvent::Message(StatusMessage::error(MSG_NONE_CONVERTED)));
            Err(WorkflowError::NoneConverted { total })
        } else {
            let summary = ConvertSummary {
                converted: converted.len(),
                total,
            };
            sink.emit(WorkflowEvent::Converted(converted));
            sink.emit(WorkflowEvent::Message(StatusMessage::success(summary.message())));
            Ok(summary)
        };

        sink.emit(WorkflowEvent::Finished);
        info!("conversion run finished: {result:?}");
        result
    }

    async fn convert_one(&self, file: &PendingFile) -> Result<ConvertedFile, FileFailure> {
        let uploaded = self
            .service
            .upload(file)
            .await
            .map_err(FileFailure::Upload)?;
        let pdf = self
            .service
            .convert(&uploaded)
            .await
            .map_err(FileFailure::Convert)?;
        Ok(ConvertedFile::new(pdf, file.name.clone()))
    }

    /// Merges the PDFs named by `files`, keeping their order. Returns the
    /// storage token of the merged document.
    pub async fn merge_all(
        &self,
        files: &[String],
        sink: &impl EventSink,
    ) -> Result<String, WorkflowError> {
        if files.len() < 2 {
            sink.emit(WorkflowEvent::Message(StatusMessage::error(MSG_NEED_TWO_FILES)));
            return Err(WorkflowError::TooFewToMerge { found: files.len() });
        }

        sink.emit(WorkflowEvent::Started {
            operation: Operation::Merge,
            label: Operation::Merge.label().to_string(),
        });
        sink.emit(progress(MERGE_STARTED));

        let request: Vec<String> = files.to_vec();
        sink.emit(progress(MERGE_REQUEST_BUILT));
        info!("merging {} PDF(s)", request.len());

        let outcome = self.service.merge(&request).await;
        sink.emit(progress(MERGE_RESPONDED));

        let result = match outcome {
            Ok(token) => {
                sink.emit(progress(MERGE_DECODED));
                sink.emit(WorkflowEvent::Merged(token.clone()));
                sink.emit(WorkflowEvent::Message(StatusMessage::success(MSG_MERGED)));
                info!("merged into {token}");
                Ok(token)
            }
            Err(err) => {
                warn!("merge failed: {err:?}");
                sink.emit(WorkflowEvent::Message(StatusMessage::error(err.to_string())));
                Err(WorkflowError::from(err))
            }
        };

        sink.emit(progress(MERGE_DONE));
        self.platform.pause(self.config.merge_settle()).await;
        sink.emit(WorkflowEvent::Finished);
        result
    }

    /// Opens the download of a converted or merged file in a new tab.
    pub fn download(&self, filename: &str, sink: &impl EventSink) -> Result<(), WorkflowError> {
        let url = self.service.download_url(filename);
        debug!("opening {url}");
        self.platform.open_in_new_tab(&url).map_err(|err| {
            sink.emit(WorkflowEvent::Message(StatusMessage::error(format!(
                "Error downloading file: {err}"
            ))));
            WorkflowError::from(err)
        })
    }
}

fn progress(fraction: f32) -> WorkflowEvent {
    WorkflowEvent::Progress { fraction, label: None }
}
