//! Collaborators the orchestrator depends on.
//!
//! [`ConversionService`] is the remote HTTP API that stores uploads, converts
//! them to PDF, merges PDFs and serves downloads. [`Platform`] is the host the
//! UI runs in: it can wait and it can open a URL in a new browsing context.
//! The browser implementations live in the frontend crate; tests provide
//! in-memory ones.
//!
//! Both traits are used through generics on a single-threaded executor, so
//! the futures carry no `Send` bound.

use std::time::Duration;

use crate::error::{PlatformError, ServiceError};
use crate::model::PendingFile;

#[allow(async_fn_in_trait)]
pub trait ConversionService {
    /// `POST /upload` with the file as multipart field `file`. Returns the
    /// storage token of the uploaded file.
    async fn upload(&self, file: &PendingFile) -> Result<String, ServiceError>;

    /// `POST /convert` for an uploaded token. Returns the token of the PDF.
    async fn convert(&self, filename: &str) -> Result<String, ServiceError>;

    /// `POST /merge` with the ordered PDF tokens. Returns the merged token.
    async fn merge(&self, files: &[String]) -> Result<String, ServiceError>;

    /// URL of `GET /download/{filename}`.
    fn download_url(&self, filename: &str) -> String;
}

#[allow(async_fn_in_trait)]
pub trait Platform {
    /// Suspends the current task without blocking the UI.
    async fn pause(&self, duration: Duration);

    /// Opens `url` in a new tab.
    fn open_in_new_tab(&self, url: &str) -> Result<(), PlatformError>;
}
