//! JSON response bodies of the remote conversion service.

use serde::Deserialize;

use crate::error::{ServiceError, ServiceOperation};

/// Success body shared by upload, convert and merge.
///
/// The server always sends `filename`; `success` and `message` are optional.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FileResponse {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

impl FileResponse {
    /// Returns the storage token, rejecting bodies that report failure or
    /// carry no token.
    pub fn into_token(self, operation: ServiceOperation) -> Result<String, ServiceError> {
        if self.success == Some(false) {
            return Err(ServiceError::InvalidResponse {
                operation,
                reason: self
                    .message
                    .unwrap_or_else(|| "the server reported failure".to_string()),
            });
        }
        if self.filename.trim().is_empty() {
            return Err(ServiceError::InvalidResponse {
                operation,
                reason: "no filename in response".to_string(),
            });
        }
        Ok(self.filename)
    }
}

/// Optional body of a non-success response.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Builds the error for a failed call: the server text when there is one,
    /// otherwise the generic `"<operation> failed: <status text>"`.
    pub fn into_error(
        body: Option<ErrorBody>,
        operation: ServiceOperation,
        status: u16,
        status_text: &str,
    ) -> ServiceError {
        match body.and_then(|b| b.error).filter(|e| !e.is_empty()) {
            Some(message) => ServiceError::Rejected { operation, status, message },
            None => ServiceError::Status {
                operation,
                status,
                status_text: status_text.to_string(),
            },
        }
    }
}
