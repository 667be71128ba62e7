//! `gloo-net` client for the remote conversion service.
//!
//! Routes, relative to the configured base URL:
//! - `POST /upload`   multipart field `file`
//! - `POST /convert`  `{ "filename": <upload token> }`
//! - `POST /merge`    `{ "files": [<pdf token>, ...] }`
//! - `GET  /download/{filename}`
//!
//! Success bodies are `{ filename, success?, message? }`. Failures may carry
//! `{ error }`; without one the error text falls back to
//! `"<operation> failed: <status text>"`.

use gloo_net::http::{Request, Response};
use log::debug;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use common::error::{ServiceError, ServiceOperation};
use common::model::PendingFile;
use common::requests::{ConvertRequest, MergeRequest};
use common::responses::{ErrorBody, FileResponse};
use common::service::ConversionService;

#[derive(Clone, Debug, PartialEq)]
pub struct HttpConversionService {
    base_url: String,
}

impl HttpConversionService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, route: &str) -> String {
        format!("{}/{}", self.base_url, route)
    }
}

impl ConversionService for HttpConversionService {
    async fn upload(&self, file: &PendingFile) -> Result<String, ServiceError> {
        let operation = ServiceOperation::Upload;
        let form = multipart_form(file).map_err(|err| transport(operation, err))?;
        debug!("uploading {} ({} bytes)", file.name, file.size);

        let request = Request::post(&self.url("upload"))
            .body(form)
            .map_err(|err| transport(operation, err))?;
        let response = request
            .send()
            .await
            .map_err(|err| transport(operation, err))?;
        read_token(response, operation).await
    }

    async fn convert(&self, filename: &str) -> Result<String, ServiceError> {
        let operation = ServiceOperation::Convert;
        let body = ConvertRequest {
            filename: filename.to_string(),
        };
        let response = Request::post(&self.url("convert"))
            .json(&body)
            .map_err(|err| transport(operation, err))?
            .send()
            .await
            .map_err(|err| transport(operation, err))?;
        read_token(response, operation).await
    }

    async fn merge(&self, files: &[String]) -> Result<String, ServiceError> {
        let operation = ServiceOperation::Merge;
        let body = MergeRequest {
            files: files.to_vec(),
        };
        let response = Request::post(&self.url("merge"))
            .json(&body)
            .map_err(|err| transport(operation, err))?
            .send()
            .await
            .map_err(|err| transport(operation, err))?;
        read_token(response, operation).await
    }

    fn download_url(&self, filename: &str) -> String {
        self.url(&format!("download/{filename}"))
    }
}

/// Builds the multipart body with the file bytes under field `file`.
fn multipart_form(file: &PendingFile) -> Result<FormData, String> {
    let form = FormData::new().map_err(js_error)?;
    let upload = gloo_file::File::new(&file.name, &file.content[..]);
    form.append_with_blob_and_filename("file", upload.as_ref(), &file.name)
        .map_err(js_error)?;
    Ok(form)
}

async fn read_token(
    response: Response,
    operation: ServiceOperation,
) -> Result<String, ServiceError> {
    if !response.ok() {
        let body = response.json::<ErrorBody>().await.ok();
        return Err(ErrorBody::into_error(
            body,
            operation,
            response.status(),
            &response.status_text(),
        ));
    }

    let body = response
        .json::<FileResponse>()
        .await
        .map_err(|err| ServiceError::InvalidResponse {
            operation,
            reason: err.to_string(),
        })?;
    body.into_token(operation)
}

fn transport(operation: ServiceOperation, err: impl ToString) -> ServiceError {
    ServiceError::Transport {
        operation,
        reason: err.to_string(),
    }
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
