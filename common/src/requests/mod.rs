//! JSON request bodies sent to the remote conversion service.

use serde::{Deserialize, Serialize};

/// Body of `POST /convert`: the storage token returned by the upload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConvertRequest {
    pub filename: String,
}

/// Body of `POST /merge`. The order of `files` is the page order of the
/// merged document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    pub files: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_request_keeps_order_on_the_wire() {
        let body = MergeRequest {
            files: vec!["b.pdf".into(), "a.pdf".into()],
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"files":["b.pdf","a.pdf"]}"#
        );
    }

    #[test]
    fn convert_request_shape() {
        let body = ConvertRequest {
            filename: "report.docx".into(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"filename":"report.docx"}"#
        );
    }
}
