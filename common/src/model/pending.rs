use std::sync::Arc;

use uuid::Uuid;

use super::Identified;

/// A file picked by the user that has not been converted yet.
///
/// Created by the upload intake and only ever moved around or removed
/// afterwards. The `content` buffer is shared, so snapshotting the pending
/// list at the start of a conversion run does not copy file bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFile {
    /// Random identifier assigned at intake. Names are not unique, so this is
    /// what list rendering and reorder validation key on.
    pub id: Uuid,
    /// Display name as reported by the browser, extension included.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    pub content: Arc<[u8]>,
    /// Last-modified time in milliseconds since the Unix epoch.
    pub last_modified: u64,
}

impl PendingFile {
    pub fn new(name: impl Into<String>, content: Vec<u8>, last_modified: u64) -> Self {
        let content: Arc<[u8]> = Arc::from(content);
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            size: content.len() as u64,
            content,
            last_modified,
        }
    }

    /// Lower-cased extension of the display name, if it has one.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    pub fn is_pdf(&self) -> bool {
        self.extension().as_deref() == Some("pdf")
    }

    /// Size label shown under the file name, e.g. `Size: 1.50 KB`.
    pub fn size_label(&self) -> String {
        format!("Size: {:.2} KB", self.size as f64 / 1024.0)
    }
}

impl Identified for PendingFile {
    type Id = Uuid;

    fn identity(&self) -> Uuid {
        self.id
    }
}
