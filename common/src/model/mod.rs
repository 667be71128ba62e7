pub mod converted;
pub mod pending;
pub mod status;

pub use converted::ConvertedFile;
pub use pending::PendingFile;
pub use status::{Operation, Severity, StatusMessage, WorkflowStatus};

/// Stable identity of a list entry, used to check that a reorder is a true
/// permutation of the current entries.
pub trait Identified {
    type Id: Eq + std::hash::Hash + Clone;

    fn identity(&self) -> Self::Id;
}
