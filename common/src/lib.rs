//! Platform-independent core of the document conversion UI: the data model,
//! the wire types of the remote conversion service, the ordered file lists,
//! the workspace state and the conversion/merge orchestrator.

pub mod collection;
pub mod config;
pub mod error;
pub mod events;
pub mod model;
pub mod requests;
pub mod responses;
pub mod service;
pub mod workflow;
pub mod workspace;

pub use collection::OrderedCollection;
pub use events::{EventSink, WorkflowEvent};
pub use workflow::{ConvertSummary, Orchestrator};
pub use workspace::Workspace;
