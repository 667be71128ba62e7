use common::model::PendingFile;
use common::WorkflowEvent;

pub enum Msg {
    FilesAdded(Vec<PendingFile>),
    FilesUnreadable(Vec<String>),
    RemovePending(usize),
    RemoveConverted(usize),
    MovePending { from: usize, to: usize },
    MoveConverted { from: usize, to: usize },
    ConvertAll,
    MergeAll,
    Download(String),
    DismissMessage,
    Workflow(WorkflowEvent),
}
