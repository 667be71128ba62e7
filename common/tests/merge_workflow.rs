mod support;

use std::time::Duration;

use common::config::WorkflowConfig;
use common::error::{PlatformError, ServiceError, ServiceOperation, WorkflowError};
use common::model::{ConvertedFile, Operation, StatusMessage};
use common::{Orchestrator, WorkflowEvent, Workspace};
use support::{Call, FakePlatform, FakeService, Recorder};

fn workspace_with(converted: &[&str]) -> Workspace {
    let mut workspace = Workspace::new();
    workspace.apply(WorkflowEvent::Converted(
        converted
            .iter()
            .map(|n| ConvertedFile::new(*n, n.replace(".pdf", ".docx")))
            .collect(),
    ));
    workspace
}

fn merge(
    service: FakeService,
    workspace: &mut Workspace,
) -> (Recorder, Orchestrator<FakeService, FakePlatform>) {
    let orchestrator =
        Orchestrator::new(service, FakePlatform::default(), WorkflowConfig::default());
    let recorder = Recorder::default();
    if let Ok(files) = workspace.begin_merge() {
        let _ = tokio_test::block_on(orchestrator.merge_all(&files, &recorder));
    }
    for event in recorder.events() {
        workspace.apply(event);
    }
    (recorder, orchestrator)
}

#[test]
fn single_file_is_rejected_before_any_request() {
    let mut workspace = workspace_with(&["x.pdf"]);
    let (_, orchestrator) = merge(FakeService::new(), &mut workspace);

    assert!(orchestrator.service().calls().is_empty());
    assert_eq!(workspace.merged(), None);
    assert_eq!(
        workspace.status().message,
        Some(StatusMessage::error("Please convert at least two files to merge them"))
    );
}

#[test]
fn orchestrator_checks_the_minimum_itself() {
    let orchestrator = Orchestrator::new(
        FakeService::new(),
        FakePlatform::default(),
        WorkflowConfig::default(),
    );
    let recorder = Recorder::default();

    for files in [vec![], vec!["x.pdf".to_string()]] {
        let result = tokio_test::block_on(orchestrator.merge_all(&files, &recorder));
        assert_eq!(result, Err(WorkflowError::TooFewToMerge { found: files.len() }));
    }
    assert!(orchestrator.service().calls().is_empty());
    assert!(!recorder.events().iter().any(|e| matches!(e, WorkflowEvent::Started { .. })));
}

#[test]
fn merge_records_result() {
    let service = FakeService::new().merging_to(Ok("merged123.pdf".to_string()));
    let mut workspace = workspace_with(&["x.pdf", "y.pdf"]);
    let (_, orchestrator) = merge(service, &mut workspace);

    assert_eq!(workspace.merged(), Some("merged123.pdf"));
    assert_eq!(
        workspace.status().message,
        Some(StatusMessage::success("PDFs merged successfully!"))
    );
    assert!(workspace.status().is_idle());
    assert_eq!(*orchestrator.platform().pauses.borrow(), [Duration::from_millis(500)]);
}

#[test]
fn request_follows_current_list_order() {
    let mut workspace = workspace_with(&["a.pdf", "b.pdf", "c.pdf"]);
    workspace.move_converted(0, 2).unwrap();
    workspace.remove_converted(0).unwrap();
    let (_, orchestrator) = merge(FakeService::new(), &mut workspace);

    assert_eq!(
        orchestrator.service().calls(),
        [Call::Merge(vec!["c.pdf".into(), "a.pdf".into()])]
    );
    assert_eq!(workspace.merged(), Some("merged_c.pdf"));
}

#[test]
fn failed_merge_shows_reason_and_keeps_previous_result() {
    let mut workspace = workspace_with(&["x.pdf", "y.pdf"]);
    merge(FakeService::new().merging_to(Ok("first.pdf".into())), &mut workspace);

    let failure = ServiceError::Rejected {
        operation: ServiceOperation::Merge,
        status: 404,
        message: "File not found: y.pdf".into(),
    };
    let (recorder, _) = merge(FakeService::new().merging_to(Err(failure.clone())), &mut workspace);

    assert_eq!(workspace.merged(), Some("first.pdf"));
    assert_eq!(workspace.status().message, Some(StatusMessage::error("File not found: y.pdf")));
    assert!(workspace.status().is_idle());
    assert!(!recorder.events().iter().any(|e| matches!(e, WorkflowEvent::Merged(_))));
}

#[test]
fn merge_progress_checkpoints() {
    let orchestrator = Orchestrator::new(
        FakeService::new(),
        FakePlatform::default(),
        WorkflowConfig::default(),
    );
    let recorder = Recorder::default();
    let files = vec!["x.pdf".to_string(), "y.pdf".to_string()];

    tokio_test::block_on(orchestrator.merge_all(&files, &recorder)).unwrap();

    assert_eq!(recorder.fractions(), [0.1, 0.3, 0.7, 0.9, 1.0]);
    let events = recorder.events();
    assert_eq!(
        events[0],
        WorkflowEvent::Started {
            operation: Operation::Merge,
            label: "Merging PDF files".into()
        }
    );
    assert_eq!(events.last(), Some(&WorkflowEvent::Finished));
}

#[test]
fn failed_merge_skips_the_decode_checkpoint() {
    let failure = ServiceError::Status {
        operation: ServiceOperation::Merge,
        status: 502,
        status_text: "Bad Gateway".into(),
    };
    let orchestrator = Orchestrator::new(
        FakeService::new().merging_to(Err(failure)),
        FakePlatform::default(),
        WorkflowConfig::default(),
    );
    let recorder = Recorder::default();
    let files = vec!["x.pdf".to_string(), "y.pdf".to_string()];

    let result = tokio_test::block_on(orchestrator.merge_all(&files, &recorder));

    assert!(matches!(result, Err(WorkflowError::Service(_))));
    assert_eq!(recorder.fractions(), [0.1, 0.3, 0.7, 1.0]);
    assert_eq!(recorder.messages(), ["Merge failed: Bad Gateway"]);
}

#[test]
fn download_opens_service_url() {
    let orchestrator = Orchestrator::new(
        FakeService::new(),
        FakePlatform::default(),
        WorkflowConfig::default(),
    );
    let recorder = Recorder::default();

    orchestrator.download("merged_x.pdf", &recorder).unwrap();

    assert_eq!(*orchestrator.platform().opened.borrow(), ["/api/download/merged_x.pdf"]);
    assert!(recorder.events().is_empty());
}

#[test]
fn blocked_download_is_reported() {
    let platform = FakePlatform {
        popup_blocked: true,
        ..Default::default()
    };
    let orchestrator = Orchestrator::new(FakeService::new(), platform, WorkflowConfig::default());
    let recorder = Recorder::default();

    let result = orchestrator.download("x.pdf", &recorder);

    assert_eq!(
        result,
        Err(WorkflowError::Platform(PlatformError::OpenWindow("popup blocked".into())))
    );
    assert_eq!(recorder.messages(), ["Error downloading file: popup blocked"]);
}
