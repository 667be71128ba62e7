//! Update function for the converter page.
//!
//! List edits go straight to the `Workspace`. Convert and merge pass the
//! workspace gate first (busy check, preconditions, snapshot), then run on a
//! spawned task that feeds its events back as `Msg::Workflow`.

use log::{debug, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::CollectionError;
use common::WorkflowEvent;

use super::messages::Msg;
use super::state::ConverterComponent;

/// Central update function for the component.
///
/// Returns `true` when the view must re-render.
pub fn update(
    component: &mut ConverterComponent,
    ctx: &Context<ConverterComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::FilesAdded(files) => {
            if files.is_empty() {
                return false;
            }
            component.workspace.add_files(files);
            true
        }
        Msg::FilesUnreadable(names) => {
            component.workspace.report_unreadable(&names);
            true
        }
        Msg::RemovePending(index) => {
            edited(component.workspace.remove_pending(index).map(drop))
        }
        Msg::RemoveConverted(index) => {
            edited(component.workspace.remove_converted(index).map(drop))
        }
        Msg::MovePending { from, to } => edited(component.workspace.move_pending(from, to)),
        Msg::MoveConverted { from, to } => edited(component.workspace.move_converted(from, to)),
        Msg::ConvertAll => {
            match component.workspace.begin_convert() {
                Ok(files) => {
                    let orchestrator = component.orchestrator.clone();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let sink =
                            move |event: WorkflowEvent| link.send_message(Msg::Workflow(event));
                        if let Err(err) = orchestrator.convert_all(&files, &sink).await {
                            warn!("conversion run ended without output: {err}");
                        }
                    });
                }
                Err(err) => debug!("conversion not started: {err}"),
            }
            true
        }
        Msg::MergeAll => {
            match component.workspace.begin_merge() {
                Ok(files) => {
                    let orchestrator = component.orchestrator.clone();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let sink =
                            move |event: WorkflowEvent| link.send_message(Msg::Workflow(event));
                        if let Err(err) = orchestrator.merge_all(&files, &sink).await {
                            warn!("merge run ended without output: {err}");
                        }
                    });
                }
                Err(err) => debug!("merge not started: {err}"),
            }
            true
        }
        Msg::Download(filename) => {
            let link = ctx.link().clone();
            let sink = move |event: WorkflowEvent| link.send_message(Msg::Workflow(event));
            if let Err(err) = component.orchestrator.download(&filename, &sink) {
                warn!("download of {filename} failed: {err}");
            }
            false
        }
        Msg::DismissMessage => {
            component.workspace.dismiss_message();
            true
        }
        Msg::Workflow(event) => {
            component.workspace.apply(event);
            true
        }
    }
}

/// Logs a rejected list edit. Rejected edits leave the list untouched, so
/// there is nothing to re-render.
fn edited(result: Result<(), CollectionError>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            warn!("list edit rejected: {err}");
            false
        }
    }
}
