//! View rendering for the converter page.
//!
//! Layout, top to bottom: the upload zone, the pending list (only when it has
//! entries), the action panel, the converted list (only when it has entries)
//! and the message banner.

use std::collections::HashMap;

use yew::prelude::*;

use common::model::{ConvertedFile, Identified, PendingFile};

use super::messages::Msg;
use super::panels::action::action_panel;
use super::panels::message::message_banner;
use super::state::ConverterComponent;
use crate::components::file_list::{FileEntry, FileList};
use crate::components::uploader::FileUploader;

pub fn view(component: &ConverterComponent, ctx: &Context<ConverterComponent>) -> Html {
    let link = ctx.link();
    let workspace = &component.workspace;

    html! {
        <div class="app-container">
            <h1>{"PDF Conversion and Merger Tool"}</h1>

            <FileUploader
                on_files_added={link.callback(Msg::FilesAdded)}
                on_unreadable={link.callback(Msg::FilesUnreadable)}
            />

            {
                if workspace.pending().is_empty() {
                    html! {}
                } else {
                    let entries: Vec<FileEntry> =
                        workspace.pending().iter().map(pending_entry).collect();
                    html! {
                        <>
                            <h2>{"Uploaded Files"}</h2>
                            <FileList
                                {entries}
                                on_remove={link.callback(Msg::RemovePending)}
                                on_move={link.callback(|(from, to): (usize, usize)| {
                                    Msg::MovePending { from, to }
                                })}
                            />
                        </>
                    }
                }
            }

            { action_panel(component, link) }

            {
                if workspace.converted().is_empty() {
                    html! {}
                } else {
                    let names: Vec<String> =
                        workspace.converted().iter().map(|f| f.name.clone()).collect();
                    let entries = converted_entries(workspace.converted().items());
                    html! {
                        <>
                            <h2>{"Converted PDFs"}</h2>
                            <FileList
                                {entries}
                                on_remove={link.callback(Msg::RemoveConverted)}
                                on_move={link.callback(|(from, to): (usize, usize)| {
                                    Msg::MoveConverted { from, to }
                                })}
                                on_download={link.callback(move |index: usize| {
                                    Msg::Download(names.get(index).cloned().unwrap_or_default())
                                })}
                            />
                        </>
                    }
                }
            }

            { message_banner(component, link) }
        </div>
    }
}

fn pending_entry(file: &PendingFile) -> FileEntry {
    FileEntry {
        key: file.id.to_string(),
        title: file.name.clone(),
        detail: Some(file.size_label()),
        is_pdf: file.is_pdf(),
    }
}

/// Rows for the converted list. Keys follow the entry, not its position, so a
/// reorder moves rows instead of recreating them. Entries with the same token
/// and source name are told apart by how many came before them.
fn converted_entries(files: &[ConvertedFile]) -> Vec<FileEntry> {
    let mut seen: HashMap<(String, String), usize> = HashMap::new();
    files
        .iter()
        .map(|file| {
            let occurrence = seen.entry(file.identity()).or_default();
            *occurrence += 1;
            FileEntry {
                key: format!("{}|{}#{}", file.name, file.original_name, occurrence),
                title: file.name.clone(),
                detail: Some(format!("from {}", file.original_name)),
                is_pdf: true,
            }
        })
        .collect()
}
