//! Upload intake: a drop zone plus a hidden multi-file input.
//!
//! Every selected file is read into memory with `gloo-file` and handed to the
//! parent as a batch of `PendingFile`s, in selection order. Nothing is
//! filtered here; the remote service decides which formats it accepts. Files
//! the browser cannot read are reported by name through `on_unreadable`.

use gloo_file::{futures::read_as_bytes, Blob};
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, FileList, HtmlInputElement, Node};
use yew::prelude::*;

use common::model::PendingFile;

const SUPPORTED_FORMATS: &str = "DOC, DOCX, XLS, XLSX, PPT, PPTX, ODT, ODS, ODP, PDF";

#[derive(Properties, PartialEq)]
pub struct FileUploaderProps {
    pub on_files_added: Callback<Vec<PendingFile>>,
    pub on_unreadable: Callback<Vec<String>>,
}

pub enum Msg {
    SetDragging(bool),
    Dropped(Option<FileList>),
    InputChanged,
    OpenFileDialog,
}

pub struct FileUploader {
    is_dragging: bool,
    zone_ref: NodeRef,
    file_input_ref: NodeRef,
}

impl Component for FileUploader {
    type Message = Msg;
    type Properties = FileUploaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            is_dragging: false,
            zone_ref: NodeRef::default(),
            file_input_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetDragging(dragging) => {
                if self.is_dragging == dragging {
                    return false;
                }
                self.is_dragging = dragging;
                true
            }
            Msg::Dropped(files) => {
                self.is_dragging = false;
                if let Some(files) = files {
                    read_files(files, ctx.props());
                }
                true
            }
            Msg::InputChanged => {
                if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
                    if let Some(files) = input.files() {
                        read_files(files, ctx.props());
                    }
                    // Allows picking the same file again.
                    input.set_value("");
                }
                false
            }
            Msg::OpenFileDialog => {
                if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
                    input.click();
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let class = classes!(
            "paper",
            "drop-zone",
            self.is_dragging.then_some("is-dragging")
        );
        let zone = self.zone_ref.clone();

        html! {
            <div
                class={class}
                ref={self.zone_ref.clone()}
                ondragenter={link.callback(|e: DragEvent| {
                    e.prevent_default();
                    e.stop_propagation();
                    Msg::SetDragging(true)
                })}
                ondragover={link.callback(|e: DragEvent| {
                    e.prevent_default();
                    e.stop_propagation();
                    Msg::SetDragging(true)
                })}
                ondragleave={link.batch_callback(move |e: DragEvent| {
                    e.prevent_default();
                    e.stop_propagation();
                    let entered = e
                        .related_target()
                        .and_then(|target| target.dyn_into::<Node>().ok());
                    let still_inside = zone
                        .get()
                        .zip(entered)
                        .map(|(zone, node)| zone.contains(Some(&node)));
                    left_zone(still_inside).then_some(Msg::SetDragging(false))
                })}
                ondrop={link.callback(|e: DragEvent| {
                    e.prevent_default();
                    e.stop_propagation();
                    let files = e.data_transfer().and_then(|transfer| transfer.files());
                    Msg::Dropped(files)
                })}
            >
                <input
                    type="file"
                    multiple={true}
                    style="display: none;"
                    ref={self.file_input_ref.clone()}
                    onchange={link.callback(|_: Event| Msg::InputChanged)}
                />
                <i class="material-icons upload-icon">{"upload_file"}</i>
                <h3>{"Drag & Drop Files Here"}</h3>
                <p class="hint">{"or"}</p>
                <button class="btn primary" onclick={link.callback(|_| Msg::OpenFileDialog)}>
                    {"Browse Files"}
                </button>
                <p class="hint">{ format!("Supported formats: {SUPPORTED_FORMATS}") }</p>
            </div>
        }
    }
}

/// Whether a `dragleave` really left the zone. `still_inside` is `None` when
/// the pointer moved to no element at all (out of the window).
fn left_zone(still_inside: Option<bool>) -> bool {
    !still_inside.unwrap_or(false)
}

/// Reads every file of `list` and emits them as one batch. Files that cannot
/// be read are left out and named through `on_unreadable`.
fn read_files(list: FileList, props: &FileUploaderProps) {
    let files: Vec<web_sys::File> = (0..list.length())
        .filter_map(|i| list.get(i))
        .collect();
    if files.is_empty() {
        return;
    }
    let on_files_added = props.on_files_added.clone();
    let on_unreadable = props.on_unreadable.clone();

    wasm_bindgen_futures::spawn_local(async move {
        let mut batch = Vec::with_capacity(files.len());
        let mut unreadable = Vec::new();
        for file in files {
            let name = file.name();
            let last_modified = file.last_modified().max(0.0) as u64;
            let blob = Blob::from(file);
            match read_as_bytes(&blob).await {
                Ok(bytes) => batch.push(PendingFile::new(name, bytes, last_modified)),
                Err(err) => {
                    warn!("could not read {name}: {err}");
                    unreadable.push(name);
                }
            }
        }
        if !batch.is_empty() {
            on_files_added.emit(batch);
        }
        if !unreadable.is_empty() {
            on_unreadable.emit(unreadable);
        }
    });
}
