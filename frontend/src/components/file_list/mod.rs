//! Reorderable file list shared by the pending and the converted lists.
//!
//! Entries are dragged by their handle with native HTML5 drag events. Dropping
//! entry `from` onto entry `to` emits `on_move((from, to))`; the owner applies
//! it as a move of one entry, so the list stays a permutation of itself.

use web_sys::DragEvent;
use yew::{html, Callback, Component, Context, Html, Properties};

/// One rendered row.
#[derive(Clone, PartialEq, Debug)]
pub struct FileEntry {
    /// Stable key for Yew's keyed diffing.
    pub key: String,
    pub title: String,
    pub detail: Option<String>,
    pub is_pdf: bool,
}

#[derive(Properties, PartialEq)]
pub struct FileListProps {
    pub entries: Vec<FileEntry>,
    pub on_remove: Callback<usize>,
    pub on_move: Callback<(usize, usize)>,
    /// Shows a download button per row when present.
    #[prop_or_default]
    pub on_download: Option<Callback<usize>>,
}

pub enum Msg {
    DragStart(usize),
    DragOver(usize),
    Drop(usize),
    DragEnd,
}

#[derive(Default)]
pub struct FileList {
    dragging: Option<usize>,
    over: Option<usize>,
}

impl Component for FileList {
    type Message = Msg;
    type Properties = FileListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::DragStart(index) => {
                self.dragging = Some(index);
                true
            }
            Msg::DragOver(index) => {
                if self.over == Some(index) {
                    return false;
                }
                self.over = Some(index);
                true
            }
            Msg::Drop(to) => {
                if let Some(from) = self.dragging.take() {
                    if let Some(pair) = drop_target(from, to, ctx.props().entries.len()) {
                        ctx.props().on_move.emit(pair);
                    }
                }
                self.over = None;
                true
            }
            Msg::DragEnd => {
                self.dragging = None;
                self.over = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if props.entries.is_empty() {
            return html! {
                <div class="paper file-list">
                    <p class="empty">{"No files added yet"}</p>
                </div>
            };
        }

        let rows = props
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| self.row(ctx, index, entry));

        html! {
            <div class="paper file-list">
                <ul>
                    { for rows }
                </ul>
            </div>
        }
    }
}

impl FileList {
    fn row(&self, ctx: &Context<Self>, index: usize, entry: &FileEntry) -> Html {
        let link = ctx.link();
        let props = ctx.props();

        let class = match (self.dragging == Some(index), self.over == Some(index)) {
            (true, _) => "file-row dragging",
            (false, true) => "file-row drop-target",
            _ => "file-row",
        };
        let (icon, icon_class) = if entry.is_pdf {
            ("picture_as_pdf", "material-icons pdf")
        } else {
            ("insert_drive_file", "material-icons doc")
        };

        let on_remove = {
            let cb = props.on_remove.clone();
            Callback::from(move |_| cb.emit(index))
        };
        let download = props.on_download.clone().map(|cb| {
            let onclick = Callback::from(move |_| cb.emit(index));
            html! {
                <button class="icon-btn" title="Download file" {onclick}>
                    <i class="material-icons">{"cloud_download"}</i>
                </button>
            }
        });

        html! {
            <li
                key={entry.key.clone()}
                class={class}
                draggable="true"
                ondragstart={link.callback(move |e: DragEvent| {
                    // Firefox only starts a drag when some data is set.
                    if let Some(transfer) = e.data_transfer() {
                        let _ = transfer.set_data("text/plain", &index.to_string());
                    }
                    Msg::DragStart(index)
                })}
                ondragover={link.callback(move |e: DragEvent| {
                    e.prevent_default();
                    Msg::DragOver(index)
                })}
                ondrop={link.callback(move |e: DragEvent| {
                    e.prevent_default();
                    Msg::Drop(index)
                })}
                ondragend={link.callback(|_: DragEvent| Msg::DragEnd)}
            >
                <i class="material-icons drag-handle">{"drag_indicator"}</i>
                <i class={icon_class}>{icon}</i>
                <div class="file-text">
                    <span class="file-title">{ entry.title.clone() }</span>
                    {
                        match &entry.detail {
                            Some(detail) => html! {
                                <span class="file-detail">{ detail.clone() }</span>
                            },
                            None => html! {},
                        }
                    }
                </div>
                <div class="file-actions">
                    { download.unwrap_or_default() }
                    <button class="icon-btn" title="Remove" onclick={on_remove}>
                        <i class="material-icons">{"delete"}</i>
                    </button>
                </div>
            </li>
        }
    }
}

/// The move a drop describes, or `None` when it changes nothing.
fn drop_target(from: usize, to: usize, len: usize) -> Option<(usize, usize)> {
    (from != to && from < len && to < len).then_some((from, to))
}
