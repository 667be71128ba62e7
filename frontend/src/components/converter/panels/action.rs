use yew::html::Scope;
use yew::prelude::*;

use common::model::Operation;

use crate::components::converter::{ConverterComponent, Msg};

/// Convert / merge / download buttons plus the progress display of the
/// running operation.
pub fn action_panel(component: &ConverterComponent, link: &Scope<ConverterComponent>) -> Html {
    let workspace = &component.workspace;
    let status = workspace.status();

    let download = workspace.merged().map(|token| {
        let token = token.to_string();
        html! {
            <button
                class="btn outlined"
                disabled={status.busy}
                onclick={link.callback(move |_| Msg::Download(token.clone()))}
            >
                <i class="material-icons">{"file_download"}</i>
                {"Download Merged PDF"}
            </button>
        }
    });

    let convert_label = button_content(
        workspace.is_running(Operation::Convert),
        "picture_as_pdf",
        "Convert to PDF",
    );
    let merge_label = button_content(
        workspace.is_running(Operation::Merge),
        "merge_type",
        "Merge PDFs",
    );

    html! {
        <div class="paper action-panel">
            <div class="actions">
                <button
                    class="btn primary"
                    disabled={!workspace.can_convert()}
                    onclick={link.callback(|_| Msg::ConvertAll)}
                >
                    { convert_label }
                </button>
                <button
                    class="btn secondary"
                    disabled={!workspace.can_merge()}
                    onclick={link.callback(|_| Msg::MergeAll)}
                >
                    { merge_label }
                </button>
                { download.unwrap_or_default() }
            </div>
            {
                if status.busy {
                    html! {
                        <div class="progress">
                            <span class="progress-label">{ status.label.clone() }</span>
                            <progress max="100" value={status.progress_percent().to_string()} />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn button_content(running: bool, icon: &str, label: &str) -> Html {
    if running {
        html! { <span class="spinner" /> }
    } else {
        html! {
            <>
                <i class="material-icons">{ icon.to_string() }</i>
                { label.to_string() }
            </>
        }
    }
}
