use yew::html::Scope;
use yew::prelude::*;

use crate::components::converter::{ConverterComponent, Msg};

/// The one message on screen, styled by severity.
pub fn message_banner(component: &ConverterComponent, link: &Scope<ConverterComponent>) -> Html {
    let Some(message) = &component.workspace.status().message else {
        return html! {};
    };

    html! {
        <div class={classes!("message", message.severity.css_class())}>
            <span>{ message.text.clone() }</span>
            <button
                class="message-close"
                title="Dismiss"
                onclick={link.callback(|_| Msg::DismissMessage)}
            >
                { "✕" }
            </button>
        </div>
    }
}
