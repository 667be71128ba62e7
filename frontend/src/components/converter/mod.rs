//! Converter page: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering and the panels.

use yew::prelude::*;

mod messages;
mod panels;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ConverterProps;
pub use state::ConverterComponent;

impl Component for ConverterComponent {
    type Message = Msg;
    type Properties = ConverterProps;

    fn create(ctx: &Context<Self>) -> Self {
        ConverterComponent::new(&ctx.props().config)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
