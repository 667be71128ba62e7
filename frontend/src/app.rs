use common::config::AppConfig;
use yew::{html, Component, Context, Html, Properties};

use crate::components::converter::ConverterComponent;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <ConverterComponent config={ctx.props().config.clone()} />
            </div>
        }
    }
}
