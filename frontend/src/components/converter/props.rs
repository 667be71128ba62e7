//! Properties of the `ConverterComponent`.

use common::config::AppConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ConverterProps {
    /// Service location, log level and workflow timing. Read once when the
    /// component is created; later changes are ignored.
    #[prop_or_default]
    pub config: AppConfig,
}
