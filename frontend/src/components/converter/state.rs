//! Runtime state of the converter page.

use std::rc::Rc;

use common::config::AppConfig;
use common::{Orchestrator, Workspace};

use crate::api::HttpConversionService;
use crate::browser::BrowserPlatform;

pub type BrowserOrchestrator = Orchestrator<HttpConversionService, BrowserPlatform>;

/// State container for the `ConverterComponent`.
///
/// `workspace` is the single source of truth the view renders. The
/// orchestrator is shared with the spawned conversion and merge tasks, which
/// report back through `Msg::Workflow`.
pub struct ConverterComponent {
    pub workspace: Workspace,
    pub orchestrator: Rc<BrowserOrchestrator>,
}

impl ConverterComponent {
    pub fn new(config: &AppConfig) -> Self {
        let service = HttpConversionService::new(config.api_base_url.clone());
        Self {
            workspace: Workspace::new(),
            orchestrator: Rc::new(Orchestrator::new(
                service,
                BrowserPlatform,
                config.workflow.clone(),
            )),
        }
    }
}
