use std::time::Duration;

use gloo_timers::future::TimeoutFuture;

use common::error::PlatformError;
use common::service::Platform;

/// Timers and tabs of the browser window the app runs in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserPlatform;

impl Platform for BrowserPlatform {
    async fn pause(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }

    fn open_in_new_tab(&self, url: &str) -> Result<(), PlatformError> {
        let window = web_sys::window()
            .ok_or_else(|| PlatformError::OpenWindow("no browser window".to_string()))?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(PlatformError::OpenWindow(
                "the browser blocked the new tab".to_string(),
            )),
            Err(err) => Err(PlatformError::OpenWindow(
                err.as_string().unwrap_or_else(|| format!("{err:?}")),
            )),
        }
    }
}
