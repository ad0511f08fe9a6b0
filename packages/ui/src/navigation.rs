//! Full-page navigation as an injectable capability.

/// Leaves the current page for `url`.
pub trait Navigator {
    fn redirect(&self, url: &str);
}

/// Navigates the browser window. On native targets there is no window, so the
/// request is only logged.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, url: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(url) {
                    tracing::error!("Failed to navigate to {}: {:?}", url, e);
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::info!("Redirect to {} requested outside a browser", url);
        }
    }
}
