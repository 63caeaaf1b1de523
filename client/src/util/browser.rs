//! Thin wrappers over browser APIs used by pages.
//!
//! Every function degrades to a no-op or an error off-browser.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

pub const COPIED_MESSAGE: &str = "Copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy to clipboard";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BrowserError {
    #[error("browser API unavailable: {0}")]
    Unavailable(&'static str),
    #[error("{0}")]
    Rejected(String),
}

/// Write `text` to the system clipboard.
#[allow(clippy::unused_async)]
pub async fn copy_to_clipboard(text: &str) -> Result<(), BrowserError> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window().ok_or(BrowserError::Unavailable("window"))?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| BrowserError::Rejected(format!("{e:?}")))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        Err(BrowserError::Unavailable("clipboard"))
    }
}

/// Smooth-scroll the element with `id` to the top of the viewport. Returns
/// whether the element exists.
pub fn scroll_to_element(id: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(element) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        false
    }
}

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// Current location path, `/` off-browser.
pub fn current_path() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        "/".to_owned()
    }
}
