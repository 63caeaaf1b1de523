//! Mobile device detection.

#[cfg(test)]
#[path = "device_test.rs"]
mod device_test;

/// Viewports at or below this width get the mobile layout.
pub const MOBILE_MAX_WIDTH: f64 = 768.0;

const MOBILE_AGENT_MARKERS: [&str; 8] =
    ["android", "webos", "iphone", "ipad", "ipod", "blackberry", "iemobile", "opera mini"];

/// Narrow viewport or a known mobile user agent.
pub fn is_mobile(inner_width: f64, user_agent: &str) -> bool {
    if inner_width <= MOBILE_MAX_WIDTH {
        return true;
    }
    let agent = user_agent.to_lowercase();
    MOBILE_AGENT_MARKERS.iter().any(|marker| agent.contains(marker))
}

/// Check the current browser window. Always `false` off-browser.
pub fn is_mobile_device() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(f64::INFINITY);
        let agent = window.navigator().user_agent().unwrap_or_default();
        is_mobile(width, &agent)
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}
