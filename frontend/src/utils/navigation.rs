/// Full-page navigation, the same way the rest of the app leaves a page.
/// Must only be called from event handlers or effects.
pub fn navigate_to(path: &str) {
    log::debug!("navigating to {}", path);
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

pub fn navigate_back() {
    if let Some(window) = web_sys::window() {
        match window.history() {
            Ok(history) => {
                let _ = history.back();
            }
            Err(_) => log::warn!("history unavailable; staying on page"),
        }
    }
}
