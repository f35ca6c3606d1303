//! Browser front end for tracking Learning Outcome and Program Outcome
//! attainment.

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

/// Starts logging, resolves the runtime config in the background and mounts
/// the app. Host builds have no document to mount into, so this is a no-op
/// there.
pub fn run() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        if console_log::init_with_level(level).is_err() {
            web_sys::console::warn_1(&"logger already initialized".into());
        }
        log::info!("Starting LO-PO attainment console");

        leptos::spawn_local(async move {
            config::init().await;
            log::debug!("Runtime config initialized");
        });

        router::mount_app();
    }
}
