use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global(global: &str, keys: [&str; 2]) -> Option<String> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|value| !value.is_undefined() && !value.is_null())
        .and_then(|value| value.as_string())
        .filter(|value| !value.trim().is_empty())
}

// window.__LOPO_ENV = { API_BASE_URL: "..." } written by env.js, then
// window.__LOPO_CONFIG = { api_base_url: "..." } left by a previous config.json load.
#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<String> {
    read_global("__LOPO_ENV", ["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global("__LOPO_CONFIG", ["api_base_url", "API_BASE_URL"]))
}

/// reqwest only accepts absolute URLs, so config.json is resolved against the
/// page origin rather than the current route.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn runtime_config_url(origin: &str) -> String {
    format!("{}/config.json", origin.trim_end_matches('/'))
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

#[cfg(target_arch = "wasm32")]
fn write_window_config(cfg: &RuntimeConfig) {
    let (Some(url), Some(window)) = (&cfg.api_base_url, web_sys::window()) else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&window, &"__LOPO_CONFIG".into(), &obj);
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(runtime_config_url(&origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(target_arch = "wasm32")]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    log::info!("no runtime config found; using {}", DEFAULT_API_BASE_URL);
    cache_base_url(DEFAULT_API_BASE_URL)
}

/// Host builds have no window globals or config.json to consult.
#[cfg(not(target_arch = "wasm32"))]
pub async fn await_api_base_url() -> String {
    API_BASE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| cache_base_url(DEFAULT_API_BASE_URL))
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("API base URL: {}", url);
}

/// Faculty contact block shown in the footer and the password help notice.
pub mod contact {
    pub const FACULTY: &str = "Faculty of Engineering, University of Ruhuna";
    pub const ADDRESS: &str =
        "Faculty of Engineering, University of Ruhuna, Hapugala, Galle, Sri Lanka. 80000";
    pub const PHONES: [&str; 3] = ["+(94) 912245765", "+(94) 912245766", "+(94) 912245767"];
    pub const FAX: &str = "+94 912245762";
    pub const EMAIL: &str = "ar@eng.ruh.ac.lk";
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn host_base_url_falls_back_to_default() {
        assert_eq!(await_api_base_url().await, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn config_json_is_resolved_against_origin() {
        assert_eq!(
            runtime_config_url("https://obe.eng.ruh.ac.lk"),
            "https://obe.eng.ruh.ac.lk/config.json"
        );
        assert_eq!(
            runtime_config_url("http://localhost:8081/"),
            "http://localhost:8081/config.json"
        );
    }
}
