use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Strips surrounding whitespace and any number of trailing slashes.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// First candidate that is still non-empty after normalization.
fn first_configured<I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(|raw| normalize_base_url(&raw))
        .find(|url| !url.is_empty())
}

fn compiled_base_url() -> String {
    first_configured([option_env!("HRMS_API_BASE_URL").map(str::to_string)])
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

#[cfg(target_arch = "wasm32")]
fn global_string(global: &str, keys: [&str; 2]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .and_then(|v| v.as_string())
    })
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<String> {
    // window.__HRMS_ENV comes from env.js; window.__HRMS_CONFIG is written
    // after a successful config.json fetch.
    first_configured([
        global_string("__HRMS_ENV", ["API_BASE_URL", "api_base_url"]),
        global_string("__HRMS_CONFIG", ["api_base_url", "API_BASE_URL"]),
    ])
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn write_window_config(url: &str) {
    let Some(w) = web_sys::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &"__HRMS_CONFIG".into(), &obj);
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let href = web_sys::window()?.location().href().ok()?;
    let url = reqwest::Url::parse(&href).ok()?.join("config.json").ok()?;
    let resp = reqwest::get(url).await.ok()?;
    if !resp.status().is_success() {
        log::debug!("config.json unavailable ({})", resp.status());
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

fn cache_base_url(value: String) -> String {
    API_BASE_URL.get_or_init(|| value).clone()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        log::debug!("API base URL from window globals: {}", existing);
        return cache_base_url(existing);
    }
    if let Some(url) = fetch_runtime_config()
        .await
        .and_then(|cfg| first_configured([cfg.api_base_url]))
    {
        #[cfg(target_arch = "wasm32")]
        write_window_config(&url);
        log::debug!("API base URL from config.json: {}", url);
        return cache_base_url(url);
    }
    cache_base_url(compiled_base_url())
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("Using API base URL {}", url);
}
