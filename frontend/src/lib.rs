use leptos::*;

mod api;
mod components;
pub mod config;
mod pages;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

use pages::ConsolePage;

#[component]
fn App() -> impl IntoView {
    leptos_meta::provide_meta_context();
    view! {
        <leptos_meta::Title text="HRMS Lite"/>
        <ConsolePage/>
    }
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
}

/// Resolves the API base URL, then mounts the console.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn run() {
    console_error_panic_hook::set_once();
    init_logging();
    let perf = web_sys::window().and_then(|w| w.performance().ok());
    let t0 = perf.as_ref().map(|p| p.now());
    log::info!("Starting HRMS Lite console");

    spawn_local(async move {
        config::init().await;
        if let (Some(p), Some(start)) = (perf.as_ref(), t0) {
            log::debug!("Runtime config initialized ({:.0} ms)", p.now() - start);
        }
        mount_to_body(App);
    });
}
