/// appshell web interface
///
/// Leptos application shell: top bar, responsive navigation side bar with user info,
/// theme switch and logout, rendered on the server and hydrated in the browser.

pub mod app;
pub mod components;
pub mod hooks;
pub mod layout;
pub mod pages;
pub mod store;
pub mod types;

#[cfg(all(test, feature = "ssr"))]
pub(crate) mod test_support {
    use leptos::*;
    use leptos_router::{RouterIntegrationContext, ServerIntegration};

    /// Make `Router` resolve `path` as the current request during a server render
    pub fn provide_request_path(path: &str) {
        provide_context(RouterIntegrationContext::new(ServerIntegration {
            path: format!("http://localhost{}", path),
        }));
    }
}

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount_to_body(App);
}
