/// Main application component and routing
///
/// Provides the store and viewport, binds the theme flag to the document and routes
/// every page through the shell.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::shell::{Shell, APP_TITLE};
use crate::hooks::{provide_default_viewport, use_is_dark_mode};
use crate::pages::{
    about::AboutPage, account::AccountPage, home::HomePage, login::LoginPage,
    not_found::NotFoundPage,
};
use crate::store::{provide_app_store, AppState};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_app_store(AppState::default());
    provide_default_viewport();

    let dark_mode = use_is_dark_mode();

    view! {
        <Html class=move || if dark_mode.get() { "dark" } else { "" }/>
        <Stylesheet id="leptos" href="/pkg/appshell-web.css"/>
        <Title text=APP_TITLE/>
        <Meta name="description" content="Application shell with a responsive side bar"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

        <Router>
            <Shell>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/account" view=AccountPage/>
                    <Route path="/about" view=AboutPage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Shell>
        </Router>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::test_support::provide_request_path;

    fn render_at(path: &'static str) -> String {
        leptos::ssr::render_to_string(move || {
            provide_request_path(path);
            view! { <App/> }
        })
        .to_string()
    }

    #[test]
    fn test_home_renders_shell_for_anonymous_visitor() {
        let html = render_at("/");
        assert!(html.contains("top-bar"));
        assert!(html.contains("<aside"));
        assert!(html.contains("href=\"/login\""));
        assert!(!html.contains("Logout Current User"));
    }

    #[test]
    fn test_unknown_path_renders_not_found() {
        let html = render_at("/nowhere");
        assert!(html.contains("Page not found"));
        assert!(html.contains("<aside"));
    }
}
