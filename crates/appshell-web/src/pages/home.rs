/// Home page
///
/// Greets the signed-in user, or points anonymous visitors at the login page.

use leptos::*;
use leptos_router::*;

use crate::hooks::use_is_authenticated;
use crate::store::use_app_store;

#[component]
pub fn HomePage() -> impl IntoView {
    let is_authenticated = use_is_authenticated();
    let user = use_app_store().current_user();

    view! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">
                {move || match user.get() {
                    Some(u) => format!("Welcome, {}", u.name),
                    None => "Welcome".to_string(),
                }}
            </h1>
            <Show
                when=move || is_authenticated.get()
                fallback=|| view! {
                    <p class="text-gray-600 dark:text-gray-400">
                        <A href="/login" class="text-blue-600 dark:text-blue-400 hover:underline">"Log in"</A>
                        " to see your account."
                    </p>
                }
            >
                <p class="text-gray-600 dark:text-gray-400">
                    "Use the side bar to move between pages."
                </p>
            </Show>
        </div>
    }
}
