/// Account page for the signed-in user

use leptos::*;
use leptos_router::*;

use crate::components::user_info::UserInfo;
use crate::hooks::use_is_authenticated;

#[component]
pub fn AccountPage() -> impl IntoView {
    let is_authenticated = use_is_authenticated();

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"My Account"</h1>
            <Show
                when=move || is_authenticated.get()
                fallback=|| view! { <Redirect path="/login"/> }
            >
                <div class="bg-white dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700 p-6">
                    <UserInfo show_avatar=true/>
                </div>
            </Show>
        </div>
    }
}
