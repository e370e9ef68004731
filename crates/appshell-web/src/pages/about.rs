/// About page

use leptos::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"About"</h1>
            <p class="text-gray-600 dark:text-gray-400">
                "Application shell with a responsive navigation side bar, rendered on the server with Leptos and hydrated in the browser."
            </p>
        </div>
    }
}
