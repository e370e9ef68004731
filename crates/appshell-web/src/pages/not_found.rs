/// Fallback page for unknown paths
///
/// Shown inside the shell, so the side bar stays usable for getting back.

use leptos::*;
use leptos_router::*;

use crate::components::icons::Icon;
use crate::types::IconName;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Page not found"</h1>
            <p class="text-gray-600 dark:text-gray-400">
                "Nothing lives at "
                <code class="px-1 rounded bg-gray-100 dark:bg-gray-800">
                    {move || location.pathname.get()}
                </code>
                "."
            </p>
            <A href="/" class="inline-flex items-center space-x-2 text-blue-600 dark:text-blue-400 hover:underline">
                <Icon name=IconName::Home class="w-5 h-5"/>
                <span>"Back to Home"</span>
            </A>
        </div>
    }
}
