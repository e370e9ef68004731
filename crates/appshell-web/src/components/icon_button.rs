/// Icon-only button

use leptos::*;

use crate::components::icons::Icon;
use crate::types::IconName;

#[component]
pub fn AppIconButton(
    icon: IconName,
    /// Tooltip and accessible label
    #[prop(into)]
    title: String,
    #[prop(into)]
    on_click: Callback<()>,
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            title=title.clone()
            aria-label=title
            class=class.unwrap_or_else(|| {
                "p-2 rounded-full text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors".to_string()
            })
            on:click=move |_| on_click.call(())
        >
            <Icon name=icon/>
        </button>
    }
}
