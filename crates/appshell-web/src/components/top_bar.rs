/// Top bar with branding and the side bar toggle
///
/// Fixed to the top of the viewport. The menu button is only shown where the side bar
/// is an overlay (mobile), since the pinned desktop side bar has no toggle.

use leptos::*;
use leptos_router::*;

use crate::components::icon_button::AppIconButton;
use crate::hooks::use_is_mobile;
use crate::layout::{px, TOP_BAR_DESKTOP_HEIGHT, TOP_BAR_MOBILE_HEIGHT};
use crate::types::IconName;

pub fn top_bar_height(is_mobile: bool) -> u32 {
    if is_mobile {
        TOP_BAR_MOBILE_HEIGHT
    } else {
        TOP_BAR_DESKTOP_HEIGHT
    }
}

#[component]
pub fn TopBar(
    #[prop(into)]
    title: String,
    /// Called when the menu button is pressed
    #[prop(into)]
    on_menu: Callback<()>,
) -> impl IntoView {
    let on_mobile = use_is_mobile();

    view! {
        <header
            class="top-bar fixed top-0 inset-x-0 z-30 bg-white dark:bg-gray-950 border-b border-gray-200 dark:border-gray-800 shadow-sm"
            style=move || format!("height: {};", px(top_bar_height(on_mobile.get())))
        >
            <div class="flex items-center h-full px-4 space-x-3">
                <Show when=move || on_mobile.get()>
                    <AppIconButton icon=IconName::Menu title="Open Menu" on_click=on_menu/>
                </Show>
                <A href="/" class="text-xl font-bold text-gray-900 dark:text-white">
                    {title}
                </A>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_bar_height() {
        assert_eq!(top_bar_height(true), 56);
        assert_eq!(top_bar_height(false), 64);
    }
}
