/// Shell component that wraps the main application layout
///
/// Owns the side bar open flag and picks its mode from the viewport: an overlay toggled
/// from the top bar on mobile, a pinned column on desktop.

use leptos::*;

use crate::components::sidebar::{CloseReason, PanelMode, PanelPlacement, SideBar};
use crate::components::top_bar::{top_bar_height, TopBar};
use crate::hooks::{use_is_authenticated, use_is_mobile};
use crate::layout::{px, SIDE_BAR_WIDTH};
use crate::types::{IconName, LinkToPage};

pub const APP_TITLE: &str = "Appshell";

/// Navigation entries for signed-in users
pub fn private_items() -> Vec<LinkToPage> {
    vec![
        LinkToPage::new("Home", "/").with_icon(IconName::Home),
        LinkToPage::new("My Account", "/account").with_icon(IconName::Account),
        LinkToPage::new("About", "/about").with_icon(IconName::Info),
    ]
}

/// Navigation entries for anonymous visitors
pub fn public_items() -> Vec<LinkToPage> {
    vec![
        LinkToPage::new("Log In", "/login").with_icon(IconName::Login),
        LinkToPage::new("About", "/about").with_icon(IconName::Info),
    ]
}

pub fn side_bar_items(is_authenticated: bool) -> Vec<LinkToPage> {
    if is_authenticated {
        private_items()
    } else {
        public_items()
    }
}

pub fn side_bar_mode(is_mobile: bool) -> PanelMode {
    if is_mobile {
        PanelMode::Overlay
    } else {
        PanelMode::CollapsiblePinned
    }
}

fn content_style(is_mobile: bool) -> String {
    let left = if is_mobile { 0 } else { SIDE_BAR_WIDTH };
    format!(
        "padding-top: {}; padding-left: {};",
        px(top_bar_height(is_mobile)),
        px(left)
    )
}

#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let on_mobile = use_is_mobile();
    let is_authenticated = use_is_authenticated();

    // Only meaningful on mobile; the desktop side bar stays open
    let (side_bar_visible, set_side_bar_visible) = create_signal(false);

    let variant = Signal::derive(move || side_bar_mode(on_mobile.get()));
    let open = Signal::derive(move || !on_mobile.get() || side_bar_visible.get());
    let items = Signal::derive(move || side_bar_items(is_authenticated.get()));

    let on_menu = Callback::new(move |_: ()| set_side_bar_visible.update(|visible| *visible = !*visible));
    let on_close = Callback::new(move |reason: CloseReason| {
        log::debug!("closing side bar: {:?}", reason);
        set_side_bar_visible.set(false);
    });

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 text-gray-900 dark:text-gray-100">
            <TopBar title=APP_TITLE on_menu=on_menu/>

            <SideBar
                anchor=PanelPlacement::Left
                open=open
                variant=variant
                items=items
                on_close=on_close
            />

            <main style=move || content_style(on_mobile.get())>
                <div class="container mx-auto px-4 py-6 max-w-7xl">
                    {children()}
                </div>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_follow_authentication() {
        let titles = |items: Vec<LinkToPage>| items.into_iter().map(|l| l.title).collect::<Vec<_>>();

        assert_eq!(titles(side_bar_items(true)), vec!["Home", "My Account", "About"]);
        assert_eq!(titles(side_bar_items(false)), vec!["Log In", "About"]);
    }

    #[test]
    fn test_mode_follows_viewport() {
        assert_eq!(side_bar_mode(true), PanelMode::Overlay);
        assert_eq!(side_bar_mode(false), PanelMode::CollapsiblePinned);
    }

    #[test]
    fn test_content_offsets() {
        assert_eq!(content_style(false), "padding-top: 64px; padding-left: 240px;");
        assert_eq!(content_style(true), "padding-top: 56px; padding-left: 0;");
    }
}
