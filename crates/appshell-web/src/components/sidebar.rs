/// Side bar navigation component
///
/// Drawer holding the signed-in user summary, the navigation list and a footer row with
/// the theme switch and logout button. Open state and mode belong to the parent; the side
/// bar only reads the store and viewport and forwards requests.

use leptos::*;

use crate::components::icon_button::AppIconButton;
use crate::components::sidebar_nav_list::SideBarNavList;
use crate::components::user_info::UserInfo;
use crate::hooks::{
    use_event_logout, use_event_switch_dark_mode, use_is_authenticated, use_is_dark_mode,
    use_is_mobile,
};
use crate::layout::{px, SIDE_BAR_WIDTH, TOP_BAR_DESKTOP_HEIGHT};
use crate::types::{IconName, LinkToPage};

const DIVIDER_CLASS: &str = "border-gray-200 dark:border-gray-800";

/// Screen edge the side bar is attached to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelPlacement {
    #[default]
    Left,
    Right,
}

/// How the side bar participates in the layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelMode {
    /// Always shown, ignores the open flag
    AlwaysVisible,
    /// Part of the layout while open, never dismissed by the side bar itself
    #[default]
    CollapsiblePinned,
    /// Floats above the content with a backdrop and dismisses after navigation
    Overlay,
}

impl PanelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelMode::AlwaysVisible => "always-visible",
            PanelMode::CollapsiblePinned => "collapsible-pinned",
            PanelMode::Overlay => "overlay",
        }
    }

    /// Whether clicks inside the side bar should request closing
    pub fn closes_after_interaction(&self) -> bool {
        matches!(self, PanelMode::Overlay)
    }

    /// Whether the side bar is on screen for the given open flag
    pub fn is_visible(&self, open: bool) -> bool {
        match self {
            PanelMode::AlwaysVisible => true,
            PanelMode::CollapsiblePinned | PanelMode::Overlay => open,
        }
    }
}

/// Why the side bar asked its parent to close it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Click on the overlay backdrop
    Backdrop,
    /// Click inside the side bar body, e.g. on a navigation link
    InteriorClick,
}

/// Vertical placement of the side bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGeometry {
    /// Distance from the top of the viewport in pixels
    pub top_offset: u32,
    /// Pixels subtracted from the full viewport height
    pub height_reduction: u32,
}

impl PanelGeometry {
    /// Full height from the top on mobile or as an overlay, otherwise below the top bar
    pub fn compute(is_mobile: bool, mode: PanelMode) -> Self {
        if is_mobile || mode == PanelMode::Overlay {
            Self {
                top_offset: 0,
                height_reduction: 0,
            }
        } else {
            Self {
                top_offset: TOP_BAR_DESKTOP_HEIGHT,
                height_reduction: TOP_BAR_DESKTOP_HEIGHT,
            }
        }
    }

    pub fn height(&self) -> String {
        if self.height_reduction == 0 {
            "100%".to_string()
        } else {
            format!("calc(100% - {})", px(self.height_reduction))
        }
    }

    /// Inline style for the side bar container
    pub fn style(&self) -> String {
        format!(
            "width: {}; margin-top: {}; height: {};",
            px(SIDE_BAR_WIDTH),
            px(self.top_offset),
            self.height()
        )
    }
}

/// Forward a click inside the side bar body. Only overlay side bars request closing.
/// Returns true when the close handler was invoked.
pub fn forward_interior_click(mode: PanelMode, on_close: Option<Callback<CloseReason>>) -> bool {
    if !mode.closes_after_interaction() {
        return false;
    }

    match on_close {
        Some(on_close) => {
            on_close.call(CloseReason::InteriorClick);
            true
        }
        None => false,
    }
}

fn theme_hint(dark_mode: bool) -> &'static str {
    if dark_mode {
        "Switch to Light mode"
    } else {
        "Switch to Dark mode"
    }
}

fn theme_label(dark_mode: bool) -> &'static str {
    if dark_mode {
        "Dark mode"
    } else {
        "Light mode"
    }
}

fn container_class(anchor: PanelPlacement, mode: PanelMode, visible: bool, extra: &str) -> String {
    let edge = match anchor {
        PanelPlacement::Left => "left-0 border-r",
        PanelPlacement::Right => "right-0 border-l",
    };
    let hidden = match anchor {
        PanelPlacement::Left => "-translate-x-full",
        PanelPlacement::Right => "translate-x-full",
    };
    let layer = if mode == PanelMode::Overlay { "z-40 shadow-xl" } else { "z-20" };

    format!(
        "sidebar fixed top-0 {} {} {} {} bg-white dark:bg-gray-950 border-gray-200 dark:border-gray-800 overflow-y-auto transition-transform duration-200 {}",
        edge,
        layer,
        if visible { "translate-x-0" } else { hidden },
        if visible { "" } else { "invisible" },
        extra
    )
}

/// Renders the side bar with user details, menu and theme/logout controls
#[component]
pub fn SideBar(
    /// Screen edge to attach to
    #[prop(optional)]
    anchor: PanelPlacement,
    /// Whether the side bar is open; ignored in `AlwaysVisible` mode
    #[prop(into)]
    open: Signal<bool>,
    #[prop(optional, into)]
    variant: MaybeSignal<PanelMode>,
    /// Navigation entries, rendered in order
    #[prop(into)]
    items: MaybeSignal<Vec<LinkToPage>>,
    /// Called when the side bar wants to be closed
    #[prop(optional, into)]
    on_close: Option<Callback<CloseReason>>,
    #[prop(optional, into)]
    class: Option<String>,
    #[prop(optional, into)]
    id: Option<String>,
) -> impl IntoView {
    let is_authenticated = use_is_authenticated();
    let on_mobile = use_is_mobile();
    let dark_mode = use_is_dark_mode();

    let on_switch_dark_mode = use_event_switch_dark_mode();
    let on_logout = use_event_logout();

    let extra_class = class.unwrap_or_default();
    let visible = move || variant.get().is_visible(open.get());

    let handle_after_link_click = move |_: ev::MouseEvent| {
        forward_interior_click(variant.get_untracked(), on_close);
    };

    let handle_backdrop_click = move |_: ev::MouseEvent| {
        if let Some(on_close) = on_close {
            on_close.call(CloseReason::Backdrop);
        }
    };

    view! {
        <Show when=move || variant.get() == PanelMode::Overlay && open.get()>
            <div
                class="sidebar-backdrop fixed inset-0 z-30 bg-black/40"
                aria-hidden="true"
                on:click=handle_backdrop_click
            ></div>
        </Show>

        <aside
            id=id
            class=move || container_class(anchor, variant.get(), visible(), &extra_class)
            style=move || PanelGeometry::compute(on_mobile.get(), variant.get()).style()
            data-mode=move || variant.get().as_str()
            data-open=move || visible().to_string()
            aria-hidden=move || (!visible()).to_string()
        >
            <div class="flex flex-col h-full p-4" on:click=handle_after_link_click>
                <Show when=move || is_authenticated.get()>
                    <UserInfo show_avatar=true/>
                    <hr class=DIVIDER_CLASS/>
                </Show>

                <SideBarNavList items=items show_icons=true/>

                <hr class=DIVIDER_CLASS/>

                <div class="flex flex-row justify-evenly items-center mt-4">
                    <label
                        class="flex items-center space-x-2 cursor-pointer text-sm text-gray-700 dark:text-gray-300"
                        title=move || theme_hint(dark_mode.get())
                    >
                        <input
                            type="checkbox"
                            role="switch"
                            class="theme-switch accent-blue-600"
                            checked=move || dark_mode.get()
                            prop:checked=move || dark_mode.get()
                            aria-checked=move || dark_mode.get().to_string()
                            on:change=move |ev| on_switch_dark_mode.call(ev)
                        />
                        <span>{move || theme_label(dark_mode.get())}</span>
                    </label>

                    <Show when=move || is_authenticated.get()>
                        <AppIconButton
                            icon=IconName::Logout
                            title="Logout Current User"
                            on_click=on_logout
                        />
                    </Show>
                </div>
            </div>
        </aside>
    }
}
