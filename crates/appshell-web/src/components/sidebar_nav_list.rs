/// Navigation list for the side bar
///
/// Renders each entry as a router link in the order given, with an optional icon.
/// The entry matching the current location is highlighted.

use leptos::*;
use leptos_router::*;

use crate::components::icons::Icon;
use crate::types::{IconName, LinkToPage};

const LINK_CLASS: &str = "flex items-center space-x-3 px-3 py-2 rounded-lg text-sm font-medium text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors aria-[current=page]:text-blue-600 dark:aria-[current=page]:text-blue-400";

#[component]
pub fn SideBarNavList(
    #[prop(into)]
    items: MaybeSignal<Vec<LinkToPage>>,
    #[prop(optional)]
    show_icons: bool,
) -> impl IntoView {
    view! {
        <nav class="flex flex-col space-y-1 py-2" aria-label="Main navigation">
            {move || {
                items
                    .get()
                    .into_iter()
                    .map(|link| {
                        // "/" would otherwise match every location
                        let exact = link.path == "/";
                        let icon = show_icons.then(|| {
                            view! { <Icon name=link.icon.unwrap_or(IconName::Default) class="w-5 h-5"/> }
                        });

                        view! {
                            <A
                                href=link.path.clone()
                                exact=exact
                                class=LINK_CLASS
                                active_class="active bg-blue-50 dark:bg-blue-900/20"
                            >
                                {icon}
                                <span>{link.title.clone()}</span>
                            </A>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
