/// Inline SVG icons
///
/// Material-style 24x24 paths keyed by `IconName`.

use leptos::*;

use crate::types::IconName;

fn icon_path(name: IconName) -> &'static str {
    match name {
        IconName::Home => "M10 20v-6h4v6h5v-8h3L12 3 2 12h3v8z",
        IconName::Info => "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-6h2v6zm0-8h-2V7h2v2z",
        IconName::Login => "M11 7 9.6 8.4l2.6 2.6H2v2h10.2l-2.6 2.6L11 17l5-5-5-5zm9 12h-8v2h8c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2h-8v2h8v14z",
        IconName::Logout => "m17 7-1.41 1.41L18.17 11H8v2h10.17l-2.58 2.58L17 17l5-5zM4 5h8V3H4c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h8v-2H4V5z",
        IconName::Menu => "M3 18h18v-2H3v2zm0-5h18v-2H3v2zm0-7v2h18V6H3z",
        IconName::Account => "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm0 3c1.66 0 3 1.34 3 3s-1.34 3-3 3-3-1.34-3-3 1.34-3 3-3zm0 14.2c-2.5 0-4.71-1.28-6-3.22.03-1.99 4-3.08 6-3.08 1.99 0 5.97 1.09 6 3.08-1.29 1.94-3.5 3.22-6 3.22z",
        IconName::Default => "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z",
    }
}

#[component]
pub fn Icon(
    name: IconName,
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    view! {
        <svg
            class=class.unwrap_or_else(|| "w-6 h-6".to_string())
            viewBox="0 0 24 24"
            fill="currentColor"
            aria-hidden="true"
            data-icon=name.as_str()
        >
            <path d=icon_path(name)/>
        </svg>
    }
}
