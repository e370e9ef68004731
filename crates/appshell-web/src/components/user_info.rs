/// Summary of the signed-in user
///
/// Avatar (image or initial), name and email. Renders nothing when no user is set.

use leptos::*;

use crate::store::use_app_store;

#[component]
pub fn UserInfo(
    #[prop(optional)]
    show_avatar: bool,
) -> impl IntoView {
    let user = use_app_store().current_user();

    move || {
        user.get().map(|u| {
            let initial = u.initial();
            let avatar = show_avatar.then(|| match u.avatar_url.clone() {
                Some(url) => view! {
                    <img
                        class="w-16 h-16 rounded-full object-cover"
                        src=url
                        alt=u.name.clone()
                    />
                }
                .into_view(),
                None => view! {
                    <div class="w-16 h-16 bg-blue-600 rounded-full flex items-center justify-center">
                        <span class="text-white text-2xl font-medium">{initial}</span>
                    </div>
                }
                .into_view(),
            });

            view! {
                <div class="user-info flex flex-col items-center py-4 space-y-2">
                    {avatar}
                    <p class="font-medium text-gray-900 dark:text-white">{u.name.clone()}</p>
                    {u.email.clone().map(|email| view! {
                        <p class="text-sm text-gray-600 dark:text-gray-400">{email}</p>
                    })}
                </div>
            }
        })
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::store::{provide_app_store, AppState};
    use crate::types::UserProfile;

    fn render(state: AppState, show_avatar: bool) -> String {
        leptos::ssr::render_to_string(move || {
            provide_app_store(state);
            view! { <UserInfo show_avatar=show_avatar/> }
        })
        .to_string()
    }

    fn signed_in(avatar_url: Option<&str>) -> AppState {
        AppState {
            is_authenticated: true,
            dark_mode: false,
            current_user: Some(UserProfile {
                name: "grace hopper".to_string(),
                email: Some("grace@example.com".to_string()),
                avatar_url: avatar_url.map(str::to_string),
            }),
        }
    }

    #[test]
    fn test_initial_avatar() {
        let html = render(signed_in(None), true);
        assert!(html.contains("grace hopper"));
        assert!(html.contains("grace@example.com"));
        assert!(html.contains("G</span>"));
    }

    #[test]
    fn test_image_avatar() {
        let html = render(signed_in(Some("/avatars/grace.png")), true);
        assert!(html.contains("/avatars/grace.png"));
    }

    #[test]
    fn test_avatar_hidden() {
        let html = render(signed_in(Some("/avatars/grace.png")), false);
        assert!(html.contains("grace hopper"));
        assert!(!html.contains("/avatars/grace.png"));
    }

    #[test]
    fn test_no_user_renders_nothing() {
        let html = render(AppState::default(), true);
        assert!(!html.contains("class=\"user-info"));
    }
}
