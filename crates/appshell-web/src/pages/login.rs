/// Login page
///
/// Collects a display name and optional email and signs the user in on the client.
/// There is no credential check; the profile only feeds the user summary.

use leptos::*;
use leptos_router::*;

use crate::store::{use_app_store, AppAction};
use crate::types::UserProfile;

const INPUT_CLASS: &str = "mt-1 block w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md shadow-sm bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:outline-none focus:ring-blue-500 focus:border-blue-500";

/// Build a profile from raw form input
pub fn profile_from_form(name: &str, email: &str) -> Result<UserProfile, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required".to_string());
    }
    if name.chars().count() > 64 {
        return Err("Name cannot exceed 64 characters".to_string());
    }

    let email = email.trim();
    if !email.is_empty() && !email.contains('@') {
        return Err("Email address is not valid".to_string());
    }

    Ok(UserProfile {
        name: name.to_string(),
        email: (!email.is_empty()).then(|| email.to_string()),
        avatar_url: None,
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_app_store();
    let navigate = use_navigate();

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (error_message, set_error_message) = create_signal::<Option<String>>(None);

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        match profile_from_form(&name.get_untracked(), &email.get_untracked()) {
            Ok(profile) => {
                log::info!("signing in {}", profile.name);
                set_error_message.set(None);
                store.dispatch(AppAction::LogIn(profile));
                navigate("/", Default::default());
            }
            Err(error) => set_error_message.set(Some(error)),
        }
    };

    view! {
        <div class="max-w-md mx-auto space-y-8">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Log In"</h1>

            <form class="space-y-4" on:submit=handle_submit>
                <div>
                    <label for="name" class="block text-sm font-medium text-gray-700 dark:text-gray-300">
                        "Name"
                    </label>
                    <input
                        id="name"
                        name="name"
                        type="text"
                        autocomplete="name"
                        class=INPUT_CLASS
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>

                <div>
                    <label for="email" class="block text-sm font-medium text-gray-700 dark:text-gray-300">
                        "Email (optional)"
                    </label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        autocomplete="email"
                        class=INPUT_CLASS
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>

                <Show when=move || error_message.get().is_some()>
                    <div class="bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-md p-4 text-sm text-red-700 dark:text-red-300">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <button
                    type="submit"
                    class="w-full flex justify-center py-2 px-4 text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 transition-colors"
                >
                    "Log In"
                </button>
            </form>
        </div>
    }
}
