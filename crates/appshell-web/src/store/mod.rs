/// Application state store
///
/// Holds the authentication flag, current user and theme flag for the whole shell.
/// Components never read the state directly; they go through the accessors in
/// `crate::hooks`.

use leptos::*;

use crate::types::UserProfile;

/// Global application state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub is_authenticated: bool,
    pub dark_mode: bool,
    pub current_user: Option<UserProfile>,
}

/// State transitions understood by the store
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    LogIn(UserProfile),
    LogOut,
    DarkMode(bool),
}

impl AppState {
    /// Apply an action in place
    pub fn apply(&mut self, action: AppAction) {
        match action {
            AppAction::LogIn(user) => {
                self.is_authenticated = true;
                self.current_user = Some(user);
            }
            AppAction::LogOut => {
                self.is_authenticated = false;
                self.current_user = None;
            }
            AppAction::DarkMode(enabled) => {
                self.dark_mode = enabled;
            }
        }
    }
}

/// Handle to the shared state, provided through context
#[derive(Debug, Clone, Copy)]
pub struct AppStore {
    state: RwSignal<AppState>,
}

impl AppStore {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: create_rw_signal(initial),
        }
    }

    pub fn dispatch(&self, action: AppAction) {
        log::debug!("store action: {:?}", action);
        self.state.update(|state| state.apply(action));
    }

    pub fn is_authenticated(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_authenticated))
    }

    pub fn dark_mode(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.dark_mode))
    }

    pub fn current_user(&self) -> Signal<Option<UserProfile>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.current_user.clone()))
    }

    pub fn snapshot(&self) -> AppState {
        self.state.get_untracked()
    }
}

/// Create the store and make it available to descendants
pub fn provide_app_store(initial: AppState) -> AppStore {
    let store = AppStore::new(initial);
    provide_context(store);
    store
}

/// Hook to access the application store
pub fn use_app_store() -> AppStore {
    use_context::<AppStore>().expect("AppStore must be provided by provide_app_store")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> UserProfile {
        UserProfile {
            name: "Ada".to_string(),
            email: Some("ada@example.com".to_string()),
            avatar_url: None,
        }
    }

    #[test]
    fn test_log_in_and_out() {
        let mut state = AppState::default();

        state.apply(AppAction::LogIn(ada()));
        assert!(state.is_authenticated);
        assert_eq!(state.current_user, Some(ada()));

        state.apply(AppAction::LogOut);
        assert!(!state.is_authenticated);
        assert_eq!(state.current_user, None);
    }

    #[test]
    fn test_dark_mode_leaves_session_alone() {
        let mut state = AppState::default();
        state.apply(AppAction::LogIn(ada()));

        state.apply(AppAction::DarkMode(true));
        assert!(state.dark_mode);
        assert!(state.is_authenticated);
        assert_eq!(state.current_user, Some(ada()));

        state.apply(AppAction::DarkMode(false));
        assert!(!state.dark_mode);
    }

    #[test]
    fn test_store_signals_follow_dispatch() {
        let runtime = create_runtime();

        let store = AppStore::new(AppState::default());
        let is_authenticated = store.is_authenticated();
        let dark_mode = store.dark_mode();

        assert!(!is_authenticated.get_untracked());
        store.dispatch(AppAction::LogIn(ada()));
        assert!(is_authenticated.get_untracked());
        assert_eq!(store.current_user().get_untracked().map(|u| u.name), Some("Ada".to_string()));

        store.dispatch(AppAction::DarkMode(true));
        assert!(dark_mode.get_untracked());

        runtime.dispose();
    }
}
