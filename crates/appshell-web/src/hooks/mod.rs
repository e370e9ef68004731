/// Accessors and event dispatchers consumed by the layout components
///
/// Each hook reads from context provided near the root of the app, so components can be
/// rendered against any store or viewport by providing a different one.

use leptos::*;
use leptos_router::use_navigate;

use crate::layout::MOBILE_BREAKPOINT;
use crate::store::{use_app_store, AppAction, AppStore};

/// Viewport classification, provided through context
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub is_mobile: Signal<bool>,
}

impl Viewport {
    /// A viewport whose classification never changes
    pub fn fixed(is_mobile: bool) -> Self {
        Self {
            is_mobile: Signal::derive(move || is_mobile),
        }
    }
}

/// True when a viewport of `width` pixels counts as mobile
pub fn is_mobile_width(width: f64, breakpoint: u32) -> bool {
    width < f64::from(breakpoint)
}

#[cfg(feature = "hydrate")]
fn read_window_width() -> Option<f64> {
    window().inner_width().ok().and_then(|w| w.as_f64())
}

/// Track the browser window width and provide a `Viewport` classified against `breakpoint`.
/// The width stays unknown (desktop) until the first frame after mount, so the hydrating
/// render matches the server HTML.
pub fn provide_viewport(breakpoint: u32) -> Viewport {
    let width = create_rw_signal(None::<f64>);

    #[cfg(feature = "hydrate")]
    {
        request_animation_frame(move || width.set(read_window_width()));

        let handle = window_event_listener(ev::resize, move |_| {
            width.set(read_window_width());
        });
        on_cleanup(move || handle.remove());
    }

    let viewport = Viewport {
        is_mobile: Signal::derive(move || {
            width
                .get()
                .map(|w| is_mobile_width(w, breakpoint))
                .unwrap_or(false)
        }),
    };
    provide_context(viewport);
    viewport
}

/// Provide a viewport using the default mobile breakpoint
pub fn provide_default_viewport() -> Viewport {
    provide_viewport(MOBILE_BREAKPOINT)
}

/// Whether the current viewport is mobile sized
pub fn use_is_mobile() -> Signal<bool> {
    use_context::<Viewport>()
        .expect("Viewport must be provided by provide_viewport")
        .is_mobile
}

/// Whether a user is signed in
pub fn use_is_authenticated() -> Signal<bool> {
    use_app_store().is_authenticated()
}

/// Whether the dark theme is active
pub fn use_is_dark_mode() -> Signal<bool> {
    use_app_store().dark_mode()
}

/// Flip the theme flag on `store`, leaving the rest of the state untouched
pub fn switch_dark_mode(store: AppStore) {
    let enabled = !store.snapshot().dark_mode;
    log::info!("switching to {} mode", if enabled { "dark" } else { "light" });
    store.dispatch(AppAction::DarkMode(enabled));
}

/// Dispatcher for the theme switch's change event
pub fn use_event_switch_dark_mode() -> Callback<ev::Event> {
    let store = use_app_store();

    Callback::new(move |_: ev::Event| switch_dark_mode(store))
}

/// Dispatcher signing the user out and returning to the home page
pub fn use_event_logout() -> Callback<()> {
    let store = use_app_store();
    let navigate = use_navigate();

    Callback::new(move |_| {
        log::info!("logging out current user");
        store.dispatch(AppAction::LogOut);
        navigate("/", Default::default());
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{provide_app_store, AppState};

    #[test]
    fn test_mobile_classification() {
        assert!(is_mobile_width(375.0, MOBILE_BREAKPOINT));
        assert!(is_mobile_width(599.5, MOBILE_BREAKPOINT));
        assert!(!is_mobile_width(600.0, MOBILE_BREAKPOINT));
        assert!(!is_mobile_width(1280.0, MOBILE_BREAKPOINT));
    }

    #[test]
    fn test_viewport_starts_as_desktop() {
        let runtime = create_runtime();

        // Matches the server render until the window has been measured
        let viewport = provide_viewport(u32::MAX);
        assert!(!viewport.is_mobile.get_untracked());
        assert!(!use_is_mobile().get_untracked());

        runtime.dispose();
    }

    #[test]
    fn test_fixed_viewport() {
        let runtime = create_runtime();

        provide_context(Viewport::fixed(true));
        assert!(use_is_mobile().get_untracked());

        runtime.dispose();
    }

    #[test]
    fn test_switch_dark_mode_only_touches_theme() {
        let runtime = create_runtime();

        let store = provide_app_store(AppState::default());
        let before = store.snapshot();

        switch_dark_mode(store);
        let after = store.snapshot();
        assert!(after.dark_mode);
        assert_eq!(after.is_authenticated, before.is_authenticated);
        assert_eq!(after.current_user, before.current_user);
        assert!(use_is_dark_mode().get_untracked());

        switch_dark_mode(store);
        assert!(!store.snapshot().dark_mode);

        runtime.dispose();
    }
}
