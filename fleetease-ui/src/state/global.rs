//! Global Application State
//!
//! Reactive state shared by every page: toast messages, the site mode
//! picked from the host name and the public site's theme.

use fleetease::access::SiteMode;
use fleetease::models::PublicTheme;
use fleetease::theme::ThemeStyle;
use fleetease::Notifier;
use leptos::*;

const SUCCESS_TIMEOUT_MS: u32 = 3000;
const ERROR_TIMEOUT_MS: u32 = 5000;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Panel subdomain or main site, fixed for the page lifetime
    pub site_mode: SiteMode,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Public theme settings as served by the API
    pub public_theme: RwSignal<PublicTheme>,
    pub theme_loaded: RwSignal<bool>,
}

fn current_host() -> String {
    web_sys::window()
        .and_then(|window| window.location().hostname().ok())
        .unwrap_or_default()
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState {
        site_mode: SiteMode::from_host(&current_host()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        public_theme: create_rw_signal(PublicTheme::default()),
        theme_loaded: create_rw_signal(false),
    };
    provide_context(state);
    state
}

pub fn use_global() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    /// Resolved public theme, tracked
    pub fn theme(&self) -> ThemeStyle {
        self.public_theme.with(ThemeStyle::from_public)
    }

    /// Store the public theme fetched by a page
    pub fn set_public_theme(&self, theme: PublicTheme) {
        self.public_theme.set(theme);
        self.theme_loaded.set(true);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(SUCCESS_TIMEOUT_MS, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        web_sys::console::error_1(&message.into());
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(ERROR_TIMEOUT_MS, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

impl Notifier for GlobalState {
    fn success(&self, message: &str) {
        self.show_success(message);
    }

    fn error(&self, message: &str) {
        self.show_error(message);
    }
}
