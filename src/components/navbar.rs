//! Navigation bar component
//!
//! Renders the brand link, configured navigation targets, the
//! connect/account affordance, and a collapsible mobile menu. Surfaces
//! SDK lifecycle events as toasts.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use crate::services::appkit::{AppKit, LifecycleEvent, SdkView, Subscription};
use crate::state::connection::use_connection_context;
use crate::state::toast::{use_toast_context, ToastKind};
use crate::utils::constants;
use crate::utils::format::truncate_address;

/// Mobile menu state. Closed is the initial state; the only transitions
/// are toggle, and forced-close on route change or in-menu link clicks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }
}

/// Scroll styling predicate: strictly more than the threshold counts as
/// scrolled.
fn is_scrolled(offset_px: f64) -> bool {
    offset_px > constants::SCROLL_THRESHOLD_PX
}

/// Whether `href` should be highlighted for the current route path.
fn is_active_path(current: &str, href: &str) -> bool {
    if href == "/" {
        current == "/"
    } else {
        current == href || current.starts_with(&format!("{}/", href))
    }
}

fn nav_link_class(active: bool) -> &'static str {
    if active {
        "nav-link nav-link-active"
    } else {
        "nav-link"
    }
}

fn mobile_link_class(active: bool) -> &'static str {
    if active {
        "mobile-link mobile-link-active"
    } else {
        "mobile-link"
    }
}

/// Toast shown for a lifecycle event, or `None` for events that only get
/// debug logging.
fn lifecycle_toast(
    event: LifecycleEvent,
) -> Option<(ToastKind, &'static str, &'static str, &'static str)> {
    match event {
        LifecycleEvent::Connected => Some((
            ToastKind::Success,
            "Wallet Connected",
            "Your wallet has been connected successfully.",
            "🦊",
        )),
        LifecycleEvent::Disconnected => Some((
            ToastKind::Error,
            "Wallet Disconnected",
            "Your wallet has been disconnected.",
            "🔌",
        )),
        LifecycleEvent::ChainChanged => Some((
            ToastKind::Info,
            "Network Changed",
            "You have switched to a different blockchain network.",
            "🔄",
        )),
        LifecycleEvent::AccountChanged => None,
    }
}

/// Window event registration removed again on drop.
struct WindowListener {
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    fn attach(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        window
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { event, closure })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                self.event,
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    // Absent when SDK initialization failed; the navbar then runs in
    // degraded read-only mode.
    let sdk = use_context::<AppKit>();
    let connection = use_connection_context();
    let toasts = use_toast_context();
    let location = use_location();
    let pathname = location.pathname;

    let (mounted, set_mounted) = signal(false);
    let (menu, set_menu) = signal(MenuState::Closed);
    let (scrolled, set_scrolled) = signal(false);

    // The connect/account affordance depends on SDK state that does not
    // exist during pre-render, so it is withheld until after mount.
    Effect::new(move || set_mounted.set(true));

    // Scroll styling, recomputed on every scroll event.
    let scroll_listener = StoredValue::new_local(None::<WindowListener>);
    Effect::new(move || {
        let listener = WindowListener::attach("scroll", move |_| {
            let offset = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            set_scrolled.set(is_scrolled(offset));
        });
        if listener.is_none() {
            log::warn!("could not attach scroll listener");
        }
        scroll_listener.set_value(listener);
    });
    on_cleanup(move || scroll_listener.set_value(None));

    // Route changes force the mobile menu closed.
    Effect::new(move || {
        pathname.track();
        set_menu.set(MenuState::Closed);
    });

    // Lifecycle events surface as toasts; subscriptions are released on
    // teardown.
    let toast_subs = StoredValue::new_local(Vec::<Subscription>::new());
    Effect::new(move || {
        let Some(sdk) = sdk else { return };
        let mut subs = Vec::new();
        for event in [
            LifecycleEvent::Connected,
            LifecycleEvent::Disconnected,
            LifecycleEvent::ChainChanged,
        ] {
            let result = sdk.on(event, move || {
                if let Some((kind, title, description, icon)) = lifecycle_toast(event) {
                    toasts.push(kind, title, description, icon);
                }
            });
            match result {
                Ok(sub) => subs.push(sub),
                Err(e) => log::warn!("could not subscribe to {} events: {}", event.name(), e),
            }
        }
        toast_subs.set_value(subs);
    });
    on_cleanup(move || toast_subs.set_value(Vec::new()));

    let on_connect = move |_| match sdk {
        Some(sdk) => sdk.open(None),
        None => toasts.push(
            ToastKind::Error,
            "Wallet Unavailable",
            "The wallet service failed to initialize.",
            "⚠️",
        ),
    };

    let on_account = move |_| {
        if let Some(sdk) = sdk {
            sdk.open(Some(SdkView::Account));
            toasts.push(
                ToastKind::Neutral,
                "Account Details",
                "Viewing your wallet account details.",
                "👤",
            );
        }
    };

    view! {
        <nav class=move || {
            if scrolled.get() { "navbar navbar-scrolled" } else { "navbar" }
        }>
            <div class="navbar-inner">
                <div class="navbar-left">
                    <a href="/" class="brand-link">
                        <span class="brand-title">{constants::APP_NAME}</span>
                    </a>
                    <div class="nav-links">
                        {constants::NAV_ITEMS
                            .iter()
                            .map(|&(label, href)| {
                                view! {
                                    <a
                                        href=href
                                        class=move || {
                                            nav_link_class(is_active_path(&pathname.get(), href))
                                        }
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                        {move || {
                            connection
                                .is_connected()
                                .then(|| {
                                    view! {
                                        <a
                                            href=constants::PROFILE_ROUTE
                                            class=move || {
                                                nav_link_class(
                                                    is_active_path(&pathname.get(), constants::PROFILE_ROUTE),
                                                )
                                            }
                                        >
                                            "My Profile"
                                        </a>
                                    }
                                })
                        }}
                    </div>
                </div>
                <div class="navbar-right">
                    {move || {
                        mounted
                            .get()
                            .then(|| {
                                if connection.is_connected() {
                                    let address = connection.address().unwrap_or_default();
                                    view! {
                                        <button class="address-btn" on:click=on_account>
                                            <span class="status-dot"></span>
                                            {truncate_address(&address)}
                                        </button>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <button class="connect-btn" on:click=on_connect>
                                            "Connect"
                                        </button>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                    <button
                        class="menu-toggle"
                        aria-expanded=move || menu.get().is_open().to_string()
                        on:click=move |_| set_menu.update(|m| *m = m.toggled())
                    >
                        {move || if menu.get().is_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            {move || {
                menu.get()
                    .is_open()
                    .then(|| {
                        view! {
                            <div class="mobile-menu">
                                {constants::NAV_ITEMS
                                    .iter()
                                    .map(|&(label, href)| {
                                        view! {
                                            <a
                                                href=href
                                                class=move || {
                                                    mobile_link_class(is_active_path(&pathname.get(), href))
                                                }
                                                on:click=move |_| set_menu.set(MenuState::Closed)
                                            >
                                                {label}
                                            </a>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                                {connection
                                    .is_connected()
                                    .then(|| {
                                        view! {
                                            <a
                                                href=constants::PROFILE_ROUTE
                                                class="mobile-link"
                                                on:click=move |_| set_menu.set(MenuState::Closed)
                                            >
                                                "My Profile"
                                            </a>
                                        }
                                    })}
                            </div>
                        }
                    })
            }}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_transitions() {
        let menu = MenuState::default();
        assert_eq!(menu, MenuState::Closed);
        assert_eq!(menu.toggled(), MenuState::Open);
        assert_eq!(menu.toggled().toggled(), MenuState::Closed);
        assert!(MenuState::Open.is_open());
        assert!(!MenuState::Closed.is_open());
    }

    #[test]
    fn test_scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
        assert!(is_scrolled(11.0));
    }

    #[test]
    fn test_active_path() {
        assert!(is_active_path("/", "/"));
        assert!(!is_active_path("/profile", "/"));
        assert!(is_active_path("/profile", "/profile"));
        assert!(is_active_path("/profile/settings", "/profile"));
        assert!(!is_active_path("/profiles", "/profile"));
    }

    #[test]
    fn test_lifecycle_toast_mapping() {
        let (kind, title, _, _) = lifecycle_toast(LifecycleEvent::Connected).unwrap();
        assert_eq!(kind, ToastKind::Success);
        assert_eq!(title, "Wallet Connected");

        let (kind, title, _, _) = lifecycle_toast(LifecycleEvent::Disconnected).unwrap();
        assert_eq!(kind, ToastKind::Error);
        assert_eq!(title, "Wallet Disconnected");

        let (kind, title, _, _) = lifecycle_toast(LifecycleEvent::ChainChanged).unwrap();
        assert_eq!(kind, ToastKind::Info);
        assert_eq!(title, "Network Changed");

        assert!(lifecycle_toast(LifecycleEvent::AccountChanged).is_none());
    }
}
