//! Wallet-connect SDK interop via wasm-bindgen
//!
//! The SDK is an external, hosted widget the page loads alongside the
//! wasm bundle; it exposes a `window.appKit` object and dispatches
//! `appkit:*` lifecycle events on the document. This module wraps that
//! surface in a typed API so no component touches the DOM event bus or
//! the JS globals directly.

use std::cell::Cell;
use std::fmt;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Static configuration handed to the SDK at creation time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SdkConfig {
    pub metadata: SdkMetadata,
    pub project_id: &'static str,
    pub networks: &'static [&'static str],
    pub features: SdkFeatures,
}

/// Application metadata shown inside the SDK's connect dialog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SdkMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub icons: &'static [&'static str],
}

/// Login surfaces the SDK should enable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SdkFeatures {
    pub analytics: bool,
    pub email: bool,
    pub socials: &'static [&'static str],
}

/// Named views of the hosted widget. `None` at the call site means the
/// default connect flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SdkView {
    Account,
}

impl SdkView {
    pub fn name(self) -> &'static str {
        match self {
            SdkView::Account => "Account",
        }
    }
}

/// Lifecycle events the SDK emits when connection status or network changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    Connected,
    Disconnected,
    ChainChanged,
    AccountChanged,
}

impl LifecycleEvent {
    pub const ALL: [LifecycleEvent; 4] = [
        LifecycleEvent::Connected,
        LifecycleEvent::Disconnected,
        LifecycleEvent::ChainChanged,
        LifecycleEvent::AccountChanged,
    ];

    /// Short name for log lines.
    pub fn name(self) -> &'static str {
        match self {
            LifecycleEvent::Connected => "connected",
            LifecycleEvent::Disconnected => "disconnected",
            LifecycleEvent::ChainChanged => "chain-changed",
            LifecycleEvent::AccountChanged => "account-changed",
        }
    }

    /// Name of the DOM event the SDK dispatches on the document.
    fn dom_name(self) -> &'static str {
        match self {
            LifecycleEvent::Connected => "appkit:connected",
            LifecycleEvent::Disconnected => "appkit:disconnected",
            LifecycleEvent::ChainChanged => "appkit:chain-changed",
            LifecycleEvent::AccountChanged => "appkit:account-changed",
        }
    }
}

/// Read-only snapshot of the SDK's connection state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSnapshot {
    pub address: Option<String>,
    pub is_connected: bool,
}

/// Errors crossing the wasm boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SdkError {
    /// The configuration could not be serialized for the SDK.
    Config(String),
    /// The SDK rejected creation or is not loaded on the page.
    Create(String),
    /// The browser environment is missing a required global.
    Unavailable(&'static str),
    /// Listener registration was rejected by the DOM.
    Subscribe(String),
}

impl fmt::Display for SdkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::Config(msg) => write!(f, "invalid SDK configuration: {}", msg),
            SdkError::Create(msg) => write!(f, "SDK creation failed: {}", msg),
            SdkError::Unavailable(what) => write!(f, "{} not available", what),
            SdkError::Subscribe(msg) => write!(f, "event subscription failed: {}", msg),
        }
    }
}

/// Extract a readable message from a JS error value.
fn js_error_string(value: JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        String::from(err.message())
    } else if let Some(msg) = value.as_string() {
        msg
    } else {
        format!("{:?}", value)
    }
}

// ============================================================================
// SDK BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function sdkCreate(config) {
    if (!window.appKit || typeof window.appKit.create !== 'function') {
        throw new Error('wallet-connect SDK is not loaded on this page');
    }
    window.appKit.create(config);
}

export function sdkOpen(view) {
    if (!window.appKit || typeof window.appKit.open !== 'function') {
        return;
    }
    if (view) {
        window.appKit.open({ view: view });
    } else {
        window.appKit.open();
    }
}

export function sdkAccount() {
    if (!window.appKit || typeof window.appKit.getAccount !== 'function') {
        return { address: null, isConnected: false };
    }
    const account = window.appKit.getAccount();
    return {
        address: account && account.address ? account.address : null,
        isConnected: !!(account && account.isConnected)
    };
}
")]
extern "C" {
    /// Create the SDK instance with a serialized configuration
    #[wasm_bindgen(catch)]
    fn sdkCreate(config: &JsValue) -> Result<(), JsValue>;

    /// Open the hosted widget, optionally on a named view
    fn sdkOpen(view: Option<&str>);

    /// Snapshot the current connection state
    fn sdkAccount() -> JsValue;
}

// ============================================================================
// TYPED HANDLE
// ============================================================================

thread_local! {
    // Process-level once-guard: the SDK instance lives on the page, this
    // flag only records that creation already happened.
    static INITIALIZED: Cell<bool> = const { Cell::new(false) };
}

/// Flip the once-guard, returning whether this caller won creation.
fn acquire_init() -> bool {
    INITIALIZED.with(|flag| !flag.replace(true))
}

/// Handle to the wallet-connect SDK instance.
///
/// The instance itself is a page global owned by the SDK; this handle
/// exists so consumers receive it from the composition root through
/// context instead of reaching for globals.
#[derive(Clone, Copy)]
pub struct AppKit {
    _priv: (),
}

impl AppKit {
    /// Create the SDK instance with the given configuration.
    ///
    /// Idempotent at the process level: the first call creates the
    /// instance, later calls return a handle to the existing one
    /// without touching the SDK again.
    pub fn init(config: &SdkConfig) -> Result<AppKit, SdkError> {
        if !acquire_init() {
            log::debug!("wallet SDK already initialized, reusing instance");
            return Ok(AppKit { _priv: () });
        }

        let js_config = serde_wasm_bindgen::to_value(config)
            .map_err(|e| SdkError::Config(e.to_string()))?;
        sdkCreate(&js_config).map_err(|e| SdkError::Create(js_error_string(e)))?;

        log::debug!("wallet SDK instance created (project {})", config.project_id);
        Ok(AppKit { _priv: () })
    }

    /// Open the hosted widget. `None` opens the default connect flow.
    pub fn open(&self, view: Option<SdkView>) {
        sdkOpen(view.map(SdkView::name));
    }

    /// Read the current connection state.
    pub fn account(&self) -> AccountSnapshot {
        serde_wasm_bindgen::from_value(sdkAccount()).unwrap_or_default()
    }

    /// Register a callback for a lifecycle event.
    ///
    /// Returns a [`Subscription`] that unregisters the listener when
    /// dropped, so callers hold it for exactly as long as they want to
    /// observe the event.
    pub fn on(
        &self,
        event: LifecycleEvent,
        mut callback: impl FnMut() + 'static,
    ) -> Result<Subscription, SdkError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(SdkError::Unavailable("document"))?;

        let closure =
            Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| callback());
        document
            .add_event_listener_with_callback(event.dom_name(), closure.as_ref().unchecked_ref())
            .map_err(|e| SdkError::Subscribe(js_error_string(e)))?;

        Ok(Subscription {
            event: event.dom_name(),
            closure,
        })
    }
}

/// A live lifecycle-event registration. Dropping it removes the
/// underlying listener.
pub struct Subscription {
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document.remove_event_listener_with_callback(
                self.event,
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_event_names() {
        assert_eq!(LifecycleEvent::Connected.dom_name(), "appkit:connected");
        assert_eq!(LifecycleEvent::Disconnected.dom_name(), "appkit:disconnected");
        assert_eq!(LifecycleEvent::ChainChanged.dom_name(), "appkit:chain-changed");
        assert_eq!(LifecycleEvent::AccountChanged.dom_name(), "appkit:account-changed");
    }

    #[test]
    fn test_lifecycle_event_all_distinct() {
        for (i, a) in LifecycleEvent::ALL.iter().enumerate() {
            for b in LifecycleEvent::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
                assert_ne!(a.dom_name(), b.dom_name());
            }
        }
    }

    #[test]
    fn test_view_names() {
        assert_eq!(SdkView::Account.name(), "Account");
    }

    #[test]
    fn test_init_guard_is_once() {
        assert!(acquire_init());
        assert!(!acquire_init());
        assert!(!acquire_init());
    }

    #[test]
    fn test_error_display() {
        let err = SdkError::Create("SDK is not loaded".to_string());
        assert_eq!(err.to_string(), "SDK creation failed: SDK is not loaded");
        assert_eq!(SdkError::Unavailable("document").to_string(), "document not available");
    }

    #[test]
    fn test_account_snapshot_default() {
        let snapshot = AccountSnapshot::default();
        assert!(!snapshot.is_connected);
        assert!(snapshot.address.is_none());
    }
}
