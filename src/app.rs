//! Composition root
//!
//! Owns the SDK bootstrap: the instance is created exactly once here and
//! handed to consumers through context, and children are withheld until
//! a post-mount flag flips so the first client paint never depends on
//! SDK state that pre-rendered markup could not have had.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::components::{Navbar, Toaster};
use crate::pages::{HomePage, ProfilePage};
use crate::services::appkit::{
    AppKit, LifecycleEvent, SdkConfig, SdkFeatures, SdkMetadata, Subscription,
};
use crate::state::connection::provide_connection_context;
use crate::state::toast::provide_toast_context;
use crate::utils::constants;

/// Static SDK configuration assembled from the constants module.
fn sdk_config() -> SdkConfig {
    SdkConfig {
        metadata: SdkMetadata {
            name: constants::APP_NAME,
            description: constants::APP_DESCRIPTION,
            url: constants::APP_URL,
            icons: &[constants::APP_ICON],
        },
        project_id: constants::PROJECT_ID,
        networks: constants::NETWORKS,
        features: SdkFeatures {
            analytics: constants::ANALYTICS_ENABLED,
            email: constants::EMAIL_LOGIN_ENABLED,
            socials: constants::SOCIAL_PROVIDERS,
        },
    }
}

#[component]
pub fn App() -> impl IntoView {
    let connection = provide_connection_context();
    provide_toast_context();

    // On failure the app continues in degraded read-only mode: no SDK
    // handle in context, the connect affordance reports the outage.
    let sdk = match AppKit::init(&sdk_config()) {
        Ok(sdk) => {
            log::info!("wallet SDK initialized");
            provide_context(sdk);
            Some(sdk)
        }
        Err(e) => {
            log::error!("wallet SDK initialization failed, continuing read-only: {}", e);
            None
        }
    };

    let (initialized, set_initialized) = signal(false);
    Effect::new(move || set_initialized.set(true));

    let subs = StoredValue::new_local(Vec::<Subscription>::new());
    Effect::new(move || {
        let Some(sdk) = sdk else { return };
        let mut acquired = Vec::new();

        // Passive debug logging for every lifecycle event.
        for event in LifecycleEvent::ALL {
            match sdk.on(event, move || log::debug!("sdk event: {}", event.name())) {
                Ok(sub) => acquired.push(sub),
                Err(e) => log::warn!("could not watch {} events: {}", event.name(), e),
            }
        }

        // Mirror SDK state into the connection context.
        for event in [LifecycleEvent::Connected, LifecycleEvent::AccountChanged] {
            match sdk.on(event, move || connection.refresh(&sdk)) {
                Ok(sub) => acquired.push(sub),
                Err(e) => log::warn!("could not watch {} events: {}", event.name(), e),
            }
        }
        match sdk.on(LifecycleEvent::Disconnected, move || connection.clear()) {
            Ok(sub) => acquired.push(sub),
            Err(e) => log::warn!("could not watch disconnected events: {}", e),
        }

        // Pick up a session the SDK restored before we subscribed.
        connection.refresh(&sdk);

        subs.set_value(acquired);
    });
    on_cleanup(move || subs.set_value(Vec::new()));

    view! {
        <Show when=move || initialized.get() fallback=|| ()>
            <Router>
                <div class="app-container">
                    <Navbar/>
                    <Toaster/>
                    <main class="app-main">
                        <Routes fallback=|| view! { <NotFound/> }>
                            <Route path=path!("/") view=HomePage/>
                            <Route path=path!("/profile") view=ProfilePage/>
                        </Routes>
                    </main>
                </div>
            </Router>
        </Show>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="card">
                <h1 class="page-title">"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn">"Go to Home"</span>
                </A>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdk_config_uses_constants() {
        let config = sdk_config();
        assert_eq!(config.metadata.name, constants::APP_NAME);
        assert_eq!(config.metadata.url, constants::APP_URL);
        assert_eq!(config.metadata.icons.len(), 1);
        assert_eq!(config.metadata.icons[0], constants::APP_ICON);
        assert_eq!(config.project_id, constants::PROJECT_ID);
        assert_eq!(config.networks, constants::NETWORKS);
        assert!(config.features.analytics);
        assert!(config.features.email);
        assert_eq!(config.features.socials.len(), 6);
    }
}
