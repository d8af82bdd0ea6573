//! Connection state management
//!
//! The SDK owns connection state; this context is a reactive mirror the
//! UI reads from. It is refreshed from SDK snapshots whenever a
//! lifecycle event fires (wired up in the composition root).

use leptos::prelude::*;

use crate::services::appkit::{AccountSnapshot, AppKit};

/// Global connection context
#[derive(Clone, Copy)]
pub struct ConnectionContext {
    account: RwSignal<AccountSnapshot>,
}

impl ConnectionContext {
    pub fn new() -> Self {
        Self {
            account: RwSignal::new(AccountSnapshot::default()),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.account.with(|account| account.is_connected)
    }

    pub fn address(&self) -> Option<String> {
        self.account.with(|account| account.address.clone())
    }

    /// Re-read the SDK's connection state into the mirror.
    pub fn refresh(&self, sdk: &AppKit) {
        self.account.set(sdk.account());
    }

    pub fn clear(&self) {
        self.account.set(AccountSnapshot::default());
    }
}

impl Default for ConnectionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_connection_context() -> ConnectionContext {
    let context = ConnectionContext::new();
    provide_context(context);
    context
}

pub fn use_connection_context() -> ConnectionContext {
    expect_context::<ConnectionContext>()
}
