//! Toast notification queue
//!
//! Fire-and-forget notifications: pushing a toast never blocks, never
//! fails, and never waits for acknowledgement. Each toast auto-dismisses
//! after a fixed duration.

use leptos::prelude::*;
use uuid::Uuid;

use crate::utils::constants::TOAST_DURATION_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Neutral,
}

impl ToastKind {
    /// CSS class applied to the toast card.
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
            ToastKind::Neutral => "toast toast-neutral",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Remove a toast from the queue; absent ids are a no-op.
fn remove_toast(toasts: &mut Vec<Toast>, id: Uuid) {
    toasts.retain(|toast| toast.id != id);
}

/// Global toast context
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    /// The live queue, for the overlay component to render.
    pub fn list(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }

    /// Queue a toast and schedule its auto-dismissal.
    pub fn push(
        &self,
        kind: ToastKind,
        title: &'static str,
        description: &'static str,
        icon: &'static str,
    ) {
        let id = Uuid::new_v4();
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                kind,
                title,
                description,
                icon,
            })
        });

        let toasts = self.toasts;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            toasts.update(|toasts| remove_toast(toasts, id));
        });
    }

    /// Dismiss a toast early (close button).
    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|toasts| remove_toast(toasts, id));
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toast_context() -> ToastContext {
    let context = ToastContext::new();
    provide_context(context);
    context
}

pub fn use_toast_context() -> ToastContext {
    expect_context::<ToastContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: ToastKind) -> Toast {
        Toast {
            id: Uuid::new_v4(),
            kind,
            title: "title",
            description: "description",
            icon: "*",
        }
    }

    #[test]
    fn test_kind_classes() {
        assert_eq!(ToastKind::Success.class(), "toast toast-success");
        assert_eq!(ToastKind::Error.class(), "toast toast-error");
        assert_eq!(ToastKind::Info.class(), "toast toast-info");
        assert_eq!(ToastKind::Neutral.class(), "toast toast-neutral");
    }

    #[test]
    fn test_remove_toast() {
        let mut queue = vec![sample(ToastKind::Success), sample(ToastKind::Error)];
        let victim = queue[0].id;
        remove_toast(&mut queue, victim);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].kind, ToastKind::Error);
    }

    #[test]
    fn test_remove_toast_missing_id_is_noop() {
        let mut queue = vec![sample(ToastKind::Info)];
        remove_toast(&mut queue, Uuid::new_v4());
        assert_eq!(queue.len(), 1);
    }
}
