//! Toast overlay component

use leptos::prelude::*;

use crate::state::toast::use_toast_context;

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toast_context();

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .list()
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast.kind.class()>
                                <span class="toast-icon">{toast.icon}</span>
                                <div class="toast-body">
                                    <p class="toast-title">{toast.title}</p>
                                    <p class="toast-description">{toast.description}</p>
                                </div>
                                <button
                                    class="toast-close"
                                    on:click=move |_| toasts.dismiss(id)
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
