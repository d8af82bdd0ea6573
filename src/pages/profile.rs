//! Profile page, meaningful only while connected

use leptos::prelude::*;

use crate::state::connection::use_connection_context;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let connection = use_connection_context();

    view! {
        <div class="page">
            <div class="card">
                <h1 class="page-title">"My Profile"</h1>
                {move || {
                    match connection.address().filter(|_| connection.is_connected()) {
                        Some(address) => {
                            view! {
                                <div class="wallet-address">
                                    <p class="label">"Wallet address"</p>
                                    <p class="address">{address}</p>
                                </div>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <div class="status">
                                    <p>"No wallet connected."</p>
                                </div>
                            }
                                .into_any()
                        }
                    }
                }}
            </div>
        </div>
    }
}
