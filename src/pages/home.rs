//! Landing page with a connection status card

use leptos::prelude::*;

use crate::state::connection::use_connection_context;
use crate::utils::constants;
use crate::utils::format::truncate_address;

#[component]
pub fn HomePage() -> impl IntoView {
    let connection = use_connection_context();

    view! {
        <div class="page">
            <div class="card">
                <h1 class="page-title">{constants::APP_NAME}</h1>
                <p class="subtitle">{constants::APP_DESCRIPTION}</p>
                {move || {
                    if connection.is_connected() {
                        let address = connection.address().unwrap_or_default();
                        view! {
                            <div class="status status-connected">
                                <p>"Connected as " {truncate_address(&address)}</p>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="status">
                                <p>"Connect your wallet to get started."</p>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
