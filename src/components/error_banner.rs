//! Error Banner Component
//!
//! Shows the most recent failed request until dismissed.

use leptos::prelude::*;

use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_board_store();

    move || {
        store.last_error().get().map(|message| {
            view! {
                <div class="card error-banner" role="alert">
                    <span>{message}</span>
                    <button on:click=move |_| store.last_error().set(None)>"Dismiss"</button>
                </div>
            }
        })
    }
}
