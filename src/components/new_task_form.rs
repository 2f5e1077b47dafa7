//! New Task Form Component
//!
//! Text input plus Add button. The button is disabled while a create is in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_board_context;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_board_context();
    let store = use_board_store();

    let in_flight = move || store.add_form().with(|form| form.in_flight);

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut submitted = None;
        store.add_form().update(|form| submitted = form.submit());
        let Some(title) = submitted else { return };

        spawn_local(async move {
            let result = commands::create_task(&title).await;
            let mut failure = None;
            store.add_form().update(|form| failure = form.finish(result));
            if let Some(e) = failure {
                ctx.fail("add task", e);
            }
            ctx.reload();
        });
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                placeholder="What's on your mind?"
                prop:value=move || store.add_form().with(|form| form.title.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    store.add_form().update(|form| form.title = value);
                }
            />
            <button type="submit" class="primary" disabled=in_flight>
                {move || if in_flight() { "Adding..." } else { "Add Task" }}
            </button>
        </form>
    }
}
