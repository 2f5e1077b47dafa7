//! Task List Component
//!
//! Renders the mirror, or an empty-state panel when there are no tasks.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_board_store();

    view! {
        <Show
            when=move || store.tasks().with(|tasks| !tasks.is_empty())
            fallback=|| view! {
                <div class="empty-state">
                    <p>"No tasks yet"</p>
                    <p class="hint">"Add your first task above to get started"</p>
                </div>
            }
        >
            <ul class="task-list">
                // Keyed on the whole record so a changed row is rebuilt from the new data
                <For
                    each=move || store.tasks().get()
                    key=|task| (task.id, task.title.clone(), task.completed)
                    children=move |task| view! { <TaskRow task=task /> }
                />
            </ul>
        </Show>
    }
}
