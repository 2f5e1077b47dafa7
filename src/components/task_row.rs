//! Task Row Component
//!
//! Checkbox, title (or edit input), and row actions for one task.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board::{close_edit, is_completed, EditSession};
use crate::commands;
use crate::context::use_board_context;
use crate::models::Task;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_board_context();
    let store = use_board_store();

    let id = task.id;
    let completed = task.completed;
    let title = task.title.clone();

    // Follows the mirror so a failed toggle snaps back after the reload
    let is_checked = move || store.tasks().with(|tasks| is_completed(tasks, id));

    // Memo so typing into the edit buffer does not re-render the row
    let is_editing = Memo::new(move |_| {
        store.editing().with(|editing| editing.as_ref().is_some_and(|session| session.task_id == id))
    });

    let toggle = move |ev: web_sys::Event| {
        let checked = event_target_checked(&ev);
        spawn_local(async move {
            if let Err(e) = commands::set_completed(id, checked).await {
                ctx.fail("update task", e);
            }
            ctx.reload();
        });
    };

    let save_edit = move |_| {
        let submission = store.editing().with(|editing| {
            editing
                .as_ref()
                .filter(|session| session.task_id == id)
                .and_then(|session| session.submission().map(str::to_string))
        });
        // Blank buffer: keep editing
        let Some(new_title) = submission else { return };

        spawn_local(async move {
            if let Err(e) = commands::rename_task(id, &new_title).await {
                ctx.fail("rename task", e);
            }
            store.editing().update(|editing| close_edit(editing, id));
            ctx.reload();
        });
    };

    let cancel_edit = move |_| store.editing().set(None);

    let delete = move |_| {
        spawn_local(async move {
            if let Err(e) = commands::delete_task(id).await {
                ctx.fail("delete task", e);
            }
            ctx.reload();
        });
    };

    view! {
        <li class=if completed { "task-row completed" } else { "task-row" }>
            <input type="checkbox" prop:checked=is_checked on:change=toggle />

            <Show
                when=move || is_editing.get()
                fallback=move || view! { <span class="title">{title.clone()}</span> }
            >
                <input
                    class="edit-input"
                    autofocus=true
                    prop:value=move || {
                        store.editing().with(|editing| {
                            editing.as_ref().map(|s| s.title.clone()).unwrap_or_default()
                        })
                    }
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        store.editing().update(|editing| {
                            if let Some(session) = editing {
                                session.title = value;
                            }
                        });
                    }
                />
            </Show>

            <div class="actions">
                <Show
                    when=move || is_editing.get()
                    fallback=move || {
                        let task = task.clone();
                        view! {
                            <button
                                title="Edit"
                                on:click=move |_| store.editing().set(Some(EditSession::begin(&task)))
                            >
                                "Edit"
                            </button>
                            <button title="Delete" on:click=delete>"Delete"</button>
                        }
                    }
                >
                    <button class="primary" on:click=save_edit>"Save"</button>
                    <button on:click=cancel_edit>"Cancel"</button>
                </Show>
            </div>
        </li>
    }
}
