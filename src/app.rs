//! Task Board App
//!
//! Root component. Owns the store and the reload loop.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::board::Progress;
use crate::commands;
use crate::components::{ErrorBanner, NewTaskForm, ProgressBar, TaskList};
use crate::context::BoardContext;
use crate::store::{BoardState, BoardStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(BoardState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = BoardContext::new(set_reload_trigger, store);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load on mount, then again whenever a mutation bumps the trigger.
    // Overlapping reloads are not sequenced; whichever resolves last wins.
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        spawn_local(async move {
            match commands::list_tasks().await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} tasks, trigger={}", loaded.len(), trigger).into(),
                    );
                    store.tasks().set(loaded);
                }
                Err(e) => ctx.fail("load tasks", e),
            }
        });
    });

    let progress = Memo::new(move |_| store.tasks().with(|tasks| Progress::of(tasks)));

    view! {
        <main class="board">
            <header class="board-header">
                <h1>"My Tasks"</h1>
                <p>{move || progress.get().summary()}</p>
            </header>

            <ErrorBanner />

            <div class="card">
                <NewTaskForm />
            </div>

            <div class="card">
                <TaskList />
            </div>

            <ProgressBar progress=progress />
        </main>
    }
}
