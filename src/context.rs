//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::store::{BoardStateStoreFields, BoardStore};

/// App-wide reload trigger and failure reporting
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Bumped after every mutation; the app re-fetches the full list when it changes
    set_reload_trigger: WriteSignal<u32>,
    store: BoardStore,
}

impl BoardContext {
    pub fn new(set_reload_trigger: WriteSignal<u32>, store: BoardStore) -> Self {
        Self { set_reload_trigger, store }
    }

    /// Trigger a full re-fetch of the task list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Log a failed request and surface it in the error banner
    pub fn fail(&self, action: &str, message: String) {
        web_sys::console::error_1(&format!("[BOARD] {} failed: {}", action, message).into());
        self.store.last_error().set(Some(format!("Could not {}: {}", action, message)));
    }
}

/// Get the board context
pub fn use_board_context() -> BoardContext {
    use_context::<BoardContext>().expect("BoardContext should be provided")
}
