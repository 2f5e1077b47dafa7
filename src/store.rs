//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::{AddForm, EditSession};
use crate::models::Task;

/// Client-side mirror plus transient UI state
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// All tasks, in the order the backend listed them. Replaced wholesale on every reload.
    pub tasks: Vec<Task>,
    /// At most one task being retitled
    pub editing: Option<EditSession>,
    /// Add form input and its in-flight guard
    pub add_form: AddForm,
    /// Message of the most recent failed request, until dismissed
    pub last_error: Option<String>,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}
