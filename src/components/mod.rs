//! UI Components
//!
//! Leptos components of the task board.

mod new_task_form;
mod task_row;
mod task_list;
mod progress_bar;
mod error_banner;

pub use new_task_form::NewTaskForm;
pub use task_row::TaskRow;
pub use task_list::TaskList;
pub use progress_bar::ProgressBar;
pub use error_banner::ErrorBanner;
