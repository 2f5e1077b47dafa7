//! Board Logic
//!
//! Pure state rules of the task board, kept free of Leptos so they can be
//! unit-tested on the host.

use crate::models::Task;

/// Empty and whitespace-only titles are never submitted.
pub fn is_blank(title: &str) -> bool {
    title.trim().is_empty()
}

/// Completion flag of `id` as the mirror currently holds it.
///
/// The row checkbox reads this instead of its own click, so a failed toggle
/// shows the stored value again once the list is reloaded.
pub fn is_completed(tasks: &[Task], id: i64) -> bool {
    tasks.iter().any(|task| task.id == id && task.completed)
}

/// Counts derived from the mirror on every render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
}

impl Progress {
    pub fn of(tasks: &[Task]) -> Self {
        Self {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.completed).count(),
        }
    }

    /// `round(completed / total * 100)`, or `None` for an empty board.
    ///
    /// Integer arithmetic, rounding halves up.
    pub fn percent(&self) -> Option<u32> {
        if self.total == 0 {
            return None;
        }
        let percent = (200 * self.completed + self.total) / (2 * self.total);
        Some(percent as u32)
    }

    /// Header line under the title
    pub fn summary(&self) -> String {
        if self.total == 0 {
            "Start your productive day".to_string()
        } else {
            format!("{} of {} completed", self.completed, self.total)
        }
    }
}

/// The single task being retitled, with the in-progress text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: i64,
    pub title: String,
}

impl EditSession {
    /// Seed the buffer with the task's current title
    pub fn begin(task: &Task) -> Self {
        Self { task_id: task.id, title: task.title.clone() }
    }

    /// Title to send on save; `None` keeps the editor open.
    pub fn submission(&self) -> Option<&str> {
        if is_blank(&self.title) {
            None
        } else {
            Some(&self.title)
        }
    }
}

/// Input text of the add form and whether a create is in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddForm {
    pub title: String,
    pub in_flight: bool,
}

impl AddForm {
    /// Title to send, locking the form until `finish`.
    ///
    /// `None` for a blank title or while another create is in flight; the form is left as is.
    pub fn submit(&mut self) -> Option<String> {
        if self.in_flight || is_blank(&self.title) {
            return None;
        }
        self.in_flight = true;
        Some(self.title.clone())
    }

    /// A create resolved. Success and failure both clear the input and unlock;
    /// the caller reloads the list either way. Returns the failure to report.
    pub fn finish<T>(&mut self, result: Result<T, String>) -> Option<String> {
        self.title.clear();
        self.in_flight = false;
        result.err()
    }
}

/// Leave edit mode after a save of `task_id` resolves.
///
/// A session opened on another task in the meantime is left alone.
pub fn close_edit(editing: &mut Option<EditSession>, task_id: i64) {
    if editing.as_ref().is_some_and(|s| s.task_id == task_id) {
        *editing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn task(id: i64, title: &str, completed: bool) -> Task {
        Task { id, title: title.to_string(), completed }
    }

    #[test]
    fn blank_titles() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn empty_board_has_no_percentage() {
        let progress = Progress::of(&[]);
        assert_eq!(progress, Progress { total: 0, completed: 0 });
        assert_eq!(progress.percent(), None);
        assert_eq!(progress.summary(), "Start your productive day");
    }

    #[test]
    fn progress_counts_and_rounds() {
        let tasks = [task(1, "A", true), task(2, "B", false), task(3, "C", false)];
        let progress = Progress::of(&tasks);

        assert_eq!(progress.completed, 1);
        assert_eq!(progress.total, 3);
        assert_eq!(progress.percent(), Some(33));
        assert_eq!(progress.summary(), "1 of 3 completed");

        // 2/3 = 66.67 rounds up; 1/8 = 12.5 rounds half up
        assert_eq!(Progress { total: 3, completed: 2 }.percent(), Some(67));
        assert_eq!(Progress { total: 8, completed: 1 }.percent(), Some(13));
        assert_eq!(Progress { total: 4, completed: 4 }.percent(), Some(100));
    }

    #[test]
    fn edit_session_seeds_from_task() {
        let session = EditSession::begin(&task(7, "Write report", false));
        assert_eq!(session.task_id, 7);
        assert_eq!(session.submission(), Some("Write report"));
    }

    #[test]
    fn blank_edit_is_not_submitted() {
        let mut session = EditSession::begin(&task(7, "Write report", false));
        session.title = "  ".to_string();
        assert_eq!(session.submission(), None);
    }

    #[test]
    fn close_edit_only_clears_matching_session() {
        let mut editing = Some(EditSession::begin(&task(2, "B", false)));
        close_edit(&mut editing, 1);
        assert!(editing.is_some());

        close_edit(&mut editing, 2);
        assert!(editing.is_none());

        close_edit(&mut editing, 2);
        assert!(editing.is_none());
    }

    #[test]
    fn checkbox_follows_the_mirror_not_the_click() {
        // Toggle of task 1 failed: the reload returns the same record
        let reloaded = [task(1, "A", false), task(2, "B", true)];
        assert!(!is_completed(&reloaded, 1));
        assert!(is_completed(&reloaded, 2));
        assert!(!is_completed(&reloaded, 99));
    }

    #[test]
    fn add_form_ignores_blank_titles() {
        let mut form = AddForm { title: "   ".to_string(), in_flight: false };
        assert_eq!(form.submit(), None);
        assert!(!form.in_flight);
        assert_eq!(form.title, "   ");
    }

    #[test]
    fn add_form_locks_while_in_flight() {
        let mut form = AddForm { title: "Buy milk".to_string(), in_flight: false };

        assert_eq!(form.submit(), Some("Buy milk".to_string()));
        assert!(form.in_flight);
        assert_eq!(form.submit(), None);
    }

    #[test]
    fn add_form_clears_and_unlocks_on_success() {
        let mut form = AddForm { title: "Buy milk".to_string(), in_flight: false };
        form.submit();

        assert_eq!(form.finish(Ok(task(1, "Buy milk", false))), None);
        assert_eq!(form, AddForm::default());
    }

    #[test]
    fn add_form_clears_and_unlocks_on_failure() {
        let mut form = AddForm { title: "Buy milk".to_string(), in_flight: false };
        form.submit();

        let failure = form.finish::<Task>(Err("Title is required".to_string()));

        assert_eq!(failure, Some("Title is required".to_string()));
        assert_eq!(form, AddForm::default());
        assert_eq!(form.submit(), None, "cleared input is blank");
    }

    proptest! {
        #[test]
        fn completed_never_exceeds_total(flags in proptest::collection::vec(any::<bool>(), 0..200)) {
            let tasks: Vec<Task> = flags
                .iter()
                .enumerate()
                .map(|(i, &done)| task(i as i64 + 1, "t", done))
                .collect();
            let progress = Progress::of(&tasks);

            prop_assert!(progress.completed <= progress.total);
            prop_assert_eq!(progress.total, tasks.len());
            match progress.percent() {
                None => prop_assert_eq!(progress.total, 0),
                Some(percent) => {
                    let expected = (100.0 * progress.completed as f64 / progress.total as f64).round();
                    prop_assert_eq!(percent as f64, expected);
                    prop_assert!(percent <= 100);
                }
            }
        }
    }
}
