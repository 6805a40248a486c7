//! Text front end over the store: a task list with per-row edit state.
//!
//! # Design
//! Each row is either *viewing* or *editing*. There is a single shared edit
//! buffer and "currently editing" marker, so at most one row can be in the
//! editing state; entering edit on another row discards any unsaved buffer.
//! Saving commits the buffer through the store, then clears the edit state
//! whether or not the call succeeded — the mirror already reflects the
//! outcome, and the error line reports failures.
//!
//! All persistence goes through [`TaskStore`]; the view never touches the
//! task list directly.

use crate::store::TaskStore;
use crate::transport::Transport;
use crate::types::Task;

/// Task list with a new-task draft and a single-row edit state machine.
pub struct TaskListView<T: Transport> {
    store: TaskStore<T>,
    draft: String,
    edit_buffer: String,
    editing_id: Option<i64>,
}

impl<T: Transport> TaskListView<T> {
    /// Wrap a store and fetch the initial list, exactly once.
    pub fn mount(store: TaskStore<T>) -> Self {
        let mut view = Self {
            store,
            draft: String::new(),
            edit_buffer: String::new(),
            editing_id: None,
        };
        view.store.refresh();
        view
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn edit_buffer(&self) -> &str {
        &self.edit_buffer
    }

    /// Id of the row currently in the editing state, if any.
    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    pub fn error(&self) -> Option<&str> {
        self.store.error()
    }

    pub fn set_draft(&mut self, text: &str) {
        self.draft = text.to_string();
    }

    /// Create a task from the draft. The draft is cleared only when the
    /// server accepted it; a blank draft never reaches the network.
    pub fn submit_draft(&mut self) -> bool {
        let draft = self.draft.clone();
        match self.store.create(&draft) {
            Some(_) => {
                self.draft.clear();
                true
            }
            None => false,
        }
    }

    /// Switch a row to the editing state, seeding the buffer with its
    /// current title. Any other row's unsaved buffer is discarded. Unknown
    /// ids leave the state unchanged.
    pub fn begin_edit(&mut self, id: i64) {
        if let Some(task) = self.store.tasks().iter().find(|task| task.id == id) {
            self.edit_buffer = task.title.clone();
            self.editing_id = Some(id);
        }
    }

    pub fn set_edit_buffer(&mut self, text: &str) {
        self.edit_buffer = text.to_string();
    }

    /// Commit the edit buffer for the row being edited, then return to the
    /// viewing state regardless of success or failure. A blank buffer skips
    /// the network call and just leaves edit mode.
    pub fn save_edit(&mut self) {
        if let Some(id) = self.editing_id {
            let buffer = self.edit_buffer.clone();
            self.store.update(id, &buffer);
            self.editing_id = None;
            self.edit_buffer.clear();
        }
    }

    /// Drop an in-progress edit without committing it.
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.edit_buffer.clear();
    }

    pub fn delete(&mut self, id: i64) {
        self.store.remove(id);
    }

    pub fn refresh(&mut self) {
        self.store.refresh();
    }

    /// Render the list as text. Error and loading states are emitted
    /// explicitly so they are actually visible to the user.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(error) = self.store.error() {
            out.push_str(&format!("! error: {error}\n"));
        }
        if self.store.is_loading() {
            out.push_str("  loading...\n");
        }
        if self.store.tasks().is_empty() {
            out.push_str("  (no tasks)\n");
            return out;
        }
        for task in self.store.tasks() {
            if self.editing_id == Some(task.id) {
                out.push_str(&format!("> {:>3}  [{}]\n", task.id, self.edit_buffer));
            } else {
                out.push_str(&format!("  {:>3}  {}\n", task.id, task.title));
            }
        }
        out
    }
}
