//! In-memory mirror of the server's task list.
//!
//! # Design
//! `TaskStore` owns the client, the transport, and the mirrored state the
//! original system kept in a data-fetching hook: the task list, a loading
//! flag, and the last error. The server stays the source of truth — the
//! mirror is updated from each successful response, wholesale on refresh
//! and per-entry on mutation.
//!
//! Failures stop at this boundary: they are logged, collapsed into one
//! generic message in `error`, and never propagated to the caller. The
//! error field holds the last failure only and is never cleared by a later
//! success. Blank titles are rejected here before any network traffic.

use tracing::warn;

use crate::client::TaskClient;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{CreateTask, Task, UpdateTask};

/// Mirrored task list plus the fetch/create/update/delete operations that
/// keep it in sync with the server.
pub struct TaskStore<T: Transport> {
    client: TaskClient,
    transport: T,
    tasks: Vec<Task>,
    is_loading: bool,
    error: Option<String>,
}

impl<T: Transport> TaskStore<T> {
    pub fn new(client: TaskClient, transport: T) -> Self {
        Self {
            client,
            transport,
            tasks: Vec::new(),
            is_loading: false,
            error: None,
        }
    }

    /// The current mirror, in the order the server returned it.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// True while a network call is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The last failure, if any. Never cleared by a later success.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the mirror wholesale with the server's list.
    pub fn refresh(&mut self) {
        self.is_loading = true;
        let request = self.client.build_list_tasks();
        let result = self
            .transport
            .execute(&request)
            .and_then(|response| self.client.parse_list_tasks(response));
        match result {
            Ok(tasks) => self.tasks = tasks,
            Err(err) => self.fail("unable to fetch tasks", &err),
        }
        self.is_loading = false;
    }

    /// Create a task and append the server-assigned entry to the mirror.
    ///
    /// A blank or whitespace-only title returns `None` without issuing a
    /// network call or touching any state.
    pub fn create(&mut self, title: &str) -> Option<Task> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        self.is_loading = true;
        let input = CreateTask {
            title: title.to_string(),
        };
        let result = self
            .client
            .build_create_task(&input)
            .and_then(|request| self.transport.execute(&request))
            .and_then(|response| self.client.parse_create_task(response));
        let created = match result {
            Ok(task) => {
                self.tasks.push(task.clone());
                Some(task)
            }
            Err(err) => {
                self.fail("unable to create task", &err);
                None
            }
        };
        self.is_loading = false;
        created
    }

    /// Delete a task and drop the matching entry from the mirror.
    ///
    /// Matching is by id only; every other entry is left untouched.
    pub fn remove(&mut self, id: i64) -> bool {
        self.is_loading = true;
        let request = self.client.build_delete_task(id);
        let result = self
            .transport
            .execute(&request)
            .and_then(|response| self.client.parse_delete_task(response));
        let removed = match result {
            Ok(()) => {
                self.tasks.retain(|task| task.id != id);
                true
            }
            Err(err) => {
                self.fail("unable to delete task", &err);
                false
            }
        };
        self.is_loading = false;
        removed
    }

    /// Retitle a task and replace exactly the matching entry in the mirror
    /// with the server's response.
    ///
    /// Blank titles short-circuit like [`create`](Self::create).
    pub fn update(&mut self, id: i64, title: &str) -> Option<Task> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        self.is_loading = true;
        let input = UpdateTask {
            title: title.to_string(),
        };
        let result = self
            .client
            .build_update_task(id, &input)
            .and_then(|request| self.transport.execute(&request))
            .and_then(|response| self.client.parse_update_task(response));
        let updated = match result {
            Ok(task) => {
                for entry in &mut self.tasks {
                    if entry.id == id {
                        *entry = task.clone();
                    }
                }
                Some(task)
            }
            Err(err) => {
                self.fail("unable to update task", &err);
                None
            }
        };
        self.is_loading = false;
        updated
    }

    fn fail(&mut self, message: &str, err: &ApiError) {
        warn!(error = %err, "{message}");
        self.error = Some(message.to_string());
    }
}
