//! Client core for the task-list service.
//!
//! # Overview
//! A small CRUD client over a remote task API, layered the same way at
//! every level: plain-data HTTP types at the bottom, a stateless
//! build/parse client above them, a [`Transport`] seam for the actual I/O,
//! and a [`TaskStore`] that mirrors the server's list in memory. The
//! [`TaskListView`] on top adds the interactive edit state machine.
//!
//! # Design
//! - `TaskClient` is stateless — it holds only `base_url`. Each CRUD
//!   operation is split into `build_*` (produces a request) and `parse_*`
//!   (consumes a response), so the I/O boundary stays explicit and the
//!   client fully deterministic.
//! - The server is the source of truth; the store's list is a best-effort
//!   mirror reconciled from each successful response.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod store;
pub mod transport;
pub mod types;
pub mod view;

#[cfg(test)]
mod testing;

pub use client::TaskClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::TaskStore;
pub use transport::{Transport, UreqTransport};
pub use types::{CreateTask, Task, UpdateTask};
pub use view::TaskListView;
