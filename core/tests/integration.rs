//! Full lifecycle test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the store (and the
//! view on top of it) over real HTTP through `UreqTransport`. Validates
//! that request building, response parsing, and mirror reconciliation work
//! end-to-end against the actual server.

use task_core::{TaskClient, TaskListView, TaskStore, UreqTransport};

/// Spawn the mock server on a random port and return its base URL.
fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn store(base_url: &str) -> TaskStore<UreqTransport> {
    TaskStore::new(TaskClient::new(base_url), UreqTransport::new())
}

#[test]
fn store_lifecycle() {
    let base_url = start_server();
    let mut store = store(&base_url);

    // Initial fetch — empty.
    store.refresh();
    assert!(store.tasks().is_empty(), "expected empty list");
    assert!(store.error().is_none());

    // Create two tasks; the mirror grows by one per call, ids come from
    // the server.
    let first = store.create("Buy milk").expect("create failed");
    let second = store.create("Walk dog").expect("create failed");
    assert_eq!(first.title, "Buy milk");
    assert_ne!(first.id, second.id);
    assert_eq!(store.tasks().len(), 2);

    // A blank title never reaches the server.
    assert!(store.create("   ").is_none());
    assert_eq!(store.tasks().len(), 2);

    // Update the second task; only that entry changes.
    let updated = store.update(second.id, "Buy bread").expect("update failed");
    assert_eq!(updated.id, second.id);
    assert_eq!(store.tasks()[0].title, "Buy milk");
    assert_eq!(store.tasks()[1].title, "Buy bread");

    // A refresh agrees with the mirror.
    store.refresh();
    assert_eq!(store.tasks().len(), 2);
    assert_eq!(store.tasks()[1].title, "Buy bread");

    // Delete the first; its id disappears, nothing else changes.
    assert!(store.remove(first.id));
    let ids: Vec<i64> = store.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![second.id]);

    // Deleting again fails server-side and surfaces as the stored error;
    // the mirror is untouched.
    assert!(!store.remove(first.id));
    assert_eq!(store.error(), Some("unable to delete task"));
    assert_eq!(store.tasks().len(), 1);

    // Updating a missing id likewise leaves the mirror alone.
    assert!(store.update(first.id, "Ghost").is_none());
    assert_eq!(store.tasks()[0].title, "Buy bread");
}

#[test]
fn view_edit_flow_over_real_http() {
    let base_url = start_server();
    let mut seed = store(&base_url);
    let task = seed.create("Call mum").expect("create failed");

    // Mount fetches the existing list.
    let mut view = TaskListView::mount(store(&base_url));
    assert_eq!(view.tasks().len(), 1);

    // Edit the row through the buffer and save.
    view.begin_edit(task.id);
    assert_eq!(view.edit_buffer(), "Call mum");
    view.set_edit_buffer("Call dad");
    view.save_edit();
    assert_eq!(view.editing_id(), None);
    assert_eq!(view.tasks()[0].title, "Call dad");

    // The server agrees.
    view.refresh();
    assert_eq!(view.tasks()[0].title, "Call dad");

    // Delete empties the list.
    view.delete(task.id);
    view.refresh();
    assert!(view.tasks().is_empty());
}

#[test]
fn transport_failure_collapses_to_stored_error() {
    // Nothing is listening here; the connect fails and the store reports
    // it through its error field instead of propagating.
    let mut store = store("http://127.0.0.1:1");
    store.refresh();
    assert!(store.tasks().is_empty());
    assert_eq!(store.error(), Some("unable to fetch tasks"));
}
