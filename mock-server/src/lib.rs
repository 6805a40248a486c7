//! In-memory stand-in for the task service backend.
//!
//! Mirrors the upstream server's observable behavior: integer ids assigned
//! from an incrementing counter, insertion order preserved in the list,
//! every success answered with 200 (POST included), DELETE echoing the
//! removed task, and 404 for unknown ids.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
}

#[derive(Deserialize)]
pub struct CreateTask {
    pub title: String,
}

#[derive(Deserialize)]
pub struct UpdateTask {
    pub title: String,
}

#[derive(Default)]
pub struct TaskDb {
    next_id: i64,
    tasks: Vec<Task>,
}

pub type Db = Arc<RwLock<TaskDb>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(TaskDb::default()));
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/{id}", put(update_task).delete(delete_task))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_tasks(State(db): State<Db>) -> Json<Vec<Task>> {
    let db = db.read().await;
    Json(db.tasks.clone())
}

async fn create_task(State(db): State<Db>, Json(input): Json<CreateTask>) -> Json<Task> {
    let mut db = db.write().await;
    db.next_id += 1;
    let task = Task {
        id: db.next_id,
        title: input.title,
    };
    db.tasks.push(task.clone());
    Json(task)
}

async fn update_task(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateTask>,
) -> Result<Json<Task>, StatusCode> {
    let mut db = db.write().await;
    let task = db
        .tasks
        .iter_mut()
        .find(|task| task.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    task.title = input.title;
    Ok(Json(task.clone()))
}

async fn delete_task(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Task>, StatusCode> {
    let mut db = db.write().await;
    let index = db
        .tasks
        .iter()
        .position(|task| task.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(db.tasks.remove(index)))
}
