//! Local development server implementing the consumed task API.
//!
//! Serves the same four endpoints the client consumes, over an in-memory
//! collection. Nothing here is part of the client's semantics (the client
//! works against any conforming server), but having one in-process makes
//! local development and end-to-end tests self-contained.

use crate::types::{NewTask, Task, TaskPatch};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::{RwLock, oneshot};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Server state shared across handlers.
#[derive(Clone, Default)]
pub struct TaskServer {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl TaskServer {
    pub fn new() -> Self {
        Self::default()
    }
}

/// GET /tasks - the full collection.
async fn list_tasks(State(state): State<TaskServer>) -> Json<Vec<Task>> {
    Json(state.tasks.read().await.clone())
}

/// POST /task - create a task with a server-assigned id.
async fn create_task(State(state): State<TaskServer>, Json(body): Json<NewTask>) -> Json<Task> {
    let task = Task {
        id: uuid::Uuid::new_v4().to_string(),
        text: body.text,
        completed: false,
    };
    state.tasks.write().await.push(task.clone());
    Json(task)
}

/// PUT /task/{id} - set the completion flag.
async fn update_task(
    State(state): State<TaskServer>,
    Path(id): Path<String>,
    Json(body): Json<TaskPatch>,
) -> Result<Json<Task>, StatusCode> {
    let mut tasks = state.tasks.write().await;
    match tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            task.completed = body.completed;
            Ok(Json(task.clone()))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// DELETE /task/{id} - remove a task, returning it.
async fn delete_task(
    State(state): State<TaskServer>,
    Path(id): Path<String>,
) -> Result<Json<Task>, StatusCode> {
    let mut tasks = state.tasks.write().await;
    match tasks.iter().position(|t| t.id == id) {
        Some(index) => Ok(Json(tasks.remove(index))),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// Build the router with all routes.
fn build_router(state: TaskServer) -> Router {
    // Permissive CORS so a browser-hosted client can talk to the dev server
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/tasks", get(list_tasks))
        .route("/task", post(create_task))
        .route("/task/{id}", put(update_task).delete(delete_task))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server on the specified port (0 picks a free one).
///
/// Returns a oneshot sender that can be used to signal shutdown, and the
/// actual address the server is bound to.
pub async fn start_server(port: u16) -> anyhow::Result<(oneshot::Sender<()>, SocketAddr)> {
    let app = build_router(TaskServer::new());

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    info!("task server listening on http://{}", bound_addr);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                info!("task server shutting down");
            })
            .await
        {
            tracing::error!("task server error: {}", e);
        }
    });

    Ok((shutdown_tx, bound_addr))
}
