use std::sync::{Arc, Mutex, MutexGuard};

use axum::routing::{get, patch};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{
    create_task, delete_task, get_task, list_tasks, set_status, update_task,
};
use crate::api::response::ApiError;
use crate::error::TaskError;
use crate::service::TaskService;

/// Shared handler state. The service is behind a mutex because each request
/// runs one short store operation; there is no long-held lock to contend on.
#[derive(Clone)]
pub struct AppState {
    service: Arc<Mutex<TaskService>>,
}

impl AppState {
    pub fn new(service: TaskService) -> Self {
        Self {
            service: Arc::new(Mutex::new(service)),
        }
    }

    pub fn service(&self) -> Result<MutexGuard<'_, TaskService>, ApiError> {
        self.service
            .lock()
            .map_err(|_| ApiError(TaskError::Internal("service lock poisoned".into())))
    }
}

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "OK" })
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/tasks/{id}/status", patch(set_status))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
