use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::api::response::{ApiResult, ListBody, MessageBody, TaskBody};
use crate::api::routes::AppState;
use crate::error::TaskError;
use crate::model::{NewTask, Priority, Status, TaskFilter, TaskPatch};

/// Raw query parameters for `GET /tasks`. Values that do not parse as a
/// known enum member are treated as "no filter" rather than rejected, so a
/// stale or hand-typed query string degrades to the unfiltered list.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
    pub priority: Option<String>,
}

impl ListQuery {
    fn into_filter(self) -> TaskFilter {
        TaskFilter {
            status: self.status.and_then(|s| s.parse().ok()),
            priority: self.priority.and_then(|p| p.parse().ok()),
        }
    }
}

/// Body for `PUT /tasks/{id}`. Enum fields arrive as raw strings and are
/// parsed in the handler so a bad value surfaces as a 400 envelope instead
/// of a framework rejection.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
}

/// Body for `PATCH /tasks/{id}/status`.
#[derive(Debug, Default, Deserialize)]
pub struct SetStatusRequest {
    #[serde(default)]
    pub status: Option<String>,
}

/// Body for `POST /tasks`. Status is never accepted on create.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
}

fn parse_status(raw: &str) -> Result<Status, TaskError> {
    raw.parse()
        .map_err(|_| TaskError::Validation("status must be one of: pending, completed".into()))
}

fn parse_priority(raw: &str) -> Result<Priority, TaskError> {
    raw.parse()
        .map_err(|_| TaskError::Validation("priority must be one of: low, medium, high".into()))
}

pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<ListBody>> {
    let page = state.service()?.list(&query.into_filter())?;
    Ok(Json(ListBody {
        success: true,
        stats: page.stats,
        data: page.tasks,
    }))
}

pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskBody>> {
    let task = state.service()?.get(&id)?;
    Ok(Json(TaskBody::new(task)))
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<TaskBody>)> {
    let priority = request.priority.as_deref().map(parse_priority).transpose()?;
    let task = state.service()?.create(NewTask {
        title: request.title,
        description: request.description,
        priority,
    })?;
    Ok((StatusCode::CREATED, Json(TaskBody::new(task))))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTaskRequest>,
) -> ApiResult<Json<TaskBody>> {
    let patch = TaskPatch {
        title: request.title,
        description: request.description,
        priority: request.priority.as_deref().map(parse_priority).transpose()?,
        status: request.status.as_deref().map(parse_status).transpose()?,
    };
    let task = state.service()?.update(&id, patch)?;
    Ok(Json(TaskBody::new(task)))
}

pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SetStatusRequest>,
) -> ApiResult<Json<TaskBody>> {
    let status = match request.status.as_deref() {
        Some(raw) => parse_status(raw)?,
        None => {
            return Err(TaskError::Validation(
                "status must be one of: pending, completed".into(),
            )
            .into());
        }
    };
    let task = state.service()?.set_status(&id, status)?;
    Ok(Json(TaskBody::new(task)))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageBody>> {
    state.service()?.delete(&id)?;
    Ok(Json(MessageBody {
        success: true,
        message: "Task deleted".into(),
    }))
}
