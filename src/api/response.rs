use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::TaskError;
use crate::model::Task;
use crate::stats::Stats;

/// `{success, data}` wrapper for single-task responses.
#[derive(Debug, Serialize)]
pub struct TaskBody {
    pub success: bool,
    pub data: Task,
}

impl TaskBody {
    pub fn new(data: Task) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{success, stats, data}` wrapper for list responses. Stats always cover
/// the unfiltered store.
#[derive(Debug, Serialize)]
pub struct ListBody {
    pub success: bool,
    pub stats: Stats,
    pub data: Vec<Task>,
}

/// `{success, message}` wrapper, used for delete acks and all errors.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub success: bool,
    pub message: String,
}

/// Error carrier for handlers; maps the error taxonomy onto HTTP statuses
/// and renders the shared `{success:false, message}` shape.
#[derive(Debug)]
pub struct ApiError(pub TaskError);

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TaskError::Validation(_) => StatusCode::BAD_REQUEST,
            TaskError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(code = self.0.code(), "request failed: {}", self.0);
        }
        let body = MessageBody {
            success: false,
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
