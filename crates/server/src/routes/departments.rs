//! Department route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use kitchenhub_core::DepartmentId;

use super::{MessageResponse, not_found_as, require_name};
use crate::db::{DepartmentRepository, RepositoryError};
use crate::error::{AppError, Result};
use crate::models::Department;
use crate::state::AppState;

/// Request body carrying a department name.
#[derive(Debug, Deserialize)]
pub struct DepartmentRequest {
    pub name: String,
}

/// List all departments, ordered by name.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Department>>> {
    let departments = DepartmentRepository::new(state.pool()).list().await?;
    Ok(Json(departments))
}

/// Create a department.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<DepartmentRequest>,
) -> Result<(StatusCode, Json<Department>)> {
    let name = require_name(&body.name)?;
    let department = DepartmentRepository::new(state.pool())
        .create(name)
        .await
        .map_err(|err| match err {
            RepositoryError::Conflict(detail) => AppError::Conflict {
                message: "Department already exists".to_owned(),
                detail: Some(detail),
            },
            other => AppError::Repository(other),
        })?;
    Ok((StatusCode::CREATED, Json(department)))
}

/// Delete a department. Fails while zones or items still reference it.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>> {
    DepartmentRepository::new(state.pool())
        .delete(DepartmentId::new(id))
        .await
        .map_err(|err| match err {
            RepositoryError::ForeignKey(detail) => AppError::Conflict {
                message: "Department is still referenced".to_owned(),
                detail: Some(detail),
            },
            other => not_found_as("Department not found")(other),
        })?;
    Ok(Json(MessageResponse {
        message: "Department deleted successfully",
    }))
}
