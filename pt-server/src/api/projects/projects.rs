//! Project REST API handlers
//!
//! Validation runs through the pt-core rule set before any persistence
//! call, on create and update alike. Every update is a full replacement
//! of the mutable fields.

use crate::{ApiError, ApiResult, AppState};

use pt_core::{Project, ProjectDraft, ProjectDto};
use pt_db::ProjectRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /projects
///
/// List all projects, newest first
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<ProjectDto>>> {
    let repo = ProjectRepository::new(state.pool.clone());
    let projects = repo.find_all().await?;

    Ok(Json(projects.into_iter().map(ProjectDto::from).collect()))
}

/// GET /projects/{id}
///
/// Get a single project by ID
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectDto>> {
    let project_id = Uuid::parse_str(&id)?;

    let repo = ProjectRepository::new(state.pool.clone());
    let project = repo
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    Ok(Json(project.into()))
}

/// POST /projects
///
/// Validate and create a new project. The store assigns id and timestamps.
pub async fn create_project(
    State(state): State<AppState>,
    Json(draft): Json<ProjectDraft>,
) -> ApiResult<(StatusCode, Json<ProjectDto>)> {
    let validated = draft.validate()?;
    let project = Project::new(validated);

    let repo = ProjectRepository::new(state.pool.clone());
    repo.create(&project).await?;

    log::info!("Created project {} ({})", project.project_name, project.id);

    Ok((StatusCode::CREATED, Json(project.into())))
}

/// PUT /projects/{id}
///
/// Validate first (same rules and order as create), then replace all
/// mutable fields of the existing record. Last write wins.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<ProjectDraft>,
) -> ApiResult<Json<ProjectDto>> {
    let validated = draft.validate()?;
    let project_id = Uuid::parse_str(&id)?;

    let repo = ProjectRepository::new(state.pool.clone());
    let mut project = repo
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    project.apply(validated);

    // A concurrent delete can race the lookup; surface it as missing
    if !repo.update(&project).await? {
        return Err(not_found(&id));
    }

    Ok(Json(project.into()))
}

/// DELETE /projects/{id}
///
/// Hard delete. Returns the record's prior state as confirmation;
/// a second delete of the same id is a 404.
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectDto>> {
    let project_id = Uuid::parse_str(&id)?;

    let repo = ProjectRepository::new(state.pool.clone());
    let project = repo
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    if !repo.delete(project_id).await? {
        return Err(not_found(&id));
    }

    log::info!("Deleted project {} ({})", project.project_name, project.id);

    Ok(Json(project.into()))
}

#[track_caller]
fn not_found(id: &str) -> ApiError {
    ApiError::NotFound {
        message: format!("Project {} not found", id),
        location: ErrorLocation::from(Location::caller()),
    }
}
