//! Handlers for the `/courses` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use rocklms_core::course::{Course, CourseChanges, NewCourse, COURSE_ENTITY};
use rocklms_core::error::CoreError;
use rocklms_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::query::CourseListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/courses?status=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CourseListParams>,
) -> AppResult<Json<DataResponse<Vec<Course>>>> {
    let status = params.status_filter()?;
    let courses = state.courses.get_all_courses(status).await?;
    Ok(Json(DataResponse { data: courses }))
}

/// POST /api/v1/courses
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewCourse>,
) -> AppResult<(StatusCode, Json<DataResponse<Course>>)> {
    let course = state.courses.create_course(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: course })))
}

/// GET /api/v1/courses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Course>>> {
    let course = state
        .courses
        .get_course_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: COURSE_ENTITY,
            id,
        }))?;
    Ok(Json(DataResponse { data: course }))
}

/// PUT /api/v1/courses/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CourseChanges>,
) -> AppResult<Json<DataResponse<Course>>> {
    let course = state.courses.update_course(id, input).await?;
    Ok(Json(DataResponse { data: course }))
}

/// DELETE /api/v1/courses/{id}
///
/// Always 204, whether or not the course existed.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    state.courses.delete_course(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/courses/{id}/publish
pub async fn publish(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Course>>> {
    let course = state.courses.publish_course(id).await?;
    Ok(Json(DataResponse { data: course }))
}

/// POST /api/v1/courses/{id}/archive
pub async fn archive(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Course>>> {
    let course = state.courses.archive_course(id).await?;
    Ok(Json(DataResponse { data: course }))
}
