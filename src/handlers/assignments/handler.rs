//! Assignment handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::AssignmentService,
    state::AppState,
};

use super::{
    request::{FeedQuery, SubmitRequest, UpsertAssignmentRequest},
    response::{
        AssignmentDetailsResponse, AssignmentEnvelope, DeleteResponse, FeedEntry,
        SubmissionEnvelope,
    },
};

/// Create a new assignment
pub async fn create_assignment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<UpsertAssignmentRequest>,
) -> AppResult<Json<AssignmentEnvelope>> {
    payload.validate()?;

    let created = AssignmentService::create(state.assignments(), &auth_user, payload).await?;

    Ok(Json(created))
}

/// Fully replace an assignment's fields and roster
pub async fn update_assignment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpsertAssignmentRequest>,
) -> AppResult<Json<AssignmentEnvelope>> {
    payload.validate()?;

    let updated = AssignmentService::update(state.assignments(), &auth_user, id, payload).await?;

    Ok(Json(updated))
}

/// Delete an assignment, cascading to roster and submissions
pub async fn delete_assignment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeleteResponse>> {
    let confirmation = AssignmentService::delete(state.assignments(), &auth_user, id).await?;

    Ok(Json(confirmation))
}

/// Submit to an assignment
pub async fn submit(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SubmitRequest>,
) -> AppResult<Json<SubmissionEnvelope>> {
    payload.validate()?;

    let submission = AssignmentService::submit(state.assignments(), &auth_user, id, payload).await?;

    Ok(Json(submission))
}

/// Role-shaped assignment detail view
pub async fn get_assignment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<AssignmentDetailsResponse>> {
    let details = AssignmentService::get_details(state.assignments(), &auth_user, id).await?;

    Ok(Json(details))
}

/// Assignment feed with derived statuses
pub async fn assignment_feed(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<FeedQuery>,
) -> AppResult<Json<Vec<FeedEntry>>> {
    let rows = AssignmentService::feed(state.assignments(), &auth_user, query).await?;

    Ok(Json(rows))
}
