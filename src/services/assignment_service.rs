//! Assignment service
//!
//! Orchestrates the assignment lifecycle: validation, authorization, one
//! atomic store call per mutation, and status derivation for reads.
//! Validation and authorization always precede the store call, so a
//! rejected request never creates partial state.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    db::store::{AssignmentStore, NewAssignment},
    error::{AppError, AppResult},
    handlers::assignments::{
        request::{FeedQuery, SubmitRequest, UpsertAssignmentRequest},
        response::{
            AssignmentDetailsResponse, AssignmentEnvelope, AssignmentResponse, DeleteResponse,
            FeedEntry, OwnSubmission, SubmissionEnvelope, SubmissionEntry, SubmissionResponse,
        },
    },
    middleware::auth::AuthenticatedUser,
    models::Role,
    services::authorization,
    utils::{time, validation},
};

/// Assignment service for business logic
pub struct AssignmentService;

impl AssignmentService {
    /// Create a new assignment with its initial roster.
    pub async fn create(
        store: &dyn AssignmentStore,
        principal: &AuthenticatedUser,
        payload: UpsertAssignmentRequest,
    ) -> AppResult<AssignmentEnvelope> {
        authorization::require_tutor(principal, "create assignments")?;

        let (published_at, deadline) = Self::validate_fields(&payload)?;

        let assignment = store
            .create_assignment(NewAssignment {
                tutor_id: principal.id,
                description: payload.description,
                published_at,
                deadline,
                students: payload.students,
            })
            .await?;

        Ok(AssignmentEnvelope {
            message: "Assignment created".to_string(),
            assignment: AssignmentResponse::from(&assignment),
        })
    }

    /// Fully replace an assignment's fields and roster.
    pub async fn update(
        store: &dyn AssignmentStore,
        principal: &AuthenticatedUser,
        id: Uuid,
        payload: UpsertAssignmentRequest,
    ) -> AppResult<AssignmentEnvelope> {
        authorization::require_tutor(principal, "update assignments")?;

        let (published_at, deadline) = Self::validate_fields(&payload)?;

        let existing = store
            .find_assignment(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))?;
        authorization::require_owner(principal, &existing)?;

        // Full replacement semantics: students omitted from the new roster
        // lose membership, but their prior submissions are left in place.
        let assignment = store
            .replace_assignment(
                id,
                NewAssignment {
                    tutor_id: existing.tutor_id,
                    description: payload.description,
                    published_at,
                    deadline,
                    students: payload.students,
                },
            )
            .await?;

        Ok(AssignmentEnvelope {
            message: "Assignment updated".to_string(),
            assignment: AssignmentResponse::from(&assignment),
        })
    }

    /// Delete an assignment with its roster and submissions.
    pub async fn delete(
        store: &dyn AssignmentStore,
        principal: &AuthenticatedUser,
        id: Uuid,
    ) -> AppResult<DeleteResponse> {
        authorization::require_tutor(principal, "delete assignments")?;

        let existing = store
            .find_assignment(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))?;
        authorization::require_owner(principal, &existing)?;

        store.delete_assignment(id).await?;

        Ok(DeleteResponse {
            message: "Assignment deleted successfully".to_string(),
        })
    }

    /// Submit to an assignment inside its submission window.
    pub async fn submit(
        store: &dyn AssignmentStore,
        principal: &AuthenticatedUser,
        assignment_id: Uuid,
        payload: SubmitRequest,
    ) -> AppResult<SubmissionEnvelope> {
        authorization::require_student(principal, "submit")?;

        validation::validate_remark(&payload.remark)
            .map_err(|msg| AppError::Validation(msg.to_string()))?;

        let assignment = store
            .find_assignment(assignment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))?;

        let now = time::now_utc();
        if now < assignment.published_at {
            return Err(AppError::Validation(
                "Assignment is not published yet".to_string(),
            ));
        }
        if now > assignment.deadline {
            return Err(AppError::Validation("Deadline has passed".to_string()));
        }

        authorization::require_on_roster(store, assignment_id, principal.id).await?;

        // Optimization only: the store's unique constraint is the source of
        // truth for duplicates, including racing concurrent submits.
        if store
            .find_submission(assignment_id, principal.id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("Already submitted".to_string()));
        }

        let submission = store
            .insert_submission(assignment_id, principal.id, payload.remark.trim())
            .await?;

        Ok(SubmissionEnvelope {
            message: "Submission added".to_string(),
            submission: SubmissionResponse::from(&submission),
        })
    }

    /// Role-shaped assignment detail view.
    pub async fn get_details(
        store: &dyn AssignmentStore,
        principal: &AuthenticatedUser,
        assignment_id: Uuid,
    ) -> AppResult<AssignmentDetailsResponse> {
        let assignment = store
            .find_assignment(assignment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))?;

        match principal.role {
            Role::Tutor => {
                authorization::require_owner(principal, &assignment)?;

                let submissions = store.submissions_with_students(assignment_id).await?;

                Ok(AssignmentDetailsResponse::Tutor {
                    assignment: AssignmentResponse::from(&assignment),
                    submissions: submissions.iter().map(SubmissionEntry::from).collect(),
                })
            }
            Role::Student => {
                authorization::require_on_roster(store, assignment_id, principal.id).await?;

                let submission = store.find_submission(assignment_id, principal.id).await?;

                Ok(AssignmentDetailsResponse::Student {
                    assignment: AssignmentResponse::from(&assignment),
                    submission: submission.as_ref().map(OwnSubmission::from),
                })
            }
        }
    }

    /// Assignment feed with derived statuses and query filters.
    pub async fn feed(
        store: &dyn AssignmentStore,
        principal: &AuthenticatedUser,
        query: FeedQuery,
    ) -> AppResult<Vec<FeedEntry>> {
        let now = time::now_utc();

        let mut rows = match principal.role {
            Role::Tutor => store
                .assignments_by_tutor(principal.id)
                .await?
                .iter()
                .map(|a| FeedEntry::new(a, a.tutor_status(now)))
                .collect::<Vec<_>>(),
            Role::Student => store
                .assignments_for_student(principal.id)
                .await?
                .iter()
                .map(|row| {
                    let status = row
                        .assignment
                        .student_status(row.submission_id.is_some(), now);
                    FeedEntry::new(&row.assignment, status)
                })
                .collect::<Vec<_>>(),
        };

        // The publishedAt filter narrows by literal status value regardless
        // of caller role; on student feeds it therefore always yields an
        // empty result. Observed behavior, kept pending a product decision.
        if let Some(filter) = query.published_at.as_deref() {
            if filter == "SCHEDULED" || filter == "ONGOING" {
                rows.retain(|r| r.status.as_str() == filter);
            }
        }

        if principal.role == Role::Student {
            if let Some(filter) = query.status.as_deref() {
                if filter != "ALL" {
                    rows.retain(|r| r.status.as_str() == filter);
                }
            }
        }

        Ok(rows)
    }

    /// Shared field validation for create and update: presence, canonical
    /// timestamp format, temporal ordering, non-empty roster.
    fn validate_fields(
        payload: &UpsertAssignmentRequest,
    ) -> AppResult<(DateTime<Utc>, DateTime<Utc>)> {
        validation::validate_description(&payload.description)
            .map_err(|msg| AppError::Validation(msg.to_string()))?;

        let published_at = time::parse_instant(&payload.published_at).ok_or_else(|| {
            AppError::Validation(
                "Invalid date format. Use an RFC 3339 timestamp like 2026-01-12T10:00:00Z"
                    .to_string(),
            )
        })?;
        let deadline = time::parse_instant(&payload.deadline).ok_or_else(|| {
            AppError::Validation(
                "Invalid date format. Use an RFC 3339 timestamp like 2026-01-12T10:00:00Z"
                    .to_string(),
            )
        })?;

        let now = time::now_utc();
        if published_at <= now {
            return Err(AppError::Validation(
                "publishedAt must be a future date/time".to_string(),
            ));
        }
        if deadline <= published_at {
            return Err(AppError::Validation(
                "deadline must be later than publishedAt".to_string(),
            ));
        }

        if payload.students.is_empty() {
            return Err(AppError::Validation(
                "At least one student must be assigned".to_string(),
            ));
        }

        Ok((published_at, deadline))
    }
}
