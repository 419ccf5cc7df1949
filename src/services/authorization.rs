//! Authorization guards
//!
//! Role and ownership checks applied before any mutation. Role dispatch is
//! exhaustive on the closed [`Role`] enum.

use uuid::Uuid;

use crate::{
    db::store::AssignmentStore,
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::{Assignment, Role},
};

/// Reject callers that are not tutors.
pub fn require_tutor(principal: &AuthenticatedUser, action: &str) -> AppResult<()> {
    match principal.role {
        Role::Tutor => Ok(()),
        Role::Student => Err(AppError::Forbidden(format!("Only tutors can {action}"))),
    }
}

/// Reject callers that are not students.
pub fn require_student(principal: &AuthenticatedUser, action: &str) -> AppResult<()> {
    match principal.role {
        Role::Student => Ok(()),
        Role::Tutor => Err(AppError::Forbidden(format!("Only students can {action}"))),
    }
}

/// Reject tutors that do not own the assignment.
pub fn require_owner(principal: &AuthenticatedUser, assignment: &Assignment) -> AppResult<()> {
    if assignment.tutor_id != principal.id {
        return Err(AppError::Forbidden("Not allowed".to_string()));
    }
    Ok(())
}

/// Reject students that are not on the assignment's roster.
pub async fn require_on_roster(
    store: &dyn AssignmentStore,
    assignment_id: Uuid,
    student_id: Uuid,
) -> AppResult<()> {
    if !store.is_on_roster(assignment_id, student_id).await? {
        return Err(AppError::Forbidden(
            "You are not assigned to this assignment".to_string(),
        ));
    }
    Ok(())
}
