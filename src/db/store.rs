//! Storage contracts
//!
//! The service layer never touches a connection pool directly; it receives
//! these traits as injected dependencies. Every multi-row mutation is a
//! single trait method so that atomicity lives with the implementation, not
//! with the caller.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Assignment, Submission, SubmissionWithStudent, User},
};

/// Replacement payload for creating or fully replacing an assignment.
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub tutor_id: Uuid,
    pub description: String,
    pub published_at: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
    pub students: Vec<Uuid>,
}

/// A rostered assignment paired with the requesting student's own
/// submission id, if any.
#[derive(Debug, Clone)]
pub struct StudentFeedRow {
    pub assignment: Assignment,
    pub submission_id: Option<Uuid>,
}

/// Persistence contract for assignments, roster membership, and submissions.
#[async_trait]
pub trait AssignmentStore: Send + Sync {
    /// Insert an assignment row plus one roster row per student, atomically.
    /// Any roster insert failure aborts the whole operation and leaves no
    /// assignment persisted.
    async fn create_assignment(&self, new: NewAssignment) -> AppResult<Assignment>;

    /// Atomically update the assignment's scalar fields, delete all existing
    /// roster rows, and insert the replacement roster. Full replacement
    /// semantics; prior submissions are untouched.
    async fn replace_assignment(&self, id: Uuid, new: NewAssignment) -> AppResult<Assignment>;

    /// Atomically delete, in dependency order, the assignment's submissions,
    /// its roster rows, and the assignment itself.
    async fn delete_assignment(&self, id: Uuid) -> AppResult<()>;

    async fn find_assignment(&self, id: Uuid) -> AppResult<Option<Assignment>>;

    async fn is_on_roster(&self, assignment_id: Uuid, student_id: Uuid) -> AppResult<bool>;

    async fn find_submission(
        &self,
        assignment_id: Uuid,
        student_id: Uuid,
    ) -> AppResult<Option<Submission>>;

    /// Insert a submission row. The `(assignment_id, student_id)` uniqueness
    /// invariant is enforced here as a hard constraint; a violation is
    /// reported as the same "Already submitted" conflict the service-level
    /// check produces, so concurrent duplicate attempts cannot both succeed.
    async fn insert_submission(
        &self,
        assignment_id: Uuid,
        student_id: Uuid,
        remark: &str,
    ) -> AppResult<Submission>;

    /// All submissions for an assignment, joined with submitter usernames.
    async fn submissions_with_students(
        &self,
        assignment_id: Uuid,
    ) -> AppResult<Vec<SubmissionWithStudent>>;

    /// Every assignment owned by the given tutor.
    async fn assignments_by_tutor(&self, tutor_id: Uuid) -> AppResult<Vec<Assignment>>;

    /// Every assignment on whose roster the student appears, left-joined
    /// with that student's own submission.
    async fn assignments_for_student(&self, student_id: Uuid) -> AppResult<Vec<StudentFeedRow>>;
}

/// Persistence contract for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
        role: &str,
    ) -> AppResult<User>;

    async fn find_user_by_username(&self, username: &str) -> AppResult<Option<User>>;
}
