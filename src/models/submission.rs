//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Submission database model
///
/// Immutable once created; at most one per `(assignment_id, student_id)`,
/// enforced by a database unique constraint.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub student_id: Uuid,
    pub remark: String,
    pub created_at: DateTime<Utc>,
}

/// Submission joined with the submitting student's username, for the tutor
/// detail view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubmissionWithStudent {
    pub id: Uuid,
    pub student_id: Uuid,
    pub username: String,
    pub remark: String,
    pub created_at: DateTime<Utc>,
}
