//! Assignment response DTOs
//!
//! Timestamps in responses are display-formatted strings
//! (`DD Mon YYYY, HH:MM AM/PM`); see `utils::time::format_display`.

use serde::Serialize;
use uuid::Uuid;

use crate::models::{Assignment, AssignmentStatus, Submission, SubmissionWithStudent};
use crate::utils::time::format_display;

/// Assignment as rendered in API responses
#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub id: Uuid,
    pub tutor_id: Uuid,
    pub description: String,
    pub published_at: String,
    pub deadline: String,
}

impl From<&Assignment> for AssignmentResponse {
    fn from(a: &Assignment) -> Self {
        Self {
            id: a.id,
            tutor_id: a.tutor_id,
            description: a.description.clone(),
            published_at: format_display(a.published_at),
            deadline: format_display(a.deadline),
        }
    }
}

/// Envelope for create/update responses
#[derive(Debug, Serialize)]
pub struct AssignmentEnvelope {
    pub message: String,
    pub assignment: AssignmentResponse,
}

/// Confirmation for delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Submission as rendered after a successful submit
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub student_id: Uuid,
    pub remark: String,
    pub submitted_at: String,
}

impl From<&Submission> for SubmissionResponse {
    fn from(s: &Submission) -> Self {
        Self {
            id: s.id,
            assignment_id: s.assignment_id,
            student_id: s.student_id,
            remark: s.remark.clone(),
            submitted_at: format_display(s.created_at),
        }
    }
}

/// Envelope for submit responses
#[derive(Debug, Serialize)]
pub struct SubmissionEnvelope {
    pub message: String,
    pub submission: SubmissionResponse,
}

/// One submission in the tutor detail view
#[derive(Debug, Serialize)]
pub struct SubmissionEntry {
    pub id: Uuid,
    pub student_id: Uuid,
    pub username: String,
    pub remark: String,
    pub submitted_at: String,
}

impl From<&SubmissionWithStudent> for SubmissionEntry {
    fn from(s: &SubmissionWithStudent) -> Self {
        Self {
            id: s.id,
            student_id: s.student_id,
            username: s.username.clone(),
            remark: s.remark.clone(),
            submitted_at: format_display(s.created_at),
        }
    }
}

/// The student's own submission in the student detail view
#[derive(Debug, Serialize)]
pub struct OwnSubmission {
    pub id: Uuid,
    pub remark: String,
    pub submitted_at: String,
}

impl From<&Submission> for OwnSubmission {
    fn from(s: &Submission) -> Self {
        Self {
            id: s.id,
            remark: s.remark.clone(),
            submitted_at: format_display(s.created_at),
        }
    }
}

/// Role-shaped assignment detail view
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AssignmentDetailsResponse {
    Tutor {
        assignment: AssignmentResponse,
        submissions: Vec<SubmissionEntry>,
    },
    Student {
        assignment: AssignmentResponse,
        submission: Option<OwnSubmission>,
    },
}

/// One row of the assignment feed
#[derive(Debug, Serialize)]
pub struct FeedEntry {
    pub id: Uuid,
    pub tutor_id: Uuid,
    pub description: String,
    pub published_at: String,
    pub deadline: String,
    pub status: AssignmentStatus,
}

impl FeedEntry {
    pub fn new(a: &Assignment, status: AssignmentStatus) -> Self {
        Self {
            id: a.id,
            tutor_id: a.tutor_id,
            description: a.description.clone(),
            published_at: format_display(a.published_at),
            deadline: format_display(a.deadline),
            status,
        }
    }
}
