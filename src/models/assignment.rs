//! Assignment model and derived status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Assignment database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Assignment {
    pub id: Uuid,
    /// Owning tutor; immutable after creation.
    pub tutor_id: Uuid,
    pub description: String,
    pub published_at: DateTime<Utc>,
    pub deadline: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Assignment {
    /// Whether `now` lies inside the submission window
    /// `[published_at, deadline]`.
    pub fn is_open(&self, now: DateTime<Utc>) -> bool {
        now >= self.published_at && now <= self.deadline
    }

    /// Status as seen by the owning tutor.
    pub fn tutor_status(&self, now: DateTime<Utc>) -> AssignmentStatus {
        if self.published_at > now {
            AssignmentStatus::Scheduled
        } else {
            AssignmentStatus::Ongoing
        }
    }

    /// Status as seen by a rostered student, given whether that student has
    /// already submitted.
    pub fn student_status(&self, has_submission: bool, now: DateTime<Utc>) -> AssignmentStatus {
        if has_submission {
            AssignmentStatus::Submitted
        } else if self.deadline < now {
            AssignmentStatus::Overdue
        } else {
            AssignmentStatus::Pending
        }
    }
}

/// Derived assignment status, computed at read time and never stored.
///
/// `Scheduled`/`Ongoing` are tutor-facing; `Submitted`/`Overdue`/`Pending`
/// are student-facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    Scheduled,
    Ongoing,
    Submitted,
    Overdue,
    Pending,
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Ongoing => "ONGOING",
            Self::Submitted => "SUBMITTED",
            Self::Overdue => "OVERDUE",
            Self::Pending => "PENDING",
        }
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
