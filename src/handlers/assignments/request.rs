//! Assignment request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_REMARK_LENGTH};

/// Body for creating or fully replacing an assignment.
///
/// Timestamps arrive as strings and are parsed in the service with one
/// canonical format (RFC 3339); a parse failure is a distinct "bad format"
/// rejection, not a temporal-constraint one.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertAssignmentRequest {
    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH))]
    pub description: String,

    /// Start of the submission window, RFC 3339
    pub published_at: String,

    /// End of the submission window, RFC 3339
    pub deadline: String,

    /// Student ids forming the roster; full replacement on update
    pub students: Vec<Uuid>,
}

/// Body for submitting to an assignment
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequest {
    #[validate(length(max = MAX_REMARK_LENGTH))]
    pub remark: String,
}

/// Feed query parameters
#[derive(Debug, Default, Deserialize)]
pub struct FeedQuery {
    /// Narrows by the literal SCHEDULED/ONGOING status value regardless of
    /// caller role; other values are ignored.
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,

    /// Student-only status filter; `ALL` (or absence) disables it.
    pub status: Option<String>,
}
