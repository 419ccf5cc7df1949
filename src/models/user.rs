//! User model and roles

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Stored as text in the database; parse with [`Role::from_str`] before
    /// any dispatch on it.
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Closed set of principal roles.
///
/// Role dispatch throughout the service layer matches exhaustively on this
/// enum; a token carrying any other role string is rejected at the
/// authentication boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Tutor,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tutor => "TUTOR",
            Self::Student => "STUDENT",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TUTOR" => Ok(Self::Tutor),
            "STUDENT" => Ok(Self::Student),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_strings() {
        assert_eq!(Role::from_str("TUTOR"), Ok(Role::Tutor));
        assert_eq!(Role::from_str("STUDENT"), Ok(Role::Student));
        assert_eq!(Role::Tutor.as_str(), "TUTOR");
    }

    #[test]
    fn unknown_roles_are_rejected() {
        assert!(Role::from_str("ADMIN").is_err());
        assert!(Role::from_str("tutor").is_err());
        assert!(Role::from_str("").is_err());
    }
}
