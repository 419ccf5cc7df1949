//! Database module
//!
//! This module holds the storage contracts, their Postgres implementation,
//! and migration plumbing.

pub mod postgres;
pub mod store;

use sqlx::PgPool;

pub use postgres::PgStore;
pub use store::{AssignmentStore, NewAssignment, StudentFeedRow, UserStore};

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
