//! Classboard - Virtual Classroom Backend
//!
//! This library provides the core functionality for the Classboard platform,
//! a backend managing time-bounded assignments handed from tutors to
//! students.
//!
//! # Features
//!
//! - Assignment lifecycle: create, full replacement update, cascading delete
//! - Time-windowed submission protocol with a hard uniqueness backstop
//! - Role-conditioned views and derived, never-stored statuses
//! - JWT authentication with a closed tutor/student role set
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Stores**: Injected storage contracts, backed by Postgres
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
