//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod assignment;
pub mod submission;
pub mod user;

pub use assignment::*;
pub use submission::*;
pub use user::*;
