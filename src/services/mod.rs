//! Business logic services

pub mod assignment_service;
pub mod auth_service;
pub mod authorization;

pub use assignment_service::AssignmentService;
pub use auth_service::AuthService;
