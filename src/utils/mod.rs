//! Utility modules

pub mod time;
pub mod validation;
