//! Input validation utilities

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_REMARK_LENGTH};

/// Validate username format
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < 3 {
        return Err("Username must be at least 3 characters");
    }
    if username.len() > 32 {
        return Err("Username must be at most 32 characters");
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return Err("Username can only contain letters, numbers, underscores, and hyphens");
    }
    if !username
        .chars()
        .next()
        .map(|c| c.is_alphabetic())
        .unwrap_or(false)
    {
        return Err("Username must start with a letter");
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    if password.len() > 128 {
        return Err("Password must be at most 128 characters");
    }
    Ok(())
}

/// Validate an assignment description (non-blank text)
pub fn validate_description(description: &str) -> Result<(), &'static str> {
    if description.trim().is_empty() {
        return Err("description must not be blank");
    }
    if description.len() > MAX_DESCRIPTION_LENGTH as usize {
        return Err("description is too long");
    }
    Ok(())
}

/// Validate a submission remark (non-blank text)
pub fn validate_remark(remark: &str) -> Result<(), &'static str> {
    if remark.trim().is_empty() {
        return Err("Remark is required");
    }
    if remark.len() > MAX_REMARK_LENGTH as usize {
        return Err("Remark is too long");
    }
    Ok(())
}
