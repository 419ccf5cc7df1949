//! Authentication handler implementations

use axum::{Json, extract::State};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    services::AuthService,
    state::AppState,
    utils::validation,
};

use super::{
    request::{LoginRequest, RegisterRequest},
    response::{AuthResponse, RegisterResponse, UserResponse},
};

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<Json<RegisterResponse>> {
    payload.validate()?;
    validation::validate_username(&payload.username)
        .map_err(|msg| AppError::Validation(msg.to_string()))?;
    validation::validate_password(&payload.password)
        .map_err(|msg| AppError::Validation(msg.to_string()))?;

    let user = AuthService::register(
        state.users(),
        &payload.username,
        &payload.password,
        payload.role,
    )
    .await?;

    Ok(Json(RegisterResponse {
        message: "User registered successfully".to_string(),
        user: UserResponse {
            id: user.id,
            username: user.username,
            role: user.role,
            created_at: user.created_at,
        },
    }))
}

/// Login with username and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let (user, token, expires_in) = AuthService::login(
        state.users(),
        state.config(),
        &payload.username,
        &payload.password,
    )
    .await?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        token_type: "Bearer".to_string(),
        expires_in,
        user: UserResponse {
            id: user.id,
            username: user.username,
            role: user.role,
            created_at: user.created_at,
        },
    }))
}
