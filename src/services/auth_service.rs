//! Authentication service

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    db::store::UserStore,
    error::{AppError, AppResult},
    models::{Role, User},
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub username: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user
    pub async fn register(
        store: &dyn UserStore,
        username: &str,
        password: &str,
        role: Role,
    ) -> AppResult<User> {
        if store.find_user_by_username(username).await?.is_some() {
            return Err(AppError::AlreadyExists("Username already taken".to_string()));
        }

        let password_hash = Self::hash_password(password)?;

        let user = store
            .create_user(username, &password_hash, role.as_str())
            .await?;

        Ok(user)
    }

    /// Login with username and password
    pub async fn login(
        store: &dyn UserStore,
        config: &Config,
        username: &str,
        password: &str,
    ) -> AppResult<(User, String, i64)> {
        let user = store
            .find_user_by_username(username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !Self::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        let (access_token, expires_in) = Self::generate_access_token(&user, config)?;

        Ok((user, access_token, expires_in))
    }

    /// Generate a JWT access token for a user
    pub fn generate_access_token(user: &User, config: &Config) -> AppResult<(String, i64)> {
        let now = Utc::now();
        let expires_in = config.jwt.expiry_hours * 3600;
        let exp = now + Duration::hours(config.jwt.expiry_hours);

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            role: user.role.clone(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt.secret.as_bytes()),
        )?;

        Ok((token, expires_in))
    }

    /// Verify a JWT token and return its claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(data.claims)
    }

    /// Hash a password with Argon2
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verify a password against its hash
    pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {e}")))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
