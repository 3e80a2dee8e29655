//! Account operations behind the auth handlers.
//!
//! Login only checks that the email exists: the password is accepted unchecked.
//! That is a known missing control, not an oversight, and is logged on every login.

use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::user::User;
use crate::store::{ProfileRepository, UserRepository};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[allow(dead_code)] // accepted but never checked
    pub password: String,
}

/// Form-level checks, in the order the signup form reports them.
pub fn validate_signup(req: &SignupRequest) -> Result<(), AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }
    if req.email.trim().is_empty() {
        return Err(AppError::Validation("email is required".to_string()));
    }
    if req.password != req.confirm_password {
        return Err(AppError::Validation("Passwords do not match".to_string()));
    }
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Validates and creates the account. The password is not stored.
pub async fn signup(users: &dyn UserRepository, req: &SignupRequest) -> Result<User, AppError> {
    validate_signup(req)?;
    let user = users.create(req.name.trim(), req.email.trim()).await?;
    info!("User {} signed up", user.id);
    Ok(user)
}

pub async fn login(users: &dyn UserRepository, req: &LoginRequest) -> Result<User, AppError> {
    let user = users
        .find_by_email(&req.email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;
    warn!("Password not verified for user {}: login is email-only", user.id);
    Ok(user)
}

/// Sets `profile_completed` from whether a profile exists right now.
pub async fn with_profile_status(
    profiles: &dyn ProfileRepository,
    mut user: User,
) -> Result<User, AppError> {
    user.profile_completed = profiles.get(&user.id).await?.is_some();
    Ok(user)
}
