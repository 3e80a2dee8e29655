use crate::errors::AppError;
use crate::models::profile::Profile;

/// Required-field checks for a profile save.
pub fn validate_profile(profile: &Profile) -> Result<(), AppError> {
    if profile.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }
    if profile.location.trim().is_empty() {
        return Err(AppError::Validation("location is required".to_string()));
    }
    if profile.skills.iter().any(|s| s.trim().is_empty()) {
        return Err(AppError::Validation("skills cannot contain blank entries".to_string()));
    }
    Ok(())
}
