//! Application submission: required-field checks, resume storage, append.

use std::path::Path;

use chrono::Utc;
use tracing::{info, warn};

use crate::applications::form::{ApplicationForm, ResumeUpload};
use crate::errors::AppError;
use crate::models::application::JobApplication;
use crate::store::{ApplicationRepository, ResumeStore};

/// Resume file extensions accepted, compared case-insensitively.
pub const RESUME_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// Checks required fields and the resume, returning the accepted resume upload.
pub fn validate_form(form: &ApplicationForm, max_resume_bytes: usize) -> Result<&ResumeUpload, AppError> {
    let required = [
        ("full_name", &form.full_name),
        ("email", &form.email),
        ("phone", &form.phone),
        ("cover_letter", &form.cover_letter),
        ("availability", &form.availability),
    ];
    if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
        return Err(AppError::Validation(format!("{field} is required")));
    }

    let resume = form
        .resume
        .as_ref()
        .filter(|r| !r.bytes.is_empty())
        .ok_or_else(|| AppError::Validation("Please upload your resume".to_string()))?;

    if !has_resume_extension(&resume.file_name) {
        return Err(AppError::Validation(
            "Resume must be a PDF or Word document (.pdf, .doc, .docx)".to_string(),
        ));
    }

    if resume.bytes.len() > max_resume_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "Resume file size must be at most {} bytes",
            max_resume_bytes
        )));
    }

    Ok(resume)
}

/// Stores the resume and appends the application. Returns the stored record unchanged.
pub async fn submit_application(
    applications: &dyn ApplicationRepository,
    resumes: &dyn ResumeStore,
    job_id: &str,
    user_id: &str,
    form: ApplicationForm,
    max_resume_bytes: usize,
) -> Result<JobApplication, AppError> {
    let upload = validate_form(&form, max_resume_bytes)?.clone();
    let resume = resumes
        .put(upload.file_name, upload.content_type, upload.bytes)
        .await?;

    let application = JobApplication {
        job_id: job_id.to_string(),
        user_id: user_id.to_string(),
        full_name: form.full_name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: form.phone.trim().to_string(),
        cover_letter: form.cover_letter,
        resume_url: resume.blob_url(),
        linkedin_url: non_blank(form.linkedin_url),
        portfolio_url: non_blank(form.portfolio_url),
        availability: form.availability.trim().to_string(),
        submitted_at: Utc::now(),
    };

    let stored = match applications.append(application).await {
        Ok(stored) => stored,
        Err(err) => {
            // No application references the blob now.
            if let Err(cleanup) = resumes.remove(resume.id).await {
                warn!("failed to remove orphaned resume {}: {}", resume.id, cleanup);
            }
            return Err(err);
        }
    };
    info!(
        "Application #{} for job {} recorded from user {} ({}, {} bytes, {})",
        applications.count().await?,
        stored.job_id,
        stored.user_id,
        resume.file_name,
        resume.bytes.len(),
        resume.content_type.as_deref().unwrap_or("unknown type")
    );
    Ok(stored)
}

fn has_resume_extension(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            RESUME_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
