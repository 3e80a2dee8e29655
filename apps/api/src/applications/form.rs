//! Multipart decoding for the application form.

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Raw form fields as submitted. Nothing is validated here.
#[derive(Debug, Clone, Default)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
    pub availability: String,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub resume: Option<ResumeUpload>,
}

impl ApplicationForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = ApplicationForm::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();
            if name == "resume" {
                let file_name = field.file_name().unwrap_or("resume").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(multipart_error)?;
                form.resume = Some(ResumeUpload {
                    file_name,
                    content_type,
                    bytes,
                });
                continue;
            }

            let value = field.text().await.map_err(multipart_error)?;
            match name.as_str() {
                "full_name" => form.full_name = value,
                "email" => form.email = value,
                "phone" => form.phone = value,
                "cover_letter" => form.cover_letter = value,
                "availability" => form.availability = value,
                "linkedin_url" => form.linkedin_url = Some(value),
                "portfolio_url" => form.portfolio_url = Some(value),
                other => debug!("Ignoring unknown application field '{other}'"),
            }
        }

        Ok(form)
    }
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(e.body_text())
    }
}
