//! Profile update DTO and the rules the profile store enforces on it.

use serde::Deserialize;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::error::CoreError;

/// Partial profile update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateProfile {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(max = 32, message = "phone must be at most 32 characters"))]
    pub phone: Option<String>,
    #[validate(length(max = 200, message = "university must be at most 200 characters"))]
    pub university: Option<String>,
    #[validate(length(max = 500, message = "bio must be at most 500 characters"))]
    pub bio: Option<String>,
    #[validate(url(message = "avatarUrl must be a valid URL"))]
    pub avatar_url: Option<String>,
}

impl UpdateProfile {
    /// `true` when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.university.is_none()
            && self.bio.is_none()
            && self.avatar_url.is_none()
    }
}

/// Validate an update, flattening `validator` errors into one message.
pub fn validate_update(input: &UpdateProfile) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe_errors(&errors)))
}

/// Render field errors as `"field: message; field: message"`, sorted by
/// field name so the output is stable.
fn describe_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .errors()
        .iter()
        .filter_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(list) => Some(
                list.iter()
                    .map(|e| match &e.message {
                        Some(msg) => format!("{field}: {msg}"),
                        None => format!("{field}: invalid value ({})", e.code),
                    })
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            _ => None,
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
