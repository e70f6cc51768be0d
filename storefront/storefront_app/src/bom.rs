use std::path::PathBuf;

use thiserror::Error;
use validator::{Validate, ValidationError};

/// A bill-of-materials upload request.
///
/// The file is accepted as-is, it is never opened or parsed.
#[derive(serde::Serialize, serde::Deserialize, Validate, Debug, Clone, PartialEq, Eq, Default)]
pub struct BomSubmission {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub file: Option<PathBuf>,
}

impl BomSubmission {
    /// The name is checked before the email, only the first problem is reported.
    pub fn check(&self) -> Result<(), BomValidationError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let field_errors = errors.field_errors();
        if field_errors.contains_key("name") {
            Err(BomValidationError::NameRequired)
        } else {
            Err(BomValidationError::InvalidEmail {
                email: self.email.clone(),
            })
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Error, Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BomValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Invalid email. email: '{email}'")]
    InvalidEmail { email: String },
}

impl BomValidationError {
    /// Translation key of the user-facing message.
    pub fn message_key(&self) -> &'static str {
        match self {
            BomValidationError::NameRequired => "bom-name-required",
            BomValidationError::InvalidEmail {
                ..
            } => "bom-email-invalid",
        }
    }
}
