use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A contact form submission, frozen at submit time. Each delivery channel
/// receives its own clone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactSubmission {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Email is required"))]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Message is required"))]
    pub message: String,
}

impl ContactSubmission {
    /// Company name, ignoring blank input.
    pub fn company(&self) -> Option<&str> {
        self.company
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }

    Ok(())
}
