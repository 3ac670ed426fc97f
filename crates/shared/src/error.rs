use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] ValidationErrors),

    #[error("forbidden")]
    Forbidden,

    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        match value {
            sqlx::Error::RowNotFound => Self::NotFound,
            value => Self::Unknown(value.into()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Unknown(value.into())
    }
}

impl From<std::time::SystemTimeError> for Error {
    fn from(value: std::time::SystemTimeError) -> Self {
        Self::Unknown(value.into())
    }
}

/// Builds a single-field validation failure with a human readable message.
pub fn invalid(field: &'static str, code: &'static str, message: impl Into<Cow<'static, str>>) -> Error {
    let mut errors = ValidationErrors::new();
    errors.add(field, ValidationError::new(code).with_message(message.into()));

    Error::Validate(errors)
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Server(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Server(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Server(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err: Error = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, Error::NotFound));
    }

    #[test]
    fn invalid_carries_field_message() {
        let Error::Validate(errors) = invalid("title", "required", "Title is required") else {
            panic!("expected validation error");
        };

        let field_errors = errors.field_errors();
        let title = field_errors.get("title").expect("title error");
        assert_eq!(title[0].code, "required");
        assert_eq!(
            title[0].message.as_deref(),
            Some("Title is required")
        );
    }
}
