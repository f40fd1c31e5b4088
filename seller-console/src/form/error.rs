//! Form action errors

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use crate::options::OptionError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Option(#[from] OptionError),

    /// Field-level rule violation (product name, price, ...)
    #[error("{message}")]
    Field {
        field: &'static str,
        code: ErrorCode,
        message: String,
    },

    #[error("Option group not found: {0}")]
    GroupNotFound(String),

    #[error("Option item not found: {item} (group {group})")]
    ItemNotFound { group: String, item: String },

    #[error("At least one option group is required")]
    LastGroup,

    #[error("At least one option item is required")]
    LastItem,

    #[error("Option combination not found: {0}")]
    CombinationNotFound(String),
}

impl FormError {
    pub fn field(field: &'static str, code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Field {
            field,
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Option(e) => e.code(),
            Self::Field { code, .. } => *code,
            Self::GroupNotFound(_) => ErrorCode::OptionGroupNotFound,
            Self::ItemNotFound { .. } => ErrorCode::OptionItemNotFound,
            Self::LastGroup => ErrorCode::LastOptionGroup,
            Self::LastItem => ErrorCode::LastOptionItem,
            Self::CombinationNotFound(_) => ErrorCode::CombinationNotFound,
        }
    }
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Option(e) => e.into(),
            FormError::Field {
                field,
                code,
                message,
            } => AppError::with_message(code, message).with_detail("field", field),
            FormError::GroupNotFound(ref id) | FormError::CombinationNotFound(ref id) => {
                let id = id.clone();
                AppError::with_message(err.code(), err.to_string()).with_detail("id", id)
            }
            other => AppError::with_message(other.code(), other.to_string()),
        }
    }
}

pub type FormResult<T> = Result<T, FormError>;
