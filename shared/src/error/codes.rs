//! Unified error codes for the seller console
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Account errors (sign-up duplication checks)
//! - 6xxx: Product errors (option groups, variant combinations)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the front-end can match on
/// them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Account ====================
    /// Email is already registered
    EmailDuplicate = 1101,
    /// Market name is already taken
    MarketNameDuplicate = 1102,

    // ==================== 6xxx: Product ====================
    /// No option group was entered
    OptionGroupsEmpty = 6401,
    /// An option group has no name
    OptionGroupNameRequired = 6402,
    /// Two option groups share a name
    OptionGroupNameDuplicate = 6403,
    /// An option group has no filled items
    OptionItemsEmpty = 6404,
    /// Two items in one group share a name
    OptionItemNameDuplicate = 6405,
    /// Option groups exist but no combinations were generated
    CombinationsNotGenerated = 6406,
    /// Stored combinations no longer match the option groups
    CombinationsStale = 6407,
    /// No (or more than one) representative combination
    RepresentativeRequired = 6408,
    /// Combination not found
    CombinationNotFound = 6409,
    /// Option group not found
    OptionGroupNotFound = 6410,
    /// Option item not found
    OptionItemNotFound = 6411,
    /// The last option group cannot be removed
    LastOptionGroup = 6412,
    /// The last item of a group cannot be removed
    LastOptionItem = 6413,
    /// Product name is already used by this seller
    ProductNameDuplicate = 6414,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9002,
    /// File or stream IO error
    IoError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Success",
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field missing",
            ErrorCode::ValueOutOfRange => "Value out of range",

            // Account
            ErrorCode::EmailDuplicate => "이미 사용중인 이메일입니다.",
            ErrorCode::MarketNameDuplicate => "이미 사용중인 마켓명입니다.",

            // Product
            ErrorCode::OptionGroupsEmpty => "옵션을 입력해 주세요.",
            ErrorCode::OptionGroupNameRequired => "옵션명을 입력해 주세요.",
            ErrorCode::OptionGroupNameDuplicate => "옵션명이 중복되었습니다.",
            ErrorCode::OptionItemsEmpty => "옵션 항목을 입력해 주세요.",
            ErrorCode::OptionItemNameDuplicate => "중복된 옵션 항목이 있습니다.",
            ErrorCode::CombinationsNotGenerated => {
                "'옵션 목록으로 이동' 버튼을 눌러 옵션 목록을 생성해 주세요."
            }
            ErrorCode::CombinationsStale => {
                "옵션 설정이 변경되었습니다. '옵션 목록으로 이동' 버튼을 눌러 옵션 목록을 다시 생성해 주세요."
            }
            ErrorCode::RepresentativeRequired => "대표 옵션을 지정해 주세요.",
            ErrorCode::CombinationNotFound => "Option combination not found",
            ErrorCode::OptionGroupNotFound => "Option group not found",
            ErrorCode::OptionItemNotFound => "Option item not found",
            ErrorCode::LastOptionGroup => "At least one option group is required",
            ErrorCode::LastOptionItem => "At least one option item is required",
            ErrorCode::ProductNameDuplicate => "이미 사용중인 상품명입니다.",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::IoError => "IO error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Account
            1101 => Ok(ErrorCode::EmailDuplicate),
            1102 => Ok(ErrorCode::MarketNameDuplicate),

            // Product
            6401 => Ok(ErrorCode::OptionGroupsEmpty),
            6402 => Ok(ErrorCode::OptionGroupNameRequired),
            6403 => Ok(ErrorCode::OptionGroupNameDuplicate),
            6404 => Ok(ErrorCode::OptionItemsEmpty),
            6405 => Ok(ErrorCode::OptionItemNameDuplicate),
            6406 => Ok(ErrorCode::CombinationsNotGenerated),
            6407 => Ok(ErrorCode::CombinationsStale),
            6408 => Ok(ErrorCode::RepresentativeRequired),
            6409 => Ok(ErrorCode::CombinationNotFound),
            6410 => Ok(ErrorCode::OptionGroupNotFound),
            6411 => Ok(ErrorCode::OptionItemNotFound),
            6412 => Ok(ErrorCode::LastOptionGroup),
            6413 => Ok(ErrorCode::LastOptionItem),
            6414 => Ok(ErrorCode::ProductNameDuplicate),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::ConfigError),
            9003 => Ok(ErrorCode::IoError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
