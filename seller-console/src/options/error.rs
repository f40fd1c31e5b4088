//! Option generation errors
//!
//! Every variant renders the exact message shown to the seller. None of them
//! is fatal: the caller displays the message and the seller edits and retries.

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Why stored combinations no longer match the option groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaleReason {
    /// Row count differs from the product of filled item counts
    CountMismatch { expected: usize, actual: usize },
    /// A row has a different number of entries than there are groups
    ArityMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// A row names an item that is no longer in its group
    UnknownItem {
        row: usize,
        position: usize,
        name: String,
    },
    /// Two rows name the same combination
    DuplicateRow { row: usize, first: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("옵션을 입력해 주세요.")]
    EmptyInput,

    /// `index` is 1-based, matching the "옵션 N" heading in the form
    #[error("{index}번째 옵션의 옵션명을 입력해 주세요.")]
    MissingGroupName { index: usize },

    #[error("옵션명 '{name}'이(가) 중복되었습니다.")]
    DuplicateGroupName { name: String },

    #[error("'{group}' 옵션의 옵션 항목을 입력해 주세요.")]
    EmptyGroupItems { group: String },

    #[error("'{group}' 옵션에 중복된 옵션 항목 '{item}'이(가) 있습니다.")]
    DuplicateItemName { group: String, item: String },

    #[error("'옵션 목록으로 이동' 버튼을 눌러 옵션 목록을 생성해 주세요.")]
    CombinationsNotGenerated,

    #[error(
        "옵션 설정이 변경되었습니다. '옵션 목록으로 이동' 버튼을 눌러 옵션 목록을 다시 생성해 주세요."
    )]
    CombinationsStale(StaleReason),

    #[error("대표 옵션을 지정해 주세요.")]
    RepresentativeRequired { count: usize },
}

impl OptionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyInput => ErrorCode::OptionGroupsEmpty,
            Self::MissingGroupName { .. } => ErrorCode::OptionGroupNameRequired,
            Self::DuplicateGroupName { .. } => ErrorCode::OptionGroupNameDuplicate,
            Self::EmptyGroupItems { .. } => ErrorCode::OptionItemsEmpty,
            Self::DuplicateItemName { .. } => ErrorCode::OptionItemNameDuplicate,
            Self::CombinationsNotGenerated => ErrorCode::CombinationsNotGenerated,
            Self::CombinationsStale(_) => ErrorCode::CombinationsStale,
            Self::RepresentativeRequired { .. } => ErrorCode::RepresentativeRequired,
        }
    }
}

impl From<OptionError> for AppError {
    fn from(err: OptionError) -> Self {
        let message = err.to_string();
        let app = AppError::with_message(err.code(), message);
        match err {
            OptionError::MissingGroupName { index } => app.with_detail("groupIndex", index),
            OptionError::DuplicateGroupName { name } => app.with_detail("group", name),
            OptionError::EmptyGroupItems { group } => app.with_detail("group", group),
            OptionError::DuplicateItemName { group, item } => {
                app.with_detail("group", group).with_detail("item", item)
            }
            OptionError::CombinationsNotGenerated | OptionError::CombinationsStale(_) => {
                app.with_detail("field", "optionCombinations")
            }
            OptionError::RepresentativeRequired { count } => app.with_detail("selected", count),
            OptionError::EmptyInput => app,
        }
    }
}
