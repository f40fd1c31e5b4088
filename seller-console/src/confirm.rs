//! Confirmation service
//!
//! Anything that must ask the seller before acting (e.g. deleting a
//! combination row) receives a [`ConfirmService`] explicitly. There is no
//! process-wide registration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Dialog content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmRequest {
    pub title: String,
    pub content: String,
    pub cancel_text: String,
    pub confirm_text: String,
}

impl ConfirmRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            cancel_text: "아니요".to_string(),
            confirm_text: "예".to_string(),
        }
    }

    /// Dialog shown before deleting a combination row
    pub fn remove_combination() -> Self {
        Self::new("해당 옵션 조합 삭제", "해당 옵션 조합을 삭제하시겠습니까?")
    }
}

#[async_trait]
pub trait ConfirmService: Send + Sync {
    /// `true` when the seller accepted
    async fn confirm(&self, request: &ConfirmRequest) -> bool;
}

/// Answers every request the same way (non-interactive runs, tests)
#[derive(Debug, Clone, Copy)]
pub struct StaticConfirm {
    answer: bool,
}

impl StaticConfirm {
    pub fn new(answer: bool) -> Self {
        Self { answer }
    }

    pub fn accept() -> Self {
        Self::new(true)
    }

    pub fn decline() -> Self {
        Self::new(false)
    }
}

#[async_trait]
impl ConfirmService for StaticConfirm {
    async fn confirm(&self, request: &ConfirmRequest) -> bool {
        tracing::debug!(title = %request.title, answer = self.answer, "Auto-answered confirmation");
        self.answer
    }
}
