use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};

/// Value whose uniqueness is checked against the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DuplicationKind {
    Email,
    MarketName,
    ProductName,
}

impl DuplicationKind {
    pub fn error_code(self) -> ErrorCode {
        match self {
            DuplicationKind::Email => ErrorCode::EmailDuplicate,
            DuplicationKind::MarketName => ErrorCode::MarketNameDuplicate,
            DuplicationKind::ProductName => ErrorCode::ProductNameDuplicate,
        }
    }
}

/// Answers whether a value is still free (e.g. the duplication endpoint)
#[async_trait]
pub trait DuplicationSource: Send + Sync {
    async fn is_available(&self, kind: DuplicationKind, value: &str) -> AppResult<bool>;
}

/// Duplication check with a per `(kind, value)` answer cache
///
/// Only answers are cached; a failed lookup is retried on the next check.
pub struct DuplicationChecker<S> {
    source: S,
    cache: DashMap<(DuplicationKind, String), bool>,
}

impl<S: DuplicationSource> DuplicationChecker<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: DashMap::new(),
        }
    }

    /// `Ok(())` when the value is free. Blank values are left to the
    /// required-field check.
    pub async fn check(&self, kind: DuplicationKind, value: &str) -> AppResult<()> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(());
        }

        let key = (kind, value.to_string());
        let cached = self.cache.get(&key).map(|entry| *entry.value());
        let available = match cached {
            Some(available) => available,
            None => {
                let available = self.source.is_available(kind, value).await?;
                tracing::debug!(?kind, value, available, "Duplication lookup");
                self.cache.insert(key, available);
                available
            }
        };

        if available {
            Ok(())
        } else {
            Err(AppError::new(kind.error_code()).with_detail("value", value))
        }
    }

    pub fn cached(&self, kind: DuplicationKind, value: &str) -> Option<bool> {
        self.cache
            .get(&(kind, value.trim().to_string()))
            .map(|entry| *entry.value())
    }

    /// Forget one answer (e.g. after the value was registered)
    pub fn invalidate(&self, kind: DuplicationKind, value: &str) {
        self.cache.remove(&(kind, value.trim().to_string()));
    }

    pub fn clear(&self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeSource {
        taken: HashSet<(DuplicationKind, String)>,
        lookups: Arc<AtomicUsize>,
        fail: bool,
    }

    impl FakeSource {
        fn new(taken: &[(DuplicationKind, &str)]) -> (Self, Arc<AtomicUsize>) {
            let lookups = Arc::new(AtomicUsize::new(0));
            let source = Self {
                taken: taken.iter().map(|(k, v)| (*k, v.to_string())).collect(),
                lookups: lookups.clone(),
                fail: false,
            };
            (source, lookups)
        }
    }

    #[async_trait]
    impl DuplicationSource for FakeSource {
        async fn is_available(&self, kind: DuplicationKind, value: &str) -> AppResult<bool> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AppError::internal("lookup failed"));
            }
            Ok(!self.taken.contains(&(kind, value.to_string())))
        }
    }

    #[tokio::test]
    async fn test_taken_value_reports_kind_message() {
        let (source, _) = FakeSource::new(&[
            (DuplicationKind::Email, "a@b.com"),
            (DuplicationKind::MarketName, "오늘의마켓"),
        ]);
        let checker = DuplicationChecker::new(source);

        let err = checker
            .check(DuplicationKind::Email, "a@b.com")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmailDuplicate);
        assert_eq!(err.message, "이미 사용중인 이메일입니다.");

        let err = checker
            .check(DuplicationKind::MarketName, " 오늘의마켓 ")
            .await
            .unwrap_err();
        assert_eq!(err.message, "이미 사용중인 마켓명입니다.");

        // same value, different kind
        assert!(checker.check(DuplicationKind::MarketName, "a@b.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_answers_are_cached() {
        let (source, lookups) = FakeSource::new(&[]);
        let checker = DuplicationChecker::new(source);

        checker.check(DuplicationKind::ProductName, "머그컵").await.unwrap();
        checker.check(DuplicationKind::ProductName, "머그컵 ").await.unwrap();
        assert_eq!(lookups.load(Ordering::SeqCst), 1);
        assert_eq!(checker.cached(DuplicationKind::ProductName, "머그컵"), Some(true));

        checker.invalidate(DuplicationKind::ProductName, "머그컵");
        assert_eq!(checker.cached(DuplicationKind::ProductName, "머그컵"), None);
        checker.check(DuplicationKind::ProductName, "머그컵").await.unwrap();
        assert_eq!(lookups.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let (mut source, lookups) = FakeSource::new(&[]);
        source.fail = true;
        let checker = DuplicationChecker::new(source);

        assert!(checker.check(DuplicationKind::Email, "x@y.com").await.is_err());
        assert!(checker.check(DuplicationKind::Email, "x@y.com").await.is_err());
        assert_eq!(lookups.load(Ordering::SeqCst), 2);
        assert_eq!(checker.cached(DuplicationKind::Email, "x@y.com"), None);
    }

    #[tokio::test]
    async fn test_blank_value_skips_lookup() {
        let (source, lookups) = FakeSource::new(&[]);
        let checker = DuplicationChecker::new(source);
        assert!(checker.check(DuplicationKind::Email, "  ").await.is_ok());
        assert_eq!(lookups.load(Ordering::SeqCst), 0);
    }
}
