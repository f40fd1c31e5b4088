use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::core::Config;
use crate::core::config::DEFAULT_DEBOUNCE_MS;

/// Latest-wins debouncer
///
/// Every [`run`](Self::run) takes a generation ticket, waits for the delay,
/// and only runs the validator if no newer call arrived meanwhile. A result
/// is also dropped when a newer call arrives while the validator is in
/// flight. Superseded calls yield `None`.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Delay from `VALIDATION_DEBOUNCE_MS`
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.debounce())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn run<F, Fut, T>(&self, validator: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;
        if !self.is_latest(ticket) {
            tracing::trace!(ticket, "Debounced call superseded before running");
            return None;
        }

        let out = validator().await;
        if !self.is_latest(ticket) {
            tracing::trace!(ticket, "Debounced result discarded");
            return None;
        }
        Some(out)
    }

    fn is_latest(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}
