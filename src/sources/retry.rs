use async_trait::async_trait;
use log::{debug, info, warn};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use super::{RecipeQuery, RecipeSource};
use crate::config::RetryConfig;
use crate::error::Result;
use crate::model::Recipe;

/// Retries a failing source with linearly growing delays
///
/// Try `n` waits `delay_ms * n` before try `n + 1`. Only fetch-side errors
/// are retried; a clean "not found" answer is final.
pub struct RetrySource {
    inner: Arc<dyn RecipeSource>,
    attempts: u32,
    delay_ms: u64,
}

impl RetrySource {
    pub fn new(inner: Arc<dyn RecipeSource>, attempts: u32, delay_ms: u64) -> Self {
        Self {
            inner,
            attempts: attempts.max(1),
            delay_ms,
        }
    }

    pub fn from_config(inner: Arc<dyn RecipeSource>, config: &RetryConfig) -> Self {
        Self::new(inner, config.attempts, config.delay_ms)
    }

    /// Wait after failed try `attempt`
    fn backoff(&self, attempt: u32) -> Duration {
        Duration::from_millis(self.delay_ms.saturating_mul(attempt as u64))
    }

    async fn with_retry<T, F, Fut>(&self, what: &str, mut op: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 1;
        loop {
            debug!(
                "Fetching {} from {} (attempt {}/{})",
                what,
                self.inner.name(),
                attempt,
                self.attempts
            );

            match op().await {
                Ok(value) => {
                    if attempt > 1 {
                        info!("Fetched {} after {} attempts", what, attempt);
                    }
                    return Ok(value);
                }
                Err(e) if e.is_fetch_error() && attempt < self.attempts => {
                    warn!(
                        "Source {} failed (attempt {}/{}): {}",
                        self.inner.name(),
                        attempt,
                        self.attempts,
                        e
                    );
                    let delay = self.backoff(attempt);
                    debug!("Waiting {:?} before retry", delay);
                    sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[async_trait]
impl RecipeSource for RetrySource {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn list(&self, query: &RecipeQuery) -> Result<Vec<Recipe>> {
        let what = query.to_string();
        self.with_retry(&what, || self.inner.list(query)).await
    }

    async fn get(&self, id: &str) -> Result<Option<Recipe>> {
        let what = format!("recipe {}", id);
        self.with_retry(&what, || self.inner.get(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BrowseError;
    use crate::fixtures::sample_recipes;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::Instant;

    /// Fails the first `failures` calls, then serves the samples
    struct Flaky {
        failures: u32,
        calls: AtomicU32,
    }

    impl Flaky {
        fn new(failures: u32) -> Arc<Self> {
            Arc::new(Self {
                failures,
                calls: AtomicU32::new(0),
            })
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }

        fn fail_or<T>(&self, value: T) -> Result<T> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                Err(BrowseError::Status {
                    url: "http://localhost:3002/recipes".to_string(),
                    status: 503,
                })
            } else {
                Ok(value)
            }
        }
    }

    #[async_trait]
    impl RecipeSource for Flaky {
        fn name(&self) -> &str {
            "flaky"
        }

        async fn list(&self, _query: &RecipeQuery) -> Result<Vec<Recipe>> {
            self.fail_or(sample_recipes())
        }

        async fn get(&self, id: &str) -> Result<Option<Recipe>> {
            self.fail_or(sample_recipes().into_iter().find(|r| r.id == id))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovers_with_linear_backoff() {
        let flaky = Flaky::new(2);
        let source = RetrySource::new(flaky.clone(), 3, 1000);

        let start = Instant::now();
        let recipes = source.list(&RecipeQuery::All).await.unwrap();

        assert_eq!(recipes.len(), 8);
        assert_eq!(flaky.calls(), 3);
        // 1000ms after the first failure, 2000ms after the second
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(3000));
        assert!(elapsed < Duration::from_millis(3100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_after_attempts() {
        let flaky = Flaky::new(10);
        let source = RetrySource::new(flaky.clone(), 3, 100);

        let result = source.list(&RecipeQuery::All).await;

        assert!(matches!(result, Err(BrowseError::Status { status: 503, .. })));
        assert_eq!(flaky.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_found_is_not_retried() {
        let flaky = Flaky::new(0);
        let source = RetrySource::new(flaky.clone(), 3, 100);

        assert!(source.get("999").await.unwrap().is_none());
        assert_eq!(flaky.calls(), 1);
    }

    #[test]
    fn test_backoff_is_linear_and_saturates() {
        let source = RetrySource::new(Flaky::new(0), 3, 250);
        assert_eq!(source.backoff(1), Duration::from_millis(250));
        assert_eq!(source.backoff(3), Duration::from_millis(750));

        let huge = RetrySource::new(Flaky::new(0), 3, u64::MAX);
        assert_eq!(huge.backoff(2), Duration::from_millis(u64::MAX));
    }

    #[tokio::test]
    async fn test_zero_attempts_still_tries_once() {
        let flaky = Flaky::new(0);
        let source = RetrySource::new(flaky.clone(), 0, 0);
        assert!(source.get("1").await.unwrap().is_some());
        assert_eq!(flaky.calls(), 1);
    }
}
