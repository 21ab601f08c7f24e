use crate::domain::ports::AllowedWordsApi;
use crate::utils::error::{Result, WordListError};
use std::time::Duration;

/// Total lookups per word before the run is aborted.
pub const MAX_ATTEMPTS: u32 = 3;
pub const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Asks the validity service whether a word is allowed, retrying transient failures.
pub struct Validator<A: AllowedWordsApi> {
    api: A,
    retry_delay: Duration,
}

impl<A: AllowedWordsApi> Validator<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            retry_delay: RETRY_DELAY,
        }
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// `word` must already be lowercase. A lookup that fails or echoes a
    /// different word is retried; after the last attempt the failure is returned
    /// as `ValidationExhausted`.
    pub async fn is_allowed(&self, word: &str) -> Result<bool> {
        let mut attempt = 1;
        loop {
            match self.check_once(word).await {
                Ok(allowed) => return Ok(allowed),
                Err(e) => {
                    tracing::warn!(
                        "Failed to validate word: {} (attempt {}/{}): {}",
                        word,
                        attempt,
                        MAX_ATTEMPTS,
                        e
                    );
                    if attempt >= MAX_ATTEMPTS {
                        return Err(WordListError::ValidationExhausted {
                            word: word.to_string(),
                            attempts: attempt,
                            source: Box::new(e),
                        });
                    }
                    tokio::time::sleep(self.retry_delay).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn check_once(&self, word: &str) -> Result<bool> {
        let response = self.api.lookup(word).await?;
        if response.word.to_lowercase() != word {
            return Err(WordListError::EchoMismatch {
                requested: word.to_string(),
                received: response.word,
            });
        }
        Ok(response.allowed)
    }
}
