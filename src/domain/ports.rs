use crate::domain::model::AllowedWordResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Retrieves the raw newline-delimited text of a word list.
#[async_trait]
pub trait WordListSource: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

/// Performs one lookup against the word-validity service.
#[async_trait]
pub trait AllowedWordsApi: Send + Sync {
    async fn lookup(&self, word: &str) -> Result<AllowedWordResponse>;
}

/// Sink for info-level progress messages.
pub trait ProgressReporter: Send + Sync {
    fn info(&self, message: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn sources(&self) -> &[String];
    fn validator_endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
    fn chunk_size(&self) -> usize;
}
