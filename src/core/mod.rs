pub mod contribution;
pub mod fetcher;
pub mod orchestrator;
pub mod validator;

pub use crate::domain::model::{AllowedWordResponse, BuildSummary, ContributionMap, Source};
pub use crate::domain::ports::{AllowedWordsApi, ConfigProvider, ProgressReporter, WordListSource};
pub use crate::utils::error::Result;
