use crate::domain::model::Source;
use crate::domain::ports::{ProgressReporter, WordListSource};
use crate::utils::error::Result;
use futures::future::try_join_all;
use std::collections::{BTreeSet, HashSet};

/// Splits list text into lines and keeps the trimmed, lowercased, non-empty ones.
/// A lone `\r` and the Unicode line and paragraph separators also end a line.
pub fn normalize_words(text: &str) -> HashSet<String> {
    text.split(is_line_break)
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

pub async fn fetch_source<S, R>(client: &S, url: &str, reporter: &R) -> Result<Source>
where
    S: WordListSource + ?Sized,
    R: ProgressReporter + ?Sized,
{
    reporter.info(&format!("Fetching word list: {}", url));
    let text = client.fetch_text(url).await?;
    let words = normalize_words(&text);
    tracing::debug!("{} yielded {} distinct words", url, words.len());
    Ok(Source::new(url, words))
}

/// Fetches every list concurrently. The first failure aborts the whole phase.
/// Sources come back in the order of `urls`.
pub async fn fetch_sources<S, R>(client: &S, urls: &[String], reporter: &R) -> Result<Vec<Source>>
where
    S: WordListSource + ?Sized,
    R: ProgressReporter + ?Sized,
{
    try_join_all(urls.iter().map(|url| fetch_source(client, url, reporter))).await
}

/// Sorted, deduplicated union of every source's words.
pub fn candidate_pool(sources: &[Source]) -> Vec<String> {
    sources
        .iter()
        .flat_map(|source| source.words.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
