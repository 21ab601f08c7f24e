use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

/// One word-list provider and the normalized words it served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub url: String,
    pub words: HashSet<String>,
}

impl Source {
    pub fn new(url: impl Into<String>, words: HashSet<String>) -> Self {
        Self {
            url: url.into(),
            words,
        }
    }
}

/// Payload returned by the validity service for a single lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedWordResponse {
    pub word: String,
    pub allowed: bool,
}

/// Accepted-word counts per source URL, as attributed by the greedy cover.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributionMap {
    counts: BTreeMap<String, usize>,
}

impl ContributionMap {
    pub(crate) fn record(&mut self, url: &str, count: usize) {
        self.counts.insert(url.to_string(), count);
    }

    pub fn get(&self, url: &str) -> Option<usize> {
        self.counts.get(url).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries by descending count, then ascending URL.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(url, count)| (url.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// `<count>: <url>` lines with counts right-aligned to the widest one.
    pub fn report_lines(&self) -> Vec<String> {
        let width = self
            .counts
            .values()
            .max()
            .map(|max| max.to_string().len())
            .unwrap_or(0);

        self.ranked()
            .into_iter()
            .map(|(url, count)| format!("{:>width$}: {}", count, url, width = width))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub output_path: PathBuf,
    pub candidate_count: usize,
    pub accepted_count: usize,
    pub contributions: ContributionMap,
}
