use crate::adapters::storage::OutputFile;
use crate::core::contribution::compute_contributions;
use crate::core::fetcher::{candidate_pool, fetch_sources};
use crate::core::validator::Validator;
use crate::domain::model::BuildSummary;
use crate::domain::ports::{AllowedWordsApi, ConfigProvider, ProgressReporter, WordListSource};
use crate::utils::error::{Result, WordListError};
use futures::future::try_join_all;
use std::collections::HashSet;

/// Drives a full run: fetch every source, validate the sorted candidate pool
/// chunk by chunk, stream accepted words to the output file and report how
/// much each source contributed.
pub struct BatchOrchestrator<S, A, C, R>
where
    S: WordListSource,
    A: AllowedWordsApi,
    C: ConfigProvider,
    R: ProgressReporter,
{
    source: S,
    validator: Validator<A>,
    config: C,
    reporter: R,
}

impl<S, A, C, R> BatchOrchestrator<S, A, C, R>
where
    S: WordListSource,
    A: AllowedWordsApi,
    C: ConfigProvider,
    R: ProgressReporter,
{
    pub fn new(source: S, validator: Validator<A>, config: C, reporter: R) -> Self {
        Self {
            source,
            validator,
            config,
            reporter,
        }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub async fn run(&self) -> Result<BuildSummary> {
        let chunk_size = self.config.chunk_size();
        if chunk_size == 0 {
            return Err(WordListError::InvalidConfigValueError {
                field: "chunk".to_string(),
                value: "0".to_string(),
                reason: "Value must be at least 1".to_string(),
            });
        }

        let sources = fetch_sources(&self.source, self.config.sources(), &self.reporter).await?;
        let pool = candidate_pool(&sources);
        let width = numerator_width(pool.len(), chunk_size);

        self.reporter.info(&format!(
            "Checking the validity of all {} words...",
            pool.len()
        ));

        let mut output = OutputFile::create(self.config.output_path())?;
        let mut accepted: HashSet<String> = HashSet::new();

        for (index, chunk) in pool.chunks(chunk_size).enumerate() {
            self.reporter
                .info(&progress_line(index * chunk_size, pool.len(), width));

            // try_join_all yields outcomes in chunk order, not completion order.
            let outcomes =
                try_join_all(chunk.iter().map(|word| self.validator.is_allowed(word))).await?;

            for (word, allowed) in chunk.iter().zip(outcomes) {
                if allowed {
                    output.write_word(word)?;
                    accepted.insert(word.clone());
                }
            }
            output.flush()?;
        }

        let output_path = output.finish()?;
        tracing::debug!("Accepted {} of {} candidates", accepted.len(), pool.len());

        self.reporter.info("Printing contribution amounts...");
        let contributions = compute_contributions(&sources, &accepted);
        for line in contributions.report_lines() {
            self.reporter.info(&line);
        }

        Ok(BuildSummary {
            output_path,
            candidate_count: pool.len(),
            accepted_count: accepted.len(),
            contributions,
        })
    }
}

/// Width of the last progress numerator: the largest multiple of `chunk_size`
/// strictly below `pool_size` (zero for an empty pool).
pub fn numerator_width(pool_size: usize, chunk_size: usize) -> usize {
    let last_offset = match pool_size {
        0 => 0,
        n => (n - 1) / chunk_size * chunk_size,
    };
    last_offset.to_string().len()
}

/// `<offset> / <total> (<pct>%)` with the offset padded to `width` and the
/// percentage padded to three characters.
pub fn progress_line(offset: usize, total: usize, width: usize) -> String {
    let percent = format!("{:.0}%", offset as f64 / total as f64 * 100.0);
    format!(
        "{:>width$} / {} ({:>3})",
        offset,
        total,
        percent,
        width = width
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::AllowedWordResponse;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;
    use tempfile::TempDir;

    struct MockListSource {
        lists: HashMap<String, String>,
    }

    #[async_trait]
    impl WordListSource for MockListSource {
        async fn fetch_text(&self, url: &str) -> Result<String> {
            self.lists
                .get(url)
                .cloned()
                .ok_or_else(|| WordListError::ConfigError {
                    message: format!("no list at {}", url),
                })
        }
    }

    struct MockApi {
        rejected: HashSet<String>,
        lookups: Mutex<Vec<String>>,
    }

    impl MockApi {
        fn rejecting(words: &[&str]) -> Self {
            Self {
                rejected: words.iter().map(|w| w.to_string()).collect(),
                lookups: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AllowedWordsApi for MockApi {
        async fn lookup(&self, word: &str) -> Result<AllowedWordResponse> {
            self.lookups.lock().unwrap().push(word.to_string());
            Ok(AllowedWordResponse {
                word: word.to_uppercase(),
                allowed: !self.rejected.contains(word),
            })
        }
    }

    /// Answers after a per-word delay, so lookups in a chunk finish out of order.
    struct DelayedApi {
        delays_ms: HashMap<String, u64>,
        rejected: HashSet<String>,
        completed: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AllowedWordsApi for DelayedApi {
        async fn lookup(&self, word: &str) -> Result<AllowedWordResponse> {
            let delay = self.delays_ms.get(word).copied().unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            self.completed.lock().unwrap().push(word.to_string());
            Ok(AllowedWordResponse {
                word: word.to_string(),
                allowed: !self.rejected.contains(word),
            })
        }
    }

    struct MockConfig {
        sources: Vec<String>,
        output_path: String,
        chunk_size: usize,
    }

    impl ConfigProvider for MockConfig {
        fn sources(&self) -> &[String] {
            &self.sources
        }

        fn validator_endpoint(&self) -> &str {
            "http://validator.test/allowedWords"
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn chunk_size(&self) -> usize {
            self.chunk_size
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        lines: Mutex<Vec<String>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn info(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
    }

    fn orchestrator(
        lists: &[(&str, &str)],
        api: MockApi,
        output_path: String,
        chunk_size: usize,
    ) -> BatchOrchestrator<MockListSource, MockApi, MockConfig, RecordingReporter> {
        let source = MockListSource {
            lists: lists
                .iter()
                .map(|(url, text)| (url.to_string(), text.to_string()))
                .collect(),
        };
        let config = MockConfig {
            sources: lists.iter().map(|(url, _)| url.to_string()).collect(),
            output_path,
            chunk_size,
        };
        let validator = Validator::new(api).with_retry_delay(Duration::ZERO);
        BatchOrchestrator::new(source, validator, config, RecordingReporter::default())
    }

    #[test]
    fn test_numerator_width() {
        assert_eq!(numerator_width(250, 100), 3);
        assert_eq!(numerator_width(100, 100), 1);
        assert_eq!(numerator_width(101, 100), 3);
        assert_eq!(numerator_width(9, 3), 1);
        assert_eq!(numerator_width(0, 100), 1);
    }

    #[test]
    fn test_progress_line_format() {
        assert_eq!(progress_line(0, 250, 3), "  0 / 250 ( 0%)");
        assert_eq!(progress_line(100, 250, 3), "100 / 250 (40%)");
        assert_eq!(progress_line(200, 250, 3), "200 / 250 (80%)");
        assert_eq!(progress_line(3, 1000, 3), "  3 / 1000 ( 0%)");
    }

    #[tokio::test]
    async fn test_run_writes_sorted_accepted_words() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("words.txt");
        let orchestrator = orchestrator(
            &[("A", "Eel\ncat\n dog \n"), ("B", "fox\nDOG\n\n")],
            MockApi::rejecting(&["eel"]),
            output_path.to_str().unwrap().to_string(),
            2,
        );

        let summary = orchestrator.run().await.unwrap();

        assert_eq!(
            std::fs::read_to_string(&output_path).unwrap(),
            "cat\ndog\nfox\n"
        );
        assert_eq!(summary.candidate_count, 4);
        assert_eq!(summary.accepted_count, 3);
        assert_eq!(summary.contributions.get("A"), Some(2));
        assert_eq!(summary.contributions.get("B"), Some(1));

        let lines = orchestrator.reporter().lines.lock().unwrap();
        let tail: Vec<&str> = lines.iter().rev().take(3).rev().map(String::as_str).collect();
        assert_eq!(tail, vec!["Printing contribution amounts...", "2: A", "1: B"]);
    }

    #[tokio::test]
    async fn test_run_reports_progress_at_chunk_boundaries() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("words.txt");
        let list: String = (0..250).map(|i| format!("word{:03}\n", i)).collect();
        let orchestrator = orchestrator(
            &[("https://list.example/words.txt", list.as_str())],
            MockApi::rejecting(&[]),
            output_path.to_str().unwrap().to_string(),
            100,
        );

        let summary = orchestrator.run().await.unwrap();
        assert_eq!(summary.accepted_count, 250);

        let lines = orchestrator.reporter().lines.lock().unwrap();
        let progress: Vec<&str> = lines
            .iter()
            .filter(|line| line.contains(" / 250 ("))
            .map(String::as_str)
            .collect();
        assert_eq!(
            progress,
            vec!["  0 / 250 ( 0%)", "100 / 250 (40%)", "200 / 250 (80%)"]
        );
        assert!(lines.contains(&"Checking the validity of all 250 words...".to_string()));
    }

    #[tokio::test]
    async fn test_run_with_empty_sources_writes_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("words.txt");
        let orchestrator = orchestrator(
            &[("A", "\n   \n")],
            MockApi::rejecting(&[]),
            output_path.to_str().unwrap().to_string(),
            100,
        );

        let summary = orchestrator.run().await.unwrap();

        assert_eq!(summary.candidate_count, 0);
        assert!(summary.contributions.is_empty());
        assert_eq!(std::fs::read_to_string(&output_path).unwrap(), "");
    }

    #[tokio::test]
    async fn test_run_fetch_failure_skips_validation() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("words.txt");
        let mut orchestrator = orchestrator(
            &[("A", "cat\n")],
            MockApi::rejecting(&[]),
            output_path.to_str().unwrap().to_string(),
            100,
        );
        orchestrator.config.sources.push("missing".to_string());

        assert!(orchestrator.run().await.is_err());
        assert!(orchestrator.validator.api().lookups.lock().unwrap().is_empty());
        assert!(!output_path.exists());
    }

    #[tokio::test]
    async fn test_run_rejects_zero_chunk_size() {
        let temp_dir = TempDir::new().unwrap();
        let orchestrator = orchestrator(
            &[("A", "cat\n")],
            MockApi::rejecting(&[]),
            temp_dir.path().join("words.txt").to_str().unwrap().to_string(),
            0,
        );

        assert!(matches!(
            orchestrator.run().await,
            Err(WordListError::InvalidConfigValueError { .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_writes_in_pool_order_when_lookups_finish_out_of_order() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("words.txt");
        let api = DelayedApi {
            delays_ms: HashMap::from([
                ("ant".to_string(), 300),
                ("bee".to_string(), 200),
                ("cow".to_string(), 100),
                ("deer".to_string(), 0),
                ("elk".to_string(), 50),
            ]),
            rejected: HashSet::from(["cow".to_string()]),
            completed: Mutex::new(Vec::new()),
        };
        let source = MockListSource {
            lists: HashMap::from([(
                "A".to_string(),
                "elk\ndeer\ncow\nbee\nant\n".to_string(),
            )]),
        };
        let config = MockConfig {
            sources: vec!["A".to_string()],
            output_path: output_path.to_str().unwrap().to_string(),
            chunk_size: 4,
        };
        let orchestrator = BatchOrchestrator::new(
            source,
            Validator::new(api).with_retry_delay(Duration::ZERO),
            config,
            RecordingReporter::default(),
        );

        let summary = orchestrator.run().await.unwrap();

        let completed = orchestrator.validator.api().completed.lock().unwrap().clone();
        assert_eq!(completed, vec!["deer", "cow", "bee", "ant", "elk"]);
        assert_eq!(
            std::fs::read_to_string(&output_path).unwrap(),
            "ant\nbee\ndeer\nelk\n"
        );
        assert_eq!(summary.accepted_count, 4);
    }
}
