use crate::domain::model::{ContributionMap, Source};
use std::collections::HashSet;

/// Greedy maximum-coverage attribution of accepted words to sources.
///
/// Each round picks the remaining source that covers the most still-unattributed
/// accepted words, breaking ties by the smallest URL, credits it with those words
/// and removes them. Rounds stop once either the sources or the words run out, so
/// a source whose accepted words were all claimed earlier is absent from the map.
pub fn compute_contributions(sources: &[Source], accepted: &HashSet<String>) -> ContributionMap {
    let mut contributions = ContributionMap::default();
    let mut remaining_words: HashSet<&str> = accepted.iter().map(String::as_str).collect();

    let mut remaining_sources: Vec<&Source> = sources.iter().collect();
    remaining_sources.sort_by(|a, b| a.url.cmp(&b.url));

    while !remaining_sources.is_empty() && !remaining_words.is_empty() {
        // Sources are in URL order and only a strictly larger cover replaces the
        // current best, so ties go to the smallest URL.
        let mut best: Option<(usize, Vec<&str>)> = None;
        for (index, source) in remaining_sources.iter().enumerate() {
            let covered: Vec<&str> = remaining_words
                .iter()
                .copied()
                .filter(|word| source.words.contains(*word))
                .collect();
            if best.as_ref().map_or(true, |(_, current)| covered.len() > current.len()) {
                best = Some((index, covered));
            }
        }

        let Some((index, covered)) = best else {
            break;
        };
        let source = remaining_sources.remove(index);
        for word in &covered {
            remaining_words.remove(word);
        }
        contributions.record(&source.url, covered.len());
    }

    contributions
}
