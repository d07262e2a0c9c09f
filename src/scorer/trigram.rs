use crate::error::{BombeError, BombeResult};
use std::collections::HashMap;

/// Log-probabilities of 3-letter sequences, built once from a frequency
/// corpus and immutable afterwards, so the search can share it across
/// worker threads without locking.
#[derive(Debug, Clone, Default)]
pub struct TrigramModel {
    log_probs: HashMap<[u8; 3], f64>,
}

impl TrigramModel {
    /// Wrap precomputed log-probabilities.
    pub fn new(log_probs: HashMap<[u8; 3], f64>) -> Self {
        Self { log_probs }
    }

    /// Normalize raw frequencies into natural-log probabilities. Duplicate
    /// trigrams keep the last count seen; the grand total still includes
    /// every entry.
    pub fn from_counts<I>(counts: I) -> BombeResult<Self>
    where
        I: IntoIterator<Item = ([u8; 3], u64)>,
    {
        let entries: Vec<([u8; 3], u64)> = counts.into_iter().collect();
        let total: u64 = entries.iter().map(|&(_, c)| c).sum();
        if total == 0 {
            return Err(BombeError::Corpus(
                "trigram corpus has no observations".to_string(),
            ));
        }
        let total = total as f64;
        let log_probs = entries
            .into_iter()
            .map(|(k, c)| (k, (c as f64 / total).ln()))
            .collect();
        Ok(Self { log_probs })
    }

    pub fn get(&self, trigram: [u8; 3]) -> Option<f64> {
        self.log_probs.get(&trigram).copied()
    }

    pub fn len(&self) -> usize {
        self.log_probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log_probs.is_empty()
    }

    /// Sum of log-probabilities over every overlapping 3-letter window.
    ///
    /// A window absent from the table contributes exactly 0, not a penalty:
    /// unseen trigrams are free. Texts shorter than one window score 0 by
    /// vacuous summation.
    pub fn log_likelihood(&self, text: &[u8]) -> f64 {
        if text.len() < 3 {
            return 0.0;
        }
        let mut total = 0.0;
        for i in 0..=text.len() - 3 {
            let window = [text[i], text[i + 1], text[i + 2]];
            total += self.log_probs.get(&window).copied().unwrap_or(0.0);
        }
        total
    }
}
