use super::WordSpan;
use crate::error::{Result, SubgenError};
use tracing::debug;

/// Spread `duration` seconds evenly over the whitespace-separated words of `text`.
///
/// Offsets are computed as `i * per_word` rather than accumulated, so each span
/// ends exactly where the next one starts and the last ends at `duration`.
pub fn uniform_timing(text: &str, duration: f64) -> Result<Vec<WordSpan>> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(SubgenError::Config(format!(
            "duration must be a positive number of seconds, got {}",
            duration
        )));
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Err(SubgenError::Config("text contains no words".to_string()));
    }

    let count = words.len();
    let per_word = duration / count as f64;
    debug!("Distributing {}s over {} words ({:.3}s each)", duration, count, per_word);

    Ok(words
        .into_iter()
        .enumerate()
        .map(|(i, word)| {
            let end = if i + 1 == count {
                duration
            } else {
                (i + 1) as f64 * per_word
            };
            WordSpan::new(word, i as f64 * per_word, end)
        })
        .collect())
}
