pub mod chunk;
pub mod srt;
pub mod timing;

pub use chunk::{group_words, word_by_word, DEFAULT_WORDS_PER_SUBTITLE};
pub use srt::{format_timestamp, render, seconds_to_duration};
pub use timing::uniform_timing;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single word with its offsets in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordSpan {
    #[serde(rename = "word")]
    pub text: String,
    pub start: f64,
    pub end: f64,
}

impl WordSpan {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// One numbered SRT cue.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleCue {
    pub index: usize,
    pub start: Duration,
    pub end: Duration,
    pub text: String,
}
