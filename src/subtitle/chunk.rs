use super::srt::seconds_to_duration;
use super::{SubtitleCue, WordSpan};
use crate::error::{Result, SubgenError};
use tracing::debug;

pub const DEFAULT_WORDS_PER_SUBTITLE: usize = 5;

/// Group consecutive words into cues of at most `words_per_subtitle` words.
///
/// Each cue runs from its first word's start to its last word's end. The last
/// cue may hold fewer words.
pub fn group_words(words: &[WordSpan], words_per_subtitle: usize) -> Result<Vec<SubtitleCue>> {
    if words_per_subtitle == 0 {
        return Err(SubgenError::Config(
            "words_per_subtitle must be greater than 0".to_string(),
        ));
    }

    let cues: Vec<SubtitleCue> = words
        .chunks(words_per_subtitle)
        .enumerate()
        .map(|(i, chunk)| SubtitleCue {
            index: i + 1,
            start: seconds_to_duration(chunk[0].start),
            end: seconds_to_duration(chunk[chunk.len() - 1].end),
            text: join_words(chunk),
        })
        .collect();

    debug!(
        "Grouped {} words into {} cues ({} per cue)",
        words.len(),
        cues.len(),
        words_per_subtitle
    );
    Ok(cues)
}

/// One cue per word, text kept verbatim.
pub fn word_by_word(words: &[WordSpan]) -> Vec<SubtitleCue> {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| SubtitleCue {
            index: i + 1,
            start: seconds_to_duration(word.start),
            end: seconds_to_duration(word.end),
            text: word.text.clone(),
        })
        .collect()
}

fn join_words(chunk: &[WordSpan]) -> String {
    chunk
        .iter()
        .map(|w| w.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
