use crate::config::{Config, Style};
use crate::error::Result;
use crate::request::SubtitleRequest;
use crate::subtitle::{group_words, render, uniform_timing, word_by_word, SubtitleCue};
use serde::Serialize;
use tracing::{debug, info};

/// Summary written alongside the SRT text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub success: bool,
    pub subtitle_count: usize,
}

/// Result of the subtitle generation pipeline.
#[derive(Debug)]
pub struct SubtitleOutput {
    /// Rendered SRT text.
    pub srt: String,
    /// Generated cues.
    pub cues: Vec<SubtitleCue>,
    pub metadata: Metadata,
}

/// Build cues for a request. Every check runs before any cue is built.
pub fn build_cues(request: &SubtitleRequest, config: &Config) -> Result<Vec<SubtitleCue>> {
    match request {
        SubtitleRequest::Timed(timed) => {
            let style = timed.style.unwrap_or(config.style);
            debug!("Timed request: {} words, style {}", timed.words.len(), style);
            match style {
                Style::WordByWord => Ok(word_by_word(&timed.words)),
                Style::Grouped => {
                    let size = request.words_per_subtitle(config)?;
                    group_words(&timed.words, size)
                }
            }
        }
        SubtitleRequest::Simple(simple) => {
            let size = request.words_per_subtitle(config)?;
            let words = uniform_timing(&simple.text, simple.duration)?;
            group_words(&words, size)
        }
    }
}

/// Run a request end to end.
pub fn generate(request: &SubtitleRequest, config: &Config) -> Result<SubtitleOutput> {
    let cues = build_cues(request, config)?;
    let srt = render(&cues);

    info!("Generated {} subtitles from {} request", cues.len(), request.kind());

    Ok(SubtitleOutput {
        srt,
        metadata: Metadata {
            success: true,
            subtitle_count: cues.len(),
        },
        cues,
    })
}

/// Parse a JSON payload and run it.
pub fn generate_from_json(input: &str, config: &Config) -> Result<SubtitleOutput> {
    let request = SubtitleRequest::from_json(input)?;
    generate(&request, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubgenError;
    use std::time::Duration;

    #[test]
    fn test_simple_request() {
        let output = generate_from_json(
            r#"{"type":"simple","text":"hello world foo bar baz","duration":5.0,"words_per_subtitle":2}"#,
            &Config::default(),
        )
        .unwrap();

        assert_eq!(output.metadata.subtitle_count, 3);
        assert_eq!(output.cues[0].text, "hello world");
        assert_eq!(output.cues[0].start, Duration::ZERO);
        assert_eq!(output.cues[0].end, Duration::from_secs(2));
        assert_eq!(output.cues[2].text, "baz");
        assert_eq!(output.cues[2].start, Duration::from_secs(4));
        assert_eq!(output.cues[2].end, Duration::from_secs(5));
    }

    #[test]
    fn test_word_by_word_request() {
        let output = generate_from_json(
            r#"{"type":"timed","style":"word-by-word","words":[{"word":"Hi","start":0.0,"end":0.3}]}"#,
            &Config::default(),
        )
        .unwrap();

        assert_eq!(output.srt, "1\n00:00:00,000 --> 00:00:00,300\nHi");
        assert_eq!(
            output.metadata,
            Metadata {
                success: true,
                subtitle_count: 1
            }
        );
    }

    #[test]
    fn test_word_by_word_ignores_group_size() {
        let output = generate_from_json(
            r#"{"type":"timed","style":"word-by-word","words_per_subtitle":0,
                "words":[{"word":"a","start":0,"end":1},{"word":"b","start":1,"end":2}]}"#,
            &Config::default(),
        )
        .unwrap();

        assert_eq!(output.metadata.subtitle_count, 2);
    }

    #[test]
    fn test_config_style_used_when_omitted() {
        let config = Config {
            style: Style::WordByWord,
            ..Config::default()
        };
        let output = generate_from_json(
            r#"{"type":"timed","words":[{"word":"a","start":0,"end":1},{"word":"b","start":1,"end":2}]}"#,
            &config,
        )
        .unwrap();

        assert_eq!(output.metadata.subtitle_count, 2);
    }

    #[test]
    fn test_empty_timed_words() {
        let output =
            generate_from_json(r#"{"type":"timed","words":[]}"#, &Config::default()).unwrap();

        assert_eq!(output.srt, "");
        assert_eq!(output.metadata.subtitle_count, 0);
    }

    #[test]
    fn test_count_ignores_blank_lines_in_text() {
        let output = generate_from_json(
            r#"{"type":"timed","style":"word-by-word","words":[{"word":"a\n\nb","start":0,"end":1}]}"#,
            &Config::default(),
        )
        .unwrap();

        assert_eq!(output.metadata.subtitle_count, 1);
    }

    #[test]
    fn test_zero_group_size_fails() {
        let err = generate_from_json(
            r#"{"type":"simple","text":"a b","duration":2,"words_per_subtitle":0}"#,
            &Config::default(),
        )
        .unwrap_err();

        assert!(matches!(err, SubgenError::Config(_)));
    }

    #[test]
    fn test_zero_default_only_fails_when_used() {
        let config = Config {
            words_per_subtitle: 0,
            ..Config::default()
        };

        let output = generate_from_json(
            r#"{"type":"simple","text":"a b c","duration":3,"words_per_subtitle":2}"#,
            &config,
        )
        .unwrap();
        assert_eq!(output.metadata.subtitle_count, 2);

        let output = generate_from_json(
            r#"{"type":"timed","style":"word-by-word","words":[{"word":"a","start":0,"end":1}]}"#,
            &config,
        )
        .unwrap();
        assert_eq!(output.metadata.subtitle_count, 1);

        let err = generate_from_json(r#"{"type":"simple","text":"a b","duration":2}"#, &config)
            .unwrap_err();
        assert!(matches!(err, SubgenError::Config(_)));
    }

    #[test]
    fn test_metadata_json() {
        let metadata = Metadata {
            success: true,
            subtitle_count: 4,
        };
        assert_eq!(
            serde_json::to_string(&metadata).unwrap(),
            r#"{"success":true,"subtitle_count":4}"#
        );
    }
}
