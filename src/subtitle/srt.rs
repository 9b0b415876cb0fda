// SRT subtitle format
use super::SubtitleCue;
use std::time::Duration;
use tracing::warn;

/// Convert float seconds to a `Duration`, rounded to the nearest nanosecond.
///
/// Rounding at nanosecond precision absorbs float representation error, so
/// `59.999` formats as `59,999` and not `59,998`. Values within half a
/// nanosecond below a whole second carry into it (`1.9999999999` becomes
/// `2.000`); milliseconds are still truncated by `format_timestamp`.
///
/// Negative and non-finite values clamp to zero.
pub fn seconds_to_duration(seconds: f64) -> Duration {
    if !seconds.is_finite() || seconds < 0.0 {
        warn!("Clamping invalid timestamp {} to 0", seconds);
        return Duration::ZERO;
    }
    Duration::from_nanos((seconds * 1e9).round() as u64)
}

/// Format as `HH:MM:SS,mmm`. Milliseconds are truncated, never rounded up.
pub fn format_timestamp(d: Duration) -> String {
    let total_secs = d.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    let millis = d.subsec_millis();
    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

/// Render cues into an SRT blob. Cues are separated by a blank line and the
/// blob carries no trailing newline; no cues renders as an empty string.
pub fn render(cues: &[SubtitleCue]) -> String {
    cues.iter()
        .map(|cue| {
            format!(
                "{}\n{} --> {}\n{}",
                cue.index,
                format_timestamp(cue.start),
                format_timestamp(cue.end),
                cue.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
