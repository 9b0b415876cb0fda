//! Input payloads, dispatched on their `type` field.

use crate::config::{Config, Style};
use crate::error::{Result, SubgenError};
use crate::subtitle::WordSpan;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Words that already carry timings.
#[derive(Debug, Clone, Deserialize)]
pub struct TimedRequest {
    pub words: Vec<WordSpan>,
    #[serde(default)]
    pub style: Option<Style>,
    #[serde(default)]
    pub words_per_subtitle: Option<i64>,
}

/// Plain text spread evenly over a duration.
#[derive(Debug, Clone, Deserialize)]
pub struct SimpleRequest {
    pub text: String,
    pub duration: f64,
    #[serde(default)]
    pub words_per_subtitle: Option<i64>,
}

#[derive(Debug, Clone)]
pub enum SubtitleRequest {
    Timed(TimedRequest),
    Simple(SimpleRequest),
}

impl SubtitleRequest {
    /// Parse a JSON payload. A missing `type` is treated as `"simple"`.
    pub fn from_json(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        if !value.is_object() {
            return Err(SubgenError::InvalidRequest {
                kind: "input",
                message: "payload must be a JSON object".to_string(),
            });
        }

        let kind = match value.get("type") {
            None | Some(Value::Null) => "simple".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => return Err(SubgenError::UnknownType(other.to_string())),
        };

        match kind.as_str() {
            "timed" => Ok(Self::Timed(variant("timed", value)?)),
            "simple" => Ok(Self::Simple(variant("simple", value)?)),
            _ => Err(SubgenError::UnknownType(kind)),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timed(_) => "timed",
            Self::Simple(_) => "simple",
        }
    }

    /// Group size from the payload, falling back to the configured default.
    pub fn words_per_subtitle(&self, config: &Config) -> Result<usize> {
        let requested = match self {
            Self::Timed(r) => r.words_per_subtitle,
            Self::Simple(r) => r.words_per_subtitle,
        };

        match requested {
            None => Ok(config.words_per_subtitle),
            Some(n) if n > 0 => usize::try_from(n).map_err(|_| {
                SubgenError::Config(format!("words_per_subtitle is too large: {}", n))
            }),
            Some(n) => Err(SubgenError::Config(format!(
                "words_per_subtitle must be greater than 0, got {}",
                n
            ))),
        }
    }
}

fn variant<T: DeserializeOwned>(kind: &'static str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| SubgenError::InvalidRequest {
        kind,
        message: e.to_string(),
    })
}
