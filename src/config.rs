use crate::error::Result;
use crate::subtitle::DEFAULT_WORDS_PER_SUBTITLE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// How timed words are laid out into cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    #[default]
    Grouped,
    WordByWord,
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Style::Grouped => write!(f, "grouped"),
            Style::WordByWord => write!(f, "word-by-word"),
        }
    }
}

impl std::str::FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grouped" => Ok(Style::Grouped),
            "word-by-word" => Ok(Style::WordByWord),
            _ => Err(format!(
                "Unknown style: {}. Use 'grouped' or 'word-by-word'",
                s
            )),
        }
    }
}

/// Defaults applied when a request leaves a field out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub words_per_subtitle: usize,
    pub style: Style,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_per_subtitle: DEFAULT_WORDS_PER_SUBTITLE,
            style: Style::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(Self::config_file_path().as_deref())?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Read the config file if it exists. An unparseable file is skipped.
    ///
    /// A zero `words_per_subtitle` is kept here and only rejected when a
    /// request actually falls back to it.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path.filter(|p| p.exists()) else {
            return Ok(Self::default());
        };

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                warn!("Ignoring config file {}: {}", path.display(), e);
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        match toml::from_str::<Config>(&contents) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                Ok(config)
            }
            Err(e) => {
                warn!("Ignoring config file {}: {}", path.display(), e);
                Ok(Self::default())
            }
        }
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(n) = lookup("SUBGEN_WORDS_PER_SUBTITLE") {
            match n.parse() {
                Ok(n) => self.words_per_subtitle = n,
                Err(_) => warn!("Ignoring SUBGEN_WORDS_PER_SUBTITLE={}", n),
            }
        }
        if let Some(style) = lookup("SUBGEN_STYLE") {
            match style.parse() {
                Ok(s) => self.style = s,
                Err(e) => warn!("Ignoring SUBGEN_STYLE: {}", e),
            }
        }
    }

    fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("subgen").join("config.toml"))
    }
}
