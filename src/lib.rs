pub mod config;
pub mod error;
pub mod pipeline;
pub mod request;
pub mod subtitle;

pub use config::{Config, Style};
pub use error::{Result, SubgenError};
pub use pipeline::{build_cues, generate, generate_from_json, Metadata, SubtitleOutput};
pub use request::{SimpleRequest, SubtitleRequest, TimedRequest};
