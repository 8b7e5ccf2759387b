use std::path::PathBuf;

use thiserror::Error;

pub type PunchCardResult<T> = Result<T, PunchCardError>;

#[derive(Debug, Error)]
pub enum PunchCardError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("malformed event date `{date}`: {source}")]
    MalformedDate {
        date: String,
        source: chrono::ParseError,
    },

    #[error("failed to {action} `{}`: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("home directory could not be resolved")]
    HomeDirUnavailable,
}
