use std::{fmt, path::PathBuf};

pub type FixtureResult<T = (), E = FixtureError> = Result<T, E>;

#[derive(Debug)]
pub enum FixtureError {
    /// Directory creation, file create/write or read-back failure
    Io(std::io::Error),
    /// A distribution rejected its parameters
    Distribution(String),
    InvalidConfig(String),
    /// A text line that does not parse back into its element kind
    Parse { line: usize, content: String },
    /// Text and binary renderings of a fixture disagree
    Mismatch { path: PathBuf, reason: String },
}

impl From<std::io::Error> for FixtureError {
    fn from(value: std::io::Error) -> Self {
        FixtureError::Io(value)
    }
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::Io(e) => write!(f, "io error: {e}"),
            FixtureError::Distribution(e) => {
                write!(f, "invalid distribution parameters: {e}")
            }
            FixtureError::InvalidConfig(e) => {
                write!(f, "invalid generator config: {e}")
            }
            FixtureError::Parse { line, content } => {
                write!(f, "failed to parse line {line}: {content:?}")
            }
            FixtureError::Mismatch { path, reason } => {
                write!(f, "{} is inconsistent: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixtureError::Io(e) => Some(e),
            _ => None,
        }
    }
}
