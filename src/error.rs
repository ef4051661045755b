use std::path::PathBuf;

/// Every error wildfind can produce. Matching itself never fails; these come
/// from the edges: arguments, stdin and the config file.
#[derive(Debug)]
pub enum WildError {
    InvalidQuery {
        query: String,
        reason: String,
    },
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        reason: String,
    },
}

impl std::fmt::Display for WildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQuery { query, reason } => {
                write!(f, "invalid query \"{query}\": {reason}")
            }
            Self::IoError { path, source } => {
                write!(f, "{}: {source}", path.display())
            }
            Self::ParseError { path, reason } => {
                write!(f, "parse error in {}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for WildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl WildError {
    /// Process exit code: 2 for I/O, 3 for bad input.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::IoError { .. } => 2,
            Self::InvalidQuery { .. } | Self::ParseError { .. } => 3,
        }
    }
}
