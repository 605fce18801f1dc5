use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("unsupported config format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },
}

impl ConfigError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_display() {
        let err = ConfigError::unsupported_format("task.toml");
        assert_eq!(
            err.to_string(),
            "unsupported config format: task.toml (expected .yaml, .yml or .json)"
        );
    }

    #[test]
    fn test_parse_display() {
        let err = ConfigError::parse("task.yaml", "missing field");
        assert_eq!(
            err.to_string(),
            "failed to parse config 'task.yaml': missing field"
        );
    }
}
