use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const DEFAULT_GO_COMMAND: &str = "go";

/// Settings shared by every Go task, as loaded from a task file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskConfig {
    /// Project source directory; also the working directory of the command.
    pub source_dir: PathBuf,
    /// Explicit packages. When empty, `test` discovers them.
    pub packages: Vec<String>,
    /// Flags passed to `go test`.
    pub test_flags: Vec<String>,
    pub build_flags: Vec<String>,
    pub get_flags: Vec<String>,
    pub vet_flags: Vec<String>,
    /// Go executable to run.
    pub go_command: String,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            packages: Vec::new(),
            test_flags: Vec::new(),
            build_flags: Vec::new(),
            get_flags: Vec::new(),
            vet_flags: Vec::new(),
            go_command: DEFAULT_GO_COMMAND.to_string(),
        }
    }
}

impl TaskConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::unsupported_format(path))?;
        let content = fs::read_to_string(path).map_err(|e| ConfigError::read(path, e))?;
        Self::parse(&content, format).map_err(|message| ConfigError::parse(path, message))
    }

    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, String> {
        match format {
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()?.to_str().and_then(|ext| match ext {
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        })
    }
}
