mod config;
mod discovery;
mod scan;

pub use config::ConfigError;
pub use discovery::DiscoveryError;
pub use scan::ScanError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scan(#[from] ScanError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovery_error_is_transparent() {
        let err: Error = DiscoveryError::not_found("/missing/src").into();
        assert_eq!(err.to_string(), "source directory not found: /missing/src");
    }

    #[test]
    fn test_config_error_converts() {
        let err: Error = ConfigError::unsupported_format("task.toml").into();
        assert!(matches!(err, Error::Config(_)));
    }
}
