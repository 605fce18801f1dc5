use crate::config::TaskConfig;
use crate::discovery::DiscoveryObserver;
use crate::error::Result;

use super::{explicit_packages, GoTask};

/// `go get`. Fetches by import path, so no source folder is needed.
pub struct GetTask;

impl GoTask for GetTask {
    fn command_name(&self) -> &'static str {
        "get"
    }

    fn extra_arguments(&self, config: &TaskConfig) -> Vec<String> {
        config.get_flags.clone()
    }

    fn is_source_folder_required(&self) -> bool {
        false
    }

    fn resolve_packages(
        &self,
        config: &TaskConfig,
        _observer: &mut dyn DiscoveryObserver,
    ) -> Result<Vec<String>> {
        Ok(explicit_packages(config))
    }
}
