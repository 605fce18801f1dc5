use crate::config::TaskConfig;
use crate::discovery::DiscoveryObserver;
use crate::error::Result;

use super::{explicit_packages, GoTask};

/// `go build`.
pub struct BuildTask;

impl GoTask for BuildTask {
    fn command_name(&self) -> &'static str {
        "build"
    }

    fn extra_arguments(&self, config: &TaskConfig) -> Vec<String> {
        config.build_flags.clone()
    }

    fn is_source_folder_required(&self) -> bool {
        true
    }

    fn resolve_packages(
        &self,
        config: &TaskConfig,
        _observer: &mut dyn DiscoveryObserver,
    ) -> Result<Vec<String>> {
        Ok(explicit_packages(config))
    }
}
