use crate::config::TaskConfig;
use crate::discovery::{resolve_test_packages, DiscoveryObserver};
use crate::error::Result;

use super::GoTask;

/// `go test`. Packages default to every directory holding test files.
pub struct TestTask;

impl GoTask for TestTask {
    fn command_name(&self) -> &'static str {
        "test"
    }

    fn extra_arguments(&self, config: &TaskConfig) -> Vec<String> {
        config.test_flags.clone()
    }

    fn is_source_folder_required(&self) -> bool {
        true
    }

    fn resolve_packages(
        &self,
        config: &TaskConfig,
        observer: &mut dyn DiscoveryObserver,
    ) -> Result<Vec<String>> {
        Ok(resolve_test_packages(
            &config.packages,
            &config.source_dir,
            observer,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::TracingObserver;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discovers_when_no_packages_given() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("util")).unwrap();
        fs::write(temp_dir.path().join("util/util_test.go"), "package util").unwrap();
        fs::write(temp_dir.path().join("main_test.go"), "package main").unwrap();

        let config = TaskConfig {
            source_dir: temp_dir.path().to_path_buf(),
            ..TaskConfig::default()
        };

        let packages = TestTask
            .resolve_packages(&config, &mut TracingObserver)
            .unwrap();
        assert_eq!(packages, vec!["", "util"]);
    }

    #[test]
    fn test_explicit_packages_kept_in_order() {
        let config = TaskConfig {
            source_dir: "/nonexistent".into(),
            packages: vec!["./b".to_string(), "./a".to_string()],
            ..TaskConfig::default()
        };

        let packages = TestTask
            .resolve_packages(&config, &mut TracingObserver)
            .unwrap();
        assert_eq!(packages, vec!["./b", "./a"]);
    }

    #[test]
    fn test_extra_arguments_are_test_flags() {
        let config = TaskConfig {
            test_flags: vec!["-count=1".to_string()],
            build_flags: vec!["-race".to_string()],
            ..TaskConfig::default()
        };
        assert_eq!(TestTask.extra_arguments(&config), vec!["-count=1"]);
    }
}
