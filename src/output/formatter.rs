use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::discovery::PackageIdentifier;
use crate::scanner::PackageTests;
use crate::task::CommandPlan;

/// How the root package is shown in text output.
const ROOT_PACKAGE_LABEL: &str = ".";

#[derive(Debug, Serialize)]
pub struct DiscoveryOutput {
    pub source_root: PathBuf,
    pub packages: Vec<PackageIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tests: Option<Vec<PackageTests>>,
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format_discovery(
        source_root: &Path,
        packages: &[PackageIdentifier],
        tests: Option<&[PackageTests]>,
        format: OutputFormat,
    ) -> Result<String> {
        match format {
            OutputFormat::Json => {
                let output = DiscoveryOutput {
                    source_root: source_root.to_path_buf(),
                    packages: packages.to_vec(),
                    tests: tests.map(<[PackageTests]>::to_vec),
                };
                Ok(serde_json::to_string_pretty(&output)?)
            }
            OutputFormat::Text => Ok(Self::discovery_text(packages, tests)),
        }
    }

    pub fn format_plan(plan: &CommandPlan, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(plan)?),
            OutputFormat::Text => Ok(format!(
                "cd {} && {}",
                plan.working_dir.display(),
                plan.command_line()
            )),
        }
    }

    fn discovery_text(packages: &[PackageIdentifier], tests: Option<&[PackageTests]>) -> String {
        let mut lines = Vec::new();
        for package in packages {
            lines.push(display_package(package).to_string());
            let functions = tests
                .and_then(|index| index.iter().find(|entry| &entry.package == package))
                .map(|entry| entry.functions.as_slice())
                .unwrap_or_default();
            for function in functions {
                lines.push(format!("  {}", function.name));
            }
        }
        lines.join("\n")
    }
}

fn display_package(package: &str) -> &str {
    if package.is_empty() {
        ROOT_PACKAGE_LABEL
    } else {
        package
    }
}
