//! Test package discovery
//!
//! Walks a Go source root and reports every directory that holds at least one
//! test file `go test` would pick up. Identifiers are relative to the root,
//! use `/` separators, and the root package itself is the empty string.

pub mod config;
pub mod filter;
pub mod observer;
pub mod utils;

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::error::DiscoveryError;

pub use filter::{is_go_test_file, GoTestFileFilter, TestFileFilter};
pub use observer::{DiscoveryObserver, TracingObserver};

/// Directory of a package relative to the source root.
pub type PackageIdentifier = String;

/// Discovers test packages under `source_root`, logging each one.
pub fn discover_test_packages(
    source_root: &Path,
) -> Result<Vec<PackageIdentifier>, DiscoveryError> {
    discover_test_packages_with(source_root, &GoTestFileFilter, &mut TracingObserver)
}

/// Discovers test packages with a custom filter and observer.
///
/// The result is sorted byte-wise and free of duplicates; `observer` hears
/// about each package once, in walk order.
pub fn discover_test_packages_with(
    source_root: &Path,
    filter: &dyn TestFileFilter,
    observer: &mut dyn DiscoveryObserver,
) -> Result<Vec<PackageIdentifier>, DiscoveryError> {
    let base = utils::normalize_path(source_root)?;
    if !base.is_dir() {
        return Err(DiscoveryError::not_found(source_root));
    }

    let files = utils::walk_files(&base)?;
    debug!(root = %base.display(), files = files.len(), "walked source root");

    let mut seen = HashSet::new();
    let mut packages = Vec::new();

    for file in files {
        let qualifies = file
            .file_name()
            .map(|name| filter.qualifies(&name.to_string_lossy()))
            .unwrap_or(false);
        if !qualifies {
            continue;
        }

        let Some(parent) = file.parent() else {
            continue;
        };
        let parent = utils::normalize_path(parent)?;
        let Some(package) = utils::package_identifier(&base, &parent) else {
            continue;
        };

        if seen.insert(package.clone()) {
            observer.package_discovered(&package);
            packages.push(package);
        }
    }

    packages.sort();
    Ok(packages)
}

/// Packages a test run should receive.
///
/// A non-empty `explicit` list is returned as given, without touching the
/// filesystem. Otherwise the packages are discovered under `source_root`.
pub fn resolve_test_packages(
    explicit: &[String],
    source_root: &Path,
    observer: &mut dyn DiscoveryObserver,
) -> Result<Vec<PackageIdentifier>, DiscoveryError> {
    if !explicit.is_empty() {
        return Ok(explicit.to_vec());
    }
    discover_test_packages_with(source_root, &GoTestFileFilter, observer)
}
