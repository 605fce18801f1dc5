//! Go task wrapper core
//!
//! Wraps Go toolchain subcommands as build tasks. The `test` task finds the
//! packages to test by walking the source root for `_test.go` files when no
//! packages are configured.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;
pub mod task;

pub use config::TaskConfig;
pub use discovery::{discover_test_packages, resolve_test_packages, PackageIdentifier};
pub use error::{Error, Result};
pub use task::{CommandPlan, GoTask, TaskKind, TaskRunner};
