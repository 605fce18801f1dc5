//! Go subcommands as tasks.
//!
//! Each task supplies the subcommand name, its configured flags, whether the
//! source folder must exist, and the packages it operates on. The
//! [`TaskRunner`] composes these into a [`CommandPlan`].

use clap::ValueEnum;

use crate::config::TaskConfig;
use crate::discovery::DiscoveryObserver;
use crate::error::Result;

pub mod build;
pub mod get;
pub mod runner;
pub mod test;
pub mod vet;

pub use build::BuildTask;
pub use get::GetTask;
pub use runner::{CommandPlan, TaskRunner};
pub use test::TestTask;
pub use vet::VetTask;

pub trait GoTask: Send + Sync {
    fn command_name(&self) -> &'static str;

    fn extra_arguments(&self, config: &TaskConfig) -> Vec<String>;

    fn is_source_folder_required(&self) -> bool;

    fn resolve_packages(
        &self,
        config: &TaskConfig,
        observer: &mut dyn DiscoveryObserver,
    ) -> Result<Vec<String>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum TaskKind {
    Test,
    Build,
    Get,
    Vet,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Test => "test",
            TaskKind::Build => "build",
            TaskKind::Get => "get",
            TaskKind::Vet => "vet",
        }
    }
}

pub fn task_for(kind: TaskKind) -> Box<dyn GoTask> {
    match kind {
        TaskKind::Test => Box::new(TestTask),
        TaskKind::Build => Box::new(BuildTask),
        TaskKind::Get => Box::new(GetTask),
        TaskKind::Vet => Box::new(VetTask),
    }
}

/// Explicit packages, unchanged. Tasks without discovery use this.
pub(crate) fn explicit_packages(config: &TaskConfig) -> Vec<String> {
    config.packages.clone()
}
