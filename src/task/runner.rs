use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

use crate::config::TaskConfig;
use crate::discovery::DiscoveryObserver;
use crate::error::{DiscoveryError, Result};

use super::GoTask;

/// A fully assembled Go invocation. Nothing is executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandPlan {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl CommandPlan {
    /// Space-joined for display. Empty arguments (the root package) show as `""`.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(|arg| {
                if arg.is_empty() {
                    EMPTY_ARGUMENT
                } else {
                    arg.as_str()
                }
            }))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

const EMPTY_ARGUMENT: &str = "\"\"";

pub struct TaskRunner<'a> {
    config: &'a TaskConfig,
}

impl<'a> TaskRunner<'a> {
    pub fn new(config: &'a TaskConfig) -> Self {
        Self { config }
    }

    /// Builds `<go> <command> <flags...> <packages...>` for `task`.
    pub fn plan(
        &self,
        task: &dyn GoTask,
        observer: &mut dyn DiscoveryObserver,
    ) -> Result<CommandPlan> {
        let source_dir = &self.config.source_dir;
        if task.is_source_folder_required() && !source_dir.is_dir() {
            return Err(DiscoveryError::not_found(source_dir).into());
        }

        let mut args = vec![task.command_name().to_string()];
        args.extend(task.extra_arguments(self.config));
        args.extend(task.resolve_packages(self.config, observer)?);

        let plan = CommandPlan {
            program: self.config.go_command.clone(),
            args,
            working_dir: source_dir.clone(),
        };
        debug!(
            task = task.command_name(),
            dir = %plan.working_dir.display(),
            "planned: {}",
            plan.command_line()
        );

        Ok(plan)
    }
}
