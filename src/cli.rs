use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::config::TaskConfig;
use crate::task::TaskKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "golang-wrapper")]
#[command(about = "Go task wrapper - discover test packages and plan go commands", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List packages under a source directory that contain tests
    Discover(DiscoverArgs),

    /// Print the go command a task would run
    Plan(PlanArgs),
}

#[derive(clap::Args, Debug)]
pub struct DiscoverArgs {
    /// Go source directory to scan
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub source_dir: PathBuf,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Also list the test functions in each package
    #[arg(long)]
    pub list_tests: bool,
}

#[derive(clap::Args, Debug)]
pub struct PlanArgs {
    /// Go subcommand to plan
    #[arg(value_enum)]
    pub task: TaskKind,

    /// Task file (YAML or JSON)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Go source directory (overrides the task file)
    #[arg(long, value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// Package to pass instead of discovering. Can be specified multiple times.
    #[arg(short, long = "package", value_name = "PACKAGE")]
    pub packages: Vec<String>,

    /// Flag for the go subcommand. Can be specified multiple times.
    #[arg(long = "flag", value_name = "FLAG", allow_hyphen_values = true)]
    pub flags: Vec<String>,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if let Command::Plan(plan) = &self.command {
            if let Some(ref config_path) = plan.config {
                if !config_path.is_file() {
                    anyhow::bail!("Task file does not exist: {}", config_path.display());
                }
            }
        }
        Ok(())
    }
}

impl PlanArgs {
    /// Task file values, then command-line overrides.
    pub fn task_config(&self) -> Result<TaskConfig> {
        let mut config = match &self.config {
            Some(path) => TaskConfig::load(path)
                .with_context(|| format!("Cannot load task file: {}", path.display()))?,
            None => TaskConfig::default(),
        };

        if let Some(ref source_dir) = self.source_dir {
            config.source_dir = source_dir.clone();
        }
        if !self.packages.is_empty() {
            config.packages = self.packages.clone();
        }
        if !self.flags.is_empty() {
            *task_flags_mut(&mut config, self.task) = self.flags.clone();
        }

        Ok(config)
    }
}

fn task_flags_mut(config: &mut TaskConfig, task: TaskKind) -> &mut Vec<String> {
    match task {
        TaskKind::Test => &mut config.test_flags,
        TaskKind::Build => &mut config.build_flags,
        TaskKind::Get => &mut config.get_flags,
        TaskKind::Vet => &mut config.vet_flags,
    }
}

pub fn validate_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }
    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }
    std::fs::metadata(path)
        .with_context(|| format!("Cannot read directory: {}", path.display()))?;
    Ok(())
}
