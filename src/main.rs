use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use golang_wrapper_core::cli::{self, Command, DiscoverArgs, PlanArgs};
use golang_wrapper_core::discovery::{discover_test_packages, TracingObserver};
use golang_wrapper_core::logging::{self, Verbosity};
use golang_wrapper_core::output::OutputFormatter;
use golang_wrapper_core::scanner::TestIndexer;
use golang_wrapper_core::task::{task_for, TaskRunner};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet))
        .context("Cannot initialise logging")?;
    args.validate().context("Invalid arguments")?;

    let output = match &args.command {
        Command::Discover(discover) => run_discover(discover)?,
        Command::Plan(plan) => run_plan(plan)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn run_discover(args: &DiscoverArgs) -> Result<String> {
    cli::validate_dir(&args.source_dir).context("Invalid source directory")?;

    let packages = discover_test_packages(&args.source_dir)
        .with_context(|| format!("Test discovery failed in {}", args.source_dir.display()))?;
    tracing::debug!("{} test packages", packages.len());

    let tests = if args.list_tests {
        let mut indexer = TestIndexer::new()?;
        Some(indexer.index(&args.source_dir, &packages)?)
    } else {
        None
    };

    OutputFormatter::format_discovery(&args.source_dir, &packages, tests.as_deref(), args.format)
}

fn run_plan(args: &PlanArgs) -> Result<String> {
    let config = args.task_config()?;
    let task = task_for(args.task);

    let plan = TaskRunner::new(&config)
        .plan(task.as_ref(), &mut TracingObserver)
        .with_context(|| format!("Cannot plan 'go {}'", args.task.as_str()))?;

    OutputFormatter::format_plan(&plan, args.format)
}
