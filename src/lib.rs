#![doc = include_str!("../README.md")]

pub mod cli;
pub mod completions;
pub mod config;
pub mod error;
pub mod executor;
pub mod logger;
pub mod module;
pub mod printer;
pub mod task;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use executor::Executor;
pub use module::{Module, ModuleMap};
pub use task::{TaskArguments, TaskBuilder};

use cli::Cli;
use logger::*;

pub fn run() -> Result<()> {
    run_with_cli(cli::parse_args())
}

pub fn run_with_cli(cli: Cli) -> Result<()> {
    logger::init(cli.verbose);
    info!("start");
    debug!("cli args: {:?}", cli);

    if let Some(shell) = cli.completions {
        completions::print(shell);
        return Ok(());
    }

    let config = AppConfig::load(cli.config.as_deref())?;
    let modules = ModuleMap::load(&config)?;

    if cli.list {
        printer::print_modules(&modules);
        info!("{} end", env!("CARGO_PKG_NAME"));
        return Ok(());
    }

    dispatcher(&config, &modules, &cli.task_arguments())?;
    info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

/// Builds every task up front, runs them, and reports each command even when
/// the run was aborted.
pub fn dispatcher(config: &AppConfig, modules: &ModuleMap, arguments: &TaskArguments) -> Result<()> {
    if arguments.is_empty() {
        debug!("dispatcher: no task requested");
        printer::info("Nothing to do.");
        return Ok(());
    }

    let mut tasks = TaskBuilder::new(config, modules)
        .build_tasks(arguments)
        .map_err(|err| {
            error!("failed to build tasks: {}", err);
            err
        })?;

    if tasks.is_empty() {
        printer::info("Nothing to do.");
        return Ok(());
    }

    let outcome = Executor::new(config).run_tasks(&mut tasks);
    printer::print_summary(&tasks);
    match outcome {
        Ok(()) => {
            printer::info("Application finished successfully");
            Ok(())
        }
        Err(err) => {
            error!("failed to execute command: {}", err);
            Err(err)
        }
    }
}
