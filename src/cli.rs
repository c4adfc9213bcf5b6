use clap::{ArgAction, Parser};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::task::TaskArguments;

#[derive(Parser, Debug, Default)]
#[command(
    name = "modbuild",
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,
    arg_required_else_help = true,
    after_help = "Example: modbuild -b core_cst web_cstw -r"
)]
pub struct Cli {
    /// Configuration file (defaults to ~/.modbuild/cfg.yml, created on first run)
    #[arg(short = 'f', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Build modules: ALIAS_SPEC where SPEC combines s, t, w and c (clean first)
    #[arg(short, long, num_args = 1.., value_name = "ALIAS_SPEC")]
    pub build: Vec<String>,

    /// Run unit tests: ALIAS[_TEST_FILTER]
    #[arg(short = 'u', long, num_args = 1.., value_name = "ALIAS_FILTER")]
    pub test_unit: Vec<String>,

    /// Run integration tests: ALIAS[_TEST_FILTER]
    #[arg(short = 'i', long, num_args = 1.., value_name = "ALIAS_FILTER")]
    pub test_integration: Vec<String>,

    /// Run a suite defined in the configuration (other task flags are ignored)
    #[arg(short, long, value_name = "SUITE")]
    pub suite: Option<String>,

    /// Run custom commands defined in the configuration
    #[arg(short, long, num_args = 1.., value_name = "NAME")]
    pub custom: Vec<String>,

    /// Run the configured restart command after everything else
    #[arg(short, long)]
    pub restart: bool,

    /// List registry modules in build order and exit
    #[arg(short, long)]
    pub list: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn task_arguments(&self) -> TaskArguments {
        TaskArguments {
            build: self.build.clone(),
            test_unit: self.test_unit.clone(),
            test_integration: self.test_integration.clone(),
            custom: self.custom.clone(),
            suite: self.suite.clone(),
            restart: self.restart,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
