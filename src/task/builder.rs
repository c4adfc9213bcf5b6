use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::logger::{debug, trace, warn};
use crate::module::{Module, ModuleMap, SourceSet};

use super::arguments::{split_module_spec, TaskArguments};
use super::model::{Command, Target, Task};
use super::resolver::resolve_module;
use super::spec::{BuildSpec, BuildStep};

const TEST_FILTER_PROPERTY: &str = "-Dtest.includes=**/";
const UNIT_TEST_TARGET: &str = "test.unit";
const INTEGRATION_TEST_TARGET: &str = "test.integration";

/// Turns arguments (or a configured suite) into tasks with concrete commands.
pub struct TaskBuilder<'a> {
    config: &'a AppConfig,
    modules: &'a ModuleMap,
}

impl<'a> TaskBuilder<'a> {
    pub fn new(config: &'a AppConfig, modules: &'a ModuleMap) -> Self {
        Self { config, modules }
    }

    /// Either every task fits, or the first builder error is returned.
    pub fn build_tasks(&self, arguments: &TaskArguments) -> Result<Vec<Task>> {
        let tasks = match &arguments.suite {
            Some(suite) => self.build_suite_tasks(suite)?,
            None => self.build_explicit_tasks(arguments)?,
        };
        debug!(
            "build_tasks: {} task(s), {} command(s)",
            tasks.len(),
            tasks.iter().map(|task| task.commands.len()).sum::<usize>()
        );
        Ok(tasks)
    }

    fn build_explicit_tasks(&self, arguments: &TaskArguments) -> Result<Vec<Task>> {
        let mut tasks = Vec::new();

        for raw in &arguments.build {
            let (alias, spec) = split_module_spec(raw);
            tasks.push(self.build_task(self.resolve(alias)?, spec));
        }

        let test_runs = [
            (Target::TestUnit, UNIT_TEST_TARGET, &arguments.test_unit),
            (
                Target::TestIntegration,
                INTEGRATION_TEST_TARGET,
                &arguments.test_integration,
            ),
        ];
        for (target, tool_target, specs) in test_runs {
            for raw in specs {
                let (alias, filter) = split_module_spec(raw);
                let module = self.resolve(alias)?;
                tasks.push(self.test_task(target, tool_target, module, filter));
            }
        }

        for name in &arguments.custom {
            tasks.push(self.custom_task(name)?);
        }

        if arguments.restart {
            tasks.push(self.restart_task());
        }
        Ok(tasks)
    }

    fn build_suite_tasks(&self, name: &str) -> Result<Vec<Task>> {
        let suite = self
            .config
            .suites
            .get(name)
            .ok_or_else(|| Error::builder(format!("Suite {} not found", name)))?;
        debug!(
            "build_suite_tasks: '{}' build={} custom={} restart={}",
            name,
            suite.build.len(),
            suite.custom.len(),
            suite.restart
        );

        let mut tasks = Vec::new();
        for (module_name, spec) in &suite.build {
            tasks.push(self.build_task(self.resolve(module_name)?, spec));
        }
        for command_name in &suite.custom {
            tasks.push(self.custom_task(command_name)?);
        }
        if suite.restart {
            tasks.push(self.restart_task());
        }
        Ok(tasks)
    }

    fn resolve(&self, alias: &str) -> Result<&'a Module> {
        resolve_module(self.modules, &self.config.aliases, alias)
    }

    fn build_task(&self, module: &Module, spec: &str) -> Task {
        let mut task = Task::new(Target::Build, Some(module.clone()), Some(spec.to_string()));
        task.commands = self.build_commands(module, &BuildSpec::parse(spec));
        task
    }

    fn test_task(&self, target: Target, tool_target: &str, module: &Module, filter: &str) -> Task {
        let mut line = format!(
            "{} {} -f {}",
            self.config.tool.executable,
            tool_target,
            self.build_file(module, SourceSet::Test)
        );
        if !filter.is_empty() {
            line.push(' ');
            line.push_str(TEST_FILTER_PROPERTY);
            line.push_str(filter);
        }
        trace!("test command for '{}': {}", module.short_name(), line);

        let mut task = Task::new(target, Some(module.clone()), Some(filter.to_string()));
        task.commands.push(Command::new(line));
        task
    }

    fn custom_task(&self, name: &str) -> Result<Task> {
        let command = match self.config.commands.custom.get(name) {
            Some(command) => Command::new(command.as_str()),
            None if self.config.fail_on_error => {
                return Err(Error::builder(format!(
                    "Command \"{}\" not found in custom commands",
                    name
                )));
            }
            None => {
                warn!("custom command '{}' is not configured, marking it failed", name);
                Command::pre_failed(name)
            }
        };
        let mut task = Task::new(Target::Custom, None, Some(name.to_string()));
        task.commands.push(command);
        Ok(task)
    }

    fn restart_task(&self) -> Task {
        let mut task = Task::new(Target::Restart, None, None);
        task.commands
            .push(Command::new(self.config.commands.ootb.restart.as_str()));
        task
    }

    fn build_commands(&self, module: &Module, spec: &BuildSpec) -> Vec<Command> {
        let tool = &self.config.tool;
        spec.steps()
            .into_iter()
            .map(|step| {
                let line = match step {
                    BuildStep::Clean(set) => format!(
                        "{} {} -f {}",
                        tool.executable,
                        tool.clean_target,
                        self.build_file(module, set)
                    ),
                    BuildStep::Build(set) => {
                        format!("{} -f {}", tool.executable, self.build_file(module, set))
                    }
                };
                trace!("build command for '{}': {}", module.short_name(), line);
                Command::new(line)
            })
            .collect()
    }

    fn build_file(&self, module: &Module, set: SourceSet) -> String {
        if !self.config.is_test_profile() && !module.has_source_set(set) {
            warn!(
                "module '{}' has no {} directory under {}",
                module.short_name(),
                set.dir_name(),
                module.location.display()
            );
        }
        module.build_file(set)
    }
}
