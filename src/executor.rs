use std::process::Command as Process;
use std::time::Instant;

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::logger::{debug, warn};
use crate::printer;
use crate::task::{Command, ExecutionStatus, Task};

/// Runs task commands one after another through the system shell.
pub struct Executor<'a> {
    config: &'a AppConfig,
}

impl<'a> Executor<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self { config }
    }

    /// Stops at the first failing command when `fail_on_error` is set; the
    /// commands after it stay prepared.
    pub fn run_tasks(&self, tasks: &mut [Task]) -> Result<()> {
        for task in tasks.iter_mut() {
            debug!(
                "run_tasks: {} task for {:?} ({} command(s))",
                task.target,
                task.module_name(),
                task.commands.len()
            );
            self.run_commands(task)?;
        }
        Ok(())
    }

    pub fn run_commands(&self, task: &mut Task) -> Result<()> {
        for command in task.commands.iter_mut() {
            self.run_command(command)?;
        }
        Ok(())
    }

    pub fn run_command(&self, command: &mut Command) -> Result<()> {
        if !command.is_prepared() {
            warn!("run_command: skipping '{}' ({})", command.command, command.status);
            printer::warn(format!(
                "Skipping command {} ({})",
                command.command, command.status
            ));
            return Ok(());
        }

        printer::command_header(&command.command);
        command.status = ExecutionStatus::Running;
        let started = Instant::now();
        let outcome = shell(&command.command).status();
        command.elapsed = Some(started.elapsed());

        let status = match outcome {
            Ok(status) => status,
            Err(err) => {
                command.status = ExecutionStatus::Failed;
                return Err(err.into());
            }
        };
        // Terminated by a signal: no exit code.
        let code = status.code().unwrap_or(-1);
        debug!("run_command: '{}' exited with {}", command.command, code);

        if code == 0 {
            command.status = ExecutionStatus::Completed;
            printer::command_completed(&command.command);
        } else {
            command.status = ExecutionStatus::Failed;
            printer::command_failed(&command.command, code);
            if self.config.fail_on_error {
                return Err(Error::Execution {
                    command: command.command.clone(),
                    code,
                });
            }
        }
        printer::command_footer();
        Ok(())
    }
}

#[cfg(windows)]
fn shell(line: &str) -> Process {
    let mut process = Process::new("cmd");
    process.arg("/C").arg(line);
    process
}

#[cfg(not(windows))]
fn shell(line: &str) -> Process {
    let mut process = Process::new("sh");
    process.arg("-c").arg(line);
    process
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::task::Target;

    fn config(fail_on_error: bool) -> AppConfig {
        let yaml = format!(
            "profile: test\nroot: /\nfail_on_error: {fail_on_error}\ncommands:\n  ootb:\n    restart: 'true'\ninput:\n  build_order: o\n  module_registry: r\n"
        );
        AppConfig::from_yaml_str(&yaml).expect("config")
    }

    fn task(commands: Vec<Command>) -> Task {
        let mut task = Task::new(Target::Custom, None, Some("spec".to_string()));
        task.commands = commands;
        task
    }

    fn statuses(tasks: &[Task]) -> Vec<ExecutionStatus> {
        tasks
            .iter()
            .flat_map(|task| task.commands.iter().map(|command| command.status))
            .collect()
    }

    #[test]
    fn successful_commands_complete_with_timing() {
        let config = config(true);
        let mut tasks = vec![task(vec![Command::new("true"), Command::new("exit 0")])];
        Executor::new(&config).run_tasks(&mut tasks).expect("run");

        assert_eq!(
            statuses(&tasks),
            vec![ExecutionStatus::Completed, ExecutionStatus::Completed]
        );
        assert!(tasks[0].commands.iter().all(|c| c.elapsed.is_some()));
    }

    #[test]
    fn lenient_run_continues_after_failure() {
        let config = config(false);
        let mut tasks = vec![
            task(vec![Command::new("exit 3")]),
            task(vec![Command::new("true")]),
        ];
        Executor::new(&config).run_tasks(&mut tasks).expect("run");

        assert_eq!(
            statuses(&tasks),
            vec![ExecutionStatus::Failed, ExecutionStatus::Completed]
        );
    }

    #[test]
    fn strict_run_aborts_and_leaves_rest_prepared() {
        let config = config(true);
        let mut tasks = vec![
            task(vec![Command::new("true"), Command::new("exit 3"), Command::new("true")]),
            task(vec![Command::new("true")]),
        ];
        let err = Executor::new(&config).run_tasks(&mut tasks).unwrap_err();

        assert_eq!(err.to_string(), "Command exit 3 failed with code 3");
        assert_eq!(
            statuses(&tasks),
            vec![
                ExecutionStatus::Completed,
                ExecutionStatus::Failed,
                ExecutionStatus::Prepared,
                ExecutionStatus::Prepared,
            ]
        );
        assert!(tasks[0].commands[2].elapsed.is_none());
    }

    #[test]
    fn pre_failed_placeholder_is_never_spawned() {
        let config = config(true);
        let dir = tempfile::tempdir().expect("tempdir");
        let marker = dir.path().join("ran");
        let line = format!("touch {}", marker.display());
        let mut tasks = vec![task(vec![Command::pre_failed(line.as_str())])];

        Executor::new(&config).run_tasks(&mut tasks).expect("run");

        assert_eq!(statuses(&tasks), vec![ExecutionStatus::Failed]);
        assert!(tasks[0].commands[0].elapsed.is_none());
        assert!(!marker.exists());
    }

    #[test]
    fn commands_run_through_the_shell() {
        let config = config(true);
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("out.txt");
        let line = format!("echo first > {0} && echo second >> {0}", target.display());
        let mut tasks = vec![task(vec![Command::new(line)])];

        Executor::new(&config).run_tasks(&mut tasks).expect("run");

        let written = std::fs::read_to_string(&target).expect("output file");
        assert_eq!(written, "first\nsecond\n");
    }
}
