use std::fmt;
use std::time::Duration;

use crate::module::Module;

/// What a task asks the build tool (or the shell) to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Build,
    TestUnit,
    TestIntegration,
    Custom,
    Restart,
}

impl Target {
    pub fn name(self) -> &'static str {
        match self {
            Target::Build => "build",
            Target::TestUnit => "test_unit",
            Target::TestIntegration => "test_integration",
            Target::Custom => "custom",
            Target::Restart => "restart",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStatus {
    Prepared,
    Running,
    Completed,
    Failed,
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExecutionStatus::Prepared => "PREPARED",
            ExecutionStatus::Running => "RUNNING",
            ExecutionStatus::Completed => "COMPLETED",
            ExecutionStatus::Failed => "FAILED",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub command: String,
    pub status: ExecutionStatus,
    /// Wall time of the process, set once it has run.
    pub elapsed: Option<Duration>,
}

impl Command {
    pub fn new(command: impl Into<String>) -> Self {
        Self::with_status(command, ExecutionStatus::Prepared)
    }

    /// A command that is reported as failed and never executed.
    pub fn pre_failed(command: impl Into<String>) -> Self {
        Self::with_status(command, ExecutionStatus::Failed)
    }

    fn with_status(command: impl Into<String>, status: ExecutionStatus) -> Self {
        Self {
            command: command.into(),
            status,
            elapsed: None,
        }
    }

    pub fn is_prepared(&self) -> bool {
        self.status == ExecutionStatus::Prepared
    }
}

#[derive(Debug, Clone)]
pub struct Task {
    pub target: Target,
    pub module: Option<Module>,
    /// Build spec, test filter or custom command name, depending on `target`.
    pub spec: Option<String>,
    pub commands: Vec<Command>,
}

impl Task {
    pub fn new(target: Target, module: Option<Module>, spec: Option<String>) -> Self {
        Self {
            target,
            module,
            spec,
            commands: Vec::new(),
        }
    }

    pub fn module_name(&self) -> Option<&str> {
        self.module.as_ref().map(Module::short_name)
    }
}
