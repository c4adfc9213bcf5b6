mod arguments;
mod builder;
mod model;
mod resolver;
mod spec;

pub use arguments::{split_module_spec, TaskArguments};
pub use builder::TaskBuilder;
pub use model::{Command, ExecutionStatus, Target, Task};
pub use resolver::{lookup_module, resolve_module, ModuleLookup};
pub use spec::{BuildSpec, BuildStep};
