/// Parsed command line, as far as task construction is concerned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskArguments {
    pub build: Vec<String>,
    pub test_unit: Vec<String>,
    pub test_integration: Vec<String>,
    pub custom: Vec<String>,
    /// When set, every other field is ignored.
    pub suite: Option<String>,
    pub restart: bool,
}

impl TaskArguments {
    /// Nothing requested: no suite, no restart and no specs.
    pub fn is_empty(&self) -> bool {
        self.suite.is_none()
            && !self.restart
            && self.build.is_empty()
            && self.test_unit.is_empty()
            && self.test_integration.is_empty()
            && self.custom.is_empty()
    }
}

/// Splits `alias_spec` on the first `_`. Without one the spec is empty.
pub fn split_module_spec(raw: &str) -> (&str, &str) {
    raw.split_once('_').unwrap_or((raw, ""))
}
