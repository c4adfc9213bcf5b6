use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Module registry error: {0}")]
    Registry(String),

    /// Raised while turning arguments into tasks; no partial task list survives it.
    #[error("{0}")]
    Builder(String),

    #[error("Command {command} failed with code {code}")]
    Execution { command: String, code: i32 },

    #[error("No home directory")]
    NoHomeDir,
}

impl Error {
    pub fn builder(msg: impl Into<String>) -> Self {
        Self::Builder(msg.into())
    }

    pub fn is_builder(&self) -> bool {
        matches!(self, Self::Builder(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
